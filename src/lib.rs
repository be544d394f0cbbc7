//! A horizontally paging container with a scrolling tab strip.
//!
//! The widget itself lives in [`core`] and is headless. [`tui`] hosts it in a
//! terminal, with [`documents`] as the page content for the demo binary.

pub mod core;
pub mod documents;
pub mod tui;

#[cfg(test)]
pub mod test_support;
