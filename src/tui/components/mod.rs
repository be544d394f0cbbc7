//! # TUI Components
//!
//! This module contains the UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `StatusBar`: Bottom line with the page position and key hints
//!
//! ### Stateful Components (Borrowed State)
//!
//! Render wrappers built fresh each frame around state owned elsewhere:
//! - `MenuBar`: Borrows the `PageMenu` to size its strip and draw label cells
//! - `PageView`: Borrows the `PageHost` for content and `PageViewState` for
//!   per-page scroll positions
//!
//! Neither wrapper interprets input. Gestures are decoded in `tui::mod` and
//! fed to the widget, which routes the resulting events itself.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── menu_bar.rs    (Scrolling tab strip)
//! ├── page_view.rs   (Scrollable, sliding page pane)
//! └── status_bar.rs  (Bottom status line)
//! ```

mod menu_bar;
mod page_view;
mod status_bar;

pub use menu_bar::MenuBar;
pub use page_view::{PageView, PageViewState};
pub use status_bar::StatusBar;
