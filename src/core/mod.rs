//! # Core Widget Logic
//!
//! This module contains the page menu's behaviour.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • MenuStrip (tabs)     │
//!                    │  • PageHost (pages)     │
//!                    │  • Coordinator (sync)   │
//!                    │  • snap (fling rest)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    GUI     │      │   Tests    │
//!     │  Adapter   │      │  Adapter   │      │ (doubles)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`coordinator`]: canonical page/highlight state and the event handlers
//! - [`menu`]: the scrolling tab strip and its gestures
//! - [`page`]: the paging surface and swipe lifecycle
//! - [`snap`]: rest-offset selection for flings
//! - [`page_menu`]: everything above assembled into one widget
//! - [`config`]: config file loading and override resolution

pub mod animation;
pub mod cell;
pub mod config;
pub mod coordinator;
pub mod geometry;
pub mod menu;
pub mod options;
pub mod page;
pub mod page_menu;
pub mod snap;

// Re-export commonly used types for convenience
pub use coordinator::{ConstructionError, PageMenuDelegate, PagingCoordinator};
pub use menu::{MenuControl, MenuEvent, MenuItem, MenuStrip};
pub use options::PageMenuOptions;
pub use page::{PageControl, PageDirection, PageEvent, PageHost, PageProvider};
pub use page_menu::PageMenu;
