//! # Widget Options
//!
//! Tunable constants for a `PageMenu`. Every field has a sensible default,
//! so callers only override what they care about:
//!
//! ```rust,ignore
//! let options = PageMenuOptions {
//!     start_page: 2,
//!     ..Default::default()
//! };
//! ```

use std::time::Duration;

use super::snap::FAST_DECELERATION_RATE;

pub const DEFAULT_VISIBLE_MENU_ITEM_COUNT: usize = 3;
pub const DEFAULT_MENU_HEIGHT: f32 = 60.0;
pub const DEFAULT_MENU_ANIMATION: Duration = Duration::from_millis(250);
pub const DEFAULT_PAGE_ANIMATION: Duration = Duration::from_millis(300);

/// Widest strip the single spacer at each end can still centre every real
/// item in.
pub const MAX_VISIBLE_MENU_ITEM_COUNT: usize = 3;

/// The visible item count actually used for a requested one.
///
/// An item only sits in the centre slot if an odd number of items share the
/// strip, and with one spacer per end the first and last titles can only be
/// centred when at most three do. Anything else rounds down to 1 or 3.
pub fn supported_visible_count(requested: usize) -> usize {
    if requested >= MAX_VISIBLE_MENU_ITEM_COUNT {
        MAX_VISIBLE_MENU_ITEM_COUNT
    } else {
        1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageMenuOptions {
    /// How many menu items share the strip width. Spacers count. Only 1 and
    /// 3 are honoured; see `supported_visible_count`.
    pub visible_menu_item_count: usize,
    /// Height of the menu strip in logical units.
    pub menu_height: f32,
    /// Page shown (and reported) on first display.
    pub start_page: usize,
    /// Per-millisecond decay applied when projecting a menu fling.
    pub deceleration_rate: f32,
    pub menu_animation: Duration,
    pub page_animation: Duration,
}

impl Default for PageMenuOptions {
    fn default() -> Self {
        Self {
            visible_menu_item_count: DEFAULT_VISIBLE_MENU_ITEM_COUNT,
            menu_height: DEFAULT_MENU_HEIGHT,
            start_page: 0,
            deceleration_rate: FAST_DECELERATION_RATE,
            menu_animation: DEFAULT_MENU_ANIMATION,
            page_animation: DEFAULT_PAGE_ANIMATION,
        }
    }
}
