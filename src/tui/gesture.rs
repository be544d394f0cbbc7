//! Pointer gesture decoding.
//!
//! Terminals report raw button down / drag / up at cell coordinates. The
//! tracker remembers where a press started and turns the stream into the
//! gestures the widget understands: taps and drags on the menu strip,
//! horizontal swipes on the page pane.

use std::time::{Duration, Instant};

use log::trace;
use ratatui::layout::{Position, Rect};

use crate::core::page::PageDirection;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Columns a page drag must travel before it counts as a swipe.
const SWIPE_SLOP: u16 = 2;
/// Released past this fraction of the pane width, a swipe commits.
pub const SWIPE_COMMIT_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Press and release on the strip without moving. `x` is relative to the
    /// strip's inner area, at the centre of the cell.
    MenuTap { x: f32 },
    /// The strip was dragged; `delta` is in offset space (positive reveals
    /// later items).
    MenuDrag { delta: f32, since_last: Duration },
    MenuRelease,
    SwipeBegin(PageDirection),
    SwipeProgress(f32),
    SwipeEnd { commit: bool },
}

#[derive(Debug, Clone, Copy)]
enum Press {
    Idle,
    Menu {
        origin: u16,
        last: u16,
        last_at: Instant,
        dragging: bool,
    },
    Page {
        origin: u16,
        direction: Option<PageDirection>,
        progress: f32,
    },
}

#[derive(Debug)]
pub struct GestureTracker {
    menu_area: Rect,
    page_area: Rect,
    press: Press,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            menu_area: Rect::default(),
            page_area: Rect::default(),
            press: Press::Idle,
        }
    }

    /// Hit-test targets from the latest draw.
    pub fn set_areas(&mut self, menu_area: Rect, page_area: Rect) {
        self.menu_area = menu_area;
        self.page_area = page_area;
    }

    fn press(&mut self, col: u16, row: u16) -> Option<Gesture> {
        let position = Position::new(col, row);
        self.press = if self.menu_area.contains(position) {
            Press::Menu {
                origin: col,
                last: col,
                last_at: Instant::now(),
                dragging: false,
            }
        } else if self.page_area.contains(position) {
            Press::Page {
                origin: col,
                direction: None,
                progress: 0.0,
            }
        } else {
            Press::Idle
        };
        None
    }

    fn drag(&mut self, col: u16) -> Option<Gesture> {
        let page_width = f32::from(self.page_area.width.max(1));
        match &mut self.press {
            Press::Idle => None,
            Press::Menu {
                origin,
                last,
                last_at,
                dragging,
            } => {
                if col == *last {
                    return None;
                }
                if col != *origin {
                    *dragging = true;
                }
                let delta = f32::from(*last) - f32::from(col);
                let now = Instant::now();
                let since_last = now.duration_since(*last_at);
                *last = col;
                *last_at = now;
                Some(Gesture::MenuDrag { delta, since_last })
            }
            Press::Page {
                origin,
                direction,
                progress,
            } => {
                let dx = i32::from(col) - i32::from(*origin);
                match direction {
                    None if dx.unsigned_abs() >= u32::from(SWIPE_SLOP) => {
                        // Dragging leftwards pulls in the next page
                        let dir = if dx < 0 {
                            PageDirection::Forward
                        } else {
                            PageDirection::Reverse
                        };
                        *direction = Some(dir);
                        trace!("Swipe recognised: {dir:?}");
                        Some(Gesture::SwipeBegin(dir))
                    }
                    None => None,
                    Some(dir) => {
                        let travelled = match dir {
                            PageDirection::Forward => -dx,
                            PageDirection::Reverse => dx,
                        };
                        *progress = (travelled as f32 / page_width).clamp(0.0, 1.0);
                        Some(Gesture::SwipeProgress(*progress))
                    }
                }
            }
        }
    }

    fn release(&mut self, col: u16) -> Option<Gesture> {
        let press = std::mem::replace(&mut self.press, Press::Idle);
        match press {
            Press::Idle => None,
            Press::Menu { dragging: true, .. } => Some(Gesture::MenuRelease),
            Press::Menu { .. } => Some(Gesture::MenuTap {
                x: f32::from(col.saturating_sub(self.menu_area.x)) + 0.5,
            }),
            Press::Page {
                direction: Some(_),
                progress,
                ..
            } => Some(Gesture::SwipeEnd {
                commit: progress >= SWIPE_COMMIT_THRESHOLD,
            }),
            Press::Page { .. } => None,
        }
    }
}

impl EventHandler for GestureTracker {
    type Event = Gesture;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Gesture> {
        match *event {
            TuiEvent::MouseDown(col, row) => self.press(col, row),
            TuiEvent::MouseDrag(col, _) => self.drag(col),
            TuiEvent::MouseUp(col, _) => self.release(col),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> GestureTracker {
        let mut tracker = GestureTracker::new();
        // Menu label row inside a border at y=1; pages below
        tracker.set_areas(Rect::new(1, 1, 30, 1), Rect::new(0, 3, 40, 20));
        tracker
    }

    #[test]
    fn test_click_on_menu_is_a_tap() {
        let mut tracker = tracker();
        assert_eq!(tracker.handle_event(&TuiEvent::MouseDown(11, 1)), None);
        assert_eq!(
            tracker.handle_event(&TuiEvent::MouseUp(11, 1)),
            Some(Gesture::MenuTap { x: 10.5 })
        );
    }

    #[test]
    fn test_menu_drag_reports_offset_deltas() {
        let mut tracker = tracker();
        tracker.handle_event(&TuiEvent::MouseDown(20, 1));
        let Some(Gesture::MenuDrag { delta, .. }) = tracker.handle_event(&TuiEvent::MouseDrag(17, 1))
        else {
            panic!("expected a menu drag");
        };
        // Pointer moved left: content scrolls toward later items
        assert_eq!(delta, 3.0);
        assert_eq!(
            tracker.handle_event(&TuiEvent::MouseUp(17, 1)),
            Some(Gesture::MenuRelease)
        );
    }

    #[test]
    fn test_page_swipe_commits_past_half() {
        let mut tracker = tracker();
        tracker.handle_event(&TuiEvent::MouseDown(35, 10));
        assert_eq!(tracker.handle_event(&TuiEvent::MouseDrag(34, 10)), None);
        assert_eq!(
            tracker.handle_event(&TuiEvent::MouseDrag(33, 10)),
            Some(Gesture::SwipeBegin(PageDirection::Forward))
        );
        assert_eq!(
            tracker.handle_event(&TuiEvent::MouseDrag(11, 10)),
            Some(Gesture::SwipeProgress(0.6))
        );
        assert_eq!(
            tracker.handle_event(&TuiEvent::MouseUp(11, 10)),
            Some(Gesture::SwipeEnd { commit: true })
        );
    }

    #[test]
    fn test_short_reverse_swipe_springs_back() {
        let mut tracker = tracker();
        tracker.handle_event(&TuiEvent::MouseDown(5, 10));
        assert_eq!(
            tracker.handle_event(&TuiEvent::MouseDrag(8, 10)),
            Some(Gesture::SwipeBegin(PageDirection::Reverse))
        );
        tracker.handle_event(&TuiEvent::MouseDrag(13, 10));
        assert_eq!(
            tracker.handle_event(&TuiEvent::MouseUp(13, 10)),
            Some(Gesture::SwipeEnd { commit: false })
        );
    }

    #[test]
    fn test_page_click_without_drag_is_ignored() {
        let mut tracker = tracker();
        tracker.handle_event(&TuiEvent::MouseDown(5, 10));
        assert_eq!(tracker.handle_event(&TuiEvent::MouseUp(5, 10)), None);
    }

    #[test]
    fn test_press_outside_areas_is_ignored() {
        let mut tracker = tracker();
        tracker.handle_event(&TuiEvent::MouseDown(5, 0));
        assert_eq!(tracker.handle_event(&TuiEvent::MouseDrag(9, 0)), None);
        assert_eq!(tracker.handle_event(&TuiEvent::MouseUp(9, 0)), None);
    }
}
