//! # Menu Strip
//!
//! Horizontally scrolling row of menu titles, bracketed by two invisible
//! spacer items so that the first and last real titles can sit in the
//! centre slot:
//!
//! ```text
//!        viewport (3 visible items)
//!   ┌──────────┬──────────┬──────────┐
//!   │ (spacer) │  Inbox   │  Drafts  │  Sent  │ (spacer)
//!   └──────────┴──────────┴──────────┘
//!        0          1          2         3         4
//! ```
//!
//! ## Responsibilities
//!
//! - Item geometry: `viewport_width / visible_count` wide, full height, no gaps
//! - Content offset, clamped to the scrollable range
//! - User gestures: tap, drag, fling (snapped through `snap`)
//! - Programmatic `select_item`, which centres an item
//!
//! The strip never decides which page is current. It only reports what
//! happened (`MenuEvent`) and obeys `MenuControl` calls from the coordinator.
//!
//! ## Settle semantics
//!
//! `ScrollSettled` is emitted only when a *user-driven* motion comes to rest
//! (drag release, fling deceleration, keyboard nudge). Programmatic
//! `select_item` animations finish silently, so the coordinator never hears
//! back about its own commands.

use std::time::Duration;

use log::{debug, trace};

use super::animation::Tween;
use super::geometry::{Frame, Point, Size};
use super::options::{PageMenuOptions, supported_visible_count};
use super::snap::{project_fling, target_rest_offset};

/// One entry in the strip. Spacers carry an empty title and map to no page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub is_spacer: bool,
}

impl MenuItem {
    pub fn tab(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_spacer: false,
        }
    }

    pub fn spacer() -> Self {
        Self {
            title: String::new(),
            is_spacer: true,
        }
    }
}

/// `[spacer] + titles + [spacer]`
pub fn items_with_spacers(titles: &[String]) -> Vec<MenuItem> {
    let mut items = Vec::with_capacity(titles.len() + 2);
    items.push(MenuItem::spacer());
    items.extend(titles.iter().map(MenuItem::tab));
    items.push(MenuItem::spacer());
    items
}

/// Events raised by the strip for the coordinator to reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ItemTapped(usize),
    ScrollSettled,
}

/// The slice of the strip the coordinator is allowed to drive.
pub trait MenuControl {
    /// Centre item `index` (animated) and mark it selected.
    fn select_item(&mut self, index: usize);
    /// Item under the viewport's centre point, if any.
    fn centered_item_index(&self) -> Option<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MotionKind {
    /// Started by `select_item`; finishes silently.
    Programmatic,
    /// Started by a drag release or nudge; finishing emits `ScrollSettled`.
    Deceleration,
}

#[derive(Debug, Clone, Copy)]
struct Motion {
    tween: Tween,
    kind: MotionKind,
}

#[derive(Debug, Clone, Copy, Default)]
struct DragTracker {
    velocity: f32,
}

#[derive(Debug, Clone)]
pub struct MenuStrip {
    items: Vec<MenuItem>,
    visible_count: usize,
    viewport: Size,
    offset: f32,
    selected: Option<usize>,
    motion: Option<Motion>,
    drag: Option<DragTracker>,
    deceleration_rate: f32,
    animation: Duration,
}

impl MenuStrip {
    pub fn new(titles: &[String], options: &PageMenuOptions) -> Self {
        Self {
            items: items_with_spacers(titles),
            visible_count: supported_visible_count(options.visible_menu_item_count),
            viewport: Size::default(),
            offset: 0.0,
            selected: None,
            motion: None,
            drag: None,
            deceleration_rate: options.deceleration_rate,
            animation: options.menu_animation,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn visible_item_count(&self) -> usize {
        self.visible_count
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn content_offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn item_size(&self) -> Size {
        Size::new(
            self.viewport.width / self.visible_count as f32,
            self.viewport.height,
        )
    }

    pub fn item_frames(&self) -> Vec<Frame> {
        let size = self.item_size();
        (0..self.items.len())
            .map(|i| Frame::new(i as f32 * size.width, 0.0, size.width, size.height))
            .collect()
    }

    fn max_offset(&self) -> f32 {
        let content = self.items.len() as f32 * self.item_size().width;
        (content - self.viewport.width).max(0.0)
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Offset at which item `index` sits in the centre of the viewport.
    pub fn centered_offset_for(&self, index: usize) -> f32 {
        let width = self.item_size().width;
        let item_center = index as f32 * width + width / 2.0;
        self.clamp_offset(item_center - self.viewport.width / 2.0)
    }

    /// Update the container size. Any motion is dropped and the selected
    /// item is re-centred, since old offsets are meaningless at a new width.
    pub fn set_viewport(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        debug!(
            "Menu viewport {}x{} -> {}x{}",
            self.viewport.width, self.viewport.height, viewport.width, viewport.height
        );
        self.viewport = viewport;
        self.motion = None;
        self.offset = match self.selected {
            Some(index) => self.centered_offset_for(index),
            None => self.clamp_offset(self.offset),
        };
    }

    /// Hit-test a viewport-relative x coordinate.
    pub fn item_index_at(&self, viewport_x: f32) -> Option<usize> {
        let width = self.item_size().width;
        if width <= 0.0 {
            return None;
        }
        let content_x = self.offset + viewport_x;
        if content_x < 0.0 {
            return None;
        }
        let index = (content_x / width).floor() as usize;
        (index < self.items.len()).then_some(index)
    }

    /// A tap at a viewport-relative x coordinate. Spacers are reported too;
    /// rejecting them is the coordinator's job.
    pub fn tap_at(&mut self, viewport_x: f32) -> Option<MenuEvent> {
        let index = self.item_index_at(viewport_x)?;
        trace!("Menu tap at x={viewport_x} -> item {index}");
        Some(MenuEvent::ItemTapped(index))
    }

    pub fn begin_drag(&mut self) {
        self.motion = None;
        self.drag = Some(DragTracker::default());
    }

    /// Move the content by `delta` (offset space: positive reveals later
    /// items). `since_last` feeds the release-velocity estimate.
    pub fn drag_by(&mut self, delta: f32, since_last: Duration) {
        let Some(tracker) = self.drag.as_mut() else {
            return;
        };
        let secs = since_last.as_secs_f32();
        if secs > 0.0 {
            let instantaneous = delta / secs;
            // Light smoothing so one jittery sample does not dominate the fling
            tracker.velocity = tracker.velocity * 0.2 + instantaneous * 0.8;
        }
        self.offset = self.clamp_offset(self.offset + delta);
    }

    /// Release the drag and fling with the tracked velocity.
    pub fn end_drag(&mut self) -> Option<MenuEvent> {
        let tracker = self.drag.take()?;
        self.fling(tracker.velocity)
    }

    /// Project a fling, snap it to an item boundary and decelerate there.
    /// Returns `ScrollSettled` right away if the strip is already at rest.
    pub fn fling(&mut self, velocity: f32) -> Option<MenuEvent> {
        let projected = self.clamp_offset(project_fling(self.offset, velocity, self.deceleration_rate));
        self.decelerate_to(projected, velocity)
    }

    /// Keyboard nudge: behave like a fling that travels `items` item widths.
    pub fn scroll_by_items(&mut self, items: isize) -> Option<MenuEvent> {
        self.drag = None;
        let base = self.motion.map_or(self.offset, |m| m.tween.target());
        let width = self.item_size().width;
        let projected = self.clamp_offset(base + items as f32 * width);
        self.decelerate_to(projected, 0.0)
    }

    fn decelerate_to(&mut self, proposed: f32, velocity: f32) -> Option<MenuEvent> {
        let rest = target_rest_offset(
            Point::new(proposed, 0.0),
            Point::new(velocity, 0.0),
            self.viewport,
            0.0,
            &self.item_frames(),
        );
        let rest = self.clamp_offset(rest.x);
        debug!(
            "Menu fling: offset={} velocity={} proposed={} rest={}",
            self.offset, velocity, proposed, rest
        );

        if (rest - self.offset).abs() < f32::EPSILON {
            self.offset = rest;
            self.motion = None;
            return Some(MenuEvent::ScrollSettled);
        }
        self.motion = Some(Motion {
            tween: Tween::new(self.offset, rest, self.animation),
            kind: MotionKind::Deceleration,
        });
        None
    }

    /// Advance any running motion by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Option<MenuEvent> {
        let motion = self.motion.as_mut()?;
        motion.tween.advance(dt);
        self.offset = motion.tween.value();
        if !motion.tween.is_finished() {
            return None;
        }
        let kind = motion.kind;
        self.motion = None;
        match kind {
            MotionKind::Deceleration => {
                trace!("Menu deceleration finished at offset {}", self.offset);
                Some(MenuEvent::ScrollSettled)
            }
            MotionKind::Programmatic => None,
        }
    }
}

impl MenuControl for MenuStrip {
    fn select_item(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "menu item {index} out of range (strip has {} items)",
            self.items.len()
        );
        self.selected = Some(index);
        self.drag = None;
        let target = self.centered_offset_for(index);
        if self.viewport.is_empty() || (target - self.offset).abs() < f32::EPSILON {
            self.offset = target;
            self.motion = None;
            return;
        }
        self.motion = Some(Motion {
            tween: Tween::new(self.offset, target, self.animation),
            kind: MotionKind::Programmatic,
        });
    }

    fn centered_item_index(&self) -> Option<usize> {
        if self.viewport.is_empty() || self.items.is_empty() {
            return None;
        }
        let center = Point::new(self.offset + self.viewport.width / 2.0, self.viewport.height / 2.0);
        self.item_frames()
            .iter()
            .position(|frame| frame.contains(center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    fn strip(titles: &[&str]) -> MenuStrip {
        let titles: Vec<String> = titles.iter().map(|t| t.to_string()).collect();
        let mut strip = MenuStrip::new(&titles, &PageMenuOptions::default());
        strip.set_viewport(Size::new(300.0, 60.0));
        strip
    }

    fn run_to_rest(strip: &mut MenuStrip) -> Vec<MenuEvent> {
        let mut events = Vec::new();
        for _ in 0..200 {
            if let Some(event) = strip.tick(TICK) {
                events.push(event);
            }
            if !strip.is_animating() {
                break;
            }
        }
        events
    }

    #[test]
    fn test_items_are_bracketed_by_spacers() {
        let titles = vec!["A".to_string(), "B".to_string()];
        let items = items_with_spacers(&titles);
        assert_eq!(items.len(), 4);
        assert!(items[0].is_spacer && items[0].title.is_empty());
        assert!(items[3].is_spacer && items[3].title.is_empty());
        assert_eq!(items[1], MenuItem::tab("A"));
    }

    #[test]
    fn test_item_size_divides_viewport() {
        let strip = strip(&["A", "B", "C"]);
        assert_eq!(strip.item_count(), 5);
        assert_eq!(strip.visible_item_count(), 3);
        assert_eq!(strip.item_size(), Size::new(100.0, 60.0));
        let frames = strip.item_frames();
        assert_eq!(frames[2], Frame::new(200.0, 0.0, 100.0, 60.0));
    }

    #[test]
    fn test_even_or_wide_counts_fall_back_to_centrable() {
        let titles: Vec<String> = ["A", "B"].iter().map(|t| t.to_string()).collect();
        for (requested, used) in [(2, 1), (4, 3)] {
            let options = PageMenuOptions {
                visible_menu_item_count: requested,
                ..Default::default()
            };
            let mut strip = MenuStrip::new(&titles, &options);
            assert_eq!(strip.visible_item_count(), used);
            strip.set_viewport(Size::new(300.0, 60.0));
            strip.select_item(1);
            run_to_rest(&mut strip);
            assert_eq!(strip.centered_item_index(), Some(1));
        }
    }

    #[test]
    fn test_select_item_centres_real_items() {
        let mut strip = strip(&["A", "B", "C", "D"]);
        for index in 1..=4 {
            strip.select_item(index);
            run_to_rest(&mut strip);
            assert_eq!(strip.content_offset(), (index - 1) as f32 * 100.0);
            assert_eq!(strip.centered_item_index(), Some(index));
            assert_eq!(strip.selected_index(), Some(index));
        }
    }

    #[test]
    fn test_programmatic_selection_never_settles() {
        let mut strip = strip(&["A", "B", "C", "D"]);
        strip.select_item(3);
        assert!(strip.is_animating());
        assert!(run_to_rest(&mut strip).is_empty());
    }

    #[test]
    fn test_select_before_layout_recentres_on_viewport() {
        let titles = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut strip = MenuStrip::new(&titles, &PageMenuOptions::default());
        strip.select_item(3);
        assert!(!strip.is_animating());
        assert_eq!(strip.centered_item_index(), None);

        strip.set_viewport(Size::new(300.0, 60.0));
        assert_eq!(strip.content_offset(), 200.0);
        assert_eq!(strip.centered_item_index(), Some(3));
    }

    #[test]
    fn test_tap_reports_item_under_point() {
        let mut strip = strip(&["A", "B", "C"]);
        strip.select_item(2);
        run_to_rest(&mut strip);
        // offset 100: viewport x=0 is item 1, x=250 is item 3
        assert_eq!(strip.tap_at(0.0), Some(MenuEvent::ItemTapped(1)));
        assert_eq!(strip.tap_at(250.0), Some(MenuEvent::ItemTapped(3)));
        assert_eq!(strip.tap_at(5000.0), None);
    }

    #[test]
    fn test_drag_release_snaps_and_settles_once() {
        let mut strip = strip(&["A", "B", "C", "D", "E"]);
        strip.begin_drag();
        strip.drag_by(40.0, Duration::from_millis(100));
        strip.drag_by(25.0, Duration::from_millis(100));
        assert!(strip.end_drag().is_none());

        let events = run_to_rest(&mut strip);
        assert_eq!(events, vec![MenuEvent::ScrollSettled]);
        assert_eq!(strip.content_offset() % 100.0, 0.0);
        assert!(!strip.is_dragging());
    }

    #[test]
    fn test_release_at_boundary_settles_immediately() {
        let mut strip = strip(&["A", "B", "C"]);
        strip.begin_drag();
        strip.drag_by(0.0, Duration::from_millis(100));
        assert_eq!(strip.end_drag(), Some(MenuEvent::ScrollSettled));
    }

    #[test]
    fn test_drag_is_clamped_to_content() {
        let mut strip = strip(&["A", "B", "C"]);
        strip.begin_drag();
        strip.drag_by(-500.0, Duration::from_millis(10));
        assert_eq!(strip.content_offset(), 0.0);
        strip.drag_by(5000.0, Duration::from_millis(10));
        // 5 items * 100 - 300 viewport
        assert_eq!(strip.content_offset(), 200.0);
    }

    #[test]
    fn test_keyboard_nudge_moves_one_item() {
        let mut strip = strip(&["A", "B", "C", "D"]);
        strip.select_item(1);
        run_to_rest(&mut strip);
        assert!(strip.scroll_by_items(1).is_none());
        let events = run_to_rest(&mut strip);
        assert_eq!(events, vec![MenuEvent::ScrollSettled]);
        assert_eq!(strip.centered_item_index(), Some(2));
    }

    #[test]
    fn test_centered_index_none_without_layout() {
        let titles = vec!["A".to_string()];
        let strip = MenuStrip::new(&titles, &PageMenuOptions::default());
        assert_eq!(strip.centered_item_index(), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_out_of_range_is_fatal() {
        let mut strip = strip(&["A"]);
        strip.select_item(7);
    }
}
