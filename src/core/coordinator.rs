//! # Paging Coordinator
//!
//! The single owner of "which page is current". Menu strip and page host
//! both report what the user did; only this module decides what it means
//! and tells both views (and the delegate) the outcome.
//!
//! ```text
//!   MenuStrip ──MenuEvent──►┐                 ┌──► MenuControl::select_item
//!                           ├─► Coordinator ──┼──► PageControl::set_visible_page
//!   PageHost ──PageEvent───►┘                 └──► PageMenuDelegate::page_changed
//! ```
//!
//! ## Canonical state
//!
//! - `current_page`: the confirmed page
//! - `pending_page`: target of a swipe that has started but not settled
//! - `highlighted_menu_index`: the menu item drawn as active
//!
//! Menu indices are page indices shifted by one for the leading spacer.
//!
//! Every handler is a no-op when the incoming value already matches the
//! canonical state. The views echo the coordinator's own commands back as
//! events, and this is what stops that echo from bouncing forever.

use std::fmt;

use log::{debug, info, warn};

use super::menu::{MenuControl, MenuEvent};
use super::page::{PageControl, PageDirection, PageEvent};

/// Receives every confirmed page change, including the initial one.
pub trait PageMenuDelegate {
    fn page_changed(&mut self, page_index: usize);
}

impl<F: FnMut(usize)> PageMenuDelegate for F {
    fn page_changed(&mut self, page_index: usize) {
        self(page_index)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    CountMismatch { titles: usize, pages: usize },
    Empty,
    StartOutOfRange { start: usize, page_count: usize },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::CountMismatch { titles, pages } => {
                write!(f, "{titles} menu titles for {pages} pages")
            }
            ConstructionError::Empty => write!(f, "at least one page is required"),
            ConstructionError::StartOutOfRange { start, page_count } => {
                write!(f, "start page {start} outside 0..{page_count}")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Construction preconditions, checked before anything is built.
pub fn validate(titles: usize, pages: usize, start: usize) -> Result<(), ConstructionError> {
    if titles != pages {
        return Err(ConstructionError::CountMismatch { titles, pages });
    }
    if pages == 0 {
        return Err(ConstructionError::Empty);
    }
    if start >= pages {
        return Err(ConstructionError::StartOutOfRange {
            start,
            page_count: pages,
        });
    }
    Ok(())
}

// ============================================================================
// Index Mapping
// ============================================================================

pub fn menu_index_for_page(page_index: usize) -> usize {
    page_index + 1
}

/// `None` for the spacers (`0` and `page_count + 1`) and anything beyond.
pub fn page_index_for_menu(menu_index: usize, page_count: usize) -> Option<usize> {
    (1..=page_count)
        .contains(&menu_index)
        .then(|| menu_index - 1)
}

// ============================================================================
// Coordinator
// ============================================================================

#[derive(Debug)]
pub struct PagingCoordinator<M, H, D> {
    titles: Vec<String>,
    start_page: usize,
    menu: M,
    pages: H,
    delegate: D,
    current_page: Option<usize>,
    pending_page: Option<usize>,
    highlighted_menu_index: Option<usize>,
    appeared: bool,
}

impl<M, H, D> PagingCoordinator<M, H, D>
where
    M: MenuControl,
    H: PageControl,
    D: PageMenuDelegate,
{
    /// One page per title. Fails without building anything if the counts
    /// differ, are zero, or `start_page` is out of range.
    pub fn new(
        titles: Vec<String>,
        page_count: usize,
        start_page: usize,
        menu: M,
        pages: H,
        delegate: D,
    ) -> Result<Self, ConstructionError> {
        validate(titles.len(), page_count, start_page)?;
        info!("Page menu created: {page_count} pages, starting at {start_page}");
        Ok(Self {
            titles,
            start_page,
            menu,
            pages,
            delegate,
            current_page: Some(start_page),
            pending_page: None,
            highlighted_menu_index: Some(menu_index_for_page(start_page)),
            appeared: false,
        })
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn page_count(&self) -> usize {
        self.titles.len()
    }

    /// Spacer-adjusted count handed to the menu strip.
    pub fn menu_item_count(&self) -> usize {
        self.titles.len() + 2
    }

    pub fn current_page(&self) -> Option<usize> {
        self.current_page
    }

    pub fn pending_page(&self) -> Option<usize> {
        self.pending_page
    }

    pub fn highlighted_menu_index(&self) -> Option<usize> {
        self.highlighted_menu_index
    }

    pub fn has_appeared(&self) -> bool {
        self.appeared
    }

    pub fn menu(&self) -> &M {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut M {
        &mut self.menu
    }

    pub fn pages(&self) -> &H {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut H {
        &mut self.pages
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// First display: show the start page, highlight its tab, and tell the
    /// delegate. Runs once; later calls do nothing.
    pub fn appear(&mut self) {
        if self.appeared {
            return;
        }
        self.appeared = true;
        let start = self.start_page;
        let menu_index = menu_index_for_page(start);
        info!("Page menu appeared on page {start}");

        self.current_page = Some(start);
        self.highlighted_menu_index = Some(menu_index);
        self.pages
            .set_visible_page(start, PageDirection::Forward, false);
        self.menu.select_item(menu_index);
        self.delegate.page_changed(start);
    }

    pub fn handle_menu_event(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::ItemTapped(menu_index) => self.on_item_tapped(menu_index),
            MenuEvent::ScrollSettled => self.on_scroll_settled(),
        }
    }

    pub fn handle_page_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::TransitionWillBegin { pending } => self.on_transition_will_begin(pending),
            PageEvent::TransitionDidFinish { completed } => {
                self.on_transition_did_finish(completed)
            }
        }
    }

    fn on_item_tapped(&mut self, menu_index: usize) {
        if self.highlighted_menu_index == Some(menu_index) {
            debug!("Tap on highlighted item {menu_index} ignored");
            return;
        }
        let Some(page_index) = page_index_for_menu(menu_index, self.page_count()) else {
            debug!("Tap on spacer {menu_index} ignored");
            return;
        };
        let direction = self.menu_direction(menu_index);
        self.commit(page_index, direction, "tap");
    }

    fn on_scroll_settled(&mut self) {
        let Some(centered) = self.menu.centered_item_index() else {
            debug!("Menu settled with nothing centred");
            return;
        };
        if self.highlighted_menu_index == Some(centered) {
            return;
        }
        let Some(page_index) = page_index_for_menu(centered, self.page_count()) else {
            debug!("Menu settled on spacer {centered}");
            return;
        };
        let direction = self.menu_direction(centered);
        self.commit(page_index, direction, "menu scroll");
    }

    fn on_transition_will_begin(&mut self, pending: usize) {
        if pending >= self.page_count() {
            warn!("Ignoring transition toward page {pending} (only {} pages)", self.page_count());
            return;
        }
        debug!("Transition toward page {pending} began");
        self.pending_page = Some(pending);
    }

    fn on_transition_did_finish(&mut self, completed: bool) {
        let pending = self.pending_page.take();
        if !completed {
            debug!("Transition cancelled, staying on {:?}", self.current_page);
            return;
        }
        let Some(page_index) = pending else {
            warn!("Transition finished with no pending page");
            return;
        };
        let menu_index = menu_index_for_page(page_index);
        self.current_page = Some(page_index);
        if self.highlighted_menu_index == Some(menu_index) {
            return;
        }
        debug!("Swipe committed page {page_index}");
        self.highlighted_menu_index = Some(menu_index);
        self.menu.select_item(menu_index);
        self.delegate.page_changed(page_index);
    }

    /// Jump to `target` from code. Out-of-range and current targets are ignored.
    pub fn scroll_to_page(&mut self, target: usize) {
        if target >= self.page_count() || self.current_page == Some(target) {
            debug!("scroll_to_page({target}) ignored");
            return;
        }
        let direction = match self.current_page {
            Some(current) => PageDirection::between(current, target),
            None => PageDirection::Forward,
        };
        self.commit(target, direction, "scroll_to_page");
    }

    /// Slide direction implied by moving the highlight to `menu_index`.
    fn menu_direction(&self, menu_index: usize) -> PageDirection {
        match self.highlighted_menu_index {
            Some(highlighted) => PageDirection::between(highlighted, menu_index),
            None => PageDirection::Forward,
        }
    }

    fn commit(&mut self, page_index: usize, direction: PageDirection, source: &str) {
        let menu_index = menu_index_for_page(page_index);
        debug!(
            "{source}: page {:?} -> {page_index} ({direction:?})",
            self.current_page
        );
        self.pages.set_visible_page(page_index, direction, true);
        self.highlighted_menu_index = Some(menu_index);
        self.current_page = Some(page_index);
        self.pending_page = None;
        self.menu.select_item(menu_index);
        self.delegate.page_changed(page_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        RecordingDelegate, RecordingMenu, RecordingPages, recording_coordinator,
    };

    type Recorded = PagingCoordinator<RecordingMenu, RecordingPages, RecordingDelegate>;

    /// Titles A, B, C starting on page 1, already displayed, call logs cleared.
    fn appeared_abc() -> Recorded {
        let mut coordinator = recording_coordinator(&["A", "B", "C"], 1).unwrap();
        coordinator.appear();
        coordinator.menu_mut().selected.clear();
        coordinator.pages_mut().calls.clear();
        coordinator.delegate_mut().changes.clear();
        coordinator
    }

    fn assert_untouched(coordinator: &Recorded) {
        assert!(coordinator.menu().selected.is_empty());
        assert!(coordinator.pages().calls.is_empty());
        assert!(coordinator.delegate().changes.is_empty());
    }

    #[test]
    fn test_validation_rejects_bad_input() {
        assert_eq!(
            validate(2, 3, 0),
            Err(ConstructionError::CountMismatch { titles: 2, pages: 3 })
        );
        assert_eq!(validate(0, 0, 0), Err(ConstructionError::Empty));
        assert_eq!(
            validate(3, 3, 3),
            Err(ConstructionError::StartOutOfRange { start: 3, page_count: 3 })
        );
        assert_eq!(validate(3, 3, 2), Ok(()));
    }

    #[test]
    fn test_construction_error_messages() {
        let err = ConstructionError::CountMismatch { titles: 2, pages: 3 };
        assert_eq!(err.to_string(), "2 menu titles for 3 pages");
        assert!(ConstructionError::Empty.to_string().contains("at least one"));
    }

    #[test]
    fn test_index_mapping_round_trips() {
        for page_count in 1..6 {
            for page in 0..page_count {
                let menu = menu_index_for_page(page);
                assert_eq!(page_index_for_menu(menu, page_count), Some(page));
            }
            assert_eq!(page_index_for_menu(0, page_count), None);
            assert_eq!(page_index_for_menu(page_count + 1, page_count), None);
        }
    }

    #[test]
    fn test_initial_state_before_display() {
        let coordinator = recording_coordinator(&["A", "B", "C"], 1).unwrap();
        assert_eq!(coordinator.current_page(), Some(1));
        assert_eq!(coordinator.highlighted_menu_index(), Some(2));
        assert_eq!(coordinator.pending_page(), None);
        assert_eq!(coordinator.menu_item_count(), 5);
        assert!(coordinator.delegate().changes.is_empty());
    }

    #[test]
    fn test_appear_reports_start_page_once() {
        let mut coordinator = recording_coordinator(&["A", "B", "C"], 1).unwrap();
        coordinator.appear();
        coordinator.appear();
        assert_eq!(coordinator.delegate().changes, vec![1]);
        assert_eq!(coordinator.menu().selected, vec![2]);
        assert_eq!(
            coordinator.pages().calls,
            vec![(1, PageDirection::Forward, false)]
        );
    }

    #[test]
    fn test_tap_moves_forward() {
        let mut coordinator = appeared_abc();
        coordinator.handle_menu_event(MenuEvent::ItemTapped(3));
        assert_eq!(
            coordinator.pages().calls,
            vec![(2, PageDirection::Forward, true)]
        );
        assert_eq!(coordinator.menu().selected, vec![3]);
        assert_eq!(coordinator.delegate().changes, vec![2]);
        assert_eq!(coordinator.highlighted_menu_index(), Some(3));
        assert_eq!(coordinator.current_page(), Some(2));
    }

    #[test]
    fn test_tap_moves_backward() {
        let mut coordinator = appeared_abc();
        coordinator.handle_menu_event(MenuEvent::ItemTapped(1));
        assert_eq!(
            coordinator.pages().calls,
            vec![(0, PageDirection::Reverse, true)]
        );
        assert_eq!(coordinator.delegate().changes, vec![0]);
    }

    #[test]
    fn test_tap_on_highlighted_or_spacer_is_ignored() {
        let mut coordinator = appeared_abc();
        coordinator.handle_menu_event(MenuEvent::ItemTapped(2));
        coordinator.handle_menu_event(MenuEvent::ItemTapped(0));
        coordinator.handle_menu_event(MenuEvent::ItemTapped(4));
        coordinator.handle_menu_event(MenuEvent::ItemTapped(99));
        assert_untouched(&coordinator);
        assert_eq!(coordinator.current_page(), Some(1));
    }

    #[test]
    fn test_scroll_settle_follows_centred_item() {
        let mut coordinator = appeared_abc();
        coordinator.menu_mut().centered = Some(1);
        coordinator.handle_menu_event(MenuEvent::ScrollSettled);
        assert_eq!(
            coordinator.pages().calls,
            vec![(0, PageDirection::Reverse, true)]
        );
        assert_eq!(coordinator.menu().selected, vec![1]);
        assert_eq!(coordinator.delegate().changes, vec![0]);
    }

    #[test]
    fn test_scroll_settle_guards() {
        let mut coordinator = appeared_abc();
        for centered in [None, Some(2), Some(0), Some(4)] {
            coordinator.menu_mut().centered = centered;
            coordinator.handle_menu_event(MenuEvent::ScrollSettled);
        }
        assert_untouched(&coordinator);
    }

    #[test]
    fn test_completed_swipe_updates_menu_and_delegate() {
        let mut coordinator = appeared_abc();
        coordinator.handle_page_event(PageEvent::TransitionWillBegin { pending: 2 });
        assert_eq!(coordinator.pending_page(), Some(2));
        assert_eq!(coordinator.current_page(), Some(1));

        coordinator.handle_page_event(PageEvent::TransitionDidFinish { completed: true });
        assert_eq!(coordinator.current_page(), Some(2));
        assert_eq!(coordinator.pending_page(), None);
        assert_eq!(coordinator.highlighted_menu_index(), Some(3));
        assert_eq!(coordinator.menu().selected, vec![3]);
        assert_eq!(coordinator.delegate().changes, vec![2]);
        // The host already shows the page; no command goes back to it
        assert!(coordinator.pages().calls.is_empty());
    }

    #[test]
    fn test_cancelled_swipe_changes_nothing() {
        let mut coordinator = appeared_abc();
        coordinator.handle_page_event(PageEvent::TransitionWillBegin { pending: 0 });
        coordinator.handle_page_event(PageEvent::TransitionDidFinish { completed: false });
        assert_eq!(coordinator.current_page(), Some(1));
        assert_eq!(coordinator.highlighted_menu_index(), Some(2));
        assert_eq!(coordinator.pending_page(), None);
        assert_untouched(&coordinator);
    }

    #[test]
    fn test_out_of_range_pending_is_ignored() {
        let mut coordinator = appeared_abc();
        coordinator.handle_page_event(PageEvent::TransitionWillBegin { pending: 7 });
        assert_eq!(coordinator.pending_page(), None);
        coordinator.handle_page_event(PageEvent::TransitionDidFinish { completed: true });
        assert_eq!(coordinator.current_page(), Some(1));
        assert_untouched(&coordinator);
    }

    #[test]
    fn test_swipe_back_to_same_page_does_not_renotify() {
        let mut coordinator = appeared_abc();
        coordinator.handle_page_event(PageEvent::TransitionWillBegin { pending: 1 });
        coordinator.handle_page_event(PageEvent::TransitionDidFinish { completed: true });
        assert_untouched(&coordinator);
    }

    #[test]
    fn test_scroll_to_page() {
        let mut coordinator = appeared_abc();
        coordinator.scroll_to_page(1);
        coordinator.scroll_to_page(3);
        assert_untouched(&coordinator);

        coordinator.scroll_to_page(0);
        assert_eq!(
            coordinator.pages().calls,
            vec![(0, PageDirection::Reverse, true)]
        );
        assert_eq!(coordinator.menu().selected, vec![1]);
        assert_eq!(coordinator.delegate().changes, vec![0]);
        assert_eq!(coordinator.current_page(), Some(0));
    }

    #[test]
    fn test_tap_clears_pending_swipe() {
        let mut coordinator = appeared_abc();
        coordinator.handle_page_event(PageEvent::TransitionWillBegin { pending: 2 });
        coordinator.handle_menu_event(MenuEvent::ItemTapped(1));
        assert_eq!(coordinator.pending_page(), None);
        assert_eq!(coordinator.current_page(), Some(0));
    }

    #[test]
    fn test_closure_delegate() {
        let mut seen = Vec::new();
        {
            let mut coordinator = PagingCoordinator::new(
                vec!["A".to_string(), "B".to_string()],
                2,
                0,
                RecordingMenu::default(),
                RecordingPages::default(),
                |page: usize| seen.push(page),
            )
            .unwrap();
            coordinator.appear();
            coordinator.scroll_to_page(1);
        }
        assert_eq!(seen, vec![0, 1]);
    }
}
