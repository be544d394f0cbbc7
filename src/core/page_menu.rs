//! # PageMenu
//!
//! The assembled widget: a `MenuStrip`, a `PageHost` and the
//! `PagingCoordinator` that keeps them in step, plus the label-cell pool the
//! strip draws from.
//!
//! Adapters feed raw gestures in through the methods below. Each gesture is
//! forwarded to the view it belongs to, and whatever event that view raises
//! is handed straight to the coordinator. Adapters never interpret events
//! themselves.

use std::time::Duration;

use log::{trace, warn};

use super::cell::{CellPool, LabelCell, MenuItemRenderer, TitleRenderer};
use super::coordinator::{ConstructionError, PageMenuDelegate, PagingCoordinator, validate};
use super::geometry::Size;
use super::menu::{MenuControl, MenuStrip};
use super::options::{PageMenuOptions, supported_visible_count};
use super::page::{PageDirection, PageHost, PageProvider};

pub type PageMenuCoordinator<S, D> = PagingCoordinator<MenuStrip, PageHost<S>, D>;

pub struct PageMenu<S: PageProvider, D: PageMenuDelegate> {
    coordinator: PageMenuCoordinator<S, D>,
    cells: CellPool,
    renderer: Box<dyn MenuItemRenderer>,
    options: PageMenuOptions,
}

impl<S: PageProvider, D: PageMenuDelegate> PageMenu<S, D> {
    pub fn new(
        titles: Vec<String>,
        pages: S,
        mut options: PageMenuOptions,
        delegate: D,
    ) -> Result<Self, ConstructionError> {
        let page_count = pages.page_count();
        validate(titles.len(), page_count, options.start_page)?;

        let visible = supported_visible_count(options.visible_menu_item_count);
        if visible != options.visible_menu_item_count {
            warn!(
                "{} visible menu items cannot centre every tab, using {visible}",
                options.visible_menu_item_count
            );
            options.visible_menu_item_count = visible;
        }

        let menu = MenuStrip::new(&titles, &options);
        let host = PageHost::new(pages, options.page_animation);
        let coordinator =
            PagingCoordinator::new(titles, page_count, options.start_page, menu, host, delegate)?;

        let mut cells = CellPool::new();
        cells.register(LabelCell::REUSE_IDENTIFIER);

        Ok(Self {
            coordinator,
            cells,
            renderer: Box::new(TitleRenderer),
            options,
        })
    }

    /// Swap the hook that fills menu cells.
    pub fn with_renderer(mut self, renderer: impl MenuItemRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn options(&self) -> &PageMenuOptions {
        &self.options
    }

    pub fn coordinator(&self) -> &PageMenuCoordinator<S, D> {
        &self.coordinator
    }

    pub fn menu(&self) -> &MenuStrip {
        self.coordinator.menu()
    }

    pub fn pages(&self) -> &PageHost<S> {
        self.coordinator.pages()
    }

    pub fn delegate(&self) -> &D {
        self.coordinator.delegate()
    }

    pub fn current_page(&self) -> Option<usize> {
        self.coordinator.current_page()
    }

    pub fn highlighted_menu_index(&self) -> Option<usize> {
        self.coordinator.highlighted_menu_index()
    }

    /// Pool access for hosts that register extra identifiers.
    pub fn cell_pool_mut(&mut self) -> &mut CellPool {
        &mut self.cells
    }

    /// A configured label cell for menu item `index`.
    ///
    /// # Panics
    ///
    /// If the reuse pool cannot supply a cell, or `index` is not a menu item.
    /// Either means the host broke the rendering contract.
    pub fn menu_item_at(&mut self, index: usize) -> LabelCell {
        let Some(mut cell) = self.cells.dequeue(LabelCell::REUSE_IDENTIFIER) else {
            panic!("failed to dequeue a {} for menu item {index}", LabelCell::REUSE_IDENTIFIER);
        };
        let highlighted = self.coordinator.highlighted_menu_index() == Some(index);
        let Some(item) = self.coordinator.menu().items().get(index) else {
            panic!(
                "menu item {index} requested from a strip of {}",
                self.coordinator.menu().item_count()
            );
        };
        self.renderer.configure(&mut cell, index, item, highlighted);
        cell
    }

    /// Hand a drawn cell back for reuse.
    pub fn recycle_cell(&mut self, cell: LabelCell) {
        self.cells.enqueue(LabelCell::REUSE_IDENTIFIER, cell);
    }

    pub fn appear(&mut self) {
        self.coordinator.appear();
    }

    pub fn scroll_to_page(&mut self, index: usize) {
        self.coordinator.scroll_to_page(index);
    }

    pub fn set_menu_viewport(&mut self, viewport: Size) {
        self.coordinator.menu_mut().set_viewport(viewport);
    }

    pub fn is_animating(&self) -> bool {
        self.menu().is_animating() || self.pages().is_animating()
    }

    /// Advance both views' animations and reconcile whatever settled.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(event) = self.coordinator.menu_mut().tick(dt) {
            trace!("Menu tick raised {event:?}");
            self.coordinator.handle_menu_event(event);
        }
        if let Some(event) = self.coordinator.pages_mut().tick(dt) {
            trace!("Page tick raised {event:?}");
            self.coordinator.handle_page_event(event);
        }
    }

    // ------------------------------------------------------------------------
    // Menu gestures
    // ------------------------------------------------------------------------

    pub fn tap_menu(&mut self, viewport_x: f32) {
        if let Some(event) = self.coordinator.menu_mut().tap_at(viewport_x) {
            self.coordinator.handle_menu_event(event);
        }
    }

    pub fn begin_menu_drag(&mut self) {
        self.coordinator.menu_mut().begin_drag();
    }

    pub fn drag_menu(&mut self, delta: f32, since_last: Duration) {
        self.coordinator.menu_mut().drag_by(delta, since_last);
    }

    pub fn end_menu_drag(&mut self) {
        if let Some(event) = self.coordinator.menu_mut().end_drag() {
            self.coordinator.handle_menu_event(event);
        }
    }

    /// Fling the strip `items` positions; the page follows once it settles.
    pub fn nudge_menu(&mut self, items: isize) {
        if let Some(event) = self.coordinator.menu_mut().scroll_by_items(items) {
            self.coordinator.handle_menu_event(event);
        }
    }

    // ------------------------------------------------------------------------
    // Page gestures
    // ------------------------------------------------------------------------

    pub fn begin_page_swipe(&mut self, direction: PageDirection) -> bool {
        match self.coordinator.pages_mut().begin_swipe(direction) {
            Some(event) => {
                self.coordinator.handle_page_event(event);
                true
            }
            None => false,
        }
    }

    pub fn update_page_swipe(&mut self, progress: f32) {
        self.coordinator.pages_mut().update_swipe(progress);
    }

    pub fn end_page_swipe(&mut self, commit: bool) {
        if let Some(event) = self.coordinator.pages_mut().end_swipe(commit) {
            self.coordinator.handle_page_event(event);
        }
    }

    /// A complete, committed swipe toward `direction` (keyboard paging).
    pub fn swipe(&mut self, direction: PageDirection) {
        if self.begin_page_swipe(direction) {
            self.end_page_swipe(true);
        }
    }

    /// Centre item index as the strip currently sees it.
    pub fn centered_menu_index(&self) -> Option<usize> {
        self.menu().centered_item_index()
    }
}
