//! # PageView Component
//!
//! Renders the `PageHost`: the visible document at rest, or two documents
//! sliding past each other while a transition is in flight.
//!
//! ## Responsibilities
//!
//! - Wrap each document into a bordered, vertically scrollable pane
//! - Keep a scroll position per page, so returning to a page restores it
//! - Composite the outgoing and incoming pages during a transition
//!
//! ## Transitions
//!
//! Both pages are drawn into scratch buffers the size of the pane, then
//! copied column by column with a horizontal shift of `progress * width`.
//! Forward transitions move content leftwards (the next page enters from the
//! right); reverse transitions mirror that.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, StatefulWidget, Widget, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::page::{PageDirection, PageHost, PageProvider, TransitionView};
use crate::documents::Document;
use crate::tui::component::Component;

/// Scroll positions for every page, kept across transitions.
#[derive(Debug, Default)]
pub struct PageViewState {
    scroll: Vec<ScrollViewState>,
    /// Wrapped body height per page, from the last render.
    content_heights: Vec<u16>,
    viewport_height: u16,
}

impl PageViewState {
    pub fn new(page_count: usize) -> Self {
        Self {
            scroll: (0..page_count).map(|_| ScrollViewState::default()).collect(),
            content_heights: vec![0; page_count],
            viewport_height: 0,
        }
    }

    pub fn offset(&self, page: usize) -> u16 {
        self.scroll.get(page).map_or(0, |s| s.offset().y)
    }

    /// Scroll `page` by `lines` (negative is up), clamped to its content.
    pub fn scroll_by(&mut self, page: usize, lines: i32) {
        let max = self.max_offset(page);
        let Some(state) = self.scroll.get_mut(page) else {
            return;
        };
        let current = i32::from(state.offset().y);
        let next = (current + lines).clamp(0, i32::from(max));
        state.set_offset(Position::new(0, next as u16));
    }

    /// Scroll by one viewport, keeping a line of overlap.
    pub fn scroll_pages(&mut self, page: usize, pages: i32) {
        let step = i32::from(self.viewport_height.saturating_sub(1).max(1));
        self.scroll_by(page, pages * step);
    }

    fn max_offset(&self, page: usize) -> u16 {
        self.content_heights
            .get(page)
            .map_or(0, |h| h.saturating_sub(self.viewport_height))
    }

    fn clamp(&mut self, page: usize) {
        self.scroll_by(page, 0);
    }
}

/// Transient render wrapper; borrows the host for content and transition
/// state, and the view state for scroll positions.
pub struct PageView<'a, S: PageProvider<Page = Document>> {
    pub host: &'a PageHost<S>,
    pub state: &'a mut PageViewState,
}

impl<'a, S: PageProvider<Page = Document>> PageView<'a, S> {
    pub fn new(host: &'a PageHost<S>, state: &'a mut PageViewState) -> Self {
        Self { host, state }
    }

    fn render_page(&mut self, index: usize, area: Rect, buf: &mut Buffer) {
        let Some(document) = self.host.provider().page(index) else {
            return;
        };
        let block = Block::bordered()
            .title(format!(" {} ", document.title))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        // One column is reserved for the scrollbar
        let content_width = inner.width - 1;
        let paragraph = Paragraph::new(document.body.as_str()).wrap(Wrap { trim: false });
        let content_height = u16::try_from(paragraph.line_count(content_width)).unwrap_or(u16::MAX);

        if let Some(height) = self.state.content_heights.get_mut(index) {
            *height = content_height;
        }
        self.state.viewport_height = inner.height;
        self.state.clamp(index);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        if let Some(state) = self.state.scroll.get_mut(index) {
            scroll_view.render(inner, buf, state);
        }
    }

    fn render_transition(&mut self, transition: TransitionView, area: Rect, buf: &mut Buffer) {
        let Some(from) = transition.from else {
            self.render_page(transition.to, area, buf);
            return;
        };
        let mut outgoing = Buffer::empty(area);
        let mut incoming = Buffer::empty(area);
        self.render_page(from, area, &mut outgoing);
        self.render_page(transition.to, area, &mut incoming);

        let width = area.width;
        let shift = slide_shift(transition.progress, width);
        for column in 0..width {
            let (source, source_column) = match transition.direction {
                PageDirection::Forward if column < width - shift => (&outgoing, column + shift),
                PageDirection::Forward => (&incoming, column - (width - shift)),
                PageDirection::Reverse if column < shift => (&incoming, column + (width - shift)),
                PageDirection::Reverse => (&outgoing, column - shift),
            };
            for row in area.top()..area.bottom() {
                let cell = source[(area.x + source_column, row)].clone();
                if let Some(target) = buf.cell_mut(Position::new(area.x + column, row)) {
                    *target = cell;
                }
            }
        }
    }
}

/// Columns the outgoing page has moved by at `progress`.
fn slide_shift(progress: f32, width: u16) -> u16 {
    let shift = (progress.clamp(0.0, 1.0) * f32::from(width)).round();
    (shift as u16).min(width)
}

impl<S: PageProvider<Page = Document>> Component for PageView<'_, S> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let buf = frame.buffer_mut();
        match (self.host.transition(), self.host.visible_page()) {
            (Some(transition), _) => self.render_transition(transition, area, buf),
            (None, Some(page)) => self.render_page(page, area, buf),
            (None, None) => {}
        }
    }
}
