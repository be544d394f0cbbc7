//! # StatusBar Component
//!
//! Bottom line showing where the user is and what the keys do.
//!
//! Purely presentational: it receives everything as props and holds no
//! state of its own.
//!
//! ```rust,ignore
//! let mut status = StatusBar::new(Some(1), 5, "Drafts".to_string());
//! status.render(frame, status_area);
//! ```
//!
//! Layout: `"2/5 Drafts | ←/→ page · h/l menu · ↑/↓ scroll · q quit"`. The
//! hints are dropped on terminals too narrow to show them.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const HINTS: &str = "←/→ page · h/l menu · ↑/↓ scroll · q quit";

pub struct StatusBar {
    /// Current page, `None` before the widget has appeared.
    pub current_page: Option<usize>,
    pub page_count: usize,
    pub title: String,
}

impl StatusBar {
    pub fn new(current_page: Option<usize>, page_count: usize, title: String) -> Self {
        Self {
            current_page,
            page_count,
            title,
        }
    }

    fn position_text(&self) -> String {
        match self.current_page {
            Some(page) => format!("{}/{} {}", page + 1, self.page_count, self.title),
            None => format!("-/{}", self.page_count),
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let position = self.position_text();
        let full_width = position.chars().count() + 3 + HINTS.chars().count();

        let mut spans = vec![Span::raw(position)];
        if full_width <= usize::from(area.width) {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
