//! # MenuBar Component
//!
//! Draws the `MenuStrip` as a single row of label cells inside a bordered
//! band.
//!
//! ## Responsibilities
//!
//! - Push the current inner size into the strip (its viewport)
//! - Dequeue a label cell per on-screen item, draw it, recycle it
//! - Clip items that straddle the viewport edges
//!
//! The strip's geometry is in logical units; here one unit is one column.
//! Item edges are rounded to whole columns, so with a width that does not
//! divide by the visible count some items are one column wider than others.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthChar;

use crate::core::cell::{LabelCell, TextAlignment};
use crate::core::geometry::Size;
use crate::core::page::PageProvider;
use crate::core::{PageMenu, PageMenuDelegate};
use crate::tui::component::Component;

/// Transient render wrapper around the widget's menu strip.
pub struct MenuBar<'a, S: PageProvider, D: PageMenuDelegate> {
    pub menu: &'a mut PageMenu<S, D>,
}

impl<'a, S: PageProvider, D: PageMenuDelegate> MenuBar<'a, S, D> {
    pub fn new(menu: &'a mut PageMenu<S, D>) -> Self {
        Self { menu }
    }

    /// Area inside the border, where labels are drawn and taps land.
    pub fn inner_area(area: Rect) -> Rect {
        Block::bordered().inner(area)
    }
}

impl<S: PageProvider, D: PageMenuDelegate> Component for MenuBar<'_, S, D> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.menu
            .set_menu_viewport(Size::new(f32::from(inner.width), f32::from(inner.height)));
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let strip = self.menu.menu();
        let offset = strip.content_offset();
        let item_width = strip.item_size().width;
        let count = strip.item_count();
        let label_row = inner.y + inner.height.saturating_sub(1) / 2;

        for index in 0..count {
            let Some(span) = column_span(index, item_width, offset, inner.width) else {
                continue;
            };
            let cell = self.menu.menu_item_at(index);
            let text = clip_columns(
                &layout_label(&cell.text, span.full_width, cell.alignment),
                span.skip,
                span.visible,
            );
            let style = label_style(&cell);
            let rect = Rect::new(inner.x + span.start, label_row, span.visible, 1);
            frame.render_widget(Span::styled(text, style), rect);
            self.menu.recycle_cell(cell);
        }
    }
}

fn label_style(cell: &LabelCell) -> Style {
    if cell.highlighted {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Where an item lands on screen, in columns relative to the inner area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnSpan {
    /// First visible column.
    start: u16,
    /// Columns of the item hidden off the leading edge.
    skip: u16,
    visible: u16,
    full_width: u16,
}

fn column_span(index: usize, item_width: f32, offset: f32, viewport: u16) -> Option<ColumnSpan> {
    let lead = (index as f32 * item_width - offset).round();
    let trail = ((index + 1) as f32 * item_width - offset).round();
    let full_width = (trail - lead).max(0.0) as u16;
    let visible_start = lead.max(0.0);
    let visible_end = trail.min(f32::from(viewport));
    if visible_end <= visible_start || full_width == 0 {
        return None;
    }
    Some(ColumnSpan {
        start: visible_start as u16,
        skip: (visible_start - lead) as u16,
        visible: (visible_end - visible_start) as u16,
        full_width,
    })
}

/// Pad (or truncate with `…`) `text` to exactly `width` columns.
fn layout_label(text: &str, width: u16, alignment: TextAlignment) -> String {
    let width = usize::from(width);
    let mut label = String::new();
    let mut used = 0;
    let text_width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if text_width > width {
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w + 1 > width {
                break;
            }
            label.push(c);
            used += w;
        }
        if width > 0 {
            label.push('…');
            used += 1;
        }
    } else {
        label.push_str(text);
        used = text_width;
    }

    let slack = width.saturating_sub(used);
    let (before, after) = match alignment {
        TextAlignment::Left => (0, slack),
        TextAlignment::Center => (slack / 2, slack - slack / 2),
        TextAlignment::Right => (slack, 0),
    };
    format!("{}{}{}", " ".repeat(before), label, " ".repeat(after))
}

/// Columns `[skip, skip + take)` of `text`. Wide characters cut in half
/// become spaces so the result is exactly `take` columns.
fn clip_columns(text: &str, skip: u16, take: u16) -> String {
    let (skip, take) = (usize::from(skip), usize::from(take));
    let mut out = String::new();
    let mut column = 0;
    let mut taken = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        let end = column + w;
        if end <= skip {
            column = end;
            continue;
        }
        if column < skip || taken + w > take {
            // Straddles an edge
            let fill = (end.min(skip + take)).saturating_sub(column.max(skip));
            out.push_str(&" ".repeat(fill));
            taken += fill;
        } else {
            out.push(c);
            taken += w;
        }
        column = end;
        if taken >= take {
            break;
        }
    }
    out.push_str(&" ".repeat(take.saturating_sub(taken)));
    out
}
