//! # Menu Cells
//!
//! The menu strip draws each item through a reusable *label cell*. Cells are
//! handed out by a `CellPool` keyed by reuse identifier and returned after
//! drawing, so a strip with hundreds of titles only ever allocates as many
//! cells as fit on screen.
//!
//! A pool that cannot produce a cell for a registered identifier means the
//! host integration is broken. `PageMenu::menu_item_at` treats that as fatal.

use std::collections::HashMap;

use super::menu::MenuItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// A single-line text label, the only cell kind the menu strip uses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelCell {
    pub text: String,
    pub alignment: TextAlignment,
    pub highlighted: bool,
}

impl LabelCell {
    pub const REUSE_IDENTIFIER: &'static str = "LabelCell";

    /// Prepare for reuse: alignment back to centred, content cleared.
    pub fn reset(&mut self) {
        self.alignment = TextAlignment::Center;
        self.text.clear();
        self.highlighted = false;
    }
}

/// Free lists of label cells, keyed by reuse identifier.
#[derive(Debug, Default)]
pub struct CellPool {
    free: HashMap<&'static str, Vec<LabelCell>>,
}

impl CellPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `identifier` dequeueable. Unregistered identifiers never yield a cell.
    pub fn register(&mut self, identifier: &'static str) {
        self.free.entry(identifier).or_default();
    }

    pub fn is_registered(&self, identifier: &str) -> bool {
        self.free.contains_key(identifier)
    }

    /// Hand out a recycled cell, or a fresh one when the free list is empty.
    pub fn dequeue(&mut self, identifier: &str) -> Option<LabelCell> {
        let free = self.free.get_mut(identifier)?;
        Some(free.pop().unwrap_or_default())
    }

    /// Return a cell after drawing. Unknown identifiers drop the cell.
    pub fn enqueue(&mut self, identifier: &str, mut cell: LabelCell) {
        if let Some(free) = self.free.get_mut(identifier) {
            cell.reset();
            free.push(cell);
        }
    }

    pub fn free_count(&self, identifier: &str) -> usize {
        self.free.get(identifier).map_or(0, Vec::len)
    }
}

/// Host hook that fills a dequeued cell for one menu item.
pub trait MenuItemRenderer {
    fn configure(&mut self, cell: &mut LabelCell, index: usize, item: &MenuItem, highlighted: bool);
}

/// Title as-is, centred, highlighted when the coordinator says so.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleRenderer;

impl MenuItemRenderer for TitleRenderer {
    fn configure(&mut self, cell: &mut LabelCell, _index: usize, item: &MenuItem, highlighted: bool) {
        cell.text.push_str(&item.title);
        cell.highlighted = highlighted && !item.is_spacer;
    }
}
