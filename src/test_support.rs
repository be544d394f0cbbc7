//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::coordinator::{ConstructionError, PageMenuDelegate, PagingCoordinator};
use crate::core::menu::MenuControl;
use crate::core::page::{PageControl, PageDirection};

/// Menu double: records `select_item` calls, reports a scripted centre item.
#[derive(Debug, Default)]
pub struct RecordingMenu {
    pub selected: Vec<usize>,
    pub centered: Option<usize>,
}

impl MenuControl for RecordingMenu {
    fn select_item(&mut self, index: usize) {
        self.selected.push(index);
    }

    fn centered_item_index(&self) -> Option<usize> {
        self.centered
    }
}

/// Page host double: records every `set_visible_page` call.
#[derive(Debug, Default)]
pub struct RecordingPages {
    pub calls: Vec<(usize, PageDirection, bool)>,
}

impl PageControl for RecordingPages {
    fn set_visible_page(&mut self, index: usize, direction: PageDirection, animated: bool) {
        self.calls.push((index, direction, animated));
    }
}

#[derive(Debug, Default)]
pub struct RecordingDelegate {
    pub changes: Vec<usize>,
}

impl PageMenuDelegate for RecordingDelegate {
    fn page_changed(&mut self, page_index: usize) {
        self.changes.push(page_index);
    }
}

/// Coordinator over recording doubles, one page per title.
pub fn recording_coordinator(
    titles: &[&str],
    start: usize,
) -> Result<PagingCoordinator<RecordingMenu, RecordingPages, RecordingDelegate>, ConstructionError>
{
    PagingCoordinator::new(
        titles.iter().map(|t| t.to_string()).collect(),
        titles.len(),
        start,
        RecordingMenu::default(),
        RecordingPages::default(),
        RecordingDelegate::default(),
    )
}
