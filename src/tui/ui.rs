use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::page::PageProvider;
use crate::core::{PageMenu, PageMenuDelegate};
use crate::documents::Document;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MenuBar, PageView, StatusBar};

/// Split the screen into menu band, page pane and status line.
pub fn layout_areas(area: Rect, menu_rows: u16) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(menu_rows), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui<S, D>(frame: &mut Frame, widget: &mut PageMenu<S, D>, tui: &mut TuiState)
where
    S: PageProvider<Page = Document>,
    D: PageMenuDelegate,
{
    let [menu_area, page_area, status_area] = layout_areas(frame.area(), tui.menu_rows);

    // Remember where things landed; pointer events are hit-tested against these
    tui.gestures
        .set_areas(MenuBar::<S, D>::inner_area(menu_area), page_area);

    MenuBar::new(widget).render(frame, menu_area);
    PageView::new(widget.pages(), &mut tui.page_view).render(frame, page_area);

    let title = widget
        .current_page()
        .and_then(|page| widget.pages().provider().page(page))
        .map(|doc| doc.title.clone())
        .unwrap_or_default();
    StatusBar::new(widget.current_page(), widget.pages().page_count(), title)
        .render(frame, status_area);
}
