//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, draws the widget, and
//! translates keyboard and mouse input into widget gestures.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! widget is headless and unit-agnostic; here one logical unit is one cell.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (menu decelerating, page sliding): ticks and draws every
//!   ~16ms so transitions look smooth.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal
//!   resize.
//!
//! The widget only appears after the first draw, once the menu strip knows
//! its viewport, so the start tab is centred against the real width.

mod component;
mod components;
mod event;
mod gesture;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::page::PageDirection;
use crate::core::{PageMenu, PageMenuDelegate};
use crate::documents::Document;
use crate::tui::component::EventHandler;
use crate::tui::components::PageViewState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::gesture::{Gesture, GestureTracker};

const ANIMATION_FRAME: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the widget)
pub struct TuiState {
    pub page_view: PageViewState,
    pub gestures: GestureTracker,
    pub menu_rows: u16,
}

impl TuiState {
    pub fn new(page_count: usize, menu_rows: u16) -> Self {
        Self {
            page_view: PageViewState::new(page_count),
            gestures: GestureTracker::new(),
            menu_rows,
        }
    }
}

/// Delegate for the demo: page changes go to the log.
struct PageLog;

impl PageMenuDelegate for PageLog {
    fn page_changed(&mut self, page_index: usize) {
        info!("Page changed to {page_index}");
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(documents: Vec<Document>, config: &ResolvedConfig) -> io::Result<()> {
    let titles: Vec<String> = documents.iter().map(|d| d.title.clone()).collect();
    let page_count = documents.len();
    let mut widget = PageMenu::new(titles, documents, config.to_options(), PageLog)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut tui = TuiState::new(page_count, config.menu_rows);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut last_tick = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let now = Instant::now();
        widget.tick(now - last_tick);
        last_tick = now;

        let animating = widget.is_animating();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &mut widget, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
            // The strip has its viewport now
            if !widget.coordinator().has_appeared() {
                widget.appear();
                needs_redraw = true;
            }
        }

        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        let first_event = match poll_event_timeout(timeout) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let pending = std::iter::from_fn(|| poll_event_immediate().ok().flatten());
        for event in first_event.into_iter().chain(pending) {
            if apply_event(&mut widget, &mut tui, event) == Flow::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            info!("Quit requested");
            break Ok(());
        }
    };

    ratatui::restore();
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn apply_event<D: PageMenuDelegate>(
    widget: &mut PageMenu<Vec<Document>, D>,
    tui: &mut TuiState,
    event: TuiEvent,
) -> Flow {
    let page = widget.current_page();
    match event {
        TuiEvent::Quit => return Flow::Quit,
        // Redraw already flagged
        TuiEvent::Resize => {}
        TuiEvent::SwipeNext => widget.swipe(PageDirection::Forward),
        TuiEvent::SwipePrev => widget.swipe(PageDirection::Reverse),
        TuiEvent::JumpTo(index) => {
            if index < widget.pages().page_count() {
                widget.scroll_to_page(index);
            } else {
                debug!("Jump to page {index} ignored: only {} pages", widget.pages().page_count());
            }
        }
        TuiEvent::MenuNext => widget.nudge_menu(1),
        TuiEvent::MenuPrev => widget.nudge_menu(-1),
        TuiEvent::ScrollUp => scroll(tui, page, |state, p| state.scroll_by(p, -1)),
        TuiEvent::ScrollDown => scroll(tui, page, |state, p| state.scroll_by(p, 1)),
        TuiEvent::ScrollPageUp => scroll(tui, page, |state, p| state.scroll_pages(p, -1)),
        TuiEvent::ScrollPageDown => scroll(tui, page, |state, p| state.scroll_pages(p, 1)),
        TuiEvent::MouseDown(..) | TuiEvent::MouseDrag(..) | TuiEvent::MouseUp(..) => {
            if let Some(gesture) = tui.gestures.handle_event(&event) {
                apply_gesture(widget, gesture);
            }
        }
    }
    Flow::Continue
}

fn scroll(tui: &mut TuiState, page: Option<usize>, f: impl FnOnce(&mut PageViewState, usize)) {
    if let Some(page) = page {
        f(&mut tui.page_view, page);
    }
}

fn apply_gesture<D: PageMenuDelegate>(widget: &mut PageMenu<Vec<Document>, D>, gesture: Gesture) {
    match gesture {
        Gesture::MenuTap { x } => widget.tap_menu(x),
        Gesture::MenuDrag { delta, since_last } => {
            if !widget.menu().is_dragging() {
                widget.begin_menu_drag();
            }
            widget.drag_menu(delta, since_last);
        }
        Gesture::MenuRelease => widget.end_menu_drag(),
        Gesture::SwipeBegin(direction) => {
            if !widget.begin_page_swipe(direction) {
                debug!("Swipe {direction:?} refused");
            }
        }
        Gesture::SwipeProgress(progress) => widget.update_page_swipe(progress),
        Gesture::SwipeEnd { commit } => widget.end_page_swipe(commit),
    }
}
