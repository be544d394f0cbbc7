//! # Page Host
//!
//! Owns the ordered pages and the paging surface that slides between them.
//!
//! Two kinds of transition exist:
//!
//! - **Programmatic** (`set_visible_page`): requested by the coordinator.
//!   Runs to completion silently; the coordinator already knows the outcome.
//! - **Swipe** (`begin_swipe` → `update_swipe` → `end_swipe`): driven by the
//!   user. Announces its target with `TransitionWillBegin` before anything is
//!   confirmed, then reports `TransitionDidFinish { completed }` once the
//!   slide settles. A swipe released short of the commit point slides back
//!   and finishes with `completed: false`.
//!
//! ```text
//! begin_swipe ──► WillBegin{pending} ──► (drag) ──► end_swipe ──► tick… ──► DidFinish{completed}
//! ```

use std::time::Duration;

use log::{debug, trace};

use super::animation::Tween;

/// Ordered, random-access source of opaque pages.
pub trait PageProvider {
    type Page;

    fn page_count(&self) -> usize;
    fn page(&self, index: usize) -> Option<&Self::Page>;
}

impl<T> PageProvider for Vec<T> {
    type Page = T;

    fn page_count(&self) -> usize {
        self.len()
    }

    fn page(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

/// Cosmetic slide direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Reverse,
}

impl PageDirection {
    /// Forward when moving to a higher index. Equal indices count as forward.
    pub fn between(from: usize, to: usize) -> Self {
        if to >= from {
            PageDirection::Forward
        } else {
            PageDirection::Reverse
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    TransitionWillBegin { pending: usize },
    TransitionDidFinish { completed: bool },
}

/// The slice of the host the coordinator is allowed to drive.
pub trait PageControl {
    fn set_visible_page(&mut self, index: usize, direction: PageDirection, animated: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwipePhase {
    /// Finger down, progress follows the gesture.
    Tracking,
    /// Released; animating toward commit (`true`) or back (`false`).
    Settling(bool),
}

#[derive(Debug, Clone, Copy)]
enum TransitionKind {
    Programmatic,
    Swipe(SwipePhase),
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: Option<usize>,
    to: usize,
    direction: PageDirection,
    kind: TransitionKind,
    progress: f32,
    tween: Option<Tween>,
}

/// Snapshot of an in-flight transition for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionView {
    pub from: Option<usize>,
    pub to: usize,
    pub direction: PageDirection,
    /// 0.0 shows `from` entirely, 1.0 shows `to` entirely.
    pub progress: f32,
}

#[derive(Debug)]
pub struct PageHost<S: PageProvider> {
    provider: S,
    visible: Option<usize>,
    transition: Option<Transition>,
    animation: Duration,
}

impl<S: PageProvider> PageHost<S> {
    pub fn new(provider: S, animation: Duration) -> Self {
        Self {
            provider,
            visible: None,
            transition: None,
            animation,
        }
    }

    pub fn provider(&self) -> &S {
        &self.provider
    }

    pub fn page_count(&self) -> usize {
        self.provider.page_count()
    }

    /// Page at rest. During a transition this is still the page being left.
    pub fn visible_page(&self) -> Option<usize> {
        self.visible
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some_and(|t| t.tween.is_some())
    }

    pub fn is_swiping(&self) -> bool {
        self.transition
            .is_some_and(|t| matches!(t.kind, TransitionKind::Swipe(_)))
    }

    pub fn transition(&self) -> Option<TransitionView> {
        self.transition.map(|t| TransitionView {
            from: t.from,
            to: t.to,
            direction: t.direction,
            progress: t.progress,
        })
    }

    pub fn page_before(&self, index: usize) -> Option<usize> {
        index.checked_sub(1).filter(|&i| i < self.page_count())
    }

    pub fn page_after(&self, index: usize) -> Option<usize> {
        let next = index.checked_add(1)?;
        (next < self.page_count()).then_some(next)
    }

    /// Start a user swipe toward the neighbour in `direction`.
    /// Nothing happens at a boundary or while another transition runs.
    pub fn begin_swipe(&mut self, direction: PageDirection) -> Option<PageEvent> {
        if self.transition.is_some() {
            trace!("Swipe ignored: transition already in flight");
            return None;
        }
        let current = self.visible?;
        let pending = match direction {
            PageDirection::Forward => self.page_after(current),
            PageDirection::Reverse => self.page_before(current),
        }?;
        debug!("Swipe begin: {current} -> {pending} ({direction:?})");
        self.transition = Some(Transition {
            from: Some(current),
            to: pending,
            direction,
            kind: TransitionKind::Swipe(SwipePhase::Tracking),
            progress: 0.0,
            tween: None,
        });
        Some(PageEvent::TransitionWillBegin { pending })
    }

    /// Follow the finger. Ignored unless a swipe is tracking.
    pub fn update_swipe(&mut self, progress: f32) {
        if let Some(t) = self.transition.as_mut()
            && matches!(t.kind, TransitionKind::Swipe(SwipePhase::Tracking))
        {
            t.progress = progress.clamp(0.0, 1.0);
        }
    }

    /// Release the swipe, animating to the new page (`commit`) or back.
    /// Returns `TransitionDidFinish` at once if no distance remains.
    pub fn end_swipe(&mut self, commit: bool) -> Option<PageEvent> {
        let animation = self.animation;
        let t = self.transition.as_mut()?;
        if !matches!(t.kind, TransitionKind::Swipe(SwipePhase::Tracking)) {
            return None;
        }
        let target = if commit { 1.0 } else { 0.0 };
        t.kind = TransitionKind::Swipe(SwipePhase::Settling(commit));
        let remaining = (target - t.progress).abs();
        if remaining < f32::EPSILON || animation.is_zero() {
            return self.finish_swipe(commit);
        }
        t.tween = Some(Tween::new(t.progress, target, animation.mul_f32(remaining)));
        None
    }

    pub fn cancel_swipe(&mut self) -> Option<PageEvent> {
        self.end_swipe(false)
    }

    fn finish_swipe(&mut self, completed: bool) -> Option<PageEvent> {
        let t = self.transition.take()?;
        if completed {
            self.visible = Some(t.to);
        }
        debug!(
            "Swipe finished: completed={completed}, visible={:?}",
            self.visible
        );
        Some(PageEvent::TransitionDidFinish { completed })
    }

    pub fn tick(&mut self, dt: Duration) -> Option<PageEvent> {
        let t = self.transition.as_mut()?;
        let tween = t.tween.as_mut()?;
        tween.advance(dt);
        let (progress, finished) = (tween.value(), tween.is_finished());
        t.progress = progress;
        if !finished {
            return None;
        }
        let (kind, to) = (t.kind, t.to);
        match kind {
            TransitionKind::Programmatic => {
                self.visible = Some(to);
                self.transition = None;
                None
            }
            TransitionKind::Swipe(SwipePhase::Settling(commit)) => self.finish_swipe(commit),
            TransitionKind::Swipe(SwipePhase::Tracking) => None,
        }
    }
}

impl<S: PageProvider> PageControl for PageHost<S> {
    fn set_visible_page(&mut self, index: usize, direction: PageDirection, animated: bool) {
        assert!(
            index < self.page_count(),
            "page {index} out of range (host has {} pages)",
            self.page_count()
        );
        if self.transition.is_none() && self.visible == Some(index) {
            return;
        }
        // A programmatic request supersedes whatever was sliding
        let from = self.transition.map_or(self.visible, |t| t.from.or(self.visible));
        if from == Some(index) {
            // Back to the page being left: nothing to slide, just settle
            self.visible = Some(index);
            self.transition = None;
            return;
        }
        if !animated || self.animation.is_zero() || from.is_none() {
            self.visible = Some(index);
            self.transition = None;
            return;
        }
        self.transition = Some(Transition {
            from,
            to: index,
            direction,
            kind: TransitionKind::Programmatic,
            progress: 0.0,
            tween: Some(Tween::new(0.0, 1.0, self.animation)),
        });
    }
}
