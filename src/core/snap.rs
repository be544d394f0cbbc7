//! # Snap Layout
//!
//! Decides where a flung menu strip comes to rest. Given the offset the
//! deceleration physics would naturally stop at, the strip is nudged so the
//! nearest item's leading edge lines up with the leading edge of the viewport.
//!
//! ```text
//!   proposed ─┐
//!             ▼
//!   |  item 0  |  item 1  |  item 2  |  item 3  |
//!              ▲
//!              └─ rest offset (nearest leading edge)
//! ```
//!
//! Pure functions only. Nothing here touches strip state.

use super::geometry::{Frame, Point, Size};

/// Deceleration rate applied after a fling, per millisecond of travel.
/// Matches the "fast" rate of platform scroll views.
pub const FAST_DECELERATION_RATE: f32 = 0.99;

/// Corrected rest offset for a fling.
///
/// Candidates are the frames intersecting the viewport placed at
/// `proposed.x`. The one whose leading edge is closest to the inset-adjusted
/// proposed offset wins; ties keep the earlier frame. With no candidates the
/// proposed offset is returned untouched.
///
/// `velocity` is accepted for parity with fling callbacks but does not
/// influence the result: snapping is purely positional.
pub fn target_rest_offset(
    proposed: Point,
    _velocity: Point,
    viewport: Size,
    leading_inset: f32,
    frames: &[Frame],
) -> Point {
    let target_rect = Frame::new(proposed.x, 0.0, viewport.width, viewport.height);
    let adjusted = proposed.x + leading_inset;

    let mut correction: Option<f32> = None;
    for frame in frames.iter().filter(|f| f.intersects(&target_rect)) {
        let candidate = frame.min_x() - adjusted;
        match correction {
            Some(best) if candidate.abs() >= best.abs() => {}
            _ => correction = Some(candidate),
        }
    }

    match correction {
        Some(delta) => Point::new(proposed.x + delta, proposed.y),
        None => proposed,
    }
}

/// Where a fling starting at `offset` with `velocity` (units/second) would
/// naturally stop under exponential deceleration at `rate` per millisecond.
pub fn project_fling(offset: f32, velocity: f32, rate: f32) -> f32 {
    if !(0.0..1.0).contains(&rate) {
        return offset;
    }
    offset + velocity / 1000.0 * rate / (1.0 - rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(xs: &[f32], width: f32) -> Vec<Frame> {
        xs.iter().map(|&x| Frame::new(x, 0.0, width, 60.0)).collect()
    }

    #[test]
    fn test_snaps_to_nearest_leading_edge() {
        let frames = row(&[0.0, 100.0, 200.0], 100.0);
        let rest = target_rest_offset(
            Point::new(130.0, 0.0),
            Point::ZERO,
            Size::new(300.0, 60.0),
            0.0,
            &frames,
        );
        assert_eq!(rest, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_snaps_forward_past_midpoint() {
        let frames = row(&[0.0, 100.0, 200.0, 300.0], 100.0);
        let rest = target_rest_offset(
            Point::new(160.0, 0.0),
            Point::new(800.0, 0.0),
            Size::new(300.0, 60.0),
            0.0,
            &frames,
        );
        assert_eq!(rest.x, 200.0);
    }

    #[test]
    fn test_no_frames_returns_proposed() {
        let proposed = Point::new(42.5, 7.0);
        let rest = target_rest_offset(proposed, Point::ZERO, Size::new(300.0, 60.0), 0.0, &[]);
        assert_eq!(rest, proposed);

        // Frames exist but none intersect the candidate viewport
        let far = row(&[1000.0], 100.0);
        let rest = target_rest_offset(proposed, Point::ZERO, Size::new(300.0, 60.0), 0.0, &far);
        assert_eq!(rest, proposed);
    }

    #[test]
    fn test_tie_keeps_first_frame() {
        // Leading edges at 100 and 200, proposed exactly between them
        let frames = row(&[100.0, 200.0], 100.0);
        let rest = target_rest_offset(
            Point::new(150.0, 0.0),
            Point::ZERO,
            Size::new(300.0, 60.0),
            0.0,
            &frames,
        );
        assert_eq!(rest.x, 100.0);
    }

    #[test]
    fn test_leading_inset_shifts_alignment() {
        let frames = row(&[0.0, 100.0, 200.0], 100.0);
        // adjusted = 80 + 20 = 100 → correction 0
        let rest = target_rest_offset(
            Point::new(80.0, 0.0),
            Point::ZERO,
            Size::new(300.0, 60.0),
            20.0,
            &frames,
        );
        assert_eq!(rest.x, 80.0);
    }

    #[test]
    fn test_perpendicular_axis_passes_through() {
        let frames = row(&[0.0, 100.0], 100.0);
        let rest = target_rest_offset(
            Point::new(10.0, 33.0),
            Point::ZERO,
            Size::new(300.0, 60.0),
            0.0,
            &frames,
        );
        assert_eq!(rest, Point::new(0.0, 33.0));
    }

    #[test]
    fn test_project_fling() {
        assert_eq!(project_fling(50.0, 0.0, FAST_DECELERATION_RATE), 50.0);
        let travelled = project_fling(0.0, 1000.0, FAST_DECELERATION_RATE);
        assert!((travelled - 99.0).abs() < 0.01);
        assert!(project_fling(0.0, -1000.0, FAST_DECELERATION_RATE) < 0.0);
        // Degenerate rates disable projection
        assert_eq!(project_fling(5.0, 1000.0, 1.0), 5.0);
    }
}
