//! Plain geometry in logical units.
//!
//! The core never sees terminal cells. The TUI adapter maps one column to
//! one logical unit on the scroll axis.

/// A point (or offset) in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle: origin is the top-leading corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Half-open containment, so adjacent frames never both claim a point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// True when the two frames share a region of non-zero area.
    pub fn intersects(&self, other: &Frame) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_frames_do_not_intersect() {
        let a = Frame::new(0.0, 0.0, 100.0, 10.0);
        let b = Frame::new(100.0, 0.0, 100.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Frame::new(99.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_contains_is_half_open() {
        let frame = Frame::new(100.0, 0.0, 100.0, 10.0);
        assert!(frame.contains(Point::new(100.0, 5.0)));
        assert!(!frame.contains(Point::new(200.0, 5.0)));
    }
}
