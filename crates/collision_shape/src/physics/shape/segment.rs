//! Line segment shape

use super::{set_and_notify, Shape2D};
use crate::debug::canvas::CanvasItem;
use crate::events::ChangedSignal;
use crate::foundation::color::Color;
use crate::foundation::math::{Rect2, Vec2};
use std::cell::Cell;

/// Width used when drawing the segment
const SEGMENT_DRAW_WIDTH: f32 = 3.0;

/// Segment between two local points
#[derive(Debug)]
pub struct SegmentShape {
    a: Cell<Vec2>,
    b: Cell<Vec2>,
    changed: ChangedSignal,
}

impl SegmentShape {
    /// Creates a segment from `a` to `b`
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            a: Cell::new(a),
            b: Cell::new(b),
            changed: ChangedSignal::new(),
        }
    }

    /// First endpoint
    pub fn a(&self) -> Vec2 {
        self.a.get()
    }

    /// Second endpoint
    pub fn b(&self) -> Vec2 {
        self.b.get()
    }

    /// Move the first endpoint
    pub fn set_a(&self, a: Vec2) {
        set_and_notify(&self.a, a, &self.changed);
    }

    /// Move the second endpoint
    pub fn set_b(&self, b: Vec2) {
        set_and_notify(&self.b, b, &self.changed);
    }
}

impl Shape2D for SegmentShape {
    fn name(&self) -> &'static str {
        "SegmentShape"
    }

    fn draw(&self, canvas: &mut CanvasItem, color: Color) {
        canvas.draw_line(self.a(), self.b(), color, SEGMENT_DRAW_WIDTH);
    }

    fn bounding_rect(&self) -> Rect2 {
        Rect2::from_points(&[self.a(), self.b()])
    }

    fn changed(&self) -> &ChangedSignal {
        &self.changed
    }
}
