//! Convex polygon shape

use super::Shape2D;
use crate::debug::canvas::CanvasItem;
use crate::events::ChangedSignal;
use crate::foundation::color::Color;
use crate::foundation::math::{Rect2, Vec2};
use std::cell::RefCell;

/// Convex polygon given by its vertices in winding order
#[derive(Debug)]
pub struct ConvexPolygonShape {
    points: RefCell<Vec<Vec2>>,
    changed: ChangedSignal,
}

impl ConvexPolygonShape {
    /// Creates a polygon; the points are not checked for convexity
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            points: RefCell::new(points),
            changed: ChangedSignal::new(),
        }
    }

    /// Copy of the current vertices
    pub fn points(&self) -> Vec<Vec2> {
        self.points.borrow().clone()
    }

    /// Replace the vertices
    pub fn set_points(&self, points: Vec<Vec2>) {
        let changed = {
            let mut current = self.points.borrow_mut();
            if *current == points {
                false
            } else {
                *current = points;
                true
            }
        };
        if changed {
            self.changed.emit();
        }
    }
}

impl Shape2D for ConvexPolygonShape {
    fn name(&self) -> &'static str {
        "ConvexPolygonShape"
    }

    fn draw(&self, canvas: &mut CanvasItem, color: Color) {
        let points = self.points();
        if points.len() < 3 {
            return;
        }
        canvas.draw_polygon(points, color);
    }

    fn bounding_rect(&self) -> Rect2 {
        Rect2::from_points(&self.points.borrow())
    }

    fn changed(&self) -> &ChangedSignal {
        &self.changed
    }
}
