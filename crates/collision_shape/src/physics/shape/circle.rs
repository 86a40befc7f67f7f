//! Circle shape

use super::{set_and_notify, Shape2D};
use crate::debug::canvas::CanvasItem;
use crate::events::ChangedSignal;
use crate::foundation::color::Color;
use crate::foundation::math::{Rect2, Vec2};
use std::cell::Cell;

/// Circle centered on the owner's origin
#[derive(Debug)]
pub struct CircleShape {
    radius: Cell<f32>,
    changed: ChangedSignal,
}

impl CircleShape {
    /// Creates a circle with the given radius
    pub fn new(radius: f32) -> Self {
        Self {
            radius: Cell::new(radius),
            changed: ChangedSignal::new(),
        }
    }

    /// Current radius
    pub fn radius(&self) -> f32 {
        self.radius.get()
    }

    /// Change the radius
    pub fn set_radius(&self, radius: f32) {
        set_and_notify(&self.radius, radius, &self.changed);
    }
}

impl Default for CircleShape {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl Shape2D for CircleShape {
    fn name(&self) -> &'static str {
        "CircleShape"
    }

    fn draw(&self, canvas: &mut CanvasItem, color: Color) {
        canvas.draw_circle(Vec2::zeros(), self.radius(), color);
    }

    fn bounding_rect(&self) -> Rect2 {
        let r = self.radius();
        Rect2::new(-r, -r, r * 2.0, r * 2.0)
    }

    fn changed(&self) -> &ChangedSignal {
        &self.changed
    }
}
