//! Rectangle shape

use super::{set_and_notify, Shape2D};
use crate::debug::canvas::CanvasItem;
use crate::events::ChangedSignal;
use crate::foundation::color::Color;
use crate::foundation::math::{Rect2, Vec2};
use std::cell::Cell;

/// Axis-aligned box described by its half extents
#[derive(Debug)]
pub struct RectangleShape {
    extents: Cell<Vec2>,
    changed: ChangedSignal,
}

impl RectangleShape {
    /// Creates a rectangle with the given half extents
    pub fn new(extents: Vec2) -> Self {
        Self {
            extents: Cell::new(extents),
            changed: ChangedSignal::new(),
        }
    }

    /// Current half extents
    pub fn extents(&self) -> Vec2 {
        self.extents.get()
    }

    /// Change the half extents
    pub fn set_extents(&self, extents: Vec2) {
        set_and_notify(&self.extents, extents, &self.changed);
    }
}

impl Default for RectangleShape {
    fn default() -> Self {
        Self::new(Vec2::new(10.0, 10.0))
    }
}

impl Shape2D for RectangleShape {
    fn name(&self) -> &'static str {
        "RectangleShape"
    }

    fn draw(&self, canvas: &mut CanvasItem, color: Color) {
        canvas.draw_rect(self.bounding_rect(), color, true);
    }

    fn bounding_rect(&self) -> Rect2 {
        let extents = self.extents();
        Rect2::from_position_size(-extents, extents * 2.0)
    }

    fn changed(&self) -> &ChangedSignal {
        &self.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_bounds() {
        let rect = RectangleShape::new(Vec2::new(4.0, 2.0));

        assert_eq!(rect.bounding_rect(), Rect2::new(-4.0, -2.0, 8.0, 4.0));

        rect.set_extents(Vec2::new(1.0, 1.0));
        assert_eq!(rect.bounding_rect(), Rect2::new(-1.0, -1.0, 2.0, 2.0));
    }
}
