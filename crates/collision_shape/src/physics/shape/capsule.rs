//! Capsule shape

use super::{set_and_notify, Shape2D};
use crate::debug::canvas::CanvasItem;
use crate::events::ChangedSignal;
use crate::foundation::color::Color;
use crate::foundation::math::{constants::PI, Rect2, Vec2};
use std::cell::Cell;

/// Points per half circle when tessellating the outline
const ARC_SEGMENTS: usize = 12;

/// Vertical capsule: two half circles joined by a rectangle
///
/// `height` is the distance between the two circle centers.
#[derive(Debug)]
pub struct CapsuleShape {
    radius: Cell<f32>,
    height: Cell<f32>,
    changed: ChangedSignal,
}

impl CapsuleShape {
    /// Creates a capsule
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            radius: Cell::new(radius),
            height: Cell::new(height),
            changed: ChangedSignal::new(),
        }
    }

    /// Radius of the end caps
    pub fn radius(&self) -> f32 {
        self.radius.get()
    }

    /// Change the end cap radius
    pub fn set_radius(&self, radius: f32) {
        set_and_notify(&self.radius, radius, &self.changed);
    }

    /// Distance between the cap centers
    pub fn height(&self) -> f32 {
        self.height.get()
    }

    /// Change the distance between the cap centers
    pub fn set_height(&self, height: f32) {
        set_and_notify(&self.height, height, &self.changed);
    }

    /// Tessellated outline, counter-clockwise starting at the right side
    pub fn outline(&self) -> Vec<Vec2> {
        let radius = self.radius();
        let half_height = self.height() * 0.5;
        let mut points = Vec::with_capacity((ARC_SEGMENTS + 1) * 2);

        // bottom cap (+y), then top cap (-y)
        for (center_y, start) in [(half_height, 0.0), (-half_height, PI)] {
            for i in 0..=ARC_SEGMENTS {
                let angle = start + PI * i as f32 / ARC_SEGMENTS as f32;
                points.push(Vec2::new(angle.cos() * radius, center_y + angle.sin() * radius));
            }
        }
        points
    }
}

impl Default for CapsuleShape {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

impl Shape2D for CapsuleShape {
    fn name(&self) -> &'static str {
        "CapsuleShape"
    }

    fn draw(&self, canvas: &mut CanvasItem, color: Color) {
        canvas.draw_polygon(self.outline(), color);
    }

    fn bounding_rect(&self) -> Rect2 {
        let radius = self.radius();
        let height = self.height();
        Rect2::new(-radius, -height * 0.5 - radius, radius * 2.0, height + radius * 2.0)
    }

    fn changed(&self) -> &ChangedSignal {
        &self.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_capsule_bounds() {
        let capsule = CapsuleShape::new(2.0, 6.0);

        assert_eq!(capsule.bounding_rect(), Rect2::new(-2.0, -5.0, 4.0, 10.0));
    }

    #[test]
    fn test_outline_stays_inside_bounds() {
        let capsule = CapsuleShape::new(2.0, 6.0);
        let bounds = capsule.bounding_rect();
        let outline_bounds = Rect2::from_points(&capsule.outline());

        assert_relative_eq!(outline_bounds.position.x, bounds.position.x, epsilon = 1e-5);
        assert_relative_eq!(outline_bounds.position.y, bounds.position.y, epsilon = 1e-5);
        assert_relative_eq!(outline_bounds.size.x, bounds.size.x, epsilon = 1e-5);
        assert_relative_eq!(outline_bounds.size.y, bounds.size.y, epsilon = 1e-5);
    }
}
