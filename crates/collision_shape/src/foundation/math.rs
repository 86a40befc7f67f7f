//! Math utilities and types
//!
//! Provides the 2D math types used by shapes, shape owners and debug drawing.

use approx::abs_diff_eq;
pub use nalgebra::{Matrix3, Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3x3 matrix type (homogeneous 2D transforms)
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Local 2D transform: position, rotation (radians) and scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Translation relative to the parent
    pub position: Vec2,

    /// Rotation in radians
    pub rotation: f32,

    /// Scale factors
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform2D {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec2, rotation: f32) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Returns a copy of this transform with a different scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Convert to a homogeneous transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::new_translation(&self.position)
            * Rotation2::new(self.rotation).to_homogeneous()
            * Mat3::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point2) -> Point2 {
        self.to_matrix().transform_point(&point)
    }

    /// Apply this transform to a vector (ignores translation)
    pub fn transform_vector(&self, vector: Vec2) -> Vec2 {
        self.to_matrix().transform_vector(&vector)
    }

    /// True if this transform leaves every point where it is
    pub fn is_identity(&self) -> bool {
        abs_diff_eq!(self.position, Vec2::zeros())
            && abs_diff_eq!(self.rotation, 0.0)
            && abs_diff_eq!(self.scale, Vec2::new(1.0, 1.0))
    }
}

/// Axis-aligned 2D rectangle described by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect2 {
    /// Minimum corner
    pub position: Vec2,
    /// Extent along each axis
    pub size: Vec2,
}

impl Rect2 {
    /// Create a rectangle from corner coordinates and extents
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Create a rectangle from a corner and a size
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// The empty rectangle at the origin
    pub fn empty() -> Self {
        Self::default()
    }

    /// Smallest rectangle containing every point, or the empty rectangle
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::empty();
        };

        rest.iter().fold(
            Self::from_position_size(*first, Vec2::zeros()),
            |rect, point| rect.expand(*point),
        )
    }

    /// Maximum corner
    pub fn end(&self) -> Vec2 {
        self.position + self.size
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Area of the rectangle
    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// True if the rectangle covers no area
    pub fn has_no_area(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Check if this rectangle contains a point (inclusive min, exclusive max)
    pub fn has_point(&self, point: Vec2) -> bool {
        let end = self.end();
        point.x >= self.position.x && point.y >= self.position.y && point.x < end.x && point.y < end.y
    }

    /// Check if this rectangle overlaps another
    pub fn intersects(&self, other: &Rect2) -> bool {
        let end = self.end();
        let other_end = other.end();
        self.position.x < other_end.x
            && end.x > other.position.x
            && self.position.y < other_end.y
            && end.y > other.position.y
    }

    /// Returns the rectangle grown by `by` on every side
    pub fn grow(&self, by: f32) -> Self {
        Self {
            position: self.position - Vec2::new(by, by),
            size: self.size + Vec2::new(by * 2.0, by * 2.0),
        }
    }

    /// Smallest rectangle containing both rectangles
    pub fn merge(&self, other: &Rect2) -> Self {
        let min = self.position.inf(&other.position);
        let max = self.end().sup(&other.end());
        Self::from_position_size(min, max - min)
    }

    /// Smallest rectangle containing this one and `point`
    pub fn expand(&self, point: Vec2) -> Self {
        let min = self.position.inf(&point);
        let max = self.end().sup(&point);
        Self::from_position_size(min, max - min)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// cos(45°) == sin(45°)
    pub const COS_45: f32 = std::f32::consts::FRAC_1_SQRT_2;
}
