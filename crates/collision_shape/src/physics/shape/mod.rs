//! Shape resources
//!
//! A shape is a shared, model-space geometry resource. Several shape owners
//! may reference the same shape; when its geometry changes the shape emits
//! its [`ChangedSignal`] so every owner can redraw.
//!
//! Only what owners and hosts need is modelled here: debug drawing, local
//! bounds and the change notification. Intersection tests belong to the
//! physics backend.
//!
//! # Module Organization
//!
//! - [`circle`] - [`CircleShape`]
//! - [`rectangle`] - [`RectangleShape`]
//! - [`capsule`] - [`CapsuleShape`]
//! - [`segment`] - [`SegmentShape`]
//! - [`convex_polygon`] - [`ConvexPolygonShape`]

pub mod circle;
pub mod rectangle;
pub mod capsule;
pub mod segment;
pub mod convex_polygon;

pub use circle::CircleShape;
pub use rectangle::RectangleShape;
pub use capsule::CapsuleShape;
pub use segment::SegmentShape;
pub use convex_polygon::ConvexPolygonShape;

use crate::debug::canvas::CanvasItem;
use crate::events::ChangedSignal;
use crate::foundation::color::Color;
use crate::foundation::math::Rect2;
use std::fmt;
use std::rc::Rc;

/// Capability every shape resource provides
pub trait Shape2D: fmt::Debug {
    /// Short type name used in logs
    fn name(&self) -> &'static str;

    /// Record this shape's outline/fill on `canvas` in `color`
    fn draw(&self, canvas: &mut CanvasItem, color: Color);

    /// Model-space bounding rectangle
    fn bounding_rect(&self) -> Rect2;

    /// Signal emitted whenever the geometry changes
    fn changed(&self) -> &ChangedSignal;
}

/// Shared reference to a shape resource
pub type ShapeRef = Rc<dyn Shape2D>;

/// True if both references point at the same shape resource
pub fn same_shape(a: &ShapeRef, b: &ShapeRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// Set a `Cell` field and emit `changed` if the value actually changed
pub(crate) fn set_and_notify<T: Copy + PartialEq>(
    cell: &std::cell::Cell<T>,
    value: T,
    changed: &ChangedSignal,
) {
    if cell.replace(value) != value {
        changed.emit();
    }
}
