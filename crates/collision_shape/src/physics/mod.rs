//! Physics-facing registration types
//!
//! Shapes, the collision-host capability and the shape-owner registry that
//! hosts keep for physics queries. Collision detection itself lives in the
//! physics backend and is not part of this crate.

pub mod shape;
pub mod host;
pub mod shape_owner;
pub mod collision_object;

pub use shape::{
    same_shape,
    CapsuleShape,
    CircleShape,
    ConvexPolygonShape,
    RectangleShape,
    SegmentShape,
    Shape2D,
    ShapeRef,
};
pub use host::{CollisionHost, OwnerId};
pub use shape_owner::{ShapeOwnerData, ShapeOwnerError, ShapeOwnerRegistry};
pub use collision_object::CollisionObject;
