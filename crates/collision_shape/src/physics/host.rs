//! Collision host capability
//!
//! Any scene node that keeps a shape-owner registry for physics queries
//! implements [`CollisionHost`]. Shape owner nodes only ever talk to their
//! parent through this trait.

use crate::foundation::math::Transform2D;
use crate::physics::shape::ShapeRef;
use crate::scene::node::NodeId;

pub use crate::physics::shape_owner::OwnerId;

/// Shape-owner registry API of a collision entity
///
/// Calls are synchronous and infallible from the caller's side; an
/// implementation handles (and reports) its own failures, such as a stale
/// owner handle.
pub trait CollisionHost {
    /// Issue a fresh owner handle for `owner`
    fn create_shape_owner(&mut self, owner: NodeId) -> OwnerId;

    /// Drop the owner entry and every shape registered under it
    fn remove_shape_owner(&mut self, owner: OwnerId);

    /// Register `shape` under `owner`
    fn shape_owner_add_shape(&mut self, owner: OwnerId, shape: ShapeRef);

    /// Remove every shape registered under `owner`
    fn shape_owner_clear_shapes(&mut self, owner: OwnerId);

    /// Set the owner's transform relative to the host
    fn shape_owner_set_transform(&mut self, owner: OwnerId, transform: Transform2D);

    /// Enable or disable the owner's shapes
    fn shape_owner_set_disabled(&mut self, owner: OwnerId, disabled: bool);

    /// Mark the owner's shapes as one-way colliders
    fn shape_owner_set_one_way_collision(&mut self, owner: OwnerId, enabled: bool);
}
