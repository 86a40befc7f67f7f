//! Scene tree and collision shape nodes
//!
//! The scene layer owns the node hierarchy and turns structural edits into
//! lifecycle notifications. Collision hosts hold a shape-owner registry;
//! shape owner nodes placed under them keep their registry entry in sync.
//!
//! ## Architecture
//!
//! ```text
//! SceneTree (structure, lifecycle delivery)
//!      ↓ on_parented / on_unparented / on_local_transform_changed
//! ShapeOwnerNode (local shape, transform, flags)
//!      ↓ CollisionHost calls
//! CollisionObject (ShapeOwnerRegistry)
//! ```

pub mod node;
pub mod tree;
pub mod shape_owner_node;

#[cfg(test)]
mod tests;

pub use node::{Node2D, NodeId, NodeRef, SceneNode, WeakNodeRef};
pub use tree::{SceneError, SceneTree};
pub use shape_owner_node::{ConfigurationWarning, ShapeOwnerNode};
