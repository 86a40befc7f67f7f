//! Scene node trait and lifecycle hooks
//!
//! Nodes are shared as `Rc<RefCell<dyn SceneNode>>` so a child can keep a
//! weak, non-owning reference to its parent. The [`SceneTree`] delivers
//! lifecycle notifications by calling the discrete hook methods below, in
//! lifecycle order, one call per occurrence.
//!
//! [`SceneTree`]: crate::scene::SceneTree

use crate::config::DebugCollisionSettings;
use crate::foundation::math::Transform2D;
use crate::physics::host::CollisionHost;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

slotmap::new_key_type! {
    /// Identifier of a node inside a scene tree
    pub struct NodeId;
}

/// Shared, owning reference to a scene node
pub type NodeRef = Rc<RefCell<dyn SceneNode>>;

/// Non-owning reference to a scene node
pub type WeakNodeRef = Weak<RefCell<dyn SceneNode>>;

/// A node that can live in a [`SceneTree`](crate::scene::SceneTree)
///
/// Every hook has a no-op default so plain nodes only implement `name`.
pub trait SceneNode {
    /// Human-readable node name used in logs
    fn name(&self) -> &str;

    /// Capability query: the node's collision-host interface, if any
    fn as_collision_host(&self) -> Option<&dyn CollisionHost> {
        None
    }

    /// Mutable capability query
    fn as_collision_host_mut(&mut self) -> Option<&mut dyn CollisionHost> {
        None
    }

    /// True if this node implements [`CollisionHost`]
    fn is_collision_host(&self) -> bool {
        self.as_collision_host().is_some()
    }

    /// Called right after the node became a child of `parent`
    ///
    /// `this` is the node's own id in the tree.
    fn on_parented(&mut self, _this: NodeId, _parent: &NodeRef) {}

    /// Called right after the node stopped being a child of its parent
    fn on_unparented(&mut self) {}

    /// Called after the node's local transform changed
    fn on_local_transform_changed(&mut self) {}

    /// True if the node asked to be drawn on the next draw pass
    fn redraw_requested(&self) -> bool {
        false
    }

    /// Record debug draw commands
    fn on_draw(&mut self, _settings: &DebugCollisionSettings) {}
}

/// Plain positioned node with no collision capability
#[derive(Debug, Clone)]
pub struct Node2D {
    name: String,
    transform: Transform2D,
}

impl Node2D {
    /// Create a node at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform2D::identity(),
        }
    }

    /// Local transform
    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Replace the local transform
    pub fn set_transform(&mut self, transform: Transform2D) {
        self.transform = transform;
    }
}

impl SceneNode for Node2D {
    fn name(&self) -> &str {
        &self.name
    }
}
