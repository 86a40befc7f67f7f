//! # Collision Shape
//!
//! Scene-graph collision shape nodes for a 2D engine.
//!
//! ## Features
//!
//! - **Shape Owner Nodes**: Give a parent collision object its shape, transform and flags
//! - **Collision Hosts**: Shape-owner registries keyed by generational handles
//! - **Scene Tree**: Synchronous attach/detach/transform lifecycle delivery
//! - **Debug Drawing**: Recorded draw commands for collision visualization
//! - **Configuration**: TOML/RON debug settings
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_shape::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut tree = SceneTree::new();
//! let body = Rc::new(RefCell::new(CollisionObject::new("body")));
//! let body_id = tree.insert(Rc::clone(&body));
//!
//! let shape = Rc::new(RefCell::new(ShapeOwnerNode::new("CollisionShape")));
//! shape.borrow_mut().set_shape(Some(Rc::new(CircleShape::new(8.0))));
//! let shape_id = tree.insert(Rc::clone(&shape));
//!
//! tree.add_child(body_id, shape_id)?;
//! assert_eq!(body.borrow().registry().total_shape_count(), 1);
//! # Ok::<(), SceneError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod debug;
pub mod physics;
pub mod scene;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, DebugCollisionSettings},
        debug::{CanvasItem, DrawCommand},
        events::{ChangedSignal, SubscriberId},
        foundation::{
            color::Color,
            math::{Rect2, Transform2D, Vec2},
        },
        physics::{
            CapsuleShape, CircleShape, CollisionHost, CollisionObject, ConvexPolygonShape, OwnerId,
            RectangleShape, SegmentShape, Shape2D, ShapeOwnerRegistry, ShapeRef,
        },
        scene::{
            ConfigurationWarning, Node2D, NodeId, NodeRef, SceneError, SceneNode, SceneTree,
            ShapeOwnerNode,
        },
    };
}
