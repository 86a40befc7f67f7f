//! Collision object: the scene node that hosts shape owners
//!
//! Areas and bodies are all collision objects. Their geometry comes from
//! child shape owner nodes, which register themselves in the object's
//! [`ShapeOwnerRegistry`] through the [`CollisionHost`] trait.

use crate::foundation::math::Transform2D;
use crate::physics::host::{CollisionHost, OwnerId};
use crate::physics::shape::ShapeRef;
use crate::physics::shape_owner::{ShapeOwnerError, ShapeOwnerRegistry};
use crate::scene::node::{NodeId, SceneNode};

/// Scene node that implements [`CollisionHost`]
#[derive(Debug)]
pub struct CollisionObject {
    name: String,
    transform: Transform2D,
    registry: ShapeOwnerRegistry,
}

impl CollisionObject {
    /// Create a collision object with an empty registry
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform2D::identity(),
            registry: ShapeOwnerRegistry::new(),
        }
    }

    /// Shape-owner registry, for physics queries and inspection
    pub fn registry(&self) -> &ShapeOwnerRegistry {
        &self.registry
    }

    /// Local transform of the object itself
    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Replace the object's local transform
    pub fn set_transform(&mut self, transform: Transform2D) {
        self.transform = transform;
    }

    /// Remove a single shape from an owner
    pub fn shape_owner_remove_shape(&mut self, owner: OwnerId, index: usize) -> Result<ShapeRef, ShapeOwnerError> {
        self.registry.remove_shape(owner, index)
    }

    fn report(&self, operation: &str, result: Result<(), ShapeOwnerError>) {
        if let Err(err) = result {
            log::error!("{}: {} failed: {}", self.name, operation, err);
        }
    }
}

impl CollisionHost for CollisionObject {
    fn create_shape_owner(&mut self, owner: NodeId) -> OwnerId {
        let id = self.registry.create(owner);
        log::debug!("{}: created shape owner {:?} for node {:?}", self.name, id, owner);
        id
    }

    fn remove_shape_owner(&mut self, owner: OwnerId) {
        let result = self.registry.remove(owner).map(|data| {
            log::debug!(
                "{}: removed shape owner {:?} ({} shapes)",
                self.name,
                owner,
                data.shapes.len()
            );
        });
        self.report("remove_shape_owner", result);
    }

    fn shape_owner_add_shape(&mut self, owner: OwnerId, shape: ShapeRef) {
        log::trace!("{}: owner {:?} += {}", self.name, owner, shape.name());
        let result = self.registry.add_shape(owner, shape);
        self.report("shape_owner_add_shape", result);
    }

    fn shape_owner_clear_shapes(&mut self, owner: OwnerId) {
        let result = self.registry.clear_shapes(owner);
        self.report("shape_owner_clear_shapes", result);
    }

    fn shape_owner_set_transform(&mut self, owner: OwnerId, transform: Transform2D) {
        let result = self.registry.set_transform(owner, transform);
        self.report("shape_owner_set_transform", result);
    }

    fn shape_owner_set_disabled(&mut self, owner: OwnerId, disabled: bool) {
        let result = self.registry.set_disabled(owner, disabled);
        self.report("shape_owner_set_disabled", result);
    }

    fn shape_owner_set_one_way_collision(&mut self, owner: OwnerId, enabled: bool) {
        let result = self.registry.set_one_way_collision(owner, enabled);
        self.report("shape_owner_set_one_way_collision", result);
    }
}

impl SceneNode for CollisionObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_collision_host(&self) -> Option<&dyn CollisionHost> {
        Some(self)
    }

    fn as_collision_host_mut(&mut self) -> Option<&mut dyn CollisionHost> {
        Some(self)
    }
}
