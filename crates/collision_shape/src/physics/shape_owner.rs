//! Shape-owner registry kept by collision hosts
//!
//! A collision host (area, static body, rigid body...) does not know about
//! its child nodes directly. Instead each child that contributes geometry is
//! given a *shape owner*: an entry keyed by [`OwnerId`] holding the child's
//! local transform, its shapes and its flags. Physics queries read this
//! registry; the owning child is the only writer of its entry.
//!
//! Entries live in a [`SlotMap`], so a handle that outlives its entry is
//! detected by generation instead of aliasing a newer owner.

use crate::foundation::math::Transform2D;
use crate::physics::shape::ShapeRef;
use crate::scene::node::NodeId;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle issued by a collision host for one shape owner
    pub struct OwnerId;
}

/// Registry errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeOwnerError {
    /// The handle does not name a live entry
    #[error("unknown shape owner {0:?}")]
    UnknownOwner(OwnerId),

    /// Shape index past the end of the owner's shape list
    #[error("shape index {index} out of range for owner {owner:?} ({count} shapes)")]
    ShapeIndexOutOfRange {
        /// Owner that was addressed
        owner: OwnerId,
        /// Requested index
        index: usize,
        /// Number of shapes the owner holds
        count: usize,
    },
}

/// Registry entry for one shape owner
#[derive(Debug, Clone)]
pub struct ShapeOwnerData {
    /// Node that created the entry
    pub owner: NodeId,
    /// Owner's transform relative to the host
    pub transform: Transform2D,
    /// Registered shapes, in insertion order
    pub shapes: Vec<ShapeRef>,
    /// Excluded from collision while set
    pub disabled: bool,
    /// Shapes only collide in one direction
    pub one_way_collision: bool,
}

impl ShapeOwnerData {
    fn new(owner: NodeId) -> Self {
        Self {
            owner,
            transform: Transform2D::identity(),
            shapes: Vec::new(),
            disabled: false,
            one_way_collision: false,
        }
    }
}

/// Slotmap-backed registry of shape owners
#[derive(Debug, Default)]
pub struct ShapeOwnerRegistry {
    owners: SlotMap<OwnerId, ShapeOwnerData>,
    total_shapes: usize,
}

impl ShapeOwnerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh entry for `owner` with identity transform and no shapes
    pub fn create(&mut self, owner: NodeId) -> OwnerId {
        self.owners.insert(ShapeOwnerData::new(owner))
    }

    /// Remove an entry together with all of its shapes
    pub fn remove(&mut self, id: OwnerId) -> Result<ShapeOwnerData, ShapeOwnerError> {
        let data = self.owners.remove(id).ok_or(ShapeOwnerError::UnknownOwner(id))?;
        self.total_shapes -= data.shapes.len();
        Ok(data)
    }

    /// Append a shape to an entry
    pub fn add_shape(&mut self, id: OwnerId, shape: ShapeRef) -> Result<(), ShapeOwnerError> {
        self.get_mut(id)?.shapes.push(shape);
        self.total_shapes += 1;
        Ok(())
    }

    /// Remove the shape at `index` from an entry
    pub fn remove_shape(&mut self, id: OwnerId, index: usize) -> Result<ShapeRef, ShapeOwnerError> {
        let data = self.get_mut(id)?;
        let count = data.shapes.len();
        if index >= count {
            return Err(ShapeOwnerError::ShapeIndexOutOfRange { owner: id, index, count });
        }
        let shape = data.shapes.remove(index);
        self.total_shapes -= 1;
        Ok(shape)
    }

    /// Drop every shape of an entry; the entry itself stays
    pub fn clear_shapes(&mut self, id: OwnerId) -> Result<(), ShapeOwnerError> {
        let data = self.get_mut(id)?;
        let removed = data.shapes.len();
        data.shapes.clear();
        self.total_shapes -= removed;
        Ok(())
    }

    /// Set an entry's transform
    pub fn set_transform(&mut self, id: OwnerId, transform: Transform2D) -> Result<(), ShapeOwnerError> {
        self.get_mut(id)?.transform = transform;
        Ok(())
    }

    /// Set an entry's disabled flag
    pub fn set_disabled(&mut self, id: OwnerId, disabled: bool) -> Result<(), ShapeOwnerError> {
        self.get_mut(id)?.disabled = disabled;
        Ok(())
    }

    /// Set an entry's one-way-collision flag
    pub fn set_one_way_collision(&mut self, id: OwnerId, enabled: bool) -> Result<(), ShapeOwnerError> {
        self.get_mut(id)?.one_way_collision = enabled;
        Ok(())
    }

    /// Look up an entry
    pub fn get(&self, id: OwnerId) -> Result<&ShapeOwnerData, ShapeOwnerError> {
        self.owners.get(id).ok_or(ShapeOwnerError::UnknownOwner(id))
    }

    fn get_mut(&mut self, id: OwnerId) -> Result<&mut ShapeOwnerData, ShapeOwnerError> {
        self.owners.get_mut(id).ok_or(ShapeOwnerError::UnknownOwner(id))
    }

    /// Check whether `id` names a live entry
    pub fn contains(&self, id: OwnerId) -> bool {
        self.owners.contains_key(id)
    }

    /// Handles of every live entry
    pub fn owners(&self) -> Vec<OwnerId> {
        self.owners.keys().collect()
    }

    /// Iterate over every live entry
    pub fn iter(&self) -> impl Iterator<Item = (OwnerId, &ShapeOwnerData)> {
        self.owners.iter()
    }

    /// Node that created an entry
    pub fn owner_node(&self, id: OwnerId) -> Option<NodeId> {
        self.owners.get(id).map(|data| data.owner)
    }

    /// Entry handle created by `node`, if any
    pub fn find_by_node(&self, node: NodeId) -> Option<OwnerId> {
        self.owners
            .iter()
            .find(|(_, data)| data.owner == node)
            .map(|(id, _)| id)
    }

    /// Number of shapes an entry holds (0 for unknown handles)
    pub fn shape_count(&self, id: OwnerId) -> usize {
        self.owners.get(id).map_or(0, |data| data.shapes.len())
    }

    /// Shape at `index` of an entry
    pub fn shape(&self, id: OwnerId, index: usize) -> Option<&ShapeRef> {
        self.owners.get(id).and_then(|data| data.shapes.get(index))
    }

    /// Shapes of an entry (empty for unknown handles)
    pub fn shapes(&self, id: OwnerId) -> &[ShapeRef] {
        self.owners
            .get(id)
            .map(|data| data.shapes.as_slice())
            .unwrap_or_default()
    }

    /// Transform of an entry
    pub fn transform(&self, id: OwnerId) -> Option<Transform2D> {
        self.owners.get(id).map(|data| data.transform)
    }

    /// Disabled flag of an entry
    pub fn is_disabled(&self, id: OwnerId) -> Option<bool> {
        self.owners.get(id).map(|data| data.disabled)
    }

    /// One-way-collision flag of an entry
    pub fn is_one_way_collision(&self, id: OwnerId) -> Option<bool> {
        self.owners.get(id).map(|data| data.one_way_collision)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// True if there are no entries
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Number of shapes across all entries
    pub fn total_shape_count(&self) -> usize {
        self.total_shapes
    }
}
