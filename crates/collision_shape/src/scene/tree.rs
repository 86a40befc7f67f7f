//! Scene tree: node ownership, hierarchy and lifecycle delivery
//!
//! The tree owns every node through a strong [`NodeRef`] and keeps the
//! parent/child structure in a slotmap. Structural edits notify the affected
//! node synchronously before returning:
//!
//! - [`SceneTree::add_child`] → `on_parented`
//! - [`SceneTree::remove_child`] → `on_unparented`
//! - [`SceneTree::reparent`] → `on_unparented` then `on_parented`
//! - [`SceneTree::remove`] → `on_unparented` for the whole subtree, leaves first
//!
//! Nothing here is thread-safe; the tree is driven from one update loop.

use crate::config::DebugCollisionSettings;
use crate::scene::node::{NodeId, NodeRef, SceneNode};
use slotmap::SlotMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Structural scene errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The id does not name a node in this tree
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// The node already has a parent
    #[error("node {0:?} already has a parent")]
    AlreadyParented(NodeId),

    /// The node has no parent to be removed from
    #[error("node {0:?} has no parent")]
    NotParented(NodeId),

    /// Parenting would make a node its own ancestor
    #[error("making {child:?} a child of {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Requested parent
        parent: NodeId,
        /// Requested child
        child: NodeId,
    },

    /// The node is borrowed elsewhere and cannot be notified
    #[error("node {0:?} is already borrowed")]
    NodeBusy(NodeId),
}

struct NodeEntry {
    node: NodeRef,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Owner of a node hierarchy
pub struct SceneTree {
    nodes: SlotMap<NodeId, NodeEntry>,
    settings: DebugCollisionSettings,
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneTree {
    /// Create an empty tree with default debug settings
    pub fn new() -> Self {
        Self::with_settings(DebugCollisionSettings::default())
    }

    /// Create an empty tree with the given debug settings
    pub fn with_settings(settings: DebugCollisionSettings) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            settings,
        }
    }

    /// Debug-collision settings used by [`SceneTree::draw`]
    pub fn settings(&self) -> &DebugCollisionSettings {
        &self.settings
    }

    /// Mutable debug-collision settings
    pub fn settings_mut(&mut self) -> &mut DebugCollisionSettings {
        &mut self.settings
    }

    /// Add a parentless node to the tree
    pub fn insert<N: SceneNode + 'static>(&mut self, node: Rc<RefCell<N>>) -> NodeId {
        let node: NodeRef = node;
        self.nodes.insert(NodeEntry {
            node,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Shared reference to a node
    pub fn get(&self, id: NodeId) -> Option<NodeRef> {
        self.nodes.get(id).map(|entry| Rc::clone(&entry.node))
    }

    /// Check whether `id` names a node in this tree
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|entry| entry.parent)
    }

    /// Children of a node, in insertion order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|entry| entry.children.as_slice())
            .unwrap_or_default()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Make `child` a child of `parent` and notify the child
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        let parent_node = self.node(parent)?;
        let child_entry = self.nodes.get(child).ok_or(SceneError::UnknownNode(child))?;
        if child_entry.parent.is_some() {
            return Err(SceneError::AlreadyParented(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(SceneError::WouldCreateCycle { parent, child });
        }

        if parent_node.try_borrow_mut().is_err() {
            return Err(SceneError::NodeBusy(parent));
        }
        let child_node = Rc::clone(&child_entry.node);
        let mut child_ref = child_node
            .try_borrow_mut()
            .map_err(|_| SceneError::NodeBusy(child))?;

        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);

        log::debug!("parented {:?} under {:?}", child, parent);
        child_ref.on_parented(child, &parent_node);
        Ok(())
    }

    /// Detach `child` from its parent and notify it; returns the former parent
    pub fn remove_child(&mut self, child: NodeId) -> Result<NodeId, SceneError> {
        let entry = self.nodes.get(child).ok_or(SceneError::UnknownNode(child))?;
        let parent = entry.parent.ok_or(SceneError::NotParented(child))?;

        let child_node = Rc::clone(&entry.node);
        let mut child_ref = child_node
            .try_borrow_mut()
            .map_err(|_| SceneError::NodeBusy(child))?;

        self.nodes[child].parent = None;
        if let Some(parent_entry) = self.nodes.get_mut(parent) {
            parent_entry.children.retain(|&id| id != child);
        }

        log::debug!("unparented {:?} from {:?}", child, parent);
        child_ref.on_unparented();
        Ok(parent)
    }

    /// Move `child` under `new_parent`
    ///
    /// The child sees a full detach followed by a full attach.
    pub fn reparent(&mut self, child: NodeId, new_parent: NodeId) -> Result<(), SceneError> {
        self.node(new_parent)?;
        if self.is_ancestor_or_self(child, new_parent) {
            return Err(SceneError::WouldCreateCycle { parent: new_parent, child });
        }
        if self.parent(child).is_some() {
            self.remove_child(child)?;
        }
        self.add_child(new_parent, child)
    }

    /// Remove a node and its whole subtree from the tree
    ///
    /// Descendants are detached leaves-first so every child is notified while
    /// its parent is still alive. Returns the removed node.
    pub fn remove(&mut self, id: NodeId) -> Result<NodeRef, SceneError> {
        if !self.nodes.contains_key(id) {
            return Err(SceneError::UnknownNode(id));
        }

        let children = self.nodes[id].children.clone();
        for child in children.into_iter().rev() {
            self.remove(child)?;
        }
        if self.nodes[id].parent.is_some() {
            self.remove_child(id)?;
        }

        self.nodes
            .remove(id)
            .map(|entry| entry.node)
            .ok_or(SceneError::UnknownNode(id))
    }

    /// Deliver a local-transform-changed notification to a node
    pub fn notify_local_transform_changed(&self, id: NodeId) -> Result<(), SceneError> {
        let node = self.node(id)?;
        let mut node_ref = node.try_borrow_mut().map_err(|_| SceneError::NodeBusy(id))?;
        node_ref.on_local_transform_changed();
        Ok(())
    }

    /// Draw pass: let every node with a pending redraw record its commands
    ///
    /// Returns the number of nodes that drew.
    pub fn draw(&self) -> usize {
        let mut drawn = 0;
        for (id, entry) in &self.nodes {
            let Ok(mut node) = entry.node.try_borrow_mut() else {
                log::warn!("skipping draw of {:?}: node is borrowed", id);
                continue;
            };
            if node.redraw_requested() {
                node.on_draw(&self.settings);
                drawn += 1;
            }
        }
        drawn
    }

    fn node(&self, id: NodeId) -> Result<NodeRef, SceneError> {
        self.get(id).ok_or(SceneError::UnknownNode(id))
    }

    /// True if `ancestor` is `node` or one of its ancestors
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}
