//! Shape owner node
//!
//! A `ShapeOwnerNode` gives its parent collision object a shape. It does no
//! collision work itself: it mirrors its shape, local transform and flags
//! into the parent's shape-owner registry and keeps that entry current.
//!
//! ## Synchronization rules
//!
//! - The owner handle exists exactly while the node is attached to a
//!   [`CollisionHost`] parent ([`HostLink`] holds both).
//! - Every setter pushes its change to the host before returning.
//! - Replacing the shape clears the entry's shapes before adding the new
//!   one, so the entry never holds two shapes from this node.
//! - Detaching always drops the link, even if the host is gone or busy.

use crate::config::DebugCollisionSettings;
use crate::debug::canvas::CanvasItem;
use crate::events::SubscriberId;
use crate::foundation::color::Color;
use crate::foundation::math::{constants::COS_45, Rect2, Transform2D, Vec2};
use crate::physics::host::{CollisionHost, OwnerId};
use crate::physics::shape::ShapeRef;
use crate::scene::node::{NodeId, NodeRef, SceneNode, WeakNodeRef};
use std::rc::Rc;

/// Margin added around the shape bounds for the editor rect
pub const ITEM_RECT_MARGIN: f32 = 3.0;

/// Length of the one-way direction indicator
pub const ONE_WAY_ARROW_LENGTH: f32 = 20.0;

/// Size of the one-way arrowhead
pub const ONE_WAY_ARROW_SIZE: f32 = 8.0;

/// Stroke width of the one-way indicator line
pub const ONE_WAY_LINE_WIDTH: f32 = 3.0;

/// Advisory configuration problems, shown by tooling
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationWarning {
    /// The parent cannot host shape owners
    #[error(
        "ShapeOwnerNode only serves to provide a collision shape to a collision object. \
         Add it as a child of an area or body to give it a shape."
    )]
    NotUnderCollisionHost,

    /// No shape resource is set
    #[error("A shape must be provided for ShapeOwnerNode to function. Create a shape resource for it.")]
    MissingShape,
}

/// Why a host call could not be made
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
enum HostUnavailable {
    #[error("collision host was dropped")]
    Dropped,
    #[error("collision host is borrowed")]
    Busy,
    #[error("parent is not a collision host")]
    NotAHost,
}

/// Attachment to a host: the host and the owner handle it issued
#[derive(Debug)]
struct HostLink {
    host: WeakNodeRef,
    owner: OwnerId,
}

impl HostLink {
    fn with_host<R>(&self, f: impl FnOnce(&mut dyn CollisionHost, OwnerId) -> R) -> Result<R, HostUnavailable> {
        let node = self.host.upgrade().ok_or(HostUnavailable::Dropped)?;
        let mut node = node.try_borrow_mut().map_err(|_| HostUnavailable::Busy)?;
        let host = node.as_collision_host_mut().ok_or(HostUnavailable::NotAHost)?;
        Ok(f(host, self.owner))
    }
}

/// Immediate structural parent, whatever its type
#[derive(Debug)]
struct ParentLink {
    node: WeakNodeRef,
    /// `None` when the parent was borrowed and could not be probed
    is_collision_host: Option<bool>,
}

/// Scene node that provides a shape to its parent collision object
#[derive(Debug)]
pub struct ShapeOwnerNode {
    name: String,
    shape: Option<ShapeRef>,
    disabled: bool,
    one_way_collision: bool,
    transform: Transform2D,
    link: Option<HostLink>,
    parent: Option<ParentLink>,
    item_rect: Rect2,
    canvas: CanvasItem,
    subscriber: SubscriberId,
    configuration_warning: Option<ConfigurationWarning>,
}

impl Default for ShapeOwnerNode {
    fn default() -> Self {
        Self::new("ShapeOwnerNode")
    }
}

impl ShapeOwnerNode {
    /// Create an unattached node with no shape and both flags cleared
    pub fn new(name: impl Into<String>) -> Self {
        let mut node = Self {
            name: name.into(),
            shape: None,
            disabled: false,
            one_way_collision: false,
            transform: Transform2D::identity(),
            link: None,
            parent: None,
            item_rect: Rect2::new(-10.0, -10.0, 20.0, 20.0),
            canvas: CanvasItem::new(),
            subscriber: SubscriberId::next(),
            configuration_warning: None,
        };
        node.update_configuration_warning();
        node
    }

    /// Replace the shape resource, or clear it with `None`
    pub fn set_shape(&mut self, shape: Option<ShapeRef>) {
        if let Some(old) = &self.shape {
            old.changed().disconnect(self.subscriber);
        }
        self.shape = shape;
        self.canvas.request_redraw();

        let shape = self.shape.clone();
        self.sync("set_shape", |host, owner| {
            host.shape_owner_clear_shapes(owner);
            if let Some(shape) = shape {
                host.shape_owner_add_shape(owner, shape);
            }
        });

        if let Some(shape) = &self.shape {
            let redraw = self.canvas.redraw_handle();
            shape.changed().connect(self.subscriber, move || {
                redraw.request();
            });
        }

        self.update_configuration_warning();
    }

    /// Current shape resource
    pub fn shape(&self) -> Option<&ShapeRef> {
        self.shape.as_ref()
    }

    /// Enable or disable the shape for collision
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.canvas.request_redraw();
        self.sync("set_disabled", |host, owner| host.shape_owner_set_disabled(owner, disabled));
    }

    /// True if the shape is excluded from collision
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Make the shape collide in one direction only
    pub fn set_one_way_collision(&mut self, enabled: bool) {
        self.one_way_collision = enabled;
        self.canvas.request_redraw();
        self.sync("set_one_way_collision", |host, owner| {
            host.shape_owner_set_one_way_collision(owner, enabled);
        });
    }

    /// True if the shape is a one-way collider
    pub fn is_one_way_collision_enabled(&self) -> bool {
        self.one_way_collision
    }

    /// Local transform relative to the parent
    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Replace the local transform and notify the host
    pub fn set_transform(&mut self, transform: Transform2D) {
        self.transform = transform;
        self.on_local_transform_changed();
    }

    /// Move the node without touching rotation or scale
    pub fn set_position(&mut self, position: Vec2) {
        self.set_transform(Transform2D { position, ..self.transform });
    }

    /// Editor/debug bounds computed on the last debug draw
    ///
    /// Not authoritative geometry; physics uses the host registry.
    pub fn item_rect(&self) -> Rect2 {
        self.item_rect
    }

    /// Owner handle issued by the current host
    pub fn owner_id(&self) -> Option<OwnerId> {
        self.link.as_ref().map(|link| link.owner)
    }

    /// True while registered with a collision host
    pub fn is_attached(&self) -> bool {
        self.link.is_some()
    }

    /// Immediate structural parent, if it is still alive
    pub fn parent(&self) -> Option<NodeRef> {
        self.parent.as_ref().and_then(|parent| parent.node.upgrade())
    }

    /// Recorded debug draw commands
    pub fn canvas_item(&self) -> &CanvasItem {
        &self.canvas
    }

    /// Identity used for shape change subscriptions
    pub fn subscriber_id(&self) -> SubscriberId {
        self.subscriber
    }

    /// Current advisory warning, if any
    pub fn configuration_warning(&self) -> Option<ConfigurationWarning> {
        self.configuration_warning
    }

    fn update_configuration_warning(&mut self) {
        let host_capability = self.parent.as_ref().map(|parent| parent.is_collision_host);
        let warning = if matches!(host_capability, None | Some(Some(false))) {
            Some(ConfigurationWarning::NotUnderCollisionHost)
        } else if self.shape.is_none() {
            Some(ConfigurationWarning::MissingShape)
        } else {
            None
        };

        if warning != self.configuration_warning {
            if let Some(warning) = &warning {
                log::debug!("{}: {}", self.name, warning);
            }
            self.configuration_warning = warning;
        }
    }

    /// Run `f` against the attached host; no-op when unattached
    fn sync(&self, operation: &str, f: impl FnOnce(&mut dyn CollisionHost, OwnerId)) {
        let Some(link) = &self.link else {
            return;
        };
        match link.with_host(f) {
            Ok(()) => log::trace!("{}: pushed {} to owner {:?}", self.name, operation, link.owner),
            Err(err) => log::warn!("{}: {} not synchronized: {}", self.name, operation, err),
        }
    }

    /// Remove the owner entry from the host and forget the link
    fn release_host(&mut self) {
        let Some(link) = self.link.take() else {
            return;
        };
        match link.with_host(|host, owner| host.remove_shape_owner(owner)) {
            Ok(()) => log::debug!("{}: released owner {:?}", self.name, link.owner),
            Err(err) => log::warn!("{}: owner {:?} dropped locally: {}", self.name, link.owner, err),
        }
    }

    fn draw_one_way_indicator(&mut self, color: Color) {
        let line_to = Vec2::new(0.0, ONE_WAY_ARROW_LENGTH);
        self.canvas.draw_line(Vec2::zeros(), line_to, color, ONE_WAY_LINE_WIDTH);

        let points = vec![
            line_to + Vec2::new(0.0, ONE_WAY_ARROW_SIZE),
            line_to + Vec2::new(COS_45 * ONE_WAY_ARROW_SIZE, 0.0),
            line_to + Vec2::new(-COS_45 * ONE_WAY_ARROW_SIZE, 0.0),
        ];
        let colors = vec![color; points.len()];
        self.canvas.draw_primitive(points, colors);
    }
}

impl SceneNode for ShapeOwnerNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_parented(&mut self, this: NodeId, parent: &NodeRef) {
        if self.link.is_some() {
            log::warn!("{}: parented while still attached; releasing old owner", self.name);
            self.release_host();
        }

        let mut is_collision_host = None;
        match parent.try_borrow_mut() {
            Ok(mut parent_node) => {
                is_collision_host = Some(false);
                if let Some(host) = parent_node.as_collision_host_mut() {
                    is_collision_host = Some(true);
                    let owner = host.create_shape_owner(this);
                    if let Some(shape) = &self.shape {
                        host.shape_owner_add_shape(owner, Rc::clone(shape));
                    }
                    host.shape_owner_set_transform(owner, self.transform);
                    host.shape_owner_set_disabled(owner, self.disabled);
                    host.shape_owner_set_one_way_collision(owner, self.one_way_collision);

                    self.link = Some(HostLink {
                        host: Rc::downgrade(parent),
                        owner,
                    });
                    log::debug!("{}: attached as owner {:?} of {}", self.name, owner, parent_node.name());
                } else {
                    log::debug!("{}: parent {} is not a collision host", self.name, parent_node.name());
                }
            }
            Err(_) => log::warn!("{}: parent is borrowed; not registered", self.name),
        }

        self.parent = Some(ParentLink {
            node: Rc::downgrade(parent),
            is_collision_host,
        });
        self.update_configuration_warning();
    }

    fn on_unparented(&mut self) {
        self.release_host();
        self.parent = None;
        self.update_configuration_warning();
    }

    fn on_local_transform_changed(&mut self) {
        let transform = self.transform;
        self.sync("transform", |host, owner| host.shape_owner_set_transform(owner, transform));
    }

    fn redraw_requested(&self) -> bool {
        self.canvas.is_redraw_pending()
    }

    fn on_draw(&mut self, settings: &DebugCollisionSettings) {
        self.canvas.take_redraw_request();
        self.canvas.clear();

        if !settings.is_active() {
            return;
        }
        let Some(shape) = self.shape.clone() else {
            return;
        };

        self.item_rect = Rect2::empty();

        let mut color = settings.collisions_color;
        if self.disabled {
            color = color.desaturated();
        }
        shape.draw(&mut self.canvas, color);

        self.item_rect = shape.bounding_rect().grow(ITEM_RECT_MARGIN);

        if self.one_way_collision {
            self.draw_one_way_indicator(settings.collisions_color.with_alpha(1.0));
        }
    }
}

impl Drop for ShapeOwnerNode {
    fn drop(&mut self) {
        if let Some(shape) = &self.shape {
            shape.changed().disconnect(self.subscriber);
        }
        self.release_host();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::canvas::DrawCommand;
    use crate::foundation::logging;
    use crate::physics::collision_object::CollisionObject;
    use crate::physics::shape::{same_shape, CircleShape, RectangleShape, Shape2D};
    use crate::scene::node::Node2D;
    use crate::scene::tree::SceneTree;
    use approx::assert_relative_eq;
    use std::cell::RefCell;

    struct Fixture {
        tree: SceneTree,
        body: Rc<RefCell<CollisionObject>>,
        body_id: NodeId,
        node: Rc<RefCell<ShapeOwnerNode>>,
        node_id: NodeId,
    }

    fn fixture() -> Fixture {
        logging::init_for_tests();
        let mut tree = SceneTree::new();
        let body = Rc::new(RefCell::new(CollisionObject::new("body")));
        let body_id = tree.insert(Rc::clone(&body));
        let node = Rc::new(RefCell::new(ShapeOwnerNode::default()));
        let node_id = tree.insert(Rc::clone(&node));
        Fixture { tree, body, body_id, node, node_id }
    }

    fn circle(radius: f32) -> Rc<CircleShape> {
        Rc::new(CircleShape::new(radius))
    }

    #[test]
    fn test_new_node_defaults() {
        let node = ShapeOwnerNode::default();

        assert!(node.shape().is_none());
        assert!(!node.is_disabled());
        assert!(!node.is_one_way_collision_enabled());
        assert!(!node.is_attached());
        assert!(node.owner_id().is_none());
        assert!(node.parent().is_none());
        assert_eq!(node.item_rect(), Rect2::new(-10.0, -10.0, 20.0, 20.0));
        assert_eq!(node.configuration_warning(), Some(ConfigurationWarning::NotUnderCollisionHost));
    }

    #[test]
    fn test_attach_pushes_full_state() {
        let mut f = fixture();
        let shape = circle(5.0);
        let transform = Transform2D::from_position(Vec2::new(4.0, -2.0));
        {
            let mut node = f.node.borrow_mut();
            node.set_shape(Some(shape.clone()));
            node.set_transform(transform);
            node.set_disabled(true);
            node.set_one_way_collision(true);
        }

        f.tree.add_child(f.body_id, f.node_id).unwrap();

        let owner = f.node.borrow().owner_id().unwrap();
        let body = f.body.borrow();
        let entry = body.registry().get(owner).unwrap();
        let expected: ShapeRef = shape;
        assert_eq!(entry.shapes.len(), 1);
        assert!(same_shape(&entry.shapes[0], &expected));
        assert_eq!(entry.transform, transform);
        assert!(entry.disabled);
        assert!(entry.one_way_collision);
        assert_eq!(entry.owner, f.node_id);
    }

    #[test]
    fn test_detach_clears_handle_and_entry() {
        let mut f = fixture();
        f.node.borrow_mut().set_shape(Some(circle(1.0)));
        f.tree.add_child(f.body_id, f.node_id).unwrap();
        let owner = f.node.borrow().owner_id().unwrap();

        f.tree.remove_child(f.node_id).unwrap();

        let node = f.node.borrow();
        assert!(node.owner_id().is_none());
        assert!(node.parent().is_none());
        assert!(!f.body.borrow().registry().contains(owner));
        assert_eq!(f.body.borrow().registry().total_shape_count(), 0);
    }

    #[test]
    fn test_single_registration_on_shape_swap() {
        let mut f = fixture();
        let a: ShapeRef = circle(1.0);
        let b: ShapeRef = Rc::new(RectangleShape::new(Vec2::new(2.0, 2.0)));
        f.tree.add_child(f.body_id, f.node_id).unwrap();
        let owner = f.node.borrow().owner_id().unwrap();

        f.node.borrow_mut().set_shape(Some(Rc::clone(&a)));
        f.node.borrow_mut().set_shape(Some(Rc::clone(&b)));

        let body = f.body.borrow();
        let shapes = body.registry().shapes(owner);
        assert_eq!(shapes.len(), 1);
        assert!(same_shape(&shapes[0], &b));
        assert!(!same_shape(&shapes[0], &a));
    }

    #[test]
    fn test_clear_shape_while_attached() {
        let mut f = fixture();
        f.node.borrow_mut().set_shape(Some(circle(1.0)));
        f.tree.add_child(f.body_id, f.node_id).unwrap();
        assert_eq!(f.node.borrow().configuration_warning(), None);

        f.node.borrow_mut().set_shape(None);

        let owner = f.node.borrow().owner_id().unwrap();
        assert_eq!(f.body.borrow().registry().shape_count(owner), 0);
        assert!(f.body.borrow().registry().contains(owner));
        assert_eq!(f.node.borrow().configuration_warning(), Some(ConfigurationWarning::MissingShape));
    }

    #[test]
    fn test_flag_push_is_idempotent() {
        let mut f = fixture();
        f.tree.add_child(f.body_id, f.node_id).unwrap();
        let owner = f.node.borrow().owner_id().unwrap();

        f.node.borrow_mut().set_disabled(true);
        let once = f.body.borrow().registry().get(owner).unwrap().clone();
        f.node.borrow_mut().set_disabled(true);
        let twice = f.body.borrow().registry().get(owner).unwrap().clone();

        assert_eq!(once.disabled, twice.disabled);
        assert_eq!(once.one_way_collision, twice.one_way_collision);
        assert_eq!(once.transform, twice.transform);
        assert_eq!(once.shapes.len(), twice.shapes.len());
        assert!(twice.disabled);
        assert!(!twice.one_way_collision);
    }

    #[test]
    fn test_one_way_flag_follows_while_attached() {
        let mut f = fixture();
        f.node.borrow_mut().set_disabled(true);
        f.tree.add_child(f.body_id, f.node_id).unwrap();
        let owner = f.node.borrow().owner_id().unwrap();
        assert_eq!(f.body.borrow().registry().is_one_way_collision(owner), Some(false));

        f.node.borrow_mut().set_one_way_collision(true);
        assert_eq!(f.body.borrow().registry().is_one_way_collision(owner), Some(true));
        assert_eq!(f.body.borrow().registry().is_disabled(owner), Some(true));

        f.node.borrow_mut().set_one_way_collision(false);
        assert_eq!(f.body.borrow().registry().is_one_way_collision(owner), Some(false));
        assert_eq!(f.body.borrow().registry().is_disabled(owner), Some(true));
        assert!(!f.node.borrow().is_one_way_collision_enabled());
    }

    #[test]
    fn test_borrowed_parent_is_not_reported_as_non_host() {
        logging::init_for_tests();
        let node = Rc::new(RefCell::new(ShapeOwnerNode::default()));
        node.borrow_mut().set_shape(Some(circle(1.0)));
        let host: NodeRef = Rc::new(RefCell::new(CollisionObject::new("busy")));
        let this = NodeId::from(slotmap::KeyData::from_ffi(1));

        let guard = host.borrow();
        node.borrow_mut().on_parented(this, &host);
        drop(guard);

        let node = node.borrow();
        assert!(!node.is_attached());
        assert!(node.parent().is_some());
        assert_ne!(node.configuration_warning(), Some(ConfigurationWarning::NotUnderCollisionHost));
    }

    #[test]
    fn test_transform_change_is_pushed() {
        let mut f = fixture();
        f.tree.add_child(f.body_id, f.node_id).unwrap();
        let owner = f.node.borrow().owner_id().unwrap();

        f.node.borrow_mut().set_position(Vec2::new(7.0, 8.0));

        let pushed = f.body.borrow().registry().transform(owner).unwrap();
        assert_eq!(pushed.position, Vec2::new(7.0, 8.0));
    }

    #[test]
    fn test_unattached_setters_only_touch_local_state() {
        let mut node = ShapeOwnerNode::default();
        let shape = circle(3.0);

        node.set_shape(Some(shape.clone()));
        node.set_disabled(true);
        node.set_one_way_collision(true);
        node.set_position(Vec2::new(1.0, 1.0));

        assert!(node.shape().is_some());
        assert!(node.is_disabled());
        assert!(node.is_one_way_collision_enabled());
        assert_eq!(node.transform().position, Vec2::new(1.0, 1.0));
        assert!(!node.is_attached());
        assert!(shape.changed().is_connected(node.subscriber_id()));
    }

    #[test]
    fn test_non_host_parent_yields_no_registration() {
        let mut f = fixture();
        let plain = f.tree.insert(Rc::new(RefCell::new(Node2D::new("plain"))));
        f.node.borrow_mut().set_shape(Some(circle(1.0)));

        f.tree.add_child(plain, f.node_id).unwrap();

        let node = f.node.borrow();
        assert!(!node.is_attached());
        assert!(node.parent().is_some());
        assert_eq!(node.configuration_warning(), Some(ConfigurationWarning::NotUnderCollisionHost));
        assert!(f.body.borrow().registry().is_empty());
    }

    #[test]
    fn test_shape_change_requests_redraw_and_unsubscribes_old() {
        let mut node = ShapeOwnerNode::default();
        let old = circle(1.0);
        let new = circle(2.0);
        node.set_shape(Some(old.clone()));
        node.set_shape(Some(new.clone()));
        node.canvas_item().take_redraw_request();

        old.set_radius(5.0);
        assert!(!node.redraw_requested());

        new.set_radius(5.0);
        assert!(node.redraw_requested());
        assert_eq!(old.changed().subscriber_count(), 0);
        assert_eq!(new.changed().subscriber_count(), 1);
    }

    #[test]
    fn test_dropped_host_still_detaches_cleanly() {
        logging::init_for_tests();
        let node = Rc::new(RefCell::new(ShapeOwnerNode::default()));
        let this = NodeId::from(slotmap::KeyData::from_ffi(1));
        {
            let host: NodeRef = Rc::new(RefCell::new(CollisionObject::new("temp")));
            node.borrow_mut().on_parented(this, &host);
            assert!(node.borrow().is_attached());
        }

        node.borrow_mut().set_disabled(true);
        node.borrow_mut().on_unparented();

        let node = node.borrow();
        assert!(!node.is_attached());
        assert!(node.owner_id().is_none());
        assert!(node.is_disabled());
    }

    #[test]
    fn test_drop_removes_owner_entry() {
        let mut f = fixture();
        f.tree.add_child(f.body_id, f.node_id).unwrap();
        assert_eq!(f.body.borrow().registry().len(), 1);

        // detach from the tree without notifying, then drop the last strong ref
        let Fixture { tree, body, node, .. } = f;
        drop(tree);
        assert!(node.borrow().is_attached());
        drop(node);

        assert!(body.borrow().registry().is_empty());
    }

    #[test]
    fn test_disabled_draw_color_is_gray() {
        let mut node = ShapeOwnerNode::default();
        node.set_shape(Some(circle(5.0)));
        node.set_disabled(true);
        let settings = DebugCollisionSettings::debugging().with_color(Color::rgba(1.0, 0.0, 0.0, 0.4));

        node.on_draw(&settings);

        let DrawCommand::Circle { color, .. } = &node.canvas_item().commands()[0] else {
            panic!("expected the circle outline first");
        };
        assert_relative_eq!(color.r, 0.299);
        assert_relative_eq!(color.g, 0.299);
        assert_relative_eq!(color.b, 0.299);
        assert_relative_eq!(color.a, 0.4);
    }

    #[test]
    fn test_draw_updates_item_rect() {
        let mut node = ShapeOwnerNode::default();
        node.set_shape(Some(circle(5.0)));

        node.on_draw(&DebugCollisionSettings::debugging());

        assert_eq!(node.item_rect(), Rect2::new(-8.0, -8.0, 16.0, 16.0));
        assert_eq!(node.canvas_item().commands().len(), 1);
    }

    #[test]
    fn test_one_way_indicator_geometry() {
        let mut node = ShapeOwnerNode::default();
        node.set_shape(Some(circle(5.0)));
        node.set_one_way_collision(true);
        node.set_disabled(true);
        let base = Color::rgba(0.9, 0.2, 0.2, 0.4);

        node.on_draw(&DebugCollisionSettings::debugging().with_color(base));

        let commands = node.canvas_item().commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[1],
            DrawCommand::Line {
                from: Vec2::zeros(),
                to: Vec2::new(0.0, 20.0),
                color: base.with_alpha(1.0),
                width: 3.0,
            }
        );
        let DrawCommand::Primitive { points, colors } = &commands[2] else {
            panic!("expected the arrowhead primitive");
        };
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Vec2::new(0.0, 28.0));
        assert_relative_eq!(points[1].x, 5.656_854, epsilon = 1e-4);
        assert_relative_eq!(points[1].y, 20.0);
        assert_relative_eq!(points[2].x, -5.656_854, epsilon = 1e-4);
        assert_relative_eq!(points[2].y, 20.0);
        assert!(colors.iter().all(|c| c.a == 1.0));
    }

    #[test]
    fn test_draw_is_gated_by_settings_and_shape() {
        let mut node = ShapeOwnerNode::default();
        node.on_draw(&DebugCollisionSettings::debugging());
        assert!(node.canvas_item().commands().is_empty());
        assert_eq!(node.item_rect(), Rect2::new(-10.0, -10.0, 20.0, 20.0));

        node.set_shape(Some(circle(1.0)));
        node.on_draw(&DebugCollisionSettings::default());
        assert!(node.canvas_item().commands().is_empty());
        assert!(!node.redraw_requested());
    }
}
