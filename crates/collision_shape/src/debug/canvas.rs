//! Per-node debug draw lists
//!
//! Every drawable node owns a [`CanvasItem`]. Drawing records
//! [`DrawCommand`]s into the item's list; a renderer (out of scope here)
//! consumes them. The item also carries the "needs redraw" flag that the
//! scene tree polls before asking a node to draw again.

use crate::foundation::color::Color;
use crate::foundation::math::{Rect2, Vec2};
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Debug draw primitives recorded on a canvas item
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Line segment from `from` to `to`
    Line {
        /// Start point
        from: Vec2,
        /// End point
        to: Vec2,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },

    /// Filled primitive (point, line or triangle) with per-vertex colors
    Primitive {
        /// One to three vertices
        points: Vec<Vec2>,
        /// Color of each vertex
        colors: Vec<Color>,
    },

    /// Filled circle
    Circle {
        /// Circle center
        center: Vec2,
        /// Circle radius
        radius: f32,
        /// Fill color
        color: Color,
    },

    /// Axis-aligned rectangle
    Rect {
        /// Rectangle bounds
        rect: Rect2,
        /// Fill or outline color
        color: Color,
        /// Filled when set, outlined otherwise
        filled: bool,
    },

    /// Filled convex polygon
    Polygon {
        /// Vertices in winding order
        points: Vec<Vec2>,
        /// Fill color
        color: Color,
    },
}

/// Handle that can request a redraw of a canvas item without borrowing it
///
/// Holds the flag weakly, so a dropped canvas item simply ignores requests.
#[derive(Clone, Debug)]
pub struct RedrawHandle(Weak<Cell<bool>>);

impl RedrawHandle {
    /// Request a redraw; returns false if the canvas item no longer exists
    pub fn request(&self) -> bool {
        match self.0.upgrade() {
            Some(flag) => {
                flag.set(true);
                true
            }
            None => false,
        }
    }
}

/// Recorded draw list plus redraw flag for one node
#[derive(Debug)]
pub struct CanvasItem {
    commands: Vec<DrawCommand>,
    redraw: Rc<Cell<bool>>,
}

impl Default for CanvasItem {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasItem {
    /// Create an empty canvas item; a fresh item starts with a redraw pending
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            redraw: Rc::new(Cell::new(true)),
        }
    }

    /// Mark the item dirty so it is drawn on the next draw pass
    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// Weak handle for deferred redraw requests (e.g. from signal callbacks)
    pub fn redraw_handle(&self) -> RedrawHandle {
        RedrawHandle(Rc::downgrade(&self.redraw))
    }

    /// True if a redraw has been requested and not yet taken
    pub fn is_redraw_pending(&self) -> bool {
        self.redraw.get()
    }

    /// Consume the pending redraw request
    pub fn take_redraw_request(&self) -> bool {
        self.redraw.replace(false)
    }

    /// Drop every recorded command
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Record a line segment
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }

    /// Record a primitive with one color per point
    pub fn draw_primitive(&mut self, points: Vec<Vec2>, colors: Vec<Color>) {
        debug_assert_eq!(points.len(), colors.len());
        self.commands.push(DrawCommand::Primitive { points, colors });
    }

    /// Record a filled circle
    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    /// Record a rectangle
    pub fn draw_rect(&mut self, rect: Rect2, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Rect { rect, color, filled });
    }

    /// Record a filled polygon
    pub fn draw_polygon(&mut self, points: Vec<Vec2>, color: Color) {
        self.commands.push(DrawCommand::Polygon { points, color });
    }
}
