//! Debug module for visualization
//!
//! Collision shapes record their outlines into per-node draw lists when
//! debug collision drawing is enabled.

pub mod canvas;

pub use canvas::{CanvasItem, DrawCommand, RedrawHandle};
