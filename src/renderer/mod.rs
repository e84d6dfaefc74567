//! Overlay rendering.
//!
//! [`HierarchyRenderer`] turns the current pose and effector goals into
//! circle/line/label primitives on any [`Surface`]. [`DrawList`] records
//! those primitives, and [`tessellate`] flattens them into a line-list
//! vertex stream for GPU backends.

mod draw_list;
mod hierarchy;
mod surface;
mod vertex;

pub use draw_list::{DrawCommand, DrawList};
pub use hierarchy::HierarchyRenderer;
pub use surface::{Color, Surface};
pub use vertex::{as_bytes, tessellate, LineVertex};
