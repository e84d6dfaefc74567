//! Input handling: pointer event types and the tracker that converts raw
//! window notifications into editor events.

/// Platform-agnostic input events.
pub mod event;
/// Cursor/button tracking.
pub mod pointer;

pub use event::{InputEvent, MouseButton};
pub use pointer::PointerTracker;
