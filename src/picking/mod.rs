//! Pointer picking and drag state.
//!
//! Hit-tests screen coordinates against effector targets and the root bone,
//! and moves whatever is grabbed while the pointer is held.

mod controller;

pub use controller::{Grab, PickController};
