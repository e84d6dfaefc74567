//! Bone hierarchy data model.
//!
//! A [`BoneTree`] owns every [`Bone`] in a flat arena; parent links are
//! plain [`BoneId`] back-references. The [`EffectorIndex`] is a one-shot
//! snapshot of the effector-carrying bones used by picking and rendering.
//!
//! The solver works in 3D, but the editor only looks at two axes: Y is the
//! screen x coordinate and Z the screen y coordinate (see [`to_screen`]).

mod bone;
mod effectors;
mod tree;

pub use bone::{set_screen, to_screen, Bone, BoneId, Effector, WorldTransform};
pub use effectors::EffectorIndex;
pub use tree::BoneTree;
