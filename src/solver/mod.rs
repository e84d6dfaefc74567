//! Solver boundary.
//!
//! The editor treats inverse kinematics as an opaque capability: a
//! [`Solver`] is built once from the tree and then asked to `solve` once per
//! tick, after input handling. It may rewrite any bone's local pose; the
//! editor does not inspect the result.

mod ccd;

pub use ccd::CcdSolver;

use crate::skeleton::BoneTree;

/// Adjusts bone poses so effector tips approach their targets.
///
/// The session owns the tree, so the solver receives it on every call
/// rather than holding on to it.
pub trait Solver {
    /// Run one solve pass, mutating `local_position`/`local_rotation` in
    /// place.
    fn solve(&mut self, tree: &mut BoneTree);
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn solve(&mut self, tree: &mut BoneTree) {
        (**self).solve(tree);
    }
}

/// A solver that leaves the pose untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSolver;

impl Solver for NullSolver {
    fn solve(&mut self, _tree: &mut BoneTree) {}
}
