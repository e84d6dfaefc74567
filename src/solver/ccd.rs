//! Planar cyclic coordinate descent.
//!
//! Every joint on an effector's chain is turned about the X axis, nearest
//! joint first, so that the tip swings toward the target in the Y/Z plane.

use glam::{Quat, Vec2};

use super::Solver;
use crate::options::SolverOptions;
use crate::skeleton::{to_screen, BoneId, BoneTree, EffectorIndex};

/// Below this squared length a lever arm has no usable direction.
const MIN_ARM_SQUARED: f32 = 1e-8;

#[derive(Debug, Clone)]
struct Chain {
    tip: BoneId,
    /// Tip's ancestors, nearest first.
    joints: Vec<BoneId>,
}

/// Reference CCD solver restricted to the editor's screen plane.
///
/// Only target positions are solved for; `target_rotation` is ignored.
#[derive(Debug, Clone)]
pub struct CcdSolver {
    chains: Vec<Chain>,
    max_iterations: u32,
    tolerance: f32,
}

impl CcdSolver {
    /// Build one chain per effector, bounded by its `chain_length`.
    #[must_use]
    pub fn build(tree: &BoneTree, options: &SolverOptions) -> Self {
        let mut chains = Vec::new();
        for tip in EffectorIndex::collect(tree).iter() {
            let limit = tree
                .effector(tip)
                .map_or(0, |e| e.chain_length as usize);
            let mut joints = Vec::new();
            let mut cur = tree[tip].parent();
            while let Some(joint) = cur {
                joints.push(joint);
                if limit != 0 && joints.len() >= limit {
                    break;
                }
                cur = tree[joint].parent();
            }
            if joints.is_empty() {
                log::debug!("effector on {tip} has no joints to bend; skipped");
                continue;
            }
            chains.push(Chain { tip, joints });
        }
        Self {
            chains,
            max_iterations: options.max_iterations,
            tolerance: options.tolerance,
        }
    }

    /// Number of solvable chains.
    #[must_use]
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Largest on-screen distance between a tip and its target.
    #[must_use]
    pub fn max_error(&self, tree: &BoneTree) -> f32 {
        self.chains
            .iter()
            .filter_map(|chain| {
                let tip = tree.world_transform(chain.tip)?.position;
                let target = tree.effector(chain.tip)?.target_position;
                Some(to_screen(tip).distance(to_screen(target)))
            })
            .fold(0.0, f32::max)
    }
}

impl Solver for CcdSolver {
    fn solve(&mut self, tree: &mut BoneTree) {
        for iteration in 0..self.max_iterations {
            for chain in &self.chains {
                chain.sweep(tree);
            }
            if self.max_error(tree) <= self.tolerance {
                log::trace!("ccd converged after {} sweeps", iteration + 1);
                return;
            }
        }
        log::trace!(
            "ccd stopped at {} sweeps, error {}",
            self.max_iterations,
            self.max_error(tree)
        );
    }
}

impl Chain {
    fn sweep(&self, tree: &mut BoneTree) {
        let Some(target) = tree.effector(self.tip).map(|e| e.target_position)
        else {
            return;
        };

        for &joint in &self.joints {
            let (Some(pivot), Some(tip)) =
                (tree.world_transform(joint), tree.world_transform(self.tip))
            else {
                return;
            };
            let to_tip = to_screen(tip.position - pivot.position);
            let to_target = to_screen(target - pivot.position);
            if to_tip.length_squared() < MIN_ARM_SQUARED
                || to_target.length_squared() < MIN_ARM_SQUARED
            {
                continue;
            }

            let delta = Quat::from_rotation_x(signed_angle(to_tip, to_target));
            if let Some(bone) = tree.get_mut(joint) {
                // pivot = parent * local, so parent⁻¹ = local * pivot⁻¹.
                let parent_inverse =
                    bone.local_rotation * pivot.rotation.inverse();
                bone.local_rotation =
                    (parent_inverse * delta * pivot.rotation).normalize();
            }
        }
    }
}

/// Angle turning `from` onto `to`, positive from screen x toward screen y
/// (a positive rotation about world X).
fn signed_angle(from: Vec2, to: Vec2) -> f32 {
    from.perp_dot(to).atan2(from.dot(to))
}
