//! Session construction and the status labels computed alongside it.

use web_time::{Duration, Instant};

use super::EditorSession;
use crate::options::Options;
use crate::picking::PickController;
use crate::renderer::HierarchyRenderer;
use crate::skeleton::{BoneTree, EffectorIndex};
use crate::solver::{CcdSolver, Solver};

/// Status lines drawn in the corner every frame. Computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabels {
    /// How long the solver took to build.
    pub build: String,
    /// Bone count.
    pub bones: String,
    /// Effector count.
    pub effectors: String,
}

impl StatusLabels {
    fn new(build_time: Duration, bones: usize, effectors: usize) -> Self {
        Self {
            build: format!("build() took {build_time:?}"),
            bones: format!("bones: {bones}"),
            effectors: format!("end effectors: {effectors}"),
        }
    }

    /// Labels in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.build.as_str(),
            self.bones.as_str(),
            self.effectors.as_str(),
        ]
        .into_iter()
    }
}

impl EditorSession {
    /// Create a session over `tree`.
    ///
    /// `build_solver` is called exactly once, here, and timed for the build
    /// status label.
    pub fn new<S, F>(tree: BoneTree, options: Options, build_solver: F) -> Self
    where
        S: Solver + 'static,
        F: FnOnce(&BoneTree, &Options) -> S,
    {
        let start = Instant::now();
        let solver = build_solver(&tree, &options);
        let build_time = start.elapsed();

        let effectors = EffectorIndex::collect(&tree);
        let labels = StatusLabels::new(build_time, tree.len(), effectors.len());
        log::info!(
            "editor session ready: {} bones, {} effectors, solver built in {:?}",
            tree.len(),
            effectors.len(),
            build_time
        );

        Self {
            picker: PickController::new(&options.picking),
            renderer: HierarchyRenderer::new(&options),
            solver: Box::new(solver),
            tree,
            effectors,
            labels,
            options,
        }
    }

    /// Create a session driven by the bundled [`CcdSolver`].
    pub fn with_ccd(tree: BoneTree, options: Options) -> Self {
        Self::new(tree, options, |tree, options| {
            CcdSolver::build(tree, &options.solver)
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::skeleton::Effector;
    use crate::solver::NullSolver;

    #[test]
    fn factory_runs_once_with_the_tree() {
        let mut tree = BoneTree::new(Vec3::ZERO);
        let a = tree.create_child(tree.root(), Vec3::Y).unwrap();
        tree.attach_effector(a, Effector::new(Vec3::ZERO)).unwrap();

        let mut calls = 0;
        let session = EditorSession::new(tree, Options::default(), |t, _| {
            calls += 1;
            assert_eq!(t.len(), 2);
            NullSolver
        });
        assert_eq!(calls, 1);
        assert_eq!(session.effectors().len(), 1);
        assert_eq!(session.labels().bones, "bones: 2");
        assert_eq!(session.labels().effectors, "end effectors: 1");
    }

    #[test]
    fn labels_iterate_in_draw_order() {
        let labels = StatusLabels::new(Duration::from_millis(2), 4, 3);
        let all: Vec<_> = labels.iter().collect();
        assert_eq!(all, vec!["build() took 2ms", "bones: 4", "end effectors: 3"]);
    }
}
