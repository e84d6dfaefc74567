//! Read-only views into [`EditorSession`] state.

use super::{EditorSession, StatusLabels};
use crate::options::Options;
use crate::picking::Grab;
use crate::skeleton::{BoneTree, EffectorIndex};

impl EditorSession {
    /// The edited tree.
    #[must_use]
    pub const fn tree(&self) -> &BoneTree {
        &self.tree
    }

    /// Effector snapshot taken at construction.
    #[must_use]
    pub const fn effectors(&self) -> &EffectorIndex {
        &self.effectors
    }

    /// Current drag target.
    #[must_use]
    pub const fn grab(&self) -> Option<Grab> {
        self.picker.grab()
    }

    /// Precomputed status labels.
    #[must_use]
    pub const fn labels(&self) -> &StatusLabels {
        &self.labels
    }

    /// Options the session was built with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }
}
