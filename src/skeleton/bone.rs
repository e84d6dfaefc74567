use std::fmt;

use glam::{Quat, Vec2, Vec3};

/// Index of a bone inside its [`BoneTree`](super::BoneTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoneId(usize);

impl BoneId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the bone in the arena. The root is always `0`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A drag-controllable solver goal attached to exactly one bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effector {
    /// Goal position. Y/Z are edited by dragging.
    pub target_position: Vec3,
    /// Goal orientation, drawn as a short direction tick.
    pub target_rotation: Quat,
    /// Number of ancestors the solver may bend to reach the goal.
    /// `0` reaches all the way up to the root.
    pub chain_length: u32,
}

impl Effector {
    /// Effector aiming at `target_position` with identity orientation and an
    /// unbounded chain.
    #[must_use]
    pub const fn new(target_position: Vec3) -> Self {
        Self {
            target_position,
            target_rotation: Quat::IDENTITY,
            chain_length: 0,
        }
    }

    /// Limit the chain the solver may bend for this effector.
    #[must_use]
    pub const fn with_chain_length(mut self, chain_length: u32) -> Self {
        self.chain_length = chain_length;
        self
    }

    /// Set the goal orientation.
    #[must_use]
    pub const fn with_rotation(mut self, target_rotation: Quat) -> Self {
        self.target_rotation = target_rotation;
        self
    }
}

/// A node of the skeletal tree.
///
/// Children are owned through the tree arena; `parent` is only a
/// back-reference used for upward walks.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    /// Position relative to the parent, expressed in the parent's frame.
    pub local_position: Vec3,
    /// Orientation relative to the parent.
    pub local_rotation: Quat,
    pub(crate) parent: Option<BoneId>,
    pub(crate) children: Vec<BoneId>,
    pub(crate) effector: Option<Effector>,
}

impl Bone {
    pub(crate) const fn new(
        local_position: Vec3,
        parent: Option<BoneId>,
    ) -> Self {
        Self {
            local_position,
            local_rotation: Quat::IDENTITY,
            parent,
            children: Vec::new(),
            effector: None,
        }
    }

    /// Owning bone, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<BoneId> {
        self.parent
    }

    /// Child bones in traversal order.
    #[must_use]
    pub fn children(&self) -> &[BoneId] {
        &self.children
    }

    /// Attached effector, if any.
    #[must_use]
    pub const fn effector(&self) -> Option<&Effector> {
        self.effector.as_ref()
    }

    /// Whether this bone is the root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Accumulated world-space position and orientation of a bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    /// World position.
    pub position: Vec3,
    /// World orientation.
    pub rotation: Quat,
}

impl WorldTransform {
    /// Origin with identity orientation; the state the root is placed in.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Place `bone` under this (parent) transform.
    ///
    /// The local position is rotated by the parent's orientation, and the
    /// parent orientation is applied before the bone's own.
    #[must_use]
    pub fn accumulate(&self, bone: &Bone) -> Self {
        Self {
            position: self.position + self.rotation * bone.local_position,
            rotation: self.rotation * bone.local_rotation,
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Screen coordinates of a 3D point: the Y and Z components.
#[must_use]
pub const fn to_screen(v: Vec3) -> Vec2 {
    Vec2::new(v.y, v.z)
}

/// Overwrite the screen-mapped components (Y, Z) of `v`, leaving X alone.
pub fn set_screen(v: &mut Vec3, p: Vec2) {
    v.y = p.x;
    v.z = p.y;
}
