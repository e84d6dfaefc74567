use std::ops::Index;

use glam::Vec3;

use super::bone::{Bone, BoneId, Effector, WorldTransform};
use crate::error::EditorError;

/// Arena-backed bone hierarchy with a single root.
///
/// Bones can only be added as children of existing bones, so the tree is
/// always single-rooted and acyclic. Bones are never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct BoneTree {
    bones: Vec<Bone>,
}

impl BoneTree {
    /// Create a tree holding only a root bone at `root_position`.
    #[must_use]
    pub fn new(root_position: Vec3) -> Self {
        Self {
            bones: vec![Bone::new(root_position, None)],
        }
    }

    /// The root bone id.
    #[must_use]
    pub const fn root(&self) -> BoneId {
        BoneId::new(0)
    }

    /// Total number of bones, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Always `false`; a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Look up a bone.
    #[must_use]
    pub fn get(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id.index())
    }

    /// Look up a bone for editing its local pose.
    pub fn get_mut(&mut self, id: BoneId) -> Option<&mut Bone> {
        self.bones.get_mut(id.index())
    }

    /// The root bone.
    #[must_use]
    pub fn root_bone(&self) -> &Bone {
        &self.bones[0]
    }

    /// The root bone, mutably. Its local position is its world position.
    pub fn root_bone_mut(&mut self) -> &mut Bone {
        &mut self.bones[0]
    }

    /// Append a child at the end of `parent`'s children.
    pub fn create_child(
        &mut self,
        parent: BoneId,
        local_position: Vec3,
    ) -> Result<BoneId, EditorError> {
        if parent.index() >= self.bones.len() {
            return Err(EditorError::UnknownBone(parent));
        }
        let id = BoneId::new(self.bones.len());
        self.bones.push(Bone::new(local_position, Some(parent)));
        self.bones[parent.index()].children.push(id);
        Ok(id)
    }

    /// Attach an effector to `bone`. A bone carries at most one.
    pub fn attach_effector(
        &mut self,
        bone: BoneId,
        effector: Effector,
    ) -> Result<(), EditorError> {
        let slot = &mut self
            .bones
            .get_mut(bone.index())
            .ok_or(EditorError::UnknownBone(bone))?
            .effector;
        if slot.is_some() {
            return Err(EditorError::EffectorExists(bone));
        }
        *slot = Some(effector);
        Ok(())
    }

    /// Effector attached to `bone`.
    #[must_use]
    pub fn effector(&self, bone: BoneId) -> Option<&Effector> {
        self.get(bone).and_then(Bone::effector)
    }

    /// Effector attached to `bone`, mutably.
    pub fn effector_mut(&mut self, bone: BoneId) -> Option<&mut Effector> {
        self.get_mut(bone).and_then(|b| b.effector.as_mut())
    }

    /// Number of bones carrying an effector.
    #[must_use]
    pub fn effector_count(&self) -> usize {
        self.bones.iter().filter(|b| b.effector.is_some()).count()
    }

    /// Accumulated world transform of `id`.
    ///
    /// Folds upward from the bone, re-expressing its transform in each
    /// ancestor's frame until the root's frame is world space.
    #[must_use]
    pub fn world_transform(&self, id: BoneId) -> Option<WorldTransform> {
        let bone = self.get(id)?;
        let mut world = WorldTransform {
            position: bone.local_position,
            rotation: bone.local_rotation,
        };
        let mut cur = bone.parent;
        while let Some(parent) = cur {
            let ancestor = self.get(parent)?;
            world = WorldTransform {
                position: ancestor.local_position
                    + ancestor.local_rotation * world.position,
                rotation: ancestor.local_rotation * world.rotation,
            };
            cur = ancestor.parent;
        }
        Some(world)
    }

    /// Bone ids in depth-first pre-order, children in stored order.
    #[must_use]
    pub fn pre_order(&self) -> Vec<BoneId> {
        let mut order = Vec::with_capacity(self.bones.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self[id].children.iter().rev());
        }
        order
    }
}

impl Index<BoneId> for BoneTree {
    type Output = Bone;

    fn index(&self, id: BoneId) -> &Bone {
        &self.bones[id.index()]
    }
}
