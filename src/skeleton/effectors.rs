use super::bone::BoneId;
use super::tree::BoneTree;

/// Flat snapshot of every effector-carrying bone in a tree.
///
/// Built once by [`EffectorIndex::collect`]. For each bone the children's
/// subtrees are emitted first, in stored order, then the bone's own
/// effector, so the root's effector (if any) comes last. The index is not
/// updated when the tree changes shape afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectorIndex {
    bones: Vec<BoneId>,
}

impl EffectorIndex {
    /// Walk `tree` and record every bone that carries an effector.
    #[must_use]
    pub fn collect(tree: &BoneTree) -> Self {
        let mut bones = Vec::new();
        // (bone, children already pushed)
        let mut stack = vec![(tree.root(), false)];
        while let Some((id, expanded)) = stack.pop() {
            let bone = &tree[id];
            if expanded {
                if bone.effector().is_some() {
                    bones.push(id);
                }
            } else {
                stack.push((id, true));
                stack.extend(bone.children().iter().rev().map(|&c| (c, false)));
            }
        }
        Self { bones }
    }

    /// Number of effectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Whether the tree had no effectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Owning bone of the `i`-th effector.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<BoneId> {
        self.bones.get(i).copied()
    }

    /// Owning bones in index order.
    pub fn iter(&self) -> impl Iterator<Item = BoneId> + '_ {
        self.bones.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::skeleton::Effector;

    fn effector() -> Effector {
        Effector::new(Vec3::ZERO)
    }

    #[test]
    fn empty_when_no_effectors() {
        let mut tree = BoneTree::new(Vec3::ZERO);
        let _ = tree.create_child(tree.root(), Vec3::Y).unwrap();
        let index = EffectorIndex::collect(&tree);
        assert!(index.is_empty());
        assert_eq!(index.get(0), None);
    }

    #[test]
    fn subtrees_come_before_their_owner() {
        //        root*
        //       /     \
        //      a*      b*
        //     / \
        //   a1*  a2*
        let mut tree = BoneTree::new(Vec3::ZERO);
        let root = tree.root();
        let a = tree.create_child(root, Vec3::Y).unwrap();
        let b = tree.create_child(root, Vec3::Z).unwrap();
        let a1 = tree.create_child(a, Vec3::Y).unwrap();
        let a2 = tree.create_child(a, Vec3::Z).unwrap();
        for id in [root, a, b, a1, a2] {
            tree.attach_effector(id, effector()).unwrap();
        }

        let index = EffectorIndex::collect(&tree);
        assert_eq!(index.iter().collect::<Vec<_>>(), vec![a1, a2, a, b, root]);
    }

    #[test]
    fn skips_bones_without_effectors() {
        let mut tree = BoneTree::new(Vec3::ZERO);
        let root = tree.root();
        let a = tree.create_child(root, Vec3::Y).unwrap();
        let a1 = tree.create_child(a, Vec3::Y).unwrap();
        let b = tree.create_child(root, Vec3::Z).unwrap();
        tree.attach_effector(a1, effector()).unwrap();
        tree.attach_effector(b, effector()).unwrap();

        let index = EffectorIndex::collect(&tree);
        assert_eq!(index.len(), tree.effector_count());
        assert_eq!(index.iter().collect::<Vec<_>>(), vec![a1, b]);
    }

    #[test]
    fn snapshot_is_not_updated_by_later_edits() {
        let mut tree = BoneTree::new(Vec3::ZERO);
        let a = tree.create_child(tree.root(), Vec3::Y).unwrap();
        let index = EffectorIndex::collect(&tree);
        tree.attach_effector(a, effector()).unwrap();
        assert!(index.is_empty());
        assert_eq!(EffectorIndex::collect(&tree).len(), 1);
    }

    #[test]
    fn very_deep_chain_does_not_exhaust_the_stack() {
        let mut tree = BoneTree::new(Vec3::ZERO);
        let mut tip = tree.root();
        for _ in 0..100_000 {
            tip = tree.create_child(tip, Vec3::Y).unwrap();
        }
        tree.attach_effector(tip, effector()).unwrap();
        tree.attach_effector(tree.root(), effector()).unwrap();

        let index = EffectorIndex::collect(&tree);
        assert_eq!(index.iter().collect::<Vec<_>>(), vec![tip, tree.root()]);
    }
}
