use glam::{Vec2, Vec3};

use super::surface::Surface;
use crate::options::{ColorOptions, Options, RenderOptions};
use crate::skeleton::{to_screen, BoneTree, EffectorIndex, WorldTransform};

/// Axis the effector orientation tick points along before rotation.
const FORWARD: Vec3 = Vec3::Z;

/// Draws the bone hierarchy, effector goals and status labels.
///
/// Stateless between frames: every call reads the current pose and
/// targets, so it is safe to invoke each frame whether or not anything
/// changed.
#[derive(Debug, Clone)]
pub struct HierarchyRenderer {
    render: RenderOptions,
    colors: ColorOptions,
}

impl HierarchyRenderer {
    /// Create a renderer using the given marker sizes and palette.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            render: options.render.clone(),
            colors: options.colors.clone(),
        }
    }

    /// Walk the tree pre-order, drawing a marker per bone and a segment to
    /// each bone's parent.
    pub fn draw_tree(&self, tree: &BoneTree, surface: &mut dyn Surface) {
        let mut stack = vec![(tree.root(), WorldTransform::IDENTITY)];
        while let Some((id, parent)) = stack.pop() {
            let bone = &tree[id];
            let world = parent.accumulate(bone);
            self.draw_bone(bone.is_root(), world, parent, surface);
            stack.extend(bone.children().iter().rev().map(|&c| (c, world)));
        }
    }

    fn draw_bone(
        &self,
        is_root: bool,
        world: WorldTransform,
        parent: WorldTransform,
        surface: &mut dyn Surface,
    ) {
        let color = if is_root {
            self.colors.root
        } else {
            self.colors.bone
        };
        let pos = to_screen(world.position);
        surface.circle(pos, self.render.bone_radius, color);
        if !is_root {
            surface.line(pos, to_screen(parent.position), color);
        }
    }

    /// Draw every indexed effector at its stored target with an orientation
    /// tick. Independent of the bone pose.
    pub fn draw_effectors(
        &self,
        tree: &BoneTree,
        effectors: &EffectorIndex,
        surface: &mut dyn Surface,
    ) {
        let color = self.colors.effector;
        for effector in effectors.iter().filter_map(|b| tree.effector(b)) {
            let pos = to_screen(effector.target_position);
            let tick = to_screen(
                effector.target_rotation * FORWARD * self.render.direction_length,
            );
            surface.circle(pos, self.render.effector_radius, color);
            surface.line(pos, pos + tick, color);
        }
    }

    /// Draw status labels top to bottom starting at the label origin.
    pub fn draw_labels<'a>(
        &self,
        labels: impl IntoIterator<Item = &'a str>,
        surface: &mut dyn Surface,
    ) {
        let mut origin = Vec2::from(self.render.label_origin);
        for text in labels {
            surface.label(origin, text, self.colors.label);
            origin.y += self.render.label_spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Quat;

    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::skeleton::Effector;

    fn renderer() -> HierarchyRenderer {
        HierarchyRenderer::new(&Options::default())
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn chain_translations_accumulate() {
        let pr = Vec3::new(0.0, 100.0, 50.0);
        let pa = Vec3::new(0.0, 10.0, 0.0);
        let pb = Vec3::new(0.0, 0.0, 20.0);
        let mut tree = BoneTree::new(pr);
        let a = tree.create_child(tree.root(), pa).unwrap();
        let _b = tree.create_child(a, pb).unwrap();

        let mut list = DrawList::new();
        renderer().draw_tree(&tree, &mut list);

        let centers: Vec<_> = list.circle_centers().collect();
        assert_eq!(
            centers,
            vec![to_screen(pr), to_screen(pr + pa), to_screen(pr + pa + pb)]
        );
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(
            lines,
            vec![
                (to_screen(pr + pa), to_screen(pr)),
                (to_screen(pr + pa + pb), to_screen(pr + pa)),
            ]
        );
    }

    #[test]
    fn root_has_its_own_color_and_no_segment() {
        let mut tree = BoneTree::new(Vec3::ZERO);
        let _ = tree.create_child(tree.root(), Vec3::Y).unwrap();
        let colors = ColorOptions::default();

        let mut list = DrawList::new();
        renderer().draw_tree(&tree, &mut list);

        let drawn: Vec<_> = list
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Circle { color, .. }
                | DrawCommand::Line { color, .. }
                | DrawCommand::Label { color, .. } => *color,
            })
            .collect();
        assert_eq!(drawn, vec![colors.root, colors.bone, colors.bone]);
        assert!(matches!(list.commands()[2], DrawCommand::Line { .. }));
        assert_eq!(list.lines().count(), 1);
    }

    #[test]
    fn parent_rotation_turns_child_offsets() {
        // Root turned a quarter about X: the child's +Y offset lands on +Z,
        // and the grandchild inherits the composed rotation.
        let mut tree = BoneTree::new(Vec3::ZERO);
        tree.root_bone_mut().local_rotation = Quat::from_rotation_x(FRAC_PI_2);
        let a = tree.create_child(tree.root(), Vec3::new(0.0, 10.0, 0.0)).unwrap();
        let _b = tree.create_child(a, Vec3::new(0.0, 10.0, 0.0)).unwrap();

        let mut list = DrawList::new();
        renderer().draw_tree(&tree, &mut list);

        let centers: Vec<_> = list.circle_centers().collect();
        assert!(approx(centers[0], Vec2::ZERO));
        assert!(approx(centers[1], Vec2::new(0.0, 10.0)));
        assert!(approx(centers[2], Vec2::new(0.0, 20.0)));
    }

    #[test]
    fn siblings_are_drawn_in_stored_order() {
        let mut tree = BoneTree::new(Vec3::ZERO);
        let root = tree.root();
        let a = tree.create_child(root, Vec3::new(0.0, 1.0, 0.0)).unwrap();
        let _ = tree.create_child(root, Vec3::new(0.0, 2.0, 0.0)).unwrap();
        let _ = tree.create_child(a, Vec3::new(0.0, 0.0, 3.0)).unwrap();

        let mut list = DrawList::new();
        renderer().draw_tree(&tree, &mut list);
        let centers: Vec<_> = list.circle_centers().collect();
        assert_eq!(
            centers,
            vec![
                Vec2::ZERO,
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 3.0),
                Vec2::new(2.0, 0.0),
            ]
        );
    }

    #[test]
    fn effectors_draw_at_targets_with_direction_tick() {
        let mut tree = BoneTree::new(Vec3::ZERO);
        let a = tree.create_child(tree.root(), Vec3::Y).unwrap();
        // Identity points the tick along +Z (screen down); a quarter turn
        // about X swings it to -Y (screen left).
        tree.attach_effector(
            a,
            Effector::new(Vec3::new(0.0, 50.0, 60.0))
                .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        )
        .unwrap();
        let b = tree.create_child(tree.root(), Vec3::Z).unwrap();
        tree.attach_effector(b, Effector::new(Vec3::new(0.0, 5.0, 5.0)))
            .unwrap();
        let index = EffectorIndex::collect(&tree);

        let mut list = DrawList::new();
        renderer().draw_effectors(&tree, &index, &mut list);

        let centers: Vec<_> = list.circle_centers().collect();
        assert_eq!(centers, vec![Vec2::new(50.0, 60.0), Vec2::new(5.0, 5.0)]);
        let lines: Vec<_> = list.lines().collect();
        assert!(approx(lines[0].1, Vec2::new(30.0, 60.0)));
        assert!(approx(lines[1].1, Vec2::new(5.0, 25.0)));
    }

    #[test]
    fn very_deep_chain_is_drawn_without_recursion() {
        let mut tree = BoneTree::new(Vec3::ZERO);
        let mut tip = tree.root();
        for _ in 0..100_000 {
            tip = tree.create_child(tip, Vec3::Y).unwrap();
        }

        let mut list = DrawList::new();
        renderer().draw_tree(&tree, &mut list);

        assert_eq!(list.circle_centers().count(), 100_001);
        assert_eq!(list.lines().count(), 100_000);
        assert_eq!(list.circle_centers().last(), Some(Vec2::new(100_000.0, 0.0)));
    }

    #[test]
    fn labels_stack_downwards() {
        let mut list = DrawList::new();
        renderer().draw_labels(["a", "b", "c"], &mut list);
        let origins: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label { origin, .. } => Some(*origin),
                _ => None,
            })
            .collect();
        assert_eq!(
            origins,
            vec![
                Vec2::new(10.0, 10.0),
                Vec2::new(10.0, 42.0),
                Vec2::new(10.0, 74.0),
            ]
        );
    }
}
