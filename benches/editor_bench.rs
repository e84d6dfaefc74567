#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;
use ikedit::solver::Solver;
use ikedit::{
    BoneTree, CcdSolver, DrawList, EditorSession, Effector, EffectorIndex,
    HierarchyRenderer, InputEvent, NullSolver, Options,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random tree of `count` bones; every bone without children gets an
/// effector at its rest position.
fn random_tree(count: usize, seed: u64) -> BoneTree {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = BoneTree::new(Vec3::new(0.0, 400.0, 300.0));
    let mut ids = vec![tree.root()];
    for _ in 1..count {
        let parent = ids[rng.random_range(0..ids.len())];
        let offset = Vec3::new(
            0.0,
            rng.random_range(-30.0..30.0),
            rng.random_range(-30.0..30.0),
        );
        ids.push(tree.create_child(parent, offset).unwrap());
    }
    for id in ids {
        if tree[id].children().is_empty() {
            let rest = tree.world_transform(id).unwrap().position;
            tree.attach_effector(id, Effector::new(rest).with_chain_length(3))
                .unwrap();
        }
    }
    tree
}

fn index_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_effectors");
    for count in [10, 100, 1000] {
        let tree = random_tree(count, 1);
        let _ = group.bench_function(format!("{count}_bones"), |b| {
            b.iter(|| black_box(EffectorIndex::collect(black_box(&tree))));
        });
    }
    group.finish();
}

fn render_benchmark(c: &mut Criterion) {
    let tree = random_tree(500, 2);
    let index = EffectorIndex::collect(&tree);
    let renderer = HierarchyRenderer::new(&Options::default());
    let mut list = DrawList::new();
    let _ = c.bench_function("draw_500_bones", |b| {
        b.iter(|| {
            list.clear();
            renderer.draw_tree(&tree, &mut list);
            renderer.draw_effectors(&tree, &index, &mut list);
            black_box(list.len())
        });
    });
}

fn pick_benchmark(c: &mut Criterion) {
    let mut session =
        EditorSession::new(random_tree(500, 3), Options::default(), |_, _| {
            NullSolver
        });
    let _ = c.bench_function("pointer_down_miss_500_bones", |b| {
        b.iter(|| {
            black_box(session.frame(
                [InputEvent::PointerDown { x: -1000, y: -1000 }],
                0.0,
                &mut DrawList::new(),
            ))
        });
    });
}

fn solve_benchmark(c: &mut Criterion) {
    let options = Options::default();
    let mut tree = random_tree(100, 4);
    let mut solver = CcdSolver::build(&tree, &options.solver);
    let _ = c.bench_function("ccd_solve_100_bones", |b| {
        b.iter(|| solver.solve(black_box(&mut tree)));
    });
}

criterion_group!(
    benches,
    index_benchmark,
    render_benchmark,
    pick_benchmark,
    solve_benchmark
);
criterion_main!(benches);
