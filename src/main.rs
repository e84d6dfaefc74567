//! Headless demo: builds a small figure, replays a scripted drag through the
//! editor and logs what the final frame would draw.
//!
//! Usage: `ikedit [options.toml]`. Set `RUST_LOG=debug` to see grabs.

use std::path::Path;

use glam::Vec3;
use ikedit::renderer::{as_bytes, tessellate};
use ikedit::skeleton::to_screen;
use ikedit::{
    BoneTree, DrawList, EditorError, EditorSession, Effector, InputEvent,
    Options,
};

/// A torso with a head and two two-segment arms, standing at (400, 300).
fn sample_tree() -> Result<BoneTree, EditorError> {
    let mut tree = BoneTree::new(Vec3::new(0.0, 400.0, 300.0));
    let chest = tree.create_child(tree.root(), Vec3::new(0.0, 0.0, -60.0))?;
    let head = tree.create_child(chest, Vec3::new(0.0, 0.0, -40.0))?;
    let mut tips = vec![head];
    for side in [-1.0_f32, 1.0] {
        let elbow =
            tree.create_child(chest, Vec3::new(0.0, side * 50.0, 20.0))?;
        tips.push(tree.create_child(elbow, Vec3::new(0.0, side * 50.0, 10.0))?);
    }
    for tip in tips {
        let rest = tree
            .world_transform(tip)
            .map_or(Vec3::ZERO, |t| t.position);
        tree.attach_effector(tip, Effector::new(rest).with_chain_length(2))?;
    }
    Ok(tree)
}

fn drag_script(from: (i32, i32), steps: i32) -> Vec<InputEvent> {
    let mut events = vec![InputEvent::PointerDown {
        x: from.0,
        y: from.1,
    }];
    events.extend((1..=steps).map(|i| InputEvent::PointerMove {
        x: from.0 + 4 * i,
        y: from.1 - 6 * i,
    }));
    events.push(InputEvent::PointerUp);
    events
}

fn main() -> Result<(), EditorError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };
    let segments = options.render.circle_segments;

    let mut session = EditorSession::with_ccd(sample_tree()?, options);
    let Some(start) = session
        .effectors()
        .get(0)
        .and_then(|bone| session.tree().effector(bone))
        .map(|e| to_screen(e.target_position))
    else {
        log::warn!("sample tree has no effectors; nothing to drag");
        return Ok(());
    };

    let mut list = DrawList::new();
    for event in drag_script((start.x as i32, start.y as i32), 10) {
        list.clear();
        let consumed = session.frame([event], 1.0 / 60.0, &mut list);
        log::debug!("{event:?} consumed={consumed} grab={:?}", session.grab());
    }

    for label in list.labels() {
        log::info!("{label}");
    }
    let vertices = tessellate(list.commands(), segments);
    log::info!(
        "final frame: {} primitives, {} line vertices ({} bytes)",
        list.len(),
        vertices.len(),
        as_bytes(&vertices).len()
    );
    Ok(())
}
