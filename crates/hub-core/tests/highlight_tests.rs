// Host-side tests for outline-highlight targeting.

use hub_core::{Highlight, HubScene, MeshData, DEFAULT_SLOTS};

fn make_scene() -> HubScene {
    HubScene::new(&DEFAULT_SLOTS)
}

fn dummy_mesh() -> MeshData {
    MeshData {
        positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        normals: vec![[0.0, 0.0, 1.0]; 3],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn unloaded_target_leaves_the_set_empty() {
    let scene = make_scene();
    let mut hl = Highlight::new();
    hl.sync(&scene, "software");
    assert_eq!(hl.selected(), None);

    // failsafe is an idempotent no-op while nothing is loaded
    for _ in 0..5 {
        hl.ensure(&scene, "software");
        assert_eq!(hl.selected(), None);
    }
}

#[test]
fn unknown_slot_clears_rather_than_staling() {
    let mut scene = make_scene();
    scene.attach_payload("software", dummy_mesh());
    let mut hl = Highlight::new();
    hl.sync(&scene, "software");
    assert_eq!(hl.selected(), Some(0));

    hl.sync(&scene, "no-such-slot");
    assert_eq!(hl.selected(), None);
}

#[test]
fn loaded_target_becomes_the_sole_highlight() {
    let mut scene = make_scene();
    scene.attach_payload("art", dummy_mesh());
    let mut hl = Highlight::new();
    hl.sync(&scene, "art");
    assert_eq!(hl.selected(), Some(2));
}

#[test]
fn failsafe_picks_up_a_late_load() {
    let mut scene = make_scene();
    let mut hl = Highlight::new();
    hl.sync(&scene, "game");
    assert_eq!(hl.selected(), None);

    scene.attach_payload("game", dummy_mesh());
    hl.ensure(&scene, "game");
    assert_eq!(hl.selected(), Some(1));
}

#[test]
fn failsafe_does_not_override_an_existing_target() {
    let mut scene = make_scene();
    scene.attach_payload("software", dummy_mesh());
    scene.attach_payload("game", dummy_mesh());
    let mut hl = Highlight::new();
    hl.sync(&scene, "software");

    // ensure() only re-resolves an empty set; a selection change goes
    // through sync()
    hl.ensure(&scene, "game");
    assert_eq!(hl.selected(), Some(0));
    hl.sync(&scene, "game");
    assert_eq!(hl.selected(), Some(1));
}

#[test]
fn selection_change_to_unloaded_slot_clears() {
    let mut scene = make_scene();
    scene.attach_payload("software", dummy_mesh());
    let mut hl = Highlight::new();
    hl.sync(&scene, "software");
    assert_eq!(hl.selected(), Some(0));

    hl.sync(&scene, "editing");
    assert_eq!(hl.selected(), None);
}
