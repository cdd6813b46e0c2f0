// Host-side tests for scene layout and payload attachment.

use glam::Vec4;
use hub_core::{HubScene, MeshData, DEFAULT_SLOTS, MAX_RING_ITEMS, MODEL_SCALE, RING_RADIUS};
use std::f32::consts::FRAC_PI_2;

fn dummy_mesh() -> MeshData {
    MeshData {
        positions: vec![[0.0, 0.0, 0.0]],
        normals: vec![[0.0, 1.0, 0.0]],
        indices: vec![],
    }
}

#[test]
fn first_slot_starts_front_and_center() {
    let scene = HubScene::new(&DEFAULT_SLOTS);
    let first = &scene.items[0];
    assert!(first.ring_offset.x.abs() < 1e-5);
    assert!((first.ring_offset.z - RING_RADIUS).abs() < 1e-5);
    assert_eq!(scene.ring_rotation, 0.0);
}

#[test]
fn quarter_turn_brings_the_next_slot_to_front() {
    let scene = HubScene::new(&DEFAULT_SLOTS);
    // after the controller's Right rotation settles, ring_rotation = -PI/2
    let m = scene.items[1].model_matrix(-FRAC_PI_2, MODEL_SCALE);
    let world = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(world.x.abs() < 1e-4);
    assert!((world.z - RING_RADIUS).abs() < 1e-4);
}

#[test]
fn items_sit_on_the_ring() {
    let scene = HubScene::new(&DEFAULT_SLOTS);
    assert_eq!(scene.items.len(), 4);
    for item in &scene.items {
        let r = (item.ring_offset.x * item.ring_offset.x
            + item.ring_offset.z * item.ring_offset.z)
            .sqrt();
        assert!((r - RING_RADIUS).abs() < 1e-4);
        assert_eq!(item.ring_offset.y, 0.0);
        assert!(item.baseline.is_none());
        assert!(!item.is_loaded());
    }
}

#[test]
fn attach_records_the_baseline_pose() {
    let mut scene = HubScene::new(&DEFAULT_SLOTS);
    {
        let item = scene.find_mut("art").unwrap();
        item.y = 0.4;
        item.rotation = 1.2;
    }
    assert!(scene.attach_payload("art", dummy_mesh()));
    let item = scene.find("art").unwrap();
    let baseline = item.baseline.unwrap();
    assert_eq!(baseline.y, 0.4);
    assert_eq!(baseline.rotation, 1.2);
    assert!(item.is_loaded());
}

#[test]
fn default_ring_fits_the_renderer_uniform_table() {
    // both renderers reserve MAX_RING_ITEMS dynamic-offset slots and cap
    // their upload and draw loops at the same bound
    let scene = HubScene::new(&DEFAULT_SLOTS);
    assert!(scene.items.len() <= MAX_RING_ITEMS);
}

#[test]
fn attach_to_unknown_slot_is_dropped() {
    let mut scene = HubScene::new(&DEFAULT_SLOTS);
    assert!(!scene.attach_payload("music", dummy_mesh()));
    assert!(scene.items.iter().all(|it| !it.is_loaded()));
}
