// Host-side tests for the carousel selection state machine.

use glam::Vec2;
use hub_core::{direction_for_key, CarouselController, Direction, DEFAULT_SLOTS};
use std::f32::consts::FRAC_PI_2;

fn make_controller() -> CarouselController {
    CarouselController::new(DEFAULT_SLOTS.iter().map(|s| s.name.to_string()).collect())
}

#[test]
fn index_wraps_right() {
    let mut c = make_controller();
    for k in 1..=13 {
        c.rotate(Direction::Right);
        assert_eq!(c.index(), k % 4);
        assert!(c.index() < c.slot_count());
    }
}

#[test]
fn index_wraps_left() {
    let mut c = make_controller();
    c.rotate(Direction::Left);
    assert_eq!(c.index(), 3);
    for _ in 0..4 {
        c.rotate(Direction::Left);
    }
    assert_eq!(c.index(), 3);
}

#[test]
fn mixed_rotations_stay_in_range() {
    let mut c = make_controller();
    let moves = [
        Direction::Right,
        Direction::Right,
        Direction::Left,
        Direction::Right,
        Direction::Left,
        Direction::Left,
        Direction::Left,
    ];
    for m in moves {
        c.rotate(m);
        assert!(c.index() < 4);
    }
    // net one step left of the start
    assert_eq!(c.index(), 3);
}

#[test]
fn rotation_target_moves_a_quarter_turn_per_step() {
    let mut c = make_controller();
    c.rotate(Direction::Right);
    assert!((c.target_rotation() + FRAC_PI_2).abs() < 1e-6);
    c.rotate(Direction::Left);
    assert!(c.target_rotation().abs() < 1e-6);
}

#[test]
fn three_rights_land_on_editing() {
    // End-to-end scenario: [software, game, art, editing] from index 0
    let mut c = make_controller();
    c.rotate(Direction::Right);
    c.rotate(Direction::Right);
    c.rotate(Direction::Right);
    assert_eq!(c.index(), 3);
    assert_eq!(c.active_slot(), "editing");
    assert!((c.target_rotation() + 3.0 * FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn swipe_below_threshold_is_ignored() {
    let mut c = make_controller();
    let applied = c.handle_swipe(Vec2::new(100.0, 100.0), Vec2::new(51.0, 100.0));
    assert!(applied.is_none());
    assert_eq!(c.index(), 0);
    assert_eq!(c.target_rotation(), 0.0);
}

#[test]
fn swipe_at_threshold_rotates_once() {
    // 50 px leftward finger travel pulls the next item in (rotate Right)
    let mut c = make_controller();
    let applied = c.handle_swipe(Vec2::new(100.0, 100.0), Vec2::new(50.0, 100.0));
    assert_eq!(applied, Some(Direction::Right));
    assert_eq!(c.index(), 1);
}

#[test]
fn rightward_swipe_rotates_left() {
    let mut c = make_controller();
    let applied = c.handle_swipe(Vec2::new(20.0, 40.0), Vec2::new(140.0, 60.0));
    assert_eq!(applied, Some(Direction::Left));
    assert_eq!(c.index(), 3);
}

#[test]
fn vertical_dominant_swipe_is_ignored() {
    // |dy| > |dx| means a page scroll, no matter how large the gesture
    let mut c = make_controller();
    let applied = c.handle_swipe(Vec2::new(0.0, 0.0), Vec2::new(-120.0, 130.0));
    assert!(applied.is_none());
    assert_eq!(c.index(), 0);

    let applied = c.handle_swipe(Vec2::new(0.0, 0.0), Vec2::new(300.0, -400.0));
    assert!(applied.is_none());
    assert_eq!(c.index(), 0);
}

#[test]
fn controller_starts_inactive() {
    let mut c = make_controller();
    assert!(!c.is_active());
    c.set_active(true);
    assert!(c.is_active());
    c.set_active(false);
    assert!(!c.is_active());
}

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
    assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Right));
    assert_eq!(direction_for_key("ArrowUp"), None);
    assert_eq!(direction_for_key("a"), None);
}

#[test]
fn selection_snapshot_tracks_state() {
    let mut c = make_controller();
    c.rotate(Direction::Right);
    let sel = c.selection();
    assert_eq!(sel.index, 1);
    assert_eq!(sel.slot, "game");
    assert!((sel.target_rotation + FRAC_PI_2).abs() < 1e-6);
}
