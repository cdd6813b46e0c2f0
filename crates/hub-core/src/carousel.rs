//! Selection state machine for the hub carousel.
//!
//! The controller owns the selection index, the pending target rotation for
//! the whole ring, and the activation flag. Input handlers translate discrete
//! events (arrow keys, swipes, button clicks) into `rotate` calls; the
//! animator and renderer only ever see a read-only [`Selection`] snapshot.

use crate::constants::SWIPE_THRESHOLD_PX;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Read-only view of the current selection, taken once per frame.
#[derive(Clone, Copy, Debug)]
pub struct Selection<'a> {
    pub index: usize,
    pub slot: &'a str,
    pub target_rotation: f32,
}

pub struct CarouselController {
    slots: Vec<String>,
    index: usize,
    target_rotation: f32,
    active: bool,
}

impl CarouselController {
    pub fn new(slots: Vec<String>) -> Self {
        Self {
            slots,
            index: 0,
            target_rotation: 0.0,
            active: false,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active_slot(&self) -> &str {
        &self.slots[self.index]
    }

    pub fn target_rotation(&self) -> f32 {
        self.target_rotation
    }

    /// Whether input should currently drive the carousel. Handlers stay
    /// registered either way; they consult this flag and drop events while
    /// the hub is off-screen.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn selection(&self) -> Selection<'_> {
        Selection {
            index: self.index,
            slot: self.active_slot(),
            target_rotation: self.target_rotation,
        }
    }

    /// Advance the selection one slot and move the ring target a quarter
    /// turn. The sign is chosen so the newly selected item ends up facing
    /// the camera: the ring is laid out clockwise, so `Right` decrements
    /// the ring angle.
    pub fn rotate(&mut self, direction: Direction) {
        let n = self.slots.len();
        if n == 0 {
            return;
        }
        match direction {
            Direction::Right => {
                self.index = (self.index + 1) % n;
                self.target_rotation -= FRAC_PI_2;
            }
            Direction::Left => {
                self.index = (self.index + n - 1) % n;
                self.target_rotation += FRAC_PI_2;
            }
        }
        log::debug!(
            "[carousel] rotate {:?} -> index {} ({})",
            direction,
            self.index,
            self.active_slot()
        );
    }

    /// Interpret a completed touch gesture. Short or vertical-dominant
    /// gestures are page scrolls, not carousel input, and leave the state
    /// untouched. Returns the rotation that was applied, if any.
    pub fn handle_swipe(&mut self, start: Vec2, end: Vec2) -> Option<Direction> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        if dx.abs() < SWIPE_THRESHOLD_PX {
            return None;
        }
        if dy.abs() > dx.abs() {
            return None;
        }
        // Content follows the finger: a leftward swipe pulls the next item in
        let direction = if dx < 0.0 {
            Direction::Right
        } else {
            Direction::Left
        };
        self.rotate(direction);
        Some(direction)
    }
}

/// Map a DOM `KeyboardEvent::key` value to a carousel direction.
#[inline]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}
