//! Per-frame motion: ring smoothing plus the idle/active pose blend.

use crate::carousel::Selection;
use crate::constants::{FLOAT_HEIGHT, FLOAT_SPEED, POSE_SMOOTHING, RING_SMOOTHING, SPIN_SPEED};
use crate::scene::HubScene;
use std::f32::consts::{PI, TAU};

/// One step of the first-order low-pass toward `target`. Applied once per
/// frame; after n frames the remaining error is `(1 - factor)^n` of the
/// initial error, independent of the distance covered.
#[inline]
pub fn smooth(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Signed angular distance from `from` to `to`, normalized into (-PI, PI].
/// Keeps the return-to-rest motion short when the active spin has
/// accumulated more than a full turn.
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let mut d = (to - from) % TAU;
    if d <= -PI {
        d += TAU;
    } else if d > PI {
        d -= TAU;
    }
    d
}

/// Advance the carousel by one rendered frame.
///
/// `elapsed` is seconds since scene start and only drives the active item's
/// bob phase. Items whose payload has not loaded yet carry no baseline and
/// are skipped outright; the step is retried next frame.
pub fn advance(scene: &mut HubScene, selection: &Selection<'_>, elapsed: f32) {
    scene.ring_rotation = smooth(
        scene.ring_rotation,
        selection.target_rotation,
        RING_SMOOTHING,
    );

    for item in &mut scene.items {
        let Some(baseline) = item.baseline else {
            continue;
        };
        if item.slot == selection.slot {
            // Active: float above the baseline and spin without bound
            let bob = baseline.y + (elapsed * FLOAT_SPEED).sin() * FLOAT_HEIGHT;
            item.y = smooth(item.y, bob, POSE_SMOOTHING);
            item.rotation += SPIN_SPEED;
        } else {
            // Inactive: settle back to the recorded rest pose
            item.y = smooth(item.y, baseline.y, POSE_SMOOTHING);
            let delta = shortest_angle_delta(item.rotation, baseline.rotation);
            item.rotation += delta * POSE_SMOOTHING;
        }
    }
}
