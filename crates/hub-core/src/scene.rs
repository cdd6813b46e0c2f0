//! Scene-side data model: the carousel items and their animated poses.
//!
//! Items exist from scene setup; their mesh payloads arrive later, whenever
//! the corresponding asset fetch completes. Everything that reads an item
//! must tolerate the payload (and the recorded baseline) being absent.

use crate::constants::{RING_RADIUS, SlotDef};
use crate::model::MeshData;
use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Rest pose recorded at the moment an item's payload finishes loading.
/// The animator pulls inactive items back toward this.
#[derive(Clone, Copy, Debug)]
pub struct Baseline {
    pub y: f32,
    pub rotation: f32,
}

pub struct CarouselItem {
    pub slot: String,
    pub label: String,
    pub link: String,
    /// Fixed position on the ring, before the group rotation is applied.
    pub ring_offset: Vec3,
    /// Animated vertical offset.
    pub y: f32,
    /// Animated own-axis rotation.
    pub rotation: f32,
    pub baseline: Option<Baseline>,
    pub mesh: Option<MeshData>,
}

impl CarouselItem {
    pub fn is_loaded(&self) -> bool {
        self.mesh.is_some()
    }

    /// World transform for this item given the current ring rotation.
    pub fn model_matrix(&self, ring_rotation: f32, scale: f32) -> Mat4 {
        Mat4::from_rotation_y(ring_rotation)
            * Mat4::from_translation(Vec3::new(self.ring_offset.x, self.y, self.ring_offset.z))
            * Mat4::from_rotation_y(self.rotation)
            * Mat4::from_scale(Vec3::splat(scale))
    }
}

pub struct HubScene {
    pub items: Vec<CarouselItem>,
    /// Smoothed rotation of the whole ring, chasing the controller's target.
    pub ring_rotation: f32,
}

impl HubScene {
    /// Lay the slots out clockwise starting at the front (+Z), so that each
    /// quarter-turn decrement of the ring rotation brings the next index to
    /// face the camera.
    pub fn new(slots: &[SlotDef]) -> Self {
        let step = TAU / slots.len().max(1) as f32;
        let items = slots
            .iter()
            .enumerate()
            .map(|(i, def)| {
                let angle = FRAC_PI_2 - i as f32 * step;
                CarouselItem {
                    slot: def.name.to_string(),
                    label: def.label.to_string(),
                    link: def.link.to_string(),
                    ring_offset: Vec3::new(
                        angle.cos() * RING_RADIUS,
                        0.0,
                        angle.sin() * RING_RADIUS,
                    ),
                    y: 0.0,
                    rotation: 0.0,
                    baseline: None,
                    mesh: None,
                }
            })
            .collect();
        Self {
            items,
            ring_rotation: 0.0,
        }
    }

    pub fn find(&self, slot: &str) -> Option<&CarouselItem> {
        self.items.iter().find(|it| it.slot == slot)
    }

    pub fn find_mut(&mut self, slot: &str) -> Option<&mut CarouselItem> {
        self.items.iter_mut().find(|it| it.slot == slot)
    }

    /// Install a loaded mesh into its named item and record the pose it was
    /// in as the animation baseline. Returns false when the slot is unknown.
    pub fn attach_payload(&mut self, slot: &str, mesh: MeshData) -> bool {
        match self.find_mut(slot) {
            Some(item) => {
                item.baseline = Some(Baseline {
                    y: item.y,
                    rotation: item.rotation,
                });
                log::info!(
                    "[scene] payload ready for '{}' ({} vertices, {} indices)",
                    slot,
                    mesh.positions.len(),
                    mesh.indices.len()
                );
                item.mesh = Some(mesh);
                true
            }
            None => {
                log::warn!("[scene] payload for unknown slot '{}' dropped", slot);
                false
            }
        }
    }
}
