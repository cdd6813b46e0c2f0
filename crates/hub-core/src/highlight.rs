//! Keeps the renderer's single-object highlight pointed at the active item.

use crate::scene::HubScene;

/// Mirror of the render-side highlight set. Holds at most one item index;
/// empty whenever the active item's payload has not loaded yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct Highlight {
    selected: Option<usize>,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Resolve the active slot to a loaded scene item and make it the sole
    /// highlighted object. An unloaded or unknown slot clears the set rather
    /// than leaving a stale entry behind.
    pub fn sync(&mut self, scene: &HubScene, active_slot: &str) {
        self.selected = scene
            .items
            .iter()
            .position(|it| it.slot == active_slot && it.is_loaded());
    }

    /// Per-frame failsafe: re-resolve only when the set is empty, so a late
    /// asset load picks up the highlight without any extra bookkeeping.
    pub fn ensure(&mut self, scene: &HubScene, active_slot: &str) {
        if self.selected.is_none() {
            self.sync(scene, active_slot);
        }
    }
}
