//! DOM state that follows the carousel selection.

use hub_core::{CarouselController, Highlight, HubScene};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Vertical step of one entry in the header role list.
pub const HEADER_LINE_PX: i32 = 28;

/// Everything a selection change has to touch, bundled so every input
/// handler (keys, swipes, buttons) applies the same side effects.
#[derive(Clone)]
pub struct SelectionSync {
    pub document: web::Document,
    pub controller: Rc<RefCell<CarouselController>>,
    pub scene: Rc<RefCell<HubScene>>,
    pub highlight: Rc<RefCell<Highlight>>,
}

impl SelectionSync {
    /// Push the current selection out to the call-to-action button, the
    /// header role list and the highlight set.
    pub fn apply(&self) {
        let controller = self.controller.borrow();
        let scene = self.scene.borrow();
        let slot = controller.active_slot();

        self.highlight.borrow_mut().sync(&scene, slot);

        if let Some(item) = scene.find(slot) {
            if let Some(el) = self.document.get_element_by_id("hub-cta") {
                el.set_text_content(Some(&item.label));
                let _ = el.set_attribute("href", &item.link);
            }
        }
        if let Some(el) = self.document.get_element_by_id("header-roles") {
            el.set_scroll_top(controller.index() as i32 * HEADER_LINE_PX);
        }
    }
}
