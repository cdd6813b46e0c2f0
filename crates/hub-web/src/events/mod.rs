pub mod keyboard;
pub mod touch;

use hub_core::CarouselController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fraction of the viewport height the hub section has to reach before
/// carousel input goes live.
const ACTIVATION_VIEWPORT_FRACTION: f64 = 0.75;

/// Gate carousel input on the hub section being scrolled into view. The
/// listeners themselves stay registered for the lifetime of the page; only
/// the controller's active flag flips.
pub fn wire_hub_activation(document: &web::Document, controller: Rc<RefCell<CarouselController>>) {
    let doc = document.clone();
    let update = move || {
        let active = match doc.get_element_by_id("hub") {
            Some(el) => {
                let rect = el.get_bounding_client_rect();
                let vh = web::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                rect.top() < vh * ACTIVATION_VIEWPORT_FRACTION && rect.bottom() > 0.0
            }
            // no hub marker in the page: leave the carousel always-on
            None => true,
        };
        let mut c = controller.borrow_mut();
        if c.is_active() != active {
            log::debug!("[events] hub input {}", if active { "enabled" } else { "disabled" });
            c.set_active(active);
        }
    };

    update();
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
