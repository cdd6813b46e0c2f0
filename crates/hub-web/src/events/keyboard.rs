use crate::ui::SelectionSync;
use hub_core::direction_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow keys rotate the carousel. Other keys pass through untouched, and
/// while the hub is inactive the arrows keep their default scroll behavior.
pub fn wire_global_keydown(sync: SelectionSync) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let Some(direction) = direction_for_key(&ev.key()) else {
                    return;
                };
                if !sync.controller.borrow().is_active() {
                    return;
                }
                ev.prevent_default();
                sync.controller.borrow_mut().rotate(direction);
                sync.apply();
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
