use crate::ui::SelectionSync;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn touch_point(t: &web::Touch) -> Vec2 {
    Vec2::new(t.client_x() as f32, t.client_y() as f32)
}

/// Swipe detection over the hub canvas: remember where the first touch went
/// down, and hand the start/end pair to the controller on release. The
/// controller decides whether the gesture was a swipe or a page scroll.
pub fn wire_touch_handlers(canvas: &web::HtmlCanvasElement, sync: SelectionSync) {
    let start: Rc<RefCell<Option<Vec2>>> = Rc::new(RefCell::new(None));

    // touchstart
    {
        let start = start.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(t) = ev.touches().get(0) {
                *start.borrow_mut() = Some(touch_point(&t));
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchend
    {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let Some(begin) = start.borrow_mut().take() else {
                return;
            };
            if !sync.controller.borrow().is_active() {
                return;
            }
            let Some(t) = ev.changed_touches().get(0) else {
                return;
            };
            let applied = sync
                .controller
                .borrow_mut()
                .handle_swipe(begin, touch_point(&t));
            if applied.is_some() {
                sync.apply();
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
