//! Browser front end for the hub carousel.
//!
//! Wires the DOM (canvas, nav buttons, CTA link, header role list) to the
//! platform-neutral carousel logic in `hub-core`, then hands rendering to a
//! WebGPU surface on the `#hub-canvas` element.

#![cfg(target_arch = "wasm32")]

mod assets;
mod events;
mod frame;
mod render;
mod ui;

use frame::FrameContext;
use hub_core::{
    CarouselController, Direction, Highlight, HubScene, Viewport, DEFAULT_SLOTS,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use ui::SelectionSync;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[web] hub starting");

    spawn_local(async {
        if let Err(e) = init().await {
            log::error!("[web] init failed: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("hub-canvas")
        .ok_or_else(|| anyhow::anyhow!("no #hub-canvas element"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#hub-canvas is not a canvas"))?;
    fit_hub_canvas(&canvas);

    let controller = Rc::new(RefCell::new(CarouselController::new(
        DEFAULT_SLOTS.iter().map(|s| s.name.to_string()).collect(),
    )));
    let scene = Rc::new(RefCell::new(HubScene::new(&DEFAULT_SLOTS)));
    let highlight = Rc::new(RefCell::new(Highlight::new()));
    let viewport = Rc::new(RefCell::new(viewport_from_window()));

    let sync = SelectionSync {
        document: document.clone(),
        controller: controller.clone(),
        scene: scene.clone(),
        highlight: highlight.clone(),
    };
    sync.apply();

    events::wire_hub_activation(&document, controller.clone());
    events::keyboard::wire_global_keydown(sync.clone());
    events::touch::wire_touch_handlers(&canvas, sync.clone());
    wire_nav_button(&document, "hub-prev", Direction::Left, sync.clone());
    wire_nav_button(&document, "hub-next", Direction::Right, sync.clone());
    wire_resize(&canvas, viewport.clone());

    assets::spawn_model_loads(scene.clone());

    let mut ctx = FrameContext {
        controller,
        scene,
        highlight,
        viewport,
        canvas,
        gpu: None,
        start: Instant::now(),
    };
    ctx.init_gpu().await?;
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}

fn viewport_from_window() -> Viewport {
    let size = web::window().and_then(|w| {
        let width = w.inner_width().ok()?.as_f64()?;
        let height = w.inner_height().ok()?.as_f64()?;
        Some((width as u32, height as u32))
    });
    let (width, height) = size.unwrap_or((1, 1));
    Viewport::new(width, height)
}

/// Match the hub canvas backing store to its CSS size at the current
/// devicePixelRatio, so the surface renders at native resolution.
fn fit_hub_canvas(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let rect = canvas.get_bounding_client_rect();
    let dpr = window.device_pixel_ratio();
    canvas.set_width(((rect.width() * dpr) as u32).max(1));
    canvas.set_height(((rect.height() * dpr) as u32).max(1));
}

/// One prev/next arrow: a click is a single rotate, gated on the hub being
/// in view like every other input path.
fn wire_nav_button(
    document: &web::Document,
    element_id: &str,
    direction: Direction,
    sync: SelectionSync,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[web] nav button #{} missing, skipping", element_id);
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        if !sync.controller.borrow().is_active() {
            return;
        }
        sync.controller.borrow_mut().rotate(direction);
        sync.apply();
    }) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Track window resizes: refresh the camera's viewport and re-fit the hub
/// canvas backing store.
fn wire_resize(canvas: &web::HtmlCanvasElement, viewport: Rc<RefCell<Viewport>>) {
    if let Some(window) = web::window() {
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            fit_hub_canvas(&canvas);
            *viewport.borrow_mut() = viewport_from_window();
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
