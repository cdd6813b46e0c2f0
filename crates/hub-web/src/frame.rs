//! requestAnimationFrame loop driving the carousel.

use crate::render::GpuState;
use hub_core::{advance, Camera, CarouselController, Highlight, HubScene, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame closure needs, shared with the input handlers
/// through `Rc<RefCell<..>>` since the browser owns the actual loop.
pub struct FrameContext {
    pub controller: Rc<RefCell<CarouselController>>,
    pub scene: Rc<RefCell<HubScene>>,
    pub highlight: Rc<RefCell<Highlight>>,
    pub viewport: Rc<RefCell<Viewport>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState<'static>>,
    pub start: Instant,
}

impl FrameContext {
    /// Bring up the WebGPU surface. The canvas clone is leaked so the surface
    /// can borrow it for the life of the page, same as the page itself.
    pub async fn init_gpu(&mut self) -> anyhow::Result<()> {
        let canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(self.canvas.clone()));
        self.gpu = Some(GpuState::new(canvas).await?);
        log::info!("[frame] WebGPU surface ready");
        Ok(())
    }

    /// One animation step: advance motion, refresh the highlight, then draw.
    pub fn frame(&mut self) {
        let elapsed = self.start.elapsed().as_secs_f32();

        let controller = self.controller.borrow();
        let selection = controller.selection();
        let mut scene = self.scene.borrow_mut();
        advance(&mut scene, &selection, elapsed);

        let mut highlight = self.highlight.borrow_mut();
        highlight.ensure(&scene, selection.slot);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let vp = *self.viewport.borrow();
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        gpu.upload_meshes(&scene);
        let camera = Camera::for_viewport(&vp);
        match gpu.render(&scene, highlight.selected(), &camera) {
            Ok(())
            | Err(wgpu::SurfaceError::Outdated)
            | Err(wgpu::SurfaceError::Lost)
            | Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => log::error!("[frame] render failed: {:?}", e),
        }
    }
}

/// Schedule `ctx.frame()` on every animation frame, forever.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        request_animation_frame(&f);
    }) as Box<dyn FnMut()>));
    request_animation_frame(&g);
}

fn request_animation_frame(f: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(window), Some(cb)) = (web::window(), f.borrow().as_ref()) {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
