//! Async model provisioning: fetch each slot's .glb, decode it, and attach
//! the payload to its scene item. A failed load degrades to an empty slot;
//! the animator and highlight logic already skip items with no payload.

use anyhow::anyhow;
use hub_core::{parse_glb, HubScene, DEFAULT_SLOTS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn spawn_model_loads(scene: Rc<RefCell<HubScene>>) {
    for def in DEFAULT_SLOTS {
        let scene = scene.clone();
        spawn_local(async move {
            match load_mesh(def.model_path).await {
                Ok(mesh) => {
                    scene.borrow_mut().attach_payload(def.name, mesh);
                }
                Err(e) => {
                    log::error!("[assets] loading '{}' failed: {:?}", def.model_path, e);
                }
            }
        });
    }
}

async fn load_mesh(path: &str) -> anyhow::Result<hub_core::MeshData> {
    let bytes = fetch_bytes(path).await?;
    Ok(parse_glb(&bytes)?)
}

async fn fetch_bytes(path: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        return Err(anyhow!("GET {} -> HTTP {}", path, resp.status()));
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow!("array_buffer: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow!("body read failed: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}
