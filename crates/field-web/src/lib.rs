#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use field_core::{Field, FieldConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod draw;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

struct Attached {
    listeners: events::Listeners,
    loop_handle: frame::LoopHandle,
}

/// The embeddable layer: constructing it seeds the field and starts the
/// frame loop; `detach` (or dropping the handle from JS via `free()`) tears
/// everything down.
#[wasm_bindgen]
pub struct ParticleField {
    inner: Option<Attached>,
}

#[wasm_bindgen]
impl ParticleField {
    /// Attach to the canvas with the given element id. If any part of setup
    /// is unavailable (no window, missing canvas, no 2d context) the handle
    /// is inert: the layer stays blank and nothing is scheduled.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> ParticleField {
        match attach(canvas_id) {
            Ok(inner) => {
                log::info!("[field-web] attached to #{canvas_id}");
                ParticleField { inner: Some(inner) }
            }
            Err(e) => {
                log::warn!("[field-web] setup failed, layer disabled: {e:?}");
                ParticleField { inner: None }
            }
        }
    }

    /// Cancel the frame loop and remove the window listeners. Idempotent,
    /// and a no-op on a handle whose setup failed.
    pub fn detach(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.loop_handle.cancel();
            inner.listeners.detach();
            log::info!("[field-web] detached");
        }
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        self.detach();
    }
}

fn attach(canvas_id: &str) -> anyhow::Result<Attached> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow!("missing #{canvas_id}"))?
        .dyn_into()
        .map_err(|e| anyhow!("not a canvas: {:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))?;

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let field = Rc::new(RefCell::new(Field::new(
        w as f64,
        h as f64,
        FieldConfig::default(),
        rand::random::<u64>(),
    )));

    let listeners = events::wire(&window, &canvas, &field)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { field, canvas, ctx }));
    let loop_handle = frame::start_loop(frame_ctx);

    Ok(Attached {
        listeners,
        loop_handle,
    })
}
