use crate::draw;
use field_core::Field;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame needs: the shared field plus the surface.
pub struct FrameContext {
    pub field: Rc<RefCell<Field>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    /// One frame: fade-paint the trail, advance the simulation, draw.
    pub fn frame(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let mut field = self.field.borrow_mut();
        draw::fade(&self.ctx, width, height, field.config.trail_fade);
        field.step();
        draw::render(&self.ctx, &field);
    }
}

/// Handle to a running requestAnimationFrame loop.
///
/// Cancellation is cooperative: `cancel` both cancels the queued frame and
/// flips the `active` flag, which the tick checks first in case a frame was
/// already queued when teardown ran.
pub struct LoopHandle {
    active: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    // Keeps the self-scheduling tick closure alive for the life of the loop.
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.active.set(false);
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(self.raf_id.get());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let active = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let active_tick = active.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !active_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }

    LoopHandle {
        active,
        raf_id,
        _tick: tick,
    }
}
