use crate::{dom, input};
use anyhow::anyhow;
use field_core::Field;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window listeners kept alive (not forgotten) so teardown can remove them.
pub struct Listeners {
    window: web::Window,
    resize: Closure<dyn FnMut()>,
    pointermove: Closure<dyn FnMut(web::PointerEvent)>,
}

impl Listeners {
    /// Remove both listeners. Safe to call more than once; removing an
    /// already-removed callback is a no-op in the DOM.
    pub fn detach(&self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        let _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.pointermove.as_ref().unchecked_ref(),
        );
    }
}

/// Wire the resize and pointermove handlers that feed the shared field.
pub fn wire(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<Field>>,
) -> anyhow::Result<Listeners> {
    let canvas_resize = canvas.clone();
    let field_resize = field.clone();
    let resize = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize);
        field_resize.borrow_mut().resize(w as f64, h as f64);
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("{:?}", e))?;

    let canvas_move = canvas.clone();
    let field_move = field.clone();
    let pointermove = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_move);
        field_move.borrow_mut().set_pointer(pos);
    }) as Box<dyn FnMut(_)>);
    if let Err(e) =
        window.add_event_listener_with_callback("pointermove", pointermove.as_ref().unchecked_ref())
    {
        // The resize closure is about to be dropped; leaving its listener
        // registered would let a later resize invoke a freed callback.
        let _ = window
            .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        return Err(anyhow!("{:?}", e));
    }

    Ok(Listeners {
        window: window.clone(),
        resize,
        pointermove,
    })
}
