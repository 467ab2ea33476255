//! Per-frame driver: advance the scene, redraw only when something changed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use worthviz_core::SceneState;

use crate::render::GpuState;

/// Monotonic clock shared by the frame loop and the input handlers, so
/// every timestamp handed to the scene comes from the same epoch.
pub struct AppClock {
    start: instant::Instant,
}

impl AppClock {
    pub fn new() -> Self {
        Self {
            start: instant::Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub gpu: GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub clock: Rc<AppClock>,
    /// Set by input handlers (and anything else) that wants a redraw.
    pub dirty: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut scene = self.scene.borrow_mut();
        let animating = scene.advance(self.clock.now_ms());

        let resized = self
            .gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if resized {
            scene.camera.aspect =
                self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
        }

        let requested = self.dirty.replace(false);
        if !(animating || requested || resized) {
            return;
        }

        let view_proj = scene.camera.view_proj().to_cols_array_2d();
        let instances = scene.instances();
        drop(scene);
        if let Err(e) = self.gpu.render(view_proj, &instances) {
            log::error!("[frame] render error: {:?}", e);
        }
    }
}

/// Drive `frame` from requestAnimationFrame until the page goes away.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
