#![cfg(target_arch = "wasm32")]

//! Browser entry point: load the dataset, build the scene, wire the
//! buttons and camera, then hand off to the frame loop.

mod dom;
mod events;
mod frame;
mod net;
mod render;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use worthviz_core::{parse_dataset, Layout, SceneState, TRANSITION_MS};

use frame::AppClock;

const CANVAS_ID: &str = "viz-canvas";
const DATASET_URL: &str = "data/people.tsv";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("worthviz-web starting");
    spawn_local(async {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::viz_canvas(&document, CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);

    {
        // Keep the backing store in step with CSS layout; the frame loop
        // notices the new size and reconfigures the surface.
        let canvas = canvas.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas);
        }) as Box<dyn FnMut()>);
        web::window()
            .ok_or_else(|| anyhow::anyhow!("no window"))?
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .ok();
        on_resize.forget();
    }

    let text = net::fetch_text(DATASET_URL).await?;
    let items = parse_dataset(&text)?;
    log::info!("[init] {} people loaded from {}", items.len(), DATASET_URL);

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    // Fresh scatter every visit.
    let seed = js_sys::Date::now() as u64;
    let scene = Rc::new(RefCell::new(SceneState::new(items, seed, aspect)));
    let clock = Rc::new(AppClock::new());
    let dirty = Rc::new(Cell::new(true));

    let capacity = scene.borrow().panels.len();
    let gpu = render::GpuState::new(&canvas, capacity).await?;

    events::wire_layout_buttons(&document, &scene, &clock);
    events::wire_camera_controls(&canvas, &scene, &dirty);

    // Open on the table arrangement, tweening in from the scatter.
    scene
        .borrow_mut()
        .show_layout(Layout::Table, TRANSITION_MS, clock.now_ms());
    events::set_active_button(&document, "btn-table");

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        canvas,
        clock,
        dirty,
    })));
    Ok(())
}
