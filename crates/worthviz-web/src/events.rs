//! Pointer, wheel, and button wiring.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use worthviz_core::{Layout, SceneState, TRANSITION_MS};

use crate::dom;
use crate::frame::AppClock;

/// Radians of orbit per CSS pixel of drag.
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Zoom factor per 120 units of wheel delta (one classic notch).
const ZOOM_STEP: f32 = 1.1;

pub const LAYOUT_BUTTONS: [(&str, Layout); 4] = [
    ("btn-table", Layout::Table),
    ("btn-sphere", Layout::Sphere),
    ("btn-helix", Layout::Helix),
    ("btn-grid", Layout::Grid),
];

#[derive(Default, Clone, Copy)]
struct PointerState {
    x: f32,
    y: f32,
    orbiting: bool,
    panning: bool,
}

/// Hook up the four arrangement buttons. Each click starts a tween to
/// that layout and moves the `active` class to the pressed button.
pub fn wire_layout_buttons(
    document: &web::Document,
    scene: &Rc<RefCell<SceneState>>,
    clock: &Rc<AppClock>,
) {
    for (id, layout) in LAYOUT_BUTTONS {
        let scene = Rc::clone(scene);
        let clock = Rc::clone(clock);
        let doc = document.clone();
        dom::add_click_listener(document, id, move || {
            scene
                .borrow_mut()
                .show_layout(layout, TRANSITION_MS, clock.now_ms());
            set_active_button(&doc, id);
        });
    }
}

pub fn set_active_button(document: &web::Document, active_id: &str) {
    for (id, _) in LAYOUT_BUTTONS {
        let Some(el) = document.get_element_by_id(id) else {
            continue;
        };
        let classes = el.class_list();
        let _ = if id == active_id {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
    }
}

/// Left-drag orbits, right-drag pans, the wheel zooms. Every camera
/// change flips the dirty flag so the frame loop redraws.
pub fn wire_camera_controls(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<SceneState>>,
    dirty: &Rc<Cell<bool>>,
) {
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut p = pointer.borrow_mut();
            match ev.button() {
                0 => p.orbiting = true,
                2 => p.panning = true,
                _ => {}
            }
            p.x = ev.client_x() as f32;
            p.y = ev.client_y() as f32;
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let pointer = pointer.clone();
        let scene = Rc::clone(scene);
        let dirty = Rc::clone(dirty);
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut p = pointer.borrow_mut();
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            let dx = x - p.x;
            let dy = y - p.y;
            p.x = x;
            p.y = y;
            if p.orbiting {
                scene
                    .borrow_mut()
                    .camera
                    .orbit(-dx * ORBIT_SENSITIVITY, dy * ORBIT_SENSITIVITY);
                dirty.set(true);
            } else if p.panning {
                scene.borrow_mut().camera.pan(dx, dy);
                dirty.set(true);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for event_name in ["pointerup", "pointerleave"] {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let mut p = pointer.borrow_mut();
            p.orbiting = false;
            p.panning = false;
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let scene = Rc::clone(scene);
        let dirty = Rc::clone(dirty);
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            let notches = (ev.delta_y() / 120.0).clamp(-3.0, 3.0) as f32;
            scene.borrow_mut().camera.zoom_by(ZOOM_STEP.powf(notches));
            dirty.set(true);
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Right-drag pans, so the context menu has to go.
    {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
