use crate::camera;
use crate::input::{self, PointerState};
use folio_core::pick::Ray;
use folio_core::Scene;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
    wire_click(&w);
}

fn pointer_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    input::client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        camera::canvas_rect(canvas),
        canvas.width(),
        canvas.height(),
    )
}

fn ray_at(w: &InputWiring, px: Vec2) -> Ray {
    let pose = w.scene.borrow().camera_pose();
    camera::screen_to_world_ray(&w.canvas, px.x, px.y, &pose)
}

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        if !w2.canvas.is_connected() {
            return;
        }
        let px = pointer_px(&ev, &w2.canvas);
        let ray = ray_at(&w2, px);
        let mut scene = w2.scene.borrow_mut();
        scene.pointer_move(&ray);
        let cursor = if scene.active_drag().is_some() {
            "grabbing"
        } else if scene.hovered().is_some() {
            "pointer"
        } else {
            "default"
        };
        _ = w2.canvas.style().set_property("cursor", cursor);
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        let px = pointer_px(&ev, &w2.canvas);
        let ray = ray_at(&w2, px);
        let grabbed = w2.scene.borrow_mut().pointer_down(&ray);
        w2.pointer.borrow_mut().dragged = grabbed;
        if grabbed {
            _ = w2.canvas.style().set_property("cursor", "grabbing");
            ev.prevent_default();
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let release = |w: InputWiring| {
        move |_ev: web::PointerEvent| {
            w.scene.borrow_mut().pointer_up();
        }
    };
    if let Some(wnd) = web::window() {
        listen(&wnd, "pointerup", release(w.clone()));
    }
    listen(&w.canvas, "pointercancel", release(w.clone()));
}

fn wire_pointerleave(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerleave", move |_ev: web::PointerEvent| {
        w2.scene.borrow_mut().pointer_leave();
        _ = w2.canvas.style().set_property("cursor", "default");
    });
}

fn wire_click(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "click", move |ev: web::MouseEvent| {
        // a press that grabbed a draggable is not a target click
        if std::mem::take(&mut w2.pointer.borrow_mut().dragged) {
            return;
        }
        let px = pointer_px(&ev, &w2.canvas);
        let ray = ray_at(&w2, px);
        if let Some(id) = w2.scene.borrow_mut().click(&ray) {
            log::info!("[select] click on {}", id);
        }
    });
}
