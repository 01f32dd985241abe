use crate::input::{key_action, KeyAction};
use crate::overlay;
use folio_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<Scene>>) {
    let key = ev.key();
    let Some(action) = key_action(&key) else {
        return;
    };
    match action {
        KeyAction::ClosePanel => {
            scene.borrow_mut().close_panel();
            log::info!("[keys] close panel");
        }
        KeyAction::Focus(id) => {
            scene.borrow_mut().focus_tab(id);
            log::info!("[keys] focus {}", id);
        }
        KeyAction::ToggleHint => {
            if let Some(doc) = crate::dom::window_document() {
                overlay::toggle(&doc);
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(scene: Rc<RefCell<Scene>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                // leave typing in form fields alone
                let editing = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web::Element>().ok())
                    .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA"))
                    .unwrap_or(false);
                if !editing {
                    handle_global_keydown(&ev, &scene);
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
