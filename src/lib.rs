#![cfg(target_arch = "wasm32")]
use folio_core::{Scene, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod markup;
mod overlay;
mod panel;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    dom::sync_viewport_scale();
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        dom::sync_viewport_scale();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // keep the backing store at CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(Scene::new(SceneConfig::default())));
    log::info!(
        "[scene] {} targets, {} draggables",
        scene.borrow().targets().len(),
        scene.borrow().draggables().len()
    );

    // the scene stays interactive even if WebGPU is unavailable
    let gpu = frame::init_gpu(&canvas, &scene).await;

    panel::wire_panel(&document, scene.clone());
    events::wire_global_keydown(scene.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        panel: panel::PanelDom::new(&document),
        labels: panel::LabelDom::new(&document),
        greetings: panel::GreetingDom::new(&document),
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
