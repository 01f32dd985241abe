use crate::camera;
use crate::panel::{GreetingDom, LabelDom, PanelDom};
use crate::render;
use folio_core::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub panel: PanelDom,
    pub labels: LabelDom,
    pub greetings: GreetingDom,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let snapshot = self.scene.borrow_mut().update(dt_sec);

        let lens = camera::lens_for(&self.canvas);
        if let Some(g) = self.gpu.as_mut() {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&snapshot, &lens) {
                match e {
                    wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                        log::warn!("[gpu] surface {:?}, reconfiguring next frame", e);
                    }
                    other => log::error!("[gpu] render error: {:?}", other),
                }
            }
        }

        self.panel.sync(&snapshot.panel);
        let rect = self.canvas.get_bounding_client_rect();
        let view_proj = lens.view_proj(&snapshot.camera);
        let (css_w, css_h) = (rect.width() as f32, rect.height() as f32);
        self.labels.sync(&snapshot.targets, view_proj, css_w, css_h);
        self.greetings.sync(&snapshot.greetings, view_proj, css_w, css_h);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let background = scene.borrow().background().clone();
    match render::GpuState::new(leaked_canvas, &background).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
