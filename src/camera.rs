use crate::input::{screen_ray, CanvasRect};
use folio_core::camera::{CameraPose, Lens};
use folio_core::pick::Ray;
use glam::Vec2;
use web_sys as web;

/// Lens matching the canvas backing-store aspect.
pub fn lens_for(canvas: &web::HtmlCanvasElement) -> Lens {
    Lens::default().with_aspect(canvas.width() as f32, canvas.height() as f32)
}

pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    CanvasRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

/// World ray through canvas pixel (`sx`, `sy`) for the current camera.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    pose: &CameraPose,
) -> Ray {
    screen_ray(
        Vec2::new(sx, sy),
        canvas.width() as f32,
        canvas.height() as f32,
        pose,
        &lens_for(canvas),
    )
}
