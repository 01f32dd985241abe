use folio_core::camera::{CameraPose, Lens};
use folio_core::pick::Ray;
use folio_core::target::TargetId;
use glam::{Mat4, Vec2, Vec3};

/// Pointer bookkeeping shared by the canvas listeners.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    /// Set once a press grabbed a draggable; suppresses the click that follows.
    pub dragged: bool,
}

/// CSS-pixel box of the canvas as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Client coordinates to canvas backing-store pixels.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect: CanvasRect,
    canvas_width: u32,
    canvas_height: u32,
) -> Vec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Vec2::ZERO;
    }
    let x_css = client.x - rect.left;
    let y_css = client.y - rect.top;
    Vec2::new(
        x_css / rect.width * canvas_width as f32,
        y_css / rect.height * canvas_height as f32,
    )
}

/// Canvas pixels (y down) to normalized device coordinates (y up).
#[inline]
pub fn px_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

/// World-space ray through canvas pixel `px` for the given camera.
pub fn screen_ray(px: Vec2, width: f32, height: f32, pose: &CameraPose, lens: &Lens) -> Ray {
    let ndc = px_to_ndc(px, width, height);
    Ray::from_ndc(ndc.x, ndc.y, pose, lens)
}

/// Project a world point to CSS pixels of a `css_width` × `css_height`
/// viewport. `None` when the point is behind the camera.
pub fn project_to_css(world: Vec3, view_proj: Mat4, css_width: f32, css_height: f32) -> Option<Vec2> {
    let clip = view_proj * world.extend(1.0);
    if clip.w <= 1e-5 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x * 0.5 + 0.5) * css_width,
        (0.5 - ndc.y * 0.5) * css_height,
    ))
}

/// On-screen CSS height of a world-space vertical span `height` standing on
/// `world`. `None` when either end is behind the camera.
pub fn projected_height(
    world: Vec3,
    height: f32,
    view_proj: Mat4,
    css_width: f32,
    css_height: f32,
) -> Option<f32> {
    let base = project_to_css(world, view_proj, css_width, css_height)?;
    let top = project_to_css(world + Vec3::Y * height, view_proj, css_width, css_height)?;
    Some(base.distance(top))
}

/// What a key press asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ClosePanel,
    Focus(TargetId),
    ToggleHint,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::ClosePanel),
        "1" => Some(KeyAction::Focus(TargetId::About)),
        "2" => Some(KeyAction::Focus(TargetId::Projects)),
        "3" => Some(KeyAction::Focus(TargetId::Contact)),
        "h" | "H" => Some(KeyAction::ToggleHint),
        _ => None,
    }
}

/// `rgb(r, g, b)` for a 0..1 colour.
pub fn css_rgb(color: [f32; 3]) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({}, {}, {})", c(color[0]), c(color[1]), c(color[2]))
}
