/// Rendering and DOM constants for the browser host.
///
/// Scene tuning shared with the state machines lives in
/// `folio_core::constants`; everything here only affects how a frame is
/// drawn or which elements are looked up.
// Clear and fog colour (#101010)
pub const BACKGROUND_RGB: [f32; 3] = [16.0 / 255.0, 16.0 / 255.0, 16.0 / 255.0];
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 60.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const SUN_POSITION: [f32; 3] = [5.0, 5.0, 5.0]; // directional light shines from here toward the origin
pub const SUN_INTENSITY: f32 = 0.5;
pub const SPOT_INTENSITY: f32 = 2.5;
pub const SPOT_ANGLE: f32 = 0.5; // cone half-angle, radians
pub const SPOT_PENUMBRA: f32 = 1.0; // 0 hard edge .. 1 fully soft
pub const SPOT_DISTANCE: f32 = 8.0;

// Post (bloom over linear HDR colour, then vignette)
pub const BLOOM_THRESHOLD: f32 = 0.5; // luminance where glow starts
pub const BLOOM_SMOOTHING: f32 = 0.9;
pub const BLOOM_INTENSITY: f32 = 0.1;
pub const VIGNETTE_OFFSET: f32 = 0.3;
pub const VIGNETTE_DARKNESS: f32 = 0.4;

// Ground slab
pub const GROUND_RGB: [f32; 3] = [16.0 / 255.0, 16.0 / 255.0, 16.0 / 255.0];
pub const GROUND_SIZE: f32 = 170.0;

// Target meshes
pub const TARGET_MESH_RADIUS: f32 = 0.7;

// Instance buffer capacity (flocks + targets + draggables + ground + headroom)
pub const MAX_INSTANCES: usize = 256;

// Element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const PANEL_ID: &str = "info-panel";
pub const PANEL_CONTENT_ID: &str = "panel-content";
pub const PANEL_CLOSE_ID: &str = "panel-close";
pub const HINT_ID: &str = "hint-overlay";
pub const TAB_ID_PREFIX: &str = "tab-";
pub const LABEL_ID_PREFIX: &str = "label-";
pub const GREETING_ID_PREFIX: &str = "greeting-";

// CSS custom property carrying window width / 1920
pub const VIEWPORT_SCALE_VAR: &str = "--viewport-scale";
