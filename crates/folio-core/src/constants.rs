use glam::Vec3;

// Shared scene tuning constants used by the core state machines and the web frontend.

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const HOME_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 2.0, 10.0);
pub const HOME_LOOK_AT: Vec3 = Vec3::new(0.0, 2.0, 0.0);
pub const INTRO_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 10.0, 10.0); // fly-in start on page open

// Frame stepping
pub const MAX_FRAME_DT: f32 = 0.1; // seconds; longer gaps (hidden tab) are clamped
pub const SPRING_MAX_STEP: f32 = 0.001; // integration sub-step, seconds

// Selectable targets
pub const TARGET_IDLE_SCALE: f32 = 1.0;
pub const TARGET_ACTIVE_SCALE: f32 = 1.2; // hovered or active
pub const TARGET_ACTIVE_OFFSET_Z: f32 = 2.0; // pulled toward the camera when active
pub const TARGET_SPIN_RATE: f32 = 1.5; // radians per second while active
pub const TARGET_UNWIND_FACTOR: f32 = 0.1; // per 60 Hz frame
pub const TARGET_HOVER_EMISSIVE: f32 = 0.1;
pub const TARGET_PICK_RADIUS: f32 = 0.9;
pub const TARGET_LABEL_HEIGHT: f32 = 1.2;

// Draggable physics objects
pub const DRAG_FLOOR_Y: f32 = -0.5;
pub const DRAG_HELD_SCALE: f32 = 1.2;
pub const DRAG_PICK_RADIUS: f32 = 0.75;

// Greeting text
pub const GREETING_POINTER_Z: f32 = 0.0; // pointer is read on this plane
pub const GREETING_REPEL_RADIUS: f32 = 3.0;
pub const GREETING_FALLOFF: f32 = 4.0; // push fades to zero at this distance
pub const GREETING_PUSH: f32 = 0.8;
pub const GREETING_CORNER_PUSH: f32 = 1.5; // corners react this much more than the text
pub const GREETING_HOT_SPOT_DROP: f32 = 1.5; // repel centre sits below the anchor
pub const GREETING_TEXT_SIZE: f32 = 1.5;
pub const GREETING_TEXT_HEIGHT: f32 = 1.0;
pub const GREETING_LETTER_SPACING: f32 = -0.06;
pub const GREETING_NEAR_Z: f32 = -2.0; // corners come forward to here when the pointer is near
pub const GREETING_SPIN_RATE: Vec3 = Vec3::new(0.6, 0.45, 0.3); // radians per second while near

// Physics
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);
pub const PHYSICS_DT: f32 = 1.0 / 60.0;
pub const PHYSICS_MAX_STEPS_PER_FRAME: u32 = 4;
pub const GROUND_Y: f32 = -0.8;
pub const GROUND_HALF_EXTENT: f32 = 85.0;
pub const BODY_RESTITUTION: f32 = 0.7;
pub const BODY_FRICTION: f32 = 0.2;
pub const BODY_HALF_EXTENT: f32 = 0.5;

// Info panel
pub const PANEL_CLOSE_SECONDS: f32 = 0.3;
pub const PANEL_REFERENCE_WIDTH: f32 = 1920.0;

// Spotlight over the selected target
pub const SPOTLIGHT_HEIGHT: f32 = 4.0;
pub const SPOTLIGHT_Z: f32 = 1.0;
pub const SPOTLIGHT_TARGET_Z: f32 = 2.0;
