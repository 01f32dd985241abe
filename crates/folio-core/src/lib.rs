pub mod background;
pub mod camera;
pub mod color;
pub mod constants;
pub mod drag;
pub mod error;
pub mod greeting;
pub mod hoverable;
pub mod panel;
pub mod physics;
pub mod pick;
pub mod registry;
pub mod scene;
pub mod selection;
pub mod spring;
pub mod target;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use camera::{CameraChoreographer, CameraConfig, CameraMode, CameraPose, Lens, Retarget};
pub use drag::{BodyControl, BodyHandle, DragProxy, DragShape, DragVisual};
pub use error::{CoreError, Result};
pub use greeting::{CornerShape, Greeting, GreetingSpec, GreetingVisual};
pub use hoverable::{TargetProxy, TargetVisual};
pub use panel::{InfoPanel, PanelContent, PanelView};
pub use physics::{PhysicsConfig, PhysicsWorld};
pub use pick::Ray;
pub use registry::{TargetEntry, TargetRegistry};
pub use scene::{FrameSnapshot, Scene, SceneConfig, Spotlight};
pub use selection::SelectionState;
pub use spring::{Spring, SpringConfig, SpringF32, SpringVec3};
pub use target::TargetId;
