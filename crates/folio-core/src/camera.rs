//! Camera fly-to choreography.
//!
//! The camera is in one of two logical states, `Home` or `Focused(id)`.
//! Switching state never moves the camera directly: it retargets a pair of
//! springs (eye position and look-at point) which are advanced every frame
//! by [`CameraChoreographer::update`].

use crate::constants::{CAMERA_FOVY_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::registry::TargetRegistry;
use crate::spring::{SpringConfig, SpringVec3};
use crate::target::TargetId;
use glam::{Mat4, Vec3};

/// Where the camera is and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or_zero()
    }
}

/// Perspective projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            aspect: 16.0 / 9.0,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Lens {
    pub fn with_aspect(mut self, width: f32, height: f32) -> Self {
        self.aspect = width / height.max(1.0);
        self
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self, pose: &CameraPose) -> Mat4 {
        self.projection_matrix() * pose.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Home,
    Focused(TargetId),
}

impl CameraMode {
    pub fn from_selection(selected: Option<TargetId>) -> Self {
        match selected {
            Some(id) => CameraMode::Focused(id),
            None => CameraMode::Home,
        }
    }

    pub fn target(self) -> Option<TargetId> {
        match self {
            CameraMode::Home => None,
            CameraMode::Focused(id) => Some(id),
        }
    }
}

/// How a running transition is redirected when the selection changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Retarget {
    /// Keep the current interpolated pose and velocity; only the goal moves.
    #[default]
    Continuous,
    /// Restart from the previous state's nominal pose at rest. Leaving a
    /// focused target mid-flight can therefore jump by the remaining
    /// distance of the interrupted transition.
    FromNominal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub spring: SpringConfig,
    pub retarget: Retarget,
    /// Start at the registry's intro pose and fly home on mount.
    pub intro: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::camera(),
            retarget: Retarget::Continuous,
            intro: true,
        }
    }
}

pub struct CameraChoreographer {
    config: CameraConfig,
    mode: CameraMode,
    position: SpringVec3,
    look_at: SpringVec3,
}

impl CameraChoreographer {
    pub fn new(config: CameraConfig, registry: &TargetRegistry) -> Self {
        let home = registry.home_pose();
        let start = if config.intro {
            registry.intro_pose()
        } else {
            home
        };
        let mut position = SpringVec3::with_config(start.position, config.spring);
        let mut look_at = SpringVec3::with_config(start.look_at, config.spring);
        position.set_target(home.position);
        look_at.set_target(home.look_at);
        Self {
            config,
            mode: CameraMode::Home,
            position,
            look_at,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Current interpolated pose.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position.value(),
            look_at: self.look_at.value(),
        }
    }

    /// Pose the springs are heading toward.
    pub fn goal(&self) -> CameraPose {
        CameraPose {
            position: self.position.target(),
            look_at: self.look_at.target(),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.position.is_settled() && self.look_at.is_settled()
    }

    /// Jump straight to the pose for `mode` with no transition.
    pub fn snap_to(&mut self, mode: CameraMode, registry: &TargetRegistry) {
        let pose = registry.pose_for(mode.target());
        self.mode = mode;
        self.position.set_immediate(pose.position);
        self.look_at.set_immediate(pose.look_at);
    }

    /// Follow `selected` and advance the springs by `dt` seconds.
    pub fn update(
        &mut self,
        dt: f32,
        selected: Option<TargetId>,
        registry: &TargetRegistry,
    ) -> CameraPose {
        let next = CameraMode::from_selection(selected);
        if next != self.mode {
            self.retarget(next, registry);
        }
        self.position.update(dt);
        self.look_at.update(dt);
        self.pose()
    }

    fn retarget(&mut self, next: CameraMode, registry: &TargetRegistry) {
        let goal = registry.pose_for(next.target());
        log::debug!("[camera] {:?} -> {:?}", self.mode, next);
        match self.config.retarget {
            Retarget::Continuous => {
                self.position.set_target(goal.position);
                self.look_at.set_target(goal.look_at);
            }
            Retarget::FromNominal => {
                let from = match self.mode {
                    CameraMode::Focused(prev) => registry.entry(prev).camera_pose(),
                    CameraMode::Home => self.pose(),
                };
                self.position.restart(from.position, goal.position);
                self.look_at.restart(from.look_at, goal.look_at);
            }
        }
        self.mode = next;
    }
}
