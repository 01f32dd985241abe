use crate::constants::{
    TARGET_ACTIVE_OFFSET_Z, TARGET_ACTIVE_SCALE, TARGET_HOVER_EMISSIVE, TARGET_IDLE_SCALE,
    TARGET_LABEL_HEIGHT, TARGET_SPIN_RATE, TARGET_UNWIND_FACTOR,
};
use crate::registry::TargetEntry;
use crate::selection::SelectionState;
use crate::spring::{SpringConfig, SpringF32};
use crate::target::TargetId;
use glam::Vec3;
use std::f32::consts::TAU;

pub const LABEL_COLOR_IDLE: [f32; 3] = [1.0, 1.0, 1.0];
pub const LABEL_COLOR_ACTIVE: [f32; 3] = [1.0, 1.0, 0.0];

/// Gentle idle bobbing applied to each target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    pub phase: f32,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: 4.0,
            rotation_intensity: 0.5,
            float_intensity: 1.0,
            phase: 0.0,
        }
    }
}

impl FloatMotion {
    /// Vertical offset and (x, y, z) tilt in radians at `elapsed` seconds.
    pub fn sample(&self, elapsed: f32) -> (f32, Vec3) {
        let t = (self.phase + elapsed) / 4.0 * self.speed;
        let (s, c) = t.sin_cos();
        let tilt = Vec3::new(c / 8.0, s / 8.0, s / 20.0) * self.rotation_intensity;
        let lift = s / 10.0 * self.float_intensity;
        (lift, tilt)
    }
}

/// Per-frame output of a [`TargetProxy`], consumed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetVisual {
    pub id: TargetId,
    pub position: Vec3,
    pub scale: f32,
    pub yaw: f32,
    pub tilt: Vec3,
    pub emissive: f32,
    pub color: [f32; 3],
    pub label_color: [f32; 3],
    pub label_anchor: Vec3,
    pub hovered: bool,
    pub active: bool,
}

/// Interactive stand-in for one selectable target.
///
/// Hover is local to the proxy; "active" is derived from the shared
/// [`SelectionState`] on every update.
pub struct TargetProxy {
    entry: TargetEntry,
    hovered: bool,
    scale: SpringF32,
    offset_z: SpringF32,
    yaw: f32,
    float: FloatMotion,
}

impl TargetProxy {
    pub fn new(entry: TargetEntry) -> Self {
        let float = FloatMotion {
            // spread the bob so the three targets do not move in lockstep
            phase: entry.id.index() as f32 * 1.7,
            ..FloatMotion::default()
        };
        Self {
            entry,
            hovered: false,
            scale: SpringF32::with_config(TARGET_IDLE_SCALE, SpringConfig::TARGET),
            offset_z: SpringF32::with_config(0.0, SpringConfig::TARGET),
            yaw: 0.0,
            float,
        }
    }

    pub fn id(&self) -> TargetId {
        self.entry.id
    }

    pub fn entry(&self) -> &TargetEntry {
        &self.entry
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn offset_z(&self) -> f32 {
        self.offset_z.value()
    }

    pub fn set_float(&mut self, float: FloatMotion) {
        self.float = float;
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn click(&self, selection: &mut SelectionState) {
        selection.select(self.entry.id);
    }

    /// World-space centre used for picking (includes the active pull-forward).
    pub fn pick_center(&self) -> Vec3 {
        self.entry.anchor + Vec3::new(0.0, 0.0, self.offset_z.value())
    }

    pub fn update(&mut self, dt: f32, elapsed: f32, selected: Option<TargetId>) -> TargetVisual {
        let active = selected == Some(self.entry.id);

        self.scale.set_target(if self.hovered || active {
            TARGET_ACTIVE_SCALE
        } else {
            TARGET_IDLE_SCALE
        });
        self.offset_z
            .set_target(if active { TARGET_ACTIVE_OFFSET_Z } else { 0.0 });
        self.scale.update(dt);
        self.offset_z.update(dt);

        self.yaw = advance_yaw(self.yaw, dt, active);

        let (lift, tilt) = self.float.sample(elapsed);
        let position = self.entry.anchor + Vec3::new(0.0, lift, self.offset_z.value());
        TargetVisual {
            id: self.entry.id,
            position,
            scale: self.scale.value(),
            yaw: self.yaw,
            tilt,
            emissive: if self.hovered {
                TARGET_HOVER_EMISSIVE
            } else {
                0.0
            },
            color: self.entry.color,
            label_color: if active {
                LABEL_COLOR_ACTIVE
            } else {
                LABEL_COLOR_IDLE
            },
            label_anchor: position + Vec3::new(0.0, TARGET_LABEL_HEIGHT, 0.0),
            hovered: self.hovered,
            active,
        }
    }
}

/// Spin while active; otherwise ease back to the nearest whole turn so the
/// target comes to rest facing forward.
pub fn advance_yaw(yaw: f32, dt: f32, active: bool) -> f32 {
    let dt = dt.max(0.0);
    if active {
        return yaw + dt * TARGET_SPIN_RATE;
    }
    let rest = (yaw / TAU).round() * TAU;
    let alpha = 1.0 - (1.0 - TARGET_UNWIND_FACTOR).powf(dt * 60.0);
    let next = yaw + (rest - yaw) * alpha;
    if (next - rest).abs() < 1e-4 {
        rest
    } else {
        next
    }
}
