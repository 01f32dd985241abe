//! Pointer dragging of physics bodies.
//!
//! A [`DragProxy`] never owns its body. Every physics access goes through
//! the [`BodyControl`] seam so the proxy can be driven against the real
//! rapier world or a recording fake.

use crate::color::hex_rgb;
use crate::constants::{DRAG_FLOOR_Y, DRAG_HELD_SCALE};
use crate::spring::{SpringConfig, SpringF32};
use glam::{EulerRot, Quat, Vec2, Vec3};

/// Opaque index of a body inside a [`BodyControl`] implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// The handful of rigid-body operations dragging needs.
///
/// Implementations treat an unknown handle as a no-op (and `None` for
/// queries).
pub trait BodyControl {
    fn translation(&self, handle: BodyHandle) -> Option<Vec3>;
    fn rotation(&self, handle: BodyHandle) -> Option<Quat>;
    fn set_translation(&mut self, handle: BodyHandle, position: Vec3);
    fn zero_linvel(&mut self, handle: BodyHandle);
    fn zero_angvel(&mut self, handle: BodyHandle);
    fn set_gravity_scale(&mut self, handle: BodyHandle, scale: f32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragShape {
    Box,
    Torus,
}

impl DragShape {
    pub fn idle_color(self) -> [f32; 3] {
        match self {
            DragShape::Box => hex_rgb(0x4e_c9_b0),
            DragShape::Torus => hex_rgb(0x6c_5c_e7),
        }
    }

    pub fn held_color(self) -> [f32; 3] {
        match self {
            DragShape::Box => hex_rgb(0xff_6b_6b),
            DragShape::Torus => hex_rgb(0xff_d9_3d),
        }
    }
}

/// Initial placement of one draggable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSpawn {
    pub shape: DragShape,
    pub position: Vec3,
    /// XYZ Euler angles of the body at rest before the first step.
    pub rotation: Vec3,
}

impl DragSpawn {
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

pub const DRAGGABLE_SPAWNS: [DragSpawn; 4] = [
    DragSpawn {
        shape: DragShape::Box,
        position: Vec3::new(-11.0, 2.0, -5.0),
        rotation: Vec3::new(1.0, 2.0, 2.0),
    },
    DragSpawn {
        shape: DragShape::Box,
        position: Vec3::new(-10.5, 4.0, -5.0),
        rotation: Vec3::new(1.0, 4.0, 3.0),
    },
    DragSpawn {
        shape: DragShape::Torus,
        position: Vec3::new(11.0, 4.0, -5.0),
        rotation: Vec3::new(1.0, 4.0, 3.0),
    },
    DragSpawn {
        shape: DragShape::Torus,
        position: Vec3::new(11.0, 6.0, -5.0),
        rotation: Vec3::new(1.0, 2.0, 3.0),
    },
];

/// Pointer and body positions captured on pointer-down (x/y plane).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_pointer: Vec2,
    pub start_body: Vec2,
}

impl DragSession {
    /// Body position for the pointer at `pointer`, before z and floor rules.
    pub fn follow(&self, pointer: Vec2) -> Vec2 {
        self.start_body + (pointer - self.start_pointer)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragVisual {
    pub shape: DragShape,
    pub position: Vec3,
    /// Orientation as simulated.
    pub rotation: Quat,
    pub scale: f32,
    pub color: [f32; 3],
    pub held: bool,
}

pub struct DragProxy {
    spawn: DragSpawn,
    body: Option<BodyHandle>,
    home_z: f32,
    floor_y: f32,
    session: Option<DragSession>,
    scale: SpringF32,
}

impl DragProxy {
    pub fn new(spawn: DragSpawn) -> Self {
        Self {
            spawn,
            body: None,
            home_z: spawn.position.z,
            floor_y: DRAG_FLOOR_Y,
            session: None,
            scale: SpringF32::with_config(1.0, SpringConfig::DRAG),
        }
    }

    pub fn attach(&mut self, handle: BodyHandle) {
        self.body = Some(handle);
    }

    pub fn body(&self) -> Option<BodyHandle> {
        self.body
    }

    pub fn spawn(&self) -> &DragSpawn {
        &self.spawn
    }

    pub fn shape(&self) -> DragShape {
        self.spawn.shape
    }

    pub fn home_z(&self) -> f32 {
        self.home_z
    }

    pub fn floor_y(&self) -> f32 {
        self.floor_y
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Current body position, if the body exists.
    pub fn position(&self, bodies: &impl BodyControl) -> Option<Vec3> {
        self.body.and_then(|h| bodies.translation(h))
    }

    /// Start dragging. Returns false (and changes nothing) when no body is
    /// attached or the body has gone away.
    pub fn on_pointer_down(&mut self, point: Vec3, bodies: &mut impl BodyControl) -> bool {
        let Some(handle) = self.body else {
            return false;
        };
        let Some(at) = bodies.translation(handle) else {
            log::debug!("[drag] body {:?} missing on grab", handle);
            return false;
        };
        self.session = Some(DragSession {
            start_pointer: point.truncate(),
            start_body: at.truncate(),
        });
        bodies.set_gravity_scale(handle, 0.0);
        bodies.zero_linvel(handle);
        bodies.zero_angvel(handle);
        self.scale.set_target(DRAG_HELD_SCALE);
        log::info!("[drag] grab {:?} at ({:.2}, {:.2})", self.spawn.shape, at.x, at.y);
        true
    }

    pub fn on_pointer_move(&mut self, point: Vec3, bodies: &mut impl BodyControl) {
        let (Some(handle), Some(session)) = (self.body, self.session) else {
            return;
        };
        let next = session.follow(point.truncate());
        let position = Vec3::new(next.x, next.y.max(self.floor_y), self.home_z);
        bodies.set_translation(handle, position);
        bodies.zero_linvel(handle);
        bodies.zero_angvel(handle);
    }

    /// End the drag and hand the body back to gravity. Only the first call
    /// after a grab has any effect.
    pub fn on_pointer_up(&mut self, bodies: &mut impl BodyControl) {
        if self.session.take().is_none() {
            return;
        }
        self.scale.set_target(1.0);
        if let Some(handle) = self.body {
            bodies.set_gravity_scale(handle, 1.0);
            log::info!("[drag] release {:?}", self.spawn.shape);
        }
    }

    pub fn on_pointer_leave(&mut self, bodies: &mut impl BodyControl) {
        self.on_pointer_up(bodies);
    }

    /// Per-frame upkeep. Returns `None` while no live body backs the proxy.
    pub fn update(&mut self, dt: f32, bodies: &mut impl BodyControl) -> Option<DragVisual> {
        self.scale.update(dt);
        let handle = self.body?;
        if self.is_dragging() {
            // held bodies neither drift nor tumble
            bodies.zero_linvel(handle);
            bodies.zero_angvel(handle);
        }
        let position = bodies.translation(handle)?;
        let rotation = bodies.rotation(handle).unwrap_or_else(|| self.spawn.orientation());
        let held = self.is_dragging();
        Some(DragVisual {
            shape: self.spawn.shape,
            position,
            rotation,
            scale: self.scale.value(),
            color: if held {
                self.spawn.shape.held_color()
            } else {
                self.spawn.shape.idle_color()
            },
            held,
        })
    }
}
