//! Rigid-body simulation for the draggable objects, backed by rapier3d.
//!
//! The world is advanced at a fixed 60 Hz from a frame-time accumulator,
//! with a bound on catch-up steps per frame.

use crate::constants::{
    BODY_FRICTION, BODY_HALF_EXTENT, BODY_RESTITUTION, GRAVITY, GROUND_HALF_EXTENT, GROUND_Y,
    MAX_FRAME_DT, PHYSICS_DT, PHYSICS_MAX_STEPS_PER_FRAME,
};
use crate::drag::{BodyControl, BodyHandle, DragShape, DragSpawn};
use rapier3d::prelude::*;
use std::fmt;

/// Ground slab thickness below its top face.
const GROUND_HALF_HEIGHT: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsConfig {
    pub gravity: glam::Vec3,
    pub dt: f32,
    pub max_steps_per_frame: u32,
    pub ground_y: f32,
    pub ground_half_extent: f32,
    pub restitution: f32,
    pub friction: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            dt: PHYSICS_DT,
            max_steps_per_frame: PHYSICS_MAX_STEPS_PER_FRAME,
            ground_y: GROUND_Y,
            ground_half_extent: GROUND_HALF_EXTENT,
            restitution: BODY_RESTITUTION,
            friction: BODY_FRICTION,
        }
    }
}

pub struct PhysicsWorld {
    config: PhysicsConfig,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    gravity: Vector,
    bodies: Vec<RigidBodyHandle>,
    accumulator: f32,
    steps: u64,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl fmt::Debug for PhysicsWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicsWorld")
            .field("steps", &self.steps)
            .field("bodies", &self.bodies.len())
            .field("accumulator", &self.accumulator)
            .finish_non_exhaustive()
    }
}

impl PhysicsWorld {
    /// An empty world with only the ground slab.
    pub fn new(config: PhysicsConfig) -> Self {
        let integration_parameters = IntegrationParameters {
            dt: config.dt,
            ..Default::default()
        };
        let mut world = Self {
            config,
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity: Vector::new(config.gravity.x, config.gravity.y, config.gravity.z),
            bodies: Vec::new(),
            accumulator: 0.0,
            steps: 0,
        };
        world.add_ground();
        world
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    fn add_ground(&mut self) {
        let ground = RigidBodyBuilder::fixed()
            .translation(Vector::new(
                0.0,
                self.config.ground_y - GROUND_HALF_HEIGHT,
                0.0,
            ))
            .build();
        let handle = self.rigid_body_set.insert(ground);
        let collider = ColliderBuilder::cuboid(
            self.config.ground_half_extent,
            GROUND_HALF_HEIGHT,
            self.config.ground_half_extent,
        )
        .friction(self.config.friction)
        .build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);
    }

    /// Add one draggable body and return the handle a drag proxy attaches to.
    /// The body starts in the spawn orientation and is free to tumble.
    pub fn spawn(&mut self, spawn: &DragSpawn) -> BodyHandle {
        let p = spawn.position;
        let axis_angle = spawn.orientation().to_scaled_axis();
        let body = RigidBodyBuilder::dynamic()
            .translation(Vector::new(p.x, p.y, p.z))
            .rotation(Vector::new(axis_angle.x, axis_angle.y, axis_angle.z))
            .build();
        let handle = self.rigid_body_set.insert(body);
        let collider = match spawn.shape {
            DragShape::Box => {
                ColliderBuilder::cuboid(BODY_HALF_EXTENT, BODY_HALF_EXTENT, BODY_HALF_EXTENT)
            }
            DragShape::Torus => ColliderBuilder::ball(BODY_HALF_EXTENT),
        }
        .restitution(self.config.restitution)
        .friction(self.config.friction)
        .build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);
        self.bodies.push(handle);
        BodyHandle(self.bodies.len() - 1)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Total fixed steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn gravity_scale(&self, handle: BodyHandle) -> Option<f32> {
        self.body(handle).map(|b| b.gravity_scale())
    }

    pub fn linear_speed(&self, handle: BodyHandle) -> Option<f32> {
        self.body(handle).map(|b| {
            let v = b.linvel();
            (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
        })
    }

    pub fn angular_speed(&self, handle: BodyHandle) -> Option<f32> {
        self.body(handle).map(|b| {
            let w = b.angvel();
            (w.x * w.x + w.y * w.y + w.z * w.z).sqrt()
        })
    }

    /// Remove a body; its handle becomes dangling and all [`BodyControl`]
    /// calls on it turn into no-ops.
    pub fn remove(&mut self, handle: BodyHandle) {
        let Some(&raw) = self.bodies.get(handle.0) else {
            return;
        };
        self.rigid_body_set.remove(
            raw,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }

    /// Advance by one fixed step.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            &(),
            &(),
        );
        self.steps += 1;
    }

    /// Accumulate `dt` of frame time and run as many fixed steps as fit.
    /// Returns the number of steps taken.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulator += dt.min(MAX_FRAME_DT);
        let mut taken = 0;
        while self.accumulator >= self.config.dt && taken < self.config.max_steps_per_frame {
            self.step();
            self.accumulator -= self.config.dt;
            taken += 1;
        }
        if taken == self.config.max_steps_per_frame {
            // drop the backlog instead of spiralling
            self.accumulator = self.accumulator.min(self.config.dt);
        }
        taken
    }

    fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        let raw = *self.bodies.get(handle.0)?;
        self.rigid_body_set.get(raw)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        let raw = *self.bodies.get(handle.0)?;
        self.rigid_body_set.get_mut(raw)
    }
}

impl BodyControl for PhysicsWorld {
    fn translation(&self, handle: BodyHandle) -> Option<glam::Vec3> {
        self.body(handle).map(|b| {
            let t = b.translation();
            glam::Vec3::new(t.x, t.y, t.z)
        })
    }

    fn rotation(&self, handle: BodyHandle) -> Option<glam::Quat> {
        self.body(handle).map(|b| {
            let r = b.rotation();
            glam::Quat::from_xyzw(r.x, r.y, r.z, r.w).normalize()
        })
    }

    fn set_translation(&mut self, handle: BodyHandle, position: glam::Vec3) {
        if let Some(body) = self.body_mut(handle) {
            body.set_translation(Vector::new(position.x, position.y, position.z), true);
        }
    }

    fn zero_linvel(&mut self, handle: BodyHandle) {
        if let Some(body) = self.body_mut(handle) {
            body.set_linvel(Vector::new(0.0, 0.0, 0.0), true);
        }
    }

    fn zero_angvel(&mut self, handle: BodyHandle) {
        if let Some(body) = self.body_mut(handle) {
            body.set_angvel(Vector::new(0.0, 0.0, 0.0), true);
        }
    }

    fn set_gravity_scale(&mut self, handle: BodyHandle, scale: f32) {
        if let Some(body) = self.body_mut(handle) {
            body.set_gravity_scale(scale, true);
        }
    }
}
