//! Greeting text that shies away from the pointer.
//!
//! The pointer is read on the `z = 0` plane. Within
//! [`GREETING_REPEL_RADIUS`] of a greeting's hot spot the text springs
//! away from it and the four corner shapes fan out toward the camera and
//! spin. Once the pointer is gone everything drifts back to its resting
//! spot; the corners keep whatever spin they built up.

use crate::constants::{
    GREETING_CORNER_PUSH, GREETING_FALLOFF, GREETING_HOT_SPOT_DROP, GREETING_LETTER_SPACING,
    GREETING_NEAR_Z, GREETING_PUSH, GREETING_REPEL_RADIUS, GREETING_SPIN_RATE,
    GREETING_TEXT_HEIGHT, GREETING_TEXT_SIZE, MAX_FRAME_DT,
};
use crate::spring::{SpringConfig, SpringVec3};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerShape {
    Cube,
    Tetrahedron,
    Octahedron,
    Dodecahedron,
}

impl CornerShape {
    /// Top right, top left, bottom right, bottom left.
    pub const ALL: [CornerShape; 4] = [
        CornerShape::Cube,
        CornerShape::Tetrahedron,
        CornerShape::Octahedron,
        CornerShape::Dodecahedron,
    ];

    /// Which corner of the text the shape belongs to, as (x, y) signs.
    pub fn side(self) -> Vec2 {
        match self {
            CornerShape::Cube => Vec2::new(1.0, 1.0),
            CornerShape::Tetrahedron => Vec2::new(-1.0, 1.0),
            CornerShape::Octahedron => Vec2::new(1.0, -1.0),
            CornerShape::Dodecahedron => Vec2::new(-1.0, -1.0),
        }
    }

    pub fn scale(self) -> f32 {
        match self {
            CornerShape::Cube => 0.7,
            _ => 0.5,
        }
    }
}

/// One line of greeting text and where it hangs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreetingSpec {
    pub text: &'static str,
    pub anchor: Vec3,
    /// XYZ Euler tilt of the text.
    pub tilt: Vec3,
}

pub const GREETINGS: [GreetingSpec; 2] = [
    GreetingSpec {
        text: "Hello my name",
        anchor: Vec3::new(-2.0, 6.0, -10.0),
        tilt: Vec3::new(-0.3, -0.2, 0.0),
    },
    GreetingSpec {
        text: "is Your Name !",
        anchor: Vec3::new(2.0, 4.0, -10.0),
        tilt: Vec3::new(0.3, 0.2, 0.0),
    },
];

impl GreetingSpec {
    /// Rough half extent of the rendered line.
    pub fn half_width(&self) -> f32 {
        self.text.chars().count() as f32 * (GREETING_TEXT_SIZE + GREETING_LETTER_SPACING) / 2.5
    }

    pub fn half_height(&self) -> f32 {
        GREETING_TEXT_HEIGHT
    }

    /// Centre of the repel circle.
    pub fn hot_spot(&self) -> Vec2 {
        Vec2::new(self.anchor.x, self.anchor.y - GREETING_HOT_SPOT_DROP)
    }

    /// Where a corner shape idles while the pointer is away.
    pub fn corner_rest(&self, shape: CornerShape) -> Vec3 {
        let a = self.anchor;
        match shape {
            CornerShape::Cube => Vec3::new(a.x + 6.0, a.y + 3.0, a.z),
            CornerShape::Tetrahedron => Vec3::new(a.x - 7.0, a.y + self.half_height(), a.z),
            CornerShape::Octahedron => Vec3::new(a.x + self.half_width(), a.y, a.z),
            CornerShape::Dodecahedron => Vec3::new(a.x - 7.0, a.y - self.half_height(), -8.0),
        }
    }

    /// Where a corner shape heads while the pointer pushes by `offset`.
    pub fn corner_near(&self, shape: CornerShape, offset: Vec2) -> Vec3 {
        let side = shape.side();
        Vec3::new(
            self.anchor.x + 4.0 * side.x - offset.x * GREETING_CORNER_PUSH,
            self.anchor.y - 2.0 + side.y - offset.y * GREETING_CORNER_PUSH,
            GREETING_NEAR_Z,
        )
    }

    /// How far the pointer pushes the text, or `None` when it is out of reach.
    pub fn push(&self, pointer: Vec2) -> Option<Vec2> {
        let distance = pointer.distance(self.hot_spot());
        if distance >= GREETING_REPEL_RADIUS {
            return None;
        }
        let factor = 1.0 - distance / GREETING_FALLOFF;
        Some((pointer - self.anchor.truncate()) * factor * GREETING_PUSH)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerVisual {
    pub shape: CornerShape,
    pub position: Vec3,
    /// XYZ Euler angles.
    pub rotation: Vec3,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreetingVisual {
    pub text: &'static str,
    pub position: Vec3,
    pub tilt: Vec3,
    pub near: bool,
    pub corners: [CornerVisual; 4],
}

#[derive(Clone, Copy, Debug)]
struct Corner {
    shape: CornerShape,
    position: SpringVec3,
    rotation: SpringVec3,
}

#[derive(Clone, Debug)]
pub struct Greeting {
    spec: GreetingSpec,
    text: SpringVec3,
    corners: [Corner; 4],
    spin: Vec3,
    near: bool,
}

impl Greeting {
    pub fn new(spec: GreetingSpec) -> Self {
        let (hw, hh) = (spec.half_width(), spec.half_height());
        let corners = CornerShape::ALL.map(|shape| {
            let side = shape.side();
            let start = spec.anchor + Vec3::new(side.x * hw, side.y * hh, 0.0);
            Corner {
                shape,
                position: SpringVec3::with_config(start, SpringConfig::GREETING_CORNER),
                rotation: SpringVec3::with_config(Vec3::ZERO, SpringConfig::GREETING_CORNER),
            }
        });
        Self {
            spec,
            text: SpringVec3::with_config(spec.anchor, SpringConfig::GREETING_TEXT),
            corners,
            spin: Vec3::ZERO,
            near: false,
        }
    }

    pub fn spec(&self) -> &GreetingSpec {
        &self.spec
    }

    /// Whether the pointer was within reach on the last update.
    pub fn is_near(&self) -> bool {
        self.near
    }

    /// Accumulated corner spin.
    pub fn spin(&self) -> Vec3 {
        self.spin
    }

    /// Retarget the springs for `pointer` (world x/y on the pointer plane)
    /// and advance them by `dt` seconds.
    pub fn update(&mut self, dt: f32, pointer: Option<Vec2>) -> GreetingVisual {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        let push = pointer.and_then(|p| self.spec.push(p));
        if push.is_some() != self.near {
            log::debug!("[greeting] {:?} near={}", self.spec.text, push.is_some());
        }
        self.near = push.is_some();

        match push {
            Some(offset) => {
                self.text.set_target(self.spec.anchor - offset.extend(0.0));
                self.spin += GREETING_SPIN_RATE * dt;
                for corner in &mut self.corners {
                    corner
                        .position
                        .set_target(self.spec.corner_near(corner.shape, offset));
                }
            }
            None => {
                self.text.set_target(self.spec.anchor);
                for corner in &mut self.corners {
                    corner.position.set_target(self.spec.corner_rest(corner.shape));
                }
            }
        }

        let position = self.text.update(dt);
        let spin = self.spin;
        let slots = &mut self.corners;
        let corners = std::array::from_fn(|i| {
            let c = &mut slots[i];
            c.rotation.set_target(spin);
            CornerVisual {
                shape: c.shape,
                position: c.position.update(dt),
                rotation: c.rotation.update(dt),
                scale: c.shape.scale(),
            }
        });
        GreetingVisual {
            text: self.spec.text,
            position,
            tilt: self.spec.tilt,
            near: self.near,
            corners,
        }
    }
}
