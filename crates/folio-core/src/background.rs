//! Decorative background motion: instanced cube flocks and a wavy plane.
//!
//! Everything here is a pure function of elapsed time, so sampling the
//! same instant twice gives identical output.

use crate::color::hex_rgb;
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

pub const FLOCK_ORIGIN: Vec3 = Vec3::new(0.0, 5.0, -40.0);
pub const FLOCK_YAW: f32 = 3.0;
pub const FLOCK_CUBE_EDGE: f32 = 0.5;
/// Seconds between consecutive cubes along a path.
pub const FLOCK_SPACING: f32 = 0.1;

pub const WAVE_ORIGIN: Vec3 = Vec3::new(0.0, 15.0, -10.0);
pub const WAVE_WIDTH: f32 = 150.0;
pub const WAVE_HEIGHT: f32 = 100.0;
pub const WAVE_SEGMENTS: u32 = 20;
pub const WAVE_AMPLITUDE: f32 = 2.0;
pub const WAVE_FREQUENCY: f32 = 0.1;
pub const WAVE_TIME_SCALE: f32 = 0.5;

/// Closed-form path family of one flock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlockPath {
    Drift,
    Swirl,
    Sweep,
}

impl FlockPath {
    pub fn position(self, t: f32) -> Vec3 {
        match self {
            FlockPath::Drift => Vec3::new(
                (t * 0.4).sin() * 15.0 + (t * 0.3).sin() * 4.0,
                (t * 0.8).cos() * 3.0 + (t * 0.2).sin() * 2.0,
                (t * 1.2).cos() * 10.0 + (t * 0.6).sin() * 5.0,
            ),
            FlockPath::Swirl => Vec3::new(
                (t * 0.5).cos() * 12.0 + (t * 0.3).sin() * 25.0,
                // tan gives the occasional cube that shoots off and wraps round
                (t * 0.8).cos() * 5.0 + (t * 0.4).tan() * 3.0,
                (t * 1.5).sin() * 7.0 + (t * 0.6).cos() * 4.0,
            ),
            FlockPath::Sweep => Vec3::new(
                (t * 0.3).sin() * 35.0 + (t * 0.5).cos() * 5.0,
                (t * 0.5).cos() * 7.0 + (t * 0.3).sin() * 3.0,
                (t * 0.7).sin() * 12.0 + (t * 1.2).cos() * 6.0,
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flock {
    pub path: FlockPath,
    pub count: usize,
    pub color: [f32; 3],
}

impl Flock {
    /// World transform of the group every cube is placed in.
    pub fn group_transform() -> Mat4 {
        Mat4::from_translation(FLOCK_ORIGIN) * Mat4::from_rotation_y(FLOCK_YAW)
    }

    /// World transforms of every cube at `elapsed` seconds, appended to `out`.
    pub fn sample_into(&self, elapsed: f32, out: &mut Vec<Mat4>) {
        let group = Self::group_transform();
        out.reserve(self.count);
        for i in 0..self.count {
            let t = elapsed + i as f32 * FLOCK_SPACING;
            let local = Mat4::from_scale_rotation_translation(
                Vec3::splat(FLOCK_CUBE_EDGE),
                Quat::from_euler(EulerRot::XYZ, t, t, 0.0),
                self.path.position(t),
            );
            out.push(group * local);
        }
    }

    pub fn sample(&self, elapsed: f32) -> Vec<Mat4> {
        let mut out = Vec::with_capacity(self.count);
        self.sample_into(elapsed, &mut out);
        out
    }
}

pub fn default_flocks() -> [Flock; 3] {
    [
        Flock {
            path: FlockPath::Drift,
            count: 100,
            color: hex_rgb(0x1a_9f_ca),
        },
        Flock {
            path: FlockPath::Swirl,
            count: 50,
            color: hex_rgb(0x15_be_2c),
        },
        Flock {
            path: FlockPath::Sweep,
            count: 50,
            color: hex_rgb(0xbe_15_15),
        },
    ]
}

/// Height-displaced grid laid out like a plane of `width` × `height`
/// centred on its origin, rows running from +y down to -y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavyPlane {
    pub width: f32,
    pub height: f32,
    pub segments: u32,
    pub color: [f32; 3],
}

impl Default for WavyPlane {
    fn default() -> Self {
        Self {
            width: WAVE_WIDTH,
            height: WAVE_HEIGHT,
            segments: WAVE_SEGMENTS,
            color: hex_rgb(0x11_21_54),
        }
    }
}

impl WavyPlane {
    /// Vertices per row (and per column).
    pub fn stride(&self) -> usize {
        self.segments as usize + 1
    }

    pub fn vertex_count(&self) -> usize {
        self.stride() * self.stride()
    }

    /// Undisplaced plane-local (x, y) of vertex `i`.
    pub fn vertex_xy(&self, i: usize) -> (f32, f32) {
        let stride = self.stride();
        let (row, col) = (i / stride, i % stride);
        let seg = self.segments.max(1) as f32;
        let x = -self.width / 2.0 + self.width * col as f32 / seg;
        let y = self.height / 2.0 - self.height * row as f32 / seg;
        (x, y)
    }

    pub fn height_at(x: f32, y: f32, elapsed: f32) -> f32 {
        let t = elapsed * WAVE_TIME_SCALE;
        (x * WAVE_FREQUENCY + t).sin() * (y * WAVE_FREQUENCY + t).cos() * WAVE_AMPLITUDE
    }

    /// Plane-local z of every vertex, overwriting `out`.
    pub fn heights_into(&self, elapsed: f32, out: &mut Vec<f32>) {
        out.clear();
        out.extend((0..self.vertex_count()).map(|i| {
            let (x, y) = self.vertex_xy(i);
            Self::height_at(x, y, elapsed)
        }));
    }

    /// Placement in the world: hung overhead, facing down.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(WAVE_ORIGIN) * Mat4::from_rotation_x(FRAC_PI_2)
    }

    /// Triangle indices for the grid, two per cell.
    pub fn indices(&self) -> Vec<u32> {
        let stride = self.stride() as u32;
        let mut out = Vec::with_capacity((self.segments * self.segments * 6) as usize);
        for row in 0..self.segments {
            for col in 0..self.segments {
                let a = row * stride + col;
                let b = a + 1;
                let c = a + stride;
                let d = c + 1;
                out.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }
        out
    }
}

/// Flocks plus the wavy plane, sampled together once per frame.
#[derive(Clone, Debug)]
pub struct Background {
    flocks: [Flock; 3],
    plane: WavyPlane,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            flocks: default_flocks(),
            plane: WavyPlane::default(),
        }
    }
}

impl Background {
    pub fn flocks(&self) -> &[Flock; 3] {
        &self.flocks
    }

    pub fn plane(&self) -> &WavyPlane {
        &self.plane
    }

    /// Per-flock cube transforms at `elapsed`.
    pub fn sample_flocks(&self, elapsed: f32) -> Vec<Vec<Mat4>> {
        self.flocks.iter().map(|f| f.sample(elapsed)).collect()
    }

    pub fn sample_wave(&self, elapsed: f32) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.plane.vertex_count());
        self.plane.heights_into(elapsed, &mut out);
        out
    }
}
