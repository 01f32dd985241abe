//! Ray picking helpers.

use crate::camera::{CameraPose, Lens};
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Ray through a point given in normalized device coordinates
    /// (x right, y up, both in -1..1).
    pub fn from_ndc(ndc_x: f32, ndc_y: f32, pose: &CameraPose, lens: &Lens) -> Self {
        let inv = lens.view_proj(pose).inverse();
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        Self::new(pose.position, far - pose.position)
    }

    /// Distance along the ray to the front of a sphere.
    pub fn sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        ray_sphere(self.origin, self.dir, center, radius)
    }

    /// Intersection with the plane `z = plane_z`.
    pub fn plane_z(&self, plane_z: f32) -> Option<Vec3> {
        ray_plane_z(self.origin, self.dir, plane_z)
    }
}

/// Nearest non-negative hit distance of a ray against a sphere.
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let t = -b - root;
    if t >= 0.0 {
        return Some(t);
    }
    // origin inside the sphere
    let t = -b + root;
    (t >= 0.0).then_some(t)
}

pub fn ray_plane_z(ray_origin: Vec3, ray_dir: Vec3, plane_z: f32) -> Option<Vec3> {
    if ray_dir.z.abs() < 1e-6 {
        return None;
    }
    let t = (plane_z - ray_origin.z) / ray_dir.z;
    (t >= 0.0).then(|| ray_origin + ray_dir * t)
}
