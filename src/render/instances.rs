use crate::constants::{GROUND_RGB, TARGET_MESH_RADIUS};
use folio_core::constants::GROUND_Y;
use folio_core::drag::DragShape;
use folio_core::greeting::CornerShape;
use folio_core::scene::FrameSnapshot;
use folio_core::target::TargetId;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Per-instance data consumed by `vs_main` (locations 2..=7).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// x: emissive, y: unlit flag (0/1), z: normal-shaded flag (0/1)
    pub params: [f32; 4],
}

impl InstanceRaw {
    pub fn lit(model: Mat4, color: [f32; 3], emissive: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
            params: [emissive, 0.0, 0.0, 0.0],
        }
    }

    pub fn unlit(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
            params: [0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Coloured by surface normal, ignoring lights.
    pub fn normal_shaded(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [1.0; 4],
            params: [0.0, 1.0, 1.0, 0.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Cube,
    Torus,
    Octahedron,
    Icosahedron,
    Sphere,
    Tetrahedron,
    Dodecahedron,
    Ground,
}

impl MeshKind {
    pub const ALL: [MeshKind; 8] = [
        MeshKind::Cube,
        MeshKind::Torus,
        MeshKind::Octahedron,
        MeshKind::Icosahedron,
        MeshKind::Sphere,
        MeshKind::Tetrahedron,
        MeshKind::Dodecahedron,
        MeshKind::Ground,
    ];

    pub fn for_target(id: TargetId) -> Self {
        match id {
            TargetId::About => MeshKind::Icosahedron,
            TargetId::Projects => MeshKind::Octahedron,
            TargetId::Contact => MeshKind::Sphere,
        }
    }

    pub fn for_drag(shape: DragShape) -> Self {
        match shape {
            DragShape::Box => MeshKind::Cube,
            DragShape::Torus => MeshKind::Torus,
        }
    }

    pub fn for_corner(shape: CornerShape) -> Self {
        match shape {
            CornerShape::Cube => MeshKind::Cube,
            CornerShape::Tetrahedron => MeshKind::Tetrahedron,
            CornerShape::Octahedron => MeshKind::Octahedron,
            CornerShape::Dodecahedron => MeshKind::Dodecahedron,
        }
    }

    /// Factor that brings the uploaded mesh to unit size (edge 1 for the
    /// cube, radius 1 for the rest).
    pub fn unit_scale(self) -> f32 {
        match self {
            MeshKind::Octahedron | MeshKind::Icosahedron | MeshKind::Sphere => {
                1.0 / TARGET_MESH_RADIUS
            }
            _ => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawBatch {
    pub mesh: MeshKind,
    pub instances: Vec<InstanceRaw>,
}

fn batch_mut(batches: &mut Vec<DrawBatch>, mesh: MeshKind) -> &mut Vec<InstanceRaw> {
    let i = match batches.iter().position(|b| b.mesh == mesh) {
        Some(i) => i,
        None => {
            batches.push(DrawBatch {
                mesh,
                instances: Vec::new(),
            });
            batches.len() - 1
        }
    };
    &mut batches[i].instances
}

/// Group everything in the snapshot (except the wavy plane) by mesh.
pub fn build_batches(snapshot: &FrameSnapshot, flock_colors: &[[f32; 3]]) -> Vec<DrawBatch> {
    let mut batches = Vec::new();

    batch_mut(&mut batches, MeshKind::Ground).push(InstanceRaw::lit(
        Mat4::from_translation(Vec3::new(0.0, GROUND_Y, 0.0)),
        GROUND_RGB,
        0.0,
    ));

    for t in &snapshot.targets {
        let tilt = Quat::from_euler(EulerRot::XYZ, t.tilt.x, t.tilt.y, t.tilt.z);
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(t.scale),
            tilt * Quat::from_rotation_y(t.yaw),
            t.position,
        );
        batch_mut(&mut batches, MeshKind::for_target(t.id)).push(InstanceRaw::lit(
            model,
            t.color,
            t.emissive,
        ));
    }

    for d in &snapshot.draggables {
        let model =
            Mat4::from_scale_rotation_translation(Vec3::splat(d.scale), d.rotation, d.position);
        batch_mut(&mut batches, MeshKind::for_drag(d.shape)).push(InstanceRaw::lit(
            model, d.color, 0.0,
        ));
    }

    for corner in snapshot.greetings.iter().flat_map(|g| g.corners.iter()) {
        let kind = MeshKind::for_corner(corner.shape);
        let r = corner.rotation;
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(corner.scale * kind.unit_scale()),
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            corner.position,
        );
        batch_mut(&mut batches, kind).push(InstanceRaw::normal_shaded(model));
    }

    let cubes = batch_mut(&mut batches, MeshKind::Cube);
    for (flock, color) in snapshot.flocks.iter().zip(flock_colors) {
        cubes.extend(flock.iter().map(|m| InstanceRaw::unlit(*m, *color)));
    }

    batches
}
