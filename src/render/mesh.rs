use folio_core::background::WavyPlane;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Faceted mesh: every triangle gets its own three vertices and an
/// outward-facing normal (faces are re-wound if given inside out).
pub fn flat(positions: &[Vec3], faces: &[[u32; 3]]) -> MeshData {
    let center = positions.iter().copied().sum::<Vec3>() / positions.len().max(1) as f32;
    let mut mesh = MeshData::default();
    for face in faces {
        let [a, b, c] = face.map(|i| positions[i as usize]);
        let mut n = (b - a).cross(c - a);
        let (b, c) = if n.dot((a + b + c) / 3.0 - center) < 0.0 {
            n = -n;
            (c, b)
        } else {
            (b, c)
        };
        let base = mesh.vertices.len() as u32;
        for p in [a, b, c] {
            mesh.vertices.push(Vertex::new(p, n));
        }
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
    mesh
}

/// Axis-aligned cube with edge length `size`.
pub fn cube(size: f32) -> MeshData {
    let h = size / 2.0;
    let mut mesh = MeshData::default();
    let axes = [Vec3::X, Vec3::Y, Vec3::Z];
    for (i, axis) in axes.iter().enumerate() {
        let u = axes[(i + 1) % 3];
        let v = axes[(i + 2) % 3];
        for sign in [1.0f32, -1.0] {
            let n = *axis * sign;
            let base = mesh.vertices.len() as u32;
            for (du, dv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let p = (n + u * du + v * dv * sign) * h;
                mesh.vertices.push(Vertex::new(p, n));
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }
    mesh
}

pub fn octahedron(radius: f32) -> MeshData {
    let p = [Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z].map(|v| v * radius);
    let faces = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    flat(&p, &faces)
}

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices(radius: f32) -> Vec<Vec3> {
    let t = (1.0 + 5.0f32.sqrt()) / 2.0;
    [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z).normalize() * radius)
    .collect()
}

pub fn icosahedron(radius: f32) -> MeshData {
    flat(&icosahedron_vertices(radius), &ICOSAHEDRON_FACES)
}

pub fn tetrahedron(radius: f32) -> MeshData {
    let p = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ]
    .map(|v| v.normalize() * radius);
    flat(&p, &[[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]])
}

/// Dual of the icosahedron: one pentagon per icosahedron vertex, built
/// from the centres of the five faces around it.
pub fn dodecahedron(radius: f32) -> MeshData {
    let ico = icosahedron_vertices(1.0);
    let centres: Vec<Vec3> = ICOSAHEDRON_FACES
        .iter()
        .map(|f| (f.iter().map(|&i| ico[i as usize]).sum::<Vec3>() / 3.0).normalize() * radius)
        .collect();
    let mut faces = Vec::with_capacity(36);
    for (vi, v) in ico.iter().enumerate() {
        let (u, w) = v.any_orthonormal_pair();
        let mut ring: Vec<u32> = ICOSAHEDRON_FACES
            .iter()
            .enumerate()
            .filter(|(_, f)| f.contains(&(vi as u32)))
            .map(|(fi, _)| fi as u32)
            .collect();
        ring.sort_by(|&a, &b| {
            let angle = |i: u32| {
                let c = centres[i as usize];
                c.dot(w).atan2(c.dot(u))
            };
            angle(a).total_cmp(&angle(b))
        });
        for k in 1..ring.len().saturating_sub(1) {
            faces.push([ring[0], ring[k], ring[k + 1]]);
        }
    }
    flat(&centres, &faces)
}

/// Smooth UV sphere.
pub fn sphere(radius: f32, sectors: u32, stacks: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for i in 0..=stacks {
        let phi = PI * i as f32 / stacks as f32;
        for j in 0..=sectors {
            let theta = TAU * j as f32 / sectors as f32;
            let n = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            mesh.vertices.push(Vertex::new(n * radius, n));
        }
    }
    let row = sectors + 1;
    for i in 0..stacks {
        for j in 0..sectors {
            let a = i * row + j;
            let b = a + row;
            mesh.indices
                .extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    mesh
}

/// Ring torus around the z axis.
pub fn torus(radius: f32, tube: f32, radial: u32, tubular: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial {
        let v = TAU * j as f32 / radial as f32;
        for i in 0..=tubular {
            let u = TAU * i as f32 / tubular as f32;
            let ring = Vec3::new(u.cos(), u.sin(), 0.0) * radius;
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            mesh.vertices.push(Vertex::new(p, p - ring));
        }
    }
    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Square in the xz plane facing +y.
pub fn ground_quad(size: f32) -> MeshData {
    let h = size / 2.0;
    let vertices = [(-h, -h), (h, -h), (h, h), (-h, h)]
        .iter()
        .map(|&(x, z)| Vertex::new(Vec3::new(x, 0.0, z), Vec3::Y))
        .collect();
    MeshData {
        vertices,
        indices: vec![0, 2, 1, 0, 3, 2],
    }
}

/// Plane-local vertices of the wavy plane displaced by `heights`, with
/// normals from central differences.
pub fn wave_vertices(plane: &WavyPlane, heights: &[f32]) -> Vec<Vertex> {
    let stride = plane.stride();
    let seg = plane.segments.max(1) as f32;
    let dx = plane.width / seg;
    let dy = plane.height / seg;
    let h = |row: usize, col: usize| heights.get(row * stride + col).copied().unwrap_or(0.0);
    (0..plane.vertex_count())
        .map(|i| {
            let (row, col) = (i / stride, i % stride);
            let (x, y) = plane.vertex_xy(i);
            let left = h(row, col.saturating_sub(1));
            let right = h(row, (col + 1).min(stride - 1));
            // rows run from +y to -y
            let up = h(row.saturating_sub(1), col);
            let down = h((row + 1).min(stride - 1), col);
            let n = Vec3::new(-(right - left) / (2.0 * dx), -(up - down) / (2.0 * dy), 1.0);
            Vertex::new(Vec3::new(x, y, h(row, col)), n)
        })
        .collect()
}
