// Host-side tests for per-frame instance batching.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod instances {
    include!("../src/render/instances.rs");
}

use folio_core::drag::DragShape;
use folio_core::greeting::CornerShape;
use folio_core::{Scene, TargetId};
use glam::{Mat4, Vec3};
use instances::*;

fn flock_colors(scene: &Scene) -> Vec<[f32; 3]> {
    scene.background().flocks().iter().map(|f| f.color).collect()
}

fn batch(batches: &[DrawBatch], mesh: MeshKind) -> &DrawBatch {
    batches.iter().find(|b| b.mesh == mesh).unwrap()
}

#[test]
fn each_target_has_its_own_mesh() {
    let kinds: Vec<_> = TargetId::ALL.iter().map(|id| MeshKind::for_target(*id)).collect();
    assert_eq!(
        kinds,
        vec![MeshKind::Icosahedron, MeshKind::Octahedron, MeshKind::Sphere]
    );
    assert_eq!(MeshKind::for_drag(DragShape::Box), MeshKind::Cube);
    assert_eq!(MeshKind::for_drag(DragShape::Torus), MeshKind::Torus);
    assert_eq!(MeshKind::for_corner(CornerShape::Cube), MeshKind::Cube);
    assert_eq!(MeshKind::for_corner(CornerShape::Dodecahedron), MeshKind::Dodecahedron);
}

#[test]
fn batches_cover_the_whole_snapshot() {
    let mut scene = Scene::default();
    let snap = scene.update(1.0 / 60.0);
    let batches = build_batches(&snap, &flock_colors(&scene));

    assert_eq!(batch(&batches, MeshKind::Ground).instances.len(), 1);
    assert_eq!(batch(&batches, MeshKind::Icosahedron).instances.len(), 1);
    // the Projects target plus one corner per greeting
    assert_eq!(batch(&batches, MeshKind::Octahedron).instances.len(), 3);
    assert_eq!(batch(&batches, MeshKind::Sphere).instances.len(), 1);
    assert_eq!(batch(&batches, MeshKind::Torus).instances.len(), 2);
    assert_eq!(batch(&batches, MeshKind::Tetrahedron).instances.len(), 2);
    assert_eq!(batch(&batches, MeshKind::Dodecahedron).instances.len(), 2);
    // two draggable boxes, two greeting cubes, then every flock cube
    assert_eq!(batch(&batches, MeshKind::Cube).instances.len(), 2 + 2 + 200);

    let total: usize = batches.iter().map(|b| b.instances.len()).sum();
    assert!(total <= constants::MAX_INSTANCES);
    // one batch per mesh
    assert_eq!(batches.len(), MeshKind::ALL.len());
}

#[test]
fn flock_cubes_are_unlit_and_scene_objects_lit() {
    let mut scene = Scene::default();
    let snap = scene.update(1.0 / 60.0);
    let batches = build_batches(&snap, &flock_colors(&scene));
    let cubes = &batch(&batches, MeshKind::Cube).instances;
    assert!(cubes[..2].iter().all(|i| i.params[1] == 0.0));
    assert!(cubes[2..].iter().all(|i| i.params[1] == 1.0));
    assert!(cubes[2..4].iter().all(|i| i.params[2] == 1.0));
    assert!(cubes[4..].iter().all(|i| i.params[2] == 0.0));
    assert_eq!(cubes[4].color[..3], flock_colors(&scene)[0]);
}

#[test]
fn target_instance_carries_position_and_emissive() {
    let mut scene = Scene::default();
    let snap = scene.update(1.0 / 60.0);
    let batches = build_batches(&snap, &flock_colors(&scene));
    let about = &snap.targets[TargetId::About.index()];
    let inst = batch(&batches, MeshKind::Icosahedron).instances[0];
    let model = Mat4::from_cols_array_2d(&inst.model);
    assert!((model.w_axis.truncate() - about.position).length() < 1e-5);
    assert_eq!(inst.params[0], about.emissive);
    assert_eq!(inst.color[..3], about.color);
}

#[test]
fn ground_instance_sits_at_ground_height() {
    let mut scene = Scene::default();
    let snap = scene.update(1.0 / 60.0);
    let batches = build_batches(&snap, &[]);
    let ground = Mat4::from_cols_array_2d(&batch(&batches, MeshKind::Ground).instances[0].model);
    assert_eq!(
        ground.w_axis.truncate(),
        Vec3::new(0.0, folio_core::constants::GROUND_Y, 0.0)
    );
}

#[test]
fn missing_flock_colours_skip_flocks() {
    let mut scene = Scene::default();
    let snap = scene.update(1.0 / 60.0);
    let batches = build_batches(&snap, &[]);
    assert_eq!(batch(&batches, MeshKind::Cube).instances.len(), 4);
}

#[test]
fn draggable_instance_uses_the_simulated_orientation() {
    let mut scene = Scene::default();
    let snap = scene.update(1.0 / 60.0);
    let batches = build_batches(&snap, &[]);
    let body = snap.draggables[0];
    let model = Mat4::from_cols_array_2d(&batch(&batches, MeshKind::Cube).instances[0].model);
    let (scale, rotation, translation) = model.to_scale_rotation_translation();
    assert!((scale - Vec3::splat(body.scale)).length() < 1e-4);
    assert!(rotation.dot(body.rotation).abs() > 0.9999);
    assert!((translation - body.position).length() < 1e-4);
}

#[test]
fn greeting_corners_are_normal_shaded_at_their_own_size() {
    let mut scene = Scene::default();
    let snap = scene.update(1.0 / 60.0);
    let batches = build_batches(&snap, &[]);
    let corner = snap.greetings[0].corners[2];
    assert_eq!(corner.shape, CornerShape::Octahedron);
    // index 0 is the Projects target
    let inst = batch(&batches, MeshKind::Octahedron).instances[1];
    assert_eq!(inst.params, [0.0, 1.0, 1.0, 0.0]);
    let (scale, _, translation) = Mat4::from_cols_array_2d(&inst.model).to_scale_rotation_translation();
    assert!((scale.x - 0.5 / constants::TARGET_MESH_RADIUS).abs() < 1e-4);
    assert!((translation - corner.position).length() < 1e-4);
}

#[test]
fn instance_layout_matches_shader_locations() {
    // model (4 x vec4) + color + params
    assert_eq!(std::mem::size_of::<InstanceRaw>(), 6 * 16);
    let lit = InstanceRaw::lit(Mat4::IDENTITY, [0.1, 0.2, 0.3], 0.5);
    assert_eq!(lit.color, [0.1, 0.2, 0.3, 1.0]);
    assert_eq!(lit.params, [0.5, 0.0, 0.0, 0.0]);
    assert_eq!(InstanceRaw::unlit(Mat4::IDENTITY, [1.0; 3]).params[1], 1.0);
    assert_eq!(InstanceRaw::normal_shaded(Mat4::IDENTITY).params[2], 1.0);
}
