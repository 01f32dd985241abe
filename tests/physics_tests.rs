// Host-side tests for the fixed-step rigid-body world.

use folio_core::constants::GROUND_Y;
use folio_core::drag::{DragShape, DRAGGABLE_SPAWNS};
use folio_core::{BodyControl, BodyHandle, PhysicsConfig, PhysicsWorld, Scene};
use glam::{Quat, Vec3};

/// Lowest y of a unit cube drawn at `position` with `rotation` and `scale`.
fn lowest_cube_corner(position: Vec3, rotation: Quat, scale: f32) -> f32 {
    let mut lowest = f32::INFINITY;
    for x in [-0.5, 0.5] {
        for y in [-0.5, 0.5] {
            for z in [-0.5, 0.5] {
                let corner = position + rotation * (Vec3::new(x, y, z) * scale);
                lowest = lowest.min(corner.y);
            }
        }
    }
    lowest
}

#[test]
fn new_world_has_no_draggable_bodies() {
    let world = PhysicsWorld::default();
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.steps(), 0);
    assert_eq!(world.translation(BodyHandle(0)), None);
}

#[test]
fn spawn_places_body_at_spawn_point() {
    let mut world = PhysicsWorld::default();
    for spawn in DRAGGABLE_SPAWNS.iter() {
        let h = world.spawn(spawn);
        assert_eq!(world.translation(h), Some(spawn.position));
        assert_eq!(world.gravity_scale(h), Some(1.0));
    }
    assert_eq!(world.body_count(), 4);
}

#[test]
fn spawn_uses_the_spawn_orientation() {
    let mut world = PhysicsWorld::default();
    for spawn in DRAGGABLE_SPAWNS.iter() {
        let h = world.spawn(spawn);
        let got = world.rotation(h).unwrap();
        assert!(got.dot(spawn.orientation()).abs() > 0.9999, "{:?}", spawn);
    }
}

#[test]
fn resting_boxes_are_drawn_above_the_ground() {
    for spawn in DRAGGABLE_SPAWNS.iter().filter(|s| s.shape == DragShape::Box) {
        let mut world = PhysicsWorld::default();
        let h = world.spawn(spawn);
        for _ in 0..900 {
            world.step();
        }
        let p = world.translation(h).unwrap();
        let lowest = lowest_cube_corner(p, world.rotation(h).unwrap(), 1.0);
        assert!(lowest >= GROUND_Y - 0.02, "lowest corner {} below ground", lowest);
        // settled flat on a face
        assert!((p.y - -0.3).abs() < 0.05);
    }
}

#[test]
fn scene_boxes_never_sink_into_the_ground() {
    let mut scene = Scene::default();
    let mut snap = scene.update(1.0 / 60.0);
    for _ in 0..600 {
        snap = scene.update(1.0 / 60.0);
    }
    for d in snap.draggables.iter().filter(|d| d.shape == DragShape::Box) {
        let lowest = lowest_cube_corner(d.position, d.rotation, d.scale);
        assert!(lowest >= GROUND_Y - 0.02, "box drawn {} below ground", GROUND_Y - lowest);
    }
}

#[test]
fn bodies_fall_and_come_to_rest_on_the_ground() {
    // one world per body so nothing stacks
    for spawn in DRAGGABLE_SPAWNS.iter() {
        let mut world = PhysicsWorld::default();
        let h = world.spawn(spawn);
        for _ in 0..900 {
            world.step();
        }
        // ground top at -0.8, bodies half a unit tall
        let p = world.translation(h).unwrap();
        assert!((p.y - -0.3).abs() < 0.05, "{:?} resting at {}", spawn.shape, p.y);
        assert!(world.linear_speed(h).unwrap() < 0.5);
    }
}

#[test]
fn falling_body_gains_speed() {
    let mut world = PhysicsWorld::default();
    let h = world.spawn(&DRAGGABLE_SPAWNS[3]);
    for _ in 0..10 {
        world.step();
    }
    assert!(world.linear_speed(h).unwrap() > 1.0);
    assert!(world.translation(h).unwrap().y < DRAGGABLE_SPAWNS[3].position.y);
}

#[test]
fn advance_runs_whole_fixed_steps() {
    let mut world = PhysicsWorld::default();
    assert_eq!(world.advance(0.001), 0);
    assert_eq!(world.advance(0.04), 2);
    assert_eq!(world.steps(), 2);
}

#[test]
fn advance_caps_catch_up_steps() {
    let mut world = PhysicsWorld::default();
    let cap = world.config().max_steps_per_frame;
    assert_eq!(world.advance(5.0), cap);
    // the backlog was dropped, so a normal frame runs at most one step
    assert!(world.advance(1.0 / 60.0) <= 2);
}

#[test]
fn advance_ignores_bad_frame_times() {
    let mut world = PhysicsWorld::default();
    assert_eq!(world.advance(0.0), 0);
    assert_eq!(world.advance(-1.0), 0);
    assert_eq!(world.advance(f32::NAN), 0);
    assert_eq!(world.steps(), 0);
}

#[test]
fn zero_gravity_scale_holds_a_body_in_place() {
    let mut world = PhysicsWorld::default();
    let h = world.spawn(&DRAGGABLE_SPAWNS[0]);
    world.set_gravity_scale(h, 0.0);
    world.set_translation(h, Vec3::new(-9.0, 5.0, -5.0));
    world.zero_linvel(h);
    for _ in 0..60 {
        world.step();
    }
    let p = world.translation(h).unwrap();
    assert!((p - Vec3::new(-9.0, 5.0, -5.0)).length() < 1e-4);
}

#[test]
fn removed_body_ignores_control_calls() {
    let mut world = PhysicsWorld::default();
    let h = world.spawn(&DRAGGABLE_SPAWNS[1]);
    world.remove(h);
    world.set_translation(h, Vec3::ONE);
    world.zero_linvel(h);
    world.zero_angvel(h);
    world.set_gravity_scale(h, 0.0);
    assert_eq!(world.translation(h), None);
    assert_eq!(world.rotation(h), None);
    assert_eq!(world.gravity_scale(h), None);
    assert_eq!(world.linear_speed(h), None);
    assert_eq!(world.angular_speed(h), None);
    // removing twice is harmless
    world.remove(h);
}

#[test]
fn custom_ground_height_is_respected() {
    let mut world = PhysicsWorld::new(PhysicsConfig {
        ground_y: 1.0,
        ..PhysicsConfig::default()
    });
    let h = world.spawn(&DRAGGABLE_SPAWNS[3]);
    for _ in 0..900 {
        world.step();
    }
    assert!((world.translation(h).unwrap().y - 1.5).abs() < 0.05);
}
