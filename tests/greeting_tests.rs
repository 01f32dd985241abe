// Host-side tests for the greeting text and its corner shapes.

use folio_core::greeting::{CornerShape, Greeting, GREETINGS};
use folio_core::{Ray, Scene};
use glam::{Vec2, Vec3};

const FRAME: f32 = 1.0 / 60.0;

fn settle(g: &mut Greeting, pointer: Option<Vec2>, frames: usize) -> folio_core::GreetingVisual {
    let mut v = g.update(FRAME, pointer);
    for _ in 1..frames {
        v = g.update(FRAME, pointer);
    }
    v
}

#[test]
fn greetings_hang_where_expected() {
    assert_eq!(GREETINGS.len(), 2);
    let first = GREETINGS[0];
    assert_eq!(first.anchor, Vec3::new(-2.0, 6.0, -10.0));
    assert_eq!(first.hot_spot(), Vec2::new(-2.0, 4.5));
    let expected = first.text.chars().count() as f32 * 1.44 / 2.5;
    assert!((first.half_width() - expected).abs() < 1e-5);
    assert_eq!(first.half_height(), 1.0);
}

#[test]
fn corners_start_on_the_text_bounds() {
    let spec = GREETINGS[0];
    let mut g = Greeting::new(spec);
    let v = g.update(0.0, None);
    for corner in v.corners {
        let side = corner.shape.side();
        let expected = spec.anchor + Vec3::new(side.x * spec.half_width(), side.y, 0.0);
        assert!((corner.position - expected).length() < 1e-5);
    }
    assert_eq!(v.corners[0].scale, 0.7);
    assert!(v.corners[1..].iter().all(|c| c.scale == 0.5));
}

#[test]
fn push_only_inside_the_repel_radius() {
    let spec = GREETINGS[0];
    assert!(spec.push(spec.hot_spot() + Vec2::new(2.9, 0.0)).is_some());
    assert_eq!(spec.push(spec.hot_spot() + Vec2::new(3.1, 0.0)), None);
    assert_eq!(spec.push(spec.hot_spot() + Vec2::new(0.0, -3.0)), None);

    let offset = spec.push(spec.hot_spot()).unwrap();
    assert!((offset - Vec2::new(0.0, -1.2)).length() < 1e-5);
}

#[test]
fn text_moves_away_from_a_near_pointer() {
    let spec = GREETINGS[0];
    let mut g = Greeting::new(spec);
    let v = settle(&mut g, Some(spec.hot_spot()), 600);
    assert!(g.is_near());
    assert!(v.near);
    // pointer sits below the text, so the text rises
    assert!((v.position - Vec3::new(-2.0, 7.2, -10.0)).length() < 1e-3);
    assert_eq!(v.tilt, spec.tilt);
}

#[test]
fn pointer_just_outside_leaves_text_at_rest() {
    let spec = GREETINGS[1];
    let mut g = Greeting::new(spec);
    let v = settle(&mut g, Some(spec.hot_spot() + Vec2::new(3.1, 0.0)), 120);
    assert!(!g.is_near());
    assert_eq!(v.position, spec.anchor);
    assert_eq!(g.spin(), Vec3::ZERO);
}

#[test]
fn corners_fan_out_and_spin_while_near() {
    let spec = GREETINGS[0];
    let pointer = spec.hot_spot();
    let offset = spec.push(pointer).unwrap();
    let mut g = Greeting::new(spec);
    let v = settle(&mut g, Some(pointer), 600);
    for corner in v.corners {
        let target = spec.corner_near(corner.shape, offset);
        assert!((corner.position - target).length() < 1e-2, "{:?}", corner.shape);
        assert_eq!(corner.position.z.round(), -2.0);
    }
    let spin = g.spin();
    assert!((spin - Vec3::new(0.6, 0.45, 0.3) * 10.0).length() < 1e-2);
    assert!(v.corners.iter().all(|c| c.rotation.x > 5.0));
}

#[test]
fn corners_return_to_rest_and_keep_their_spin() {
    let spec = GREETINGS[0];
    let mut g = Greeting::new(spec);
    settle(&mut g, Some(spec.hot_spot()), 60);
    let spin = g.spin();
    assert!(spin.x > 0.0);

    let v = settle(&mut g, None, 900);
    assert!(!v.near);
    assert_eq!(g.spin(), spin);
    assert!((v.position - spec.anchor).length() < 1e-3);
    for corner in v.corners {
        let rest = spec.corner_rest(corner.shape);
        assert!((corner.position - rest).length() < 1e-3, "{:?}", corner.shape);
        assert!((corner.rotation - spin).length() < 1e-3);
    }
    assert_eq!(spec.corner_rest(CornerShape::Dodecahedron).z, -8.0);
}

#[test]
fn bad_frame_times_freeze_the_greeting() {
    let spec = GREETINGS[0];
    let mut g = Greeting::new(spec);
    let before = g.update(0.0, Some(spec.hot_spot()));
    let after = g.update(f32::NAN, Some(spec.hot_spot()));
    assert_eq!(before.position, after.position);
    assert_eq!(g.spin(), Vec3::ZERO);
}

#[test]
fn scene_feeds_the_pointer_to_the_greetings() {
    let mut scene = Scene::default();
    let hot = GREETINGS[0].hot_spot();
    scene.pointer_move(&Ray::new(Vec3::new(hot.x, hot.y, 10.0), Vec3::NEG_Z));
    assert_eq!(scene.pointer_plane(), Some(hot));

    let snap = scene.update(FRAME);
    assert_eq!(snap.greetings.len(), 2);
    assert!(snap.greetings[0].near);
    assert!(!snap.greetings[1].near);

    scene.pointer_leave();
    assert_eq!(scene.pointer_plane(), None);
    let snap = scene.update(FRAME);
    assert!(snap.greetings.iter().all(|g| !g.near));
}
