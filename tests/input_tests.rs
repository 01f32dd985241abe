// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use folio_core::{Lens, TargetRegistry};
use glam::{Vec2, Vec3};
use input::*;

fn rect(width: f32, height: f32) -> CanvasRect {
    CanvasRect {
        left: 10.0,
        top: 20.0,
        width,
        height,
    }
}

#[test]
fn client_coordinates_scale_to_backing_store() {
    // CSS box 400x300, backing store at devicePixelRatio 2
    let px = client_to_canvas_px(Vec2::new(210.0, 170.0), rect(400.0, 300.0), 800, 600);
    assert_eq!(px, Vec2::new(400.0, 300.0));
}

#[test]
fn empty_canvas_rect_maps_to_origin() {
    let px = client_to_canvas_px(Vec2::new(50.0, 50.0), rect(0.0, 300.0), 800, 600);
    assert_eq!(px, Vec2::ZERO);
}

#[test]
fn pixel_corners_map_to_ndc_corners() {
    assert_eq!(px_to_ndc(Vec2::ZERO, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(px_to_ndc(Vec2::new(800.0, 600.0), 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(px_to_ndc(Vec2::new(400.0, 300.0), 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn screen_center_ray_points_along_view() {
    let pose = TargetRegistry::new().home_pose();
    let lens = Lens::default().with_aspect(800.0, 600.0);
    let ray = screen_ray(Vec2::new(400.0, 300.0), 800.0, 600.0, &pose, &lens);
    assert!((ray.dir - pose.forward()).length() < 1e-3);
}

#[test]
fn left_of_center_ray_leans_left() {
    let pose = TargetRegistry::new().home_pose();
    let lens = Lens::default().with_aspect(800.0, 600.0);
    let ray = screen_ray(Vec2::new(100.0, 300.0), 800.0, 600.0, &pose, &lens);
    assert!(ray.dir.x < 0.0);
}

#[test]
fn look_at_point_projects_to_viewport_center() {
    let pose = TargetRegistry::new().home_pose();
    let lens = Lens::default().with_aspect(1280.0, 720.0);
    let css = project_to_css(pose.look_at, lens.view_proj(&pose), 1280.0, 720.0).unwrap();
    assert!((css - Vec2::new(640.0, 360.0)).length() < 1e-2);
}

#[test]
fn points_behind_camera_do_not_project() {
    let pose = TargetRegistry::new().home_pose();
    let lens = Lens::default();
    let behind = pose.position - pose.forward() * 5.0;
    assert_eq!(project_to_css(behind, lens.view_proj(&pose), 800.0, 600.0), None);
}

#[test]
fn higher_points_project_higher_on_screen() {
    let pose = TargetRegistry::new().home_pose();
    let vp = Lens::default().view_proj(&pose);
    let low = project_to_css(Vec3::new(0.0, 0.0, 0.0), vp, 800.0, 600.0).unwrap();
    let high = project_to_css(Vec3::new(0.0, 1.0, 0.0), vp, 800.0, 600.0).unwrap();
    assert!(high.y < low.y);
}

#[test]
fn farther_spans_look_shorter() {
    let pose = TargetRegistry::new().home_pose();
    let vp = Lens::default().view_proj(&pose);
    let near = projected_height(Vec3::new(0.0, 2.0, 0.0), 1.5, vp, 800.0, 600.0).unwrap();
    let far = projected_height(Vec3::new(0.0, 2.0, -10.0), 1.5, vp, 800.0, 600.0).unwrap();
    assert!(near > far);
    assert!(far > 0.0);
    let behind = pose.position - pose.forward() * 5.0;
    assert_eq!(projected_height(behind, 1.5, vp, 800.0, 600.0), None);
}

#[test]
fn css_rgb_formats_and_clamps() {
    assert_eq!(css_rgb([1.0, 1.0, 0.0]), "rgb(255, 255, 0)");
    assert_eq!(css_rgb([-1.0, 0.5, 2.0]), "rgb(0, 128, 255)");
}
