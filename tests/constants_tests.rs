// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants as shared;

#[test]
#[allow(clippy::assertions_on_constants)]
fn fog_range_is_ordered() {
    assert!(FOG_NEAR > 0.0);
    assert!(FOG_FAR > FOG_NEAR);
    // the fly-in starts inside the clear zone
    assert!(shared::INTRO_CAMERA_POSITION.length() < FOG_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_constants_are_sane() {
    assert!(AMBIENT_INTENSITY > 0.0 && AMBIENT_INTENSITY <= 1.0);
    assert!(SUN_INTENSITY > 0.0);
    assert!(SPOT_INTENSITY > 0.0);
    assert!(SPOT_ANGLE > 0.0 && SPOT_ANGLE < std::f32::consts::FRAC_PI_2);
    assert!((0.0..=1.0).contains(&SPOT_PENUMBRA));
    assert!(SPOT_DISTANCE > shared::SPOTLIGHT_HEIGHT);
}

#[test]
fn colours_are_normalized() {
    for c in BACKGROUND_RGB.iter().chain(GROUND_RGB.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ground_covers_the_physics_floor() {
    assert!(GROUND_SIZE / 2.0 >= shared::GROUND_HALF_EXTENT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn instance_capacity_fits_a_frame() {
    // ground + 3 targets + 4 draggables + 200 flock cubes
    assert!(MAX_INSTANCES >= 1 + 3 + 4 + 200);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pick_radius_covers_the_drawn_target() {
    assert!(shared::TARGET_PICK_RADIUS >= TARGET_MESH_RADIUS);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, PANEL_ID, PANEL_CONTENT_ID, PANEL_CLOSE_ID, HINT_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(VIEWPORT_SCALE_VAR.starts_with("--"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn post_settings_stay_subtle() {
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD < 1.0);
    assert!(BLOOM_SMOOTHING > 0.0);
    assert!(BLOOM_INTENSITY > 0.0 && BLOOM_INTENSITY <= 1.0);
    assert!(VIGNETTE_OFFSET > 0.0 && VIGNETTE_OFFSET < 1.0);
    assert!(VIGNETTE_DARKNESS > 0.0 && VIGNETTE_DARKNESS < 1.0);
}

#[test]
fn post_shader_exposes_every_pass() {
    for entry in ["fn vs_fullscreen", "fn fs_bright", "fn fs_blur", "fn fs_composite"] {
        assert!(folio_core::POST_WGSL.contains(entry), "{entry}");
    }
}
