// Host-side tests for the camera fly-to choreography.

use folio_core::{
    CameraChoreographer, CameraConfig, CameraMode, CameraPose, Retarget, TargetId,
    TargetRegistry,
};

const FRAME: f32 = 1.0 / 60.0;

fn no_intro(retarget: Retarget) -> CameraConfig {
    CameraConfig {
        retarget,
        intro: false,
        ..CameraConfig::default()
    }
}

fn settle(cam: &mut CameraChoreographer, selected: Option<TargetId>, reg: &TargetRegistry) {
    for _ in 0..600 {
        cam.update(FRAME, selected, reg);
    }
}

fn close(a: CameraPose, b: CameraPose) -> bool {
    a.position.distance(b.position) < 1e-3 && a.look_at.distance(b.look_at) < 1e-3
}

#[test]
fn intro_starts_high_and_flies_home() {
    let reg = TargetRegistry::new();
    let mut cam = CameraChoreographer::new(CameraConfig::default(), &reg);
    assert_eq!(cam.pose(), reg.intro_pose());
    assert_eq!(cam.goal(), reg.home_pose());
    assert_eq!(cam.mode(), CameraMode::Home);

    settle(&mut cam, None, &reg);
    assert!(cam.is_settled());
    assert_eq!(cam.pose(), reg.home_pose());
}

#[test]
fn without_intro_starts_at_home() {
    let reg = TargetRegistry::new();
    let cam = CameraChoreographer::new(no_intro(Retarget::Continuous), &reg);
    assert_eq!(cam.pose(), reg.home_pose());
    assert!(cam.is_settled());
}

#[test]
fn selecting_a_target_flies_to_its_pose() {
    let reg = TargetRegistry::new();
    let mut cam = CameraChoreographer::new(no_intro(Retarget::Continuous), &reg);
    cam.update(FRAME, Some(TargetId::Projects), &reg);
    assert_eq!(cam.mode(), CameraMode::Focused(TargetId::Projects));
    assert_eq!(cam.goal(), reg.entry(TargetId::Projects).camera_pose());

    settle(&mut cam, Some(TargetId::Projects), &reg);
    assert!(close(cam.pose(), reg.entry(TargetId::Projects).camera_pose()));

    settle(&mut cam, None, &reg);
    assert!(close(cam.pose(), reg.home_pose()));
}

#[test]
fn approach_gets_monotonically_closer() {
    let reg = TargetRegistry::new();
    let mut cam = CameraChoreographer::new(no_intro(Retarget::Continuous), &reg);
    let goal = reg.entry(TargetId::Contact).camera_pose().position;
    let mut prev = cam.pose().position.distance(goal);
    for _ in 0..300 {
        let d = cam.update(FRAME, Some(TargetId::Contact), &reg).position.distance(goal);
        assert!(d <= prev + 1e-4);
        prev = d;
    }
}

#[test]
fn continuous_reselect_mid_flight_has_no_jump() {
    let reg = TargetRegistry::new();
    let mut cam = CameraChoreographer::new(no_intro(Retarget::Continuous), &reg);
    for _ in 0..20 {
        cam.update(FRAME, Some(TargetId::About), &reg);
    }
    let before = cam.pose();
    let after = cam.update(FRAME, Some(TargetId::Contact), &reg);
    // one frame of motion, not a teleport
    assert!(before.position.distance(after.position) < 0.5);
    assert_eq!(cam.goal(), reg.entry(TargetId::Contact).camera_pose());
}

#[test]
fn from_nominal_restarts_at_previous_target_pose() {
    let reg = TargetRegistry::new();
    let mut cam = CameraChoreographer::new(no_intro(Retarget::FromNominal), &reg);
    for _ in 0..10 {
        cam.update(FRAME, Some(TargetId::About), &reg);
    }
    assert!(!close(cam.pose(), reg.entry(TargetId::About).camera_pose()));

    // a zero-length frame only applies the retarget
    let pose = cam.update(0.0, Some(TargetId::Projects), &reg);
    assert_eq!(pose, reg.entry(TargetId::About).camera_pose());
    assert_eq!(cam.goal(), reg.entry(TargetId::Projects).camera_pose());
}

#[test]
fn snap_to_jumps_without_transition() {
    let reg = TargetRegistry::new();
    let mut cam = CameraChoreographer::new(CameraConfig::default(), &reg);
    cam.snap_to(CameraMode::Focused(TargetId::About), &reg);
    assert_eq!(cam.pose(), reg.entry(TargetId::About).camera_pose());
    assert!(cam.is_settled());
    assert_eq!(cam.mode(), CameraMode::Focused(TargetId::About));
}

#[test]
fn camera_mode_mirrors_selection() {
    assert_eq!(CameraMode::from_selection(None), CameraMode::Home);
    assert_eq!(
        CameraMode::from_selection(Some(TargetId::Contact)).target(),
        Some(TargetId::Contact)
    );
}
