//! Static placement of the selectable targets and the camera poses that
//! frame them.

use crate::camera::CameraPose;
use crate::constants::{
    HOME_CAMERA_POSITION, HOME_LOOK_AT, INTRO_CAMERA_POSITION, TARGET_LABEL_HEIGHT,
};
use crate::target::TargetId;
use glam::Vec3;

/// Where a target sits and how the camera frames it when selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetEntry {
    pub id: TargetId,
    pub anchor: Vec3,
    pub camera_position: Vec3,
    pub look_at: Vec3,
    pub color: [f32; 3],
}

impl TargetEntry {
    pub fn camera_pose(&self) -> CameraPose {
        CameraPose {
            position: self.camera_position,
            look_at: self.look_at,
        }
    }

    pub fn label_anchor(&self) -> Vec3 {
        self.anchor + Vec3::new(0.0, TARGET_LABEL_HEIGHT, 0.0)
    }
}

const ENTRIES: [TargetEntry; 3] = [
    TargetEntry {
        id: TargetId::About,
        anchor: Vec3::new(-3.0, 0.2, 0.0),
        camera_position: Vec3::new(-3.0, 1.0, 8.0),
        look_at: Vec3::new(0.0, 0.2, 0.0),
        color: [0.25, 0.45, 0.95], // blue
    },
    TargetEntry {
        id: TargetId::Projects,
        anchor: Vec3::new(0.0, 0.4, 0.0),
        camera_position: Vec3::new(0.0, 1.0, 8.0),
        look_at: Vec3::new(3.0, 0.4, 0.0),
        color: [0.25, 0.8, 0.35], // green
    },
    TargetEntry {
        id: TargetId::Contact,
        anchor: Vec3::new(3.0, 0.3, 0.0),
        camera_position: Vec3::new(3.0, 1.0, 8.0),
        look_at: Vec3::new(6.0, 0.3, 0.0),
        color: [0.9, 0.3, 0.3], // red
    },
];

/// Immutable lookup from [`TargetId`] to its placement.
#[derive(Clone, Debug)]
pub struct TargetRegistry {
    entries: [TargetEntry; 3],
    home: CameraPose,
    intro: CameraPose,
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self {
            entries: ENTRIES,
            home: CameraPose {
                position: HOME_CAMERA_POSITION,
                look_at: HOME_LOOK_AT,
            },
            intro: CameraPose {
                position: INTRO_CAMERA_POSITION,
                look_at: HOME_LOOK_AT,
            },
        }
    }

    pub fn entry(&self, id: TargetId) -> &TargetEntry {
        // ENTRIES is laid out in TargetId::ALL order
        &self.entries[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetEntry> {
        self.entries.iter()
    }

    /// Pose when nothing is selected.
    pub fn home_pose(&self) -> CameraPose {
        self.home
    }

    /// Pose the camera starts from when the scene mounts.
    pub fn intro_pose(&self) -> CameraPose {
        self.intro
    }

    /// Camera pose implied by a selection.
    pub fn pose_for(&self, selected: Option<TargetId>) -> CameraPose {
        match selected {
            Some(id) => self.entry(id).camera_pose(),
            None => self.home,
        }
    }
}
