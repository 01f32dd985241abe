//! The whole interactive scene as one value.
//!
//! The host feeds it world-space pointer rays and frame times; it hands
//! back a [`FrameSnapshot`] describing everything to draw.

use crate::background::Background;
use crate::camera::{CameraChoreographer, CameraConfig, CameraPose};
use crate::constants::{
    DRAG_PICK_RADIUS, GREETING_POINTER_Z, MAX_FRAME_DT, SPOTLIGHT_HEIGHT, SPOTLIGHT_TARGET_Z, SPOTLIGHT_Z,
    TARGET_PICK_RADIUS,
};
use crate::drag::{DragProxy, DragVisual, DRAGGABLE_SPAWNS};
use crate::greeting::{Greeting, GreetingVisual, GREETINGS};
use crate::hoverable::{TargetProxy, TargetVisual};
use crate::panel::{InfoPanel, PanelView};
use crate::physics::{PhysicsConfig, PhysicsWorld};
use crate::pick::Ray;
use crate::registry::TargetRegistry;
use crate::selection::SelectionState;
use crate::target::TargetId;
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub physics: PhysicsConfig,
}

/// Light cone over the selected target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    pub position: Vec3,
    pub target: Vec3,
}

impl Spotlight {
    pub fn over(anchor: Vec3) -> Self {
        Self {
            position: Vec3::new(anchor.x, SPOTLIGHT_HEIGHT, SPOTLIGHT_Z),
            target: Vec3::new(anchor.x, 0.0, SPOTLIGHT_TARGET_Z),
        }
    }
}

/// Nearest interactive object under a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
    Target(TargetId, f32),
    Draggable(usize, f32),
}

impl Hit {
    pub fn distance(&self) -> f32 {
        match *self {
            Hit::Target(_, t) | Hit::Draggable(_, t) => t,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub elapsed: f32,
    pub camera: CameraPose,
    pub targets: Vec<TargetVisual>,
    pub draggables: Vec<DragVisual>,
    pub greetings: Vec<GreetingVisual>,
    /// Cube transforms, one list per flock.
    pub flocks: Vec<Vec<Mat4>>,
    pub wave_heights: Vec<f32>,
    pub panel: PanelView,
    pub spotlight: Option<Spotlight>,
}

pub struct Scene {
    registry: TargetRegistry,
    selection: SelectionState,
    camera: CameraChoreographer,
    targets: Vec<TargetProxy>,
    drags: Vec<DragProxy>,
    greetings: Vec<Greeting>,
    physics: PhysicsWorld,
    background: Background,
    panel: InfoPanel,
    elapsed: f32,
    hovered: Option<TargetId>,
    active_drag: Option<usize>,
    /// Pointer on the greeting plane; `None` while it is off the canvas.
    pointer_plane: Option<Vec2>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let registry = TargetRegistry::new();
        let camera = CameraChoreographer::new(config.camera, &registry);
        let targets = registry.iter().copied().map(TargetProxy::new).collect();
        let mut physics = PhysicsWorld::new(config.physics);
        let drags = DRAGGABLE_SPAWNS
            .iter()
            .map(|spawn| {
                let mut proxy = DragProxy::new(*spawn);
                proxy.attach(physics.spawn(spawn));
                proxy
            })
            .collect();
        Self {
            registry,
            selection: SelectionState::new(),
            camera,
            targets,
            drags,
            greetings: GREETINGS.iter().copied().map(Greeting::new).collect(),
            physics,
            background: Background::default(),
            panel: InfoPanel::new(),
            elapsed: 0.0,
            hovered: None,
            active_drag: None,
            pointer_plane: None,
        }
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected(&self) -> Option<TargetId> {
        self.selection.selected()
    }

    pub fn camera(&self) -> &CameraChoreographer {
        &self.camera
    }

    pub fn camera_pose(&self) -> CameraPose {
        self.camera.pose()
    }

    pub fn targets(&self) -> &[TargetProxy] {
        &self.targets
    }

    pub fn target(&self, id: TargetId) -> Option<&TargetProxy> {
        self.targets.iter().find(|t| t.id() == id)
    }

    pub fn draggables(&self) -> &[DragProxy] {
        &self.drags
    }

    pub fn greetings(&self) -> &[Greeting] {
        &self.greetings
    }

    pub fn pointer_plane(&self) -> Option<Vec2> {
        self.pointer_plane
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn panel(&self) -> &InfoPanel {
        &self.panel
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn hovered(&self) -> Option<TargetId> {
        self.hovered
    }

    /// Index of the draggable currently held, if any.
    pub fn active_drag(&self) -> Option<usize> {
        self.active_drag
    }

    /// World-space centre of draggable `index`, if its body exists.
    pub fn draggable_position(&self, index: usize) -> Option<Vec3> {
        self.drags.get(index)?.position(&self.physics)
    }

    /// Toggle-select a target (same as clicking it).
    pub fn select(&mut self, id: TargetId) {
        self.selection.select(id);
    }

    /// Non-toggling select, as used by the panel tabs and number keys.
    pub fn focus_tab(&mut self, id: TargetId) {
        self.panel.tab_clicked(id, &mut self.selection);
    }

    pub fn close_panel(&mut self) {
        self.panel.request_close();
    }

    /// Nearest target or draggable under `ray`.
    pub fn pick(&self, ray: &Ray) -> Option<Hit> {
        let targets = self.targets.iter().filter_map(|proxy| {
            ray.sphere(proxy.pick_center(), TARGET_PICK_RADIUS * proxy.scale())
                .map(|t| Hit::Target(proxy.id(), t))
        });
        let drags = self.drags.iter().enumerate().filter_map(|(i, proxy)| {
            let center = proxy.position(&self.physics)?;
            ray.sphere(center, DRAG_PICK_RADIUS * proxy.scale())
                .map(|t| Hit::Draggable(i, t))
        });
        targets
            .chain(drags)
            .min_by(|a, b| a.distance().total_cmp(&b.distance()))
    }

    pub fn pointer_move(&mut self, ray: &Ray) {
        self.pointer_plane = ray.plane_z(GREETING_POINTER_Z).map(|p| p.truncate());
        if let Some(i) = self.active_drag {
            let proxy = &mut self.drags[i];
            let still_over = proxy
                .position(&self.physics)
                .and_then(|c| ray.sphere(c, DRAG_PICK_RADIUS * proxy.scale()))
                .is_some();
            if still_over {
                if let Some(point) = ray.plane_z(proxy.home_z()) {
                    proxy.on_pointer_move(point, &mut self.physics);
                }
                return;
            }
            // slipped off the body: same as the pointer leaving it
            proxy.on_pointer_leave(&mut self.physics);
            self.active_drag = None;
        }
        let next = match self.pick(ray) {
            Some(Hit::Target(id, _)) => Some(id),
            _ => None,
        };
        self.set_hovered(next);
    }

    /// Grab the draggable under `ray`. Returns whether a drag started.
    pub fn pointer_down(&mut self, ray: &Ray) -> bool {
        let Some(Hit::Draggable(i, t)) = self.pick(ray) else {
            return false;
        };
        let proxy = &mut self.drags[i];
        let point = ray.plane_z(proxy.home_z()).unwrap_or_else(|| ray.at(t));
        if proxy.on_pointer_down(point, &mut self.physics) {
            self.active_drag = Some(i);
            true
        } else {
            false
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(i) = self.active_drag.take() {
            self.drags[i].on_pointer_up(&mut self.physics);
        }
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        if let Some(i) = self.active_drag.take() {
            self.drags[i].on_pointer_leave(&mut self.physics);
        }
        self.pointer_plane = None;
        self.set_hovered(None);
    }

    /// Select (toggle) the target under `ray`. Returns the target clicked.
    pub fn click(&mut self, ray: &Ray) -> Option<TargetId> {
        let Some(Hit::Target(id, _)) = self.pick(ray) else {
            return None;
        };
        let proxy = self.targets.iter().find(|t| t.id() == id)?;
        proxy.click(&mut self.selection);
        Some(id)
    }

    fn set_hovered(&mut self, next: Option<TargetId>) {
        if next == self.hovered {
            return;
        }
        for proxy in &mut self.targets {
            if Some(proxy.id()) == next {
                proxy.pointer_enter();
            } else {
                proxy.pointer_leave();
            }
        }
        self.hovered = next;
    }

    /// Advance everything by `dt` seconds and describe the frame.
    pub fn update(&mut self, dt: f32) -> FrameSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.elapsed += dt;

        let panel = self.panel.update(dt, &mut self.selection);
        self.physics.advance(dt);
        let draggables = self
            .drags
            .iter_mut()
            .filter_map(|d| d.update(dt, &mut self.physics))
            .collect();
        let selected = self.selection.selected();
        let elapsed = self.elapsed;
        let targets = self
            .targets
            .iter_mut()
            .map(|t| t.update(dt, elapsed, selected))
            .collect();
        let pointer = self.pointer_plane;
        let greetings = self
            .greetings
            .iter_mut()
            .map(|g| g.update(dt, pointer))
            .collect();
        let camera = self.camera.update(dt, selected, &self.registry);
        let spotlight = selected.map(|id| Spotlight::over(self.registry.entry(id).anchor));

        FrameSnapshot {
            elapsed,
            camera,
            targets,
            draggables,
            greetings,
            flocks: self.background.sample_flocks(elapsed),
            wave_heights: self.background.sample_wave(elapsed),
            panel,
            spotlight,
        }
    }
}
