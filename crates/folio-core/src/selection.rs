//! Which target is currently opened, if any.
//!
//! This is the single source of truth read by the camera, the target
//! proxies and the info panel. Both entry points (clicking a target in the
//! scene, clicking a panel tab) write here.

use crate::target::TargetId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<TargetId>,
    revision: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle: selecting the current target clears, anything else replaces.
    pub fn select(&mut self, id: TargetId) {
        if self.selected == Some(id) {
            log::info!("[select] {} toggled off", id);
            self.set(None);
        } else {
            log::info!("[select] {}", id);
            self.set(Some(id));
        }
    }

    /// Select without toggling; an already selected target stays selected.
    pub fn focus(&mut self, id: TargetId) {
        self.set(Some(id));
    }

    pub fn clear(&mut self) {
        self.set(None);
    }

    pub fn selected(&self) -> Option<TargetId> {
        self.selected
    }

    pub fn is_selected(&self, id: TargetId) -> bool {
        self.selected == Some(id)
    }

    /// Bumped on every effective change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn set(&mut self, next: Option<TargetId>) {
        if self.selected != next {
            self.selected = next;
            self.revision += 1;
        }
    }
}
