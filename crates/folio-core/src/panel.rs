//! Tabbed info panel model.
//!
//! The panel has no selection of its own: it mirrors [`SelectionState`]
//! and writes back through it (tab clicks focus, closing clears).

use crate::constants::{PANEL_CLOSE_SECONDS, PANEL_REFERENCE_WIDTH};
use crate::selection::SelectionState;
use crate::target::TargetId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSection {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Static copy shown for one tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelContent {
    pub title: &'static str,
    pub sections: &'static [PanelSection],
}

const ABOUT_SECTIONS: &[PanelSection] = &[
    PanelSection {
        heading: "Hello there",
        body: "A short introduction goes here: who you are, what you study or work on, and what you enjoy building.",
    },
    PanelSection {
        heading: "How this page works",
        body: "The scene is rendered with WebGPU. The floating objects are driven by springs and the side objects by a rigid-body simulation, all compiled to WebAssembly.",
    },
];

const PROJECTS_SECTIONS: &[PanelSection] = &[
    PanelSection {
        heading: "Project one",
        body: "A full-stack web application. Describe the problem, the stack and your part in it.",
    },
    PanelSection {
        heading: "Project two",
        body: "A data visualisation tool. Mention the data source and what users can explore.",
    },
    PanelSection {
        heading: "Project three",
        body: "A small game or simulation. Note the engine, the team size and what you shipped.",
    },
];

const CONTACT_SECTIONS: &[PanelSection] = &[
    PanelSection {
        heading: "Get in touch",
        body: "Email: you@example.com",
    },
    PanelSection {
        heading: "Elsewhere",
        body: "Links to your code hosting and professional profiles go here.",
    },
];

impl PanelContent {
    pub fn for_target(id: TargetId) -> PanelContent {
        match id {
            TargetId::About => PanelContent {
                title: "About",
                sections: ABOUT_SECTIONS,
            },
            TargetId::Projects => PanelContent {
                title: "Projects",
                sections: PROJECTS_SECTIONS,
            },
            TargetId::Contact => PanelContent {
                title: "Contact",
                sections: CONTACT_SECTIONS,
            },
        }
    }
}

/// Scale factor for panel layout relative to a 1920 px wide window.
pub fn viewport_scale(inner_width: f32) -> f32 {
    if !inner_width.is_finite() || inner_width <= 0.0 {
        return 1.0;
    }
    inner_width / PANEL_REFERENCE_WIDTH
}

/// What the host needs to draw the panel this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub visible: bool,
    pub closing: bool,
    pub active_tab: Option<TargetId>,
    /// Bumps whenever the shown content should be re-rendered.
    pub revision: u64,
}

#[derive(Clone, Debug, Default)]
pub struct InfoPanel {
    visible: bool,
    active_tab: Option<TargetId>,
    closing_timer: Option<f32>,
    last_revision: u64,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_closing(&self) -> bool {
        self.closing_timer.is_some()
    }

    pub fn active_tab(&self) -> Option<TargetId> {
        self.active_tab
    }

    pub fn tabs() -> [TargetId; 3] {
        TargetId::ALL
    }

    pub fn content(&self) -> Option<PanelContent> {
        self.active_tab.map(PanelContent::for_target)
    }

    pub fn tab_clicked(&mut self, id: TargetId, selection: &mut SelectionState) {
        self.closing_timer = None;
        selection.focus(id);
        self.sync(selection);
    }

    /// Start the close animation; the selection is cleared when it ends.
    pub fn request_close(&mut self) {
        if self.visible && self.closing_timer.is_none() {
            log::info!("[panel] closing");
            self.closing_timer = Some(PANEL_CLOSE_SECONDS);
        }
    }

    /// Advance the close animation and follow the selection.
    pub fn update(&mut self, dt: f32, selection: &mut SelectionState) -> PanelView {
        // a selection made since the last frame cancels the close
        self.sync(selection);
        if let Some(remaining) = self.closing_timer.as_mut() {
            *remaining -= dt.max(0.0);
            if *remaining <= 0.0 {
                self.closing_timer = None;
                selection.clear();
                self.sync(selection);
            }
        }
        self.view()
    }

    pub fn view(&self) -> PanelView {
        PanelView {
            visible: self.visible,
            closing: self.is_closing(),
            active_tab: self.active_tab,
            revision: self.last_revision,
        }
    }

    fn sync(&mut self, selection: &SelectionState) {
        if selection.revision() == self.last_revision {
            return;
        }
        self.last_revision = selection.revision();
        self.active_tab = selection.selected();
        self.visible = self.active_tab.is_some();
        // any selection change settles a pending close
        self.closing_timer = None;
        log::debug!("[panel] tab {:?}", self.active_tab);
    }
}
