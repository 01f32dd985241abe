use crate::constants::{
    GREETING_ID_PREFIX, LABEL_ID_PREFIX, PANEL_CLOSE_ID, PANEL_CONTENT_ID, PANEL_ID, TAB_ID_PREFIX,
};
use crate::dom;
use crate::input::{css_rgb, project_to_css, projected_height};
use crate::markup;
use folio_core::constants::GREETING_TEXT_SIZE;
use folio_core::greeting::{GreetingVisual, GREETINGS};
use folio_core::hoverable::TargetVisual;
use folio_core::panel::{PanelContent, PanelView};
use folio_core::{Scene, TargetId};
use glam::Mat4;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hook the tab buttons and the close button up to the scene.
pub fn wire_panel(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    for id in TargetId::ALL {
        let el_id = format!("{TAB_ID_PREFIX}{}", id.name());
        let Some(el) = document.get_element_by_id(&el_id) else {
            log::warn!("[panel] missing #{}", el_id);
            continue;
        };
        // the button names its target; fall back to the id it was found under
        let target = match el.get_attribute("data-target").map(|s| s.parse::<TargetId>()) {
            Some(Ok(t)) => t,
            Some(Err(e)) => {
                log::warn!("[panel] {}: {}", el_id, e);
                id
            }
            None => id,
        };
        let scene_tab = scene.clone();
        dom::add_click_listener(document, &el_id, move || {
            scene_tab.borrow_mut().focus_tab(target);
        });
    }

    let scene_close = scene.clone();
    dom::add_click_listener(document, PANEL_CLOSE_ID, move || {
        scene_close.borrow_mut().close_panel();
    });
}

/// Keeps `#info-panel` in step with the panel model.
pub struct PanelDom {
    root: Option<web::Element>,
    content: Option<web::Element>,
    tabs: Vec<(TargetId, web::Element)>,
    rendered: Option<u64>,
}

impl PanelDom {
    pub fn new(document: &web::Document) -> Self {
        let tabs = TargetId::ALL
            .iter()
            .filter_map(|&id| {
                document
                    .get_element_by_id(&format!("{TAB_ID_PREFIX}{}", id.name()))
                    .map(|el| (id, el))
            })
            .collect();
        Self {
            root: document.get_element_by_id(PANEL_ID),
            content: document.get_element_by_id(PANEL_CONTENT_ID),
            tabs,
            rendered: None,
        }
    }

    pub fn sync(&mut self, view: &PanelView) {
        if let Some(root) = &self.root {
            dom::set_hidden(root, !view.visible);
            let cl = root.class_list();
            _ = if view.closing {
                cl.add_1("closing")
            } else {
                cl.remove_1("closing")
            };
        }
        if self.rendered == Some(view.revision) {
            return;
        }
        self.rendered = Some(view.revision);

        for (id, el) in &self.tabs {
            let cl = el.class_list();
            _ = if view.active_tab == Some(*id) {
                cl.add_1("active")
            } else {
                cl.remove_1("active")
            };
        }
        if let (Some(content), Some(tab)) = (&self.content, view.active_tab) {
            content.set_inner_html(&markup::panel_html(&PanelContent::for_target(tab)));
            log::info!("[panel] showing {}", tab);
        }
    }
}

/// DOM text labels floating over each target.
pub struct LabelDom {
    labels: Vec<(TargetId, web::HtmlElement)>,
}

impl LabelDom {
    pub fn new(document: &web::Document) -> Self {
        let labels = TargetId::ALL
            .iter()
            .filter_map(|&id| {
                dom::html_element(document, &format!("{LABEL_ID_PREFIX}{}", id.name()))
                    .map(|el| (id, el))
            })
            .collect();
        Self { labels }
    }

    pub fn sync(&self, targets: &[TargetVisual], view_proj: Mat4, css_width: f32, css_height: f32) {
        for (id, el) in &self.labels {
            let Some(visual) = targets.iter().find(|t| t.id == *id) else {
                continue;
            };
            let style = el.style();
            match project_to_css(visual.label_anchor, view_proj, css_width, css_height) {
                Some(p) => {
                    _ = style.set_property("display", "block");
                    _ = style.set_property(
                        "transform",
                        &format!("translate(-50%, -50%) translate({:.1}px, {:.1}px)", p.x, p.y),
                    );
                    _ = style.set_property("color", &css_rgb(visual.label_color));
                }
                None => {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}

/// Greeting lines drawn as DOM text over their spring-driven anchors.
pub struct GreetingDom {
    lines: Vec<web::HtmlElement>,
}

impl GreetingDom {
    pub fn new(document: &web::Document) -> Self {
        let lines = GREETINGS
            .iter()
            .enumerate()
            .filter_map(|(i, spec)| {
                let el = dom::html_element(document, &format!("{GREETING_ID_PREFIX}{i}"));
                if el.is_none() {
                    log::warn!("[greeting] missing #{}{}", GREETING_ID_PREFIX, i);
                }
                el.inspect(|el| el.set_text_content(Some(spec.text)))
            })
            .collect();
        Self { lines }
    }

    pub fn sync(
        &self,
        greetings: &[GreetingVisual],
        view_proj: Mat4,
        css_width: f32,
        css_height: f32,
    ) {
        for (el, visual) in self.lines.iter().zip(greetings) {
            let style = el.style();
            let placed = project_to_css(visual.position, view_proj, css_width, css_height).zip(
                projected_height(
                    visual.position,
                    GREETING_TEXT_SIZE,
                    view_proj,
                    css_width,
                    css_height,
                ),
            );
            match placed {
                Some((p, size)) => {
                    _ = style.set_property("display", "block");
                    _ = style.set_property("font-size", &format!("{size:.1}px"));
                    _ = style.set_property(
                        "transform",
                        &format!(
                            "translate(-50%, -50%) translate({:.1}px, {:.1}px) rotateX({:.3}rad) rotateY({:.3}rad)",
                            p.x, p.y, visual.tilt.x, visual.tilt.y
                        ),
                    );
                }
                None => {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}
