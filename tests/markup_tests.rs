// Host-side tests for panel markup generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use folio_core::panel::{PanelContent, PanelSection};
use folio_core::TargetId;
use markup::*;

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn panel_html_has_title_and_every_section() {
    for id in TargetId::ALL {
        let content = PanelContent::for_target(id);
        let html = panel_html(&content);
        assert!(html.starts_with("<h2 class=\"panel-title\">"));
        assert!(html.contains(&escape_html(content.title)));
        assert_eq!(
            html.matches("<section class=\"panel-section\">").count(),
            content.sections.len()
        );
        for section in content.sections {
            assert!(html.contains(&escape_html(section.heading)));
            assert!(html.contains(&escape_html(section.body)));
        }
    }
}

#[test]
fn dividers_go_between_sections_only() {
    const SECTIONS: &[PanelSection] = &[
        PanelSection {
            heading: "One",
            body: "a",
        },
        PanelSection {
            heading: "Two",
            body: "b",
        },
        PanelSection {
            heading: "Three",
            body: "c",
        },
    ];
    let html = panel_html(&PanelContent {
        title: "T",
        sections: SECTIONS,
    });
    assert_eq!(html.matches("panel-divider").count(), 2);
    assert!(!html.ends_with("</div>"));
}

#[test]
fn content_is_escaped_in_output() {
    const SECTIONS: &[PanelSection] = &[PanelSection {
        heading: "<script>",
        body: "1 < 2",
    }];
    let html = panel_html(&PanelContent {
        title: "A & B",
        sections: SECTIONS,
    });
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("A &amp; B"));
    assert!(html.contains("1 &lt; 2"));
}
