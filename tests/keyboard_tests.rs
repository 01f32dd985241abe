// Host-side tests for key bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use folio_core::TargetId;
use input::{key_action, KeyAction};

#[test]
fn escape_closes_the_panel() {
    assert_eq!(key_action("Escape"), Some(KeyAction::ClosePanel));
}

#[test]
fn number_keys_focus_tabs_in_order() {
    assert_eq!(key_action("1"), Some(KeyAction::Focus(TargetId::About)));
    assert_eq!(key_action("2"), Some(KeyAction::Focus(TargetId::Projects)));
    assert_eq!(key_action("3"), Some(KeyAction::Focus(TargetId::Contact)));
    assert_eq!(key_action("4"), None);
    assert_eq!(key_action("0"), None);
}

#[test]
fn h_toggles_hint_in_either_case() {
    assert_eq!(key_action("h"), Some(KeyAction::ToggleHint));
    assert_eq!(key_action("H"), Some(KeyAction::ToggleHint));
}

#[test]
fn unbound_keys_do_nothing() {
    for key in ["Enter", " ", "a", "Esc", "Shift", ""] {
        assert_eq!(key_action(key), None, "key {:?}", key);
    }
}
