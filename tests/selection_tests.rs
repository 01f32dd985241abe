// Host-side tests for the shared selection state and target naming.

use folio_core::{CoreError, SelectionState, TargetId, TargetRegistry};

#[test]
fn starts_with_nothing_selected() {
    let sel = SelectionState::new();
    assert_eq!(sel.selected(), None);
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_toggles_the_same_target() {
    let mut sel = SelectionState::new();
    sel.select(TargetId::About);
    assert_eq!(sel.selected(), Some(TargetId::About));
    sel.select(TargetId::About);
    assert_eq!(sel.selected(), None);
}

#[test]
fn select_replaces_a_different_target() {
    let mut sel = SelectionState::new();
    sel.select(TargetId::About);
    sel.select(TargetId::Contact);
    assert_eq!(sel.selected(), Some(TargetId::Contact));
    assert!(sel.is_selected(TargetId::Contact));
    assert!(!sel.is_selected(TargetId::About));
}

#[test]
fn toggle_law_holds_for_every_short_sequence() {
    // all 3^4 sequences of four selects
    for code in 0..81usize {
        let seq: Vec<TargetId> = (0..4)
            .map(|k| TargetId::ALL[(code / 3usize.pow(k)) % 3])
            .collect();
        let mut sel = SelectionState::new();
        let mut expected: Option<TargetId> = None;
        for &id in &seq {
            sel.select(id);
            expected = if expected == Some(id) { None } else { Some(id) };
            assert_eq!(sel.selected(), expected, "sequence {:?}", seq);
        }
    }
}

#[test]
fn focus_never_toggles_off() {
    let mut sel = SelectionState::new();
    sel.focus(TargetId::Projects);
    sel.focus(TargetId::Projects);
    assert_eq!(sel.selected(), Some(TargetId::Projects));
}

#[test]
fn revision_counts_effective_changes_only() {
    let mut sel = SelectionState::new();
    sel.focus(TargetId::About);
    assert_eq!(sel.revision(), 1);
    sel.focus(TargetId::About);
    assert_eq!(sel.revision(), 1);
    sel.clear();
    assert_eq!(sel.revision(), 2);
    sel.clear();
    assert_eq!(sel.revision(), 2);
}

#[test]
fn target_names_parse_case_insensitively() {
    assert_eq!("about".parse::<TargetId>(), Ok(TargetId::About));
    assert_eq!(" PROJECTS ".parse::<TargetId>(), Ok(TargetId::Projects));
    assert_eq!("Contact".parse::<TargetId>(), Ok(TargetId::Contact));
}

#[test]
fn unknown_target_name_is_an_error() {
    let err = "Blog".parse::<TargetId>().unwrap_err();
    assert_eq!(err, CoreError::UnknownTarget("Blog".to_string()));
    assert!(err.to_string().contains("Blog"));
}

#[test]
fn target_index_round_trips_through_all() {
    for (i, id) in TargetId::ALL.iter().enumerate() {
        assert_eq!(id.index(), i);
        assert_eq!(TargetId::from_index(i), Some(*id));
        assert_eq!(id.to_string(), id.name());
    }
    assert_eq!(TargetId::from_index(3), None);
}

#[test]
fn registry_entries_follow_tab_order() {
    let reg = TargetRegistry::new();
    let ids: Vec<_> = reg.iter().map(|e| e.id).collect();
    assert_eq!(ids, TargetId::ALL.to_vec());
    for id in TargetId::ALL {
        assert_eq!(reg.entry(id).id, id);
    }
}

#[test]
fn registry_pose_for_selection() {
    let reg = TargetRegistry::new();
    assert_eq!(reg.pose_for(None), reg.home_pose());
    let about = reg.entry(TargetId::About);
    assert_eq!(reg.pose_for(Some(TargetId::About)), about.camera_pose());
    assert_ne!(reg.intro_pose(), reg.home_pose());
    assert!(about.label_anchor().y > about.anchor.y);
}
