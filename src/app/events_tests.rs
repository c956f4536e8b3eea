//! Tests for app events

use crate::app::Focus;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};
use proptest::prelude::*;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

fn type_str(app: &mut crate::app::App, text: &str) {
    for ch in text.chars() {
        app.handle_key_event(key(KeyCode::Char(ch)));
    }
}

fn result_labels(app: &crate::app::App) -> Vec<String> {
    app.field
        .result_set()
        .iter()
        .map(|entry| entry.label.clone())
        .collect()
}

#[test]
fn test_typing_filters_list() {
    let mut app = test_app();

    type_str(&mut app, "n");

    assert_eq!(app.input.text(), "n");
    assert_eq!(result_labels(&app), ["Nunavut", "Ontario"]);
}

#[test]
fn test_typing_exact_label_commits() {
    let mut app = test_app();

    type_str(&mut app, "quebec");

    assert!(!app.field.list_is_active());
    assert_eq!(
        app.selection(),
        Some(("Quebec".to_string(), "QC".to_string()))
    );
    assert_eq!(app.input.text(), "Quebec");
}

#[test]
fn test_backspace_to_empty_shows_everything() {
    let mut app = test_app();
    type_str(&mut app, "qu");

    app.handle_key_event(key(KeyCode::Backspace));
    app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(app.input.text(), "");
    assert_eq!(app.field.result_set().len(), 3);
}

#[test]
fn test_arrows_and_enter_commit() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(
        app.selection(),
        Some(("Quebec".to_string(), "QC".to_string()))
    );
    assert_eq!(app.input.text(), "Quebec");
    assert!(!app.field.list_is_active());
}

#[test]
fn test_arrow_up_wraps_to_last() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Up));

    assert_eq!(app.field.active_item(), Some(2));
}

#[test]
fn test_escape_closes_list_then_quits() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.field.list_is_active());
    assert!(!app.should_quit());

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();

    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
    assert_eq!(app.input.text(), "");
}

#[test]
fn test_tab_moves_focus_and_blurs() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::DetailsPane);
    assert!(!app.field.input_is_focused());
    // Blur alone leaves the list open
    assert!(app.field.list_is_active());

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Field);
    assert!(app.field.input_is_focused());
}

#[test]
fn test_focus_returning_to_text_searches_it() {
    let mut app = test_app();
    type_str(&mut app, "ario");
    app.handle_key_event(key(KeyCode::Esc));
    app.handle_key_event(key(KeyCode::Tab));

    app.handle_key_event(key(KeyCode::Tab));

    assert!(app.field.list_is_active());
    assert_eq!(result_labels(&app), ["Ontario"]);
}

#[test]
fn test_details_pane_ignores_typing() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Tab));

    app.handle_key_event(key(KeyCode::Char('x')));

    assert_eq!(app.input.text(), "");
    assert!(!app.should_quit());
}

#[test]
fn test_details_pane_q_quits() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Tab));

    app.handle_key_event(key(KeyCode::Char('q')));

    assert!(app.should_quit());
}

#[test]
fn test_typing_after_commit_reports_removal() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));

    type_str(&mut app, "x");

    assert_eq!(
        app.activity.borrow().as_slice(),
        ["selected Ontario (ON)", "removed"]
    );
    assert_eq!(app.field.shadow_value(&app.tree), "");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_editor_and_node_stay_in_sync(text in "[a-zA-Z ]{0,12}") {
        let mut app = test_app();

        type_str(&mut app, &text);

        let label = app.field.label(&app.tree);
        prop_assert_eq!(app.input.text(), label.as_str());
    }
}
