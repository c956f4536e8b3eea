//! Tests for field hooks and settings

use super::*;
use crate::node::{ElementKind, NodeTree};
use proptest::prelude::*;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_default_settings() {
    let settings = FieldSettings::default();
    assert_eq!(settings.default_value, "");
    assert_eq!(settings.arrow_up, ArrowUpPolicy::Wrap);
    assert_eq!(settings.click_when_visible, ClickPolicy::Ignore);
}

#[test]
fn test_settings_deserialize_partial() {
    let settings: FieldSettings = serde_json::from_value(json!({"arrow_up": "clamp"})).unwrap();
    assert_eq!(settings.arrow_up, ArrowUpPolicy::Clamp);
    assert_eq!(settings.default_value, "");
}

#[test]
fn test_merge_value_overrides_given_keys() {
    let mut settings = FieldSettings {
        default_value: "keep".to_string(),
        ..FieldSettings::default()
    };

    assert!(settings.merge_value(&json!({"click_when_visible": "refresh"})));

    assert_eq!(settings.click_when_visible, ClickPolicy::Refresh);
    assert_eq!(settings.default_value, "keep");
}

#[test]
fn test_merge_value_ignores_unknown_keys() {
    let mut settings = FieldSettings::default();

    assert!(settings.merge_value(&json!({"colour": "red", "default_value": "-"})));

    assert_eq!(settings.default_value, "-");
}

#[test]
fn test_merge_value_rejects_bad_value() {
    let mut settings = FieldSettings::default();

    assert!(!settings.merge_value(&json!({"arrow_up": "bounce"})));

    assert_eq!(settings, FieldSettings::default());
}

#[test]
fn test_merge_value_ignores_non_objects() {
    let mut settings = FieldSettings::default();
    for value in [json!(null), json!(true), json!(3), json!("clamp"), json!([1, 2])] {
        assert!(!settings.merge_value(&value));
    }
    assert_eq!(settings, FieldSettings::default());
}

#[test]
fn test_default_hooks_toggle_classes() {
    let mut tree = NodeTree::new();
    let list = tree.create(ElementKind::List);
    let mut hooks: FieldHooks<NodeTree> = FieldHooks::default();

    (hooks.activate_list)(&mut tree, list);
    assert!(tree.has_class(list, LIST_ACTIVE_CLASS));

    (hooks.deactivate_list)(&mut tree, list);
    assert!(!tree.has_class(list, LIST_ACTIVE_CLASS));

    (hooks.activate_list_item)(&mut tree, list);
    assert!(tree.has_class(list, ITEM_ACTIVE_CLASS));
}

#[test]
fn test_merge_replaces_only_given_hooks() {
    let mut tree = NodeTree::new();
    let node = tree.create(ElementKind::ListItem);
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let mut hooks: FieldHooks<NodeTree> = FieldHooks::default();

    hooks.merge(FieldOptions::new().prepare_list_item(move |_, _| *counter.borrow_mut() += 1));

    (hooks.prepare_list_item)(&mut tree, node);
    (hooks.activate_list_item)(&mut tree, node);

    assert_eq!(*calls.borrow(), 1);
    assert!(!tree.has_class(node, ITEM_CLASS));
    assert!(tree.has_class(node, ITEM_ACTIVE_CLASS));
}

#[test]
fn test_default_value_builder_creates_settings() {
    let options: FieldOptions<NodeTree> = FieldOptions::new().default_value("n/a");
    assert_eq!(options.settings.unwrap().default_value, "n/a");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Merging an object never touches keys it does not mention.
    #[test]
    fn prop_merge_preserves_unmentioned(
        default_value in "[a-z]{0,6}",
        clamp in prop::bool::ANY,
        refresh in prop::bool::ANY,
    ) {
        let mut settings = FieldSettings {
            default_value: "base".to_string(),
            arrow_up: ArrowUpPolicy::Wrap,
            click_when_visible: ClickPolicy::Ignore,
        };
        let mut patch = serde_json::Map::new();
        patch.insert("default_value".into(), json!(default_value.clone()));
        if clamp {
            patch.insert("arrow_up".into(), json!("clamp"));
        }
        if refresh {
            patch.insert("click_when_visible".into(), json!("refresh"));
        }

        prop_assert!(settings.merge_value(&serde_json::Value::Object(patch)));

        prop_assert_eq!(&settings.default_value, &default_value);
        prop_assert_eq!(settings.arrow_up == ArrowUpPolicy::Clamp, clamp);
        prop_assert_eq!(settings.click_when_visible == ClickPolicy::Refresh, refresh);
    }
}
