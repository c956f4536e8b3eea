//! Tests for list rendering and active-item navigation

use super::*;
use crate::autocomplete::{
    ArrowUpPolicy, FieldEvent, FieldOptions, FieldSettings, ITEM_ACTIVE_CLASS, ITEM_CLASS, Key,
    LIST_ACTIVE_CLASS,
};
use crate::dataset::Dataset;
use crate::node::NodeTree;
use crate::test_utils::test_helpers::{
    anchor_at, marked_items, press, rendered_labels, territories, test_field, type_text,
};
use std::cell::Cell;
use std::rc::Rc;

fn show_all(tree: &mut NodeTree, field: &mut AutocompleteField<NodeTree>) {
    field.handle_event(tree, FieldEvent::DoubleClick);
}

mod render_tests {
    use super::*;

    #[test]
    fn test_full_dataset_rendered_in_order() {
        let (mut tree, mut field) = test_field(territories());

        show_all(&mut tree, &mut field);

        assert!(field.list_is_active());
        assert_eq!(rendered_labels(&tree, &field), vec!["Ontario", "Quebec", "Nunavut"]);
        assert!(tree.has_class(field.elements().unwrap().list, LIST_ACTIVE_CLASS));
    }

    #[test]
    fn test_items_carry_data_attributes_and_class() {
        let (mut tree, mut field) = test_field(territories());
        show_all(&mut tree, &mut field);

        let list = field.elements().unwrap().list;
        let item = tree.children(list)[1];
        let anchor = anchor_at(&tree, &field, 1);

        assert_eq!(tree.kind(item), Some(ElementKind::ListItem));
        assert_eq!(tree.kind(anchor), Some(ElementKind::Anchor));
        assert_eq!(tree.attribute(item, DATA_LABEL).as_deref(), Some("Quebec"));
        assert_eq!(tree.attribute(item, DATA_VALUE).as_deref(), Some("QC"));
        assert_eq!(tree.attribute(anchor, DATA_VALUE).as_deref(), Some("QC"));
        assert!(tree.has_class(item, ITEM_CLASS));
        assert!(tree.is_subscribed(EventTarget::Node(anchor), EventKind::Click));
    }

    #[test]
    fn test_rerender_replaces_previous_items() {
        let (mut tree, mut field) = test_field(territories());
        show_all(&mut tree, &mut field);
        let old_anchor = anchor_at(&tree, &field, 0);

        type_text(&mut tree, &mut field, "bec");

        assert_eq!(rendered_labels(&tree, &field), vec!["Quebec"]);
        assert_eq!(tree.kind(old_anchor), None);
        assert!(!tree.is_subscribed(EventTarget::Node(old_anchor), EventKind::Click));
    }

    #[test]
    fn test_deactivate_removes_items_and_class() {
        let (mut tree, mut field) = test_field(territories());
        show_all(&mut tree, &mut field);

        press(&mut tree, &mut field, Key::Escape);

        let list = field.elements().unwrap().list;
        assert!(tree.children(list).is_empty());
        assert!(!tree.has_class(list, LIST_ACTIVE_CLASS));
        assert!(field.result_set().is_empty());
    }

    #[test]
    fn test_empty_dataset_keeps_list_hidden() {
        let (mut tree, mut field) = test_field(Dataset::default());

        show_all(&mut tree, &mut field);

        assert!(!field.list_is_active());
        assert!(rendered_labels(&tree, &field).is_empty());
    }

    #[test]
    fn test_list_hooks_fire_once_per_transition() {
        let shown = Rc::new(Cell::new(0));
        let hidden = Rc::new(Cell::new(0));
        let (s, h) = (Rc::clone(&shown), Rc::clone(&hidden));
        let options = FieldOptions::new()
            .activate_list(move |_, _| s.set(s.get() + 1))
            .deactivate_list(move |_, _| h.set(h.get() + 1));
        let mut tree = NodeTree::new();
        let mut field = AutocompleteField::new(&mut tree, territories(), options);

        show_all(&mut tree, &mut field);
        type_text(&mut tree, &mut field, "o");
        type_text(&mut tree, &mut field, "on");
        assert_eq!((shown.get(), hidden.get()), (1, 0));

        press(&mut tree, &mut field, Key::Escape);
        press(&mut tree, &mut field, Key::Escape);
        assert_eq!((shown.get(), hidden.get()), (1, 1));
    }

    #[test]
    fn test_no_match_hides_visible_list() {
        let (mut tree, mut field) = test_field(territories());
        show_all(&mut tree, &mut field);

        type_text(&mut tree, &mut field, "zz");

        assert!(!field.list_is_active());
        assert!(field.result_set().is_empty());
    }
}

mod navigation_tests {
    use super::*;

    #[test]
    fn test_arrow_down_from_none_lands_on_first() {
        let (mut tree, mut field) = test_field(territories());
        show_all(&mut tree, &mut field);

        press(&mut tree, &mut field, Key::ArrowDown);

        assert_eq!(field.active_item(), Some(0));
        assert_eq!(marked_items(&tree, &field), vec![0]);
    }

    #[test]
    fn test_arrow_down_cycles_and_wraps() {
        let (mut tree, mut field) = test_field(territories());
        show_all(&mut tree, &mut field);

        let mut seen = Vec::new();
        for _ in 0..4 {
            press(&mut tree, &mut field, Key::ArrowDown);
            seen.push(field.active_item().unwrap());
            assert_eq!(marked_items(&tree, &field).len(), 1);
        }

        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_arrow_up_without_active_item_is_noop() {
        let (mut tree, mut field) = test_field(territories());
        show_all(&mut tree, &mut field);

        press(&mut tree, &mut field, Key::ArrowUp);

        assert_eq!(field.active_item(), None);
        assert!(marked_items(&tree, &field).is_empty());
    }

    #[test]
    fn test_arrow_up_wraps_to_last() {
        let (mut tree, mut field) = test_field(territories());
        show_all(&mut tree, &mut field);
        press(&mut tree, &mut field, Key::ArrowDown);

        press(&mut tree, &mut field, Key::ArrowUp);

        assert_eq!(field.active_item(), Some(2));
        assert_eq!(marked_items(&tree, &field), vec![2]);
    }

    #[test]
    fn test_arrow_up_clamps_when_configured() {
        let settings = FieldSettings {
            arrow_up: ArrowUpPolicy::Clamp,
            ..FieldSettings::default()
        };
        let mut tree = NodeTree::new();
        let mut field =
            AutocompleteField::new(&mut tree, territories(), FieldOptions::new().settings(settings));
        show_all(&mut tree, &mut field);
        press(&mut tree, &mut field, Key::ArrowDown);
        press(&mut tree, &mut field, Key::ArrowDown);

        press(&mut tree, &mut field, Key::ArrowUp);
        assert_eq!(field.active_item(), Some(0));
        press(&mut tree, &mut field, Key::ArrowUp);
        assert_eq!(field.active_item(), Some(0));
    }

    #[test]
    fn test_arrows_with_hidden_list_do_nothing() {
        let (mut tree, mut field) = test_field(territories());

        press(&mut tree, &mut field, Key::ArrowDown);
        press(&mut tree, &mut field, Key::ArrowUp);

        assert_eq!(field.active_item(), None);
    }

    #[test]
    fn test_new_search_resets_active_item() {
        let (mut tree, mut field) = test_field(territories());
        show_all(&mut tree, &mut field);
        press(&mut tree, &mut field, Key::ArrowDown);
        press(&mut tree, &mut field, Key::ArrowDown);

        type_text(&mut tree, &mut field, "u");

        assert_eq!(field.active_item(), None);
        assert!(marked_items(&tree, &field).is_empty());
        assert!(
            tree.children(field.elements().unwrap().list)
                .iter()
                .all(|&item| !tree.has_class(item, ITEM_ACTIVE_CLASS))
        );
    }

    #[test]
    fn test_custom_item_hooks() {
        let options = FieldOptions::new()
            .activate_list_item(|host: &mut NodeTree, node| host.add_class(node, "hot"))
            .deactivate_list_item(|host: &mut NodeTree, node| host.remove_class(node, "hot"));
        let mut tree = NodeTree::new();
        let mut field = AutocompleteField::new(&mut tree, territories(), options);
        show_all(&mut tree, &mut field);

        press(&mut tree, &mut field, Key::ArrowDown);
        press(&mut tree, &mut field, Key::ArrowDown);

        let list = field.elements().unwrap().list;
        let hot: Vec<bool> = tree
            .children(list)
            .iter()
            .map(|&item| tree.has_class(item, "hot"))
            .collect();
        assert_eq!(hot, vec![false, true, false]);
    }
}
