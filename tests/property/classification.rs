//! Property-based tests for node classification

use design_modifiers::catalog::{Node, NodeKind};
use proptest::prelude::*;
use serde_json::json;

/// Any string `path` makes a pointer, whatever else the entry carries
#[test]
fn test_string_path_is_pointer() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &("[ -~]{0,16}", any::<bool>(), any::<bool>()),
            |(path, with_categories, with_modifiers)| {
                let mut doc = json!({ "name": "Entry", "path": path.clone() });
                if with_categories {
                    doc["categories"] = json!({ "a": { "name": "A" } });
                }
                if with_modifiers {
                    doc["modifiers"] = json!({ "m": { "name": "M", "items": ["x"] } });
                }

                let node = Node::from_value(doc).unwrap();
                assert_eq!(node.kind, NodeKind::Pointer { path });
                Ok(())
            },
        )
        .unwrap();
}

/// A pointer that also carries items is rejected
#[test]
fn test_pointer_with_items_is_rejected() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &("[a-z/]{0,12}", prop::collection::vec("[a-z ]{1,10}", 0..4)),
            |(path, items)| {
                let doc = json!({ "name": "Entry", "path": path, "items": items });
                let err = Node::from_value(doc).unwrap_err();
                assert!(err.contains("declares both path and items"));
                Ok(())
            },
        )
        .unwrap();
}

/// Without a pointer, items always classify as a leaf
#[test]
fn test_items_without_path_are_leaf() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec("[a-z ]{1,10}", 0..6), |items| {
            let doc = json!({ "name": "Entry", "items": items.clone() });
            let node = Node::from_value(doc).unwrap();
            assert!(node.is_leaf());
            assert_eq!(node.preview_items().map(|i| i.len()), Some(items.len()));
            Ok(())
        })
        .unwrap();
}
