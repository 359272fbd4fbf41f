//! Property-based tests for path normalization

use design_modifiers::catalog::{normalize_path, path_segments, CatalogPath};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9.\\-]{1,8}"
}

/// Normalizing an already normalized path changes nothing
#[test]
fn test_normalize_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-z/]{0,24}", |raw| {
            let once = normalize_path(&raw);
            let twice = normalize_path(&once);
            assert_eq!(once, twice);
            Ok(())
        })
        .unwrap();
}

/// Normalized paths are slash-delimited with no empty segments
#[test]
fn test_normalized_shape() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-z/]{0,24}", |raw| {
            let normalized = normalize_path(&raw);
            assert!(normalized.starts_with('/'));
            assert!(normalized.ends_with('/'));
            assert!(!normalized.contains("//"));
            assert!(path_segments(&normalized).iter().all(|s| !s.is_empty()));
            Ok(())
        })
        .unwrap();
}

/// Extra slashes anywhere never change the parsed path
#[test]
fn test_slash_noise_is_ignored() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(segment(), 0..5), 1usize..4),
            |(segments, repeat)| {
                let clean = format!("/{}", segments.join("/"));
                let sep = "/".repeat(repeat);
                let noisy = format!("{}{}{}", sep, segments.join(&sep), sep);
                assert_eq!(CatalogPath::parse(&clean), CatalogPath::parse(&noisy));
                assert_eq!(CatalogPath::parse(&noisy).depth(), segments.len());
                Ok(())
            },
        )
        .unwrap();
}

/// Parent of a child is the path it was built from
#[test]
fn test_child_then_parent_round_trips() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(segment(), 0..3), segment()),
            |(segments, key)| {
                let path = CatalogPath::from_segments(&segments);
                assert_eq!(path.child(&key).parent(), path);
                Ok(())
            },
        )
        .unwrap();
}
