//! Property-based tests for breadcrumbs against the fixture catalog

use design_modifiers::catalog::{normalize_path, CatalogPath};
use design_modifiers::navigator::{Navigator, NavigatorOptions};
use design_modifiers::store::{DocumentStore, FsDocumentStore};
use proptest::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

const REACHABLE: &[&str] = &[
    "",
    "concept",
    "concept/medium",
    "concept/medium/photography",
    "concept/medium/painting",
    "concept/lighting",
    "context",
    "context/environment",
    "context/environment/urban",
    "komposition",
    "komposition/framing",
];

fn fixture_navigator(runtime: &tokio::runtime::Runtime) -> Navigator {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let store: Arc<dyn DocumentStore> = Arc::new(FsDocumentStore::new(&root).unwrap());
    let clusters: Vec<String> = ["concept", "context", "komposition"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let options = NavigatorOptions {
        prefetch_previews: false,
    };
    runtime.block_on(Navigator::start(store, &clusters, options))
}

/// One breadcrumb per segment, the last one pointing at the current path
#[test]
fn test_breadcrumbs_follow_path_depth() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let navigator = fixture_navigator(&runtime);
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(0..REACHABLE.len(), 1usize..3, any::<bool>()),
            |(index, repeat, trailing)| {
                let sep = "/".repeat(repeat);
                let mut target = format!("{}{}", sep, REACHABLE[index].replace('/', &sep));
                if trailing {
                    target.push('/');
                }

                runtime.block_on(navigator.navigate(&target)).unwrap();

                let path = CatalogPath::parse(REACHABLE[index]);
                let crumbs = navigator.breadcrumbs();
                assert_eq!(crumbs.len(), path.depth());
                assert_eq!(navigator.current_path(), path);
                assert!(!navigator.is_loading());
                assert!(navigator.error().is_none());
                if let Some(last) = crumbs.last() {
                    assert_eq!(normalize_path(&last.path), path.to_string());
                    assert!(!last.label.is_empty());
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Navigating up always drops exactly one breadcrumb
#[test]
fn test_navigate_up_drops_one_crumb() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let navigator = fixture_navigator(&runtime);
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(1..REACHABLE.len()), |index| {
            runtime
                .block_on(navigator.navigate(&format!("/{}", REACHABLE[index])))
                .unwrap();
            let before = navigator.breadcrumbs().len();

            runtime.block_on(navigator.navigate_up()).unwrap();
            assert_eq!(navigator.breadcrumbs().len(), before - 1);
            Ok(())
        })
        .unwrap();
}
