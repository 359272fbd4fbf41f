//! Filesystem document store against the fixture catalog and temp directories

use super::test_utils::{fixture_root, fixture_store};
use design_modifiers::catalog::{Children, NodeKind, ResourceKey};
use design_modifiers::config::SourceConfig;
use design_modifiers::error::StorageError;
use design_modifiers::store::{open_store, DocumentStore, FsDocumentStore};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_fixture_documents_decode() {
    let store = fixture_store();

    let concept = store.fetch(&ResourceKey::cluster("concept")).await.unwrap();
    assert!(matches!(
        concept.kind,
        NodeKind::Container(Children::Categories(_))
    ));
    assert_eq!(concept.icon.as_deref(), Some("💡"));
    assert_eq!(concept.metadata.as_ref().unwrap().tags, vec!["core"]);

    let medium = store
        .fetch(&ResourceKey::category("concept", "medium"))
        .await
        .unwrap();
    let keys: Vec<&String> = medium.entries().unwrap().keys().collect();
    assert_eq!(keys, vec!["photography", "painting", "collage"]);
    assert!(medium.entries().unwrap()["photography"].is_pointer());
    assert!(medium.entries().unwrap()["collage"].is_leaf());

    let photography = store
        .fetch(&ResourceKey::subcategory("concept", "medium", "photography"))
        .await
        .unwrap();
    let groups: Vec<&String> = photography.entries().unwrap().keys().collect();
    assert_eq!(groups, vec!["film", "lens"]);
}

#[tokio::test]
async fn test_missing_document_is_not_found() {
    let store = fixture_store();
    let err = store
        .fetch(&ResourceKey::category("concept", "texture"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound(ref key) if key == "data/concept/texture/texture"));
}

#[tokio::test]
async fn test_malformed_document_on_disk() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("data").join("broken");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("broken.json"), r#"{ "name": "Broken", "path": "x", "items": ["y"] }"#).unwrap();

    let store = FsDocumentStore::new(temp.path()).unwrap();
    let err = store.fetch(&ResourceKey::cluster("broken")).await.unwrap_err();
    assert_eq!(err.kind(), "malformed");
    assert!(err.to_string().contains("declares both path and items"));
}

#[tokio::test]
async fn test_dotted_slug_keeps_its_name() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("data").join("v1.5");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("v1.5.json"), r#"{ "name": "Versioned", "categories": {} }"#).unwrap();

    let store = FsDocumentStore::new(temp.path()).unwrap();
    let node = store.fetch(&ResourceKey::cluster("v1.5")).await.unwrap();
    assert_eq!(node.name, "Versioned");
}

#[test]
fn test_missing_root_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = FsDocumentStore::new(&temp.path().join("nope"));
    assert!(matches!(result, Err(StorageError::IoError(_))));
}

#[tokio::test]
async fn test_open_store_resolves_relative_root() {
    let source = SourceConfig {
        root: Some("fixtures".into()),
        ..SourceConfig::default()
    };
    let tests_dir = fixture_root().parent().unwrap().to_path_buf();
    let store = open_store(&source, &tests_dir).unwrap();
    assert!(store.describe().contains("fixtures"));
    assert!(store.fetch(&ResourceKey::cluster("context")).await.is_ok());
}
