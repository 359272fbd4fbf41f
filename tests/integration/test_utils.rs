//! Shared test utilities for integration tests
//!
//! Fixture catalog access, a document store that records and shapes fetches,
//! and serialized access to process environment variables.

use async_trait::async_trait;
use design_modifiers::catalog::{Node, ResourceKey};
use design_modifiers::error::StorageError;
use design_modifiers::store::{DocumentStore, FsDocumentStore};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Directory holding `data/...` fixture documents
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture_store() -> Arc<FsDocumentStore> {
    Arc::new(FsDocumentStore::new(&fixture_root()).unwrap())
}

/// Cluster keys present in the fixture catalog
pub fn fixture_clusters() -> Vec<String> {
    vec![
        "concept".to_string(),
        "context".to_string(),
        "komposition".to_string(),
    ]
}

/// One store event, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    Begin(String),
    End(String),
}

/// Wraps another store, logging every fetch and optionally delaying or
/// failing chosen keys.
pub struct RecordingStore {
    inner: Arc<dyn DocumentStore>,
    events: Mutex<Vec<FetchEvent>>,
    delays: Mutex<HashMap<String, Duration>>,
    failing: Mutex<HashSet<String>>,
}

impl RecordingStore {
    pub fn new(inner: Arc<dyn DocumentStore>) -> Self {
        Self {
            inner,
            events: Mutex::new(Vec::new()),
            delays: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
        }
    }

    pub fn over_fixtures() -> Arc<Self> {
        Arc::new(Self::new(fixture_store()))
    }

    pub fn delay(&self, key: &ResourceKey, duration: Duration) {
        self.delays.lock().unwrap().insert(key.to_string(), duration);
    }

    pub fn fail(&self, key: &ResourceKey) {
        self.failing.lock().unwrap().insert(key.to_string());
    }

    pub fn heal(&self, key: &ResourceKey) {
        self.failing.lock().unwrap().remove(key.as_str());
    }

    pub fn events(&self) -> Vec<FetchEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Keys in the order their fetches began
    pub fn fetched(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                FetchEvent::Begin(key) => Some(key),
                FetchEvent::End(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn fetch(&self, key: &ResourceKey) -> Result<Node, StorageError> {
        self.events
            .lock()
            .unwrap()
            .push(FetchEvent::Begin(key.to_string()));

        let delay = self.delays.lock().unwrap().get(key.as_str()).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failing = self.failing.lock().unwrap().contains(key.as_str());
        let result = if failing {
            Err(StorageError::NotFound(key.to_string()))
        } else {
            self.inner.fetch(key).await
        };

        self.events
            .lock()
            .unwrap()
            .push(FetchEvent::End(key.to_string()));
        result
    }

    fn describe(&self) -> String {
        format!("recording {}", self.inner.describe())
    }
}

/// Environment variable state to restore after test
struct EnvState {
    saved: Vec<(&'static str, Option<String>)>,
}

const ISOLATED_VARS: [&str; 5] = [
    "HOME",
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "MODIFIERS_ENV",
    "MODIFIERS__SOURCE__TIMEOUT_SECS",
];

impl EnvState {
    fn capture() -> Self {
        Self {
            saved: ISOLATED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.saved {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with HOME and XDG directories pointing into `test_dir`.
///
/// XDG_CONFIG_HOME is `test_dir` itself, so the global config file lives at
/// `test_dir/modifiers/config.toml`.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_data_home = test_dir.path().join("data");
    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_data_home).unwrap();
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path());
    std::env::set_var("XDG_DATA_HOME", &test_data_home);
    std::env::remove_var("MODIFIERS_ENV");
    std::env::remove_var("MODIFIERS__SOURCE__TIMEOUT_SECS");

    let result = f();

    env_state.restore();
    result
}
