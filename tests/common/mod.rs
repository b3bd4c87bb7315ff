// tests/common/mod.rs

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use streamgrid::StreamGridError;
use streamgrid::config::Config;
use streamgrid::core::cluster::acl::AclEntry;
use streamgrid::core::cluster::backend::{StateStorage, StateStorageFactory};
use streamgrid::core::cluster::context::ClusterStateContext;

/// In-memory stand-in for a real coordination backend.
#[derive(Default)]
pub struct InMemoryStateStorage {
    nodes: Mutex<BTreeMap<String, Vec<u8>>>,
    closed: Arc<AtomicBool>,
}

impl InMemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_closed_flag(closed: Arc<AtomicBool>) -> Self {
        Self {
            nodes: Mutex::new(BTreeMap::new()),
            closed,
        }
    }
}

#[async_trait]
impl StateStorage for InMemoryStateStorage {
    async fn set_data(
        &self,
        path: &str,
        data: &[u8],
        _acls: Option<&[AclEntry]>,
    ) -> Result<(), StreamGridError> {
        self.nodes.lock().insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn get_data(&self, path: &str, _watch: bool) -> Result<Option<Vec<u8>>, StreamGridError> {
        Ok(self.nodes.lock().get(path).cloned())
    }

    async fn get_version(&self, path: &str, _watch: bool) -> Result<Option<i64>, StreamGridError> {
        Ok(self.nodes.lock().get(path).map(|_| 0))
    }

    async fn set_ephemeral_node(
        &self,
        path: &str,
        data: &[u8],
        _acls: Option<&[AclEntry]>,
    ) -> Result<(), StreamGridError> {
        self.nodes.lock().insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn get_children(&self, path: &str, _watch: bool) -> Result<Vec<String>, StreamGridError> {
        let prefix = format!("{path}/");
        let nodes = self.nodes.lock();
        let mut children: Vec<String> = nodes
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .map(|rest| rest.split('/').next().unwrap_or(rest).to_string())
            .collect();
        children.dedup();
        Ok(children)
    }

    async fn node_exists(&self, path: &str, _watch: bool) -> Result<bool, StreamGridError> {
        Ok(self.nodes.lock().contains_key(path))
    }

    async fn mkdirs(&self, path: &str, _acls: Option<&[AclEntry]>) -> Result<(), StreamGridError> {
        self.nodes.lock().entry(path.to_string()).or_default();
        Ok(())
    }

    async fn delete_node(&self, path: &str) -> Result<(), StreamGridError> {
        let prefix = format!("{path}/");
        let mut nodes = self.nodes.lock();
        nodes.remove(path);
        nodes.retain(|key, _| !key.starts_with(&prefix));
        Ok(())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

/// Factory producing [`InMemoryStateStorage`] handles; counts builds and
/// shares the closed flag so tests can observe lifecycle decisions.
#[derive(Default)]
pub struct InMemoryStorageFactory {
    pub builds: AtomicUsize,
    pub closed: Arc<AtomicBool>,
}

impl StateStorageFactory for InMemoryStorageFactory {
    fn build(
        &self,
        _config: &Config,
        _auth_config: &Config,
        _context: &ClusterStateContext,
    ) -> Result<Box<dyn StateStorage>, StreamGridError> {
        self.builds.fetch_add(1, Ordering::Relaxed);
        Ok(Box::new(InMemoryStateStorage::with_closed_flag(
            self.closed.clone(),
        )))
    }
}
