// src/core/cluster/backend.rs

//! The pluggable state-storage seam and its resolution from configuration.
//!
//! Backends are selected by identifier through an explicit registry: a
//! mapping from backend names to factories, populated at program
//! initialization. Any implementation of [`StateStorageFactory`] can be
//! substituted purely via configuration, with no recompilation of callers.
//! An unresolvable identifier is a fatal startup condition.

use crate::config::Config;
use crate::core::cluster::acl::AclEntry;
use crate::core::cluster::context::ClusterStateContext;
use crate::core::errors::StreamGridError;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// The identifier resolved when the configuration names no backend.
pub const DEFAULT_STATE_STORE: &str = "zookeeper";

/// The persistent coordination/state-store interface every backend plugs
/// into. The concrete client and its consensus protocol live outside this
/// crate; retry and backoff, if any, are its responsibility.
///
/// `watch` flags on read operations request a one-shot notification from the
/// backend when the node changes; backends without watch support ignore them.
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Writes `data` to `path`, creating the node if needed.
    async fn set_data(
        &self,
        path: &str,
        data: &[u8],
        acls: Option<&[AclEntry]>,
    ) -> Result<(), StreamGridError>;

    /// Reads the data at `path`. Absent nodes are `Ok(None)`, not an error.
    async fn get_data(&self, path: &str, watch: bool) -> Result<Option<Vec<u8>>, StreamGridError>;

    /// Reads the write version of the node at `path`, if it exists.
    async fn get_version(&self, path: &str, watch: bool) -> Result<Option<i64>, StreamGridError>;

    /// Writes an ephemeral node tied to this storage handle's session.
    async fn set_ephemeral_node(
        &self,
        path: &str,
        data: &[u8],
        acls: Option<&[AclEntry]>,
    ) -> Result<(), StreamGridError>;

    /// Lists the immediate children of `path`. An absent node has no children.
    async fn get_children(&self, path: &str, watch: bool) -> Result<Vec<String>, StreamGridError>;

    async fn node_exists(&self, path: &str, watch: bool) -> Result<bool, StreamGridError>;

    /// Creates `path` and any missing parents.
    async fn mkdirs(&self, path: &str, acls: Option<&[AclEntry]>) -> Result<(), StreamGridError>;

    /// Deletes the node at `path` and its subtree. Deleting an absent node
    /// is not an error.
    async fn delete_node(&self, path: &str) -> Result<(), StreamGridError>;

    /// Releases the backend session. Called once by the owner of the handle.
    async fn close(&self);
}

impl std::fmt::Debug for dyn StateStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StateStorage")
    }
}

/// Constructs a [`StateStorage`] handle from the two configuration maps and
/// the composition context.
pub trait StateStorageFactory: Send + Sync {
    fn build(
        &self,
        config: &Config,
        auth_config: &Config,
        context: &ClusterStateContext,
    ) -> Result<Box<dyn StateStorage>, StreamGridError>;
}

/// The plugin registry mapping backend identifiers to factories.
#[derive(Default)]
pub struct BackendRegistry {
    factories: HashMap<String, Arc<dyn StateStorageFactory>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under `name`, replacing any previous registration.
    pub fn register(&mut self, name: impl Into<String>, factory: Arc<dyn StateStorageFactory>) {
        let name = name.into();
        info!(backend = %name, "registered state storage backend");
        self.factories.insert(name, factory);
    }

    /// Resolves the backend named by `config.state_store` (or the fixed
    /// default) and asks its factory to construct a storage handle.
    pub fn resolve(
        &self,
        config: &Config,
        auth_config: &Config,
        context: &ClusterStateContext,
    ) -> Result<Box<dyn StateStorage>, StreamGridError> {
        let name = config.state_store.as_deref().unwrap_or(DEFAULT_STATE_STORE);
        let factory = self
            .factories
            .get(name)
            .cloned()
            .ok_or_else(|| StreamGridError::UnknownBackend(name.to_string()))?;
        debug!(backend = %name, daemon = %context.daemon_type(), "building state storage");
        factory.build(config, auth_config, context)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

// The process-wide registry. Mutated only during program initialization,
// before any composition call runs.
static REGISTRY: Lazy<RwLock<BackendRegistry>> = Lazy::new(|| RwLock::new(BackendRegistry::new()));

/// Registers a backend factory in the process-wide registry.
pub fn register_backend(name: impl Into<String>, factory: Arc<dyn StateStorageFactory>) {
    REGISTRY.write().register(name, factory);
}

/// Resolves a storage handle through the process-wide registry.
pub fn resolve_storage(
    config: &Config,
    auth_config: &Config,
    context: &ClusterStateContext,
) -> Result<Box<dyn StateStorage>, StreamGridError> {
    REGISTRY.read().resolve(config, auth_config, context)
}
