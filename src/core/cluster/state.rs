// src/core/cluster/state.rs

//! Composition of the unified cluster-state handle: a resolved storage
//! handle, a local-assignments backend, and the composition context.
//!
//! Composition goes through an explicit [`ClusterComposer`] value passed by
//! the caller. Production code passes [`DefaultComposer`]; tests pass their
//! own implementation to intercept composition without touching call sites.
//! There is no process-wide override to mutate.

use crate::config::Config;
use crate::core::cluster::assignments::{self, LocalAssignmentsBackend};
use crate::core::cluster::backend::{self, StateStorage};
use crate::core::cluster::context::ClusterStateContext;
use crate::core::errors::StreamGridError;
use tracing::{debug, info};

/// What the caller hands composition: an already-constructed storage handle,
/// or raw configuration to resolve one from.
pub enum StorageSource<'a> {
    Handle(Box<dyn StateStorage>),
    Config(&'a Config),
}

/// The composition strategy. Implemented by [`DefaultComposer`] for
/// production; tests provide their own to substitute the composed handle.
pub trait ClusterComposer: Send + Sync {
    fn make_state_storage(
        &self,
        config: &Config,
        auth_config: &Config,
        context: &ClusterStateContext,
    ) -> Result<Box<dyn StateStorage>, StreamGridError>;

    fn make_cluster_state(
        &self,
        storage: StorageSource<'_>,
        backend: Box<dyn LocalAssignmentsBackend>,
        context: ClusterStateContext,
    ) -> Result<ClusterState, StreamGridError>;
}

/// Production composition: storage resolved through the backend registry,
/// bundled as-is with the supplied assignments backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultComposer;

impl ClusterComposer for DefaultComposer {
    fn make_state_storage(
        &self,
        config: &Config,
        auth_config: &Config,
        context: &ClusterStateContext,
    ) -> Result<Box<dyn StateStorage>, StreamGridError> {
        backend::resolve_storage(config, auth_config, context)
    }

    fn make_cluster_state(
        &self,
        storage: StorageSource<'_>,
        backend: Box<dyn LocalAssignmentsBackend>,
        context: ClusterStateContext,
    ) -> Result<ClusterState, StreamGridError> {
        match storage {
            StorageSource::Handle(storage) => {
                debug!(daemon = %context.daemon_type(), "composing cluster state over caller-supplied storage");
                Ok(ClusterState::new(storage, backend, context, false))
            }
            StorageSource::Config(config) => {
                // The same map serves as primary and auth config, as every
                // daemon starts from one configuration.
                let storage = self.make_state_storage(config, config, &context)?;
                debug!(daemon = %context.daemon_type(), "composing cluster state over resolved storage");
                Ok(ClusterState::new(storage, backend, context, true))
            }
        }
    }
}

/// The unified cluster-state handle the rest of the system reads and writes
/// through.
pub struct ClusterState {
    storage: Box<dyn StateStorage>,
    assignments_backend: Box<dyn LocalAssignmentsBackend>,
    context: ClusterStateContext,
    /// Whether composition resolved the storage handle itself (and therefore
    /// owns its lifecycle) or received it from the caller.
    owns_storage: bool,
}

impl ClusterState {
    pub fn new(
        storage: Box<dyn StateStorage>,
        assignments_backend: Box<dyn LocalAssignmentsBackend>,
        context: ClusterStateContext,
        owns_storage: bool,
    ) -> Self {
        Self {
            storage,
            assignments_backend,
            context,
            owns_storage,
        }
    }

    pub fn storage(&self) -> &dyn StateStorage {
        self.storage.as_ref()
    }

    pub fn assignments_backend(&self) -> &dyn LocalAssignmentsBackend {
        self.assignments_backend.as_ref()
    }

    pub fn context(&self) -> &ClusterStateContext {
        &self.context
    }

    pub fn owns_storage(&self) -> bool {
        self.owns_storage
    }

    /// Tears the handle down. The storage session is closed only when this
    /// handle resolved it internally; caller-supplied handles remain the
    /// caller's to release.
    pub async fn shutdown(self) {
        self.assignments_backend.dispose();
        if self.owns_storage {
            self.storage.close().await;
            info!("closed internally resolved state storage");
        }
    }
}

/// Resolves a storage handle through the given composer.
pub fn make_state_storage(
    composer: &dyn ClusterComposer,
    config: &Config,
    auth_config: &Config,
    context: &ClusterStateContext,
) -> Result<Box<dyn StateStorage>, StreamGridError> {
    composer.make_state_storage(config, auth_config, context)
}

/// Composes a cluster-state handle with the caller's assignments backend.
pub fn make_cluster_state(
    composer: &dyn ClusterComposer,
    storage: StorageSource<'_>,
    backend: Box<dyn LocalAssignmentsBackend>,
    context: ClusterStateContext,
) -> Result<ClusterState, StreamGridError> {
    composer.make_cluster_state(storage, backend, context)
}

/// Composes a cluster-state handle with the default in-memory assignments
/// backend, for callers with no preference.
pub fn make_cluster_state_with_defaults(
    composer: &dyn ClusterComposer,
    storage: StorageSource<'_>,
    context: ClusterStateContext,
) -> Result<ClusterState, StreamGridError> {
    composer.make_cluster_state(storage, assignments::default_backend(), context)
}
