// src/core/cluster/mod.rs

//! The client-side coordination layer shared by every cluster role: the
//! persistent-state namespace, per-topology ACL derivation, pluggable state
//! storage resolution, cluster-state composition, and worker-heartbeat
//! correlation.

pub mod acl;
pub mod assignments;
pub mod backend;
pub mod codec;
pub mod context;
pub mod heartbeat;
pub mod paths;
pub mod state;

// Re-export key types for easier access from other modules.
pub use acl::{AclEntry, Perms};
pub use assignments::{InMemoryAssignmentsBackend, LocalAssignmentsBackend};
pub use backend::{BackendRegistry, DEFAULT_STATE_STORE, StateStorage, StateStorageFactory};
pub use context::{ClusterStateContext, DaemonType};
pub use heartbeat::{ClusterWorkerHeartbeat, ExecutorBeat, ExecutorInfo, ExecutorStats};
pub use state::{ClusterComposer, ClusterState, DefaultComposer, StorageSource};
