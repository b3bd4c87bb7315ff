// src/core/cluster/assignments.rs

//! The local-assignments backend: the cache of serialized assignments a
//! daemon keeps next to its storage handle, plus topology name/id aliasing.

use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Local cache of per-topology assignment blobs. Implementations must be
/// safe to share across the threads of the surrounding cluster-state client.
pub trait LocalAssignmentsBackend: Send + Sync {
    /// Whether this backend has caught up with the authoritative store.
    fn is_synchronized(&self) -> bool;

    fn set_synchronized(&self);

    /// Stores or replaces the serialized assignment for a topology.
    fn keep_or_update_assignment(&self, storm_id: &str, assignment: Vec<u8>);

    fn get_assignment(&self, storm_id: &str) -> Option<Vec<u8>>;

    /// The ids of all topologies with a cached assignment.
    fn assignments(&self) -> Vec<String>;

    /// Records the name → id alias for a topology.
    fn keep_storm_id(&self, storm_name: &str, storm_id: &str);

    fn get_storm_id(&self, storm_name: &str) -> Option<String>;

    fn delete_storm_id(&self, storm_name: &str);

    /// Drops everything cached for a topology, alias included.
    fn clear_state_for_storm(&self, storm_id: &str);

    /// Releases any resources held by the backend.
    fn dispose(&self);
}

/// The default backend: plain concurrent maps, no persistence.
#[derive(Debug, Default)]
pub struct InMemoryAssignmentsBackend {
    assignments: DashMap<String, Vec<u8>>,
    name_to_id: DashMap<String, String>,
    synchronized: AtomicBool,
}

impl InMemoryAssignmentsBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalAssignmentsBackend for InMemoryAssignmentsBackend {
    fn is_synchronized(&self) -> bool {
        self.synchronized.load(Ordering::Acquire)
    }

    fn set_synchronized(&self) {
        self.synchronized.store(true, Ordering::Release);
    }

    fn keep_or_update_assignment(&self, storm_id: &str, assignment: Vec<u8>) {
        self.assignments.insert(storm_id.to_string(), assignment);
    }

    fn get_assignment(&self, storm_id: &str) -> Option<Vec<u8>> {
        self.assignments.get(storm_id).map(|blob| blob.clone())
    }

    fn assignments(&self) -> Vec<String> {
        self.assignments
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    fn keep_storm_id(&self, storm_name: &str, storm_id: &str) {
        self.name_to_id
            .insert(storm_name.to_string(), storm_id.to_string());
    }

    fn get_storm_id(&self, storm_name: &str) -> Option<String> {
        self.name_to_id.get(storm_name).map(|id| id.clone())
    }

    fn delete_storm_id(&self, storm_name: &str) {
        self.name_to_id.remove(storm_name);
    }

    fn clear_state_for_storm(&self, storm_id: &str) {
        self.assignments.remove(storm_id);
        self.name_to_id.retain(|_, id| id != storm_id);
    }

    fn dispose(&self) {
        self.assignments.clear();
        self.name_to_id.clear();
    }
}

/// The backend used when the caller has no preference.
pub fn default_backend() -> Box<dyn LocalAssignmentsBackend> {
    Box::new(InMemoryAssignmentsBackend::new())
}
