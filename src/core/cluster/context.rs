// src/core/cluster/context.rs

//! The context handed to state storage factories: which daemon is composing
//! cluster state, and under which configuration.

use crate::config::Config;
use std::sync::Arc;
use strum_macros::Display;

/// The cluster role composing a cluster-state handle. Factories use this to
/// pick role-appropriate defaults (e.g. whether writes carry default ACLs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DaemonType {
    Nimbus,
    Supervisor,
    Worker,
    Unknown,
}

/// Carried through storage resolution and cluster-state composition.
#[derive(Debug, Clone)]
pub struct ClusterStateContext {
    daemon_type: DaemonType,
    conf: Arc<Config>,
}

impl ClusterStateContext {
    pub fn new(daemon_type: DaemonType, conf: Arc<Config>) -> Self {
        Self { daemon_type, conf }
    }

    pub fn daemon_type(&self) -> DaemonType {
        self.daemon_type
    }

    pub fn conf(&self) -> &Arc<Config> {
        &self.conf
    }
}

impl Default for ClusterStateContext {
    fn default() -> Self {
        Self::new(DaemonType::Unknown, Arc::new(Config::default()))
    }
}
