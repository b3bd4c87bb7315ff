// src/core/cluster/paths.rs

//! The persistent-state namespace shared by all cluster roles.
//!
//! Every category of cluster state lives under exactly one fixed top-level
//! segment. The builders here are pure string concatenation: identifiers are
//! joined onto the category root in call order with no normalization or
//! validation. A malformed identifier produces a malformed path and is the
//! caller's responsibility. The one exception is error paths, which
//! percent-encode the component id so arbitrary component names survive as a
//! single path segment.

use std::fmt;
use strum_macros::Display;

pub const SEPARATOR: &str = "/";

pub const ASSIGNMENTS_ROOT: &str = "assignments";
pub const STORMS_ROOT: &str = "storms";
pub const SUPERVISORS_ROOT: &str = "supervisors";
pub const WORKERBEATS_ROOT: &str = "workerbeats";
pub const BACKPRESSURE_ROOT: &str = "backpressure";
pub const LEADERINFO_ROOT: &str = "leader-info";
pub const ERRORS_ROOT: &str = "errors";
pub const BLOBSTORE_ROOT: &str = "blobstore";
pub const BLOBSTORE_MAX_KEY_SEQUENCE_NUMBER_ROOT: &str = "blobstoremaxkeysequencenumber";
pub const NIMBUSES_ROOT: &str = "nimbuses";
pub const CREDENTIALS_ROOT: &str = "credentials";
pub const LOGCONFIG_ROOT: &str = "logconfigs";
pub const PROFILERCONFIG_ROOT: &str = "profilerconfigs";
pub const SECRET_KEYS_ROOT: &str = "secretkeys";

pub const ASSIGNMENTS_SUBTREE: &str = "/assignments";
pub const STORMS_SUBTREE: &str = "/storms";
pub const SUPERVISORS_SUBTREE: &str = "/supervisors";
pub const WORKERBEATS_SUBTREE: &str = "/workerbeats";
pub const BACKPRESSURE_SUBTREE: &str = "/backpressure";
pub const LEADERINFO_SUBTREE: &str = "/leader-info";
pub const ERRORS_SUBTREE: &str = "/errors";
pub const BLOBSTORE_SUBTREE: &str = "/blobstore";
pub const BLOBSTORE_MAX_KEY_SEQUENCE_NUMBER_SUBTREE: &str = "/blobstoremaxkeysequencenumber";
pub const NIMBUSES_SUBTREE: &str = "/nimbuses";
pub const CREDENTIALS_SUBTREE: &str = "/credentials";
pub const LOGCONFIG_SUBTREE: &str = "/logconfigs";
pub const PROFILERCONFIG_SUBTREE: &str = "/profilerconfigs";
pub const SECRET_KEYS_SUBTREE: &str = "/secretkeys";

/// The service a rotating worker-authentication secret belongs to.
/// The string form is a path segment under `/secretkeys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerTokenServiceType {
    Nimbus,
    Drpc,
    Supervisor,
}

/// A profiler request issued against a single worker JVM. The string form is
/// the trailing token of a profiler-config path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileAction {
    JprofileStop,
    JprofileStart,
    JprofileDump,
    JmapDump,
    JstackDump,
    JvmRestart,
}

/// A worker process location. Path segments use the dash-joined `node-port`
/// string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePort {
    pub node: String,
    pub port: u16,
}

impl NodePort {
    pub fn new(node: impl Into<String>, port: u16) -> Self {
        Self {
            node: node.into(),
            port,
        }
    }
}

impl fmt::Display for NodePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.node, self.port)
    }
}

pub fn supervisor_path(id: &str) -> String {
    format!("{SUPERVISORS_SUBTREE}/{id}")
}

pub fn assignment_path(id: &str) -> String {
    format!("{ASSIGNMENTS_SUBTREE}/{id}")
}

pub fn blobstore_path(key: &str) -> String {
    format!("{BLOBSTORE_SUBTREE}/{key}")
}

pub fn blobstore_max_key_sequence_number_path(key: &str) -> String {
    format!("{BLOBSTORE_MAX_KEY_SEQUENCE_NUMBER_SUBTREE}/{key}")
}

pub fn nimbus_path(id: &str) -> String {
    format!("{NIMBUSES_SUBTREE}/{id}")
}

pub fn storm_path(id: &str) -> String {
    format!("{STORMS_SUBTREE}/{id}")
}

pub fn workerbeat_storm_root(storm_id: &str) -> String {
    format!("{WORKERBEATS_SUBTREE}/{storm_id}")
}

pub fn workerbeat_path(storm_id: &str, node: &str, port: u16) -> String {
    format!("{}/{node}-{port}", workerbeat_storm_root(storm_id))
}

pub fn backpressure_storm_root(storm_id: &str) -> String {
    format!("{BACKPRESSURE_SUBTREE}/{storm_id}")
}

pub fn backpressure_path(storm_id: &str, node: &str, port: u16) -> String {
    format!("{}/{node}-{port}", backpressure_storm_root(storm_id))
}

/// Variant of [`backpressure_path`] for callers that already hold the
/// dash-joined `node-port` token (e.g. read back from a sibling path).
pub fn backpressure_path_from_token(storm_id: &str, node_port: &str) -> String {
    format!("{}/{node_port}", backpressure_storm_root(storm_id))
}

pub fn error_storm_root(storm_id: &str) -> String {
    format!("{ERRORS_SUBTREE}/{storm_id}")
}

/// Component ids may contain arbitrary characters, including the separator,
/// so they are percent-encoded as UTF-8. Decoding on read is the caller's
/// responsibility.
pub fn error_path(storm_id: &str, component_id: &str) -> String {
    format!(
        "{}/{}",
        error_storm_root(storm_id),
        urlencoding::encode(component_id)
    )
}

pub fn last_error_path(storm_id: &str, component_id: &str) -> String {
    format!("{}-last-error", error_path(storm_id, component_id))
}

pub fn credentials_path(storm_id: &str) -> String {
    format!("{CREDENTIALS_SUBTREE}/{storm_id}")
}

/// Get the path to the log config for a topology.
pub fn log_config_path(storm_id: &str) -> String {
    format!("{LOGCONFIG_SUBTREE}/{storm_id}")
}

pub fn profiler_config_storm_root(storm_id: &str) -> String {
    format!("{PROFILERCONFIG_SUBTREE}/{storm_id}")
}

pub fn profiler_config_path(
    storm_id: &str,
    host: &str,
    port: u16,
    request_type: ProfileAction,
) -> String {
    format!(
        "{}/{host}_{port}_{request_type}",
        profiler_config_storm_root(storm_id)
    )
}

/// Get the base path where secret keys are stored for a given service.
pub fn secret_keys_root(service: WorkerTokenServiceType) -> String {
    format!("{SECRET_KEYS_SUBTREE}/{service}")
}

/// Get the path to the secret keys for a specific topology.
pub fn secret_keys_path(service: WorkerTokenServiceType, topology_id: &str) -> String {
    format!("{}/{topology_id}", secret_keys_root(service))
}

/// Get the path to one rotation generation of a topology's secret.
///
/// Version numbers are caller-assigned; this layer guarantees only the
/// hierarchy, not any ordering between sibling versions.
pub fn secret_key_version_path(
    service: WorkerTokenServiceType,
    topology_id: &str,
    version: u64,
) -> String {
    format!("{}/{version}", secret_keys_path(service, topology_id))
}
