// src/core/cluster/heartbeat.rs

//! Worker heartbeat records and their correlation against the executor set a
//! worker currently owns.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifies a unit of parallel work within a topology as an inclusive
/// range of task ids. Used as a mapping key throughout heartbeat handling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct ExecutorInfo {
    pub task_start: i32,
    pub task_end: i32,
}

impl ExecutorInfo {
    pub fn new(task_start: i32, task_end: i32) -> Self {
        Self {
            task_start,
            task_end,
        }
    }
}

/// The statistics blob one executor reports with each heartbeat.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct ExecutorStats {
    /// Tuples emitted per stream since startup.
    pub emitted: HashMap<String, u64>,
    /// Tuples transferred downstream per stream since startup.
    pub transferred: HashMap<String, u64>,
    /// The sampling rate the counters were collected at.
    pub rate: f64,
}

/// A per-executor heartbeat snapshot. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct ExecutorBeat {
    time_secs: i32,
    uptime_secs: i32,
    stats: ExecutorStats,
}

impl ExecutorBeat {
    pub fn new(time_secs: i32, uptime_secs: i32, stats: ExecutorStats) -> Self {
        Self {
            time_secs,
            uptime_secs,
            stats,
        }
    }

    pub fn time_secs(&self) -> i32 {
        self.time_secs
    }

    pub fn uptime_secs(&self) -> i32 {
        self.uptime_secs
    }

    pub fn stats(&self) -> &ExecutorStats {
        &self.stats
    }
}

/// The raw payload a worker process reports: one wall-clock observation time
/// and process uptime, plus per-executor statistics. Transient — consumed by
/// correlation, not persisted by this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct ClusterWorkerHeartbeat {
    pub storm_id: String,
    pub executor_stats: HashMap<ExecutorInfo, ExecutorStats>,
    pub time_secs: i32,
    pub uptime_secs: i32,
}

/// Correlates a raw worker heartbeat against the executors the worker
/// currently owns, returning beats only for owned executors.
///
/// After a reassignment a worker may briefly keep reporting heartbeats for
/// executors it no longer owns; the caller supplies the authoritative
/// assignment as the filter, and foreign entries are dropped silently. The
/// emitted beats copy the heartbeat's top-level time and uptime alongside
/// each executor's individual statistics.
pub fn convert_executor_beats(
    executors: &[ExecutorInfo],
    worker_heartbeat: &ClusterWorkerHeartbeat,
) -> HashMap<ExecutorInfo, ExecutorBeat> {
    let mut beats = HashMap::new();
    for executor in executors {
        if let Some(stats) = worker_heartbeat.executor_stats.get(executor) {
            beats.insert(
                *executor,
                ExecutorBeat::new(
                    worker_heartbeat.time_secs,
                    worker_heartbeat.uptime_secs,
                    stats.clone(),
                ),
            );
        }
    }
    beats
}
