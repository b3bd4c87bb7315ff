// src/config.rs

//! Manages coordination configuration: the cluster-wide settings handed to
//! state storage factories and the per-topology settings that drive ACL
//! derivation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Cluster-wide coordination settings. This is the map every daemon
/// (master, supervisor, worker) starts from; state storage factories
/// receive it both as the primary config and as the auth config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The identifier of the state storage backend to instantiate.
    /// When absent, the resolver falls back to the fixed default
    /// (`DEFAULT_STATE_STORE`).
    pub state_store: Option<String>,
    /// The list of coordination-service hosts to connect to.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,
    /// The client port of the coordination service.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The root path under which all cluster state is stored.
    #[serde(default)]
    pub root: String,
    /// Session timeout for the coordination-service client, in milliseconds.
    #[serde(default = "default_session_timeout_ms")]
    pub session_timeout_ms: u64,
    /// Connection timeout for the coordination-service client, in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
    /// Cluster-level authentication scheme for the coordination-service
    /// session itself (distinct from per-topology ACL auth).
    pub auth_scheme: Option<String>,
    /// Cluster-level authentication payload, `user:password` form.
    pub auth_payload: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_store: None,
            servers: default_servers(),
            port: default_port(),
            root: String::new(),
            session_timeout_ms: default_session_timeout_ms(),
            connection_timeout_ms: default_connection_timeout_ms(),
            auth_scheme: None,
            auth_payload: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{path}'"))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("failed to parse config file '{path}'"))?;
        Ok(config)
    }
}

/// Per-topology settings consumed by ACL derivation. ACLs are recomputed
/// from this on every call, so configuration changes take effect immediately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// The authentication scheme for this topology's state subtree.
    /// Authentication is considered configured when this is present and
    /// non-empty.
    pub auth_scheme: Option<String>,
    /// The shared secret in `user:password` form. Its digest becomes the
    /// principal identity of the topology's digest ACL entry.
    pub auth_payload: Option<String>,
}

fn default_servers() -> Vec<String> {
    vec!["localhost".to_string()]
}
fn default_port() -> u16 {
    2181
}
fn default_session_timeout_ms() -> u64 {
    20_000
}
fn default_connection_timeout_ms() -> u64 {
    15_000
}
