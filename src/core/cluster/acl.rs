// src/core/cluster/acl.rs

//! Derives the access-control list for a topology's state subtree.
//!
//! When a topology carries no authentication configuration the subtree is
//! left unrestricted (`None` — it inherits ambient permissions). When it
//! does, exactly two entries apply: the creator-owns-all entry plus one
//! digest-authenticated entry at the requested permission level. Lists are
//! recomputed from the topology config on every call; nothing is cached.

use crate::config::TopologyConfig;
use crate::core::errors::StreamGridError;
use bitflags::bitflags;
use sha1::{Digest, Sha1};

bitflags! {
    /// Permission bits of a state-store ACL entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Perms: u32 {
        const READ   = 1 << 0;
        const WRITE  = 1 << 1;
        const CREATE = 1 << 2;
        const DELETE = 1 << 3;
        const ADMIN  = 1 << 4;
        const ALL = Self::READ.bits()
            | Self::WRITE.bits()
            | Self::CREATE.bits()
            | Self::DELETE.bits()
            | Self::ADMIN.bits();
    }
}

/// The scheme granting the session that created a node full control over it.
pub const CREATOR_SCHEME: &str = "auth";
/// The scheme authenticating principals by the digest of a shared secret.
pub const DIGEST_SCHEME: &str = "digest";

/// One entry of a state-store ACL: a permission mask granted to a principal
/// under an authentication scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclEntry {
    pub perms: Perms,
    pub scheme: String,
    pub id: String,
}

impl AclEntry {
    pub fn new(perms: Perms, scheme: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            perms,
            scheme: scheme.into(),
            id: id.into(),
        }
    }

    /// The fixed entry granting the creator of a node all permissions.
    pub fn creator_all() -> Self {
        Self::new(Perms::ALL, CREATOR_SCHEME, "")
    }
}

/// Whether state-store authentication is configured for this topology.
pub fn is_auth_configured(topo_conf: &TopologyConfig) -> bool {
    topo_conf
        .auth_scheme
        .as_deref()
        .is_some_and(|scheme| !scheme.is_empty())
}

/// Get the ACLs for a topology to have read/write access to its subtree.
pub fn topo_read_write_acls(
    topo_conf: &TopologyConfig,
) -> Result<Option<Vec<AclEntry>>, StreamGridError> {
    topo_acls(topo_conf, Perms::ALL)
}

/// Get the ACLs for a topology to have read only access to its subtree.
pub fn topo_read_only_acls(
    topo_conf: &TopologyConfig,
) -> Result<Option<Vec<AclEntry>>, StreamGridError> {
    topo_acls(topo_conf, Perms::READ)
}

fn topo_acls(
    topo_conf: &TopologyConfig,
    perms: Perms,
) -> Result<Option<Vec<AclEntry>>, StreamGridError> {
    if !is_auth_configured(topo_conf) {
        return Ok(None);
    }
    let payload = topo_conf
        .auth_payload
        .as_deref()
        .filter(|payload| !payload.is_empty())
        .ok_or_else(|| {
            StreamGridError::InvalidConfig(
                "topology authentication is configured but the auth payload is missing".to_string(),
            )
        })?;
    let digest = AclEntry::new(perms, DIGEST_SCHEME, generate_digest(payload));
    Ok(Some(vec![AclEntry::creator_all(), digest]))
}

/// Derives the digest-scheme principal identity from a `user:password`
/// payload: the user part joined with the base64-encoded SHA-1 of the whole
/// payload. A payload without a `:` is treated as both user and password,
/// matching the digest authentication provider of the coordination service.
pub fn generate_digest(payload: &str) -> String {
    let user = payload.split(':').next().unwrap_or(payload);
    let mut hasher = Sha1::new();
    hasher.update(payload.as_bytes());
    let digest =
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, hasher.finalize());
    format!("{user}:{digest}")
}
