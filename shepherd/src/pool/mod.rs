//! Pool and volume data model.
//!
//! These are the mutable objects the surrounding framework hands to the
//! backend. The backend requires exclusive access for the duration of one
//! call; no locking happens at this layer.

use serde::{Deserialize, Serialize};

/// How a volume is backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeKind {
    /// Cluster-backed volume with no local device node.
    Network,
}

/// Encryption requested for a volume. Sheepdog offers none, so any value
/// here makes volume creation fail up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeEncryption {
    pub format: String,
}

/// A connection endpoint for the cluster management tool.
///
/// Only the first configured host of a pool is consulted; a port of 0 means
/// "use the well-known default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolHost {
    pub name: Option<String>,
    #[serde(default)]
    pub port: u16,
}

/// An addressable block device ("VDI") inside a cluster namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// Cluster-assigned identifier. May contain spaces; the tool escapes
    /// them on the wire and the parser un-escapes them.
    pub name: String,

    /// Globally unique identifier, `<sourceName>/<name>` once refreshed.
    pub key: String,

    /// Display path. No filesystem path exists for this backend, so this
    /// equals `name` once refreshed.
    pub target_path: String,

    pub capacity: u64,
    pub allocation: u64,

    pub kind: VolumeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<VolumeEncryption>,
}

impl Volume {
    /// A fresh volume definition, before the cluster has seen it.
    pub fn new(name: impl Into<String>, capacity: u64) -> Self {
        Volume {
            name: name.into(),
            key: String::new(),
            target_path: String::new(),
            capacity,
            allocation: 0,
            kind: VolumeKind::Network,
            encryption: None,
        }
    }
}

/// A named storage namespace backed by a cluster.
///
/// Scalar byte counts satisfy `available == capacity - allocation` whenever
/// a refresh succeeds; all three are reset to 0 when a refresh starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoragePool {
    /// Cluster-assigned namespace prefix used to build volume keys.
    #[serde(default)]
    pub source_name: String,

    /// Ordered connection endpoints. Only the first entry is consulted.
    #[serde(default)]
    pub hosts: Vec<PoolHost>,

    #[serde(default)]
    pub capacity: u64,
    #[serde(default)]
    pub allocation: u64,
    #[serde(default)]
    pub available: u64,

    /// Rebuilt wholesale on each successful pool refresh. A failed refresh
    /// leaves this empty, never partially populated.
    #[serde(default)]
    pub volumes: Vec<Volume>,
}

impl StoragePool {
    pub fn new(source_name: impl Into<String>) -> Self {
        StoragePool {
            source_name: source_name.into(),
            ..StoragePool::default()
        }
    }

    pub fn first_host(&self) -> Option<&PoolHost> {
        self.hosts.first()
    }

    pub fn clear_volumes(&mut self) {
        self.volumes.clear();
    }
}
