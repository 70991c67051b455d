//! Shepherd: a storage-pool/volume backend for Sheepdog-style clusters.
//!
//! The cluster's only control surface is its line-oriented command-line
//! client (`collie` by default). Shepherd translates pool/volume operations
//! into tool invocations and parses the tool's tabular output back into
//! typed pool and volume state.

pub mod backend;
pub mod exec;
pub mod pool;

pub use backend::SheepdogBackend;
pub use backend::command::{set_cluster_tool, DEFAULT_ADDRESS, DEFAULT_PORT};
pub use exec::{CommandExecutor, ExecOutput, SystemExecutor};
pub use pool::{PoolHost, StoragePool, Volume, VolumeEncryption, VolumeKind};

pub use shepherd_shared::{ShepherdError, ShepherdResult};
