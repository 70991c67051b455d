//! Backend operations against a Sheepdog-style cluster.
//!
//! Each operation is thin orchestration: build an argument vector, hand it
//! to the executor, parse the captured stdout, apply the result to the pool
//! or volume it was given. No state persists across calls.

pub mod command;
mod output;

use shepherd_shared::{ShepherdError, ShepherdResult};

use crate::exec::{CommandExecutor, SystemExecutor};
use crate::pool::{StoragePool, Volume, VolumeKind};

use command::ClusterCommand;

/// The storage backend. Generic over the process-execution collaborator so
/// tests can script tool output.
#[derive(Debug, Clone)]
pub struct SheepdogBackend<E = SystemExecutor> {
    executor: E,
}

impl SheepdogBackend<SystemExecutor> {
    pub fn new() -> Self {
        SheepdogBackend {
            executor: SystemExecutor,
        }
    }
}

impl Default for SheepdogBackend<SystemExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_flags(op: &str, flags: u32) -> ShepherdResult<()> {
    if flags != 0 {
        return Err(ShepherdError::Unsupported(format!(
            "{} accepts no flags (got {:#x})",
            op, flags
        )));
    }
    Ok(())
}

impl<E: CommandExecutor> SheepdogBackend<E> {
    pub fn with_executor(executor: E) -> Self {
        SheepdogBackend { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Refresh the pool's capacity figures and rebuild its volume listing.
    ///
    /// A failed summary step aborts before the volume-list command is
    /// issued. Scalar fields from a successful summary survive a later
    /// volume-list failure, but the volume collection never does: it is
    /// cleared up front and only replaced wholesale on success.
    pub fn refresh_pool(&self, pool: &mut StoragePool) -> ShepherdResult<()> {
        pool.capacity = 0;
        pool.allocation = 0;
        pool.available = 0;
        pool.clear_volumes();

        let stdout = ClusterCommand::node_info()
            .with_pool_host(pool)
            .run(&self.executor)?;
        let summary = output::parse_node_info(&stdout)?;
        pool.capacity = summary.capacity;
        pool.allocation = summary.allocation;
        pool.available = summary.available;

        let stdout = ClusterCommand::vdi_list()
            .with_pool_host(pool)
            .run(&self.executor)?;
        pool.volumes = output::parse_vdi_list(&pool.source_name, &stdout)?;
        Ok(())
    }

    /// Create a volume, then enrich it with a best-effort refresh.
    ///
    /// The refresh runs even when the create command failed and its status
    /// never overrides the create result; a successful refresh still fills
    /// in the volume fields. This mirrors long-standing behavior where the
    /// follow-up can salvage information about a pre-existing volume of the
    /// same name.
    pub fn create_volume(&self, pool: &StoragePool, vol: &mut Volume) -> ShepherdResult<()> {
        if vol.encryption.is_some() {
            return Err(ShepherdError::Unsupported(
                "Sheepdog does not support encrypted volumes".into(),
            ));
        }

        let created = ClusterCommand::vdi_create(&vol.name, vol.capacity)
            .with_pool_host(pool)
            .run(&self.executor)
            .map(|_| ());

        if let Err(err) = self.refresh_volume(pool, vol) {
            tracing::debug!("post-create refresh of volume {} failed: {}", vol.name, err);
        }

        created
    }

    /// Refresh one volume's size and usage in place.
    ///
    /// Capacity and allocation are zeroed once the tool output is in hand,
    /// so a parse failure leaves them zeroed rather than stale. The pool's
    /// volume collection is never touched.
    pub fn refresh_volume(&self, pool: &StoragePool, vol: &mut Volume) -> ShepherdResult<()> {
        let stdout = ClusterCommand::vdi_list_one(&vol.name)
            .with_pool_host(pool)
            .run(&self.executor)?;

        vol.capacity = 0;
        vol.allocation = 0;
        let usage = output::parse_vdi(&stdout)?;
        vol.capacity = usage.capacity;
        vol.allocation = usage.allocation;

        vol.kind = VolumeKind::Network;
        vol.key = format!("{}/{}", pool.source_name, vol.name);
        vol.target_path = vol.name.clone();
        Ok(())
    }

    /// Delete a volume. Success is exactly the tool's exit status; no
    /// output is parsed.
    pub fn delete_volume(&self, pool: &StoragePool, vol: &Volume, flags: u32) -> ShepherdResult<()> {
        check_flags("delete", flags)?;

        ClusterCommand::vdi_delete(&vol.name)
            .with_pool_host(pool)
            .run(&self.executor)
            .map(|_| ())
    }

    /// Resize a volume to the new target capacity.
    pub fn resize_volume(
        &self,
        pool: &StoragePool,
        vol: &Volume,
        capacity: u64,
        flags: u32,
    ) -> ShepherdResult<()> {
        check_flags("resize", flags)?;

        ClusterCommand::vdi_resize(&vol.name, capacity)
            .with_pool_host(pool)
            .run(&self.executor)
            .map(|_| ())
    }
}
