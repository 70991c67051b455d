//! Argument-vector construction for the cluster management tool.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use shepherd_shared::{ShepherdError, ShepherdResult};

use crate::exec::CommandExecutor;
use crate::pool::StoragePool;

/// Address used when the pool definition supplies no host entry.
pub const DEFAULT_ADDRESS: &str = "localhost";

/// Well-known cluster management port, used when the pool supplies no host
/// or a host with port 0.
pub const DEFAULT_PORT: u16 = 7000;

const DEFAULT_BINARY: &str = "collie";

static CLUSTER_TOOL: OnceLock<PathBuf> = OnceLock::new();

/// Override the cluster tool binary, process-wide.
///
/// May be called at most once, before the first backend operation; the value
/// is consumed read-only thereafter.
pub fn set_cluster_tool(path: impl Into<PathBuf>) -> ShepherdResult<()> {
    CLUSTER_TOOL
        .set(path.into())
        .map_err(|_| ShepherdError::Config("cluster tool binary already configured".into()))
}

pub(crate) fn cluster_tool() -> &'static Path {
    CLUSTER_TOOL
        .get_or_init(|| PathBuf::from(DEFAULT_BINARY))
        .as_path()
}

/// One prepared invocation of the cluster tool.
#[derive(Debug, Clone)]
pub(crate) struct ClusterCommand {
    args: Vec<String>,
}

impl ClusterCommand {
    fn new<const N: usize>(args: [&str; N]) -> Self {
        ClusterCommand {
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub(crate) fn node_info() -> Self {
        Self::new(["node", "info", "-r"])
    }

    pub(crate) fn vdi_list() -> Self {
        Self::new(["vdi", "list", "-r"])
    }

    pub(crate) fn vdi_list_one(name: &str) -> Self {
        Self::new(["vdi", "list", name, "-r"])
    }

    pub(crate) fn vdi_create(name: &str, capacity: u64) -> Self {
        let mut cmd = Self::new(["vdi", "create", name]);
        cmd.args.push(capacity.to_string());
        cmd
    }

    pub(crate) fn vdi_delete(name: &str) -> Self {
        Self::new(["vdi", "delete", name])
    }

    pub(crate) fn vdi_resize(name: &str, capacity: u64) -> Self {
        let mut cmd = Self::new(["vdi", "resize", name]);
        cmd.args.push(capacity.to_string());
        cmd
    }

    /// Append the host-selection clause from the pool's first host entry,
    /// falling back to the loopback defaults. A configured port of 0 means
    /// "unset" and gets the default substituted.
    pub(crate) fn with_pool_host(mut self, pool: &StoragePool) -> Self {
        let mut address = DEFAULT_ADDRESS;
        let mut port = DEFAULT_PORT;

        if let Some(host) = pool.first_host() {
            if let Some(name) = host.name.as_deref() {
                address = name;
            }
            if host.port != 0 {
                port = host.port;
            }
        }

        self.args.push("-a".to_string());
        self.args.push(address.to_string());
        self.args.push("-p".to_string());
        self.args.push(port.to_string());
        self
    }

    #[cfg(test)]
    pub(crate) fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the command, treating any nonzero exit as a hard stop.
    pub(crate) fn run<E: CommandExecutor>(&self, executor: &E) -> ShepherdResult<String> {
        let tool = cluster_tool();
        let out = executor.run(tool, &self.args)?;
        if !out.success() {
            return Err(ShepherdError::Invocation(format!(
                "{} {} exited with code {}: {}",
                tool.display(),
                self.args.join(" "),
                out.status,
                out.diagnostic()
            )));
        }
        Ok(out.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::PoolHost;

    #[test]
    fn test_default_host_clause() {
        let pool = StoragePool::new("herd");
        let cmd = ClusterCommand::node_info().with_pool_host(&pool);
        assert_eq!(
            cmd.args(),
            ["node", "info", "-r", "-a", "localhost", "-p", "7000"]
        );
    }

    #[test]
    fn test_first_host_used_verbatim() {
        let mut pool = StoragePool::new("herd");
        pool.hosts.push(PoolHost {
            name: Some("sheep01".into()),
            port: 7001,
        });
        pool.hosts.push(PoolHost {
            name: Some("sheep02".into()),
            port: 7002,
        });
        let cmd = ClusterCommand::vdi_list().with_pool_host(&pool);
        assert_eq!(
            cmd.args(),
            ["vdi", "list", "-r", "-a", "sheep01", "-p", "7001"]
        );
    }

    #[test]
    fn test_port_zero_means_unset() {
        let mut pool = StoragePool::new("herd");
        pool.hosts.push(PoolHost {
            name: Some("sheep01".into()),
            port: 0,
        });
        let cmd = ClusterCommand::vdi_delete("vol0").with_pool_host(&pool);
        assert_eq!(
            cmd.args(),
            ["vdi", "delete", "vol0", "-a", "sheep01", "-p", "7000"]
        );
    }

    #[test]
    fn test_host_without_name_keeps_default_address() {
        let mut pool = StoragePool::new("herd");
        pool.hosts.push(PoolHost {
            name: None,
            port: 7070,
        });
        let cmd = ClusterCommand::vdi_create("vol0", 1 << 30).with_pool_host(&pool);
        assert_eq!(
            cmd.args(),
            ["vdi", "create", "vol0", "1073741824", "-a", "localhost", "-p", "7070"]
        );
    }

    #[test]
    fn test_resize_argument_shape() {
        let cmd = ClusterCommand::vdi_resize("vol0", 2097152000);
        assert_eq!(cmd.args(), ["vdi", "resize", "vol0", "2097152000"]);
    }

    #[test]
    fn test_list_one_argument_shape() {
        let cmd = ClusterCommand::vdi_list_one("vol0");
        assert_eq!(cmd.args(), ["vdi", "list", "vol0", "-r"]);
    }
}
