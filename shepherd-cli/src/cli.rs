//! CLI definition and argument parsing for shepherd-cli.
//! This module contains the main CLI structure, subcommands and the global
//! flags shared by every command.

use clap::{Args, Parser, Subcommand};
use shepherd::StoragePool;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shepherd", author, version, about = "Shepherd storage CLI")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
#[non_exhaustive]
pub enum Commands {
    /// Show cluster capacity and usage for the pool
    Info(crate::commands::info::InfoArgs),

    /// List volumes in the pool
    #[command(visible_alias = "ls")]
    List(crate::commands::list::ListArgs),

    /// Show one volume's size and usage
    Show(crate::commands::show::ShowArgs),

    /// Create a new volume
    Create(crate::commands::create::CreateArgs),

    /// Delete a volume
    #[command(visible_alias = "rm")]
    Delete(crate::commands::delete::DeleteArgs),

    /// Resize a volume to a new capacity
    Resize(crate::commands::resize::ResizeArgs),
}

// ============================================================================
// GLOBAL FLAGS
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct GlobalFlags {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Pool configuration file
    #[arg(long, global = true, env = "SHEPHERD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pool source name (namespace prefix for volume keys)
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Cluster host to connect to
    #[arg(short = 'a', long, global = true)]
    pub address: Option<String>,

    /// Cluster management port
    #[arg(short = 'p', long, global = true)]
    pub port: Option<u16>,

    /// Path to the cluster management tool binary
    #[arg(long, global = true, value_name = "PATH", env = "SHEPHERD_TOOL")]
    pub tool: Option<PathBuf>,
}

impl GlobalFlags {
    /// Build the pool definition from the config file, then apply flag
    /// overrides on top.
    pub fn load_pool(&self) -> anyhow::Result<StoragePool> {
        let mut pool = crate::config::load_pool(self.config.as_deref())?;

        if let Some(source) = &self.source {
            pool.source_name = source.clone();
        }
        if self.address.is_some() || self.port.is_some() {
            let host = shepherd::PoolHost {
                name: self.address.clone(),
                port: self.port.unwrap_or(0),
            };
            pool.hosts.insert(0, host);
        }

        if pool.source_name.is_empty() {
            anyhow::bail!("no pool source name; pass --source or set it in the config file");
        }

        Ok(pool)
    }
}

/// Parse a capacity argument: plain bytes, or with a K/M/G/T suffix
/// (powers of 1024).
pub fn parse_capacity(raw: &str) -> anyhow::Result<u64> {
    let raw = raw.trim();
    let (digits, shift) = match raw.chars().last() {
        Some('K') | Some('k') => (&raw[..raw.len() - 1], 10),
        Some('M') | Some('m') => (&raw[..raw.len() - 1], 20),
        Some('G') | Some('g') => (&raw[..raw.len() - 1], 30),
        Some('T') | Some('t') => (&raw[..raw.len() - 1], 40),
        _ => (raw, 0),
    };
    let value: u64 = digits
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid capacity '{}'", raw))?;
    value
        .checked_shl(shift)
        .filter(|_| value.leading_zeros() >= shift)
        .ok_or_else(|| anyhow::anyhow!("capacity '{}' overflows", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_capacity_plain_bytes() {
        assert_eq!(parse_capacity("2097152000").unwrap(), 2097152000);
    }

    #[test]
    fn test_parse_capacity_suffixes() {
        assert_eq!(parse_capacity("4K").unwrap(), 4096);
        assert_eq!(parse_capacity("10M").unwrap(), 10 * 1024 * 1024);
        assert_eq!(parse_capacity("2g").unwrap(), 2 * 1024 * 1024 * 1024);
        assert_eq!(parse_capacity("1T").unwrap(), 1_u64 << 40);
    }

    #[test]
    fn test_parse_capacity_rejects_garbage() {
        assert!(parse_capacity("").is_err());
        assert!(parse_capacity("G").is_err());
        assert!(parse_capacity("ten").is_err());
        assert!(parse_capacity("-5M").is_err());
    }

    #[test]
    fn test_parse_capacity_overflow() {
        assert!(parse_capacity("18446744073709551615K").is_err());
    }
}
