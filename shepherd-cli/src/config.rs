//! Pool configuration loading for the Shepherd CLI.
//!
//! The pool definition (source name plus cluster hosts) lives in a JSON
//! file; flags can override or extend it.

use shepherd::StoragePool;
use std::path::Path;
use tracing::warn;

const CONFIG_FILE_JSON: &str = "pool.json";

/// Load the pool definition.
///
/// With an explicit path, a missing or malformed file is an error. Without
/// one, `pool.json` in the current directory is tried and an empty pool
/// definition is the fallback.
pub fn load_pool(path: Option<&Path>) -> anyhow::Result<StoragePool> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("failed to read config file {}: {}", path.display(), e)
            })?;
            serde_json::from_str(&content).map_err(|e| {
                anyhow::anyhow!("failed to parse config file {}: {}", path.display(), e)
            })
        }
        None => Ok(try_load_default().unwrap_or_default()),
    }
}

fn try_load_default() -> Option<StoragePool> {
    let config_path = Path::new(CONFIG_FILE_JSON);
    if !config_path.exists() {
        return None;
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            );
            return None;
        }
    };

    match serde_json::from_str::<StoragePool>(&content) {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_pool_from_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pool.json");
        let config_content =
            r#"{"source_name": "herd", "hosts": [{"name": "sheep01", "port": 7001}]}"#;
        fs::write(&config_path, config_content).unwrap();

        let pool = load_pool(Some(&config_path)).unwrap();
        assert_eq!(pool.source_name, "herd");
        assert_eq!(pool.hosts.len(), 1);
        assert_eq!(pool.hosts[0].name.as_deref(), Some("sheep01"));
        assert_eq!(pool.hosts[0].port, 7001);
    }

    #[test]
    fn test_load_pool_host_port_defaults_to_zero() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pool.json");
        fs::write(
            &config_path,
            r#"{"source_name": "herd", "hosts": [{"name": "sheep01"}]}"#,
        )
        .unwrap();

        let pool = load_pool(Some(&config_path)).unwrap();
        assert_eq!(pool.hosts[0].port, 0);
    }

    #[test]
    fn test_load_pool_missing_explicit_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nope.json");
        assert!(load_pool(Some(&config_path)).is_err());
    }

    #[test]
    fn test_load_pool_malformed_explicit_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pool.json");
        fs::write(&config_path, r#"{"source_name": "herd""#).unwrap();
        assert!(load_pool(Some(&config_path)).is_err());
    }
}
