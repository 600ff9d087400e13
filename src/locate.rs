//! Platform directory resolution for config, logs, and temporary files.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

const ENV_CONFIG_PATH: &str = "XLSXSPLIT_CONFIG_PATH";

#[derive(Debug, Clone)]
pub struct AppDirs {
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub temp_dir: PathBuf,
}

impl AppDirs {
    pub fn discover() -> Result<Self> {
        let project = ProjectDirs::from("", "", "xlsxsplit")
            .context("could not determine platform directories")?;

        let config_dir = env::var_os(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| project.config_dir().to_path_buf());
        let logs_dir = project.data_local_dir().join("logs");
        let temp_dir = project.cache_dir().join("temp");

        Ok(Self {
            config_dir,
            logs_dir,
            temp_dir,
        })
    }

    /// Clears the temporary-files directory. Best-effort: a failure is
    /// surfaced to the debug log and otherwise ignored.
    pub fn clear_temp(&self) {
        if !self.temp_dir.exists() {
            return;
        }
        match fs::remove_dir_all(&self.temp_dir) {
            Ok(()) => tracing::debug!(path = ?self.temp_dir, "cleared temp directory"),
            Err(error) => {
                tracing::debug!(?error, path = ?self.temp_dir, "failed to clear temp directory")
            }
        }
    }
}
