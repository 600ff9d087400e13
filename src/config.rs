use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "xlsxsplit.toml";

const ENV_LOGS_LEVEL: &str = "XLSXSPLIT_LOGS_LEVEL";
const ENV_LOGS_REPORT_CALLER: &str = "XLSXSPLIT_LOGS_REPORT_CALLER";

const DEFAULT_LOGS_LEVEL: &str = "info";

/// Application configuration, constructed once at startup and passed down
/// explicitly. A missing config file means defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    /// Log level filter for the rotating log file.
    pub level: String,
    /// Include source file and line number in log records.
    pub report_caller: bool,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOGS_LEVEL.to_string(),
            report_caller: false,
        }
    }
}

impl AppConfig {
    /// Loads `xlsxsplit.toml` from `config_dir`, then applies `XLSXSPLIT_*`
    /// environment overrides on top.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {:?}", path))?;
            toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file {:?}", path))?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(level) = env::var(ENV_LOGS_LEVEL)
            && !level.trim().is_empty()
        {
            self.logs.level = level.trim().to_string();
        }
        if let Ok(raw) = env::var(ENV_LOGS_REPORT_CALLER)
            && let Ok(flag) = raw.trim().parse::<bool>()
        {
            self.logs.report_caller = flag;
        }
    }
}
