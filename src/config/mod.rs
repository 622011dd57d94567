use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use thiserror::Error;
use crate::archive::{Archive, DEFAULT_REPORT, DEFAULT_UNITS};

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration key has an unusable value.
    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Settings read from the rc file
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory results files are written to (None = current directory)
    pub output_dir: Option<PathBuf>,
    pub archive_projects: Vec<String>,
    pub archive_report: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            archive_projects: DEFAULT_UNITS.iter().map(|s| s.to_string()).collect(),
            archive_report: DEFAULT_REPORT.to_string(),
        }
    }
}

impl Config {
    /// Get the configuration file path (`~/.triad/rc`)
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Failed to determine home directory")?;
        Ok(home.join(".triad").join("rc"))
    }

    /// Load from the rc file, or defaults if there is none
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, base)
    }

    /// Parse `key=value` lines; relative paths resolve against `base`
    pub fn parse(content: &str, base: &Path) -> Result<Self> {
        let mut config = Self::default();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                log::warn!("config line {}: expected key=value, ignoring '{}'", line_num + 1, line);
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "output.dir" => {
                    let path = PathBuf::from(value);
                    config.output_dir = Some(if path.is_relative() { base.join(path) } else { path });
                }
                "archive.projects" => {
                    let labels: Vec<String> = value
                        .split(',')
                        .map(|s| s.trim())
                        .filter(|s| !s.is_empty())
                        .map(|s| s.to_string())
                        .collect();
                    if labels.is_empty() {
                        return Err(invalid(key, "at least one project label is required").into());
                    }
                    config.archive_projects = labels;
                }
                "archive.report" => {
                    if value.is_empty() {
                        return Err(invalid(key, "report file name cannot be empty").into());
                    }
                    config.archive_report = value.to_string();
                }
                other => log::warn!("unknown config key '{}'", other),
            }
        }

        Ok(config)
    }

    /// Where a results file named `file_name` should go.
    /// An explicit path wins over `output.dir`.
    pub fn results_path(&self, explicit: Option<&Path>, file_name: &str) -> PathBuf {
        match (explicit, &self.output_dir) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(dir)) => dir.join(file_name),
            (None, None) => PathBuf::from(file_name),
        }
    }

    pub fn archive(&self, root: &Path) -> Result<Archive> {
        Archive::new(root, &self.archive_projects, &self.archive_report)
            .context("Invalid archive configuration")
    }
}
