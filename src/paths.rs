// File: ./src/paths.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Environment variable that puts config and data under one explicit directory.
pub const HOME_ENV: &str = "GASTRO_HOME";

pub struct AppPaths;

impl AppPaths {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "gastro")
    }

    fn override_root() -> Option<PathBuf> {
        std::env::var_os(HOME_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    pub fn config_dir() -> Result<PathBuf> {
        if let Some(root) = Self::override_root() {
            return Ok(root);
        }
        Self::project_dirs()
            .map(|p| p.config_dir().to_path_buf())
            .context("Could not determine a config directory")
    }

    pub fn data_dir() -> Result<PathBuf> {
        if let Some(root) = Self::override_root() {
            return Ok(root);
        }
        Self::project_dirs()
            .map(|p| p.data_dir().to_path_buf())
            .context("Could not determine a data directory")
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Log file path; the parent directory is created on demand.
    pub fn log_file() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
        Ok(dir.join("gastro.log"))
    }
}
