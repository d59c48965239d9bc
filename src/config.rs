//! Configuration handling for the editor

use crate::state::OrderStatus;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Account recorded as author when nobody is configured
pub const SYSTEM_AUDITOR: &str = "system";

/// User configuration for the editor
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    /// Name stamped into createdBy/lastModifiedBy on save
    pub auditor: Option<String>,
    /// Status preselected for new orders
    pub default_status: Option<OrderStatus>,
    /// Write order files with indentation
    pub pretty_json: Option<bool>,
}

impl EditorConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "adminix", "order-editor")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("order-editor.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: EditorConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn auditor(&self) -> &str {
        self.auditor
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(SYSTEM_AUDITOR)
    }

    pub fn pretty_json(&self) -> bool {
        self.pretty_json.unwrap_or(true)
    }
}
