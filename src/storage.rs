//! JSON document holding the order being edited

use crate::state::Order;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An order persisted as a JSON file
#[derive(Debug, Clone)]
pub struct OrderDocument {
    path: PathBuf,
    pretty: bool,
}

impl OrderDocument {
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the order; a missing file is a new, empty record
    pub fn load(&self) -> Result<Order> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "No order file, starting a new record");
            return Ok(Order::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let order: Order = serde_json::from_str(&content)
            .with_context(|| format!("invalid order JSON in {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), id = ?order.id, "Loaded order");
        Ok(order)
    }

    pub fn save(&self, order: &Order) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = if self.pretty {
            serde_json::to_string_pretty(order)?
        } else {
            serde_json::to_string(order)?
        };
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), id = ?order.id, "Saved order");
        Ok(())
    }
}
