//! Automatic instance backups.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::Transport;

/// Backup of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backup {
    /// Backup ID.
    pub id: String,
    /// Creation date.
    pub date_created: String,
    /// User-supplied description.
    pub description: String,
    /// Size in bytes.
    pub size: u64,
    /// Backup status.
    pub status: String,
}

impl<T: Transport> ApiClient<T> {
    /// List backups.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_backups(&self, options: &ListOptions) -> Result<Page<Backup>, ApiError> {
        self.list("/backups", "backups", options).await
    }

    /// Get a backup.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_backup(&self, id: &str) -> Result<Backup, ApiError> {
        self.fetch(&format!("/backups/{}", segment(id)), "backup").await
    }
}
