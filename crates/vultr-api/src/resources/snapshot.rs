//! Instance snapshots.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// Snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Snapshot ID.
    pub id: String,
    /// Creation date.
    pub date_created: String,
    /// Description.
    pub description: String,
    /// Size in bytes.
    pub size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// Status.
    pub status: String,
    /// Operating system ID.
    pub os_id: u32,
    /// Application ID.
    pub app_id: u32,
}

/// Body of a snapshot create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotCreate {
    /// Instance to snapshot.
    pub instance_id: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of a snapshot create-from-URL request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotFromUrl {
    /// Raw image URL.
    pub url: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of a snapshot update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotUpdate {
    /// New description.
    pub description: String,
}

impl<T: Transport> ApiClient<T> {
    /// List snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_snapshots(&self, options: &ListOptions) -> Result<Page<Snapshot>, ApiError> {
        self.list("/snapshots", "snapshots", options).await
    }

    /// Get a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_snapshot(&self, id: &str) -> Result<Snapshot, ApiError> {
        self.fetch(&format!("/snapshots/{}", segment(id)), "snapshot").await
    }

    /// Snapshot an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_snapshot(&self, request: &SnapshotCreate) -> Result<Snapshot, ApiError> {
        self.submit(Method::Post, "/snapshots", request, "snapshot")
            .await
    }

    /// Create a snapshot from a raw image URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_snapshot_from_url(
        &self,
        request: &SnapshotFromUrl,
    ) -> Result<Snapshot, ApiError> {
        self.submit(Method::Post, "/snapshots/create-from-url", request, "snapshot")
            .await
    }

    /// Update a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_snapshot(&self, id: &str, request: &SnapshotUpdate) -> Result<(), ApiError> {
        self.submit_empty(Method::Put, &format!("/snapshots/{}", segment(id)), request)
            .await
    }

    /// Delete a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_snapshot(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/snapshots/{}", segment(id))).await
    }
}
