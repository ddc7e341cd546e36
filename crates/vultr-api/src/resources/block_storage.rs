//! Block storage volumes.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// Block storage volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockStorage {
    /// Volume ID.
    pub id: String,
    /// Region ID.
    pub region: String,
    /// Monthly cost in USD.
    pub cost: f64,
    /// Volume status.
    pub status: String,
    /// Size in GB.
    pub size_gb: u64,
    /// Creation date.
    pub date_created: String,
    /// Instance the volume is attached to, empty when detached.
    pub attached_to_instance: String,
    /// User label.
    pub label: String,
    /// Mount ID used inside the instance.
    pub mount_id: String,
    /// `high_perf` or `storage_opt`.
    pub block_type: String,
}

/// Body of a block storage create request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockStorageCreate {
    /// Region ID.
    pub region: String,
    /// Size in GB.
    pub size_gb: u64,
    /// User label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Storage type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
}

/// Body of a block storage update request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockStorageUpdate {
    /// New label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New size in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_gb: Option<u64>,
}

#[derive(Serialize)]
struct Attach<'a> {
    instance_id: &'a str,
    live: bool,
}

#[derive(Serialize)]
struct Detach {
    live: bool,
}

impl<T: Transport> ApiClient<T> {
    /// List block storage volumes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_block_storage(
        &self,
        options: &ListOptions,
    ) -> Result<Page<BlockStorage>, ApiError> {
        self.list("/blocks", "blocks", options).await
    }

    /// Get a block storage volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_block_storage(&self, id: &str) -> Result<BlockStorage, ApiError> {
        self.fetch(&format!("/blocks/{}", segment(id)), "block").await
    }

    /// Create a block storage volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_block_storage(
        &self,
        request: &BlockStorageCreate,
    ) -> Result<BlockStorage, ApiError> {
        self.submit(Method::Post, "/blocks", request, "block").await
    }

    /// Update a block storage volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_block_storage(
        &self,
        id: &str,
        request: &BlockStorageUpdate,
    ) -> Result<(), ApiError> {
        self.submit_empty(Method::Patch, &format!("/blocks/{}", segment(id)), request)
            .await
    }

    /// Delete a block storage volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_block_storage(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/blocks/{}", segment(id))).await
    }

    /// Attach a volume to an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn attach_block_storage(
        &self,
        id: &str,
        instance_id: &str,
        live: bool,
    ) -> Result<(), ApiError> {
        let body = Attach { instance_id, live };
        self.submit_empty(Method::Post, &format!("/blocks/{}/attach", segment(id)), &body)
            .await
    }

    /// Detach a volume from its instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn detach_block_storage(&self, id: &str, live: bool) -> Result<(), ApiError> {
        self.submit_empty(Method::Post, &format!("/blocks/{}/detach", segment(id)), &Detach { live })
            .await
    }
}
