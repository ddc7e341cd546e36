//! S3-compatible object storage subscriptions.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// Object storage subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectStorage {
    /// Subscription ID.
    pub id: String,
    /// Creation date.
    pub date_created: String,
    /// Cluster ID.
    pub cluster_id: u32,
    /// Region ID.
    pub region: String,
    /// Location name.
    pub location: String,
    /// User label.
    pub label: String,
    /// Status.
    pub status: String,
    /// S3 endpoint hostname.
    pub s3_hostname: String,
    /// S3 access key.
    pub s3_access_key: String,
    /// S3 secret key.
    pub s3_secret_key: String,
}

/// Body of an object storage create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectStorageCreate {
    /// Cluster ID.
    pub cluster_id: u32,
    /// User label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// List object storage subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_object_storage(
        &self,
        options: &ListOptions,
    ) -> Result<Page<ObjectStorage>, ApiError> {
        self.list("/object-storage", "object_storages", options).await
    }

    /// Get an object storage subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_object_storage(&self, id: &str) -> Result<ObjectStorage, ApiError> {
        self.fetch(&format!("/object-storage/{}", segment(id)), "object_storage")
            .await
    }

    /// Create an object storage subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_object_storage(
        &self,
        request: &ObjectStorageCreate,
    ) -> Result<ObjectStorage, ApiError> {
        self.submit(Method::Post, "/object-storage", request, "object_storage")
            .await
    }

    /// Delete an object storage subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_object_storage(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/object-storage/{}", segment(id))).await
    }
}
