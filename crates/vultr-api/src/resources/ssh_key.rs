//! SSH keys.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// SSH public key stored on the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshKey {
    /// Key ID.
    pub id: String,
    /// Creation date.
    pub date_created: String,
    /// Key name.
    pub name: String,
    /// Public key material.
    pub ssh_key: String,
}

/// Body of an SSH key create or update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SshKeyRequest {
    /// Key name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Public key material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// List SSH keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_ssh_keys(&self, options: &ListOptions) -> Result<Page<SshKey>, ApiError> {
        self.list("/ssh-keys", "ssh_keys", options).await
    }

    /// Get an SSH key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_ssh_key(&self, id: &str) -> Result<SshKey, ApiError> {
        self.fetch(&format!("/ssh-keys/{}", segment(id)), "ssh_key").await
    }

    /// Create an SSH key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_ssh_key(&self, request: &SshKeyRequest) -> Result<SshKey, ApiError> {
        self.submit(Method::Post, "/ssh-keys", request, "ssh_key").await
    }

    /// Update an SSH key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_ssh_key(&self, id: &str, request: &SshKeyRequest) -> Result<(), ApiError> {
        self.submit_empty(Method::Patch, &format!("/ssh-keys/{}", segment(id)), request)
            .await
    }

    /// Delete an SSH key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_ssh_key(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/ssh-keys/{}", segment(id))).await
    }
}
