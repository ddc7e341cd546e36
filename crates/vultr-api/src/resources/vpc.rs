//! Virtual private clouds.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// VPC network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vpc {
    /// VPC ID.
    pub id: String,
    /// Region ID.
    pub region: String,
    /// Description.
    pub description: String,
    /// IPv4 subnet.
    pub v4_subnet: String,
    /// IPv4 subnet mask length.
    pub v4_subnet_mask: u32,
    /// Creation date.
    pub date_created: String,
}

/// Body of a VPC create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VpcCreate {
    /// Region ID.
    pub region: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// IPv4 subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v4_subnet: Option<String>,
    /// IPv4 subnet mask length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v4_subnet_mask: Option<u32>,
}

/// Body of a VPC update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VpcUpdate {
    /// New description.
    pub description: String,
}

impl<T: Transport> ApiClient<T> {
    /// List VPCs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_vpcs(&self, options: &ListOptions) -> Result<Page<Vpc>, ApiError> {
        self.list("/vpcs", "vpcs", options).await
    }

    /// Get a VPC.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_vpc(&self, id: &str) -> Result<Vpc, ApiError> {
        self.fetch(&format!("/vpcs/{}", segment(id)), "vpc").await
    }

    /// Create a VPC.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_vpc(&self, request: &VpcCreate) -> Result<Vpc, ApiError> {
        self.submit(Method::Post, "/vpcs", request, "vpc").await
    }

    /// Update a VPC.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_vpc(&self, id: &str, request: &VpcUpdate) -> Result<(), ApiError> {
        self.submit_empty(Method::Put, &format!("/vpcs/{}", segment(id)), request)
            .await
    }

    /// Delete a VPC.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_vpc(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/vpcs/{}", segment(id))).await
    }
}
