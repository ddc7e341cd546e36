//! Load balancers.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::Transport;

/// Load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancer {
    /// Load balancer ID.
    pub id: String,
    /// Creation date.
    pub date_created: String,
    /// Region ID.
    pub region: String,
    /// User label.
    pub label: String,
    /// Status.
    pub status: String,
    /// Public IPv4 address.
    pub ipv4: String,
    /// Public IPv6 address.
    pub ipv6: String,
    /// Attached instance IDs.
    pub instances: Vec<String>,
}

impl<T: Transport> ApiClient<T> {
    /// List load balancers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_load_balancers(
        &self,
        options: &ListOptions,
    ) -> Result<Page<LoadBalancer>, ApiError> {
        self.list("/load-balancers", "load_balancers", options).await
    }

    /// Get a load balancer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_load_balancer(&self, id: &str) -> Result<LoadBalancer, ApiError> {
        self.fetch(&format!("/load-balancers/{}", segment(id)), "load_balancer")
            .await
    }

    /// Delete a load balancer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_load_balancer(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/load-balancers/{}", segment(id))).await
    }
}
