//! CDN pull zones.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::Transport;

/// CDN pull zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullZone {
    /// Zone ID.
    pub id: String,
    /// Creation date.
    pub date_created: String,
    /// Zone status.
    pub status: String,
    /// User label.
    pub label: String,
    /// `http` or `https`.
    pub origin_scheme: String,
    /// Origin domain.
    pub origin_domain: String,
    /// CDN hostname.
    pub cdn_url: String,
    /// Cached bytes.
    pub cache_size: u64,
    /// Requests served.
    pub requests: u64,
    /// Inbound bytes.
    pub in_bytes: u64,
    /// Outbound bytes.
    pub out_bytes: u64,
    /// Date of the last purge.
    pub date_purged: String,
    /// Regions serving the zone.
    pub regions: Vec<String>,
}

impl<T: Transport> ApiClient<T> {
    /// List CDN pull zones.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_pull_zones(&self, options: &ListOptions) -> Result<Page<PullZone>, ApiError> {
        self.list("/cdns/pull-zones", "pull_zones", options).await
    }

    /// Get a CDN pull zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_pull_zone(&self, id: &str) -> Result<PullZone, ApiError> {
        self.fetch(&format!("/cdns/pull-zones/{}", segment(id)), "pull_zone").await
    }

    /// Delete a CDN pull zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_pull_zone(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/cdns/pull-zones/{}", segment(id))).await
    }

    /// Purge the cache of a CDN pull zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn purge_pull_zone(&self, id: &str) -> Result<(), ApiError> {
        self.action(&format!("/cdns/pull-zones/{}/purge", segment(id))).await
    }
}
