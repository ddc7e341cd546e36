//! Public catalogue endpoints: applications, operating systems, plans, regions.
//!
//! None of these require authentication.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::Transport;

/// One-click or marketplace application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    /// Application ID.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Short name.
    pub short_name: String,
    /// Name shown during deployment.
    pub deploy_name: String,
    /// `one-click` or `marketplace`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Vendor name.
    pub vendor: String,
    /// Marketplace image ID.
    pub image_id: String,
}

/// Operating system image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingSystem {
    /// OS ID.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// CPU architecture.
    pub arch: String,
    /// OS family.
    pub family: String,
}

/// Instance plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    /// Plan ID.
    pub id: String,
    /// vCPU count.
    pub vcpu_count: u32,
    /// RAM in MB.
    pub ram: u64,
    /// Disk size in GB.
    pub disk: u64,
    /// Number of disks.
    pub disk_count: u32,
    /// Monthly bandwidth in GB.
    pub bandwidth: u64,
    /// Monthly cost in USD.
    pub monthly_cost: f64,
    /// Plan type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Regions where the plan is available.
    pub locations: Vec<String>,
}

/// Datacenter region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    /// Region ID, e.g. `ewr`.
    pub id: String,
    /// City name.
    pub city: String,
    /// Two-letter country code.
    pub country: String,
    /// Continent name.
    pub continent: String,
    /// Features available in the region.
    pub options: Vec<String>,
}

impl<T: Transport> ApiClient<T> {
    /// List applications.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_applications(
        &self,
        options: &ListOptions,
    ) -> Result<Page<Application>, ApiError> {
        self.list("/applications", "applications", options).await
    }

    /// List operating systems.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_os(&self, options: &ListOptions) -> Result<Page<OperatingSystem>, ApiError> {
        self.list("/os", "os", options).await
    }

    /// List plans.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_plans(&self, options: &ListOptions) -> Result<Page<Plan>, ApiError> {
        self.list("/plans", "plans", options).await
    }

    /// List regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_regions(&self, options: &ListOptions) -> Result<Page<Region>, ApiError> {
        self.list("/regions", "regions", options).await
    }
}
