//! Bare-metal servers.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::Transport;

/// Bare-metal server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BareMetal {
    /// Server ID.
    pub id: String,
    /// Operating system name.
    pub os: String,
    /// RAM description.
    pub ram: String,
    /// Disk description.
    pub disk: String,
    /// Main IPv4 address.
    pub main_ip: String,
    /// CPU count.
    pub cpu_count: u32,
    /// Region ID.
    pub region: String,
    /// Creation date.
    pub date_created: String,
    /// Server status.
    pub status: String,
    /// IPv4 netmask.
    pub netmask_v4: String,
    /// IPv4 gateway.
    pub gateway_v4: String,
    /// Plan ID.
    pub plan: String,
    /// User label.
    pub label: String,
    /// MAC address.
    pub mac_address: u64,
    /// Operating system ID.
    pub os_id: u32,
    /// Application ID.
    pub app_id: u32,
    /// Marketplace image ID.
    pub image_id: String,
    /// Tags.
    pub tags: Vec<String>,
}

impl<T: Transport> ApiClient<T> {
    /// List bare-metal servers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_bare_metal(&self, options: &ListOptions) -> Result<Page<BareMetal>, ApiError> {
        self.list("/bare-metals", "bare_metals", options).await
    }

    /// Get a bare-metal server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_bare_metal(&self, id: &str) -> Result<BareMetal, ApiError> {
        self.fetch(&format!("/bare-metals/{}", segment(id)), "bare_metal").await
    }

    /// Delete a bare-metal server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_bare_metal(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/bare-metals/{}", segment(id))).await
    }

    /// Start a bare-metal server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn start_bare_metal(&self, id: &str) -> Result<(), ApiError> {
        self.action(&format!("/bare-metals/{}/start", segment(id))).await
    }

    /// Halt a bare-metal server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn halt_bare_metal(&self, id: &str) -> Result<(), ApiError> {
        self.action(&format!("/bare-metals/{}/halt", segment(id))).await
    }

    /// Reboot a bare-metal server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn reboot_bare_metal(&self, id: &str) -> Result<(), ApiError> {
        self.action(&format!("/bare-metals/{}/reboot", segment(id))).await
    }
}
