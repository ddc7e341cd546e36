//! Managed databases.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::Transport;

/// Managed database cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    /// Database ID.
    pub id: String,
    /// Creation date.
    pub date_created: String,
    /// Plan ID.
    pub plan: String,
    /// Disk size in GB.
    pub plan_disk: u64,
    /// RAM in MB.
    pub plan_ram: u64,
    /// vCPU count.
    pub plan_vcpus: u32,
    /// Replica node count.
    pub plan_replicas: u32,
    /// Region ID.
    pub region: String,
    /// Engine, e.g. `pg` or `mysql`.
    pub database_engine: String,
    /// Engine version.
    pub database_engine_version: String,
    /// Cluster status.
    pub status: String,
    /// User label.
    pub label: String,
    /// Default database name.
    pub dbname: String,
    /// Connection host.
    pub host: String,
    /// Connection port.
    pub port: String,
    /// Default user.
    pub user: String,
}

impl<T: Transport> ApiClient<T> {
    /// List managed databases.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_databases(&self, options: &ListOptions) -> Result<Page<Database>, ApiError> {
        self.list("/databases", "databases", options).await
    }

    /// Get a managed database.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_database(&self, id: &str) -> Result<Database, ApiError> {
        self.fetch(&format!("/databases/{}", segment(id)), "database").await
    }

    /// Delete a managed database.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_database(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/databases/{}", segment(id))).await
    }
}
