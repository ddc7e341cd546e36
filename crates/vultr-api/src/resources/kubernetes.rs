//! Vultr Kubernetes Engine clusters.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// Kubernetes cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    /// Cluster ID.
    pub id: String,
    /// User label.
    pub label: String,
    /// Creation date.
    pub date_created: String,
    /// Pod subnet.
    pub cluster_subnet: String,
    /// Service subnet.
    pub service_subnet: String,
    /// Control plane IP.
    pub ip: String,
    /// Control plane endpoint.
    pub endpoint: String,
    /// Kubernetes version.
    pub version: String,
    /// Region ID.
    pub region: String,
    /// Cluster status.
    pub status: String,
    /// Node pools.
    pub node_pools: Vec<NodePool>,
}

/// Pool of identically-sized worker nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePool {
    /// Pool ID.
    pub id: String,
    /// Creation date.
    pub date_created: String,
    /// Last update date.
    pub date_updated: String,
    /// User label.
    pub label: String,
    /// Tag applied to nodes.
    pub tag: String,
    /// Plan ID of each node.
    pub plan: String,
    /// Pool status.
    pub status: String,
    /// Desired node count.
    pub node_quantity: u32,
    /// Autoscaler lower bound.
    pub min_nodes: u32,
    /// Autoscaler upper bound.
    pub max_nodes: u32,
    /// Whether the autoscaler is enabled.
    pub auto_scaler: bool,
    /// Nodes in the pool.
    pub nodes: Vec<Node>,
}

/// Worker node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    /// Node ID.
    pub id: String,
    /// Node label.
    pub label: String,
    /// Creation date.
    pub date_created: String,
    /// Node status.
    pub status: String,
}

/// Body of a cluster create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusterCreate {
    /// User label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Region ID.
    pub region: String,
    /// Kubernetes version.
    pub version: String,
    /// Initial node pools.
    pub node_pools: Vec<NodePoolCreate>,
}

/// Node pool definition inside a cluster create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodePoolCreate {
    /// Node count.
    pub node_quantity: u32,
    /// Pool label.
    pub label: String,
    /// Plan ID.
    pub plan: String,
}

impl<T: Transport> ApiClient<T> {
    /// List Kubernetes clusters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_clusters(&self, options: &ListOptions) -> Result<Page<Cluster>, ApiError> {
        self.list("/kubernetes/clusters", "vke_clusters", options)
            .await
    }

    /// Get a Kubernetes cluster.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_cluster(&self, id: &str) -> Result<Cluster, ApiError> {
        self.fetch(&format!("/kubernetes/clusters/{}", segment(id)), "vke_cluster")
            .await
    }

    /// Create a Kubernetes cluster.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_cluster(&self, request: &ClusterCreate) -> Result<Cluster, ApiError> {
        self.submit(Method::Post, "/kubernetes/clusters", request, "vke_cluster")
            .await
    }

    /// Delete a Kubernetes cluster.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_cluster(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/kubernetes/clusters/{}", segment(id))).await
    }
}
