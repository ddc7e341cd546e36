//! Firewall groups and rules.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// Firewall group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallGroup {
    /// Group ID.
    pub id: String,
    /// Description.
    pub description: String,
    /// Creation date.
    pub date_created: String,
    /// Last modification date.
    pub date_modified: String,
    /// Instances using the group.
    pub instance_count: u32,
    /// Rules in the group.
    pub rule_count: u32,
    /// Maximum rules allowed.
    pub max_rule_count: u32,
}

/// Body of a firewall group create or update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FirewallGroupRequest {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Firewall rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallRule {
    /// Rule ID.
    pub id: u32,
    /// `v4` or `v6`.
    pub ip_type: String,
    /// `accept` or `drop`.
    pub action: String,
    /// Protocol.
    pub protocol: String,
    /// Port or port range.
    pub port: String,
    /// Source subnet.
    pub subnet: String,
    /// Source subnet size.
    pub subnet_size: u32,
    /// Predefined source, e.g. `cloudflare`.
    pub source: String,
    /// User notes.
    pub notes: String,
}

/// Body of a firewall rule create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FirewallRuleCreate {
    /// `v4` or `v6`.
    pub ip_type: String,
    /// Protocol.
    pub protocol: String,
    /// Source subnet.
    pub subnet: String,
    /// Source subnet size.
    pub subnet_size: u32,
    /// Port or port range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Predefined source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// User notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// List firewall groups.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_firewall_groups(
        &self,
        options: &ListOptions,
    ) -> Result<Page<FirewallGroup>, ApiError> {
        self.list("/firewalls", "firewall_groups", options).await
    }

    /// Get a firewall group.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_firewall_group(&self, id: &str) -> Result<FirewallGroup, ApiError> {
        self.fetch(&format!("/firewalls/{}", segment(id)), "firewall_group").await
    }

    /// Create a firewall group.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_firewall_group(
        &self,
        request: &FirewallGroupRequest,
    ) -> Result<FirewallGroup, ApiError> {
        self.submit(Method::Post, "/firewalls", request, "firewall_group")
            .await
    }

    /// Update a firewall group.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_firewall_group(
        &self,
        id: &str,
        request: &FirewallGroupRequest,
    ) -> Result<(), ApiError> {
        self.submit_empty(Method::Put, &format!("/firewalls/{}", segment(id)), request)
            .await
    }

    /// Delete a firewall group.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_firewall_group(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/firewalls/{}", segment(id))).await
    }

    /// List rules in a firewall group.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_firewall_rules(
        &self,
        group_id: &str,
        options: &ListOptions,
    ) -> Result<Page<FirewallRule>, ApiError> {
        self.list(&format!("/firewalls/{}/rules", segment(group_id)), "firewall_rules", options)
            .await
    }

    /// Get a firewall rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_firewall_rule(
        &self,
        group_id: &str,
        rule_id: &str,
    ) -> Result<FirewallRule, ApiError> {
        self.fetch(
            &format!("/firewalls/{}/rules/{}", segment(group_id), segment(rule_id)),
            "firewall_rule",
        )
        .await
    }

    /// Create a firewall rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_firewall_rule(
        &self,
        group_id: &str,
        request: &FirewallRuleCreate,
    ) -> Result<FirewallRule, ApiError> {
        self.submit(
            Method::Post,
            &format!("/firewalls/{}/rules", segment(group_id)),
            request,
            "firewall_rule",
        )
        .await
    }

    /// Delete a firewall rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_firewall_rule(&self, group_id: &str, rule_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/firewalls/{}/rules/{}", segment(group_id), segment(rule_id)))
            .await
    }
}
