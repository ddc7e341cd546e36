//! DNS domains and records.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// DNS domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    /// Domain name.
    pub domain: String,
    /// Creation date.
    pub date_created: String,
    /// `enabled` or `disabled`.
    pub dns_sec: String,
}

/// Body of a domain create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainCreate {
    /// Domain name.
    pub domain: String,
    /// Default IP for the apex record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_sec: Option<String>,
}

/// DNS record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRecord {
    /// Record ID.
    pub id: String,
    /// Record type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Record name.
    pub name: String,
    /// Record data.
    pub data: String,
    /// Priority, used by MX and SRV records.
    pub priority: i32,
    /// Time to live in seconds.
    pub ttl: u32,
}

/// Body of a record create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordCreate {
    /// Record name.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Record data.
    pub data: String,
    /// Time to live in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// Body of a record update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// New time to live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// New priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl<T: Transport> ApiClient<T> {
    /// List DNS domains.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_domains(&self, options: &ListOptions) -> Result<Page<Domain>, ApiError> {
        self.list("/domains", "domains", options).await
    }

    /// Get a DNS domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_domain(&self, domain: &str) -> Result<Domain, ApiError> {
        self.fetch(&format!("/domains/{}", segment(domain)), "domain").await
    }

    /// Create a DNS domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_domain(&self, request: &DomainCreate) -> Result<Domain, ApiError> {
        self.submit(Method::Post, "/domains", request, "domain").await
    }

    /// Delete a DNS domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_domain(&self, domain: &str) -> Result<(), ApiError> {
        self.delete(&format!("/domains/{}", segment(domain))).await
    }

    /// List records in a domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_records(
        &self,
        domain: &str,
        options: &ListOptions,
    ) -> Result<Page<DomainRecord>, ApiError> {
        self.list(&format!("/domains/{}/records", segment(domain)), "records", options)
            .await
    }

    /// Get a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_record(&self, domain: &str, id: &str) -> Result<DomainRecord, ApiError> {
        self.fetch(&format!("/domains/{}/records/{}", segment(domain), segment(id)), "record")
            .await
    }

    /// Create a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_record(
        &self,
        domain: &str,
        request: &RecordCreate,
    ) -> Result<DomainRecord, ApiError> {
        self.submit(
            Method::Post,
            &format!("/domains/{}/records", segment(domain)),
            request,
            "record",
        )
        .await
    }

    /// Update a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_record(
        &self,
        domain: &str,
        id: &str,
        request: &RecordUpdate,
    ) -> Result<(), ApiError> {
        self.submit_empty(
            Method::Patch,
            &format!("/domains/{}/records/{}", segment(domain), segment(id)),
            request,
        )
        .await
    }

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_record(&self, domain: &str, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/domains/{}/records/{}", segment(domain), segment(id))).await
    }
}
