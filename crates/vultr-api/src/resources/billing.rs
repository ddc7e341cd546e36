//! Billing history and invoices.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::Transport;

/// Billing history entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingEntry {
    /// Entry ID.
    pub id: u64,
    /// Entry date.
    pub date: String,
    /// `invoice` or `credit`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Entry description.
    pub description: String,
    /// Amount in USD.
    pub amount: f64,
    /// Balance after the entry.
    pub balance: f64,
}

/// Invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// Invoice ID.
    pub id: u64,
    /// Invoice date.
    pub date: String,
    /// Invoice description.
    pub description: String,
    /// Amount in USD.
    pub amount: f64,
    /// Balance after the invoice.
    pub balance: f64,
}

impl<T: Transport> ApiClient<T> {
    /// List billing history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_billing_history(
        &self,
        options: &ListOptions,
    ) -> Result<Page<BillingEntry>, ApiError> {
        self.list("/billing/history", "billing_history", options).await
    }

    /// List invoices.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_invoices(&self, options: &ListOptions) -> Result<Page<Invoice>, ApiError> {
        self.list("/billing/invoices", "billing_invoices", options).await
    }
}
