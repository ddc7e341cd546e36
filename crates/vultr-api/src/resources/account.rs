//! Account details and bandwidth usage.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

/// Account summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Account holder name.
    pub name: String,
    /// Account e-mail address.
    pub email: String,
    /// Permissions granted to the authenticated user.
    pub acls: Vec<String>,
    /// Current balance in USD. Negative values are credit.
    pub balance: f64,
    /// Charges accrued since the last invoice.
    pub pending_charges: f64,
    /// Date of the last payment.
    pub last_payment_date: String,
    /// Amount of the last payment.
    pub last_payment_amount: f64,
}

/// Bandwidth usage for the previous, current, and projected month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountBandwidth {
    /// Usage over the previous month.
    pub previous_month: BandwidthPeriod,
    /// Usage so far this month.
    pub current_month_to_date: BandwidthPeriod,
    /// Projected usage for this month.
    pub current_month_projected: BandwidthPeriod,
}

/// Usage over one billing period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandwidthPeriod {
    /// Period start, epoch seconds.
    pub timestamp_start: String,
    /// Period end, epoch seconds.
    pub timestamp_end: String,
    /// Inbound traffic in GB.
    pub gb_in: u64,
    /// Outbound traffic in GB.
    pub gb_out: u64,
    /// Instance hours billed in the period.
    pub total_instance_hours: u64,
    /// Instances billed in the period.
    pub total_instance_count: u64,
    /// Bandwidth credits granted by instances.
    pub instance_bandwidth_credits: u64,
    /// Free bandwidth credits.
    pub free_bandwidth_credits: u64,
    /// Purchased bandwidth credits.
    pub purchased_bandwidth_credits: u64,
    /// Overage in GB.
    pub overage: f64,
    /// Cost per overage GB.
    pub overage_unit_cost: f64,
    /// Total overage cost.
    pub overage_cost: f64,
}

impl<T: Transport> ApiClient<T> {
    /// Get the account summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_account(&self) -> Result<Account, ApiError> {
        self.fetch("/account", "account").await
    }

    /// Get account bandwidth usage.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_account_bandwidth(&self) -> Result<AccountBandwidth, ApiError> {
        self.fetch("/account/bandwidth", "bandwidth").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeTransport;
    use crate::transport::Method;
    use serde_json::json;

    #[tokio::test]
    async fn bandwidth_decodes_periods() {
        let client = ApiClient::new(FakeTransport::new().respond(
            Method::Get,
            "/account/bandwidth",
            200,
            json!({"bandwidth": {
                "previous_month": {"timestamp_start": "1617235200", "gb_in": 3},
                "current_month_to_date": {"gb_out": 7}
            }}),
        ));
        let bandwidth = client.get_account_bandwidth().await.expect("bandwidth");
        assert_eq!(bandwidth.previous_month.gb_in, 3);
        assert_eq!(bandwidth.current_month_to_date.gb_out, 7);
    }
}
