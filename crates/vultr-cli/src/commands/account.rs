//! `account` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::account::{Account, AccountBandwidth, BandwidthPeriod};

use crate::base::ExecutionBase;
use crate::error::CliError;
use crate::output::{Detail, DetailView, Row, blank, cells, epoch_date, list, money};

/// Account subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum AccountCommands {
    /// Show account information.
    #[command(visible_alias = "get")]
    Info,

    /// Show account bandwidth usage.
    Bandwidth,
}

impl AccountCommands {
    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        let client = base.client();
        match self {
            Self::Info => {
                let account = base
                    .call("error retrieving account information", client.get_account())
                    .await?;
                base.render(&DetailView::new(account))
            }
            Self::Bandwidth => {
                let bandwidth = base
                    .call(
                        "error retrieving account bandwidth",
                        client.get_account_bandwidth(),
                    )
                    .await?;
                base.render(&DetailView::new(bandwidth))
            }
        }
    }
}

impl Detail for Account {
    const SINGULAR: &'static str = "account";

    fn detail_rows(&self) -> Vec<Row> {
        vec![
            cells!["NAME", self.name],
            cells!["EMAIL", self.email],
            cells!["ACLS", list(&self.acls)],
            blank(),
            cells!["BILLING"],
            cells!["BALANCE", money(self.balance)],
            cells!["PENDING CHARGES", money(self.pending_charges)],
            cells!["LAST PAYMENT DATE", self.last_payment_date],
            cells!["LAST PAYMENT AMOUNT", money(self.last_payment_amount)],
        ]
    }
}

impl Detail for AccountBandwidth {
    const SINGULAR: &'static str = "bandwidth";

    fn detail_rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (heading, period) in [
            ("PREVIOUS MONTH", &self.previous_month),
            ("CURRENT MONTH TO DATE", &self.current_month_to_date),
            ("CURRENT MONTH PROJECTED", &self.current_month_projected),
        ] {
            if !rows.is_empty() {
                rows.push(blank());
            }
            rows.push(cells![heading]);
            rows.extend(period_rows(period));
        }
        rows
    }
}

fn period_rows(period: &BandwidthPeriod) -> Vec<Row> {
    vec![
        cells!["START", epoch_date(&period.timestamp_start)],
        cells!["END", epoch_date(&period.timestamp_end)],
        cells!["GB IN", period.gb_in],
        cells!["GB OUT", period.gb_out],
        cells!["TOTAL INSTANCE HOURS", period.total_instance_hours],
        cells!["TOTAL INSTANCE COUNT", period.total_instance_count],
        cells!["INSTANCE BANDWIDTH CREDITS", period.instance_bandwidth_credits],
        cells!["FREE BANDWIDTH CREDITS", period.free_bandwidth_credits],
        cells!["PURCHASED BANDWIDTH CREDITS", period.purchased_bandwidth_credits],
        cells!["OVERAGE", money(period.overage)],
        cells!["OVERAGE UNIT COST", money(period.overage_unit_cost)],
        cells!["OVERAGE COST", money(period.overage_cost)],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_rows_format_money() {
        let account = Account {
            name: "Ada".into(),
            balance: -12.5,
            pending_charges: 3.0,
            ..Account::default()
        };
        let rows = account.detail_rows();
        assert!(rows.contains(&cells!["BALANCE", "-12.50"]));
        assert!(rows.contains(&cells!["PENDING CHARGES", "3.00"]));
    }

    #[test]
    fn bandwidth_rows_have_one_section_per_period() {
        let bandwidth = AccountBandwidth {
            previous_month: BandwidthPeriod {
                timestamp_start: "1609459200".into(),
                ..BandwidthPeriod::default()
            },
            ..AccountBandwidth::default()
        };
        let rows = bandwidth.detail_rows();

        let headings: Vec<_> = rows.iter().filter(|r| r.len() == 1).collect();
        assert_eq!(headings.len(), 3);
        assert_eq!(rows.iter().filter(|r| r.is_empty()).count(), 2);
        assert_eq!(rows[1], cells!["START", "2021-01-01"]);
    }
}
