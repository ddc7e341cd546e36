//! `billing` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::billing::{BillingEntry, Invoice};

use crate::base::ExecutionBase;
use crate::cli::PageArgs;
use crate::error::CliError;
use crate::output::{ListView, Record, Row, cells, money};

/// Billing subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum BillingCommands {
    /// List billing history.
    History(PageArgs),

    /// List invoices.
    Invoices(PageArgs),
}

impl BillingCommands {
    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        match self {
            Self::History(_) => {
                let page = base
                    .call(
                        "error retrieving billing history",
                        base.client().list_billing_history(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Invoices(_) => {
                let page = base
                    .call(
                        "error retrieving invoice list",
                        base.client().list_invoices(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
        }
    }
}

impl Record for BillingEntry {
    const PLURAL: &'static str = "billing_history";
    const SINGULAR: &'static str = "billing_history";
    const HEADERS: &'static [&'static str] = &["ID", "DATE", "TYPE", "DESCRIPTION", "AMOUNT", "BALANCE"];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.date,
            self.kind,
            self.description,
            money(self.amount),
            money(self.balance),
        ]
    }
}

impl Record for Invoice {
    const PLURAL: &'static str = "billing_invoices";
    const SINGULAR: &'static str = "billing_invoice";
    const HEADERS: &'static [&'static str] = &["ID", "DATE", "DESCRIPTION", "AMOUNT", "BALANCE"];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.date,
            self.description,
            money(self.amount),
            money(self.balance),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vultr_api::Method;
    use vultr_api::fake::FakeTransport;

    use crate::commands::testing;

    #[test]
    fn entry_amounts_have_two_decimals() {
        let entry = BillingEntry {
            id: 7,
            amount: -5.5,
            balance: 12.0,
            ..BillingEntry::default()
        };
        let row = entry.cells();
        assert_eq!(row.len(), BillingEntry::HEADERS.len());
        assert_eq!(row[4], "-5.50");
        assert_eq!(row[5], "12.00");
    }

    #[tokio::test]
    async fn invoices_read_invoice_key() {
        let fake = FakeTransport::new().respond(
            Method::Get,
            "/billing/invoices",
            200,
            json!({"billing_invoices": [{"id": 41, "date": "2024-01-01", "description": "Invoice", "amount": 3.1, "balance": 0}], "meta": {"total": 1}}),
        );
        let (out, _) = testing::run(&["vultr-cli", "billing", "invoices"], fake).await;

        let out = out.expect("invoices succeed");
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("41"));
        assert!(lines[1].contains("3.10"));
    }

    #[test]
    fn invoice_rows_match_headers() {
        assert_eq!(Invoice::default().cells().len(), Invoice::HEADERS.len());
    }
}
