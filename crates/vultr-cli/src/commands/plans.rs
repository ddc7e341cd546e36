//! `plans` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::catalog::Plan;

use crate::base::ExecutionBase;
use crate::cli::PageArgs;
use crate::error::CliError;
use crate::output::{ListView, Record, Row, cells, list, money};

/// Plans subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum PlanCommands {
    /// List all available plans.
    #[command(visible_alias = "ls")]
    List(PageArgs),
}

impl PlanCommands {
    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        match self {
            Self::List(_) => {
                let page = base
                    .call("error retrieving plan list", base.client().list_plans(base.list_options()))
                    .await?;
                base.render(&ListView::new(page))
            }
        }
    }
}

impl Record for Plan {
    const PLURAL: &'static str = "plans";
    const SINGULAR: &'static str = "plan";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "VCPU COUNT",
        "RAM",
        "DISK",
        "DISK COUNT",
        "BANDWIDTH GB",
        "PRICE PER MONTH",
        "TYPE",
        "REGIONS",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.vcpu_count,
            self.ram,
            self.disk,
            self.disk_count,
            self.bandwidth,
            money(self.monthly_cost),
            self.kind,
            list(&self.locations),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_row_formats_price_and_locations() {
        let plan = Plan {
            id: "vc2-1c-1gb".into(),
            monthly_cost: 5.0,
            locations: vec!["ewr".into(), "lax".into()],
            ..Plan::default()
        };
        let row = plan.cells();
        assert_eq!(row.len(), Plan::HEADERS.len());
        assert_eq!(row[6], "5.00");
        assert_eq!(row[8], "ewr, lax");
    }
}
