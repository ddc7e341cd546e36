//! `regions` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::catalog::Region;

use crate::base::ExecutionBase;
use crate::cli::PageArgs;
use crate::error::CliError;
use crate::output::{ListView, Record, Row, cells, list};

/// Regions subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum RegionCommands {
    /// List all available regions.
    #[command(visible_alias = "ls")]
    List(PageArgs),
}

impl RegionCommands {
    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        match self {
            Self::List(_) => {
                let page = base
                    .call(
                        "error retrieving region list",
                        base.client().list_regions(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
        }
    }
}

impl Record for Region {
    const PLURAL: &'static str = "regions";
    const SINGULAR: &'static str = "region";
    const HEADERS: &'static [&'static str] = &["ID", "CITY", "COUNTRY", "CONTINENT", "OPTIONS"];

    fn cells(&self) -> Row {
        cells![self.id, self.city, self.country, self.continent, list(&self.options)]
    }
}
