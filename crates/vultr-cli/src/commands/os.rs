//! `os` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::catalog::OperatingSystem;

use crate::base::ExecutionBase;
use crate::cli::PageArgs;
use crate::error::CliError;
use crate::output::{ListView, Record, Row, cells};

/// OS subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum OsCommands {
    /// List all available operating systems.
    #[command(visible_alias = "ls")]
    List(PageArgs),
}

impl OsCommands {
    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        match self {
            Self::List(_) => {
                let page = base
                    .call("error retrieving os list", base.client().list_os(base.list_options()))
                    .await?;
                base.render(&ListView::new(page))
            }
        }
    }
}

impl Record for OperatingSystem {
    const PLURAL: &'static str = "os";
    const SINGULAR: &'static str = "os";
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "ARCH", "FAMILY"];

    fn cells(&self) -> Row {
        cells![self.id, self.name, self.arch, self.family]
    }
}
