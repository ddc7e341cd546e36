//! `backups` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::backup::Backup;

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Record, Row, cells};

/// Backups subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum BackupCommands {
    /// List all backups.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a backup.
    #[command(visible_alias = "info")]
    #[command(after_help = "Example:\n  vultr-cli backups get 9fa5b2ad-8d5c-4d30-b4d5-bd3e1a6d0bd4")]
    Get(IdArgs),
}

impl BackupCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) => ArgRule::Any,
            Self::Get(_) => ArgRule::Exact(1, "please provide a backup ID"),
        }
    }

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
                        "error retrieving backup list",
                        base.client().list_backups(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let backup = base
                    .call("error retrieving backup", base.client().get_backup(base.arg(0)))
                    .await?;
                base.render(&ItemView::new(backup))
            }
        }
    }
}

impl Record for Backup {
    const PLURAL: &'static str = "backups";
    const SINGULAR: &'static str = "backup";
    const HEADERS: &'static [&'static str] = &["ID", "DATE CREATED", "DESCRIPTION", "SIZE", "STATUS"];

    fn cells(&self) -> Row {
        cells![self.id, self.date_created, self.description, self.size, self.status]
    }
}
