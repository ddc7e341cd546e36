//! `snapshot` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::snapshot::{Snapshot, SnapshotCreate, SnapshotFromUrl, SnapshotUpdate};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells};

/// Snapshot subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum SnapshotCommands {
    /// List all snapshots.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a snapshot.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Create a snapshot of an instance.
    Create {
        /// Instance ID to snapshot.
        #[arg(short, long)]
        id: String,

        /// Description of the snapshot.
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Create a snapshot from a raw image URL.
    #[command(name = "create-url")]
    CreateUrl {
        /// http or https URL of the image.
        #[arg(short, long)]
        url: String,

        /// Description of the snapshot.
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Update a snapshot's description.
    Update {
        /// Snapshot ID.
        #[arg(value_name = "ID")]
        args: Vec<String>,

        /// New description.
        #[arg(short, long)]
        description: String,
    },

    /// Delete a snapshot.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),
}

/// Reject URLs the API would refuse anyway.
fn check_url(url: &str) -> Result<(), CliError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(());
    }
    Err(CliError::FlagParse {
        flag: "url",
        reason: format!("{url:?} is not an http or https URL"),
    })
}

impl SnapshotCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) | Self::Create { .. } | Self::CreateUrl { .. } => ArgRule::Any,
            Self::Get(_) | Self::Update { .. } | Self::Delete(_) => {
                ArgRule::Exact(1, "please provide a snapshot ID")
            }
        }
    }

    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if a flag value is malformed or the API call fails
    /// or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        let client = base.client();
        let id = base.arg(0);
        match self {
            Self::List(_) => {
                let page = base
                    .call("error retrieving snapshot list", client.list_snapshots(base.list_options()))
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let snapshot = base
                    .call("error retrieving snapshot", client.get_snapshot(id))
                    .await?;
                base.render(&ItemView::new(snapshot))
            }
            Self::Create {
                id: instance_id,
                description,
            } => {
                let request = SnapshotCreate {
                    instance_id: instance_id.clone(),
                    description: description.clone(),
                };
                let snapshot = base
                    .call("error creating snapshot", client.create_snapshot(&request))
                    .await?;
                base.render(&ItemView::new(snapshot))
            }
            Self::CreateUrl { url, description } => {
                check_url(url)?;
                let request = SnapshotFromUrl {
                    url: url.clone(),
                    description: description.clone(),
                };
                let snapshot = base
                    .call(
                        "error creating snapshot from URL",
                        client.create_snapshot_from_url(&request),
                    )
                    .await?;
                base.render(&ItemView::new(snapshot))
            }
            Self::Update { description, .. } => {
                let request = SnapshotUpdate {
                    description: description.clone(),
                };
                base.call("error updating snapshot", client.update_snapshot(id, &request))
                    .await?;
                base.render(&Message::new("snapshot has been updated"))
            }
            Self::Delete(_) => {
                base.call("error deleting snapshot", client.delete_snapshot(id))
                    .await?;
                base.render(&Message::new("snapshot has been deleted"))
            }
        }
    }
}

impl Record for Snapshot {
    const PLURAL: &'static str = "snapshots";
    const SINGULAR: &'static str = "snapshot";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "DATE CREATED",
        "SIZE",
        "COMPRESSED SIZE",
        "STATUS",
        "OSID",
        "APPID",
        "DESCRIPTION",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.date_created,
            self.size,
            self.compressed_size,
            self.status,
            self.os_id,
            self.app_id,
            self.description,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("https://example.com/image.raw" ; "https")]
    #[test_case("http://example.com/image.raw" ; "http")]
    fn accepts_web_urls(url: &str) {
        assert!(check_url(url).is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        let err = check_url("ftp://example.com/image.raw").expect_err("ftp");
        assert!(err.to_string().starts_with("invalid value for --url"));
    }
}
