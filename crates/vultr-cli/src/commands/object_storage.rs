//! `object-storage` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::object_storage::{ObjectStorage, ObjectStorageCreate};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells};

/// Object storage subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ObjectStorageCommands {
    /// List all object storage subscriptions.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get an object storage subscription.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Create an object storage subscription.
    Create {
        /// Object storage cluster ID.
        #[arg(short = 'i', long = "cluster-id")]
        cluster_id: u32,

        /// Label for the subscription.
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Delete an object storage subscription.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),
}

impl ObjectStorageCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) | Self::Create { .. } => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide an object storage ID"),
        }
    }

    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        let client = base.client();
        let id = base.arg(0);
        match self {
            Self::List(_) => {
                let page = base
                    .call(
                        "error retrieving object storage list",
                        client.list_object_storage(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let storage = base
                    .call("error retrieving object storage", client.get_object_storage(id))
                    .await?;
                base.render(&ItemView::new(storage))
            }
            Self::Create { cluster_id, label } => {
                let request = ObjectStorageCreate {
                    cluster_id: *cluster_id,
                    label: label.clone(),
                };
                let storage = base
                    .call("error creating object storage", client.create_object_storage(&request))
                    .await?;
                base.render(&ItemView::new(storage))
            }
            Self::Delete(_) => {
                base.call("error deleting object storage", client.delete_object_storage(id))
                    .await?;
                base.render(&Message::new("object storage has been deleted"))
            }
        }
    }
}

impl Record for ObjectStorage {
    const PLURAL: &'static str = "object_storages";
    const SINGULAR: &'static str = "object_storage";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "REGION",
        "OBJSTORECLUSTER ID",
        "STATUS",
        "LABEL",
        "DATE CREATED",
        "S3 HOSTNAME",
        "S3 ACCESS KEY",
        "S3 SECRET KEY",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.region,
            self.cluster_id,
            self.status,
            self.label,
            self.date_created,
            self.s3_hostname,
            self.s3_access_key,
            self.s3_secret_key,
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

    #[tokio::test]
    async fn create_omits_unset_label() {
        let fake = FakeTransport::new().respond(
            Method::Post,
            "/object-storage",
            202,
            json!({"object_storage": {"id": "os-1", "cluster_id": 2, "status": "pending"}}),
        );
        let (out, requests) =
            testing::run(&["vultr-cli", "object-storage", "create", "--cluster-id", "2"], fake).await;

        assert!(out.expect("create succeeds").contains("os-1"));
        assert_eq!(requests[0].body, Some(json!({"cluster_id": 2})));
    }

    #[test]
    fn rows_match_headers() {
        assert_eq!(ObjectStorage::default().cells().len(), ObjectStorage::HEADERS.len());
    }
}
