//! `block-storage` commands.

use clap::{Args, Subcommand};
use vultr_api::Transport;
use vultr_api::resources::block_storage::{BlockStorage, BlockStorageCreate, BlockStorageUpdate};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells, money};

/// Block storage subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum BlockStorageCommands {
    /// List all block storage volumes.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a block storage volume.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Create a block storage volume.
    #[command(after_help = "Example:\n  vultr-cli block-storage create --region ewr --size 50 --label data")]
    Create(CreateArgs),

    /// Update a block storage volume's label or size.
    Update(UpdateArgs),

    /// Delete a block storage volume.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),

    /// Attach a block storage volume to an instance.
    Attach(AttachArgs),

    /// Detach a block storage volume from its instance.
    Detach(DetachArgs),
}

/// Flags of `block-storage create`.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Region to create the volume in.
    #[arg(short, long)]
    pub region: String,

    /// Size in GB.
    #[arg(short, long)]
    pub size: u64,

    /// Label for the volume.
    #[arg(short, long)]
    pub label: Option<String>,

    /// Storage type, e.g. high_perf or storage_opt.
    #[arg(short, long = "block-type")]
    pub block_type: Option<String>,
}

/// Flags of `block-storage update`.
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Block storage ID.
    #[arg(value_name = "ID")]
    pub args: Vec<String>,

    /// New label.
    #[arg(short, long)]
    pub label: Option<String>,

    /// New size in GB.
    #[arg(short, long)]
    pub size: Option<u64>,
}

/// Flags of `block-storage attach`.
#[derive(Args, Debug, Clone)]
pub struct AttachArgs {
    /// Block storage ID.
    #[arg(value_name = "ID")]
    pub args: Vec<String>,

    /// Instance to attach to.
    #[arg(short, long)]
    pub instance: String,

    /// Attach without restarting the instance.
    #[arg(long)]
    pub live: bool,
}

/// Flags of `block-storage detach`.
#[derive(Args, Debug, Clone)]
pub struct DetachArgs {
    /// Block storage ID.
    #[arg(value_name = "ID")]
    pub args: Vec<String>,

    /// Detach without restarting the instance.
    #[arg(long)]
    pub live: bool,
}

impl CreateArgs {
    fn request(&self) -> BlockStorageCreate {
        BlockStorageCreate {
            region: self.region.clone(),
            size_gb: self.size,
            label: self.label.clone(),
            block_type: self.block_type.clone(),
        }
    }
}

impl UpdateArgs {
    fn request(&self) -> BlockStorageUpdate {
        BlockStorageUpdate {
            label: self.label.clone(),
            size_gb: self.size,
        }
    }
}

impl BlockStorageCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) | Self::Create(_) => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide a block storage ID"),
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
                        "error retrieving block storage list",
                        client.list_block_storage(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let volume = base
                    .call("error retrieving block storage", client.get_block_storage(id))
                    .await?;
                base.render(&ItemView::new(volume))
            }
            Self::Create(args) => {
                let volume = base
                    .call(
                        "error creating block storage",
                        client.create_block_storage(&args.request()),
                    )
                    .await?;
                base.render(&ItemView::new(volume))
            }
            Self::Update(args) => {
                base.call(
                    "error updating block storage",
                    client.update_block_storage(id, &args.request()),
                )
                .await?;
                base.render(&Message::new("block storage has been updated"))
            }
            Self::Delete(_) => {
                base.call("error deleting block storage", client.delete_block_storage(id))
                    .await?;
                base.render(&Message::new("block storage has been deleted"))
            }
            Self::Attach(args) => {
                base.call(
                    "error attaching block storage",
                    client.attach_block_storage(id, &args.instance, args.live),
                )
                .await?;
                base.render(&Message::new("block storage has been attached"))
            }
            Self::Detach(args) => {
                base.call(
                    "error detaching block storage",
                    client.detach_block_storage(id, args.live),
                )
                .await?;
                base.render(&Message::new("block storage has been detached"))
            }
        }
    }
}

impl Record for BlockStorage {
    const PLURAL: &'static str = "blocks";
    const SINGULAR: &'static str = "block";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "REGION ID",
        "INSTANCE ID",
        "SIZE GB",
        "STATUS",
        "LABEL",
        "BLOCK TYPE",
        "DATE CREATED",
        "MONTHLY COST",
        "MOUNT ID",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.region,
            self.attached_to_instance,
            self.size_gb,
            self.status,
            self.label,
            self.block_type,
            self.date_created,
            money(self.cost),
            self.mount_id,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;
    use vultr_api::Method;
    use vultr_api::fake::FakeTransport;

    use crate::cli::{Cli, Commands};
    use crate::commands::testing;

    fn block_command(argv: &[&str]) -> Option<BlockStorageCommands> {
        match Cli::try_parse_from(argv).ok()?.command {
            Commands::BlockStorage { command } => Some(command),
            _ => None,
        }
    }

    #[test]
    fn update_resize_only_sends_size() {
        let command = block_command(&["vultr-cli", "block-storage", "update", "vol-1", "--size", "60"]);
        let Some(BlockStorageCommands::Update(args)) = command else {
            unreachable!("block-storage update parses");
        };

        let body = serde_json::to_value(args.request()).expect("encodes");
        assert_eq!(body, json!({"size_gb": 60}));
    }

    #[test]
    fn create_omits_unset_block_type() {
        let args = CreateArgs {
            region: "ewr".into(),
            size: 50,
            label: Some("data".into()),
            block_type: None,
        };
        let body = serde_json::to_value(args.request()).expect("encodes");
        assert_eq!(body, json!({"region": "ewr", "size_gb": 50, "label": "data"}));
    }

    #[tokio::test]
    async fn attach_live_sends_live_flag() {
        let fake = FakeTransport::new().respond_empty(Method::Post, "/blocks/vol-1/attach", 204);
        let (out, requests) = testing::run(
            &["vultr-cli", "block-storage", "attach", "vol-1", "--instance", "inst-1", "--live"],
            fake,
        )
        .await;

        assert_eq!(out.expect("attach succeeds"), "block storage has been attached\n");
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body,
            Some(json!({"instance_id": "inst-1", "live": true}))
        );
    }

    #[tokio::test]
    async fn detach_defaults_to_restarting_instance() {
        let fake = FakeTransport::new().respond_empty(Method::Post, "/blocks/vol-1/detach", 204);
        let (out, requests) =
            testing::run(&["vultr-cli", "block-storage", "detach", "vol-1"], fake).await;

        out.expect("detach succeeds");
        assert_eq!(requests[0].body, Some(json!({"live": false})));
    }

    #[test]
    fn rows_match_headers() {
        assert_eq!(BlockStorage::default().cells().len(), BlockStorage::HEADERS.len());
    }
}
