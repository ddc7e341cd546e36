//! `vpc` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::vpc::{Vpc, VpcCreate, VpcUpdate};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells};

/// VPC subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum VpcCommands {
    /// List all VPC networks.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a VPC network.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Create a VPC network.
    Create {
        /// Region to create the network in.
        #[arg(short, long)]
        region: String,

        /// Description of the network.
        #[arg(short, long)]
        description: Option<String>,

        /// IPv4 subnet, e.g. 10.99.0.0.
        #[arg(short, long)]
        subnet: Option<String>,

        /// IPv4 subnet mask size, e.g. 24.
        #[arg(long)]
        size: Option<u32>,
    },

    /// Update a VPC network's description.
    Update {
        /// VPC ID.
        #[arg(value_name = "ID")]
        args: Vec<String>,

        /// New description.
        #[arg(short, long)]
        description: String,
    },

    /// Delete a VPC network.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),
}

impl VpcCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) | Self::Create { .. } => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide a VPC ID"),
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
                    .call("error retrieving VPC list", client.list_vpcs(base.list_options()))
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let vpc = base.call("error retrieving VPC", client.get_vpc(id)).await?;
                base.render(&ItemView::new(vpc))
            }
            Self::Create {
                region,
                description,
                subnet,
                size,
            } => {
                let request = VpcCreate {
                    region: region.clone(),
                    description: description.clone(),
                    v4_subnet: subnet.clone(),
                    v4_subnet_mask: *size,
                };
                let vpc = base.call("error creating VPC", client.create_vpc(&request)).await?;
                base.render(&ItemView::new(vpc))
            }
            Self::Update { description, .. } => {
                let request = VpcUpdate {
                    description: description.clone(),
                };
                base.call("error updating VPC", client.update_vpc(id, &request))
                    .await?;
                base.render(&Message::new("VPC has been updated"))
            }
            Self::Delete(_) => {
                base.call("error deleting VPC", client.delete_vpc(id)).await?;
                base.render(&Message::new("VPC has been deleted"))
            }
        }
    }
}

impl Record for Vpc {
    const PLURAL: &'static str = "vpcs";
    const SINGULAR: &'static str = "vpc";
    const HEADERS: &'static [&'static str] =
        &["ID", "DATE CREATED", "REGION", "DESCRIPTION", "V4 SUBNET", "V4 SUBNET MASK"];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.date_created,
            self.region,
            self.description,
            self.v4_subnet,
            self.v4_subnet_mask,
        ]
    }
}
