//! `load-balancer` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::load_balancer::LoadBalancer;

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells, list};

/// Load balancer subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum LoadBalancerCommands {
    /// List all load balancers.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a load balancer.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Delete a load balancer.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),
}

impl LoadBalancerCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide a load balancer ID"),
        }
    }

    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        let client = base.client();
        match self {
            Self::List(_) => {
                let page = base
                    .call(
                        "error retrieving load balancer list",
                        client.list_load_balancers(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let balancer = base
                    .call("error retrieving load balancer", client.get_load_balancer(base.arg(0)))
                    .await?;
                base.render(&ItemView::new(balancer))
            }
            Self::Delete(_) => {
                base.call("error deleting load balancer", client.delete_load_balancer(base.arg(0)))
                    .await?;
                base.render(&Message::new("load balancer has been deleted"))
            }
        }
    }
}

impl Record for LoadBalancer {
    const PLURAL: &'static str = "load_balancers";
    const SINGULAR: &'static str = "load_balancer";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "DATE CREATED",
        "REGION",
        "LABEL",
        "STATUS",
        "IPV4",
        "IPV6",
        "INSTANCES",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.date_created,
            self.region,
            self.label,
            self.status,
            self.ipv4,
            self.ipv6,
            list(&self.instances),
        ]
    }
}
