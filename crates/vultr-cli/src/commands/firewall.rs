//! `firewall` commands for groups and their rules.

use clap::{Args, Subcommand};
use vultr_api::Transport;
use vultr_api::resources::firewall::{
    FirewallGroup, FirewallGroupRequest, FirewallRule, FirewallRuleCreate,
};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells};

const GROUP_REQUIRED: &str = "please provide a firewall group ID";
const RULE_REQUIRED: &str = "please provide a firewall group ID and rule number";

/// Firewall subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum FirewallCommands {
    /// Manage firewall groups.
    Group {
        /// Group subcommand to execute.
        #[command(subcommand)]
        command: GroupCommands,
    },

    /// Manage firewall rules.
    Rule {
        /// Rule subcommand to execute.
        #[command(subcommand)]
        command: RuleCommands,
    },
}

/// Firewall group subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum GroupCommands {
    /// List all firewall groups.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a firewall group.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Create a firewall group.
    Create {
        /// Description of the group.
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Update a firewall group's description.
    Update {
        /// Firewall group ID.
        #[arg(value_name = "ID")]
        args: Vec<String>,

        /// New description.
        #[arg(short, long)]
        description: String,
    },

    /// Delete a firewall group.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),
}

/// Firewall rule subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum RuleCommands {
    /// List all rules of a firewall group.
    #[command(visible_alias = "ls")]
    List {
        /// Firewall group ID.
        #[arg(value_name = "GROUP_ID")]
        args: Vec<String>,

        /// Paging flags.
        #[command(flatten)]
        page: PageArgs,
    },

    /// Get a firewall rule.
    #[command(visible_alias = "info")]
    Get(RuleArgs),

    /// Create a firewall rule.
    #[command(after_help = "Example:\n  vultr-cli firewall rule create <GROUP_ID> --ip-type v4 --protocol tcp --subnet 0.0.0.0 --size 0 --port 22")]
    Create(RuleCreateArgs),

    /// Delete a firewall rule.
    #[command(visible_alias = "destroy")]
    Delete(RuleArgs),
}

/// Positional group ID and rule number.
#[derive(Args, Debug, Clone)]
pub struct RuleArgs {
    /// Firewall group ID followed by the rule number.
    #[arg(value_name = "GROUP_ID RULE")]
    pub args: Vec<String>,
}

/// Flags of `firewall rule create`.
#[derive(Args, Debug, Clone)]
pub struct RuleCreateArgs {
    /// Firewall group ID.
    #[arg(value_name = "GROUP_ID")]
    pub args: Vec<String>,

    /// IP version: v4 or v6.
    #[arg(short = 't', long = "ip-type", value_parser = ["v4", "v6"])]
    pub ip_type: String,

    /// Protocol: icmp, tcp, udp, gre, esp or ah.
    #[arg(long)]
    pub protocol: String,

    /// Source subnet.
    #[arg(short, long)]
    pub subnet: String,

    /// Source subnet size in bits.
    #[arg(long)]
    pub size: u32,

    /// Port or port range, e.g. 8000:8080.
    #[arg(long)]
    pub port: Option<String>,

    /// Predefined source, e.g. cloudflare.
    #[arg(long)]
    pub source: Option<String>,

    /// Notes for the rule.
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl FirewallCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::Group { command } => match command {
                GroupCommands::List(_) | GroupCommands::Create { .. } => ArgRule::Any,
                _ => ArgRule::Exact(1, GROUP_REQUIRED),
            },
            Self::Rule { command } => match command {
                RuleCommands::List { .. } | RuleCommands::Create(_) => {
                    ArgRule::Exact(1, GROUP_REQUIRED)
                }
                RuleCommands::Get(_) | RuleCommands::Delete(_) => ArgRule::Exact(2, RULE_REQUIRED),
            },
        }
    }

    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        match self {
            Self::Group { command } => command.execute(base).await,
            Self::Rule { command } => command.execute(base).await,
        }
    }
}

impl GroupCommands {
    async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        let client = base.client();
        let id = base.arg(0);
        match self {
            Self::List(_) => {
                let page = base
                    .call(
                        "error retrieving firewall group list",
                        client.list_firewall_groups(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let group = base
                    .call("error retrieving firewall group", client.get_firewall_group(id))
                    .await?;
                base.render(&ItemView::new(group))
            }
            Self::Create { description } => {
                let request = FirewallGroupRequest {
                    description: description.clone(),
                };
                let group = base
                    .call("error creating firewall group", client.create_firewall_group(&request))
                    .await?;
                base.render(&ItemView::new(group))
            }
            Self::Update { description, .. } => {
                let request = FirewallGroupRequest {
                    description: Some(description.clone()),
                };
                base.call(
                    "error updating firewall group",
                    client.update_firewall_group(id, &request),
                )
                .await?;
                base.render(&Message::new("firewall group has been updated"))
            }
            Self::Delete(_) => {
                base.call("error deleting firewall group", client.delete_firewall_group(id))
                    .await?;
                base.render(&Message::new("firewall group has been deleted"))
            }
        }
    }
}

impl RuleCommands {
    async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        let client = base.client();
        let group = base.arg(0);
        let rule = base.arg(1);
        match self {
            Self::List { .. } => {
                let page = base
                    .call(
                        "error retrieving firewall rule list",
                        client.list_firewall_rules(group, base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let found = base
                    .call("error retrieving firewall rule", client.get_firewall_rule(group, rule))
                    .await?;
                base.render(&ItemView::new(found))
            }
            Self::Create(args) => {
                let request = FirewallRuleCreate {
                    ip_type: args.ip_type.clone(),
                    protocol: args.protocol.clone(),
                    subnet: args.subnet.clone(),
                    subnet_size: args.size,
                    port: args.port.clone(),
                    source: args.source.clone(),
                    notes: args.notes.clone(),
                };
                let created = base
                    .call(
                        "error creating firewall rule",
                        client.create_firewall_rule(group, &request),
                    )
                    .await?;
                base.render(&ItemView::new(created))
            }
            Self::Delete(_) => {
                base.call("error deleting firewall rule", client.delete_firewall_rule(group, rule))
                    .await?;
                base.render(&Message::new("firewall rule has been deleted"))
            }
        }
    }
}

impl Record for FirewallGroup {
    const PLURAL: &'static str = "firewall_groups";
    const SINGULAR: &'static str = "firewall_group";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "DATE CREATED",
        "DATE MODIFIED",
        "INSTANCE COUNT",
        "RULE COUNT",
        "MAX RULE COUNT",
        "DESCRIPTION",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.date_created,
            self.date_modified,
            self.instance_count,
            self.rule_count,
            self.max_rule_count,
            self.description,
        ]
    }
}

impl Record for FirewallRule {
    const PLURAL: &'static str = "firewall_rules";
    const SINGULAR: &'static str = "firewall_rule";
    const HEADERS: &'static [&'static str] = &[
        "RULE NUMBER",
        "ACTION",
        "TYPE",
        "PROTOCOL",
        "PORT",
        "NETWORK",
        "SOURCE",
        "NOTES",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.action,
            self.ip_type,
            self.protocol,
            self.port,
            format!("{}/{}", self.subnet, self.subnet_size),
            self.source,
            self.notes,
        ]
    }
}
