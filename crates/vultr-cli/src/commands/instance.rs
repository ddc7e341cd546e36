//! `instance` commands.

use clap::{Args, Subcommand};
use vultr_api::Transport;
use vultr_api::resources::instance::{Instance, InstanceCreate, InstanceUpdate};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{
    Detail, DetailView, ItemView, ListView, Message, Record, Row, blank, cells, list,
};

/// Instance subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum InstanceCommands {
    /// List all instances.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get an instance.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Create an instance.
    #[command(after_help = "Example:\n  vultr-cli instance create --region ewr --plan vc2-1c-1gb --os 387")]
    Create(CreateArgs),

    /// Update an instance.
    Update(UpdateArgs),

    /// Delete an instance.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),

    /// Start an instance.
    Start(IdArgs),

    /// Halt an instance.
    Halt(IdArgs),

    /// Reboot an instance.
    Reboot(IdArgs),
}

/// The image an instance boots from. Exactly one must be given.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct ImageSource {
    /// Operating system ID.
    #[arg(long)]
    pub os: Option<u32>,

    /// Application ID.
    #[arg(long)]
    pub app: Option<u32>,

    /// Snapshot ID.
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Marketplace image ID.
    #[arg(long)]
    pub image: Option<String>,
}

/// Flags of `instance create`.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Region to create the instance in.
    #[arg(short, long)]
    pub region: String,

    /// Plan to create the instance with.
    #[arg(long)]
    pub plan: String,

    /// Image to boot from.
    #[command(flatten)]
    pub source: ImageSource,

    /// Label for the instance.
    #[arg(short, long)]
    pub label: Option<String>,

    /// Hostname for the instance.
    #[arg(long)]
    pub host: Option<String>,

    /// Tags to apply, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// SSH key IDs to install, comma separated.
    #[arg(short, long = "ssh-keys", value_delimiter = ',')]
    pub ssh_keys: Vec<String>,

    /// Enable IPv6.
    #[arg(long)]
    pub ipv6: bool,

    /// Enable automatic backups.
    #[arg(short, long)]
    pub backups: bool,

    /// Firewall group ID to assign.
    #[arg(short, long = "firewall-group")]
    pub firewall_group: Option<String>,
}

/// Flags of `instance update`.
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Instance ID.
    #[arg(value_name = "ID")]
    pub args: Vec<String>,

    /// New label.
    #[arg(short, long)]
    pub label: Option<String>,

    /// New plan.
    #[arg(long)]
    pub plan: Option<String>,

    /// Replacement tags, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// New firewall group ID.
    #[arg(short, long = "firewall-group")]
    pub firewall_group: Option<String>,

    /// Enable or disable IPv6.
    #[arg(long)]
    pub ipv6: Option<bool>,

    /// Backups: enabled or disabled.
    #[arg(short, long, value_parser = ["enabled", "disabled"])]
    pub backups: Option<String>,
}

impl CreateArgs {
    fn request(&self) -> InstanceCreate {
        InstanceCreate {
            region: self.region.clone(),
            plan: self.plan.clone(),
            os_id: self.source.os,
            app_id: self.source.app,
            image_id: self.source.image.clone(),
            snapshot_id: self.source.snapshot.clone(),
            label: self.label.clone(),
            hostname: self.host.clone(),
            tags: self.tags.clone(),
            ssh_keys: self.ssh_keys.clone(),
            enable_ipv6: self.ipv6.then_some(true),
            backups: self.backups.then(|| "enabled".to_string()),
            firewall_group_id: self.firewall_group.clone(),
        }
    }
}

impl UpdateArgs {
    fn request(&self) -> InstanceUpdate {
        InstanceUpdate {
            label: self.label.clone(),
            plan: self.plan.clone(),
            tags: self.tags.clone(),
            firewall_group_id: self.firewall_group.clone(),
            enable_ipv6: self.ipv6,
            backups: self.backups.clone(),
        }
    }
}

impl InstanceCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) | Self::Create(_) => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide an instance ID"),
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
                    .call("error retrieving instance list", client.list_instances(base.list_options()))
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let instance = base
                    .call("error retrieving instance", client.get_instance(id))
                    .await?;
                base.render(&DetailView::new(instance))
            }
            Self::Create(args) => {
                let instance = base
                    .call("error creating instance", client.create_instance(&args.request()))
                    .await?;
                base.render(&ItemView::new(instance))
            }
            Self::Update(args) => {
                base.call("error updating instance", client.update_instance(id, &args.request()))
                    .await?;
                base.render(&Message::new("instance has been updated"))
            }
            Self::Delete(_) => {
                base.call("error deleting instance", client.delete_instance(id))
                    .await?;
                base.render(&Message::new("instance has been deleted"))
            }
            Self::Start(_) => {
                base.call("error starting instance", client.start_instance(id))
                    .await?;
                base.render(&Message::new("instance has been started"))
            }
            Self::Halt(_) => {
                base.call("error halting instance", client.halt_instance(id))
                    .await?;
                base.render(&Message::new("instance has been halted"))
            }
            Self::Reboot(_) => {
                base.call("error rebooting instance", client.reboot_instance(id))
                    .await?;
                base.render(&Message::new("instance has been rebooted"))
            }
        }
    }
}

impl Record for Instance {
    const PLURAL: &'static str = "instances";
    const SINGULAR: &'static str = "instance";
    const HEADERS: &'static [&'static str] = &[
        "ID", "IP", "LABEL", "OS", "STATUS", "REGION", "CPU", "RAM", "DISK", "BANDWIDTH",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.main_ip,
            self.label,
            self.os,
            self.status,
            self.region,
            self.vcpu_count,
            self.ram,
            self.disk,
            self.allowed_bandwidth,
        ]
    }
}

impl Detail for Instance {
    const SINGULAR: &'static str = "instance";

    fn detail_rows(&self) -> Vec<Row> {
        vec![
            cells!["ID", self.id],
            cells!["LABEL", self.label],
            cells!["HOSTNAME", self.hostname],
            cells!["DATE CREATED", self.date_created],
            cells!["STATUS", self.status],
            cells!["POWER STATUS", self.power_status],
            cells!["SERVER STATUS", self.server_status],
            blank(),
            cells!["RESOURCES"],
            cells!["PLAN", self.plan],
            cells!["REGION", self.region],
            cells!["CPU COUNT", self.vcpu_count],
            cells!["RAM", self.ram],
            cells!["DISK", self.disk],
            cells!["ALLOWED BANDWIDTH", self.allowed_bandwidth],
            blank(),
            cells!["IMAGE"],
            cells!["OS", self.os],
            cells!["OS ID", self.os_id],
            cells!["APP ID", self.app_id],
            cells!["IMAGE ID", self.image_id],
            blank(),
            cells!["NETWORK"],
            cells!["MAIN IP", self.main_ip],
            cells!["NETMASK V4", self.netmask_v4],
            cells!["GATEWAY V4", self.gateway_v4],
            cells!["V6 MAIN IP", self.v6_main_ip],
            cells!["V6 NETWORK", self.v6_network],
            cells!["V6 NETWORK SIZE", self.v6_network_size],
            cells!["INTERNAL IP", self.internal_ip],
            cells!["FIREWALL GROUP ID", self.firewall_group_id],
            blank(),
            cells!["KVM", self.kvm],
            cells!["FEATURES", list(&self.features)],
            cells!["TAGS", list(&self.tags)],
        ]
    }
}
