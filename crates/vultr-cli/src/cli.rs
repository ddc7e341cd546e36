//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Args, ColorChoice, CommandFactory, Parser, Subcommand};
use vultr_api::{DEFAULT_PER_PAGE, ListOptions};

use crate::commands::{
    AccountCommands, ApplicationCommands, BackupCommands, BareMetalCommands, BillingCommands,
    BlockStorageCommands, CdnCommands, DatabaseCommands, DnsCommands, FirewallCommands,
    InstanceCommands, KubernetesCommands, LoadBalancerCommands, ObjectStorageCommands, OsCommands,
    PlanCommands, RegionCommands, SnapshotCommands, SshKeyCommands, UserCommands, VpcCommands,
};

/// vultr-cli is a command line interface for the Vultr API.
#[derive(Parser, Debug, Clone)]
#[command(name = "vultr-cli")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Flags accepted by every command.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Config file (default is $HOME/.vultr-cli.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Vultr API key, overrides VULTR_API_KEY and the config file.
    #[arg(long = "api-key", global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Output format: table, json or yaml.
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub output: Option<String>,
}

/// Paging flags shared by every list command.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PageArgs {
    /// Cursor for paging, taken from a previous page's footer.
    #[arg(short, long)]
    pub cursor: Option<String>,

    /// Number of items requested per page. Max is 500.
    #[arg(short, long = "per-page", default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,
}

/// Positional ID of a leaf that addresses one existing resource.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct IdArgs {
    /// Resource ID.
    #[arg(value_name = "ID")]
    pub args: Vec<String>,
}

/// Top-level resource commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Retrieve information about your account.
    Account {
        /// Account subcommand to execute.
        #[command(subcommand)]
        command: AccountCommands,
    },

    /// Display available applications.
    #[command(visible_alias = "apps")]
    Applications {
        /// Applications subcommand to execute.
        #[command(subcommand)]
        command: ApplicationCommands,
    },

    /// Display instance backups.
    #[command(visible_alias = "backup")]
    Backups {
        /// Backups subcommand to execute.
        #[command(subcommand)]
        command: BackupCommands,
    },

    /// Manage bare metal servers.
    #[command(visible_alias = "bm")]
    BareMetal {
        /// Bare metal subcommand to execute.
        #[command(subcommand)]
        command: BareMetalCommands,
    },

    /// Display billing history and invoices.
    Billing {
        /// Billing subcommand to execute.
        #[command(subcommand)]
        command: BillingCommands,
    },

    /// Manage block storage volumes.
    #[command(visible_alias = "bs")]
    BlockStorage {
        /// Block storage subcommand to execute.
        #[command(subcommand)]
        command: BlockStorageCommands,
    },

    /// Manage CDN pull zones.
    Cdn {
        /// CDN subcommand to execute.
        #[command(subcommand)]
        command: CdnCommands,
    },

    /// Manage managed databases.
    #[command(visible_alias = "db")]
    Database {
        /// Database subcommand to execute.
        #[command(subcommand)]
        command: DatabaseCommands,
    },

    /// Manage DNS domains and records.
    Dns {
        /// DNS subcommand to execute.
        #[command(subcommand)]
        command: DnsCommands,
    },

    /// Manage firewall groups and rules.
    #[command(visible_alias = "fw")]
    Firewall {
        /// Firewall subcommand to execute.
        #[command(subcommand)]
        command: FirewallCommands,
    },

    /// Manage virtual machine instances.
    Instance {
        /// Instance subcommand to execute.
        #[command(subcommand)]
        command: InstanceCommands,
    },

    /// Manage Kubernetes clusters.
    #[command(visible_aliases = ["k8s", "vke"])]
    Kubernetes {
        /// Kubernetes subcommand to execute.
        #[command(subcommand)]
        command: KubernetesCommands,
    },

    /// Manage load balancers.
    #[command(visible_alias = "lb")]
    LoadBalancer {
        /// Load balancer subcommand to execute.
        #[command(subcommand)]
        command: LoadBalancerCommands,
    },

    /// Manage object storage subscriptions.
    #[command(visible_alias = "objstorage")]
    ObjectStorage {
        /// Object storage subcommand to execute.
        #[command(subcommand)]
        command: ObjectStorageCommands,
    },

    /// Display available operating systems.
    Os {
        /// OS subcommand to execute.
        #[command(subcommand)]
        command: OsCommands,
    },

    /// Display available plans.
    #[command(visible_alias = "plan")]
    Plans {
        /// Plans subcommand to execute.
        #[command(subcommand)]
        command: PlanCommands,
    },

    /// Display available regions.
    #[command(visible_alias = "region")]
    Regions {
        /// Regions subcommand to execute.
        #[command(subcommand)]
        command: RegionCommands,
    },

    /// Manage snapshots.
    #[command(visible_alias = "snap")]
    Snapshot {
        /// Snapshot subcommand to execute.
        #[command(subcommand)]
        command: SnapshotCommands,
    },

    /// Manage SSH keys.
    #[command(visible_alias = "ssh")]
    SshKey {
        /// SSH key subcommand to execute.
        #[command(subcommand)]
        command: SshKeyCommands,
    },

    /// Manage users.
    User {
        /// User subcommand to execute.
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage VPC networks.
    Vpc {
        /// VPC subcommand to execute.
        #[command(subcommand)]
        command: VpcCommands,
    },
}

/// The full command tree, with `-v` as the version flag.
#[must_use]
pub fn command() -> clap::Command {
    Cli::command().color(ColorChoice::Never).arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .action(ArgAction::Version)
            .help("Print version"),
    )
}

/// The matched leaf: its command path and the generic values every leaf shares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaf {
    /// Subcommand names from the root to the leaf.
    pub path: Vec<String>,
    /// Positional arguments.
    pub args: Vec<String>,
    /// Paging options, default when the leaf has no paging flags.
    pub options: ListOptions,
}

impl Leaf {
    /// Walk `matches` down to the invoked leaf.
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mut leaf = Self::default();
        let mut current = matches;
        while let Some((name, sub)) = current.subcommand() {
            leaf.path.push(name.to_string());
            current = sub;
        }

        if let Ok(Some(values)) = current.try_get_many::<String>("args") {
            leaf.args = values.cloned().collect();
        }
        if let Ok(per_page) = current.try_get_one::<u32>("per_page") {
            leaf.options.per_page = per_page.copied();
        }
        if let Ok(cursor) = current.try_get_one::<String>("cursor") {
            leaf.options.cursor = cursor.filter(|c| !c.is_empty()).cloned();
        }
        leaf
    }

    /// Usage line of the leaf, for validator failures.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut node = command();
        node.build();
        for name in &self.path {
            match node.find_subcommand(name).cloned() {
                Some(sub) => node = sub,
                None => break,
            }
        }
        node.render_usage().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn parse(argv: &[&str]) -> (Cli, Leaf) {
        let matches = command()
            .try_get_matches_from(argv)
            .expect("arguments parse");
        let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches).expect("cli");
        (cli, Leaf::from_matches(&matches))
    }

    #[test]
    fn command_tree_is_consistent() {
        command().debug_assert();
    }

    #[test_case(&["vultr-cli", "backups", "list"] ; "canonical")]
    #[test_case(&["vultr-cli", "backup", "ls"] ; "aliases")]
    fn list_defaults_per_page(argv: &[&str]) {
        let (_, leaf) = parse(argv);
        assert_eq!(leaf.path, vec!["backups", "list"]);
        assert_eq!(leaf.options.per_page, Some(DEFAULT_PER_PAGE));
        assert_eq!(leaf.options.cursor, None);
    }

    #[test]
    fn paging_flags_are_extracted() {
        let (_, leaf) = parse(&["vultr-cli", "instance", "list", "-p", "5", "--cursor=abc"]);
        assert_eq!(leaf.options.per_page, Some(5));
        assert_eq!(leaf.options.cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_cursor_is_unset() {
        let (_, leaf) = parse(&["vultr-cli", "instance", "list", "--cursor", ""]);
        assert_eq!(leaf.options.cursor, None);
    }

    #[test]
    fn positional_args_are_collected() {
        let (_, leaf) = parse(&["vultr-cli", "dns", "record", "get", "example.com", "rec-1"]);
        assert_eq!(leaf.path, vec!["dns", "record", "get"]);
        assert_eq!(leaf.args, vec!["example.com", "rec-1"]);
        assert_eq!(leaf.options, ListOptions::default());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let (cli, _) = parse(&["vultr-cli", "regions", "list", "-o", "json", "--api-key=k"]);
        assert_eq!(cli.global.output.as_deref(), Some("json"));
        assert_eq!(cli.global.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn version_short_flag() {
        let err = command()
            .try_get_matches_from(["vultr-cli", "-v"])
            .expect_err("version exits");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = command()
            .try_get_matches_from(["vultr-cli", "backups", "list", "--bogus"])
            .expect_err("unknown flag");
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn leaf_usage_names_the_leaf() {
        let (_, leaf) = parse(&["vultr-cli", "backups", "get"]);
        assert!(leaf.usage().contains("vultr-cli backups get"));
    }

    #[test]
    fn nested_leaf_usage_walks_every_level() {
        let (_, leaf) = parse(&["vultr-cli", "dns", "record", "get", "example.com"]);
        let usage = leaf.usage();
        assert!(usage.contains("vultr-cli dns record get"), "{usage}");
        assert!(usage.contains("DOMAIN RECORD_ID"), "{usage}");
    }

    #[test]
    fn unknown_path_falls_back_to_deepest_match() {
        let leaf = Leaf {
            path: vec!["backups".into(), "missing".into()],
            ..Leaf::default()
        };
        assert!(leaf.usage().contains("vultr-cli backups"));
    }
}
