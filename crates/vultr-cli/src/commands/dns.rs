//! `dns` commands for domains and their records.

use clap::{Args, Subcommand};
use vultr_api::Transport;
use vultr_api::resources::dns::{Domain, DomainCreate, DomainRecord, RecordCreate, RecordUpdate};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::PageArgs;
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells};

const DOMAIN_REQUIRED: &str = "please provide a domain name";
const RECORD_REQUIRED: &str = "please provide a domain and record ID";

/// DNS subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum DnsCommands {
    /// Manage DNS domains.
    Domain {
        /// Domain subcommand to execute.
        #[command(subcommand)]
        command: DomainCommands,
    },

    /// Manage DNS records.
    Record {
        /// Record subcommand to execute.
        #[command(subcommand)]
        command: RecordCommands,
    },
}

/// DNS domain subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum DomainCommands {
    /// List all DNS domains.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a DNS domain.
    #[command(visible_alias = "info")]
    Get(DomainArgs),

    /// Create a DNS domain.
    #[command(after_help = "Example:\n  vultr-cli dns domain create --domain example.com --ip 192.0.2.10")]
    Create(DomainCreateArgs),

    /// Delete a DNS domain.
    #[command(visible_alias = "destroy")]
    Delete(DomainArgs),
}

/// DNS record subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum RecordCommands {
    /// List all records of a domain.
    #[command(visible_alias = "ls")]
    List {
        /// Domain name.
        #[arg(value_name = "DOMAIN")]
        args: Vec<String>,

        /// Paging flags.
        #[command(flatten)]
        page: PageArgs,
    },

    /// Get a DNS record.
    #[command(visible_alias = "info")]
    Get(RecordArgs),

    /// Create a DNS record.
    #[command(after_help = "Example:\n  vultr-cli dns record create example.com --type A --name www --data 192.0.2.10")]
    Create(RecordCreateArgs),

    /// Update a DNS record.
    Update(RecordUpdateArgs),

    /// Delete a DNS record.
    #[command(visible_alias = "destroy")]
    Delete(RecordArgs),
}

/// Positional domain name.
#[derive(Args, Debug, Clone)]
pub struct DomainArgs {
    /// Domain name.
    #[arg(value_name = "DOMAIN")]
    pub args: Vec<String>,
}

/// Positional domain name and record ID.
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Domain name followed by the record ID.
    #[arg(value_name = "DOMAIN RECORD_ID")]
    pub args: Vec<String>,
}

/// Flags of `dns domain create`.
#[derive(Args, Debug, Clone)]
pub struct DomainCreateArgs {
    /// Domain name.
    #[arg(short, long)]
    pub domain: String,

    /// IP address for the default records.
    #[arg(short, long)]
    pub ip: Option<String>,

    /// DNSSEC: enabled or disabled.
    #[arg(long = "dns-sec", value_parser = ["enabled", "disabled"])]
    pub dns_sec: Option<String>,
}

/// Flags of `dns record create`.
#[derive(Args, Debug, Clone)]
pub struct RecordCreateArgs {
    /// Domain name.
    #[arg(value_name = "DOMAIN")]
    pub args: Vec<String>,

    /// Record type, e.g. A, AAAA, CNAME, MX, TXT.
    #[arg(short = 't', long = "type")]
    pub kind: String,

    /// Record name.
    #[arg(short, long)]
    pub name: String,

    /// Record data.
    #[arg(short, long)]
    pub data: String,

    /// Time to live in seconds.
    #[arg(long)]
    pub ttl: Option<u32>,

    /// Priority, for MX and SRV records.
    #[arg(long)]
    pub priority: Option<i32>,
}

/// Flags of `dns record update`.
#[derive(Args, Debug, Clone)]
pub struct RecordUpdateArgs {
    /// Domain name followed by the record ID.
    #[arg(value_name = "DOMAIN RECORD_ID")]
    pub args: Vec<String>,

    /// Record name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Record data.
    #[arg(short, long)]
    pub data: Option<String>,

    /// Time to live in seconds.
    #[arg(long)]
    pub ttl: Option<u32>,

    /// Priority, for MX and SRV records.
    #[arg(long)]
    pub priority: Option<i32>,
}

impl DomainCreateArgs {
    fn request(&self) -> DomainCreate {
        DomainCreate {
            domain: self.domain.clone(),
            ip: self.ip.clone(),
            dns_sec: self.dns_sec.clone(),
        }
    }
}

impl RecordCreateArgs {
    fn request(&self) -> RecordCreate {
        RecordCreate {
            name: self.name.clone(),
            kind: self.kind.clone(),
            data: self.data.clone(),
            ttl: self.ttl,
            priority: self.priority,
        }
    }
}

impl RecordUpdateArgs {
    /// Only the flags given on the command line reach the body.
    fn request(&self) -> RecordUpdate {
        RecordUpdate {
            name: self.name.clone(),
            data: self.data.clone(),
            ttl: self.ttl,
            priority: self.priority,
        }
    }
}

impl DnsCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::Domain { command } => match command {
                DomainCommands::List(_) | DomainCommands::Create(_) => ArgRule::Any,
                DomainCommands::Get(_) | DomainCommands::Delete(_) => {
                    ArgRule::Exact(1, DOMAIN_REQUIRED)
                }
            },
            Self::Record { command } => match command {
                RecordCommands::List { .. } | RecordCommands::Create(_) => {
                    ArgRule::Exact(1, DOMAIN_REQUIRED)
                }
                RecordCommands::Get(_) | RecordCommands::Update(_) | RecordCommands::Delete(_) => {
                    ArgRule::Exact(2, RECORD_REQUIRED)
                }
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
            Self::Domain { command } => command.execute(base).await,
            Self::Record { command } => command.execute(base).await,
        }
    }
}

impl DomainCommands {
    async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        let client = base.client();
        match self {
            Self::List(_) => {
                let page = base
                    .call("error retrieving domain list", client.list_domains(base.list_options()))
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let domain = base
                    .call("error retrieving domain", client.get_domain(base.arg(0)))
                    .await?;
                base.render(&ItemView::new(domain))
            }
            Self::Create(args) => {
                let domain = base
                    .call("error creating domain", client.create_domain(&args.request()))
                    .await?;
                base.render(&ItemView::new(domain))
            }
            Self::Delete(_) => {
                base.call("error deleting domain", client.delete_domain(base.arg(0)))
                    .await?;
                base.render(&Message::new("domain has been deleted"))
            }
        }
    }
}

impl RecordCommands {
    async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        let client = base.client();
        let domain = base.arg(0);
        let record = base.arg(1);
        match self {
            Self::List { .. } => {
                let page = base
                    .call(
                        "error retrieving domain record list",
                        client.list_records(domain, base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let found = base
                    .call("error retrieving domain record", client.get_record(domain, record))
                    .await?;
                base.render(&ItemView::new(found))
            }
            Self::Create(args) => {
                let created = base
                    .call(
                        "error creating domain record",
                        client.create_record(domain, &args.request()),
                    )
                    .await?;
                base.render(&ItemView::new(created))
            }
            Self::Update(args) => {
                base.call(
                    "error updating domain record",
                    client.update_record(domain, record, &args.request()),
                )
                .await?;
                base.render(&Message::new("domain record has been updated"))
            }
            Self::Delete(_) => {
                base.call("error deleting domain record", client.delete_record(domain, record))
                    .await?;
                base.render(&Message::new("domain record has been deleted"))
            }
        }
    }
}

impl Record for Domain {
    const PLURAL: &'static str = "domains";
    const SINGULAR: &'static str = "domain";
    const HEADERS: &'static [&'static str] = &["DOMAIN", "DATE CREATED", "DNS SEC"];

    fn cells(&self) -> Row {
        cells![self.domain, self.date_created, self.dns_sec]
    }
}

impl Record for DomainRecord {
    const PLURAL: &'static str = "records";
    const SINGULAR: &'static str = "record";
    const HEADERS: &'static [&'static str] = &["ID", "TYPE", "NAME", "DATA", "PRIORITY", "TTL"];

    fn cells(&self) -> Row {
        cells![self.id, self.kind, self.name, self.data, self.priority, self.ttl]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    use crate::cli::{Cli, Commands};

    fn record_command(argv: &[&str]) -> Option<RecordCommands> {
        match Cli::try_parse_from(argv).ok()?.command {
            Commands::Dns {
                command: DnsCommands::Record { command },
            } => Some(command),
            _ => None,
        }
    }

    #[test]
    fn record_update_sends_ttl_and_priority_only() {
        let command = record_command(&[
            "vultr-cli", "dns", "record", "update", "example.com", "rec-1", "--ttl", "300",
            "--priority", "10",
        ]);
        let Some(RecordCommands::Update(args)) = command else {
            unreachable!("record update parses");
        };

        assert_eq!(args.args, ["example.com", "rec-1"]);
        let body = serde_json::to_value(args.request()).expect("encodes");
        assert_eq!(body, json!({"ttl": 300, "priority": 10}));
    }

    #[test]
    fn record_update_without_flags_is_empty_object() {
        let args = RecordUpdateArgs {
            args: vec!["example.com".into(), "rec-1".into()],
            name: None,
            data: None,
            ttl: None,
            priority: None,
        };
        let body = serde_json::to_value(args.request()).expect("encodes");
        assert_eq!(body, json!({}));
    }

    #[test]
    fn record_create_uses_type_key() {
        let command = record_command(&[
            "vultr-cli", "dns", "record", "create", "example.com", "--type", "MX", "--name", "",
            "--data", "mail.example.com", "--priority", "5",
        ]);
        let Some(RecordCommands::Create(args)) = command else {
            unreachable!("record create parses");
        };

        let body = serde_json::to_value(args.request()).expect("encodes");
        assert_eq!(
            body,
            json!({"name": "", "type": "MX", "data": "mail.example.com", "priority": 5})
        );
    }

    #[test]
    fn domain_create_omits_unset_ip() {
        let args = DomainCreateArgs {
            domain: "example.com".into(),
            ip: None,
            dns_sec: Some("enabled".into()),
        };
        let body = serde_json::to_value(args.request()).expect("encodes");
        assert_eq!(body, json!({"domain": "example.com", "dns_sec": "enabled"}));
    }

    #[test]
    fn record_arg_rules() {
        let get = DnsCommands::Record {
            command: RecordCommands::Get(RecordArgs { args: Vec::new() }),
        };
        assert_eq!(get.arg_rule().check(&["example.com".into()]), Err(RECORD_REQUIRED));

        let domain = DnsCommands::Domain {
            command: DomainCommands::Get(DomainArgs { args: Vec::new() }),
        };
        assert_eq!(domain.arg_rule().check(&[]), Err(DOMAIN_REQUIRED));
    }

    #[test]
    fn rows_match_headers() {
        assert_eq!(Domain::default().cells().len(), Domain::HEADERS.len());
        assert_eq!(DomainRecord::default().cells().len(), DomainRecord::HEADERS.len());
    }
}
