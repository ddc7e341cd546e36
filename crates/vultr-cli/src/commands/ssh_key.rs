//! `ssh-key` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::ssh_key::{SshKey, SshKeyRequest};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells};

/// SSH key subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum SshKeyCommands {
    /// List all SSH keys.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get an SSH key.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Create an SSH key.
    Create {
        /// Name of the key.
        #[arg(short, long)]
        name: String,

        /// Public key contents.
        #[arg(short, long)]
        key: String,
    },

    /// Update an SSH key.
    Update {
        /// SSH key ID.
        #[arg(value_name = "ID")]
        args: Vec<String>,

        /// New name.
        #[arg(short, long)]
        name: Option<String>,

        /// New public key contents.
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Delete an SSH key.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),
}

impl SshKeyCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) | Self::Create { .. } => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide an ssh key ID"),
        }
    }

    /// Body for create and update. Other subcommands send none, so the
    /// result is empty for them.
    fn request(&self) -> SshKeyRequest {
        match self {
            Self::Create { name, key } => SshKeyRequest {
                name: Some(name.clone()),
                ssh_key: Some(key.clone()),
            },
            Self::Update { name, key, .. } => SshKeyRequest {
                name: name.clone(),
                ssh_key: key.clone(),
            },
            _ => SshKeyRequest::default(),
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
                    .call("error retrieving ssh key list", client.list_ssh_keys(base.list_options()))
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let key = base
                    .call("error retrieving ssh key", client.get_ssh_key(id))
                    .await?;
                base.render(&ItemView::new(key))
            }
            Self::Create { .. } => {
                let created = base
                    .call("error creating ssh key", client.create_ssh_key(&self.request()))
                    .await?;
                base.render(&ItemView::new(created))
            }
            Self::Update { .. } => {
                base.call("error updating ssh key", client.update_ssh_key(id, &self.request()))
                    .await?;
                base.render(&Message::new("ssh key has been updated"))
            }
            Self::Delete(_) => {
                base.call("error deleting ssh key", client.delete_ssh_key(id))
                    .await?;
                base.render(&Message::new("ssh key has been deleted"))
            }
        }
    }
}

impl Record for SshKey {
    const PLURAL: &'static str = "ssh_keys";
    const SINGULAR: &'static str = "ssh_key";
    const HEADERS: &'static [&'static str] = &["ID", "DATE CREATED", "NAME", "KEY"];

    fn cells(&self) -> Row {
        cells![self.id, self.date_created, self.name, self.ssh_key]
    }
}
