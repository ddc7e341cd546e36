//! `user` commands.

use clap::{Args, Subcommand};
use vultr_api::Transport;
use vultr_api::resources::user::{User, UserCreate, UserUpdate};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells, list};

/// User subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum UserCommands {
    /// List all users.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a user.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Create a user.
    Create(CreateArgs),

    /// Update a user.
    Update(UpdateArgs),

    /// Delete a user.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),
}

/// Flags of `user create`.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Email address.
    #[arg(short, long)]
    pub email: String,

    /// Display name.
    #[arg(short, long)]
    pub name: String,

    /// Password.
    #[arg(long)]
    pub password: String,

    /// Allow API access: true or false.
    #[arg(long = "api-enabled")]
    pub api_enabled: Option<bool>,

    /// Access control entries, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    pub acl: Vec<String>,
}

/// Flags of `user update`.
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// User ID.
    #[arg(value_name = "ID")]
    pub args: Vec<String>,

    /// New email address.
    #[arg(short, long)]
    pub email: Option<String>,

    /// New display name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// New password.
    #[arg(long)]
    pub password: Option<String>,

    /// Allow API access: true or false.
    #[arg(long = "api-enabled")]
    pub api_enabled: Option<bool>,

    /// Replacement access control entries, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    pub acl: Option<Vec<String>>,
}

impl CreateArgs {
    fn request(&self) -> UserCreate {
        UserCreate {
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
            api_enabled: self.api_enabled,
            acls: self.acl.clone(),
        }
    }
}

impl UpdateArgs {
    fn request(&self) -> UserUpdate {
        UserUpdate {
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
            api_enabled: self.api_enabled,
            acls: self.acl.clone(),
        }
    }
}

impl UserCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) | Self::Create(_) => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide a user ID"),
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
                    .call("error retrieving user list", client.list_users(base.list_options()))
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let user = base.call("error retrieving user", client.get_user(id)).await?;
                base.render(&ItemView::new(user))
            }
            Self::Create(args) => {
                let user = base
                    .call("error creating user", client.create_user(&args.request()))
                    .await?;
                base.render(&ItemView::new(user))
            }
            Self::Update(args) => {
                base.call("error updating user", client.update_user(id, &args.request()))
                    .await?;
                base.render(&Message::new("user has been updated"))
            }
            Self::Delete(_) => {
                base.call("error deleting user", client.delete_user(id)).await?;
                base.render(&Message::new("user has been deleted"))
            }
        }
    }
}

impl Record for User {
    const PLURAL: &'static str = "users";
    const SINGULAR: &'static str = "user";
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "EMAIL", "API", "ACL"];

    fn cells(&self) -> Row {
        cells![self.id, self.name, self.email, self.api_enabled, list(&self.acls)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    use crate::cli::{Cli, Commands};

    fn user_command(argv: &[&str]) -> Option<UserCommands> {
        match Cli::try_parse_from(argv).ok()?.command {
            Commands::User { command } => Some(command),
            _ => None,
        }
    }

    #[test]
    fn update_sends_explicit_false_api_flag() {
        let command = user_command(&["vultr-cli", "user", "update", "u-1", "--api-enabled", "false"]);
        let Some(UserCommands::Update(args)) = command else {
            unreachable!("user update parses");
        };

        let body = serde_json::to_value(args.request()).expect("encodes");
        assert_eq!(body, json!({"api_enabled": false}));
    }

    #[test]
    fn update_without_api_flag_leaves_it_out() {
        let command = user_command(&["vultr-cli", "user", "update", "u-1", "--name", "Ada"]);
        let Some(UserCommands::Update(args)) = command else {
            unreachable!("user update parses");
        };

        let body = serde_json::to_value(args.request()).expect("encodes");
        assert_eq!(body, json!({"name": "Ada"}));
    }

    #[test]
    fn create_splits_acl_list() {
        let command = user_command(&[
            "vultr-cli", "user", "create", "--email", "ada@example.com", "--name", "Ada",
            "--password", "hunter22", "--acl", "manage_users,billing",
        ]);
        let Some(UserCommands::Create(args)) = command else {
            unreachable!("user create parses");
        };

        let body = serde_json::to_value(args.request()).expect("encodes");
        assert_eq!(body["acls"], json!(["manage_users", "billing"]));
        assert!(body.get("api_enabled").is_none());
    }

    #[test]
    fn rows_match_headers() {
        assert_eq!(User::default().cells().len(), User::HEADERS.len());
    }
}
