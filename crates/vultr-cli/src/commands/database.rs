//! `database` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::database::Database;

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells};

/// Database subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum DatabaseCommands {
    /// List all managed databases.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a managed database.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Delete a managed database.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),
}

impl DatabaseCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide a database ID"),
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
                        "error retrieving database list",
                        client.list_databases(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let database = base
                    .call("error retrieving database", client.get_database(base.arg(0)))
                    .await?;
                base.render(&ItemView::new(database))
            }
            Self::Delete(_) => {
                base.call("error deleting database", client.delete_database(base.arg(0)))
                    .await?;
                base.render(&Message::new("database has been deleted"))
            }
        }
    }
}

impl Record for Database {
    const PLURAL: &'static str = "databases";
    const SINGULAR: &'static str = "database";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "DATE CREATED",
        "PLAN",
        "PLAN DISK",
        "PLAN RAM",
        "PLAN VCPUS",
        "PLAN REPLICAS",
        "REGION",
        "ENGINE",
        "VERSION",
        "STATUS",
        "LABEL",
        "DBNAME",
        "HOST",
        "PORT",
        "USER",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.date_created,
            self.plan,
            self.plan_disk,
            self.plan_ram,
            self.plan_vcpus,
            self.plan_replicas,
            self.region,
            self.database_engine,
            self.database_engine_version,
            self.status,
            self.label,
            self.dbname,
            self.host,
            self.port,
            self.user,
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
    async fn list_forwards_paging_flags() {
        let fake = FakeTransport::new().respond(
            Method::Get,
            "/databases",
            200,
            json!({"databases": [{"id": "db-1", "database_engine": "pg", "port": "5432"}], "meta": {"total": 1}}),
        );
        let (out, requests) = testing::run(
            &["vultr-cli", "database", "list", "--per-page", "5", "--cursor", "bmV4dA=="],
            fake,
        )
        .await;

        let out = out.expect("list succeeds");
        assert!(out.contains("db-1"), "{out}");
        assert_eq!(
            requests[0].query,
            vec![
                ("per_page".to_string(), "5".to_string()),
                ("cursor".to_string(), "bmV4dA==".to_string()),
            ]
        );
    }

    #[test]
    fn rows_match_headers() {
        assert_eq!(Database::default().cells().len(), Database::HEADERS.len());
    }
}
