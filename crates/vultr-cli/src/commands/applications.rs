//! `applications` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::catalog::Application;

use crate::base::ExecutionBase;
use crate::cli::PageArgs;
use crate::error::CliError;
use crate::output::{ListView, Record, Row, cells};

/// Applications subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ApplicationCommands {
    /// List all available applications.
    #[command(visible_alias = "ls")]
    List(PageArgs),
}

impl ApplicationCommands {
    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        match self {
            Self::List(_) => {
                let page = base
                    .call(
                        "error retrieving application list",
                        base.client().list_applications(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
        }
    }
}

impl Record for Application {
    const PLURAL: &'static str = "applications";
    const SINGULAR: &'static str = "application";
    const HEADERS: &'static [&'static str] =
        &["ID", "NAME", "SHORT NAME", "DEPLOY NAME", "TYPE", "VENDOR", "IMAGE ID"];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.name,
            self.short_name,
            self.deploy_name,
            self.kind,
            self.vendor,
            self.image_id,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_match_headers() {
        let app = Application {
            id: 1,
            short_name: "lamp".into(),
            kind: "one-click".into(),
            ..Application::default()
        };
        let row = app.cells();
        assert_eq!(row.len(), Application::HEADERS.len());
        assert_eq!(row[0], "1");
        assert_eq!(row[4], "one-click");
    }
}
