//! `bare-metal` commands.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::bare_metal::BareMetal;

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells, list};

/// Bare metal subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum BareMetalCommands {
    /// List all bare metal servers.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a bare metal server.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Delete a bare metal server.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),

    /// Start a bare metal server.
    Start(IdArgs),

    /// Halt a bare metal server.
    Halt(IdArgs),

    /// Reboot a bare metal server.
    Reboot(IdArgs),
}

impl BareMetalCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide a bare metal ID"),
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
                    .call(
                        "error retrieving bare metal list",
                        client.list_bare_metal(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let server = base
                    .call("error retrieving bare metal", client.get_bare_metal(id))
                    .await?;
                base.render(&ItemView::new(server))
            }
            Self::Delete(_) => {
                base.call("error deleting bare metal", client.delete_bare_metal(id))
                    .await?;
                base.render(&Message::new("bare metal server has been deleted"))
            }
            Self::Start(_) => {
                base.call("error starting bare metal", client.start_bare_metal(id))
                    .await?;
                base.render(&Message::new("bare metal server has been started"))
            }
            Self::Halt(_) => {
                base.call("error halting bare metal", client.halt_bare_metal(id))
                    .await?;
                base.render(&Message::new("bare metal server has been halted"))
            }
            Self::Reboot(_) => {
                base.call("error rebooting bare metal", client.reboot_bare_metal(id))
                    .await?;
                base.render(&Message::new("bare metal server has been rebooted"))
            }
        }
    }
}

impl Record for BareMetal {
    const PLURAL: &'static str = "bare_metals";
    const SINGULAR: &'static str = "bare_metal";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "IP",
        "TAGS",
        "MAC ADDRESS",
        "LABEL",
        "OS",
        "STATUS",
        "REGION",
        "CPU",
        "RAM",
        "DISK",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.main_ip,
            list(&self.tags),
            self.mac_address,
            self.label,
            self.os,
            self.status,
            self.region,
            self.cpu_count,
            self.ram,
            self.disk,
        ]
    }
}
