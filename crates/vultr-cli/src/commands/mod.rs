//! Leaf command implementations, one module per resource.
//!
//! Every leaf follows the same shape: read its flags, build a request,
//! make exactly one API call through [`ExecutionBase::call`], and render
//! the result. Leaves return the rendered text; the caller writes it.

use vultr_api::Transport;

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::Commands;
use crate::error::CliError;

pub mod account;
pub mod applications;
pub mod backups;
pub mod bare_metal;
pub mod billing;
pub mod block_storage;
pub mod cdn;
pub mod database;
pub mod dns;
pub mod firewall;
pub mod instance;
pub mod kubernetes;
pub mod load_balancer;
pub mod object_storage;
pub mod os;
pub mod plans;
pub mod regions;
pub mod snapshot;
pub mod ssh_key;
pub mod user;
pub mod vpc;

pub use account::AccountCommands;
pub use applications::ApplicationCommands;
pub use backups::BackupCommands;
pub use bare_metal::BareMetalCommands;
pub use billing::BillingCommands;
pub use block_storage::BlockStorageCommands;
pub use cdn::CdnCommands;
pub use database::DatabaseCommands;
pub use dns::DnsCommands;
pub use firewall::FirewallCommands;
pub use instance::InstanceCommands;
pub use kubernetes::KubernetesCommands;
pub use load_balancer::LoadBalancerCommands;
pub use object_storage::ObjectStorageCommands;
pub use os::OsCommands;
pub use plans::PlanCommands;
pub use regions::RegionCommands;
pub use snapshot::SnapshotCommands;
pub use ssh_key::SshKeyCommands;
pub use user::UserCommands;
pub use vpc::VpcCommands;

impl Commands {
    /// Whether the leaf needs an API key. Only the public catalogues don't.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Self::Applications { .. } | Self::Os { .. } | Self::Plans { .. } | Self::Regions { .. }
        )
    }

    /// Positional-argument contract of the invoked leaf.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::Account { .. }
            | Self::Applications { .. }
            | Self::Billing { .. }
            | Self::Os { .. }
            | Self::Plans { .. }
            | Self::Regions { .. } => ArgRule::Any,
            Self::Backups { command } => command.arg_rule(),
            Self::BareMetal { command } => command.arg_rule(),
            Self::BlockStorage { command } => command.arg_rule(),
            Self::Cdn { command } => command.arg_rule(),
            Self::Database { command } => command.arg_rule(),
            Self::Dns { command } => command.arg_rule(),
            Self::Firewall { command } => command.arg_rule(),
            Self::Instance { command } => command.arg_rule(),
            Self::Kubernetes { command } => command.arg_rule(),
            Self::LoadBalancer { command } => command.arg_rule(),
            Self::ObjectStorage { command } => command.arg_rule(),
            Self::Snapshot { command } => command.arg_rule(),
            Self::SshKey { command } => command.arg_rule(),
            Self::User { command } => command.arg_rule(),
            Self::Vpc { command } => command.arg_rule(),
        }
    }

    /// Run the invoked leaf and return its rendered output.
    ///
    /// # Errors
    ///
    /// Returns an error if a flag value is invalid, the API call fails or
    /// is cancelled, or the output cannot be rendered.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        match self {
            Self::Account { command } => command.execute(base).await,
            Self::Applications { command } => command.execute(base).await,
            Self::Backups { command } => command.execute(base).await,
            Self::BareMetal { command } => command.execute(base).await,
            Self::Billing { command } => command.execute(base).await,
            Self::BlockStorage { command } => command.execute(base).await,
            Self::Cdn { command } => command.execute(base).await,
            Self::Database { command } => command.execute(base).await,
            Self::Dns { command } => command.execute(base).await,
            Self::Firewall { command } => command.execute(base).await,
            Self::Instance { command } => command.execute(base).await,
            Self::Kubernetes { command } => command.execute(base).await,
            Self::LoadBalancer { command } => command.execute(base).await,
            Self::ObjectStorage { command } => command.execute(base).await,
            Self::Os { command } => command.execute(base).await,
            Self::Plans { command } => command.execute(base).await,
            Self::Regions { command } => command.execute(base).await,
            Self::Snapshot { command } => command.execute(base).await,
            Self::SshKey { command } => command.execute(base).await,
            Self::User { command } => command.execute(base).await,
            Self::Vpc { command } => command.execute(base).await,
        }
    }
}

/// Helpers for running one leaf against a fake transport.
#[cfg(test)]
pub(crate) mod testing {
    use clap::FromArgMatches;
    use tokio_util::sync::CancellationToken;
    use vultr_api::fake::FakeTransport;
    use vultr_api::{ApiClient, Request};

    use crate::base::ExecutionBase;
    use crate::cli::{self, Cli, Commands, Leaf};
    use crate::error::CliError;

    /// Parse `argv` and build the context the pre-run would hand the leaf.
    pub fn prepare(argv: &[&str], fake: FakeTransport) -> (Commands, ExecutionBase<FakeTransport>) {
        let matches = cli::command()
            .try_get_matches_from(argv)
            .expect("argv parses");
        let parsed = Cli::from_arg_matches(&matches).expect("argv maps onto Cli");
        let leaf = Leaf::from_matches(&matches);
        let base = ExecutionBase::new(
            ApiClient::new(fake),
            CancellationToken::new(),
            leaf.args,
            leaf.options,
            true,
        );
        (parsed.command, base)
    }

    /// Run `argv` against `fake`, returning the output and every request sent.
    pub async fn run(argv: &[&str], fake: FakeTransport) -> (Result<String, CliError>, Vec<Request>) {
        let (command, base) = prepare(argv, fake);
        let out = command.execute(&base).await;
        (out, base.client().transport().requests())
    }
}
