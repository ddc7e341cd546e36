//! # vultr-cli
//!
//! Command-line interface for the Vultr cloud platform.
//!
//! Provides commands for:
//! - Compute instances, bare metal and Kubernetes clusters
//! - Block storage, object storage, snapshots and backups
//! - DNS, firewalls, load balancers and VPC networks
//! - Account, billing, users and SSH keys
//!
//! # Architecture
//!
//! Every invocation goes through [`app::run`]: clap parses the command
//! tree, [`config::resolve`] settles the API key and output mode, and the
//! leaf makes its API call through an [`base::ExecutionBase`] built over a
//! [`vultr_api::ApiClient`].
//!
//! ```text
//! ┌────────────┐   typed ops   ┌────────────┐    HTTPS    ┌──────────────┐
//! │ vultr-cli  │──────────────►│ vultr-api  │────────────►│ api.vultr.com│
//! └────────────┘               └────────────┘             └──────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod app;
pub mod base;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, GlobalArgs};
pub use error::CliError;
pub use output::Format;
