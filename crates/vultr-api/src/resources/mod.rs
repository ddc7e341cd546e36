//! Models and typed operations, one module per API resource.
//!
//! Each module adds its operations to [`ApiClient`](crate::ApiClient) in an
//! `impl` block, so callers only ever deal with one client type.

pub mod account;
pub mod backup;
pub mod bare_metal;
pub mod billing;
pub mod block_storage;
pub mod catalog;
pub mod cdn;
pub mod database;
pub mod dns;
pub mod firewall;
pub mod instance;
pub mod kubernetes;
pub mod load_balancer;
pub mod object_storage;
pub mod snapshot;
pub mod ssh_key;
pub mod user;
pub mod vpc;
