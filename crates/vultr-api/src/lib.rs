//! # vultr-api
//!
//! Typed client for the Vultr v2 REST API.
//!
//! The crate is split into a thin [`Transport`] seam and an [`ApiClient`]
//! that turns each API endpoint into one async method:
//!
//! ```text
//! ┌────────────┐  typed ops   ┌───────────┐  Request/Response  ┌───────────────┐
//! │ vultr-cli  │─────────────►│ ApiClient │───────────────────►│ HttpTransport │
//! └────────────┘              └───────────┘                    └───────────────┘
//! ```
//!
//! Tests swap the HTTP transport for `fake::FakeTransport` (feature `fake`).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod paging;
pub mod resources;
pub mod transport;

#[cfg(any(test, feature = "fake"))]
pub mod fake;

pub use client::ApiClient;
pub use error::ApiError;
pub use paging::{DEFAULT_PER_PAGE, Links, ListOptions, Meta, Page};
pub use transport::{DEFAULT_BASE_URL, HttpTransport, Method, Request, Response, Transport};
