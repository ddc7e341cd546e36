//! `cdn` commands, operating on pull zones.

use clap::Subcommand;
use vultr_api::Transport;
use vultr_api::resources::cdn::PullZone;

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{ItemView, ListView, Message, Record, Row, cells, list};

/// CDN subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum CdnCommands {
    /// List all CDN pull zones.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a CDN pull zone.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Delete a CDN pull zone.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),

    /// Purge the cache of a CDN pull zone.
    Purge(IdArgs),
}

impl CdnCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) => ArgRule::Any,
            _ => ArgRule::Exact(1, "please provide a pull zone ID"),
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
                        "error retrieving pull zone list",
                        client.list_pull_zones(base.list_options()),
                    )
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let zone = base
                    .call("error retrieving pull zone", client.get_pull_zone(id))
                    .await?;
                base.render(&ItemView::new(zone))
            }
            Self::Delete(_) => {
                base.call("error deleting pull zone", client.delete_pull_zone(id))
                    .await?;
                base.render(&Message::new("pull zone has been deleted"))
            }
            Self::Purge(_) => {
                base.call("error purging pull zone", client.purge_pull_zone(id))
                    .await?;
                base.render(&Message::new("pull zone cache has been purged"))
            }
        }
    }
}

impl Record for PullZone {
    const PLURAL: &'static str = "pull_zones";
    const SINGULAR: &'static str = "pull_zone";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "DATE CREATED",
        "STATUS",
        "LABEL",
        "ORIGIN SCHEME",
        "ORIGIN DOMAIN",
        "CDN URL",
        "CACHE SIZE",
        "REQUESTS",
        "BYTES IN",
        "BYTES OUT",
        "DATE PURGED",
        "REGIONS",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.date_created,
            self.status,
            self.label,
            self.origin_scheme,
            self.origin_domain,
            self.cdn_url,
            self.cache_size,
            self.requests,
            self.in_bytes,
            self.out_bytes,
            self.date_purged,
            list(&self.regions),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vultr_api::Method;
    use vultr_api::fake::FakeTransport;

    use crate::commands::testing;

    #[tokio::test]
    async fn purge_posts_to_purge_path() {
        let fake = FakeTransport::new().respond_empty(Method::Post, "/cdns/pull-zones/pz-1/purge", 204);
        let (out, requests) = testing::run(&["vultr-cli", "cdn", "purge", "pz-1"], fake).await;

        assert_eq!(out.expect("purge succeeds"), "pull zone cache has been purged\n");
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/cdns/pull-zones/pz-1/purge");
    }

    #[tokio::test]
    async fn delete_hits_zone_path() {
        let fake = FakeTransport::new().respond_empty(Method::Delete, "/cdns/pull-zones/pz-1", 204);
        let (out, requests) = testing::run(&["vultr-cli", "cdn", "delete", "pz-1"], fake).await;

        assert_eq!(out.expect("delete succeeds"), "pull zone has been deleted\n");
        assert_eq!(requests[0].method, Method::Delete);
    }

    #[test]
    fn rows_match_headers() {
        assert_eq!(PullZone::default().cells().len(), PullZone::HEADERS.len());
    }
}
