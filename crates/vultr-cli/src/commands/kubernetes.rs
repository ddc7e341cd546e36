//! `kubernetes` commands for VKE clusters.

use clap::{Args, Subcommand};
use vultr_api::Transport;
use vultr_api::resources::kubernetes::{Cluster, ClusterCreate, NodePoolCreate};

use crate::base::{ArgRule, ExecutionBase};
use crate::cli::{IdArgs, PageArgs};
use crate::error::CliError;
use crate::output::{Detail, DetailView, ItemView, ListView, Message, Record, Row, blank, cells};

/// Kubernetes subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum KubernetesCommands {
    /// List all Kubernetes clusters.
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Get a Kubernetes cluster.
    #[command(visible_alias = "info")]
    Get(IdArgs),

    /// Create a Kubernetes cluster.
    #[command(after_help = "Example:\n  vultr-cli kubernetes create --region ewr --version v1.29.2+1 \\\n    --node-pools quantity:3,label:workers,plan:vc2-2c-4gb")]
    Create(CreateArgs),

    /// Delete a Kubernetes cluster.
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),
}

/// Flags of `kubernetes create`.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Label for the cluster.
    #[arg(short, long)]
    pub label: Option<String>,

    /// Region to create the cluster in.
    #[arg(short, long)]
    pub region: String,

    /// Kubernetes version.
    #[arg(long)]
    pub version: String,

    /// Node pool as quantity:N,label:NAME,plan:PLAN. Repeat for more pools.
    #[arg(short, long = "node-pools", required = true)]
    pub node_pools: Vec<String>,
}

impl CreateArgs {
    fn request(&self) -> Result<ClusterCreate, CliError> {
        let node_pools = self
            .node_pools
            .iter()
            .map(|raw| parse_node_pool(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ClusterCreate {
            label: self.label.clone(),
            region: self.region.clone(),
            version: self.version.clone(),
            node_pools,
        })
    }
}

/// Parse one `--node-pools` value.
fn parse_node_pool(raw: &str) -> Result<NodePoolCreate, CliError> {
    let invalid = |reason: String| CliError::FlagParse {
        flag: "node-pools",
        reason,
    };

    let mut quantity = None;
    let mut label = None;
    let mut plan = None;
    for field in raw.split(',').filter(|f| !f.trim().is_empty()) {
        let (key, value) = field
            .split_once(':')
            .ok_or_else(|| invalid(format!("expected key:value, got {field:?}")))?;
        let value = value.trim();
        match key.trim() {
            "quantity" => {
                let n = value
                    .parse::<u32>()
                    .map_err(|e| invalid(format!("quantity {value:?}: {e}")))?;
                quantity = Some(n);
            }
            "label" => label = Some(value.to_string()),
            "plan" => plan = Some(value.to_string()),
            other => return Err(invalid(format!("unknown key {other:?}"))),
        }
    }

    Ok(NodePoolCreate {
        node_quantity: quantity.ok_or_else(|| invalid("missing quantity".into()))?,
        label: label.ok_or_else(|| invalid("missing label".into()))?,
        plan: plan.ok_or_else(|| invalid("missing plan".into()))?,
    })
}

impl KubernetesCommands {
    /// Positional-argument contract.
    #[must_use]
    pub const fn arg_rule(&self) -> ArgRule {
        match self {
            Self::List(_) | Self::Create(_) => ArgRule::Any,
            Self::Get(_) | Self::Delete(_) => ArgRule::Exact(1, "please provide a cluster ID"),
        }
    }

    /// Run the subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if a flag value is malformed or the API call fails
    /// or is cancelled.
    pub async fn execute<T: Transport>(&self, base: &ExecutionBase<T>) -> Result<String, CliError> {
        let client = base.client();
        let id = base.arg(0);
        match self {
            Self::List(_) => {
                let page = base
                    .call("error retrieving kubernetes cluster list", client.list_clusters(base.list_options()))
                    .await?;
                base.render(&ListView::new(page))
            }
            Self::Get(_) => {
                let cluster = base
                    .call("error retrieving kubernetes cluster", client.get_cluster(id))
                    .await?;
                base.render(&DetailView::new(cluster))
            }
            Self::Create(args) => {
                let request = args.request()?;
                let cluster = base
                    .call("error creating kubernetes cluster", client.create_cluster(&request))
                    .await?;
                base.render(&ItemView::new(cluster))
            }
            Self::Delete(_) => {
                base.call("error deleting kubernetes cluster", client.delete_cluster(id))
                    .await?;
                base.render(&Message::new("kubernetes cluster has been deleted"))
            }
        }
    }
}

impl Record for Cluster {
    const PLURAL: &'static str = "vke_clusters";
    const SINGULAR: &'static str = "vke_cluster";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "LABEL",
        "DATE CREATED",
        "CLUSTER SUBNET",
        "SERVICE SUBNET",
        "IP",
        "ENDPOINT",
        "VERSION",
        "REGION",
        "STATUS",
        "NODE POOLS",
    ];

    fn cells(&self) -> Row {
        cells![
            self.id,
            self.label,
            self.date_created,
            self.cluster_subnet,
            self.service_subnet,
            self.ip,
            self.endpoint,
            self.version,
            self.region,
            self.status,
            self.node_pools.len(),
        ]
    }
}

impl Detail for Cluster {
    const SINGULAR: &'static str = "vke_cluster";

    fn detail_rows(&self) -> Vec<Row> {
        let mut rows = vec![
            cells!["ID", self.id],
            cells!["LABEL", self.label],
            cells!["DATE CREATED", self.date_created],
            cells!["CLUSTER SUBNET", self.cluster_subnet],
            cells!["SERVICE SUBNET", self.service_subnet],
            cells!["IP", self.ip],
            cells!["ENDPOINT", self.endpoint],
            cells!["VERSION", self.version],
            cells!["REGION", self.region],
            cells!["STATUS", self.status],
        ];

        for pool in &self.node_pools {
            rows.push(blank());
            rows.push(cells!["NODE POOL"]);
            rows.extend([
                cells!["ID", pool.id],
                cells!["DATE CREATED", pool.date_created],
                cells!["DATE UPDATED", pool.date_updated],
                cells!["LABEL", pool.label],
                cells!["TAG", pool.tag],
                cells!["PLAN", pool.plan],
                cells!["STATUS", pool.status],
                cells!["NODE QUANTITY", pool.node_quantity],
                cells!["AUTO SCALER", pool.auto_scaler],
                cells!["MIN NODES", pool.min_nodes],
                cells!["MAX NODES", pool.max_nodes],
            ]);
            for node in &pool.nodes {
                rows.push(blank());
                rows.push(cells!["NODE"]);
                rows.extend([
                    cells!["ID", node.id],
                    cells!["DATE CREATED", node.date_created],
                    cells!["LABEL", node.label],
                    cells!["STATUS", node.status],
                ]);
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use vultr_api::resources::kubernetes::{Node, NodePool};

    #[test]
    fn parses_node_pool() {
        let pool = parse_node_pool("quantity:3,label:workers,plan:vc2-2c-4gb").expect("valid");
        assert_eq!(pool.node_quantity, 3);
        assert_eq!(pool.label, "workers");
        assert_eq!(pool.plan, "vc2-2c-4gb");
    }

    #[test_case("quantity:3,label:workers", "missing plan" ; "missing plan")]
    #[test_case("quantity:x,label:a,plan:b", "quantity" ; "bad quantity")]
    #[test_case("quantity=3", "expected key:value" ; "no separator")]
    #[test_case("size:3,label:a,plan:b", "unknown key" ; "unknown key")]
    fn rejects_malformed_node_pool(raw: &str, fragment: &str) {
        let err = parse_node_pool(raw).expect_err("invalid");
        assert!(matches!(err, CliError::FlagParse { flag: "node-pools", .. }));
        assert!(err.to_string().contains(fragment), "{err}");
        assert!(err.to_string().starts_with("invalid value for --node-pools"));
    }

    #[test]
    fn detail_rows_nest_pools_and_nodes() {
        let cluster = Cluster {
            id: "c1".into(),
            node_pools: vec![NodePool {
                id: "p1".into(),
                nodes: vec![Node {
                    id: "n1".into(),
                    ..Node::default()
                }],
                ..NodePool::default()
            }],
            ..Cluster::default()
        };
        let rows = cluster.detail_rows();

        assert_eq!(rows[0], cells!["ID", "c1"]);
        assert!(rows.contains(&cells!["NODE POOL"]));
        assert!(rows.contains(&cells!["NODE"]));
        assert!(rows.contains(&cells!["ID", "n1"]));
    }
}
