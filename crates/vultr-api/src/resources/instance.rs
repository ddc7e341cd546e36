//! Cloud compute instances.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, segment};
use crate::error::ApiError;
use crate::paging::{ListOptions, Page};
use crate::transport::{Method, Transport};

/// Compute instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    /// Instance ID.
    pub id: String,
    /// Operating system name.
    pub os: String,
    /// RAM in MB.
    pub ram: u64,
    /// Disk size in GB.
    pub disk: u64,
    /// Main IPv4 address.
    pub main_ip: String,
    /// vCPU count.
    pub vcpu_count: u32,
    /// Region ID.
    pub region: String,
    /// Plan ID.
    pub plan: String,
    /// Creation date.
    pub date_created: String,
    /// Instance status.
    pub status: String,
    /// Monthly bandwidth allowance in GB.
    pub allowed_bandwidth: u64,
    /// IPv4 netmask.
    pub netmask_v4: String,
    /// IPv4 gateway.
    pub gateway_v4: String,
    /// Power status.
    pub power_status: String,
    /// Server status.
    pub server_status: String,
    /// IPv6 network.
    pub v6_network: String,
    /// Main IPv6 address.
    pub v6_main_ip: String,
    /// IPv6 network size.
    pub v6_network_size: u32,
    /// User label.
    pub label: String,
    /// Private network IP.
    pub internal_ip: String,
    /// KVM console URL.
    pub kvm: String,
    /// Hostname.
    pub hostname: String,
    /// Operating system ID.
    pub os_id: u32,
    /// Application ID.
    pub app_id: u32,
    /// Marketplace image ID.
    pub image_id: String,
    /// Firewall group ID.
    pub firewall_group_id: String,
    /// Enabled features.
    pub features: Vec<String>,
    /// Tags.
    pub tags: Vec<String>,
}

/// Body of an instance create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstanceCreate {
    /// Region ID.
    pub region: String,
    /// Plan ID.
    pub plan: String,
    /// Operating system ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_id: Option<u32>,
    /// Application ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<u32>,
    /// Marketplace image ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Snapshot ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// User label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Hostname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// SSH key IDs to install.
    #[serde(rename = "sshkey_id", skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<String>,
    /// Enable IPv6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ipv6: Option<bool>,
    /// `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<String>,
    /// Firewall group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_group_id: Option<String>,
}

/// Body of an instance update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstanceUpdate {
    /// New label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New plan ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Replacement tag set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New firewall group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_group_id: Option<String>,
    /// Enable IPv6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ipv6: Option<bool>,
    /// `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// List instances.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_instances(&self, options: &ListOptions) -> Result<Page<Instance>, ApiError> {
        self.list("/instances", "instances", options).await
    }

    /// Get an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_instance(&self, id: &str) -> Result<Instance, ApiError> {
        self.fetch(&format!("/instances/{}", segment(id)), "instance").await
    }

    /// Create an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_instance(&self, request: &InstanceCreate) -> Result<Instance, ApiError> {
        self.submit(Method::Post, "/instances", request, "instance")
            .await
    }

    /// Update an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_instance(
        &self,
        id: &str,
        request: &InstanceUpdate,
    ) -> Result<Instance, ApiError> {
        self.submit(Method::Patch, &format!("/instances/{}", segment(id)), request, "instance")
            .await
    }

    /// Delete an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_instance(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/instances/{}", segment(id))).await
    }

    /// Start an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn start_instance(&self, id: &str) -> Result<(), ApiError> {
        self.action(&format!("/instances/{}/start", segment(id))).await
    }

    /// Halt an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn halt_instance(&self, id: &str) -> Result<(), ApiError> {
        self.action(&format!("/instances/{}/halt", segment(id))).await
    }

    /// Reboot an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn reboot_instance(&self, id: &str) -> Result<(), ApiError> {
        self.action(&format!("/instances/{}/reboot", segment(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeTransport;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("start" ; "start")]
    #[test_case("halt" ; "halt")]
    #[test_case("reboot" ; "reboot")]
    #[tokio::test]
    async fn power_actions_post_to_action_path(action: &str) {
        let path = format!("/instances/abc/{action}");
        let client =
            ApiClient::new(FakeTransport::new().respond_empty(Method::Post, path.clone(), 204));

        match action {
            "start" => client.start_instance("abc").await,
            "halt" => client.halt_instance("abc").await,
            _ => client.reboot_instance("abc").await,
        }
        .expect("action succeeds");

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, path);
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn create_sends_only_chosen_image_source() {
        let client = ApiClient::new(FakeTransport::new().respond(
            Method::Post,
            "/instances",
            202,
            json!({"instance": {"id": "new-id", "status": "pending"}}),
        ));
        let request = InstanceCreate {
            region: "ewr".into(),
            plan: "vc2-1c-1gb".into(),
            os_id: Some(387),
            ssh_keys: vec!["key-1".into()],
            ..InstanceCreate::default()
        };

        let created = client.create_instance(&request).await.expect("create");
        assert_eq!(created.id, "new-id");

        let body = client.transport().requests()[0].body.clone().expect("body");
        assert_eq!(
            body,
            json!({"region": "ewr", "plan": "vc2-1c-1gb", "os_id": 387, "sshkey_id": ["key-1"]})
        );
    }

    #[test]
    fn update_omits_unset_fields() {
        let update = InstanceUpdate {
            label: Some("web".into()),
            ..InstanceUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).expect("encodes"),
            json!({"label": "web"})
        );
    }

    #[tokio::test]
    async fn delete_escapes_traversal_in_id() {
        let client = ApiClient::new(FakeTransport::new());

        // Unrouted paths answer 404; only the recorded path matters here.
        let _ = client.delete_instance("../ssh-keys/abc").await;
        let _ = client.delete_instance("..").await;

        let paths: Vec<_> = client
            .transport()
            .requests()
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, ["/instances/..%2Fssh-keys%2Fabc", "/instances/%2E%2E"]);
    }
}
