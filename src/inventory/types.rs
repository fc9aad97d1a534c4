//! Wire models for the Docker Engine list endpoints.
//!
//! Only the fields the dashboard displays are modeled. The engine emits
//! `null` for absent collections, so every collection field decodes through
//! [`null_default`].

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Decodes a nullable field into its default value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of `GET /containers/json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ContainerSummary {
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub names: Vec<String>,
    pub image: String,
    pub command: String,
    pub state: String,
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub ports: Vec<Port>,
    #[serde(deserialize_with = "null_default")]
    pub mounts: Vec<MountPoint>,
    pub network_settings: Option<NetworkSettingsSummary>,
}

impl ContainerSummary {
    /// Names of the networks the container is attached to, in map order.
    pub fn network_names(&self) -> Vec<&str> {
        self.network_settings
            .as_ref()
            .map(|settings| settings.networks.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// A published or exposed container port.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Port {
    #[serde(rename = "IP")]
    pub ip: String,
    pub private_port: u16,
    pub public_port: u16,
    #[serde(rename = "Type")]
    pub port_type: String,
}

/// A mount attached to a container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MountPoint {
    pub source: String,
    pub destination: String,
}

/// The `NetworkSettings` block of a container summary. Only the attached
/// network names are displayed, so the per-network detail is left opaque.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NetworkSettingsSummary {
    #[serde(deserialize_with = "null_default")]
    pub networks: BTreeMap<String, serde_json::Value>,
}

/// One entry of `GET /images/json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ImageSummary {
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub repo_tags: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub repo_digests: Vec<String>,
    pub size: i64,
    /// Number of containers using the image; `-1` when not computed.
    pub containers: i64,
}

/// One entry of the `GET /volumes` listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Volume {
    pub name: String,
    pub driver: String,
    pub mountpoint: String,
    #[serde(deserialize_with = "null_default")]
    pub labels: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_default")]
    pub options: BTreeMap<String, String>,
    pub created_at: String,
}

/// Response envelope of `GET /volumes`. Entries may be `null` and are
/// skipped by [`VolumeListResponse::into_volumes`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VolumeListResponse {
    #[serde(deserialize_with = "null_default")]
    pub volumes: Vec<Option<Volume>>,
}

impl VolumeListResponse {
    pub fn into_volumes(self) -> Vec<Volume> {
        self.volumes.into_iter().flatten().collect()
    }
}

/// One entry of `GET /networks`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NetworkSummary {
    pub id: String,
    pub name: String,
    pub driver: String,
    pub scope: String,
    pub internal: bool,
    pub attachable: bool,
    pub ingress: bool,
    #[serde(rename = "EnableIPv6")]
    pub enable_ipv6: bool,
}
