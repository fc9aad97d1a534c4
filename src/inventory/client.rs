//! Docker Engine inventory client
//!
//! A read-only client for the engine's list endpoints, speaking the JSON
//! REST API over the configured HTTP endpoint.

use crate::environment::Environment;
use crate::inventory::Inventory;
use crate::inventory::error::InventoryError;
use crate::inventory::types::{
    ContainerSummary, ImageSummary, NetworkSummary, Volume, VolumeListResponse,
};
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("dockdash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct EngineClient {
    client: Client,
    environment: Environment,
}

impl EngineClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.engine_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, InventoryError> {
        if !response.status().is_success() {
            return Err(InventoryError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, InventoryError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        serde_json::from_slice(&response_bytes).map_err(InventoryError::Decode)
    }
}

#[async_trait::async_trait]
impl Inventory for EngineClient {
    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>, InventoryError> {
        self.get_json(&format!("containers/json?all={}", all)).await
    }

    async fn list_images(&self) -> Result<Vec<ImageSummary>, InventoryError> {
        self.get_json("images/json").await
    }

    async fn list_volumes(&self) -> Result<Vec<Volume>, InventoryError> {
        let response: VolumeListResponse = self.get_json("volumes").await?;
        Ok(response.into_volumes())
    }

    async fn list_networks(&self) -> Result<Vec<NetworkSummary>, InventoryError> {
        self.get_json("networks").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_endpoint_without_double_slash() {
        let client = EngineClient::new(Environment::Custom {
            engine_url: "http://127.0.0.1:2375/".to_string(),
        });
        assert_eq!(
            client.build_url("/containers/json?all=true"),
            "http://127.0.0.1:2375/containers/json?all=true"
        );
    }
}
