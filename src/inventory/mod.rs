use crate::inventory::error::InventoryError;
use crate::inventory::types::{ContainerSummary, ImageSummary, NetworkSummary, Volume};

pub(crate) mod client;
pub use client::EngineClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Inventory: Send + Sync {
    /// Lists containers; `all` includes stopped ones.
    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>, InventoryError>;

    /// Lists images known to the engine.
    async fn list_images(&self) -> Result<Vec<ImageSummary>, InventoryError>;

    /// Lists volumes. Null entries in the engine response are skipped.
    async fn list_volumes(&self) -> Result<Vec<Volume>, InventoryError>;

    /// Lists networks.
    async fn list_networks(&self) -> Result<Vec<NetworkSummary>, InventoryError>;
}
