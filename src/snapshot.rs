//! Resource snapshot loading
//!
//! One fetch produces one immutable [`ResourceSnapshot`]. The four list
//! calls run sequentially and the result is all-or-nothing: a failure on
//! any call discards whatever was fetched before it.

use crate::inventory::Inventory;
use crate::inventory::error::InventoryError;
use crate::inventory::types::{ContainerSummary, ImageSummary, NetworkSummary, Volume};

/// The four resource collections of one fetch, or the error that sank it.
#[derive(Debug, Default)]
pub struct ResourceSnapshot {
    pub containers: Vec<ContainerSummary>,
    pub images: Vec<ImageSummary>,
    pub volumes: Vec<Volume>,
    pub networks: Vec<NetworkSummary>,
    pub load_error: Option<InventoryError>,
}

impl ResourceSnapshot {
    /// Snapshot carrying only a load error; all collections are empty.
    pub fn from_error(error: InventoryError) -> Self {
        Self {
            load_error: Some(error),
            ..Self::default()
        }
    }
}

/// Fetches all four collections from the inventory.
///
/// May block on the network; callers run it off the UI loop and deliver the
/// returned snapshot as a single event.
pub async fn load_snapshot(inventory: &dyn Inventory) -> ResourceSnapshot {
    match fetch_all(inventory).await {
        Ok(snapshot) => snapshot,
        Err(error) => ResourceSnapshot::from_error(error),
    }
}

async fn fetch_all(inventory: &dyn Inventory) -> Result<ResourceSnapshot, InventoryError> {
    let containers = inventory.list_containers(true).await?;
    let images = inventory.list_images().await?;
    let volumes = inventory.list_volumes().await?;
    let networks = inventory.list_networks().await?;
    Ok(ResourceSnapshot {
        containers,
        images,
        volumes,
        networks,
        load_error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::MockInventory;

    fn http_error() -> InventoryError {
        InventoryError::Http {
            status: 500,
            message: "engine unavailable".to_string(),
        }
    }

    #[tokio::test]
    async fn successful_fetch_populates_all_collections() {
        let mut inventory = MockInventory::new();
        inventory.expect_list_containers().returning(|_| {
            Ok(vec![ContainerSummary {
                id: "abc".to_string(),
                ..ContainerSummary::default()
            }])
        });
        inventory
            .expect_list_images()
            .returning(|| Ok(vec![ImageSummary::default()]));
        inventory
            .expect_list_volumes()
            .returning(|| Ok(vec![Volume::default()]));
        inventory
            .expect_list_networks()
            .returning(|| Ok(vec![NetworkSummary::default()]));

        let snapshot = load_snapshot(&inventory).await;
        assert!(snapshot.load_error.is_none());
        assert_eq!(snapshot.containers.len(), 1);
        assert_eq!(snapshot.images.len(), 1);
        assert_eq!(snapshot.volumes.len(), 1);
        assert_eq!(snapshot.networks.len(), 1);
    }

    #[tokio::test]
    async fn failure_discards_partial_results() {
        let mut inventory = MockInventory::new();
        inventory.expect_list_containers().returning(|_| {
            Ok(vec![ContainerSummary {
                id: "abc".to_string(),
                ..ContainerSummary::default()
            }])
        });
        inventory
            .expect_list_images()
            .returning(|| Ok(vec![ImageSummary::default()]));
        inventory
            .expect_list_volumes()
            .returning(|| Err(http_error()));
        inventory.expect_list_networks().never();

        let snapshot = load_snapshot(&inventory).await;
        assert!(snapshot.load_error.is_some());
        assert!(snapshot.containers.is_empty());
        assert!(snapshot.images.is_empty());
        assert!(snapshot.volumes.is_empty());
        assert!(snapshot.networks.is_empty());
    }

    #[tokio::test]
    async fn containers_are_listed_with_stopped_included() {
        let mut inventory = MockInventory::new();
        inventory
            .expect_list_containers()
            .withf(|all| *all)
            .returning(|_| Ok(vec![]));
        inventory.expect_list_images().returning(|| Ok(vec![]));
        inventory.expect_list_volumes().returning(|| Ok(vec![]));
        inventory.expect_list_networks().returning(|| Ok(vec![]));

        let snapshot = load_snapshot(&inventory).await;
        assert!(snapshot.load_error.is_none());
    }
}
