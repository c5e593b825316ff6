use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use wayfinder_core::navigator::Navigator;
use wayfinder_map_client::client::{MapClientError, MapServiceClient};

/// Loaded maps by id. A Navigator is immutable once published; loading and
/// refreshing build a complete replacement and swap the Arc under the write
/// lock, so requests still holding the old graph finish undisturbed.
pub struct MapRegistry {
    maps: RwLock<HashMap<u64, Arc<Navigator>>>,
    client: MapServiceClient,
}

impl MapRegistry {
    pub fn new(client: MapServiceClient) -> MapRegistry {
        MapRegistry {
            maps: RwLock::new(HashMap::new()),
            client,
        }
    }

    pub async fn get_or_load(&self, map_id: u64) -> Result<Arc<Navigator>, MapClientError> {
        if let Some(navigator) = self.maps.read().await.get(&map_id) {
            return Ok(Arc::clone(navigator));
        }

        // The fetch runs without holding the lock. Two first requests for the
        // same map may race and fetch it twice; the first insert wins.
        let payload = self.client.fetch_map(map_id).await?;

        let mut maps = self.maps.write().await;
        let navigator = maps
            .entry(map_id)
            .or_insert_with(|| Arc::new(payload.into_navigator()));

        Ok(Arc::clone(navigator))
    }

    pub async fn refresh(&self, map_id: u64) -> Result<Arc<Navigator>, MapClientError> {
        // Fetch before touching the table: a failure leaves the previously
        // published Navigator in place.
        let payload = self.client.fetch_map(map_id).await?;
        let navigator = Arc::new(payload.into_navigator());

        self.maps
            .write()
            .await
            .insert(map_id, Arc::clone(&navigator));
        info!(map_id, "Replaced map");

        Ok(navigator)
    }

    pub async fn loaded_maps(&self) -> usize {
        self.maps.read().await.len()
    }
}
