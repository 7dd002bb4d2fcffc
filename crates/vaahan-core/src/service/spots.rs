//! Parking-spot collection service.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{Address, ParkingSpot, SpotDraft, SpotStatus};
use crate::error::DomainError;
use crate::ports::SessionStore;

/// Session-store key holding the serialized spot collection.
pub const PARKING_SPOTS_KEY: &str = "parking_spots";

/// Owner of the ordered parking-spot collection.
pub struct SpotService {
    spots: RwLock<Vec<ParkingSpot>>,
    store: Arc<dyn SessionStore>,
}

impl SpotService {
    /// Load the persisted collection; when it is absent or unreadable, seed
    /// with the single default record and persist the seed.
    ///
    /// A failed seed write is the one fatal startup condition and is
    /// propagated to the composition point.
    pub async fn load(store: Arc<dyn SessionStore>) -> Result<Self, DomainError> {
        let persisted = match store.get(PARKING_SPOTS_KEY).await {
            Some(raw) => match serde_json::from_str::<Vec<ParkingSpot>>(&raw) {
                Ok(spots) => Some(spots),
                Err(err) => {
                    tracing::warn!("Persisted spot collection is unreadable, reseeding: {err}");
                    None
                }
            },
            None => None,
        };

        let (spots, fresh) = match persisted {
            Some(spots) => (spots, false),
            None => (vec![seed_spot()], true),
        };

        let service = Self {
            spots: RwLock::new(spots),
            store,
        };

        if fresh {
            let spots = service.spots.read().await;
            service.persist(&spots).await?;
            tracing::debug!("Seeded default spot collection");
        }

        Ok(service)
    }

    /// Snapshot of the collection, order preserved.
    pub async fn spots(&self) -> Vec<ParkingSpot> {
        self.spots.read().await.clone()
    }

    /// Look up a single spot by id.
    pub async fn get(&self, id: &str) -> Option<ParkingSpot> {
        self.spots.read().await.iter().find(|s| s.id == id).cloned()
    }

    /// Append a new spot assembled from the draft, assigning a fresh
    /// time-derived id, and persist the collection.
    pub async fn create(&self, draft: SpotDraft) -> Result<ParkingSpot, DomainError> {
        let spot = ParkingSpot::from_draft(next_id(), draft);

        let mut spots = self.spots.write().await;
        spots.push(spot.clone());
        self.persist(&spots).await?;

        tracing::debug!(id = %spot.id, "Spot created");
        Ok(spot)
    }

    /// Replace the record matching `id` with the draft, keeping the id and
    /// discarding every previous field value.
    ///
    /// An unknown id is a silent no-op: nothing is written and `None` is
    /// returned.
    pub async fn update(
        &self,
        id: &str,
        draft: SpotDraft,
    ) -> Result<Option<ParkingSpot>, DomainError> {
        let mut spots = self.spots.write().await;
        let Some(slot) = spots.iter_mut().find(|s| s.id == id) else {
            tracing::debug!(id, "Update target not found, ignoring");
            return Ok(None);
        };

        *slot = ParkingSpot::from_draft(id.to_string(), draft);
        let updated = slot.clone();
        self.persist(&spots).await?;

        tracing::debug!(id, "Spot updated");
        Ok(Some(updated))
    }

    /// Remove the record matching `id` and persist the collection.
    /// Idempotent: deleting an absent id leaves the collection as-is.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let mut spots = self.spots.write().await;
        spots.retain(|s| s.id != id);
        self.persist(&spots).await?;

        tracing::debug!(id, "Spot deleted");
        Ok(())
    }

    /// Write the full collection back to the session store.
    async fn persist(&self, spots: &[ParkingSpot]) -> Result<(), DomainError> {
        let encoded = serde_json::to_string(spots)?;
        self.store.set(PARKING_SPOTS_KEY, &encoded).await?;
        Ok(())
    }
}

/// Identifier derived from the current timestamp, mirroring the collection's
/// historical id format. Monotonic under sequential single-user use; two
/// creates within the same millisecond collide (known limitation).
fn next_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// The fixed fallback record used when no prior data exists.
fn seed_spot() -> ParkingSpot {
    ParkingSpot {
        id: "1".to_string(),
        name: "Central Parking A1".to_string(),
        status: SpotStatus::Available,
        rate: 60.0,
        images: Vec::new(),
        amenities: vec!["Security Guard".to_string(), "CC Camera".to_string()],
        address: Address {
            street: "MG Road".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            latitude: 12.9716,
            longitude: 77.5946,
        },
    }
}
