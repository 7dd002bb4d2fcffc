use serde::{Deserialize, Serialize};

/// Physical location of a parking spot. Coordinates are not bounds-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Availability of a parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotStatus {
    Available,
    Occupied,
    Maintenance,
}

impl Default for SpotStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl SpotStatus {
    /// Lowercase label as used in persisted data and the listing view.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

/// ParkingSpot entity - a single parking-space listing.
///
/// The `id` is assigned at creation and immutable thereafter; records are
/// mutated only by whole-record replacement keyed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingSpot {
    pub id: String,
    pub name: String,
    pub status: SpotStatus,
    pub rate: f64,
    /// Image references, already stringified (object URLs or data URIs).
    pub images: Vec<String>,
    /// Insertion-ordered; uniqueness is not enforced at the type level.
    pub amenities: Vec<String>,
    pub address: Address,
}

impl ParkingSpot {
    /// Assemble a spot from a draft and an assigned id.
    pub fn from_draft(id: String, draft: SpotDraft) -> Self {
        Self {
            id,
            name: draft.name,
            status: draft.status,
            rate: draft.rate,
            images: draft.images,
            amenities: draft.amenities,
            address: draft.address,
        }
    }
}

/// A spot payload without an id - the input to create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotDraft {
    pub name: String,
    pub status: SpotStatus,
    pub rate: f64,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub address: Address,
}

impl From<ParkingSpot> for SpotDraft {
    fn from(spot: ParkingSpot) -> Self {
        Self {
            name: spot.name,
            status: spot.status,
            rate: spot.rate,
            images: spot.images,
            amenities: spot.amenities,
            address: spot.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SpotDraft {
        SpotDraft {
            name: "Lot B".to_string(),
            status: SpotStatus::Occupied,
            rate: 100.0,
            images: vec!["blob:1".to_string()],
            amenities: vec!["EV Charging".to_string()],
            address: Address {
                street: "Residency Road".to_string(),
                city: "Bangalore".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560025".to_string(),
                latitude: 12.9719,
                longitude: 77.6062,
            },
        }
    }

    #[test]
    fn test_from_draft_preserves_fields() {
        let spot = ParkingSpot::from_draft("42".to_string(), draft());
        assert_eq!(spot.id, "42");
        assert_eq!(spot.name, "Lot B");
        assert_eq!(spot.status, SpotStatus::Occupied);
        assert_eq!(SpotDraft::from(spot), draft());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let encoded = serde_json::to_string(&SpotStatus::Maintenance).unwrap();
        assert_eq!(encoded, "\"maintenance\"");
        let decoded: SpotStatus = serde_json::from_str("\"available\"").unwrap();
        assert_eq!(decoded, SpotStatus::Available);
    }
}
