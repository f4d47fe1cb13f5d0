use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(Uuid);

impl PropertyId {
    /// The nil identifier. Never refers to a stored property.
    pub const EMPTY: PropertyId = PropertyId(Uuid::nil());

    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyAvailability {
    #[default]
    Available,
    Booked,
}

impl fmt::Display for PropertyAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyAvailability::Available => f.write_str("Available"),
            PropertyAvailability::Booked => f.write_str("Booked"),
        }
    }
}

/// What the booking rules need to know about a property.
///
/// Owned by the property repository. The booking rules read it and ask for
/// status transitions, they never build or drop one themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCapacityInfo {
    pub id: PropertyId,
    pub max_guests: NonZeroU32,
    #[serde(default)]
    pub status: PropertyAvailability,
    pub price: Decimal,
}

impl PropertyCapacityInfo {
    pub fn is_available(&self) -> bool {
        self.status == PropertyAvailability::Available
    }

    /// The guest count, once it is known to lie in `1..=max_guests`.
    pub fn admit_guests(&self, guests: i32) -> Option<u32> {
        u32::try_from(guests)
            .ok()
            .filter(|guests| (1..=self.max_guests.get()).contains(guests))
    }
}
