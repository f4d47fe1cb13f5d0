// Shared test fixture for PropertyCapacityInfo.
// The default is an available property for up to 9 guests at 100 a night.

use crate::modules::bookings::core::property::{
    PropertyAvailability, PropertyCapacityInfo, PropertyId,
};
use rust_decimal::Decimal;
use std::num::NonZeroU32;
use std::str::FromStr;
use uuid::Uuid;

pub const FIXED_PROPERTY_ID: &str = "0190f0c4-8a9e-7c3a-9d2e-3b1f1c2d4e5f";

pub struct PropertyCapacityInfoBuilder {
    inner: PropertyCapacityInfo,
}

impl Default for PropertyCapacityInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PropertyCapacityInfoBuilder {
    pub fn new() -> Self {
        Self {
            inner: PropertyCapacityInfo {
                id: PropertyId::from_uuid(Uuid::from_str(FIXED_PROPERTY_ID).unwrap()),
                max_guests: NonZeroU32::new(9).unwrap(),
                status: PropertyAvailability::Available,
                price: Decimal::from(100),
            },
        }
    }

    pub fn id(mut self, v: PropertyId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn max_guests(mut self, v: u32) -> Self {
        self.inner.max_guests = NonZeroU32::new(v).unwrap();
        self
    }

    pub fn status(mut self, v: PropertyAvailability) -> Self {
        self.inner.status = v;
        self
    }

    pub fn price(mut self, v: Decimal) -> Self {
        self.inner.price = v;
        self
    }

    pub fn build(self) -> PropertyCapacityInfo {
        self.inner
    }
}
