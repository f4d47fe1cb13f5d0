use crate::modules::bookings::core::pricing::DemandSignals;
use crate::modules::bookings::core::property::PropertyId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPropertyPriceArgs {
    pub property_id: PropertyId,
    pub hits_holiday: bool,
    pub zone_above_threshold: bool,
}

impl GetPropertyPriceArgs {
    pub fn signals(&self) -> DemandSignals {
        DemandSignals {
            hits_holiday: self.hits_holiday,
            zone_above_threshold: self.zone_above_threshold,
        }
    }
}
