use crate::modules::bookings::core::property::PropertyId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to book a property for a number of guests and a date range.
///
/// `total_guests` is signed so that out of range requests stay representable
/// and get rejected by the capacity rule instead of at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReservationArgs {
    pub property_id: PropertyId,
    pub total_guests: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}
