use crate::modules::bookings::core::property::{PropertyAvailability, PropertyId};
use crate::modules::bookings::core::reservation::Reservation;
use chrono::NaiveDate;

/// Why a registration was turned down. `Display` is the user facing reason.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Invalid PropertyId '{0}'.")]
    InvalidPropertyId(PropertyId),

    #[error("Property '{0}' not found.")]
    PropertyNotFound(PropertyId),

    #[error("Invalid number of guests, must be between 1 and {max_guests}.")]
    InvalidGuestCount { max_guests: u32 },

    #[error("Unable to create reservation for booked property.")]
    PropertyBooked,

    #[error("Check-out date '{check_out}' must be after check-in date '{check_in}'.")]
    InvalidStay {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    pub property_id: PropertyId,
    pub from: PropertyAvailability,
    pub to: PropertyAvailability,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        transition: StatusTransition,
        reservation: Reservation,
    },
    Rejected {
        reason: DecideError,
    },
}
