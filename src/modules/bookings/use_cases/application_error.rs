use crate::modules::bookings::adapters::outbound::properties::PropertyRepositoryError;
use crate::modules::bookings::adapters::outbound::reservations::ReservationRepositoryError;
use crate::modules::bookings::use_cases::register_reservation::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// Business rejection. Displays as the reason shown to the user.
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    PropertyRepository(#[from] PropertyRepositoryError),

    #[error(transparent)]
    ReservationRepository(#[from] ReservationRepositoryError),
}

impl ApplicationError {
    pub fn rejection(&self) -> Option<&DecideError> {
        match self {
            ApplicationError::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}
