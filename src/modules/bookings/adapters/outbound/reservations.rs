use crate::modules::bookings::core::reservation::{Reservation, ReservationId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReservationRepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn persist(
        &self,
        reservation: Reservation,
    ) -> Result<ReservationId, ReservationRepositoryError>;
}
