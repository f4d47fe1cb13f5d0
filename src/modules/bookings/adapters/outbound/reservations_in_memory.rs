// In memory implementation of the ReservationRepository port.
//
// Stores reservations under a freshly generated id and remembers the order
// they were persisted in.

use crate::modules::bookings::adapters::outbound::reservations::{
    ReservationRepository, ReservationRepositoryError,
};
use crate::modules::bookings::core::reservation::{Reservation, ReservationId};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryReservationRepository {
    rows: RwLock<Vec<(ReservationId, Reservation)>>,
    persist_calls: AtomicUsize,
    is_offline: bool,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: ReservationId) -> Option<Reservation> {
        self.rows
            .read()
            .await
            .iter()
            .find(|(stored, _)| *stored == id)
            .map(|(_, reservation)| reservation.clone())
    }

    pub async fn all(&self) -> Vec<(ReservationId, Reservation)> {
        self.rows.read().await.clone()
    }

    pub fn persist_calls(&self) -> usize {
        self.persist_calls.load(Ordering::SeqCst)
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn persist(
        &self,
        reservation: Reservation,
    ) -> Result<ReservationId, ReservationRepositoryError> {
        self.persist_calls.fetch_add(1, Ordering::SeqCst);
        if self.is_offline {
            return Err(ReservationRepositoryError::Backend(
                "Reservation repository offline".into(),
            ));
        }

        let id = ReservationId::generate();
        self.rows.write().await.push((id, reservation));
        Ok(id)
    }
}
