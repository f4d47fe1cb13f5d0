// In memory implementation of the PropertyRepository port.
//
// Purpose
// - Support handler tests and local runs without a database.
//
// Responsibilities
// - Store property snapshots keyed by id.
// - Apply status transitions as compare-and-swap under a single write lock.
// - Count calls so tests can assert which collaborators were reached.

use crate::modules::bookings::adapters::outbound::properties::{
    PropertyRepository, PropertyRepositoryError,
};
use crate::modules::bookings::core::property::{
    PropertyAvailability, PropertyCapacityInfo, PropertyId,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

#[derive(Default)]
pub struct InMemoryPropertyRepository {
    properties: RwLock<HashMap<PropertyId, PropertyCapacityInfo>>,
    status_updates: Mutex<Vec<(PropertyId, PropertyAvailability)>>,
    find_calls: AtomicUsize,
    update_status_calls: AtomicUsize,
    delay_update_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(properties: impl IntoIterator<Item = PropertyCapacityInfo>) -> Self {
        let properties = properties.into_iter().map(|p| (p.id, p)).collect();
        Self {
            properties: RwLock::new(properties),
            ..Self::default()
        }
    }

    pub async fn get(&self, id: PropertyId) -> Option<PropertyCapacityInfo> {
        self.properties.read().await.get(&id).cloned()
    }

    pub async fn status_updates(&self) -> Vec<(PropertyId, PropertyAvailability)> {
        self.status_updates.lock().await.clone()
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn update_status_calls(&self) -> usize {
        self.update_status_calls.load(Ordering::SeqCst)
    }

    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::SeqCst);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn find(
        &self,
        id: PropertyId,
    ) -> Result<Option<PropertyCapacityInfo>, PropertyRepositoryError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.is_offline {
            return Err(PropertyRepositoryError::Backend(
                "Property repository offline".into(),
            ));
        }

        Ok(self.properties.read().await.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: PropertyId,
        expected: PropertyAvailability,
        next: PropertyAvailability,
    ) -> Result<(), PropertyRepositoryError> {
        self.update_status_calls.fetch_add(1, Ordering::SeqCst);
        if self.is_offline {
            return Err(PropertyRepositoryError::Backend(
                "Property repository offline".into(),
            ));
        }

        let delay = self.delay_update_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.properties.write().await;
        let property = guard
            .get_mut(&id)
            .ok_or(PropertyRepositoryError::NotFound(id))?;
        if property.status != expected {
            return Err(PropertyRepositoryError::StatusConflict {
                expected,
                actual: property.status,
            });
        }
        property.status = next;
        self.status_updates.lock().await.push((id, next));
        Ok(())
    }
}
