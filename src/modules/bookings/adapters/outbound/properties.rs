use crate::modules::bookings::core::property::{
    PropertyAvailability, PropertyCapacityInfo, PropertyId,
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyRepositoryError {
    #[error("property {0} not found")]
    NotFound(PropertyId),

    #[error("status conflict: expected {expected}, actual {actual}")]
    StatusConflict {
        expected: PropertyAvailability,
        actual: PropertyAvailability,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Pure read. `Ok(None)` is a normal outcome.
    async fn find(
        &self,
        id: PropertyId,
    ) -> Result<Option<PropertyCapacityInfo>, PropertyRepositoryError>;

    /// Moves the property to `next` only while it is still in `expected`.
    async fn update_status(
        &self,
        id: PropertyId,
        expected: PropertyAvailability,
        next: PropertyAvailability,
    ) -> Result<(), PropertyRepositoryError>;
}
