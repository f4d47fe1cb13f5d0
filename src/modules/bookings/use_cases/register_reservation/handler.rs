use crate::modules::bookings::adapters::outbound::properties::{
    PropertyRepository, PropertyRepositoryError,
};
use crate::modules::bookings::adapters::outbound::reservations::ReservationRepository;
use crate::modules::bookings::core::property::PropertyAvailability;
use crate::modules::bookings::core::reservation::ReservationId;
use crate::modules::bookings::use_cases::application_error::ApplicationError;
use crate::modules::bookings::use_cases::register_reservation::command::RegisterReservationArgs;
use crate::modules::bookings::use_cases::register_reservation::decide::{
    decide_register, validate_property_id,
};
use crate::modules::bookings::use_cases::register_reservation::decision::{
    DecideError, Decision, StatusTransition,
};
use crate::shared::core::primitives::Command;
use std::sync::Arc;

pub struct RegisterReservationHandler<TProperties, TReservations>
where
    TProperties: PropertyRepository + 'static,
    TReservations: ReservationRepository + 'static,
{
    properties: Arc<TProperties>,
    reservations: Arc<TReservations>,
}

impl<TProperties, TReservations> RegisterReservationHandler<TProperties, TReservations>
where
    TProperties: PropertyRepository + 'static,
    TReservations: ReservationRepository + 'static,
{
    pub fn new(properties: Arc<TProperties>, reservations: Arc<TReservations>) -> Self {
        Self {
            properties,
            reservations,
        }
    }

    #[tracing::instrument(
        name = "register_reservation",
        skip(self, args),
        fields(property_id = %args.property_id, guests = args.total_guests)
    )]
    pub async fn handle(
        &self,
        args: RegisterReservationArgs,
    ) -> Result<ReservationId, ApplicationError> {
        if let Err(reason) = validate_property_id(args.property_id) {
            tracing::info!(%reason, "reservation rejected");
            return Err(reason.into());
        }

        let property = self.properties.find(args.property_id).await?;

        let (transition, reservation) = match decide_register(property.as_ref(), args) {
            Decision::Accepted {
                transition,
                reservation,
            } => (transition, reservation),
            Decision::Rejected { reason } => {
                tracing::info!(%reason, "reservation rejected");
                return Err(reason.into());
            }
        };

        self.apply(transition).await?;
        let reservation_id = self.reservations.persist(reservation).await?;
        tracing::info!(%reservation_id, "reservation registered");
        Ok(reservation_id)
    }

    async fn apply(&self, transition: StatusTransition) -> Result<(), ApplicationError> {
        match self
            .properties
            .update_status(transition.property_id, transition.from, transition.to)
            .await
        {
            Ok(()) => Ok(()),
            Err(PropertyRepositoryError::StatusConflict {
                actual: PropertyAvailability::Booked,
                ..
            }) => {
                tracing::warn!("property was booked by a concurrent registration");
                Err(DecideError::PropertyBooked.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait::async_trait]
impl<TProperties, TReservations> Command<RegisterReservationArgs>
    for RegisterReservationHandler<TProperties, TReservations>
where
    TProperties: PropertyRepository + 'static,
    TReservations: ReservationRepository + 'static,
{
    type Output = ReservationId;
    type Error = ApplicationError;

    async fn execute(
        &self,
        args: RegisterReservationArgs,
    ) -> Result<ReservationId, ApplicationError> {
        self.handle(args).await
    }
}
