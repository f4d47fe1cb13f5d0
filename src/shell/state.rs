use crate::modules::bookings::adapters::outbound::properties_in_memory::InMemoryPropertyRepository;
use crate::modules::bookings::adapters::outbound::reservations_in_memory::InMemoryReservationRepository;
use crate::modules::bookings::core::property::PropertyCapacityInfo;
use crate::modules::bookings::use_cases::get_property_price::handler::GetPropertyPriceHandler;
use crate::modules::bookings::use_cases::register_reservation::handler::RegisterReservationHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub properties: Arc<InMemoryPropertyRepository>,
    pub reservations: Arc<InMemoryReservationRepository>,
    pub register_handler:
        Arc<RegisterReservationHandler<InMemoryPropertyRepository, InMemoryReservationRepository>>,
    pub price_handler: Arc<GetPropertyPriceHandler<InMemoryPropertyRepository>>,
}

impl AppState {
    pub fn in_memory(seed: impl IntoIterator<Item = PropertyCapacityInfo>) -> Self {
        let properties = Arc::new(InMemoryPropertyRepository::with_properties(seed));
        let reservations = Arc::new(InMemoryReservationRepository::new());
        let register_handler = Arc::new(RegisterReservationHandler::new(
            properties.clone(),
            reservations.clone(),
        ));
        let price_handler = Arc::new(GetPropertyPriceHandler::new(properties.clone()));
        Self {
            properties,
            reservations,
            register_handler,
            price_handler,
        }
    }
}
