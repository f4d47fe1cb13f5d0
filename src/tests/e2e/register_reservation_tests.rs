use crate::modules::bookings::core::property::PropertyAvailability;
use crate::modules::bookings::core::reservation::Reservation;
use crate::modules::bookings::use_cases::get_property_price::query::GetPropertyPriceArgs;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::register_reservation::RegisterReservationArgsBuilder;
use crate::tests::fixtures::properties::property_capacity_info::PropertyCapacityInfoBuilder;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

#[tokio::test]
async fn books_an_available_property_end_to_end() {
    let property = PropertyCapacityInfoBuilder::new().build();
    let state = AppState::in_memory([property.clone()]);

    let args = RegisterReservationArgsBuilder::new()
        .property_id(property.id)
        .total_guests(4)
        .check_in_date(NaiveDate::from_ymd_opt(2023, 10, 15).unwrap())
        .check_out_date(NaiveDate::from_ymd_opt(2023, 10, 20).unwrap())
        .build();

    let reservation_id = state.register_handler.handle(args).await.unwrap();

    assert_eq!(
        state.properties.get(property.id).await.unwrap().status,
        PropertyAvailability::Booked
    );
    assert_eq!(
        state.reservations.all().await,
        vec![(
            reservation_id,
            Reservation {
                property_id: property.id,
                guests: 4,
                check_in: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
                check_out: NaiveDate::from_ymd_opt(2023, 10, 20).unwrap(),
            }
        )]
    );

    let args = RegisterReservationArgsBuilder::new()
        .property_id(property.id)
        .build();
    let second = state.register_handler.handle(args).await;
    assert_eq!(
        second.unwrap_err().to_string(),
        "Unable to create reservation for booked property."
    );
}

#[tokio::test]
async fn quotes_the_same_price_before_and_after_booking() {
    let property = PropertyCapacityInfoBuilder::new().price(dec!(100)).build();
    let state = AppState::in_memory([property.clone()]);
    let query = GetPropertyPriceArgs {
        property_id: property.id,
        hits_holiday: true,
        zone_above_threshold: true,
    };

    let args = RegisterReservationArgsBuilder::new()
        .property_id(property.id)
        .build();

    let before = state.price_handler.handle(query).await.unwrap();
    state.register_handler.handle(args).await.unwrap();
    let after = state.price_handler.handle(query).await.unwrap();

    assert_eq!(before, Some(dec!(115)));
    assert_eq!(before, after);
}
