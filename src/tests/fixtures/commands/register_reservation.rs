// Shared test fixture for the RegisterReservationArgs command.
// Defaults come from json/register_reservation.json, which books the
// property produced by PropertyCapacityInfoBuilder::new().

use crate::modules::bookings::core::property::PropertyId;
use crate::modules::bookings::use_cases::register_reservation::command::RegisterReservationArgs;
use chrono::NaiveDate;
use std::fs;

const JSON_PATH: &str = "./src/tests/fixtures/commands/json/register_reservation.json";

pub struct RegisterReservationArgsBuilder {
    inner: RegisterReservationArgs,
}

impl Default for RegisterReservationArgsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterReservationArgsBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(JSON_PATH).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn property_id(mut self, v: PropertyId) -> Self {
        self.inner.property_id = v;
        self
    }

    pub fn total_guests(mut self, v: i32) -> Self {
        self.inner.total_guests = v;
        self
    }

    pub fn check_in_date(mut self, v: NaiveDate) -> Self {
        self.inner.check_in_date = v;
        self
    }

    pub fn check_out_date(mut self, v: NaiveDate) -> Self {
        self.inner.check_out_date = v;
        self
    }

    pub fn build(self) -> RegisterReservationArgs {
        self.inner
    }
}

#[cfg(test)]
mod register_reservation_args_builder_tests {
    use super::*;
    use crate::tests::fixtures::properties::property_capacity_info::FIXED_PROPERTY_ID;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterReservationArgsBuilder::default().build();
        assert_eq!(built.property_id.to_string(), FIXED_PROPERTY_ID);
        assert_eq!(built.total_guests, 4);
        assert_eq!(
            built.check_in_date,
            NaiveDate::from_ymd_opt(2023, 10, 15).unwrap()
        );
        assert_eq!(
            built.check_out_date,
            NaiveDate::from_ymd_opt(2023, 10, 20).unwrap()
        );
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let property_id = PropertyId::generate();
        let custom = RegisterReservationArgsBuilder::new()
            .property_id(property_id)
            .total_guests(2)
            .check_in_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .check_out_date(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
            .build();

        assert_eq!(custom.property_id, property_id);
        assert_eq!(custom.total_guests, 2);
        assert_eq!(
            custom.check_in_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            custom.check_out_date,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
    }
}
