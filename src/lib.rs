pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod bookings {
        pub mod core {
            pub mod pricing;
            pub mod property;
            pub mod reservation;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod register_reservation {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
            }
            pub mod get_property_price {
                pub mod handler;
                pub mod query;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod properties;
                pub mod properties_in_memory;
                pub mod reservations;
                pub mod reservations_in_memory;
            }
        }
    }
}

pub mod shell;
