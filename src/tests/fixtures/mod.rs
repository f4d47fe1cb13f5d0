pub mod commands {
    pub mod register_reservation;
}

pub mod properties {
    pub mod property_capacity_info;
}
