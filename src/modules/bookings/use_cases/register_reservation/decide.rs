use crate::modules::bookings::core::property::{
    PropertyAvailability, PropertyCapacityInfo, PropertyId,
};
use crate::modules::bookings::core::reservation::Reservation;
use crate::modules::bookings::use_cases::register_reservation::{
    command::RegisterReservationArgs,
    decision::{DecideError, Decision, StatusTransition},
};

/// Rejects the nil id before any repository is asked about it.
pub fn validate_property_id(property_id: PropertyId) -> Result<(), DecideError> {
    if property_id.is_empty() {
        return Err(DecideError::InvalidPropertyId(property_id));
    }
    Ok(())
}

/// Checks run in a fixed order: identity, existence, capacity, availability,
/// stay interval. The first failing check wins, so a booked property that is
/// also over capacity reports the capacity error.
pub fn decide_register(
    property: Option<&PropertyCapacityInfo>,
    args: RegisterReservationArgs,
) -> Decision {
    match check(property, &args) {
        Ok((property, guests)) => Decision::Accepted {
            transition: StatusTransition {
                property_id: property.id,
                from: PropertyAvailability::Available,
                to: PropertyAvailability::Booked,
            },
            reservation: Reservation {
                property_id: property.id,
                guests,
                check_in: args.check_in_date,
                check_out: args.check_out_date,
            },
        },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn check<'a>(
    property: Option<&'a PropertyCapacityInfo>,
    args: &RegisterReservationArgs,
) -> Result<(&'a PropertyCapacityInfo, u32), DecideError> {
    validate_property_id(args.property_id)?;

    let Some(property) = property else {
        return Err(DecideError::PropertyNotFound(args.property_id));
    };

    let Some(guests) = property.admit_guests(args.total_guests) else {
        return Err(DecideError::InvalidGuestCount {
            max_guests: property.max_guests.get(),
        });
    };

    if !property.is_available() {
        return Err(DecideError::PropertyBooked);
    }

    if args.check_out_date <= args.check_in_date {
        return Err(DecideError::InvalidStay {
            check_in: args.check_in_date,
            check_out: args.check_out_date,
        });
    }

    Ok((property, guests))
}
