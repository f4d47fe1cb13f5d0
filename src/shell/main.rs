use anyhow::Context;
use chrono::NaiveDate;
use tracing_subscriber::{EnvFilter, fmt};

use property_bookings::modules::bookings::use_cases::get_property_price::query::GetPropertyPriceArgs;
use property_bookings::modules::bookings::use_cases::register_reservation::command::RegisterReservationArgs;
use property_bookings::shell::config::ShellConfig;
use property_bookings::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).init();

    let seed = config.seed_properties()?;
    let first = seed[0].id;
    let state = AppState::in_memory(seed.clone());
    tracing::info!(
        properties = seed.len(),
        "in-memory property repository seeded"
    );

    let signals = [(false, false), (false, true), (true, false), (true, true)];
    for property in &seed {
        for (hits_holiday, zone_above_threshold) in signals {
            let price = state
                .price_handler
                .handle(GetPropertyPriceArgs {
                    property_id: property.id,
                    hits_holiday,
                    zone_above_threshold,
                })
                .await?;
            tracing::info!(
                property_id = %property.id,
                hits_holiday,
                zone_above_threshold,
                price = ?price,
                "price quoted"
            );
        }
    }

    let args = RegisterReservationArgs {
        property_id: first,
        total_guests: 4,
        check_in_date: NaiveDate::from_ymd_opt(2023, 10, 15).context("invalid check-in date")?,
        check_out_date: NaiveDate::from_ymd_opt(2023, 10, 20).context("invalid check-out date")?,
    };
    match state.register_handler.handle(args).await {
        Ok(reservation_id) => tracing::info!(%reservation_id, "reservation created"),
        Err(e) => match e.rejection() {
            Some(reason) => tracing::warn!(%reason, "reservation rejected"),
            None => return Err(e.into()),
        },
    }

    if let Some(property) = state.properties.get(first).await {
        tracing::info!(property_id = %property.id, status = %property.status, "property status");
    }
    Ok(())
}
