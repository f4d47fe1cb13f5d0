use crate::modules::bookings::core::property::{
    PropertyAvailability, PropertyCapacityInfo, PropertyId,
};
use anyhow::Context;
use rust_decimal::Decimal;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

pub const LOG_FILTER_VAR: &str = "BOOKINGS_LOG_FILTER";
pub const SEED_FILE_VAR: &str = "BOOKINGS_SEED_FILE";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub log_filter: String,
    pub seed_file: Option<PathBuf>,
}

impl ShellConfig {
    /// Reads the environment after loading `.env` when one exists.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup(LOG_FILTER_VAR)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            seed_file: lookup(SEED_FILE_VAR)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn seed_properties(&self) -> anyhow::Result<Vec<PropertyCapacityInfo>> {
        match &self.seed_file {
            Some(path) => load_seed_file(path),
            None => Ok(vec![default_property()]),
        }
    }
}

fn load_seed_file(path: &Path) -> anyhow::Result<Vec<PropertyCapacityInfo>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let properties: Vec<PropertyCapacityInfo> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    anyhow::ensure!(
        !properties.is_empty(),
        "seed file {} holds no properties",
        path.display()
    );
    Ok(properties)
}

fn default_property() -> PropertyCapacityInfo {
    PropertyCapacityInfo {
        id: PropertyId::generate(),
        max_guests: NonZeroU32::new(9).unwrap_or(NonZeroU32::MIN),
        status: PropertyAvailability::Available,
        price: Decimal::from(100),
    }
}
