// Surcharge decision table for nightly prices.
//
// | hits holiday | zone above threshold | surcharge |
// |--------------|----------------------|-----------|
// | no           | no                   | 0%        |
// | no           | yes                  | 5%        |
// | yes          | no                   | 5%        |
// | yes          | yes                  | 15%       |
//
// The single signal rows do not add up to the combined row.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandSignals {
    pub hits_holiday: bool,
    pub zone_above_threshold: bool,
}

impl DemandSignals {
    pub fn surcharge_rate(&self) -> Decimal {
        match (self.hits_holiday, self.zone_above_threshold) {
            (false, false) => Decimal::ZERO,
            (true, true) => dec!(0.15),
            (true, false) | (false, true) => dec!(0.05),
        }
    }
}

pub fn adjusted_price(base_price: Decimal, signals: DemandSignals) -> Decimal {
    base_price * (Decimal::ONE + signals.surcharge_rate())
}
