//! Exchange-rate payload served by the RUB-based rate service.

use serde::{Deserialize, Serialize};

/// Response of `GET latest?base=RUB&symbols=EUR,USD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// Base currency echoed by the service
    #[serde(default)]
    pub base: Option<String>,
    /// Date the rates were published
    #[serde(default)]
    pub date: Option<String>,
    /// Quoted rates
    pub rates: Rates,
}

/// Price of one ruble in the two display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    /// Euros per ruble
    #[serde(rename = "EUR")]
    pub eur: f64,
    /// Dollars per ruble
    #[serde(rename = "USD")]
    pub usd: f64,
}

/// Rubles per unit of each display currency. `None` when the service sent a
/// rate that cannot be inverted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConversionFactors {
    /// Rubles per euro
    pub eur: Option<f64>,
    /// Rubles per dollar
    pub usd: Option<f64>,
}

impl Rates {
    /// Inverts both quotes into rubles per unit.
    pub fn conversion_factors(&self) -> ConversionFactors {
        ConversionFactors {
            eur: invert(self.eur),
            usd: invert(self.usd),
        }
    }
}

fn invert(rate: f64) -> Option<f64> {
    (rate.is_finite() && rate > 0.0).then(|| 1.0 / rate)
}
