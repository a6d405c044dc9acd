//! Page-lifetime display settings computed once at startup and read by the
//! views that render after it.

use crate::models::rates::ConversionFactors;

/// Currencies the greeting view can show balances in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Russian ruble, the account currency
    Rub,
    /// Euro
    Eur,
    /// US dollar
    Usd,
}

/// Display settings shared by the landing flow.
///
/// Every field starts at its default and is written at most once by the step
/// that owns it: the mobile detector, the demo action, or the rate fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// The client reported a mobile user agent
    pub mobile_client: bool,
    /// Account changes may be saved; false for demo sessions
    pub save_permit: bool,
    /// Rubles per euro, `0.0` until rates are loaded
    pub eur: f64,
    /// Rubles per dollar, `0.0` until rates are loaded
    pub usd: f64,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            mobile_client: false,
            save_permit: true,
            eur: 0.0,
            usd: 0.0,
        }
    }
}

impl DisplayState {
    /// Records a mobile user agent.
    pub fn mark_mobile(&mut self) {
        self.mobile_client = true;
    }

    /// Marks the session read-only.
    pub fn forbid_saving(&mut self) {
        self.save_permit = false;
    }

    /// Stores the factors the service could provide; missing ones keep their
    /// current value.
    pub fn apply_rates(&mut self, factors: ConversionFactors) {
        if let Some(eur) = factors.eur {
            self.eur = eur;
        }
        if let Some(usd) = factors.usd {
            self.usd = usd;
        }
    }

    /// Both conversion factors are known.
    pub fn rates_loaded(&self) -> bool {
        self.eur > 0.0 && self.usd > 0.0
    }

    /// Converts an amount held in rubles. `None` while the factor for
    /// `currency` has not been loaded.
    pub fn from_rubles(&self, amount: f64, currency: Currency) -> Option<f64> {
        let factor = match currency {
            Currency::Rub => return Some(amount),
            Currency::Eur => self.eur,
            Currency::Usd => self.usd,
        };
        (factor > 0.0).then(|| amount / factor)
    }
}
