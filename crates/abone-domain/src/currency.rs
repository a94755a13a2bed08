//! Currency tags and the fixed conversion factors applied to them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the currencies a payment can be priced in.
///
/// Serialized forms match the labels the stored records were created with,
/// so existing data keeps round-tripping.
#[derive(Default)]
pub enum Currency {
    /// The app's local pricing unit. Everything is reported in this unit.
    #[default]
    #[serde(rename = "TL")]
    Local,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Currency::Local => "TL",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        };
        f.write_str(label)
    }
}

/// Static multipliers used to normalize prices into the local unit.
///
/// These are fixed constants, not live exchange rates. The defaults are the
/// values every stored record was priced against; overriding them changes
/// reported totals, never stored prices.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurrencyRates {
    pub local: f64,
    pub usd: f64,
    pub eur: f64,
}

impl Default for CurrencyRates {
    fn default() -> Self {
        Self {
            local: 1.0,
            usd: 34.0,
            eur: 36.0,
        }
    }
}

impl CurrencyRates {
    /// Returns the multiplier for the given currency.
    pub fn factor(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Local => self.local,
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
        }
    }
}
