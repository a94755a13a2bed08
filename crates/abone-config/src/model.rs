use abone_domain::CurrencyRates;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Conversion factors applied to foreign-currency prices before any
    /// totals are computed.
    #[serde(default)]
    pub currency_rates: CurrencyRates,

    /// Rows due within this many days are highlighted on the dashboard.
    #[serde(default = "Config::default_urgency_days")]
    pub urgency_days: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for stored records. Defaults to
    /// `~/.abone`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_rates: CurrencyRates::default(),
            urgency_days: Self::default_urgency_days(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_urgency_days() -> u32 {
        3
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join(".abone")
    }
}
