use std::env;
use std::path::PathBuf;

use abone_config::{Config, ConfigManager};
use abone_core::{ExpenseCalculator, SubscriptionBook};
use abone_storage_json::JsonSubscriptionStore;

use crate::cli::output;
use crate::errors::CliError;

/// Overrides both the config and record locations; used by scripted runs
/// and the smoke tests to keep state away from the real home directory.
const DATA_DIR_ENV: &str = "ABONE_DATA_DIR";

/// Everything the menu loop operates on: loaded preferences, their manager,
/// and the subscription book backed by the JSON store.
pub struct AppContext {
    pub config: Config,
    pub config_manager: ConfigManager,
    pub book: SubscriptionBook,
}

impl AppContext {
    pub fn bootstrap() -> Result<Self, CliError> {
        let base_dir = data_override().unwrap_or_else(|| Config::default().resolve_data_root());

        let config_manager = ConfigManager::with_base_dir(base_dir)?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                output::warning(format!("Could not read preferences, using defaults: {err}"));
                tracing::warn!(error = %err, "falling back to default config");
                Config::default()
            }
        };

        let book = open_book(&config)?;
        Ok(Self {
            config,
            config_manager,
            book,
        })
    }

    /// Rebuilds the book after a rate change so totals pick up the new
    /// factors.
    pub fn apply_rates(&mut self) -> Result<(), CliError> {
        self.book = open_book(&self.config)?;
        Ok(())
    }
}

fn data_override() -> Option<PathBuf> {
    env::var(DATA_DIR_ENV).ok().map(PathBuf::from)
}

/// Opens the record store and loads it into a fresh book. An unreadable
/// store degrades to an empty book with a warning instead of failing.
fn open_book(config: &Config) -> Result<SubscriptionBook, CliError> {
    let record_dir = data_override().unwrap_or_else(|| config.resolve_data_root());
    let store = JsonSubscriptionStore::new(record_dir)?;
    let calculator = ExpenseCalculator::new(config.currency_rates);
    let mut book = SubscriptionBook::new(Box::new(store), calculator);
    if let Err(err) = book.load() {
        output::warning(format!("Could not read stored payments: {err}"));
        tracing::warn!(error = %err, "starting with an empty book");
    }
    Ok(book)
}
