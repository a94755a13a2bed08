use abone_config::{Config, ConfigManager};
use abone_domain::Currency;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_config_loads_as_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let config = manager.load().expect("load defaults");
    assert_eq!(config.urgency_days, 3);
    assert_eq!(config.currency_rates.usd, 34.0);
    assert_eq!(config.currency_rates.eur, 36.0);
    assert!(config.data_root.is_none());
}

#[test]
fn config_round_trips_through_disk() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    config.urgency_days = 7;
    config.currency_rates.usd = 40.0;
    config.data_root = Some(PathBuf::from("/tmp/abone-data"));
    manager.save(&config).expect("save");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.urgency_days, 7);
    assert_eq!(loaded.currency_rates.factor(Currency::Usd), 40.0);
    assert_eq!(loaded.data_root, Some(PathBuf::from("/tmp/abone-data")));
}

#[test]
fn partial_config_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    std::fs::write(manager.config_path(), r#"{"urgency_days": 5}"#).expect("write partial");
    let loaded = manager.load().expect("load");
    assert_eq!(loaded.urgency_days, 5);
    assert_eq!(loaded.currency_rates.local, 1.0);
}

#[test]
fn explicit_data_root_wins_over_the_default() {
    let mut config = Config::default();
    config.data_root = Some(PathBuf::from("/srv/records"));
    assert_eq!(config.resolve_data_root(), PathBuf::from("/srv/records"));

    let fallback = Config::default().resolve_data_root();
    assert!(fallback.ends_with(".abone"));
}
