use std::path::Path;

use side_shooter::config::GameConfig;
use side_shooter::error::Error;

#[test]
fn defaults_match_reference_game() {
    let c = GameConfig::default();
    assert_eq!(c.width, 500.0);
    assert_eq!(c.height, 500.0);
    assert_eq!(c.enemy_interval, 1000.0);
    assert_eq!(c.starting_ammo, 20);
    assert_eq!(c.max_ammo, 50);
    assert_eq!(c.ammo_interval, 500.0);
    assert_eq!(c.winning_score, 10);
    assert_eq!(c.time_limit, 15_000.0);
    assert!(c.validate().is_ok());
}

#[test]
fn partial_toml_overrides_only_listed_fields() {
    let c = GameConfig::from_toml("time_limit = 30000.0\nwinning_score = 25\n").unwrap();
    assert_eq!(c.time_limit, 30_000.0);
    assert_eq!(c.winning_score, 25);
    assert_eq!(c.max_ammo, 50);
}

#[test]
fn empty_toml_is_the_default() {
    assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = GameConfig::from_toml("width = \"wide\"").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn non_positive_interval_is_rejected() {
    let err = GameConfig::from_toml("ammo_interval = 0.0").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn starting_ammo_above_max_is_rejected() {
    let err = GameConfig::from_toml("starting_ammo = 60").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = GameConfig::load(Path::new("/nonexistent/side_shooter.toml")).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
    assert!(err.to_string().contains("/nonexistent/side_shooter.toml"));
}
