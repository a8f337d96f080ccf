use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use adsmith::config::Config;
use adsmith::error::{ConfigError, Error};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("adsmith-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn load(contents: &str) -> Result<Config, Error> {
    let path = write_temp_config(contents);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);
    result
}

#[test]
fn config_rejects_weights_not_summing_to_one() {
    let toml = r#"
[channels.weights]
search = 0.5
social = 0.3
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "channels.weights",
            reason,
        })) => assert!(reason.contains("sum to 1.0"), "unexpected reason: {reason}"),
        Err(err) => panic!("Expected weight sum error, got {err}"),
        Ok(_) => panic!("Expected weight sum to be rejected"),
    }
}

#[test]
fn config_rejects_inverted_date_range() {
    let toml = r#"
[generation]
start_date = "2024-02-01"
end_date = "2024-01-01"
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "date_range",
            ..
        })) => {}
        Err(err) => panic!("Expected date range error, got {err}"),
        Ok(_) => panic!("Expected inverted date range to be rejected"),
    }
}

#[test]
fn config_rejects_zero_campaign_count() {
    let toml = r#"
[generation]
campaign_count = 0
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "campaign_count",
            ..
        }))
    ));
}

#[test]
fn config_rejects_out_of_range_noise() {
    let toml = r#"
[generation]
noise_level = 1.5
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "noise_level",
            ..
        }))
    ));
}

#[test]
fn config_rejects_inverted_profile_range() {
    let toml = r#"
[channels.profiles.search]
ctr_range = [0.2, 0.1]
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "channels.profiles",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_channel() {
    let toml = r#"
[channels.weights]
carrier_pigeon = 1.0
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_rejects_bad_event_month() {
    let toml = r#"
[[events]]
month = 13
channel = "search"
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue { field: "events", reason })) => {
            assert!(reason.contains("month"), "unexpected reason: {reason}");
        }
        Err(err) => panic!("Expected event month error, got {err}"),
        Ok(_) => panic!("Expected month 13 to be rejected"),
    }
}

#[test]
fn partial_config_fills_in_defaults() {
    let toml = r#"
[generation]
campaign_count = 3
"#;

    let config = load(toml).expect("partial config loads");
    assert_eq!(config.generation.campaign_count, 3);
    assert_eq!(config.generation.seed, 42);
    assert_eq!(config.logging.level, "info");
    let sum: f64 = config.channels.weights.values().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn missing_config_file_reports_read_error() {
    let result = Config::load("/nonexistent/adsmith-config.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
