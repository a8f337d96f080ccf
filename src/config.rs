//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every field has a default, so
//! `adsmith generate` works with no config file at all; a file only needs to
//! name the values it overrides.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::Channel;
use crate::error::{ConfigError, Result};

/// Tolerance when checking that channel weights sum to 1.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub channels: ChannelsConfig,
    #[serde(default)]
    pub seasonality: SeasonalityConfig,
    /// Scenario events: month-scoped multipliers for one channel.
    #[serde(default)]
    pub events: Vec<EventConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Core generation parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// First day of the generated date range (inclusive).
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    /// Last day of the generated date range (inclusive).
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,
    /// Number of campaigns to generate.
    #[serde(default = "default_campaign_count")]
    pub campaign_count: u32,
    /// RNG seed. Same seed + config produces byte-identical output.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Width of the multiplicative jitter applied to impressions,
    /// e.g. 0.15 means a uniform factor in [0.85, 1.15].
    #[serde(default = "default_noise_level")]
    pub noise_level: f64,
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date")
}

const fn default_campaign_count() -> u32 {
    12
}

const fn default_seed() -> u64 {
    42
}

const fn default_noise_level() -> f64 {
    0.15
}

impl GenerationConfig {
    /// Total days in the configured range, inclusive.
    #[must_use]
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            end_date: default_end_date(),
            campaign_count: default_campaign_count(),
            seed: default_seed(),
            noise_level: default_noise_level(),
        }
    }
}

/// Channel mix and optional per-channel profile overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelsConfig {
    /// Map channel -> probability. Must sum to 1.
    #[serde(default = "default_weights")]
    pub weights: BTreeMap<Channel, f64>,
    /// Partial overrides of the built-in channel profiles.
    #[serde(default)]
    pub profiles: BTreeMap<Channel, ProfileOverrides>,
}

fn default_weights() -> BTreeMap<Channel, f64> {
    BTreeMap::from([
        (Channel::Search, 0.25),
        (Channel::Social, 0.25),
        (Channel::Email, 0.20),
        (Channel::Display, 0.30),
    ])
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            weights: default_weights(),
            profiles: BTreeMap::new(),
        }
    }
}

/// Optional overrides for one channel's behavior profile.
///
/// Ranges are `[low, high]` pairs; anything left out keeps the built-in
/// value for that channel.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileOverrides {
    pub impressions_range: Option<(u64, u64)>,
    pub ctr_range: Option<(f64, f64)>,
    pub cpc_range: Option<(f64, f64)>,
    pub conversion_rate_range: Option<(f64, f64)>,
    pub aov_range: Option<(f64, f64)>,
    pub budget_median: Option<f64>,
    pub budget_sigma: Option<f64>,
}

/// Day-of-week traffic multipliers.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonalityConfig {
    #[serde(default = "default_weekday_multiplier")]
    pub weekday_multiplier: f64,
    #[serde(default = "default_weekend_multiplier")]
    pub weekend_multiplier: f64,
}

const fn default_weekday_multiplier() -> f64 {
    1.1
}

const fn default_weekend_multiplier() -> f64 {
    0.7
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            weekday_multiplier: default_weekday_multiplier(),
            weekend_multiplier: default_weekend_multiplier(),
        }
    }
}

/// A month-scoped scenario event for one channel, e.g. a traffic spike or a
/// bid-optimization CPC drop.
#[derive(Debug, Clone, Deserialize)]
pub struct EventConfig {
    /// Calendar month the event applies to (1-12, any year in range).
    pub month: u32,
    pub channel: Channel,
    #[serde(default = "default_multiplier")]
    pub impressions_multiplier: f64,
    #[serde(default = "default_multiplier")]
    pub cpc_multiplier: f64,
}

const fn default_multiplier() -> f64 {
    1.0
}

/// Where generated files land.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the flat dataset CSV.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Also write star-schema CSVs (dim_date, dim_channel, dim_campaign,
    /// fact_performance).
    #[serde(default)]
    pub star_schema: bool,
    /// Directory for the star-schema CSVs.
    #[serde(default = "default_star_schema_dir")]
    pub star_schema_dir: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("dataset.csv")
}

fn default_star_schema_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            star_schema: false,
            star_schema_dir: default_star_schema_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            channels: ChannelsConfig::default(),
            seasonality: SeasonalityConfig::default(),
            events: Vec::new(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_generation()?;
        self.validate_channels()?;
        self.validate_seasonality()?;
        self.validate_events()?;
        Ok(())
    }

    fn validate_generation(&self) -> Result<()> {
        let generation = &self.generation;
        if generation.end_date < generation.start_date {
            return Err(ConfigError::InvalidValue {
                field: "date_range",
                reason: format!(
                    "end_date {} is before start_date {}",
                    generation.end_date, generation.start_date
                ),
            }
            .into());
        }
        if generation.campaign_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "campaign_count",
                reason: "must be positive".into(),
            }
            .into());
        }
        if !(0.0..1.0).contains(&generation.noise_level) {
            return Err(ConfigError::InvalidValue {
                field: "noise_level",
                reason: format!("must be in [0, 1), got {}", generation.noise_level),
            }
            .into());
        }
        Ok(())
    }

    fn validate_channels(&self) -> Result<()> {
        let weights = &self.channels.weights;
        if weights.is_empty() {
            return Err(ConfigError::MissingField {
                field: "channels.weights",
            }
            .into());
        }
        if let Some((channel, weight)) = weights.iter().find(|(_, w)| **w < 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "channels.weights",
                reason: format!("weight for {channel} is negative ({weight})"),
            }
            .into());
        }
        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidValue {
                field: "channels.weights",
                reason: format!("weights must sum to 1.0, got {sum}"),
            }
            .into());
        }

        for (channel, overrides) in &self.channels.profiles {
            validate_profile_overrides(*channel, overrides)?;
        }
        Ok(())
    }

    fn validate_seasonality(&self) -> Result<()> {
        for (name, value) in [
            ("weekday_multiplier", self.seasonality.weekday_multiplier),
            ("weekend_multiplier", self.seasonality.weekend_multiplier),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "seasonality",
                    reason: format!("{name} must be positive, got {value}"),
                }
                .into());
            }
        }
        Ok(())
    }

    fn validate_events(&self) -> Result<()> {
        for event in &self.events {
            if !(1..=12).contains(&event.month) {
                return Err(ConfigError::InvalidValue {
                    field: "events",
                    reason: format!("month must be 1-12, got {}", event.month),
                }
                .into());
            }
            if event.impressions_multiplier <= 0.0 || event.cpc_multiplier <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "events",
                    reason: format!("multipliers must be positive for {} event", event.channel),
                }
                .into());
            }
        }
        Ok(())
    }
}

fn validate_profile_overrides(channel: Channel, overrides: &ProfileOverrides) -> Result<()> {
    fn check_range(
        channel: Channel,
        name: &str,
        range: Option<(f64, f64)>,
        max: f64,
    ) -> Result<()> {
        if let Some((low, high)) = range {
            if low < 0.0 || high > max || low > high {
                return Err(ConfigError::InvalidValue {
                    field: "channels.profiles",
                    reason: format!("{channel}.{name} [{low}, {high}] is not a valid range"),
                }
                .into());
            }
        }
        Ok(())
    }

    if let Some((low, high)) = overrides.impressions_range {
        if low > high {
            return Err(ConfigError::InvalidValue {
                field: "channels.profiles",
                reason: format!("{channel}.impressions_range [{low}, {high}] is inverted"),
            }
            .into());
        }
    }
    check_range(channel, "ctr_range", overrides.ctr_range, 1.0)?;
    check_range(channel, "cpc_range", overrides.cpc_range, f64::MAX)?;
    check_range(
        channel,
        "conversion_rate_range",
        overrides.conversion_rate_range,
        1.0,
    )?;
    check_range(channel, "aov_range", overrides.aov_range, f64::MAX)?;
    if let Some(median) = overrides.budget_median {
        if median <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "channels.profiles",
                reason: format!("{channel}.budget_median must be positive, got {median}"),
            }
            .into());
        }
    }
    if let Some(sigma) = overrides.budget_sigma {
        if sigma < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "channels.profiles",
                reason: format!("{channel}.budget_sigma must be non-negative, got {sigma}"),
            }
            .into());
        }
    }
    Ok(())
}

impl Config {
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
