//! Adsmith - deterministic synthetic marketing performance data.
//!
//! This crate generates internally consistent, statistically plausible
//! multi-table marketing data (campaigns, channels, daily performance
//! metrics) and writes it as CSV for downstream analysis and BI tools.
//!
//! # Guarantees
//!
//! For every generated row: `clicks <= impressions`,
//! `conversions <= clicks`, `spend >= 0`, `revenue >= 0`, and cumulative
//! spend per campaign never exceeds its budget. Generation is a pure
//! function of the configuration: the same config and seed produce a
//! byte-identical dataset.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with defaults for
//!   every field
//! - [`domain`] - Core types: channels, campaigns, daily metrics, datasets
//! - [`generator`] - The seeded generation engine and channel profiles
//! - [`export`] - CSV export (flat dataset and star schema) and import
//! - [`analysis`] - Invariant checking and per-channel aggregates
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use adsmith::config::Config;
//! use adsmith::generator;
//!
//! let mut config = Config::default();
//! config.generation.campaign_count = 2;
//!
//! let dataset = generator::generate(&config).expect("valid config");
//! assert_eq!(dataset.campaigns.len(), 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod generator;
