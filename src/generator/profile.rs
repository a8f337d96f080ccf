//! Per-channel behavior profiles.
//!
//! Channel behavior is a lookup table keyed by [`Channel`], not branching
//! logic: adding a channel means adding one row here. The built-in numbers
//! encode the usual shape of each channel: display is high-volume with
//! low CTR and cheap clicks, search is low-volume with high CTR and
//! expensive clicks, social sits in between, and email costs nothing per
//! click.

use crate::config::{ChannelsConfig, ProfileOverrides};
use crate::domain::Channel;

/// Statistical parameters for one channel.
///
/// Ranges are `(low, high)` bounds that per-row values are sampled from
/// uniformly; budgets come from a log-normal around `budget_median`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelProfile {
    pub impressions_range: (u64, u64),
    pub ctr_range: (f64, f64),
    pub cpc_range: (f64, f64),
    pub conversion_rate_range: (f64, f64),
    pub aov_range: (f64, f64),
    pub budget_median: f64,
    pub budget_sigma: f64,
}

impl ChannelProfile {
    /// Built-in profile for a channel.
    #[must_use]
    pub fn base(channel: Channel) -> Self {
        match channel {
            Channel::Search => Self {
                impressions_range: (300, 1200),
                ctr_range: (0.08, 0.12),
                cpc_range: (2.50, 6.00),
                conversion_rate_range: (0.05, 0.15),
                aov_range: (80.0, 160.0),
                budget_median: 8_000.0,
                budget_sigma: 0.4,
            },
            Channel::Social => Self {
                impressions_range: (1_000, 4_000),
                ctr_range: (0.015, 0.035),
                cpc_range: (1.50, 3.50),
                conversion_rate_range: (0.05, 0.15),
                aov_range: (60.0, 120.0),
                budget_median: 10_000.0,
                budget_sigma: 0.4,
            },
            Channel::Email => Self {
                impressions_range: (800, 2_500),
                ctr_range: (0.05, 0.08),
                cpc_range: (0.0, 0.0),
                conversion_rate_range: (0.08, 0.18),
                aov_range: (50.0, 100.0),
                budget_median: 2_000.0,
                budget_sigma: 0.3,
            },
            Channel::Display => Self {
                impressions_range: (5_000, 15_000),
                ctr_range: (0.003, 0.007),
                cpc_range: (0.30, 0.90),
                conversion_rate_range: (0.05, 0.15),
                aov_range: (40.0, 90.0),
                budget_median: 15_000.0,
                budget_sigma: 0.4,
            },
        }
    }

    fn apply(&mut self, overrides: &ProfileOverrides) {
        if let Some(range) = overrides.impressions_range {
            self.impressions_range = range;
        }
        if let Some(range) = overrides.ctr_range {
            self.ctr_range = range;
        }
        if let Some(range) = overrides.cpc_range {
            self.cpc_range = range;
        }
        if let Some(range) = overrides.conversion_rate_range {
            self.conversion_rate_range = range;
        }
        if let Some(range) = overrides.aov_range {
            self.aov_range = range;
        }
        if let Some(median) = overrides.budget_median {
            self.budget_median = median;
        }
        if let Some(sigma) = overrides.budget_sigma {
            self.budget_sigma = sigma;
        }
    }
}

/// Profile lookup table covering every channel.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: [ChannelProfile; Channel::ALL.len()],
}

impl ProfileTable {
    /// Built-in profiles with no overrides applied.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profiles: Channel::ALL.map(ChannelProfile::base),
        }
    }

    /// Built-in profiles with config overrides merged in.
    #[must_use]
    pub fn from_config(config: &ChannelsConfig) -> Self {
        let profiles = Channel::ALL.map(|channel| {
            let mut profile = ChannelProfile::base(channel);
            if let Some(overrides) = config.profiles.get(&channel) {
                profile.apply(overrides);
            }
            profile
        });
        Self { profiles }
    }

    #[must_use]
    pub fn get(&self, channel: Channel) -> &ChannelProfile {
        &self.profiles[(channel.key() - 1) as usize]
    }
}
