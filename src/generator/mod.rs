//! The generation engine.
//!
//! Generation is a pure function of the configuration: no I/O, a seeded
//! RNG scoped to the call, and a child RNG per campaign so each campaign's
//! rows are an independent stream. Same config + seed means an identical
//! dataset.

mod names;
mod profile;
mod seasonality;

pub use profile::{ChannelProfile, ProfileTable};
pub use seasonality::{day_multiplier, event_multipliers, is_weekend};

use chrono::NaiveDate;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::LogNormal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::Config;
use crate::domain::{Campaign, Channel, DailyMetricRecord, Dataset, Objective};
use crate::error::{ConfigError, Result};

/// Date ranges at or under this many days keep every campaign live for the
/// whole range; longer ranges sample an active sub-range per campaign.
const FULL_RANGE_THRESHOLD_DAYS: i64 = 14;

/// Minimum active days when sub-ranges are sampled.
const MIN_ACTIVE_DAYS: i64 = 7;

/// Run the generator.
///
/// Validates the configuration first, so all [`ConfigError`] cases surface
/// before any sampling happens.
pub fn generate(config: &Config) -> Result<Dataset> {
    config.validate()?;

    let profiles = ProfileTable::from_config(&config.channels);
    let generation = &config.generation;

    // BTreeMap iteration keeps channel order stable across runs.
    let channels: Vec<Channel> = config.channels.weights.keys().copied().collect();
    let weights: Vec<f64> = config.channels.weights.values().copied().collect();
    let channel_index = WeightedIndex::new(&weights).map_err(|e| ConfigError::InvalidValue {
        field: "channels.weights",
        reason: e.to_string(),
    })?;

    let mut rng = StdRng::seed_from_u64(generation.seed);

    let mut campaigns = Vec::with_capacity(generation.campaign_count as usize);
    for index in 0..generation.campaign_count {
        let channel = channels[channel_index.sample(&mut rng)];
        let profile = profiles.get(channel);
        let (start_date, end_date) =
            sample_active_range(&mut rng, generation.start_date, generation.end_date);
        campaigns.push(Campaign {
            id: format!("CMP-{:04}", index + 1),
            name: names::sample_name(&mut rng),
            channel,
            objective: sample_objective(&mut rng, channel),
            start_date,
            end_date,
            budget: sample_budget(&mut rng, profile),
        });
    }

    let mut records = Vec::new();
    for (index, campaign) in campaigns.iter().enumerate() {
        let mut campaign_rng =
            StdRng::seed_from_u64(campaign_stream_seed(generation.seed, index as u64));
        generate_campaign_days(&mut campaign_rng, config, &profiles, campaign, &mut records);
    }

    debug!(
        campaigns = campaigns.len(),
        records = records.len(),
        seed = generation.seed,
        "generation complete"
    );

    Ok(Dataset { campaigns, records })
}

/// Seed for one campaign's private stream. Mixing the index through an odd
/// multiplier keeps neighboring campaigns from sharing a stream prefix.
const fn campaign_stream_seed(seed: u64, index: u64) -> u64 {
    seed ^ (index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn sample_active_range<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    let total = (end - start).num_days() + 1;
    if total <= FULL_RANGE_THRESHOLD_DAYS {
        return (start, end);
    }

    let offset = rng.gen_range(0..=total - MIN_ACTIVE_DAYS);
    let length = rng.gen_range(MIN_ACTIVE_DAYS..=total - offset);
    let active_start = start + chrono::Duration::days(offset);
    let active_end = active_start + chrono::Duration::days(length - 1);
    (active_start, active_end)
}

fn sample_objective<R: Rng>(rng: &mut R, channel: Channel) -> Objective {
    let options: &[Objective] = match channel {
        Channel::Search => &[Objective::Conversion, Objective::LeadGen],
        Channel::Social => &[
            Objective::LeadGen,
            Objective::Conversion,
            Objective::BrandAwareness,
        ],
        Channel::Email => &[Objective::Retention, Objective::Conversion],
        Channel::Display => &[Objective::BrandAwareness, Objective::Consideration],
    };
    options[rng.gen_range(0..options.len())]
}

/// Budgets are log-normal: strictly positive and right-skewed, with a long
/// tail of big-spender campaigns.
fn sample_budget<R: Rng>(rng: &mut R, profile: &ChannelProfile) -> Decimal {
    let dist = LogNormal::new(profile.budget_median.ln(), profile.budget_sigma)
        .expect("budget_sigma is validated non-negative");
    let sampled: f64 = dist.sample(rng);
    debug_assert!(sampled.is_finite());
    Decimal::from_f64(sampled)
        .unwrap_or_default()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn generate_campaign_days(
    rng: &mut StdRng,
    config: &Config,
    profiles: &ProfileTable,
    campaign: &Campaign,
    records: &mut Vec<DailyMetricRecord>,
) {
    let profile = profiles.get(campaign.channel);
    let mut remaining_budget = campaign.budget;

    for date in campaign
        .start_date
        .iter_days()
        .take(campaign.active_days() as usize)
    {
        records.push(generate_day(
            rng,
            config,
            profile,
            campaign,
            date,
            &mut remaining_budget,
        ));
    }
}

fn generate_day(
    rng: &mut StdRng,
    config: &Config,
    profile: &ChannelProfile,
    campaign: &Campaign,
    date: NaiveDate,
    remaining_budget: &mut Decimal,
) -> DailyMetricRecord {
    let season = seasonality::day_multiplier(&config.seasonality, date);
    let (event_impressions, event_cpc) =
        seasonality::event_multipliers(&config.events, campaign.channel, date);
    let noise = sample_noise(rng, config.generation.noise_level);

    let base = rng.gen_range(profile.impressions_range.0..=profile.impressions_range.1);
    let impressions = (base as f64 * season * event_impressions * noise)
        .round()
        .max(0.0) as u64;

    let ctr = sample_range(rng, profile.ctr_range);
    let mut clicks = (impressions as f64 * ctr).floor() as u64;

    let mut spend = Decimal::ZERO;
    if !campaign.channel.is_zero_cost() && clicks > 0 {
        let cpc = sample_range(rng, profile.cpc_range) * event_cpc;
        if cpc > 0.0 {
            // Budget cap: shrink clicks to what the remaining budget affords
            // at the sampled CPC, so the per-click price stays in range and
            // cumulative spend never exceeds the budget.
            let affordable = (remaining_budget.to_f64().unwrap_or(0.0) / cpc).floor() as u64;
            clicks = clicks.min(affordable);
            spend = money(clicks as f64 * cpc).min(*remaining_budget);
            *remaining_budget -= spend;
        }
    }

    let conversion_rate = sample_range(rng, profile.conversion_rate_range);
    let conversions = (clicks as f64 * conversion_rate).floor() as u64;

    let aov = sample_range(rng, profile.aov_range);
    let revenue = money(conversions as f64 * aov);

    debug_assert!(clicks <= impressions);
    debug_assert!(conversions <= clicks);
    debug_assert!(spend >= Decimal::ZERO);
    debug_assert!(revenue >= Decimal::ZERO);

    DailyMetricRecord {
        campaign_id: campaign.id.clone(),
        date,
        impressions,
        clicks,
        spend,
        conversions,
        revenue,
    }
}

/// Multiplicative jitter in `[1 - noise_level, 1 + noise_level]`.
fn sample_noise<R: Rng>(rng: &mut R, noise_level: f64) -> f64 {
    rng.gen_range(1.0 - noise_level..=1.0 + noise_level)
}

fn sample_range<R: Rng>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    rng.gen_range(low..=high)
}

/// Round a sampled amount to cents.
fn money(value: f64) -> Decimal {
    debug_assert!(value.is_finite());
    Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
