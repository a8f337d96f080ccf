use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use adsmith::analysis;
use adsmith::config::Config;
use adsmith::domain::Channel;
use adsmith::export;
use adsmith::generator;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config_for(
    campaign_count: u32,
    start: NaiveDate,
    end: NaiveDate,
    seed: u64,
    weights: &[(Channel, f64)],
) -> Config {
    let mut config = Config::default();
    config.generation.campaign_count = campaign_count;
    config.generation.start_date = start;
    config.generation.end_date = end;
    config.generation.seed = seed;
    config.channels.weights = BTreeMap::from_iter(weights.iter().copied());
    config
}

#[test]
fn same_seed_produces_identical_datasets() {
    let config = Config::default();
    let first = generator::generate(&config).expect("generate");
    let second = generator::generate(&config).expect("generate");
    assert_eq!(first, second);
}

#[test]
fn same_seed_produces_byte_identical_csv() {
    let config = Config::default();
    let dir = tempfile::tempdir().expect("tempdir");
    let path_a = dir.path().join("a.csv");
    let path_b = dir.path().join("b.csv");

    export::write_flat(&generator::generate(&config).expect("generate"), &path_a).expect("write");
    export::write_flat(&generator::generate(&config).expect("generate"), &path_b).expect("write");

    let bytes_a = std::fs::read(&path_a).expect("read");
    let bytes_b = std::fs::read(&path_b).expect("read");
    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn different_seeds_produce_different_rows() {
    let mut config = Config::default();
    let first = generator::generate(&config).expect("generate");
    config.generation.seed = 1234;
    let second = generator::generate(&config).expect("generate");
    assert_ne!(first.records, second.records);
}

#[test]
fn all_rows_satisfy_invariants() {
    let config = Config::default();
    let dataset = generator::generate(&config).expect("generate");
    let violations = analysis::check_dataset(&dataset);
    assert!(violations.is_empty(), "violations: {violations:?}");
}

#[test]
fn cumulative_spend_stays_within_budget() {
    // A long range with modest budgets forces the cap to engage.
    let mut config = config_for(
        8,
        date(2023, 1, 1),
        date(2023, 12, 31),
        7,
        &[(Channel::Search, 1.0)],
    );
    config.channels.profiles.insert(
        Channel::Search,
        adsmith::config::ProfileOverrides {
            budget_median: Some(500.0),
            budget_sigma: Some(0.1),
            ..Default::default()
        },
    );

    let dataset = generator::generate(&config).expect("generate");
    for campaign in &dataset.campaigns {
        let spent: Decimal = dataset
            .records
            .iter()
            .filter(|r| r.campaign_id == campaign.id)
            .map(|r| r.spend)
            .sum();
        assert!(
            spent <= campaign.budget,
            "{} spent {} of {}",
            campaign.id,
            spent,
            campaign.budget
        );
    }
}

#[test]
fn single_campaign_single_day_yields_one_row() {
    let day = date(2024, 6, 3);
    let config = config_for(1, day, day, 9, &[(Channel::Display, 1.0)]);

    let dataset = generator::generate(&config).expect("generate");
    assert_eq!(dataset.campaigns.len(), 1);
    assert_eq!(dataset.records.len(), 1);
    assert_eq!(dataset.records[0].date, day);
}

#[test]
fn single_channel_weight_yields_only_that_channel() {
    let config = config_for(
        20,
        date(2024, 1, 1),
        date(2024, 1, 10),
        11,
        &[(Channel::Email, 1.0)],
    );

    let dataset = generator::generate(&config).expect("generate");
    assert!(dataset
        .campaigns
        .iter()
        .all(|c| c.channel == Channel::Email));
    // Zero-cost channel: no spend anywhere.
    assert!(dataset
        .records
        .iter()
        .all(|r| r.spend == Decimal::ZERO));
}

#[test]
fn example_scenario_three_campaigns_one_week() {
    let config = config_for(
        3,
        date(2024, 1, 1),
        date(2024, 1, 7),
        42,
        &[(Channel::Search, 0.5), (Channel::Social, 0.5)],
    );

    let dataset = generator::generate(&config).expect("generate");
    assert_eq!(dataset.campaigns.len(), 3);
    assert_eq!(dataset.records.len(), 21);

    for campaign in &dataset.campaigns {
        let days = dataset
            .records
            .iter()
            .filter(|r| r.campaign_id == campaign.id)
            .count();
        assert_eq!(days, 7, "{} should cover the whole week", campaign.id);
        assert!(matches!(campaign.channel, Channel::Search | Channel::Social));
    }

    assert!(analysis::check_dataset(&dataset).is_empty());
}

#[test]
fn channel_mix_tracks_weights() {
    let config = config_for(
        300,
        date(2024, 1, 1),
        date(2024, 1, 2),
        5,
        &[(Channel::Search, 0.5), (Channel::Display, 0.5)],
    );

    let search_share = |seed: u64| {
        let mut config = config.clone();
        config.generation.seed = seed;
        let dataset = generator::generate(&config).expect("generate");
        dataset
            .campaigns
            .iter()
            .filter(|c| c.channel == Channel::Search)
            .count() as f64
            / dataset.campaigns.len() as f64
    };

    // The mix should track the weights for any seed.
    for seed in [5, 99, 1234] {
        let share = search_share(seed);
        assert!(
            (share - 0.5).abs() < 0.1,
            "seed {seed}: search share {share} too far from weight 0.5"
        );
    }
}

#[test]
fn campaign_dates_stay_within_configured_range() {
    let start = date(2023, 1, 1);
    let end = date(2023, 12, 31);
    let config = config_for(25, start, end, 3, &[(Channel::Social, 1.0)]);

    let dataset = generator::generate(&config).expect("generate");
    for campaign in &dataset.campaigns {
        assert!(campaign.start_date >= start && campaign.end_date <= end);
        assert!(campaign.start_date <= campaign.end_date);
    }
    for record in &dataset.records {
        let campaign = dataset.campaign(&record.campaign_id).expect("known campaign");
        assert!(record.date >= campaign.start_date && record.date <= campaign.end_date);
    }
}

#[test]
fn generate_rejects_invalid_config_before_sampling() {
    let config = config_for(
        0,
        date(2024, 1, 1),
        date(2024, 1, 7),
        42,
        &[(Channel::Search, 1.0)],
    );
    assert!(generator::generate(&config).is_err());
}

#[test]
fn scenario_events_shift_the_affected_month() {
    let mut quiet = config_for(
        6,
        date(2023, 7, 1),
        date(2023, 9, 30),
        21,
        &[(Channel::Display, 1.0)],
    );
    quiet.generation.noise_level = 0.0;
    let mut spiky = quiet.clone();
    spiky.events.push(adsmith::config::EventConfig {
        month: 8,
        channel: Channel::Display,
        impressions_multiplier: 3.0,
        cpc_multiplier: 1.0,
    });

    let base = generator::generate(&quiet).expect("generate");
    let spiked = generator::generate(&spiky).expect("generate");

    let august_impressions = |records: &[adsmith::domain::DailyMetricRecord]| -> u64 {
        records
            .iter()
            .filter(|r| r.date.month() == 8)
            .map(|r| r.impressions)
            .sum()
    };

    assert!(august_impressions(&spiked.records) > 2 * august_impressions(&base.records));
}
