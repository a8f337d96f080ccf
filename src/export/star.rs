//! Star-schema export.
//!
//! Writes the dimensional layout BI tools join on surrogate keys: a date
//! dimension at daily grain, channel and campaign dimensions, and a fact
//! table holding only keys and metrics.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Channel, Dataset};
use crate::error::Result;
use crate::generator::is_weekend;

use super::write_table;

pub const DIM_DATE_FILE: &str = "dim_date.csv";
pub const DIM_CHANNEL_FILE: &str = "dim_channel.csv";
pub const DIM_CAMPAIGN_FILE: &str = "dim_campaign.csv";
pub const FACT_FILE: &str = "fact_performance.csv";

#[derive(Debug, Serialize)]
struct DimDateRow {
    date_key: u32,
    date: NaiveDate,
    year: i32,
    month: u32,
    month_name: String,
    quarter: u32,
    is_weekend: bool,
}

#[derive(Debug, Serialize)]
struct DimChannelRow {
    channel_key: u32,
    channel: Channel,
}

#[derive(Debug, Serialize)]
struct DimCampaignRow {
    campaign_id: String,
    campaign_name: String,
    channel_key: u32,
    objective: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    budget: Decimal,
}

#[derive(Debug, Serialize)]
struct FactRow {
    date_key: u32,
    campaign_id: String,
    impressions: u64,
    clicks: u64,
    spend: Decimal,
    conversions: u64,
    revenue: Decimal,
}

/// Integer key in `YYYYMMDD` form, the warehousing convention for joining
/// facts to the date dimension.
fn date_key(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Write the four star-schema CSVs into `dir`.
///
/// The date dimension spans the earliest campaign start to the latest
/// campaign end, so every fact row has a matching date key.
pub fn write_star_schema(dataset: &Dataset, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    write_table(&dim_date_rows(dataset), dir.join(DIM_DATE_FILE))?;
    write_table(&dim_channel_rows(), dir.join(DIM_CHANNEL_FILE))?;
    write_table(&dim_campaign_rows(dataset), dir.join(DIM_CAMPAIGN_FILE))?;
    write_table(&fact_rows(dataset), dir.join(FACT_FILE))?;
    Ok(())
}

fn dim_date_rows(dataset: &Dataset) -> Vec<DimDateRow> {
    let Some(start) = dataset.campaigns.iter().map(|c| c.start_date).min() else {
        return Vec::new();
    };
    let Some(end) = dataset.campaigns.iter().map(|c| c.end_date).max() else {
        return Vec::new();
    };

    let days = (end - start).num_days() + 1;
    start
        .iter_days()
        .take(days as usize)
        .map(|date| DimDateRow {
            date_key: date_key(date),
            date,
            year: date.year(),
            month: date.month(),
            month_name: date.format("%b").to_string(),
            quarter: (date.month() - 1) / 3 + 1,
            is_weekend: is_weekend(date),
        })
        .collect()
}

fn dim_channel_rows() -> Vec<DimChannelRow> {
    Channel::ALL
        .iter()
        .map(|channel| DimChannelRow {
            channel_key: channel.key(),
            channel: *channel,
        })
        .collect()
}

fn dim_campaign_rows(dataset: &Dataset) -> Vec<DimCampaignRow> {
    dataset
        .campaigns
        .iter()
        .map(|campaign| DimCampaignRow {
            campaign_id: campaign.id.clone(),
            campaign_name: campaign.name.clone(),
            channel_key: campaign.channel.key(),
            objective: campaign.objective.to_string(),
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            budget: campaign.budget,
        })
        .collect()
}

fn fact_rows(dataset: &Dataset) -> Vec<FactRow> {
    dataset
        .records
        .iter()
        .map(|record| FactRow {
            date_key: date_key(record.date),
            campaign_id: record.campaign_id.clone(),
            impressions: record.impressions,
            clicks: record.clicks,
            spend: record.spend,
            conversions: record.conversions,
            revenue: record.revenue,
        })
        .collect()
}
