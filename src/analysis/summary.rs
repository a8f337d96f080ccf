//! Per-channel aggregates with the derived metrics analysts expect.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::{Channel, DatasetRow};

/// Aggregated totals over some slice of rows.
#[derive(Debug, Clone, Default)]
pub struct MetricTotals {
    pub campaigns: u64,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: Decimal,
    pub conversions: u64,
    pub revenue: Decimal,
}

impl MetricTotals {
    /// Click-through rate (clicks / impressions).
    #[must_use]
    pub fn ctr(&self) -> Option<f64> {
        if self.impressions == 0 {
            None
        } else {
            Some(self.clicks as f64 / self.impressions as f64)
        }
    }

    /// Cost per click.
    #[must_use]
    pub fn cpc(&self) -> Option<f64> {
        if self.clicks == 0 {
            None
        } else {
            Some(self.spend.to_f64()? / self.clicks as f64)
        }
    }

    /// Cost per thousand impressions.
    #[must_use]
    pub fn cpm(&self) -> Option<f64> {
        if self.impressions == 0 {
            None
        } else {
            Some(self.spend.to_f64()? / self.impressions as f64 * 1000.0)
        }
    }

    /// Conversion rate (conversions / clicks).
    #[must_use]
    pub fn conversion_rate(&self) -> Option<f64> {
        if self.clicks == 0 {
            None
        } else {
            Some(self.conversions as f64 / self.clicks as f64)
        }
    }

    /// Return on ad spend (revenue / spend).
    #[must_use]
    pub fn roas(&self) -> Option<f64> {
        if self.spend <= Decimal::ZERO {
            None
        } else {
            Some(self.revenue.to_f64()? / self.spend.to_f64()?)
        }
    }
}

/// Totals for one channel.
#[derive(Debug, Clone)]
pub struct ChannelSummary {
    pub channel: Channel,
    pub totals: MetricTotals,
}

/// Everything `stats` reports about a dataset.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub rows: usize,
    pub channels: Vec<ChannelSummary>,
    pub overall: MetricTotals,
}

/// Aggregate flat rows per channel, ordered by channel, plus a grand total.
#[must_use]
pub fn summarize(rows: &[DatasetRow]) -> DatasetSummary {
    let mut by_channel: BTreeMap<Channel, MetricTotals> = BTreeMap::new();
    let mut campaigns_by_channel: BTreeMap<Channel, BTreeSet<&str>> = BTreeMap::new();
    let mut overall = MetricTotals::default();
    let mut all_campaigns: BTreeSet<&str> = BTreeSet::new();

    for row in rows {
        let totals = by_channel.entry(row.channel).or_default();
        accumulate(totals, row);
        accumulate(&mut overall, row);
        campaigns_by_channel
            .entry(row.channel)
            .or_default()
            .insert(row.campaign_id.as_str());
        all_campaigns.insert(row.campaign_id.as_str());
    }

    let channels = by_channel
        .into_iter()
        .map(|(channel, mut totals)| {
            totals.campaigns = campaigns_by_channel
                .get(&channel)
                .map_or(0, |ids| ids.len() as u64);
            ChannelSummary { channel, totals }
        })
        .collect();
    overall.campaigns = all_campaigns.len() as u64;

    DatasetSummary {
        rows: rows.len(),
        channels,
        overall,
    }
}

fn accumulate(totals: &mut MetricTotals, row: &DatasetRow) {
    totals.impressions += row.impressions;
    totals.clicks += row.clicks;
    totals.spend += row.spend;
    totals.conversions += row.conversions;
    totals.revenue += row.revenue;
}

impl DatasetSummary {
    /// JSON view including the derived metrics.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "rows": self.rows,
            "channels": self.channels.iter().map(channel_json).collect::<Vec<_>>(),
            "overall": totals_json(&self.overall),
        })
    }
}

fn channel_json(summary: &ChannelSummary) -> serde_json::Value {
    let mut value = totals_json(&summary.totals);
    value["channel"] = json!(summary.channel);
    value
}

fn totals_json(totals: &MetricTotals) -> serde_json::Value {
    json!({
        "campaigns": totals.campaigns,
        "impressions": totals.impressions,
        "clicks": totals.clicks,
        "spend": totals.spend,
        "conversions": totals.conversions,
        "revenue": totals.revenue,
        "ctr": totals.ctr(),
        "cpc": totals.cpc(),
        "cpm": totals.cpm(),
        "conversion_rate": totals.conversion_rate(),
        "roas": totals.roas(),
    })
}
