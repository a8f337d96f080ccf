//! Generated dataset container and the flat export row.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Campaign, Channel, DailyMetricRecord};

/// The complete output of one generation run.
///
/// Records reference campaigns by id; [`Dataset::flat_rows`] performs the
/// join that downstream BI tools consume.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub campaigns: Vec<Campaign>,
    pub records: Vec<DailyMetricRecord>,
}

impl Dataset {
    /// Number of daily metric records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a campaign by id.
    #[must_use]
    pub fn campaign(&self, id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    /// Join records with campaign attributes into flat export rows.
    ///
    /// Row order follows record order, which the generator keeps
    /// deterministic (campaigns in creation order, days ascending).
    #[must_use]
    pub fn flat_rows(&self) -> Vec<DatasetRow> {
        self.records
            .iter()
            .filter_map(|record| {
                let campaign = self.campaign(&record.campaign_id)?;
                Some(DatasetRow {
                    campaign_id: record.campaign_id.clone(),
                    campaign_name: campaign.name.clone(),
                    channel: campaign.channel,
                    date: record.date,
                    impressions: record.impressions,
                    clicks: record.clicks,
                    spend: record.spend,
                    conversions: record.conversions,
                    revenue: record.revenue,
                })
            })
            .collect()
    }
}

/// One row of the flat CSV export: a daily record joined with its campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub campaign_id: String,
    pub campaign_name: String,
    pub channel: Channel,
    pub date: NaiveDate,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: Decimal,
    pub conversions: u64,
    pub revenue: Decimal,
}

impl DatasetRow {
    /// Click-through rate (clicks / impressions).
    #[must_use]
    pub fn ctr(&self) -> Option<f64> {
        if self.impressions == 0 {
            None
        } else {
            Some(self.clicks as f64 / self.impressions as f64)
        }
    }

    /// Cost per click (spend / clicks).
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
