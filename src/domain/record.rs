//! Daily performance metrics.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of performance for one campaign.
///
/// Invariants: `clicks <= impressions`, `conversions <= clicks`,
/// `spend >= 0`, `revenue >= 0`. The generator enforces these before a
/// record is ever constructed; violations downstream are bugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetricRecord {
    pub campaign_id: String,
    pub date: NaiveDate,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: Decimal,
    pub conversions: u64,
    pub revenue: Decimal,
}
