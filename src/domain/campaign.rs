//! Campaign identity and lifecycle attributes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Channel;

/// A single ad campaign.
///
/// Created once per generation run and immutable afterwards. The active
/// range is a sub-range of the configured date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub channel: Channel,
    pub objective: Objective,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
}

impl Campaign {
    /// Number of days the campaign is live, inclusive of both endpoints.
    #[must_use]
    pub fn active_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// What a campaign is optimizing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    BrandAwareness,
    Consideration,
    LeadGen,
    Conversion,
    Retention,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Objective::BrandAwareness => "Brand Awareness",
            Objective::Consideration => "Consideration",
            Objective::LeadGen => "Lead Gen",
            Objective::Conversion => "Conversion",
            Objective::Retention => "Retention",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn active_days_is_inclusive() {
        let campaign = Campaign {
            id: "CMP-0001".into(),
            name: "Adaptive retention loop".into(),
            channel: Channel::Search,
            objective: Objective::Conversion,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            budget: dec!(5000),
        };
        assert_eq!(campaign.active_days(), 7);
    }
}
