//! Invariant checking over dataset rows.
//!
//! Re-checks everything the generator promises about its output, so a file
//! that has been through external tooling can be trusted again before
//! analysis.

use rust_decimal::Decimal;

use crate::domain::{Dataset, DatasetRow};
use crate::generator::ProfileTable;

/// Headroom applied around profile ranges when judging ratio plausibility.
/// Scenario events and budget capping legitimately push ratios outside the
/// sampling range, so the check is a corridor, not an exact bound.
const LOWER_HEADROOM: f64 = 0.5;
const UPPER_HEADROOM: f64 = 2.0;

/// One failed check.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// 1-based CSV line number (the header is line 1); `None` for
    /// campaign-level checks.
    pub row: Option<usize>,
    pub campaign_id: String,
    pub rule: &'static str,
    pub detail: String,
}

/// Check row-level invariants on flat rows; returns every violation found.
pub fn check_rows(rows: &[DatasetRow]) -> Vec<Violation> {
    let profiles = ProfileTable::builtin();
    let mut violations = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let line = index + 2;
        let mut fail = |rule: &'static str, detail: String| {
            violations.push(Violation {
                row: Some(line),
                campaign_id: row.campaign_id.clone(),
                rule,
                detail,
            });
        };

        if row.clicks > row.impressions {
            fail(
                "clicks exceed impressions",
                format!("{} clicks > {} impressions", row.clicks, row.impressions),
            );
        }
        if row.conversions > row.clicks {
            fail(
                "conversions exceed clicks",
                format!("{} conversions > {} clicks", row.conversions, row.clicks),
            );
        }
        if row.spend < Decimal::ZERO {
            fail("negative spend", format!("spend {}", row.spend));
        }
        if row.revenue < Decimal::ZERO {
            fail("negative revenue", format!("revenue {}", row.revenue));
        }
        if row.channel.is_zero_cost() && row.spend > Decimal::ZERO {
            fail(
                "spend on zero-cost channel",
                format!("{} spent {}", row.channel, row.spend),
            );
        }

        let profile = profiles.get(row.channel);

        // Floor-derived counts can only drag realized ratios down, so only
        // the upper bounds are hard plausibility limits.
        if let Some(ctr) = row.ctr() {
            let limit = profile.ctr_range.1 * UPPER_HEADROOM;
            if ctr > limit {
                fail(
                    "implausible CTR",
                    format!("{ctr:.4} above plausible limit {limit:.4}"),
                );
            }
        }
        if let Some(rate) = row.conversion_rate() {
            let limit = profile.conversion_rate_range.1 * UPPER_HEADROOM;
            if rate > limit {
                fail(
                    "implausible conversion rate",
                    format!("{rate:.4} above plausible limit {limit:.4}"),
                );
            }
        }
        if !row.channel.is_zero_cost() {
            if let Some(cpc) = row.cpc() {
                let low = profile.cpc_range.0 * LOWER_HEADROOM;
                let high = profile.cpc_range.1 * UPPER_HEADROOM;
                if cpc < low || cpc > high {
                    fail(
                        "implausible CPC",
                        format!("{cpc:.4} outside plausible corridor [{low:.2}, {high:.2}]"),
                    );
                }
            }
        }
    }

    violations
}

/// Check an in-memory dataset, including the per-campaign budget cap the
/// flat file cannot express.
pub fn check_dataset(dataset: &Dataset) -> Vec<Violation> {
    let mut violations = check_rows(&dataset.flat_rows());

    for campaign in &dataset.campaigns {
        let spent: Decimal = dataset
            .records
            .iter()
            .filter(|record| record.campaign_id == campaign.id)
            .map(|record| record.spend)
            .sum();
        if spent > campaign.budget {
            violations.push(Violation {
                row: None,
                campaign_id: campaign.id.clone(),
                rule: "cumulative spend exceeds budget",
                detail: format!("spent {spent} of {} budget", campaign.budget),
            });
        }
    }

    violations
}
