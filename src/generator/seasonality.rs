//! Day-of-week and scenario-event multipliers.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::{EventConfig, SeasonalityConfig};
use crate::domain::Channel;

#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Traffic multiplier for a calendar day.
#[must_use]
pub fn day_multiplier(config: &SeasonalityConfig, date: NaiveDate) -> f64 {
    if is_weekend(date) {
        config.weekend_multiplier
    } else {
        config.weekday_multiplier
    }
}

/// Combined `(impressions, cpc)` multipliers from every event matching the
/// channel and calendar month.
#[must_use]
pub fn event_multipliers(events: &[EventConfig], channel: Channel, date: NaiveDate) -> (f64, f64) {
    events
        .iter()
        .filter(|event| event.channel == channel && event.month == date.month())
        .fold((1.0, 1.0), |(impressions, cpc), event| {
            (
                impressions * event.impressions_multiplier,
                cpc * event.cpc_multiplier,
            )
        })
}
