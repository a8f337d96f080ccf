//! Core domain types: channels, campaigns, daily metrics, datasets.

mod campaign;
mod channel;
mod dataset;
mod record;

pub use campaign::{Campaign, Objective};
pub use channel::Channel;
pub use dataset::{Dataset, DatasetRow};
pub use record::DailyMetricRecord;
