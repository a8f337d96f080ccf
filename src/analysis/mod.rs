//! Dataset validation and aggregate statistics.

mod summary;
mod validate;

pub use summary::{summarize, ChannelSummary, DatasetSummary, MetricTotals};
pub use validate::{check_dataset, check_rows, Violation};
