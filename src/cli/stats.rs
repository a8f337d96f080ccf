//! Handler for the `stats` command.

use tabled::{Table, Tabled};

use crate::analysis::{self, MetricTotals};
use crate::cli::{output, StatsArgs};
use crate::error::Result;
use crate::export;

#[derive(Tabled)]
struct ChannelRow {
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Campaigns")]
    campaigns: u64,
    #[tabled(rename = "Impressions")]
    impressions: u64,
    #[tabled(rename = "Clicks")]
    clicks: u64,
    #[tabled(rename = "Spend")]
    spend: String,
    #[tabled(rename = "Conversions")]
    conversions: u64,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "CTR")]
    ctr: String,
    #[tabled(rename = "CPC")]
    cpc: String,
    #[tabled(rename = "ROAS")]
    roas: String,
}

/// Execute the stats command.
pub fn execute(args: &StatsArgs) -> Result<()> {
    let rows = export::read_rows(&args.file)?;
    let summary = analysis::summarize(&rows);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary.to_json())?);
        return Ok(());
    }

    output::section(&format!("Channel performance ({} rows)", summary.rows));

    let table_rows: Vec<ChannelRow> = summary
        .channels
        .iter()
        .map(|channel| make_row(channel.channel.to_string(), &channel.totals))
        .chain(std::iter::once(make_row("all".into(), &summary.overall)))
        .collect();

    let table = Table::new(table_rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}

fn make_row(channel: String, totals: &MetricTotals) -> ChannelRow {
    ChannelRow {
        channel,
        campaigns: totals.campaigns,
        impressions: totals.impressions,
        clicks: totals.clicks,
        spend: format!("{:.2}", totals.spend),
        conversions: totals.conversions,
        revenue: format!("{:.2}", totals.revenue),
        ctr: percent(totals.ctr()),
        cpc: ratio(totals.cpc()),
        roas: ratio(totals.roas()),
    }
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "-".into(), |v| format!("{:.2}%", v * 100.0))
}

fn ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "-".into(), |v| format!("{v:.2}"))
}
