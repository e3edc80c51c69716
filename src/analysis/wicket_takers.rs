//! Wicket-taker analysis
//!
//! Ranks bowlers by the wickets that fell on their deliveries and draws the top
//! of the ranking as a pie.

use crate::common::buckets::{format_table, CountEntry};
use crate::common::palette::PASTEL;
use crate::common::plots::create_pie_plot;
use crate::common::{InningsTable, PlotError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Number of bowlers shown when not configured otherwise.
pub const DEFAULT_TOP_BOWLERS: usize = 5;

/// Output file name of the wicket-takers chart.
pub const TOP_WICKET_TAKERS_FILE: &str = "top_wicket_takers.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BowlerWickets {
    pub bowler: String,
    pub wickets: usize,
}

/// Counts wicket deliveries per bowler and keeps the `limit` best, most first.
///
/// Bowlers are grouped in name order and sorted stably, so ties stay in name order.
pub fn compute_top_wicket_takers(table: &InningsTable, limit: usize) -> Vec<BowlerWickets> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for delivery in table.wickets() {
        *counts.entry(delivery.bowler.as_str()).or_default() += 1;
    }

    let mut bowlers: Vec<BowlerWickets> = counts
        .into_iter()
        .map(|(bowler, wickets)| BowlerWickets {
            bowler: bowler.to_string(),
            wickets,
        })
        .collect();
    bowlers.sort_by(|a, b| b.wickets.cmp(&a.wickets));
    bowlers.truncate(limit);
    bowlers
}

/// Console table; shares are relative to the bowlers shown, as in the pie.
pub fn generate_wicket_takers_summary(bowlers: &[BowlerWickets]) -> String {
    let total: usize = bowlers.iter().map(|b| b.wickets).sum();
    let rows: Vec<CountEntry> = bowlers
        .iter()
        .map(|b| CountEntry::new(b.bowler.clone(), b.wickets, total))
        .collect();
    format_table(&rows, "Top Wicket-Takers")
}

pub fn generate_wicket_takers_plot(
    bowlers: &[BowlerWickets],
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    let slices: Vec<(String, f64)> = bowlers
        .iter()
        .map(|b| (b.bowler.clone(), b.wickets as f64))
        .collect();

    let output_path = output_dir.join(TOP_WICKET_TAKERS_FILE);
    create_pie_plot(
        &slices,
        &PASTEL,
        "Top Wicket-Takers in the Match",
        &output_path,
    )?;

    Ok(output_path)
}
