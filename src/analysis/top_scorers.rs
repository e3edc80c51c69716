//! Top run scorer analysis

use crate::common::buckets::format_table;
use crate::common::palette::team_color;
use crate::common::plots::{create_bar_plot, BarSeries, ChartLabels};
use crate::common::{InningsTable, PlotError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tabled::Tabled;

/// Number of batters shown when not configured otherwise.
pub const DEFAULT_TOP_SCORERS: usize = 8;

/// Output file name of the top scorers chart.
pub const TOP_SCORERS_FILE: &str = "top_scorers.png";

/// Runs scored by one batter for one side.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct BatterRuns {
    #[tabled(rename = "Batter")]
    pub batter: String,
    #[tabled(rename = "Team")]
    pub team: String,
    #[tabled(rename = "Runs")]
    pub runs: u32,
}

/// Sums `runs_batter` per (batter, batter_team), ordered by that key.
pub fn batter_totals(table: &InningsTable) -> Vec<BatterRuns> {
    let mut totals: BTreeMap<(&str, &str), u32> = BTreeMap::new();
    for delivery in &table.deliveries {
        *totals
            .entry((delivery.batter.as_str(), delivery.batter_team.as_str()))
            .or_default() += delivery.runs_batter;
    }

    totals
        .into_iter()
        .map(|((batter, team), runs)| BatterRuns {
            batter: batter.to_string(),
            team: team.to_string(),
            runs,
        })
        .collect()
}

/// The `limit` highest run scorers, highest first.
///
/// The sort is stable, so tied batters keep their (batter, team) key order.
pub fn compute_top_scorers(table: &InningsTable, limit: usize) -> Vec<BatterRuns> {
    let mut totals = batter_totals(table);
    totals.sort_by(|a, b| b.runs.cmp(&a.runs));
    totals.truncate(limit);
    totals
}

pub fn generate_top_scorers_summary(scorers: &[BatterRuns]) -> String {
    format_table(scorers, "Top Run Scorers")
}

/// Draws one bar per batter, colored by team, into `output_dir`.
pub fn generate_top_scorers_plot(
    scorers: &[BatterRuns],
    teams: &[String],
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    let categories: Vec<String> = scorers.iter().map(|s| s.batter.clone()).collect();

    // One series per team so the legend maps colors to sides
    let series: Vec<BarSeries> = teams
        .iter()
        .enumerate()
        .filter_map(|(index, team)| {
            let bars: Vec<(usize, f64)> = scorers
                .iter()
                .enumerate()
                .filter(|(_, s)| &s.team == team)
                .map(|(slot, s)| (slot, s.runs as f64))
                .collect();
            (!bars.is_empty()).then(|| BarSeries {
                name: Some(team.clone()),
                color: team_color(index),
                bars,
            })
        })
        .collect();

    let output_path = output_dir.join(TOP_SCORERS_FILE);
    create_bar_plot(
        &categories,
        &series,
        false,
        &ChartLabels {
            title: "Top Run Scorers in the Match",
            x_label: "Batsman",
            y_label: "Total Runs",
        },
        &output_path,
    )?;

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::clean_deliveries;
    use crate::cleaning::tests::{delivery, sample_table};
    use rstest::rstest;

    #[test]
    fn ranks_by_runs_descending() {
        let top = compute_top_scorers(&sample_table(), DEFAULT_TOP_SCORERS);
        let order: Vec<(&str, u32)> = top.iter().map(|b| (b.batter.as_str(), b.runs)).collect();
        assert_eq!(
            order,
            vec![
                ("Samson", 10),
                ("Abhishek", 6),
                ("Head", 4),
                ("Jaiswal", 2),
                ("Tripathi", 1),
                ("Parag", 0),
            ]
        );
        assert_eq!(top[0].team, "Royals");
    }

    #[rstest(limit, expected_len,
        case(8, 6), // Fewer batters than the limit
        case(3, 3),
        case(0, 0)
    )]
    fn respects_limit(limit: usize, expected_len: usize) {
        assert_eq!(compute_top_scorers(&sample_table(), limit).len(), expected_len);
    }

    #[test]
    fn ties_keep_key_order() {
        let table = clean_deliveries(vec![
            delivery("A", 0, "Zed", "Q", 4, 4, "", ""),
            delivery("A", 0, "Amy", "Q", 4, 4, "", ""),
            delivery("A", 0, "Max", "Q", 4, 4, "", ""),
        ]);
        let top = compute_top_scorers(&table, 8);
        let names: Vec<&str> = top.iter().map(|b| b.batter.as_str()).collect();
        assert_eq!(names, vec!["Amy", "Max", "Zed"]);
    }

    #[test]
    fn totals_equal_sum_of_batter_rows() {
        let table = sample_table();
        for entry in batter_totals(&table) {
            let expected: u32 = table
                .deliveries
                .iter()
                .filter(|d| d.batter == entry.batter && d.batter_team == entry.team)
                .map(|d| d.runs_batter)
                .sum();
            assert_eq!(entry.runs, expected);
        }
    }

    #[test]
    fn summary_has_columns() {
        let summary = generate_top_scorers_summary(&compute_top_scorers(&sample_table(), 2));
        assert!(summary.contains("Batter"));
        assert!(summary.contains("Samson"));
        assert!(!summary.contains("Parag"));
    }
}
