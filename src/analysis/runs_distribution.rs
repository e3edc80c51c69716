//! Runs-per-delivery distribution analysis
//!
//! Counts deliveries per team and run value, drawn as a dodged histogram.

use crate::common::buckets::{format_table, CountEntry};
use crate::common::palette::team_color;
use crate::common::plots::{create_bar_plot, BarSeries, ChartLabels};
use crate::common::{InningsTable, PlotError};
use std::path::{Path, PathBuf};

/// Highest run bucket; larger deliveries are counted here.
pub const MAX_RUNS_BUCKET: u32 = 6;

/// Number of run buckets (0 through [`MAX_RUNS_BUCKET`]).
pub const RUNS_BUCKETS: usize = MAX_RUNS_BUCKET as usize + 1;

/// Output file name of the distribution chart.
pub const RUNS_DISTRIBUTION_FILE: &str = "runs_distribution.png";

/// Delivery counts for one team, indexed by runs scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRunsDistribution {
    pub team: String,
    pub counts: [usize; RUNS_BUCKETS],
}

impl TeamRunsDistribution {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Counts deliveries per (team, runs_total) with runs clipped to 0..=6.
///
/// Teams are returned in first-appearance order.
pub fn compute_runs_distribution(table: &InningsTable) -> Vec<TeamRunsDistribution> {
    let mut distribution: Vec<TeamRunsDistribution> = table
        .teams
        .iter()
        .map(|team| TeamRunsDistribution {
            team: team.clone(),
            counts: [0; RUNS_BUCKETS],
        })
        .collect();

    for delivery in &table.deliveries {
        if let Some(index) = table.team_index(&delivery.team) {
            let bucket = delivery.runs_total.min(MAX_RUNS_BUCKET) as usize;
            distribution[index].counts[bucket] += 1;
        }
    }

    distribution
}

/// Per-team console tables of the distribution.
pub fn generate_runs_distribution_summary(distribution: &[TeamRunsDistribution]) -> String {
    if distribution.is_empty() {
        return format_table::<CountEntry>(&[], "Runs per Delivery");
    }

    distribution
        .iter()
        .map(|team| {
            let total = team.total();
            let rows: Vec<CountEntry> = team
                .counts
                .iter()
                .enumerate()
                .map(|(runs, &count)| CountEntry::new(bucket_label(runs), count, total))
                .collect();
            format_table(&rows, &format!("Runs per Delivery: {}", team.team))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Draws the dodged histogram into `output_dir`.
pub fn generate_runs_distribution_plot(
    distribution: &[TeamRunsDistribution],
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    let categories = bucket_labels();
    let series: Vec<BarSeries> = distribution
        .iter()
        .enumerate()
        .map(|(index, team)| BarSeries {
            name: Some(team.team.clone()),
            color: team_color(index),
            bars: team
                .counts
                .iter()
                .enumerate()
                .map(|(runs, &count)| (runs, count as f64))
                .collect(),
        })
        .collect();

    let output_path = output_dir.join(RUNS_DISTRIBUTION_FILE);
    create_bar_plot(
        &categories,
        &series,
        true,
        &ChartLabels {
            title: "Distribution of Runs per Delivery by Team",
            x_label: "Runs per Delivery",
            y_label: "Count of Deliveries",
        },
        &output_path,
    )?;

    Ok(output_path)
}

/// Axis and table labels of every run bucket, lowest first.
fn bucket_labels() -> Vec<String> {
    (0..RUNS_BUCKETS).map(bucket_label).collect()
}

fn bucket_label(runs: usize) -> String {
    if runs as u32 == MAX_RUNS_BUCKET {
        format!("{}+", runs)
    } else {
        runs.to_string()
    }
}
