//! Runs-per-over analysis
//!
//! Pivots total runs into an over × team matrix and draws it as an annotated heatmap.

use crate::common::plots::{create_heatmap_plot, ChartLabels, HeatmapData};
use crate::common::{InningsTable, PlotError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tabled::builder::Builder;

/// Output file name of the heatmap.
pub const RUNS_PER_OVER_FILE: &str = "runs_per_over_heatmap.png";

/// Runs per (over, team). Overs ascending, teams in first-appearance order.
///
/// `cells[row][column]` is `None` when the team faced no delivery in that over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunsPerOver {
    pub overs: Vec<u32>,
    pub teams: Vec<String>,
    pub cells: Vec<Vec<Option<u32>>>,
}

impl RunsPerOver {
    /// Runs scored by `team` in `over`, if the team batted in it.
    pub fn get(&self, over: u32, team: &str) -> Option<u32> {
        let row = self.overs.binary_search(&over).ok()?;
        let column = self.teams.iter().position(|t| t == team)?;
        self.cells[row][column]
    }
}

pub fn compute_runs_per_over(table: &InningsTable) -> RunsPerOver {
    let columns = table.teams.len();
    let mut rows: BTreeMap<u32, Vec<Option<u32>>> = BTreeMap::new();

    for delivery in &table.deliveries {
        let Some(column) = table.team_index(&delivery.team) else {
            continue;
        };
        let row = rows
            .entry(delivery.over)
            .or_insert_with(|| vec![None; columns]);
        row[column] = Some(row[column].unwrap_or(0) + delivery.runs_total);
    }

    let (overs, cells): (Vec<u32>, Vec<Vec<Option<u32>>>) = rows.into_iter().unzip();
    RunsPerOver {
        overs,
        teams: table.teams.clone(),
        cells,
    }
}

/// Console matrix; overs the team did not bat in show as `-`.
pub fn generate_runs_per_over_summary(matrix: &RunsPerOver) -> String {
    let title = "Runs per Over";
    if matrix.overs.is_empty() {
        return format!("{}\n{}\nNo data available", title, "=".repeat(title.len()));
    }

    let mut builder = Builder::default();
    builder.push_record(std::iter::once("Over".to_string()).chain(matrix.teams.iter().cloned()));
    for (over, row) in matrix.overs.iter().zip(&matrix.cells) {
        builder.push_record(std::iter::once(over.to_string()).chain(
            row.iter().map(|cell| cell.map_or_else(|| "-".to_string(), |v| v.to_string())),
        ));
    }

    format!(
        "{}\n{}\n{}",
        title,
        "=".repeat(title.len()),
        builder.build()
    )
}

pub fn generate_runs_per_over_plot(
    matrix: &RunsPerOver,
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    let data = HeatmapData {
        row_labels: matrix.overs.iter().map(|o| o.to_string()).collect(),
        column_labels: matrix.teams.clone(),
        cells: matrix
            .cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(f64::from)).collect())
            .collect(),
    };

    let output_path = output_dir.join(RUNS_PER_OVER_FILE);
    create_heatmap_plot(
        &data,
        &ChartLabels {
            title: "Runs Scored per Over by Each Team",
            x_label: "Team",
            y_label: "Over Number",
        },
        "Runs Scored",
        &output_path,
    )?;

    Ok(output_path)
}
