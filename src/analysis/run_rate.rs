//! Run-rate progression analysis
//!
//! Extracts, per team, the running run rate after every delivery faced.

use crate::common::buckets::format_table;
use crate::common::palette::team_color;
use crate::common::plots::{create_line_plot, ChartLabels, LineData};
use crate::common::{BallProgress, InningsTable, PlotError};
use std::path::{Path, PathBuf};
use tabled::Tabled;

/// Output file name of the run-rate chart.
pub const RUN_RATE_FILE: &str = "run_rate_progression.png";

/// Deliveries per over.
const BALLS_PER_OVER: u32 = 6;

/// One team's innings progression in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamProgression {
    pub team: String,
    pub points: Vec<BallProgress>,
}

impl TeamProgression {
    /// Totals after the team's last delivery.
    pub fn last(&self) -> Option<&BallProgress> {
        self.points.last()
    }
}

#[derive(Debug, Clone, Tabled)]
struct InningsTotals {
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Runs")]
    runs: u32,
    #[tabled(rename = "Balls")]
    balls: u32,
    #[tabled(rename = "Overs")]
    overs: String,
    #[tabled(rename = "Run Rate")]
    run_rate: String,
}

/// Groups the per-delivery progression columns by team, teams in first-appearance order.
pub fn compute_run_rate_progression(table: &InningsTable) -> Vec<TeamProgression> {
    let mut progression: Vec<TeamProgression> = table
        .teams
        .iter()
        .map(|team| TeamProgression {
            team: team.clone(),
            points: Vec::new(),
        })
        .collect();

    for delivery in &table.deliveries {
        if let Some(index) = table.team_index(&delivery.team) {
            progression[index].points.push(delivery.progress);
        }
    }

    progression
}

/// Formats a ball count the way scorecards show overs (`"3.4"` = 3 overs, 4 balls).
pub fn format_overs(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

pub fn generate_run_rate_summary(progression: &[TeamProgression]) -> String {
    let rows: Vec<InningsTotals> = progression
        .iter()
        .filter_map(|team| {
            team.last().map(|last| InningsTotals {
                team: team.team.clone(),
                runs: last.cumulative_runs,
                balls: last.cumulative_balls,
                overs: format_overs(last.cumulative_balls),
                run_rate: format!("{:.2}", last.run_rate),
            })
        })
        .collect();
    format_table(&rows, "Innings Totals")
}

/// Draws one run-rate line per team into `output_dir`.
pub fn generate_run_rate_plot(
    progression: &[TeamProgression],
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    let lines: Vec<LineData> = progression
        .iter()
        .enumerate()
        .map(|(index, team)| LineData {
            name: team.team.clone(),
            color: team_color(index),
            points: team
                .points
                .iter()
                .map(|p| (p.cumulative_balls as f64, p.run_rate))
                .collect(),
        })
        .collect();

    let output_path = output_dir.join(RUN_RATE_FILE);
    create_line_plot(
        &lines,
        &ChartLabels {
            title: "Run Rate Progression Throughout the Innings",
            x_label: "Balls Bowled",
            y_label: "Run Rate (per over)",
        },
        &output_path,
    )?;

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::tests::sample_table;
    use rstest::rstest;

    #[test]
    fn final_totals_per_team() {
        let progression = compute_run_rate_progression(&sample_table());
        assert_eq!(progression.len(), 2);

        let sunrisers = progression[0].last().unwrap();
        assert_eq!(progression[0].team, "Sunrisers");
        assert_eq!(sunrisers.cumulative_balls, 6);
        assert_eq!(sunrisers.cumulative_runs, 12);
        assert_eq!(sunrisers.run_rate, 12.0);

        let royals = progression[1].last().unwrap();
        assert_eq!(royals.cumulative_balls, 5);
        assert_eq!(royals.cumulative_runs, 13);
        assert!((royals.run_rate - 15.6).abs() < 1e-9);
    }

    #[test]
    fn run_rate_is_six_times_runs_per_ball() {
        for team in compute_run_rate_progression(&sample_table()) {
            for p in &team.points {
                let expected = p.cumulative_runs as f64 / p.cumulative_balls as f64 * 6.0;
                assert!((p.run_rate - expected).abs() < 1e-9);
            }
        }
    }

    #[rstest(balls, expected,
        case(0, "0.0"),
        case(6, "1.0"),
        case(22, "3.4"),
        case(120, "20.0")
    )]
    fn overs_notation(balls: u32, expected: &str) {
        assert_eq!(format_overs(balls), expected);
    }

    #[test]
    fn summary_has_team_rows() {
        let summary = generate_run_rate_summary(&compute_run_rate_progression(&sample_table()));
        assert!(summary.contains("Sunrisers"));
        assert!(summary.contains("15.60"));
        assert!(summary.contains("0.5"));
    }
}
