//! Report configuration and the load → clean → aggregate → render pipeline

use crate::analysis::dismissals::DismissalCount;
use crate::analysis::run_rate::TeamProgression;
use crate::analysis::runs_distribution::TeamRunsDistribution;
use crate::analysis::runs_per_over::RunsPerOver;
use crate::analysis::top_scorers::{BatterRuns, DEFAULT_TOP_SCORERS};
use crate::analysis::wicket_takers::{BowlerWickets, DEFAULT_TOP_BOWLERS};
use crate::analysis::*;
use crate::cleaning::clean_deliveries;
use crate::common::{InningsTable, PlotError};
use crate::parsing::{parse_deliveries, ParsingError};
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Input file read when none is given.
pub const DEFAULT_INPUT_FILE: &str = "innings_deliveries.csv";

/// Number of charts produced per report.
pub const CHART_COUNT: usize = 6;

/// Errors that can occur while producing a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] ParsingError),

    #[error("Plot generation error: {0}")]
    Plot(#[from] PlotError),

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid progress bar template: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

/// Settings for a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Delivery CSV to read
    pub input: PathBuf,
    /// Directory the charts are written to
    pub output_dir: PathBuf,
    /// Number of batters in the top scorers chart
    pub top_scorers: usize,
    /// Number of bowlers in the wicket-takers chart
    pub top_bowlers: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from("."),
            top_scorers: DEFAULT_TOP_SCORERS,
            top_bowlers: DEFAULT_TOP_BOWLERS,
        }
    }
}

/// Every aggregate view of one match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    pub teams: Vec<String>,
    pub runs_distribution: Vec<TeamRunsDistribution>,
    pub top_scorers: Vec<BatterRuns>,
    pub wicket_takers: Vec<BowlerWickets>,
    pub run_rate: Vec<TeamProgression>,
    pub dismissals: Vec<DismissalCount>,
    pub runs_per_over: RunsPerOver,
}

impl MatchReport {
    /// Runs every aggregation over `table`.
    pub fn compute(table: &InningsTable, config: &ReportConfig) -> Self {
        Self {
            teams: table.teams.clone(),
            runs_distribution: compute_runs_distribution(table),
            top_scorers: compute_top_scorers(table, config.top_scorers),
            wicket_takers: compute_top_wicket_takers(table, config.top_bowlers),
            run_rate: compute_run_rate_progression(table),
            dismissals: compute_dismissal_types(table),
            runs_per_over: compute_runs_per_over(table),
        }
    }

    /// Console tables, one per chart, in chart order.
    pub fn summaries(&self) -> Vec<String> {
        vec![
            generate_runs_distribution_summary(&self.runs_distribution),
            generate_top_scorers_summary(&self.top_scorers),
            generate_wicket_takers_summary(&self.wicket_takers),
            generate_run_rate_summary(&self.run_rate),
            generate_dismissal_types_summary(&self.dismissals),
            generate_runs_per_over_summary(&self.runs_per_over),
        ]
    }

    /// Renders all charts into `output_dir`, calling `on_chart` after each one.
    ///
    /// Returns the written paths in chart order.
    pub fn generate_plots(
        &self,
        output_dir: &Path,
        mut on_chart: impl FnMut(&Path),
    ) -> Result<Vec<PathBuf>, PlotError> {
        let mut written = Vec::with_capacity(CHART_COUNT);
        let mut record = |path: PathBuf| {
            on_chart(&path);
            written.push(path);
        };

        record(generate_runs_distribution_plot(&self.runs_distribution, output_dir)?);
        record(generate_top_scorers_plot(&self.top_scorers, &self.teams, output_dir)?);
        record(generate_wicket_takers_plot(&self.wicket_takers, output_dir)?);
        record(generate_run_rate_plot(&self.run_rate, output_dir)?);
        record(generate_dismissal_types_plot(&self.dismissals, output_dir)?);
        record(generate_runs_per_over_plot(&self.runs_per_over, output_dir)?);

        Ok(written)
    }
}

/// Loads and cleans the delivery log at `path`.
pub fn load_innings(path: &Path) -> Result<InningsTable, ReportError> {
    info!("Loading deliveries from {}", path.display());
    let deliveries = parse_deliveries(path)?;
    let table = clean_deliveries(deliveries);
    info!(
        "Loaded {} deliveries for {} team(s)",
        table.len(),
        table.teams.len()
    );
    Ok(table)
}

/// Creates the output directory (and parents) if it does not exist yet.
pub fn prepare_output_dir(path: &Path) -> Result<(), ReportError> {
    std::fs::create_dir_all(path).map_err(|source| ReportError::OutputDir {
        path: path.to_path_buf(),
        source,
    })
}
