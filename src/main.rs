use argh::FromArgs;
use indicatif::{ProgressBar, ProgressStyle};
use innings_charts::analysis::top_scorers::DEFAULT_TOP_SCORERS;
use innings_charts::analysis::wicket_takers::DEFAULT_TOP_BOWLERS;
use innings_charts::report::{prepare_output_dir, CHART_COUNT, DEFAULT_INPUT_FILE};
use innings_charts::{load_innings, MatchReport, ReportConfig, ReportError};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Draws descriptive charts for one match from a ball-by-ball delivery CSV
#[derive(FromArgs, Debug)]
struct Args {
    /// delivery CSV to read (default: innings_deliveries.csv)
    #[argh(positional, default = "PathBuf::from(DEFAULT_INPUT_FILE)")]
    input: PathBuf,

    /// directory the PNG charts are written to (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// number of batters in the top scorers chart (default: 8)
    #[argh(option, default = "DEFAULT_TOP_SCORERS")]
    top_scorers: usize,

    /// number of bowlers in the wicket-takers chart (default: 5)
    #[argh(option, default = "DEFAULT_TOP_BOWLERS")]
    top_bowlers: usize,
}

impl From<Args> for ReportConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output_dir: args.output_dir,
            top_scorers: args.top_scorers,
            top_bowlers: args.top_bowlers,
        }
    }
}

/// Advances the bar past a written chart. Log lines are emitted with the bar hidden.
fn record_chart(progress: &ProgressBar, path: &Path) {
    progress.suspend(|| debug!("Wrote {}", path.display()));
    progress.set_message(path.display().to_string());
    progress.inc(1);
}

fn main() -> Result<(), ReportError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: ReportConfig = argh::from_env::<Args>().into();

    // Any load failure aborts before a single chart is drawn
    let table = load_innings(&config.input)?;
    let report = MatchReport::compute(&table, &config);

    for summary in report.summaries() {
        println!("{}\n", summary);
    }

    prepare_output_dir(&config.output_dir)?;

    let progress = ProgressBar::new(CHART_COUNT as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let written = report.generate_plots(&config.output_dir, |path| record_chart(&progress, path))?;
    progress.finish_with_message("done");

    info!(
        "Saved {} charts to {}",
        written.len(),
        config.output_dir.display()
    );

    Ok(())
}
