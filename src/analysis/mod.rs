//! Per-chart analysis modules
//!
//! Each module derives one aggregate view from the cleaned table, formats it as a
//! console summary and renders it as a chart:
//! - Runs-per-delivery distribution
//! - Top run scorers
//! - Top wicket-takers
//! - Run-rate progression
//! - Dismissal types
//! - Runs per over

pub mod dismissals;
pub mod run_rate;
pub mod runs_distribution;
pub mod runs_per_over;
pub mod top_scorers;
pub mod wicket_takers;

// Re-export analysis functions for convenience
pub use dismissals::{
    compute_dismissal_types, generate_dismissal_types_plot, generate_dismissal_types_summary,
};
pub use run_rate::{compute_run_rate_progression, generate_run_rate_plot, generate_run_rate_summary};
pub use runs_distribution::{
    compute_runs_distribution, generate_runs_distribution_plot,
    generate_runs_distribution_summary,
};
pub use runs_per_over::{
    compute_runs_per_over, generate_runs_per_over_plot, generate_runs_per_over_summary,
};
pub use top_scorers::{compute_top_scorers, generate_top_scorers_plot, generate_top_scorers_summary};
pub use wicket_takers::{
    compute_top_wicket_takers, generate_wicket_takers_plot, generate_wicket_takers_summary,
};
