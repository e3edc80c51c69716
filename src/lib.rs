//! # innings-charts
//! Descriptive charts for a single cricket match, built from a ball-by-ball
//! delivery log.
//!
//! The pipeline is strictly sequential:
//! [`parsing`] loads the CSV, [`cleaning`] derives the computed columns,
//! [`analysis`] aggregates one view per chart and [`common::plots`] renders them.

pub mod analysis;
pub mod cleaning;
pub mod common;
pub mod parsing;
pub mod report;

pub use report::{load_innings, MatchReport, ReportConfig, ReportError};
