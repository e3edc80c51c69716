//! Count tables and ASCII formatting for console summaries
//!
//! This module provides shared functionality for count-based summaries:
//! - [`CountEntry`] type for representing a labelled count with its share of the total
//! - ASCII table formatting using the [`tabled`] crate
//!
//! Specific summaries are built in their respective analysis modules

use tabled::{Table, Tabled};

/// Represents a single labelled count and its share of the total
#[derive(Debug, Clone, Tabled)]
pub struct CountEntry {
    /// Human-readable label (e.g. a bowler, a dismissal type, "6 runs")
    #[tabled(rename = "Value")]
    pub label: String,
    /// Number of occurrences
    #[tabled(rename = "Count")]
    pub count: usize,
    /// Percentage of the total
    #[tabled(rename = "Share")]
    pub percentage: String,
}

impl CountEntry {
    /// Creates a new count entry with formatted percentage
    pub fn new(label: String, count: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            "0.0%".to_string()
        } else {
            format!("{:.1}%", (count as f64 / total as f64) * 100.0)
        };

        Self {
            label,
            count,
            percentage,
        }
    }
}

/// Formats rows as an ASCII table with an underlined title.
///
/// Returns a placeholder line when there are no rows.
pub fn format_table<T: Tabled>(rows: &[T], title: &str) -> String {
    let body = if rows.is_empty() {
        "No data available".to_string()
    } else {
        Table::new(rows).to_string()
    };

    format!("{}\n{}\n{}", title, "=".repeat(title.chars().count()), body)
}
