//! Dismissal type analysis

use crate::common::buckets::{format_table, CountEntry};
use crate::common::palette::{cycle, HUSL};
use crate::common::plots::{create_bar_plot, BarSeries, ChartLabels};
use crate::common::{InningsTable, PlotError};
use std::path::{Path, PathBuf};

/// Output file name of the dismissal types chart.
pub const DISMISSAL_TYPES_FILE: &str = "dismissal_types.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissalCount {
    pub kind: String,
    pub count: usize,
}

/// Counts wicket deliveries per `wicket_kind`, most frequent first.
///
/// Wickets without a recorded kind are skipped. Equal counts keep the order in
/// which the kinds first occurred.
pub fn compute_dismissal_types(table: &InningsTable) -> Vec<DismissalCount> {
    let mut counts: Vec<DismissalCount> = Vec::new();
    for kind in table.wickets().filter_map(|d| d.wicket_kind.as_deref()) {
        match counts.iter_mut().find(|c| c.kind == kind) {
            Some(entry) => entry.count += 1,
            None => counts.push(DismissalCount {
                kind: kind.to_string(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn generate_dismissal_types_summary(dismissals: &[DismissalCount]) -> String {
    let total: usize = dismissals.iter().map(|d| d.count).sum();
    let rows: Vec<CountEntry> = dismissals
        .iter()
        .map(|d| CountEntry::new(d.kind.clone(), d.count, total))
        .collect();
    format_table(&rows, "Types of Dismissals")
}

/// Draws one bar per dismissal type into `output_dir`.
pub fn generate_dismissal_types_plot(
    dismissals: &[DismissalCount],
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    let categories: Vec<String> = dismissals.iter().map(|d| d.kind.clone()).collect();
    let series: Vec<BarSeries> = dismissals
        .iter()
        .enumerate()
        .map(|(index, d)| BarSeries {
            name: None,
            color: cycle(&HUSL, index),
            bars: vec![(index, d.count as f64)],
        })
        .collect();

    let output_path = output_dir.join(DISMISSAL_TYPES_FILE);
    create_bar_plot(
        &categories,
        &series,
        false,
        &ChartLabels {
            title: "Types of Dismissals in the Match",
            x_label: "Dismissal Type",
            y_label: "Count",
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

    #[test]
    fn counts_each_kind() {
        let dismissals = compute_dismissal_types(&sample_table());
        let counts: Vec<(&str, usize)> = dismissals
            .iter()
            .map(|d| (d.kind.as_str(), d.count))
            .collect();
        assert_eq!(counts, vec![("caught", 2), ("bowled", 1), ("lbw", 1)]);
    }

    #[test]
    fn single_bowled_wicket() {
        let table = clean_deliveries(vec![
            delivery("A", 0, "P", "Q", 4, 4, "", ""),
            delivery("A", 0, "X", "Q", 0, 0, "X", "bowled"),
        ]);
        assert_eq!(
            compute_dismissal_types(&table),
            vec![DismissalCount {
                kind: "bowled".to_string(),
                count: 1
            }]
        );
    }

    #[test]
    fn wicket_without_kind_is_skipped() {
        let table = clean_deliveries(vec![
            delivery("A", 0, "X", "Q", 0, 0, "X", ""),
            delivery("A", 0, "Y", "Q", 0, 0, "Y", "run out"),
        ]);
        let dismissals = compute_dismissal_types(&table);
        assert_eq!(dismissals.len(), 1);
        assert_eq!(dismissals[0].kind, "run out");
    }

    #[test]
    fn summary_totals_to_hundred_percent() {
        let summary = generate_dismissal_types_summary(&compute_dismissal_types(&sample_table()));
        assert!(summary.contains("caught"));
        assert!(summary.contains("50.0%"));
    }
}
