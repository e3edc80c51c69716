//! File parsing functionality for ball-by-ball delivery logs
//!
//! This module handles loading the innings CSV into typed [`Delivery`] rows.

use crate::common::Delivery;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Parse the delivery log at `file_path` and load every row for analysis
///
/// The file must be comma-delimited with a header row naming at least
/// `team, batter, bowler, runs_total, runs_batter, player_out, wicket_kind, over`.
/// Row order is preserved.
///
/// # Arguments
/// * `file_path` - Path to the delivery CSV
///
/// # Returns
/// * `Ok(Vec<Delivery>)` - All rows of the file, in file order
/// * `Err(ParsingError)` - If the file is missing, a column is absent or a field is malformed
pub fn parse_deliveries(file_path: &Path) -> Result<Vec<Delivery>> {
    let file = File::open(file_path)?;
    let deliveries = parse_deliveries_from_reader(file)?;
    debug!(
        "Parsed {} deliveries from {}",
        deliveries.len(),
        file_path.display()
    );
    Ok(deliveries)
}

/// Same as [`parse_deliveries`], reading from any [`Read`] source.
///
/// Loading is all-or-nothing: the first bad row aborts the whole load.
pub fn parse_deliveries_from_reader<R: Read>(reader: R) -> Result<Vec<Delivery>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let deliveries = reader
        .deserialize::<Delivery>()
        .collect::<core::result::Result<Vec<_>, _>>()?;
    Ok(deliveries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    const HEADER: &str =
        "team,over,batter,bowler,non_striker,runs_batter,runs_extras,runs_total,player_out,wicket_kind,fielders";

    #[test]
    fn parses_rows_in_file_order() {
        let csv = format!(
            "{HEADER}\n\
             Sunrisers,0,Head,Boult,Abhishek,4,0,4,,,\n\
             Sunrisers,0,Head,Boult,Abhishek,0,1,1,,,\n\
             Sunrisers,0,Head,Boult,Abhishek,0,0,0,Head,caught,Parag\n"
        );

        let deliveries = parse_deliveries_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(deliveries.len(), 3);
        assert_eq!(deliveries[0].runs_total, 4);
        assert_eq!(deliveries[1].runs_total, 1);
        assert_eq!(deliveries[1].runs_batter, 0);
        assert_eq!(deliveries[2].player_out, "Head");
        assert_eq!(deliveries[2].wicket_kind, "caught");
        assert_eq!(deliveries[0].player_out, "");
    }

    #[test]
    fn header_only_file_is_empty() {
        let deliveries = parse_deliveries_from_reader(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(deliveries.is_empty());
    }

    #[rstest(row,
        case("Sunrisers,0,Head,Boult,Abhishek,four,0,4,,,"), // Non-numeric runs
        case("Sunrisers,0,Head,Boult,Abhishek,-1,0,4,,,"),   // Negative runs
        case("Sunrisers,x,Head,Boult,Abhishek,1,0,1,,,")     // Non-numeric over
    )]
    fn malformed_field_fails_load(row: &str) {
        let csv = format!("{HEADER}\n{row}\n");
        let result = parse_deliveries_from_reader(csv.as_bytes());
        assert!(matches!(result, Err(ParsingError::Csv(_))));
    }

    #[test]
    fn missing_required_column_fails_load() {
        let csv = "team,over,batter,bowler,runs_batter,runs_total,player_out\n\
                   Sunrisers,0,Head,Boult,4,4,\n";
        let result = parse_deliveries_from_reader(csv.as_bytes());
        assert!(matches!(result, Err(ParsingError::Csv(_))));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_deliveries(&dir.path().join("does_not_exist.csv"));
        assert!(matches!(result, Err(ParsingError::FileRead(_))));
    }

    #[test]
    fn parses_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "Royals,3,Jaiswal,Cummins,Buttler,6,0,6,,,").unwrap();

        let deliveries = parse_deliveries(file.path()).unwrap();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].team, "Royals");
        assert_eq!(deliveries[0].over, 3);
        assert_eq!(deliveries[0].bowler, "Cummins");
    }
}
