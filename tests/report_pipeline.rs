use innings_charts::analysis::runs_distribution::RUNS_DISTRIBUTION_FILE;
use innings_charts::report::{prepare_output_dir, CHART_COUNT};
use innings_charts::{load_innings, MatchReport, ReportConfig, ReportError};
use std::io::Write;
use tempfile::NamedTempFile;

const MATCH_CSV: &str = "\
team,over,batter,bowler,non_striker,runs_batter,runs_extras,runs_total,player_out,wicket_kind,fielders
Sunrisers,0,Head,Boult,Abhishek,4,0,4,,,
Sunrisers,0,Head,Boult,Abhishek,0,1,1,,,
Sunrisers,0,Abhishek,Boult,Head,6,0,6,,,
Sunrisers,0,Abhishek,Sandeep,Head,0,0,0,Abhishek,caught,Parag
Sunrisers,1,Head,Sandeep,Klaasen,1,0,1,,,
Sunrisers,1,Head,Sandeep,Klaasen,0,0,0,Head,bowled,
Royals,0,Jaiswal,Cummins,Buttler,2,0,2,,,
Royals,0,Jaiswal,Cummins,Buttler,0,0,0,Jaiswal,caught,Klaasen
Royals,0,Samson,Cummins,Buttler,4,0,4,,,
Royals,2,Parag,Natarajan,Samson,6,1,7,,,
Royals,2,Parag,Natarajan,Samson,0,0,0,Parag,lbw,
";

fn match_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(MATCH_CSV.as_bytes()).unwrap();
    file
}

#[test]
fn loads_and_derives_every_row() {
    let file = match_file();
    let table = load_innings(file.path()).unwrap();

    assert_eq!(table.len(), 11);
    assert_eq!(table.teams, vec!["Sunrisers", "Royals"]);
    assert_eq!(table.wickets().count(), 4);

    let last_sunrisers = &table.deliveries[5];
    assert_eq!(last_sunrisers.progress.cumulative_runs, 12);
    assert_eq!(last_sunrisers.progress.cumulative_balls, 6);
    assert!((last_sunrisers.progress.run_rate - 12.0).abs() < 1e-9);

    let first_royals = &table.deliveries[6];
    assert_eq!(first_royals.batter_team, "Royals");
    assert_eq!(first_royals.progress.cumulative_balls, 1);
    assert_eq!(first_royals.player_out, None);
}

#[test]
fn report_matches_worked_example() {
    let file = match_file();
    let table = load_innings(file.path()).unwrap();
    let report = MatchReport::compute(&table, &ReportConfig::default());

    assert_eq!(report.runs_distribution[0].team, "Sunrisers");
    assert_eq!(report.runs_distribution[0].counts, [2, 2, 0, 0, 1, 0, 1]);
    assert_eq!(report.runs_distribution[1].counts, [2, 0, 1, 0, 1, 0, 1]);

    let top = &report.top_scorers[0];
    assert_eq!((top.batter.as_str(), top.runs), ("Abhishek", 6));
    assert!(report
        .top_scorers
        .windows(2)
        .all(|pair| pair[0].runs >= pair[1].runs));

    assert_eq!(report.wicket_takers[0].bowler, "Sandeep");
    assert_eq!(report.wicket_takers[0].wickets, 2);

    let kinds: Vec<(&str, usize)> = report
        .dismissals
        .iter()
        .map(|d| (d.kind.as_str(), d.count))
        .collect();
    assert_eq!(kinds, vec![("caught", 2), ("bowled", 1), ("lbw", 1)]);

    let finals: Vec<u32> = report
        .run_rate
        .iter()
        .filter_map(|team| team.last().map(|p| p.cumulative_runs))
        .collect();
    assert_eq!(finals, vec![12, 13]);

    assert_eq!(report.runs_per_over.get(0, "Sunrisers"), Some(11));
    assert_eq!(report.runs_per_over.get(1, "Royals"), None);
    assert_eq!(report.runs_per_over.get(2, "Royals"), Some(7));
}

#[test]
fn malformed_row_aborts_load() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "team,over,batter,bowler,runs_batter,runs_total,player_out,wicket_kind\n\
         Sunrisers,0,Head,Boult,4,four,,\n"
    )
    .unwrap();

    let result = load_innings(file.path());
    assert!(matches!(result, Err(ReportError::Parsing(_))));
}

#[test]
#[ignore = "Font rendering not available in test environment"]
fn writes_all_charts() {
    let file = match_file();
    let table = load_innings(file.path()).unwrap();
    let report = MatchReport::compute(&table, &ReportConfig::default());

    let output = tempfile::tempdir().unwrap();
    let charts_dir = output.path().join("charts");
    prepare_output_dir(&charts_dir).unwrap();

    let mut seen = 0;
    let written = report.generate_plots(&charts_dir, |_| seen += 1).unwrap();

    assert_eq!(written.len(), CHART_COUNT);
    assert_eq!(seen, CHART_COUNT);
    assert!(written.iter().all(|path| path.is_file()));
    assert!(charts_dir.join(RUNS_DISTRIBUTION_FILE).is_file());
}
