//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use eagles_cli::pipeline::run_analytics;
use eagles_ingest::IngestError;
use tempfile::TempDir;

const HEADER: &str = "game_id,date,opponent,home_away,points_scored,points_allowed,rushing_yards,passing_yards,turnovers,result";

fn write_csv(dir: &Path, name: &str, rows: &[&str]) {
    let mut contents = format!("{HEADER}\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(dir.join(name), contents).expect("write csv");
}

#[test]
fn empty_input_writes_nothing() {
    let input = TempDir::new().expect("input dir");
    let output = TempDir::new().expect("output dir");
    fs::write(input.path().join("readme.txt"), "no games here").expect("write");

    let run = run_analytics(input.path(), output.path()).expect("run");

    assert!(run.is_noop());
    assert!(run.summary.is_none());
    assert!(run.report_path.is_none());
    assert_eq!(fs::read_dir(output.path()).expect("list output").count(), 0);
}

#[test]
fn missing_input_dir_is_a_noop() {
    let root = TempDir::new().expect("root dir");
    let output = root.path().join("output");

    let run = run_analytics(&root.path().join("input"), &output).expect("run");

    assert!(run.is_noop());
    assert!(!output.exists());
}

#[test]
fn single_home_win() {
    let input = TempDir::new().expect("input dir");
    let output = TempDir::new().expect("output dir");
    write_csv(
        input.path(),
        "games.csv",
        &["1,2024-09-08,GB,home,30,20,100,200,1,W"],
    );

    let run = run_analytics(input.path(), output.path()).expect("run");
    let summary = run.summary.expect("summary");

    assert_eq!(summary.summary.wins, 1);
    assert_eq!(summary.summary.losses, 0);
    assert_eq!(summary.summary.win_percentage, 100.0);
    assert_eq!(summary.scoring.point_differential, 10);
    assert_eq!(summary.home_away.home_record, "1-0");
    assert_eq!(summary.home_away.away_record, "0-0");
    assert!(
        output
            .path()
            .join("eagles_analytics_report.json")
            .is_file()
    );
}

#[test]
fn writes_season_report_across_files() {
    let input = TempDir::new().expect("input dir");
    let output = TempDir::new().expect("output dir");
    write_csv(
        input.path(),
        "01_september.csv",
        &[
            "1,2024-09-06,GB,neutral,34,29,210,178,1,W",
            "2,2024-09-16,ATL,home,21,22,90,222,2,L",
        ],
    );
    write_csv(
        input.path(),
        "02_late_september.csv",
        &[
            "3,2024-09-22,NO,away,15,12,300,93,0,W",
            "4,2024-09-29,TB,away,16,33,58,164,1,L",
        ],
    );

    let run = run_analytics(input.path(), output.path()).expect("run");
    assert_eq!(run.source_files.len(), 2);
    assert_eq!(run.game_count, 4);

    let report_path = run.report_path.expect("report path");
    let report = fs::read_to_string(&report_path).expect("read report");
    insta::assert_snapshot!(report.trim_end(), @r#"
    {
      "summary": {
        "total_games": 4,
        "wins": 2,
        "losses": 2,
        "win_percentage": 50.0
      },
      "scoring": {
        "total_points_scored": 86,
        "total_points_allowed": 96,
        "avg_points_scored": 21.5,
        "avg_points_allowed": 24.0,
        "point_differential": -10
      },
      "offense": {
        "total_rushing_yards": 658,
        "total_passing_yards": 657,
        "total_yards": 1315,
        "avg_rushing_yards": 164.5,
        "avg_passing_yards": 164.2,
        "avg_total_yards": 328.8
      },
      "turnovers": {
        "total_turnovers": 4,
        "avg_turnovers_per_game": 1.0
      },
      "home_away": {
        "home_record": "0-1",
        "away_record": "1-1"
      }
    }
    "#);
}

#[test]
fn header_only_input_writes_empty_report() {
    let input = TempDir::new().expect("input dir");
    let output = TempDir::new().expect("output dir");
    write_csv(input.path(), "games.csv", &[]);

    let run = run_analytics(input.path(), output.path()).expect("run");

    assert!(!run.is_noop());
    assert!(run.summary.is_none());
    let report = fs::read_to_string(run.report_path.expect("report path")).expect("read report");
    assert_eq!(report, "{}\n");
}

#[test]
fn empty_file_aborts_without_output() {
    let input = TempDir::new().expect("input dir");
    let output = TempDir::new().expect("output dir");
    write_csv(
        input.path(),
        "01_games.csv",
        &["1,2024-09-06,GB,home,34,29,210,178,1,W"],
    );
    fs::write(input.path().join("02_empty.csv"), "").expect("write empty csv");

    let error = run_analytics(input.path(), output.path()).expect_err("empty file");

    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::EmptyCsv { .. })
    ));
    assert!(
        !output
            .path()
            .join("eagles_analytics_report.json")
            .exists()
    );
}

#[test]
fn header_only_file_missing_a_column_aborts() {
    let input = TempDir::new().expect("input dir");
    let output = TempDir::new().expect("output dir");
    let header = HEADER.replace(",turnovers", "");
    fs::write(input.path().join("games.csv"), format!("{header}\n")).expect("write csv");

    let error = run_analytics(input.path(), output.path()).expect_err("missing column");

    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::MissingColumn {
            column: "turnovers",
            ..
        })
    ));
    assert!(
        !output
            .path()
            .join("eagles_analytics_report.json")
            .exists()
    );
}

#[test]
fn missing_turnovers_aborts_without_output() {
    let input = TempDir::new().expect("input dir");
    let output = TempDir::new().expect("output dir");
    write_csv(
        input.path(),
        "games.csv",
        &[
            "1,2024-09-06,GB,home,34,29,210,178,1,W",
            "2,2024-09-16,ATL,home,21,22,90,222,L",
        ],
    );

    let error = run_analytics(input.path(), output.path()).expect_err("parse failure");

    let ingest_error = error
        .downcast_ref::<IngestError>()
        .expect("ingest error");
    assert!(matches!(
        ingest_error,
        IngestError::Parse { line: Some(3), .. }
    ));
    assert!(error.to_string().contains("games.csv"));
    assert!(
        !output
            .path()
            .join("eagles_analytics_report.json")
            .exists()
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let input = TempDir::new().expect("input dir");
    let output = TempDir::new().expect("output dir");
    write_csv(
        input.path(),
        "games.csv",
        &[
            "1,2024-09-06,GB,away,34,29,210,178,1,W",
            "2,2024-09-16,ATL,home,21,22,90,222,2,L",
            "3,2024-09-22,NO,away,15,12,300,93,0,W",
        ],
    );

    let first = run_analytics(input.path(), output.path()).expect("first run");
    let first_bytes = fs::read(first.report_path.expect("report")).expect("read first");
    let second = run_analytics(input.path(), output.path()).expect("second run");
    let second_bytes = fs::read(second.report_path.expect("report")).expect("read second");

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn maximal_stat_values_sum_without_overflow() {
    let input = TempDir::new().expect("input dir");
    let output = TempDir::new().expect("output dir");
    write_csv(
        input.path(),
        "games.csv",
        &[
            "1,2024-09-06,GB,home,18446744073709551615,0,18446744073709551615,18446744073709551615,0,W",
            "2,2024-09-16,ATL,away,1,0,1,0,0,L",
        ],
    );

    let run = run_analytics(input.path(), output.path()).expect("run");
    let report = fs::read_to_string(run.report_path.expect("report path")).expect("read report");

    assert!(report.contains("\"total_points_scored\": 18446744073709551616,"));
    assert!(report.contains("\"point_differential\": 18446744073709551616\n"));
    assert!(report.contains("\"total_yards\": 36893488147419103231,"));
}
