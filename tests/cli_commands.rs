//! Command execution against policy files on disk

mod common;

use clap::Parser;
use hexuki::cli::{
    commands::{
        analyze::{self, AnalyzeArgs},
        book::{self, BookArgs},
        compare::{self, CompareArgs},
        decode::{self, DecodeArgs},
        export::{self, ExportArgs},
    },
    config::AnalysisConfig,
};
use tempfile::TempDir;

struct Fixtures {
    dir: TempDir,
    policy: String,
    later: String,
    book: String,
}

fn fixtures() -> Fixtures {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let policy = common::write_fixture(dir.path(), "policy.json", &common::sample_policy_json());
    let later = common::write_fixture(dir.path(), "later.json", &common::later_policy_json());
    let book = common::write_fixture(dir.path(), "book.json", &common::sample_book_json());
    Fixtures {
        policy: policy.display().to_string(),
        later: later.display().to_string(),
        book: book.display().to_string(),
        dir,
    }
}

#[test]
fn every_analyze_subcommand_runs() {
    let f = fixtures();
    let config = AnalysisConfig::default();
    for sub in [
        "overview", "depth", "training", "openings", "symmetry", "responses",
    ] {
        let args = AnalyzeArgs::parse_from(["analyze", sub, f.policy.as_str()]);
        analyze::execute(args, &config).unwrap_or_else(|e| panic!("{sub} failed: {e:#}"));
    }

    let args = AnalyzeArgs::parse_from([
        "analyze",
        "diversity",
        f.policy.as_str(),
        "--hex-indexing",
        "one",
    ]);
    analyze::execute(args, &config).unwrap();

    analyze::execute(AnalyzeArgs::parse_from(["analyze", "chains"]), &config).unwrap();
    analyze::execute(AnalyzeArgs::parse_from(["analyze", "chains", "--legacy"]), &config).unwrap();
}

#[test]
fn responses_follow_named_opening() {
    let f = fixtures();
    let config = AnalysisConfig::default();
    let args = AnalyzeArgs::parse_from([
        "analyze",
        "responses",
        f.policy.as_str(),
        "--opening",
        "t1h7",
    ]);
    analyze::execute(args, &config).unwrap();

    let args = AnalyzeArgs::parse_from([
        "analyze",
        "responses",
        f.policy.as_str(),
        "--opening",
        "t2h11",
    ]);
    let err = analyze::execute(args, &config).unwrap_err();
    assert!(format!("{err:#}").contains("no position after opening move 't2h11'"));
}

#[test]
fn diversity_requires_hex_indexing() {
    assert!(AnalyzeArgs::try_parse_from(["analyze", "diversity", "policy.json"]).is_err());
}

#[test]
fn missing_policy_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.json");
    let args = AnalyzeArgs::parse_from(["analyze", "overview", missing.to_str().unwrap()]);
    let err = analyze::execute(args, &AnalysisConfig::default()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load policy"));
}

#[test]
fn book_and_compare_run() {
    let f = fixtures();
    let config = AnalysisConfig {
        top_n: 2,
        ..Default::default()
    };
    book::execute(BookArgs::parse_from(["book", f.book.as_str()]), &config).unwrap();
    compare::execute(
        CompareArgs::parse_from(["compare", f.policy.as_str(), f.later.as_str()]),
        &config,
    )
    .unwrap();
}

#[test]
fn compare_unknown_state_fails() {
    let f = fixtures();
    let args = CompareArgs::parse_from([
        "compare",
        f.policy.as_str(),
        f.later.as_str(),
        "--state",
        common::AFTER_T1H7,
    ]);
    assert!(compare::execute(args, &AnalysisConfig::default()).is_err());
}

#[test]
fn decode_accepts_both_key_kinds() {
    decode::execute(DecodeArgs::parse_from(["decode", common::ENDGAME_KEY])).unwrap();
    decode::execute(DecodeArgs::parse_from(["decode", "t3h14"])).unwrap();
    assert!(decode::execute(DecodeArgs::parse_from(["decode", "t3h"])).is_err());
}

#[test]
fn export_writes_opening_csv() {
    let f = fixtures();
    let output = f.dir.path().join("openings.csv");
    let args = ExportArgs::parse_from([
        "export",
        "openings",
        f.policy.as_str(),
        "--output",
        output.to_str().unwrap(),
    ]);
    export::execute(args).unwrap();

    let csv = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("move,"));
    assert!(lines[1].starts_with("t1h7,"));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = common::write_fixture(dir.path(), "config.json", r#"{"top_n": 3}"#);
    let config = AnalysisConfig::load(&path).unwrap();
    assert_eq!(config.top_n, 3);
    assert_eq!(config.change_threshold, 0.1);
}
