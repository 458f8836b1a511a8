//! Tests for the hash command through its public API
//!
//! Arguments are parsed with clap exactly as the binary does, then the
//! command is driven against files in a temp directory.

#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use prooflist_cli::commands::hash::hash_paths;
use prooflist_cli::HashArgs;
use prooflist_core::notice::NoticeLog;
use prooflist_core::window::PageSize;
use rstest::rstest;
use tempfile::TempDir;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    args: HashArgs,
}

fn parse(args: &[&str]) -> Result<HashArgs, clap::Error> {
    TestCli::try_parse_from(std::iter::once("prooflist").chain(args.iter().copied()))
        .map(|cli| cli.args)
}

#[test]
fn test_defaults() {
    let args = parse(&["docs"]).expect("should parse");

    assert_eq!(args.paths, vec![PathBuf::from("docs")]);
    assert_eq!(args.page_size, PageSize::new(50).expect("non-zero"));
    assert_eq!(args.max_batch_size, 1000);
    assert_eq!(args.page, None);
    assert_eq!(args.csv, None);
    assert!(!args.lines && !args.json);
}

#[rstest]
#[case("all", PageSize::All)]
#[case("-1", PageSize::All)]
#[case("25", PageSize::new(25).expect("non-zero"))]
fn test_page_size_values(#[case] value: &str, #[case] expected: PageSize) {
    let args = parse(&["docs", "--page-size", value]).expect("should parse");
    assert_eq!(args.page_size, expected);
}

#[test]
fn test_invalid_page_size_is_rejected() {
    assert!(parse(&["docs", "--page-size", "0"]).is_err());
}

#[test]
fn test_paths_are_required() {
    assert!(parse(&[]).is_err());
}

#[test]
fn test_csv_with_and_without_value() {
    let bare = parse(&["docs", "--csv"]).expect("should parse");
    assert_eq!(bare.csv, Some(None));

    let named = parse(&["docs", "--csv", "out.csv"]).expect("should parse");
    assert_eq!(named.csv, Some(Some(PathBuf::from("out.csv"))));
}

#[test]
fn test_lines_conflicts_with_json() {
    assert!(parse(&["docs", "--lines", "--json"]).is_err());
}

#[tokio::test]
async fn test_parsed_args_drive_a_paged_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for i in 0..12 {
        fs::write(temp_dir.path().join(format!("{i:02}.txt")), format!("{i}"))
            .expect("Failed to write file");
    }
    let root = temp_dir.path().to_string_lossy().into_owned();
    let args = parse(&[root.as_str(), "--page-size", "5"]).expect("should parse");

    let mut session = hash_paths(&args, Arc::new(NoticeLog::new()))
        .await
        .expect("hashing should succeed");

    assert_eq!(session.page_state().total_pages, 3);
    assert!(session.go_to_page(3));
    let view = session.page_view();
    assert_eq!(view.info, "Showing 11 to 12 of 12 results");
    assert_eq!(view.rows[0].name, "10");
}
