//! End-to-end tests driving the library run path the binary uses.

use std::fs;
use std::path::Path;

use clap::Parser;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use tempfile::tempdir;

use widebook_cli::cli::Cli;
use widebook_cli::run::run;
use widebook_model::OutputFormat;

fn write_fixture(path: &Path) {
    let mut book = XlsxWorkbook::new();

    let sheet = book.add_worksheet();
    sheet.set_name("001").unwrap();
    sheet.write_string(0, 0, "Nerve").unwrap();
    sheet.write_string(0, 1, "FA").unwrap();
    sheet.write_string(1, 0, "T1").unwrap();
    sheet.write_number(1, 1, 0.5).unwrap();
    sheet.write_string(2, 0, "C8").unwrap();
    sheet.write_number(2, 1, 0.7).unwrap();

    let sheet = book.add_worksheet();
    sheet.set_name("002").unwrap();
    sheet.write_string(0, 0, "Nerve").unwrap();
    sheet.write_string(0, 1, "FA").unwrap();
    sheet.write_string(1, 0, "T1").unwrap();
    sheet.write_number(1, 1, 0.6).unwrap();

    book.save(path).unwrap();
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("widebook").chain(args.iter().copied())).expect("parse")
}

#[test]
fn combines_two_sheets_into_csv() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("metrics.xlsx");
    let output = dir.path().join("combined.csv");
    write_fixture(&input);

    let args = cli(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    let result = run(&args).expect("run");

    assert_eq!(result.sheet_count, 2);
    assert_eq!(result.row_count, 2);
    assert_eq!(result.columns, vec!["C8_FA", "T1_FA"]);
    assert_eq!(result.format, OutputFormat::Csv);
    assert!(result.skipped_sheets.is_empty());

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents, ",C8_FA,T1_FA\n001,0.7,0.5\n002,,0.6\n");
}

#[test]
fn xlsx_suffix_selects_workbook_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("metrics.xlsx");
    let output = dir.path().join("combined.xlsx");
    write_fixture(&input);

    let args = cli(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    let result = run(&args).expect("run");

    assert_eq!(result.format, OutputFormat::Xlsx);
    assert!(output.exists());
}

#[test]
fn xlsx_flag_overrides_suffix() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("metrics.xlsx");
    let output = dir.path().join("combined.csv");
    write_fixture(&input);

    let args = cli(&[input.to_str().unwrap(), output.to_str().unwrap(), "--xlsx"]);
    let result = run(&args).expect("run");

    assert_eq!(result.format, OutputFormat::Xlsx);
}

#[test]
fn missing_input_fails_without_creating_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nope.xlsx");
    let output = dir.path().join("combined.csv");

    let args = cli(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    let error = run(&args).expect_err("missing input");

    assert!(error.to_string().contains("nope.xlsx"));
    assert!(!output.exists());
}

#[test]
fn keyless_sheets_are_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("mixed.xlsx");
    let output = dir.path().join("combined.csv");

    let mut book = XlsxWorkbook::new();
    let sheet = book.add_worksheet();
    sheet.set_name("001").unwrap();
    sheet.write_string(0, 0, "Nerve").unwrap();
    sheet.write_string(0, 1, "FA").unwrap();
    sheet.write_string(1, 0, "T1").unwrap();
    sheet.write_number(1, 1, 0.5).unwrap();
    let sheet = book.add_worksheet();
    sheet.set_name("notes").unwrap();
    sheet.write_string(0, 0, "Comment").unwrap();
    sheet.write_string(1, 0, "free text").unwrap();
    book.save(&input).unwrap();

    let args = cli(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    let result = run(&args).expect("run");

    assert_eq!(result.row_count, 1);
    assert_eq!(result.skipped_sheets, vec!["notes"]);

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents, ",T1_FA\n001,0.5\n");
}
