//! CLI tests

use std::process::{Command, Output};

use crate::common::{fixture_path, read_csv_rows, row, TestContext};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sql-column-csv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sql-column-csv")
}

fn run_cli_with_log_filter(args: &[&str], filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sql-column-csv"))
        .args(args)
        .env("RUST_LOG", filter)
        .output()
        .expect("Failed to run sql-column-csv")
}

fn path_arg(path: &std::path::Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_extract_command() {
    let ctx = TestContext::new();
    let output = ctx.output_path("orders.csv");
    let result = run_cli(&[
        "extract",
        &path_arg(&fixture_path("orders.sql")),
        &path_arg(&output),
        "--order",
        "name",
    ]);

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("7 columns, 4 with comments"), "stdout: {stdout}");

    let rows = read_csv_rows(&output);
    assert_eq!(rows[1], row("check_date", "DATE", ""));
}

#[test]
fn test_extract_missing_input_fails() {
    let ctx = TestContext::new();
    let output = ctx.output_path("out.csv");
    let result = run_cli(&["extract", &path_arg(&ctx.dir.join("nope.sql")), &path_arg(&output)]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Input file not found"));
    assert!(!output.exists());
}

#[test]
fn test_failures_reported_with_logging_disabled() {
    let ctx = TestContext::new();
    let missing = ctx.dir.join("nope.sql");
    let result = run_cli_with_log_filter(
        &[
            "batch",
            "--pair",
            &path_arg(&missing),
            &path_arg(&ctx.output_path("nope.csv")),
            "--pair",
            &path_arg(&fixture_path("no_table.sql")),
            &path_arg(&ctx.output_path("no_table.csv")),
        ],
        "off",
    );

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains(&format!("{}: Input file not found", missing.display())), "stderr: {stderr}");
    assert!(stderr.contains("No CREATE TABLE statement found"), "stderr: {stderr}");
}

#[test]
fn test_batch_command_continues_after_failure() {
    let ctx = TestContext::new();
    let out_dir = ctx.dir.join("csv");
    let first = ctx.output_path("pair.csv");
    let result = run_cli(&[
        "batch",
        "--pair",
        &path_arg(&fixture_path("no_table.sql")),
        &path_arg(&ctx.output_path("no_table.csv")),
        "--pair",
        &path_arg(&fixture_path("two_tables.sql")),
        &path_arg(&first),
        &path_arg(&fixture_path("customers_zh.sql")),
        "--out-dir",
        &path_arg(&out_dir),
        "--header",
        "chinese",
    ]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stdout).contains("Processed 3 files: 2 succeeded, 1 failed"));
    assert!(!ctx.output_path("no_table.csv").exists());
    assert_eq!(read_csv_rows(&first)[0], row("字段名", "类型", "注释"));
    assert_eq!(read_csv_rows(&out_dir.join("customers_zh.csv")).len(), 4);
}

#[test]
fn test_batch_without_inputs_is_an_error() {
    let result = run_cli(&["batch"]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("No input files"));
}
