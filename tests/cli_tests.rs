mod support;

use std::process::Command;

const DEFAULT_OUTPUT: &str =
    "../supabase/migrations/20260126000007_optimize_rls_policies_phase_8_complete.sql";

#[test]
fn cli_without_arguments_uses_fixed_paths() {
    let root = support::unique_temp_dir("rls_optimize_cli_defaults");
    let work = root.join("scripts");
    std::fs::create_dir_all(root.join("supabase/migrations")).expect("should create migrations dir");
    std::fs::create_dir_all(&work).expect("should create work dir");

    let fixture = std::fs::read_to_string(support::fixture_input_path("supabase_export"))
        .expect("fixture should be readable");
    std::fs::write(work.join("unoptimized_policies.json"), fixture)
        .expect("should write policy export");

    let output = Command::new(env!("CARGO_BIN_EXE_rls-optimize"))
        .current_dir(&work)
        .output()
        .expect("should run rls-optimize binary");

    assert_eq!(
        output.status.code(),
        Some(0),
        "expected success, got {:?}\nstderr:\n{}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 5 unoptimized policies"), "got:\n{stdout}");
    assert!(stdout.contains("Migration generated successfully!"), "got:\n{stdout}");
    assert!(stdout.contains(&format!("Output: {DEFAULT_OUTPUT}")), "got:\n{stdout}");
    assert!(stdout.contains("Tables: 3"), "got:\n{stdout}");
    assert!(stdout.contains("Policies: 5"), "got:\n{stdout}");

    let written = std::fs::read_to_string(work.join(DEFAULT_OUTPUT))
        .expect("migration should be written to the default path");
    assert!(written.contains("-- Total: 5 policies across 3 tables"));
}

#[test]
fn cli_accepts_explicit_paths_and_overwrites_output() {
    let temp = support::unique_temp_dir("rls_optimize_cli_paths");
    let output_path = temp.join("migration.sql");
    std::fs::write(&output_path, "stale").expect("should seed stale output");

    let status = Command::new(env!("CARGO_BIN_EXE_rls-optimize"))
        .arg("--input")
        .arg(support::fixture_input_path("supabase_export"))
        .arg("--output")
        .arg(&output_path)
        .status()
        .expect("should run rls-optimize binary");

    assert_eq!(status.code(), Some(0), "expected success, got {status:?}");

    let written = std::fs::read_to_string(&output_path).expect("migration should exist");
    assert!(!written.contains("stale"));
    assert!(written.starts_with("-- ===="));
    assert!(written.contains("-- TABLE: accounts (1 policies)"));
}

#[test]
fn cli_missing_input_fails_before_writing() {
    let temp = support::unique_temp_dir("rls_optimize_cli_missing");
    let output_path = temp.join("migration.sql");

    let output = Command::new(env!("CARGO_BIN_EXE_rls-optimize"))
        .arg("--input")
        .arg(temp.join("nope.json"))
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("should run rls-optimize binary");

    assert_eq!(
        output.status.code(),
        Some(2),
        "expected exit code 2, got {:?}",
        output.status
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "got:\n{stderr}");
    assert!(!output_path.exists(), "no migration should be written");
}

#[test]
fn cli_malformed_input_reports_parse_error() {
    let temp = support::unique_temp_dir("rls_optimize_cli_malformed");
    let input_path = temp.join("input.json");
    std::fs::write(&input_path, "[{\"tablename\": ").expect("should write bad json");

    let output = Command::new(env!("CARGO_BIN_EXE_rls-optimize"))
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(temp.join("migration.sql"))
        .output()
        .expect("should run rls-optimize binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid policy JSON"), "got:\n{stderr}");
}

#[test]
fn cli_unwritable_output_fails_without_confirmation() {
    let temp = support::unique_temp_dir("rls_optimize_cli_unwritable");

    let output = Command::new(env!("CARGO_BIN_EXE_rls-optimize"))
        .arg("--input")
        .arg(support::fixture_input_path("supabase_export"))
        .arg("--output")
        .arg(temp.join("missing_dir/migration.sql"))
        .output()
        .expect("should run rls-optimize binary");

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 5 unoptimized policies"), "got:\n{stdout}");
    assert!(
        !stdout.contains("Migration generated successfully!"),
        "confirmation must not be printed on write failure, got:\n{stdout}"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write"), "got:\n{stderr}");
}
