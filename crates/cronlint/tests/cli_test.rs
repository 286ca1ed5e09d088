use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn cronlint(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cronlint"))
        .args(args)
        .output()
        .expect("Failed to run cronlint binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn write_crontab(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("crontab");
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[cfg(unix)]
#[test]
fn test_valid_crontab_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_crontab(&dir, "* * * * * /bin/true\n");

    let output = cronlint(&[&path]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "The crontab file is valid.\n");

    let output = cronlint(&[&path, "--check-scripts"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "The crontab file is valid.\n");
}

#[test]
fn test_missing_script_with_check_scripts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_crontab(&dir, "@daily /nonexistent/script.sh\n");

    let output = cronlint(&[&path, "--check-scripts"]);
    assert_eq!(output.status.code(), Some(3));
    let report = stdout(&output);
    assert!(report.contains("Non-existing script or invalid command on line 1"));
    assert!(report.contains("(resolved path: /nonexistent/script.sh)"));
}

#[test]
fn test_relative_script_gets_recommendation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_crontab(&dir, "@daily ./nightly-d41c.sh\n");

    let output = cronlint(&[&path, "--check-scripts"]);
    assert_eq!(output.status.code(), Some(3));
    let report = stdout(&output);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0]
        .starts_with("Non-existing script or invalid command on line 1: ./nightly-d41c.sh"));
    assert!(lines[1].starts_with(
        "Recommendation: Use absolute file paths to avoid ambiguity. Replace './nightly-d41c.sh' with '"
    ));
    assert!(lines[1].ends_with("nightly-d41c.sh' on line 1."));
}

#[test]
fn test_existing_relative_script_still_fails_on_recommendation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("job.sh"), "#!/bin/sh\n").unwrap();
    let path = write_crontab(&dir, "# run nightly\n0 2 * * * job.sh\n");

    let output = cronlint(&[&path, "--check-scripts"]);
    assert_eq!(output.status.code(), Some(3));
    let report = stdout(&output);
    assert!(report.starts_with("Recommendation: Use absolute file paths"));
    assert!(report.contains("on line 2."));
    assert!(!report.contains("Non-existing"));
}

#[test]
fn test_out_of_range_minute_is_syntax_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_crontab(&dir, "99 * * * * echo hi\n");

    let output = cronlint(&[&path]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output), "Syntax error on line 1: 99 * * * * echo hi\n");
}

#[test]
fn test_nonexistent_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let missing = missing.display().to_string();

    let output = cronlint(&[&missing]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        stdout(&output),
        format!("Error: File '{}' not found.\n", missing)
    );
}

#[cfg(unix)]
#[test]
fn test_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = write_crontab(&dir, "* * * * * /bin/true\n");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores file modes
    if fs::read(Path::new(&path)).is_ok() {
        return;
    }

    let output = cronlint(&[&path]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        stdout(&output),
        format!("Error: Permission denied for file '{}'.\n", path)
    );
}

#[test]
fn test_help_exits_zero() {
    let output = cronlint(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let report = stdout(&output);
    assert!(report.contains("--check-scripts"));
    assert!(report.contains("CRONTAB_FILE_PATH"));
}

#[test]
fn test_help_ignores_other_arguments() {
    let output = cronlint(&["/no/such/file", "--check-scripts", "--unknown", "--help"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_path_is_usage_error() {
    let output = cronlint(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stdout(&output).starts_with("Error: Missing required <crontab_file_path> argument.")
    );
}

#[test]
fn test_report_lists_every_defect_in_line_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_crontab(
        &dir,
        "# header\n\
         SHELL=/bin/sh\n\
         \n\
         */5 * * * * /bin/true\n\
         0 12 * * * /nonexistent/backup.sh\n\
         0 0 0 * * /bin/true\n",
    );

    let output = cronlint(&[&path, "--check-scripts"]);
    assert_eq!(output.status.code(), Some(3));
    let report = stdout(&output);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Syntax error on line 2: SHELL=/bin/sh",
            "Syntax error on line 4: */5 * * * * /bin/true",
            "Non-existing script or invalid command on line 5: /nonexistent/backup.sh (resolved path: /nonexistent/backup.sh)",
            "Syntax error on line 6: 0 0 0 * * /bin/true",
        ]
    );
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_crontab(&dir, "@hourly /nonexistent/x\n");

    let output = cronlint(&["--debug", &path, "--check-scripts"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output).lines().count(), 1);
    assert!(!output.stderr.is_empty());
}
