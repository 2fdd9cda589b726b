//! End-to-end CLI tests for chatlens.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: summary output for each header layout
//! - **Output formats**: CSV, JSON, JSONL generation
//! - **Filters**: Date and user filtering
//! - **Flags**: report, stop words, optional columns, verbosity
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with export fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    // Android, US locale
    let android = "\
12/30/23, 9:15 PM - Messages and calls are end-to-end encrypted.
12/30/23, 9:16 PM - Alice: Hey! 😀
12/30/23, 9:17 PM - Bob: <Media omitted>
12/31/23, 11:59 PM - Alice: Happy new year 🎉🎉
see you at www.example.com
1/1/24, 12:05 AM - Bob: Same to you!";
    fs::write(dir.path().join("android.txt"), android).unwrap();

    // iOS, bracketed headers
    let ios = "\
[01.02.2023, 14:05:30] Bob: Bonjour
[01.02.2023, 14:06:00] Alice: Salut
[15.02.2023, 08:00:00] Bob: image omitted";
    fs::write(dir.path().join("ios.txt"), ios).unwrap();

    // No header lines at all
    fs::write(dir.path().join("empty.txt"), "just some text\nand more\n").unwrap();

    // ISO-8859-1 encoded
    let mut latin1 = b"1/1/23, 10:00 - Jos".to_vec();
    latin1.push(0xE9);
    latin1.extend_from_slice(b": Ol");
    latin1.push(0xE1);
    fs::write(dir.path().join("latin1.txt"), latin1).unwrap();

    fs::write(dir.path().join("stop.txt"), "# stop words\nyou\nhey\n").unwrap();

    dir
}

fn chatlens_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlens"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn input_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_summary_only() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "android.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 4 messages"))
            .stdout(predicate::str::contains("Messages:  4"))
            .stdout(predicate::str::contains("Users:     2"))
            .stdout(predicate::str::contains("2023-12-30 → 2024-01-01"))
            .stdout(predicate::str::contains("Done"));
    }

    #[test]
    fn test_bracketed_export() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "ios.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:  3"))
            .stdout(predicate::str::contains("Media:     1"));
    }

    #[test]
    fn test_top_lists() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "android.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Top users"))
            .stdout(predicate::str::contains("you (2)"))
            .stdout(predicate::str::contains("🎉 (2)"));
    }

    #[test]
    fn test_latin1_export() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatlens_cmd()
            .args([
                input_path(&fixtures, "latin1.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("José"));
        assert!(content.contains("Olá"));
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_csv_output() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatlens_cmd()
            .args([
                input_path(&fixtures, "android.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("4 rows written"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("user;date;time;datetime;hour"));
        assert!(content.contains("Alice;2023-12-30;21:16"));
        assert!(!content.contains("end-to-end encrypted"));

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(content.as_bytes());
        assert_eq!(reader.records().count(), 4);
    }

    #[test]
    fn test_json_output_from_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatlens_cmd()
            .args([
                input_path(&fixtures, "android.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3]["time"], "00:05");
        assert_eq!(rows[3]["day_of_week"], "Monday");
        assert_eq!(rows[2]["url_count"], 1);
    }

    #[test]
    fn test_jsonl_output_from_flag() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.txt");

        chatlens_cmd()
            .args([
                input_path(&fixtures, "ios.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
                "-f",
                "jsonl",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let row: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(row["user"].is_string());
        }
    }

    #[test]
    fn test_optional_columns() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatlens_cmd()
            .args([
                input_path(&fixtures, "android.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
                "--raw",
                "--emojis",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let header = content.lines().next().unwrap();
        assert!(header.ends_with(";message;raw_date;raw_time;emojis"));
        assert!(content.contains("12/31/23;11:59 PM;🎉🎉"));
    }

    #[test]
    fn test_report_output() {
        let fixtures = setup_fixtures();
        let report = output_path(&fixtures, "report.json");

        chatlens_cmd()
            .args([
                input_path(&fixtures, "android.txt").as_str(),
                "--report",
                report.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Report saved"));

        let content = fs::read_to_string(&report).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["basic"]["total_messages"], 4);
        assert_eq!(json["basic"]["chat_duration_days"], 3);
        assert_eq!(json["active_users"][0]["user"], "Alice");
        assert_eq!(json["trend"].as_array().unwrap().len(), 3);
        assert_eq!(json["top_emojis"][0]["emoji"], "🎉");
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_user_filter() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.jsonl");

        chatlens_cmd()
            .args([
                input_path(&fixtures, "android.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
                "--user",
                "Bob",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 messages after filtering"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("Alice"));
    }

    #[test]
    fn test_date_filter() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.jsonl");

        chatlens_cmd()
            .args([
                input_path(&fixtures, "android.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
                "--after",
                "2023-12-31",
                "--before",
                "2023-12-31",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 messages after filtering"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Happy new year"));
    }

    #[test]
    fn test_stop_words_and_top() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                input_path(&fixtures, "android.txt").as_str(),
                "--stop-words",
                input_path(&fixtures, "stop.txt").as_str(),
                "--top",
                "1",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("media (1)"))
            .stdout(predicate::str::contains("you (2)").not());
    }
}

// ============================================================================
// Flags
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_sequential() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([input_path(&fixtures, "android.txt").as_str(), "--sequential"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:  4"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([input_path(&fixtures, "android.txt").as_str(), "-v"])
            .assert()
            .success()
            .stderr(predicate::str::contains("inferred date layout"))
            .stdout(predicate::str::contains("inferred date layout").not());
    }

    #[test]
    fn test_quiet_by_default() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .env_remove("RUST_LOG")
            .arg(input_path(&fixtures, "android.txt"))
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_help() {
        chatlens_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("chatlens"))
            .stdout(predicate::str::contains("--stop-words"));
    }

    #[test]
    fn test_version() {
        chatlens_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_input() {
        chatlens_cmd()
            .arg("/nonexistent/chat.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_no_messages() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "empty.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("no messages found"));
    }

    #[test]
    fn test_invalid_date() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([input_path(&fixtures, "android.txt").as_str(), "--after", "31.12.2023"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"))
            .stderr(predicate::str::contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_invalid_format() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([input_path(&fixtures, "android.txt").as_str(), "-f", "xml"])
            .assert()
            .failure();
    }

    #[test]
    fn test_missing_stop_words_file() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                input_path(&fixtures, "android.txt").as_str(),
                "--stop-words",
                "/nonexistent/stop.txt",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_missing_argument() {
        chatlens_cmd().assert().failure();
    }
}
