//! End-to-end CLI tests for chatcorpus.
//!
//! These tests run the actual binary against temporary directories.
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates `raw/` with a couple of exports and an empty `parsed/` target.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    let raw = dir.path().join("raw");
    fs::create_dir(&raw).unwrap();

    let chat = "\
1/15/20, 10:30 - Alice: Hey!
1/15/20, 10:31 - Jane Doe: Hi Alice
1/15/20, 10:32 - Alice: see www.example.com
1/15/20, 18:00 - Alice: Dinner?
";
    fs::write(raw.join("alice.txt"), chat).unwrap();
    fs::write(raw.join("README.md"), "not a chat").unwrap();

    dir
}

fn chatcorpus_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatcorpus"));
    Command::from_std(cmd)
}

fn dataset(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("parsed/dataset.txt")).unwrap()
}

// ============================================================================
// Basic Functionality
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_builds_dataset() {
        let fixtures = setup_fixtures();

        chatcorpus_cmd()
            .current_dir(fixtures.path())
            .args([
                "--user-name",
                "Jane Doe",
                "--chats-path",
                "raw",
                "--output-path",
                "parsed",
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("Found 1 txt files"));

        assert_eq!(
            dataset(&fixtures),
            "[Human] Hey!\n[Bot] Hi Alice\n[Human] Dinner?"
        );
    }

    #[test]
    fn test_session_token() {
        let fixtures = setup_fixtures();

        chatcorpus_cmd()
            .current_dir(fixtures.path())
            .args([
                "--user-name",
                "Jane Doe",
                "--chats-path",
                "raw",
                "--output-path",
                "parsed",
                "--session-token",
                "<|endoftext|>",
            ])
            .assert()
            .success();

        assert_eq!(
            dataset(&fixtures),
            "<|endoftext|>\n[Human] Hey!\n[Bot] Hi Alice\n<|endoftext|>\n[Human] Dinner?"
        );
    }

    #[test]
    fn test_threshold_above_gap() {
        let fixtures = setup_fixtures();

        chatcorpus_cmd()
            .current_dir(fixtures.path())
            .args([
                "--user-name",
                "Jane Doe",
                "--chats-path",
                "raw",
                "--output-path",
                "parsed",
                "--session-token",
                "<s>",
                "--delta-h-threshold",
                "8",
            ])
            .assert()
            .success();

        assert_eq!(
            dataset(&fixtures),
            "<s>\n[Human] Hey!\n[Bot] Hi Alice\n[Human] Dinner?"
        );
    }

    #[test]
    fn test_snake_case_flags() {
        let fixtures = setup_fixtures();

        chatcorpus_cmd()
            .current_dir(fixtures.path())
            .args([
                "--user_name",
                "Alice",
                "--chats_path",
                "raw",
                "--output_path",
                "parsed",
            ])
            .assert()
            .success();

        assert_eq!(
            dataset(&fixtures),
            "[Bot] Hey!\n[Human] Hi Alice\n[Bot] Dinner?"
        );
    }

    #[test]
    fn test_verbose_logs_debug() {
        let fixtures = setup_fixtures();

        chatcorpus_cmd()
            .current_dir(fixtures.path())
            .env_remove("RUST_LOG")
            .args([
                "--user-name",
                "Jane Doe",
                "--chats-path",
                "raw",
                "--output-path",
                "parsed",
                "-v",
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("DEBUG"))
            .stderr(predicate::str::contains("processed chat"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_user_name() {
        chatcorpus_cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("--user-name"));
    }

    #[test]
    fn test_missing_chats_dir() {
        let dir = tempdir().unwrap();

        chatcorpus_cmd()
            .current_dir(dir.path())
            .args(["--user-name", "Bot", "--chats-path", "missing", "--output-path", "out"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error"))
            .stderr(predicate::str::contains("missing"));

        assert!(!dir.path().join("out/dataset.txt").exists());
    }

    #[test]
    fn test_invalid_threshold() {
        chatcorpus_cmd()
            .args(["--user-name", "Bot", "--delta-h-threshold", "four"])
            .assert()
            .failure();
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let fixtures = setup_fixtures();

        chatcorpus_cmd()
            .current_dir(fixtures.path())
            .args([
                "--user-name",
                "Bot",
                "--chats-path",
                "raw",
                "--output-path",
                "parsed",
                "--delta-h-threshold=-1",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("delta_h_threshold"));
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_chats_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("raw")).unwrap();

        chatcorpus_cmd()
            .current_dir(dir.path())
            .args(["--user-name", "Bot", "--chats-path", "raw", "--output-path", "parsed"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Found 0 txt files"));

        assert_eq!(
            fs::read_to_string(dir.path().join("parsed/dataset.txt")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_help() {
        chatcorpus_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--session-token"))
            .stdout(predicate::str::contains("--delta-h-threshold"));
    }

    #[test]
    fn test_version() {
        chatcorpus_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
