use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn write_config(base: &Path, rules: &str) -> String {
    let pages = base.join("pages");
    fs::create_dir_all(&pages).expect("Failed to create pages directory");

    let config = format!(
        "root: '{}'\nextensions: [tsx]\nrules:\n{}",
        pages.to_string_lossy(),
        rules
    );
    let config_path = base.join("rewrite.yaml");
    fs::write(&config_path, config).expect("Failed to write config");
    config_path.to_string_lossy().to_string()
}

const CARD_RULE: &str = "  - pattern: 'bg-white rounded-xl'\n    replacement: 'bg-white dark:bg-[#1E1E1E] rounded-xl'\n";

fn frewrite(base: &Path, config: &str) -> Command {
    let mut command = Command::cargo_bin("frewrite").expect("Binary should build");
    let log_file = base.join("run.log");
    command.args(["-c", config, "-L", "-l"]).arg(&log_file);
    command
}

#[test]
fn test_cli_updates_files() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(temp_dir.path(), CARD_RULE);
    let page = temp_dir.path().join("pages").join("Card.tsx");
    fs::write(&page, "<div className=\"bg-white rounded-xl\" />").unwrap();
    fs::write(temp_dir.path().join("pages").join("Text.tsx"), "<p />").unwrap();

    frewrite(temp_dir.path(), &config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files to process"))
        .stdout(predicate::str::contains("Card.tsx"))
        .stdout(predicate::str::contains("No changes: Text.tsx"))
        .stdout(predicate::str::contains("Done! Updated 1 files."));

    assert_eq!(
        fs::read_to_string(&page).unwrap(),
        "<div className=\"bg-white dark:bg-[#1E1E1E] rounded-xl\" />"
    );
    assert!(temp_dir.path().join("run.log").exists());
}

#[test]
fn test_cli_dry_run() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(temp_dir.path(), CARD_RULE);
    let page = temp_dir.path().join("pages").join("Card.tsx");
    fs::write(&page, "<div className=\"bg-white rounded-xl\" />").unwrap();

    frewrite(temp_dir.path(), &config)
        .arg("--dry")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done! Would update 1 files (dry run)."));

    assert_eq!(
        fs::read_to_string(&page).unwrap(),
        "<div className=\"bg-white rounded-xl\" />"
    );
}

#[test]
fn test_cli_partial_failure_exit_code() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(temp_dir.path(), CARD_RULE);
    fs::write(temp_dir.path().join("pages").join("Card.tsx"), "bg-white rounded-xl").unwrap();
    fs::write(temp_dir.path().join("pages").join("Broken.tsx"), [0xffu8, 0xfe]).unwrap();

    frewrite(temp_dir.path(), &config)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Broken.tsx"))
        .stdout(predicate::str::contains("errored: 1"));
}

#[test]
fn test_cli_rejects_empty_pattern() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(temp_dir.path(), "  - pattern: ''\n    replacement: 'x'\n");
    let page = temp_dir.path().join("pages").join("Card.tsx");
    fs::write(&page, "bg-white rounded-xl").unwrap();

    frewrite(temp_dir.path(), &config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty"));

    assert_eq!(fs::read_to_string(&page).unwrap(), "bg-white rounded-xl");
}

#[test]
fn test_cli_writes_report() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(temp_dir.path(), CARD_RULE);
    fs::write(temp_dir.path().join("pages").join("Card.tsx"), "bg-white rounded-xl").unwrap();
    let report = temp_dir.path().join("report.yaml");

    frewrite(temp_dir.path(), &config)
        .arg("--report")
        .arg(&report)
        .args(["-j", "-q"])
        .assert()
        .success();

    let document = fs::read_to_string(&report).unwrap();
    assert!(document.contains("modified: 1"));
    assert!(document.contains("occurrences: 1"));
}

#[test]
fn test_cli_rejects_misspelled_replacement() {
    let temp_dir = tempdir().unwrap();
    let config = write_config(
        temp_dir.path(),
        "  - pattern: 'bg-white'\n    replacment: 'bg-white dark:bg-black'\n",
    );
    let page = temp_dir.path().join("pages").join("Card.tsx");
    fs::write(&page, "<div class=\"bg-white p-4\">").unwrap();

    frewrite(temp_dir.path(), &config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("replacment"));

    assert_eq!(fs::read_to_string(&page).unwrap(), "<div class=\"bg-white p-4\">");
}

#[test]
fn test_cli_found_count_leaves_out_excluded_files() {
    let temp_dir = tempdir().unwrap();
    let rules = format!("{CARD_RULE}exclude:\n  - AdminSettingsPage\n");
    let config = write_config(temp_dir.path(), &rules);
    let pages = temp_dir.path().join("pages");
    fs::write(pages.join("Card.tsx"), "bg-white rounded-xl").unwrap();
    fs::write(pages.join("AdminSettingsPage.tsx"), "bg-white rounded-xl").unwrap();

    frewrite(temp_dir.path(), &config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 files to process"))
        .stdout(predicate::str::contains("Skipped: AdminSettingsPage.tsx"))
        .stdout(predicate::str::contains("Examined: 2, modified: 1, unchanged: 0, skipped: 1"));

    assert_eq!(
        fs::read_to_string(pages.join("AdminSettingsPage.tsx")).unwrap(),
        "bg-white rounded-xl"
    );
}
