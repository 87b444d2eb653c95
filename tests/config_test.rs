use std::fs;
use std::path::{Path, PathBuf};

use file_rewrite::config::{load_config, load_config_for_testing};
use tempfile::tempdir;

#[test]
fn test_load_base_config() {
    let config = load_config_for_testing(PathBuf::from("tests/configs/base_config.yaml")).unwrap();

    // A relative root is resolved against the config file's directory
    assert_eq!(config.root, Path::new("tests/configs").join("pages"));
    assert_eq!(config.extensions, vec!["tsx".to_string()]);
    assert!(config.recursive);
    assert!(!config.parallel);
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[0].title(), Some("Card container"));
    assert_eq!(config.rules[0].pattern(), "bg-white rounded-[20px]");
}

#[test]
fn test_config_inheritance() {
    let config = load_config_for_testing(PathBuf::from("tests/configs/child_config.yaml")).unwrap();

    // The root comes from the parent
    assert_eq!(config.root, Path::new("tests/configs").join("pages"));

    // Child rules run first, then the inherited ones
    let titles: Vec<&str> = config.rules.iter().filter_map(|rule| rule.title()).collect();
    assert_eq!(titles, vec!["Full card", "Card container", "Rounded card"]);

    // Filters are combined and extensions lose their leading dot
    assert_eq!(config.extensions, vec!["jsx".to_string(), "tsx".to_string()]);
    assert_eq!(config.exclude, vec!["AdminSettingsPage".to_string()]);
    assert_eq!(config.exclude_globs, vec!["**/generated/**".to_string()]);
    assert!(config.parent.is_none());

    let policy = config.exclusion_policy().unwrap();
    assert!(policy.is_excluded(Path::new("pages/admin/AdminSettingsPage.tsx")));
    assert!(policy.is_excluded(Path::new("pages/generated/Types.tsx")));
    assert!(!policy.is_excluded(Path::new("pages/admin/AdminUsersPage.tsx")));
}

#[test]
fn test_empty_pattern_fails_loading() {
    let result = load_config_for_testing(PathBuf::from("tests/configs/empty_pattern_config.yaml"));

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("empty pattern"), "unexpected error: {message}");
}

#[test]
fn test_config_without_rules_is_invalid() {
    let result = load_config_for_testing(PathBuf::from("tests/configs/no_rules_config.yaml"));

    let message = format!("{}", result.unwrap_err());
    assert!(message.contains("No rules specified"));
}

#[test]
fn test_missing_parent_is_reported() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("rewrite.yaml");
    fs::write(
        &config_path,
        "parent: missing.yaml\nroot: src\nrules:\n  - pattern: a\n    replacement: b\n",
    )
    .unwrap();

    let message = format!("{}", load_config_for_testing(config_path).unwrap_err());
    assert!(message.contains("does not exist"));
}

#[test]
fn test_root_must_exist_when_checking_paths() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("rewrite.yaml");
    fs::write(
        &config_path,
        "root: not_there\nrules:\n  - pattern: a\n    replacement: b\n",
    )
    .unwrap();

    let message = format!("{}", load_config(config_path.clone()).unwrap_err());
    assert!(message.contains("Root directory does not exist"));

    fs::create_dir(temp_dir.path().join("not_there")).unwrap();
    let config = load_config(config_path).unwrap();
    assert_eq!(config.root, temp_dir.path().join("not_there"));
}

#[test]
fn test_root_as_segments_and_options() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("rewrite.yaml");
    fs::write(
        &config_path,
        r#"
root: ["src", "presentation", "pages"]
recursive: false
include_hidden: true
parallel: true
dry_run: true
verify_idempotence: true
rules:
  - pattern: "text-charcoal font-bold"
    replacement: "text-charcoal dark:text-white font-bold"
"#,
    )
    .unwrap();

    let config = load_config_for_testing(config_path).unwrap();
    assert_eq!(
        config.root,
        temp_dir.path().join("src").join("presentation").join("pages")
    );

    let scan_options = config.scan_options();
    assert!(!scan_options.recursive);
    assert!(scan_options.include_hidden);
    assert!(config.parallel);
    assert!(config.dry_run);
    assert!(config.verify_idempotence);
    assert_eq!(config.rules[0].replacement(), "text-charcoal dark:text-white font-bold");
    assert_eq!(config.rule_set().len(), 1);
}

#[test]
fn test_misspelled_replacement_fails_loading() {
    let result =
        load_config_for_testing(PathBuf::from("tests/configs/misspelled_replacement_config.yaml"));

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("replacment"), "unexpected error: {message}");
}

#[test]
fn test_missing_replacement_fails_loading() {
    let result =
        load_config_for_testing(PathBuf::from("tests/configs/missing_replacement_config.yaml"));

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("replacement"), "unexpected error: {message}");
}

#[test]
fn test_unknown_config_key_fails_loading() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("rewrite.yaml");
    fs::write(
        &config_path,
        "root: src\nexlude: [AdminSettingsPage]\nrules:\n  - pattern: a\n    replacement: b\n",
    )
    .unwrap();

    let message = format!("{:#}", load_config_for_testing(config_path).unwrap_err());
    assert!(message.contains("exlude"), "unexpected error: {message}");
}

#[test]
fn test_circular_parents_are_rejected() {
    let result = load_config_for_testing(PathBuf::from("tests/configs/cycle_a_config.yaml"));

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Circular parent configuration"), "unexpected error: {message}");
    assert!(message.contains("cycle_a_config.yaml"));
}

#[test]
fn test_config_cannot_be_its_own_parent() {
    let result = load_config_for_testing(PathBuf::from("tests/configs/self_parent_config.yaml"));

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Circular parent configuration"), "unexpected error: {message}");
}

#[test]
fn test_shared_ancestor_is_not_a_cycle() {
    let temp_dir = tempdir().unwrap();
    let base = temp_dir.path().join("base.yaml");
    let middle = temp_dir.path().join("middle.yaml");
    let leaf = temp_dir.path().join("leaf.yaml");
    fs::write(&base, "root: src\nrules:\n  - pattern: a\n    replacement: b\n").unwrap();
    fs::write(&middle, "parent: base.yaml\nrules:\n  - pattern: c\n    replacement: d\n").unwrap();
    fs::write(&leaf, "parent: middle.yaml\nrules:\n  - pattern: e\n    replacement: f\n").unwrap();

    let config = load_config_for_testing(leaf).unwrap();
    let patterns: Vec<&str> = config.rules.iter().map(|rule| rule.pattern()).collect();
    assert_eq!(patterns, vec!["e", "c", "a"]);
}

#[test]
fn test_sample_config_is_ordered_and_idempotent() {
    let config = load_config_for_testing(PathBuf::from("rewrite.sample.yaml")).unwrap();
    let rule_set = config.rule_set();

    assert_eq!(rule_set.len(), 32);
    assert!(rule_set.shadowed_rules().is_empty());
    assert!(rule_set.self_reintroducing_rules().is_empty());
    assert!(config.verify_idempotence);

    let page = r#"<div className="min-h-screen bg-[#F8F9FA]">
  <div className="bg-white rounded-[20px] shadow-card border border-slate-100 p-6">
    <h2 className="text-charcoal font-bold">Students</h2>
    <p className="text-slate-500 text-sm">42 enrolled</p>
  </div>
  <div className="bg-white rounded-[20px] shadow-xl">
    <label className="block text-xs font-bold text-slate-600 mb-2">Name</label>
  </div>
</div>"#;

    let once = rule_set.apply(page);
    assert!(once.contains(
        "bg-white dark:bg-[#1E1E1E] rounded-[20px] shadow-card border border-slate-100 dark:border-white/10 p-6"
    ));
    assert!(once.contains("bg-white dark:bg-[#1E1E1E] rounded-[20px] shadow-xl"));
    assert!(once.contains("text-slate-500 dark:text-slate-400 text-sm"));
    assert!(!once.contains("dark:text-slate-400 dark:text-slate-500"));
    assert!(rule_set.is_idempotent_on(page));
}
