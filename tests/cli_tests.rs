use assert_cmd::Command;
use iconwarden::registry::Registry;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn cmd() -> Command {
    Command::cargo_bin("iconwarden").unwrap()
}

fn touch_icon(root: &Path, category_key: &str, name: &str) {
    let registry = Registry::builtin();
    let category = registry
        .categories()
        .iter()
        .find(|c| c.key == category_key)
        .unwrap();
    let path = category.icon_file(root, name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, PNG_SIGNATURE).unwrap();
}

#[test]
fn test_no_args_prints_instructions_without_side_effects() {
    let dir = tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(contains("Quick start"))
        .stdout(contains("--validate"));

    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_help_flag_succeeds() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--checklist"));
}

#[test]
fn test_init_creates_directories() {
    let dir = tempdir().unwrap();

    cmd()
        .args(["--init", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Directory structure ready"));

    for category in Registry::builtin().categories() {
        assert!(category.target_dir(dir.path()).is_dir());
    }
}

#[test]
fn test_validate_reports_counts() {
    let registry = Registry::builtin();
    let dir = tempdir().unwrap();
    touch_icon(dir.path(), "components", "cpu");

    cmd()
        .args(["--validate", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Existing: 1"))
        .stdout(contains(format!("Missing: {}", registry.total_icons() - 1)))
        .stdout(contains(format!("Total: {}", registry.total_icons())))
        .stdout(contains("cpu.png"));
}

#[test]
fn test_all_produces_both_artifacts() {
    let dir = tempdir().unwrap();

    cmd()
        .args(["--all", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("All operations complete"));

    assert!(dir.path().join("ICONS_CHECKLIST.md").is_file());
    assert!(
        dir.path()
            .join("pcbuilder/images/icon-manifest.json")
            .is_file()
    );
}

#[test]
fn test_flags_combine_in_one_invocation() {
    let dir = tempdir().unwrap();

    cmd()
        .args(["--init", "--checklist", "--root"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("ICONS_CHECKLIST.md").is_file());
    assert!(
        !dir.path()
            .join("pcbuilder/images/icon-manifest.json")
            .exists()
    );
}

#[test]
fn test_init_failure_exits_nonzero() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("occupied");
    fs::write(&root, b"plain file").unwrap();

    cmd()
        .args(["--init", "--root"])
        .arg(&root)
        .assert()
        .failure()
        .stderr(contains("Failed to create asset directories"));
}
