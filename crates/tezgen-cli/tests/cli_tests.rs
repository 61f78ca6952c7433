//! End-to-end tests for the `tezgen` binary.
#![allow(deprecated)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LEAVES: [&str; 6] = [
    "Runtime/Source",
    "Runtime/Include/Public/Tez",
    "Runtime/Include/Private/Tez",
    "Editor/Source",
    "Editor/Include/Public/Tez",
    "Editor/Include/Private/Tez",
];

/// `tezgen` running in `dir`, isolated from the user's config and env.
fn tezgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tezgen").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .env_remove("TEZGEN_OUTPUT__FORMAT")
        .env_remove("TEZGEN_OUTPUT__NO_COLOR");
    cmd
}

fn assert_layout(root: &Path, name: &str) {
    assert_layout_named(root, name);
}

/// Like [`assert_layout`], with the include folders named `leaf_name`.
fn assert_layout_named(root: &Path, leaf_name: &str) {
    for leaf in LEAVES {
        let dir = if leaf.ends_with("Tez") {
            root.join(leaf).join(leaf_name)
        } else {
            root.join(leaf)
        };
        assert!(dir.is_dir(), "missing {}", dir.display());
    }
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    tezgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tez engine target"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    tezgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_create_from_argument() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .arg("Foo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully created target structure for: Foo",
        ))
        .stdout(predicate::str::contains("Location: "))
        .stdout(predicate::str::contains("Foo"));

    let root = temp.path().join("Foo");
    assert_layout(&root, "Foo");

    let cmake = fs::read_to_string(root.join("CMakeLists.txt")).unwrap();
    assert!(cmake.contains("project(Foo LANGUAGES CXX)"));
    assert!(cmake.contains("# add_subdirectory(Runtime)"));
    assert!(cmake.contains("# add_subdirectory(Editor)"));
}

#[test]
fn test_create_from_prompt() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .write_stdin("Renderer\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the name of the new target: "))
        .stdout(predicate::str::contains(
            "Successfully created target structure for: Renderer",
        ));

    assert_layout(&temp.path().join("Renderer"), "Renderer");
}

#[test]
fn test_rerun_is_idempotent() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path()).arg("Bar").assert().success();
    let keep = temp.path().join("Bar/Editor/Source/Widget.cpp");
    fs::write(&keep, "// user code").unwrap();

    tezgen(temp.path()).arg("Bar").assert().success();

    assert_layout(&temp.path().join("Bar"), "Bar");
    assert_eq!(fs::read_to_string(&keep).unwrap(), "// user code");
}

#[test]
fn test_existing_build_file_is_overwritten() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Baz");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("CMakeLists.txt"), "# hand written").unwrap();

    tezgen(temp.path()).arg("Baz").assert().success();

    let cmake = fs::read_to_string(root.join("CMakeLists.txt")).unwrap();
    assert!(!cmake.contains("hand written"));
    assert!(cmake.contains("project(Baz LANGUAGES CXX)"));
}

#[test]
fn test_empty_name_is_reported_without_failure() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .arg("")
        .assert()
        .success()
        .stdout("Error: Target name cannot be empty.\n");

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name() != ".config")
        .collect();
    assert!(entries.is_empty());
}

#[test]
fn test_empty_prompt_answer() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Target name cannot be empty.",
        ))
        .stdout(predicate::str::contains("\u{2717}").not());
}

#[test]
fn test_name_with_spaces_is_verbatim() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path()).arg("My Target").assert().success();

    let root = temp.path().join("My Target");
    assert_layout(&root, "My Target");
    let cmake = fs::read_to_string(root.join("CMakeLists.txt")).unwrap();
    assert!(cmake.contains("project(My Target LANGUAGES CXX)"));
}

#[test]
fn test_whitespace_only_name_is_used_with_a_warning() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .arg("   ")
        .assert()
        .success()
        .stderr(predicate::str::contains("\u{26a0}"))
        .stderr(predicate::str::contains("only of whitespace"));

    let root = temp.path().join("   ");
    assert!(root.is_dir());
    assert_layout(&root, "   ");
    assert!(root.join("CMakeLists.txt").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .args(["Audio", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("CMakeLists.txt"));

    assert!(!temp.path().join("Audio").exists());
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();

    let assert = tezgen(temp.path())
        .args(["--output-format", "json", "Foo"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["target"], "Foo");
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["directories"].as_array().unwrap().len(), 6);
    assert!(
        report["location"]
            .as_str()
            .unwrap()
            .ends_with("Foo")
    );
}

#[test]
fn test_json_output_from_environment() {
    let temp = TempDir::new().unwrap();

    let assert = tezgen(temp.path())
        .env("TEZGEN_OUTPUT__FORMAT", "json")
        .args(["Foo", "--dry-run"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["dry_run"], true);
}

#[test]
fn test_file_in_the_way_is_a_conflict() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Foo"), "not a directory").unwrap();

    tezgen(temp.path())
        .arg("Foo")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Path conflict"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[cfg(unix)]
#[test]
fn test_absolute_name_is_scaffolded_there() {
    let temp = TempDir::new().unwrap();
    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    let root = temp.path().join("Abs");

    tezgen(&work)
        .arg(&root)
        .assert()
        .success()
        .stderr(predicate::str::contains("absolute path"))
        .stderr(predicate::str::contains("nested").not());

    assert_layout_named(&root, "Abs");
    let cmake = fs::read_to_string(root.join("CMakeLists.txt")).unwrap();
    assert!(cmake.contains(&format!("project({} LANGUAGES CXX)", root.display())));
    assert!(!work.join("Abs").exists());
}

#[test]
fn test_bare_words_are_target_names() {
    let temp = TempDir::new().unwrap();

    for word in ["config", "completions", "help"] {
        tezgen(temp.path())
            .arg(word)
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "Successfully created target structure for: {word}"
            )));
        assert_layout(&temp.path().join(word), word);
        assert!(temp.path().join(word).join("CMakeLists.txt").is_file());
    }
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tezgen"));
}

#[test]
fn test_config_get_reads_environment() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .env("TEZGEN_OUTPUT__FORMAT", "plain")
        .args(["--config-get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = plain"));
}

#[test]
fn test_config_get_unknown_key() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .args(["--config-get", "nope"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_explicit_config_file_must_exist() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .args(["--config", "missing.toml", "Foo"])
        .assert()
        .failure()
        .code(4);

    assert!(!temp.path().join("Foo").exists());
}

#[test]
fn test_config_file_selects_format() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("tezgen.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    let assert = tezgen(temp.path())
        .args(["--config", "tezgen.toml", "Foo", "--dry-run"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["target"], "Foo");
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_init_writes_defaults() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path()).arg("--config-init").assert().success();
    let path = temp.path().join(".config/tezgen/config.toml");
    assert!(fs::read_to_string(&path).unwrap().contains("[output]"));

    fs::write(&path, "# mine").unwrap();
    tezgen(temp.path()).arg("--config-init").assert().success();
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

    tezgen(temp.path())
        .args(["--config-init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[output]"));
}

#[test]
fn test_tool_flag_with_name_is_usage_error() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .args(["Foo", "--config-list"])
        .assert()
        .failure()
        .code(2);
    assert!(!temp.path().join("Foo").exists());
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let temp = TempDir::new().unwrap();

    tezgen(temp.path())
        .args(["Foo", "--lang", "rust"])
        .assert()
        .failure()
        .code(2);
}
