//! CLI integration tests for ahaha
//!
//! Each test runs the real binary against the compiled-in catalog with an
//! isolated config file.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command for the ahaha binary with an empty config and a clean environment
fn ahaha_cmd(dir: &TempDir) -> assert_cmd::Command {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("ahaha"));
    cmd.env("AHAHA_CONFIG", &config)
        .env_remove("AHAHA_PATH")
        .env_remove("AHAHA_ADMIN")
        .env_remove("AHAHA_TOKEN");
    cmd
}

fn json_stdout(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Routing
// =============================================================================

#[test]
fn test_route_static_page() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["route", "/portfolio/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path:     /portfolio"))
        .stdout(predicate::str::contains("Portfolio"));
}

#[test]
fn test_route_unknown_path_redirects_home() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "route", "/nowhere"]));
    assert_eq!(json["path"], "/");
    assert_eq!(json["page"]["page"], "home");
    assert_eq!(json["redirects"][0], "/nowhere");
}

#[test]
fn test_route_admin_depends_on_flag() {
    let dir = TempDir::new().unwrap();

    let visitor = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "route", "/admin"]));
    assert_eq!(visitor["path"], "/");

    let admin = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "--admin", "route", "/admin"]));
    assert_eq!(admin["page"]["page"], "admin");
    assert!(admin["redirects"].as_array().unwrap().is_empty());
}

#[test]
fn test_route_reads_path_from_env() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(
        ahaha_cmd(&dir)
            .env("AHAHA_PATH", "/toy-space/prompt-hub")
            .args(["-f", "json", "route"]),
    );
    assert_eq!(json["page"]["page"], "toy_detail");
    assert_eq!(json["page"]["slug"], "prompt-hub");
}

#[test]
fn test_nav_marks_active_section() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "nav", "/toy-space/prompt-hub"]));
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);

    let active: Vec<_> = items
        .iter()
        .filter(|i| i["active"] == true)
        .map(|i| i["to"].as_str().unwrap())
        .collect();
    assert_eq!(active, vec!["/toy-space"]);

    let home = items.iter().find(|i| i["to"] == "/").unwrap();
    assert_eq!(home["class"], "");
}

#[test]
fn test_nav_shows_admin_link_for_admins() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["--admin", "nav", "/admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* Admin"));
}

// =============================================================================
// Toy Space
// =============================================================================

#[test]
fn test_toys_list_default_is_latest_first() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "toys", "list"]));
    let ids: Vec<_> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["toy-1", "toy-2", "toy-3"]);
    assert_eq!(json["criteria"]["sort_order"], "latest");
}

#[test]
fn test_toys_list_popular_sorts_by_title() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "toys", "list", "--sort", "popular"]));
    let ids: Vec<_> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["toy-3", "toy-2", "toy-1"]);
}

#[test]
fn test_toys_list_tags_are_anded() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args([
        "-f", "json", "toys", "list", "--tag", "react", "--tag", "tooling",
    ]));
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["slug"], "prompt-hub");
}

#[test]
fn test_toys_list_category_and_query() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["toys", "list", "--category", "reference"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust-go-gateway"))
        .stdout(predicate::str::contains("1 toy(s)"));

    ahaha_cmd(&dir)
        .args(["toys", "list", "--query", "  GATEWAY  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust-go-gateway"));

    ahaha_cmd(&dir)
        .args(["toys", "list", "--difficulty", "beginner", "--category", "tutorial"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No toys match"));
}

#[test]
fn test_toys_list_rejects_bad_values() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["toys", "list", "--category", "poetry"])
        .assert()
        .failure();

    ahaha_cmd(&dir)
        .args(["toys", "list", "--tag", "rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tag: rust"));
}

#[test]
fn test_toys_show_with_related() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "toys", "show", "hue-visualizer"]));
    assert_eq!(json["entry"]["id"], "toy-1");
    assert_eq!(json["tag_labels"][1], "WebGL");
    assert_eq!(json["related"].as_array().unwrap().len(), 2);
}

#[test]
fn test_toys_show_related_limit_from_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[toy_space]\nrelated_limit = 1\n").unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "toys", "show", "hue-visualizer"]));
    assert_eq!(json["related"].as_array().unwrap().len(), 1);
}

#[test]
fn test_toys_show_unknown_slug_falls_back_to_listing() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["toys", "show", "missing"])
        .assert()
        .success()
        .stderr(predicate::str::contains("redirected to /toy-space"))
        .stdout(predicate::str::contains("3 toy(s)"));
}

#[test]
fn test_toys_tags_counts() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "toys", "tags"]));
    let tags = json.as_array().unwrap();
    assert_eq!(tags.len(), 6);
    assert_eq!(tags[0]["id"], "react");
    assert_eq!(tags[0]["count"], 2);
}

// =============================================================================
// Admin
// =============================================================================

#[test]
fn test_admin_requires_flag() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["admin", "range"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("require --admin"));
}

#[test]
fn test_admin_range_builds_request() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args([
        "-f", "json", "--admin", "admin", "range", "3", "7", "--token", "abc",
    ]));
    assert_eq!(json["token"], "abc");
    assert_eq!(json["data-range"], serde_json::json!([3, 7]));
}

#[test]
fn test_admin_range_uses_config_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[admin]\ndefault_range = [10, 12]\n").unwrap();

    ahaha_cmd(&dir)
        .args(["--admin", "admin", "range"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Range 10..=12 (3 records)"));
}

#[test]
fn test_admin_range_rejects_inverted_range() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["--admin", "admin", "range", "5", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "[data-range] Invalid data range (code: invalid_range)",
        ));
}

#[test]
fn test_admin_range_negative_start_gets_notice() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["--admin", "admin", "range", "-1", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("(code: invalid_range)"));
}

#[test]
fn test_admin_range_full_width() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["--admin", "admin", "range", "0", "4294967295"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(4294967296 records)"));
}

#[test]
fn test_nav_lists_external_link() {
    let dir = TempDir::new().unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args(["-f", "json", "nav", "/"]));
    let github = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["label"] == "GitHub")
        .unwrap()
        .clone();
    assert_eq!(github["to"], "https://github.com/aruzen");
    assert_eq!(github["active"], false);
}

#[test]
fn test_admin_inspect_records_and_errors() {
    let dir = TempDir::new().unwrap();
    let ok = dir.path().join("ok.json");
    fs::write(
        &ok,
        r#"{"records":[{"name":"mika","choice":{"sea":"blue","sun":"yellow"}}]}"#,
    )
    .unwrap();

    ahaha_cmd(&dir)
        .args(["--admin", "admin", "inspect"])
        .arg(&ok)
        .assert()
        .success()
        .stdout(predicate::str::contains("mika"))
        .stdout(predicate::str::contains("sea=blue, sun=yellow"));

    let err = dir.path().join("err.json");
    fs::write(&err, r#"{"error":"unauthorized","message":"session expired"}"#).unwrap();

    ahaha_cmd(&dir)
        .args(["--admin", "admin", "inspect"])
        .arg(&err)
        .assert()
        .failure()
        .stderr(predicate::str::contains("session expired (code: unauthorized)"));
}

// =============================================================================
// Config and output
// =============================================================================

#[test]
fn test_config_default_format_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "default_format = \"json\"\n").unwrap();

    let json = json_stdout(ahaha_cmd(&dir).args(["toys", "tags"]));
    assert!(json.is_array());
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[browser]\ntick_rate_ms = 0\n").unwrap();

    ahaha_cmd(&dir)
        .args(["toys", "tags"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_rate_ms"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();

    ahaha_cmd(&dir)
        .args(["-v", "-f", "json", "route", "/x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:route]"));
}
