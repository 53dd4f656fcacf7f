use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A command isolated from the user's config file and environment.
fn taskquery(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("taskquery");
    cmd.env("TASKQUERY_CONFIG", home.path().join("config.yaml"))
        .env_remove("TASKQUERY_LOCALE")
        .env_remove("TASKQUERY_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn parse_prints_payload_json() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(taskquery(&home).args([
        "parse", "-o", "json", "buy", "milk", "tomorrow", "at", "5pm", "@errand", "#Home", "p1",
    ]));

    assert_eq!(value["content"], "buy milk");
    assert_eq!(value["due_string"], "tomorrow at 5pm");
    assert_eq!(value["project"], "Home");
    assert_eq!(value["labels"][0], "errand");
    assert_eq!(value["priority"], 4);
    assert_eq!(value["label_ids"], false);
}

#[test]
fn parse_omits_empty_fields() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(taskquery(&home).args(["parse", "--output", "json", "just words"]));

    assert_eq!(value["content"], "just words");
    assert_eq!(value["priority"], 1);
    assert!(value.get("due_string").is_none());
    assert!(value.get("project").is_none());
    assert!(value.get("labels").is_none());
}

#[test]
fn parse_with_locale_flag() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(taskquery(&home).args([
        "parse",
        "-o",
        "json",
        "-l",
        "de",
        "arzt anrufen nächsten montag um 10 uhr",
    ]));

    assert_eq!(value["content"], "arzt anrufen");
    assert_eq!(value["due_string"], "nächsten montag um 10 uhr");
}

#[test]
fn parse_with_locale_from_env() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(
        taskquery(&home)
            .env("TASKQUERY_LOCALE", "nl")
            .args(["parse", "-o", "json", "bellen morgen om 17:00"]),
    );

    assert_eq!(value["due_string"], "morgen om 17:00");
}

#[test]
fn parse_candidates_lists_first_parse_first() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(taskquery(&home).args([
        "parse",
        "-o",
        "json",
        "--candidates",
        "--max-candidates",
        "4",
        "call mom tomorrow",
    ]));

    assert_eq!(value["payload"]["due_string"], "tomorrow");
    let candidates = value["candidates"].as_array().unwrap();
    assert!(!candidates.is_empty() && candidates.len() <= 4);
    assert_eq!(candidates[0][1]["kind"], "date");
}

#[test]
fn parse_pretty_output() {
    let home = TempDir::new().unwrap();
    taskquery(&home)
        .args(["parse", "review PR friday @work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("review PR"))
        .stdout(predicate::str::contains("Due: friday"))
        .stdout(predicate::str::contains("@work"));
}

#[test]
fn parse_unsupported_locale_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    taskquery(&home)
        .args(["parse", "-l", "tlh", "qapla"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported locale 'tlh'"));
}

#[test]
fn parse_requires_query() {
    let home = TempDir::new().unwrap();
    taskquery(&home).arg("parse").assert().failure();
}

#[test]
fn config_file_sets_defaults() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "locale: fr\noutput: json\n").unwrap();

    let value = stdout_json(taskquery(&home).args(["parse", "appeler", "demain"]));
    assert_eq!(value["content"], "appeler");
    assert_eq!(value["due_string"], "demain");
}

#[test]
fn broken_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "locale: [oops\n").unwrap();

    taskquery(&home)
        .args(["parse", "anything"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config.yaml"));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();

    taskquery(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));
    assert!(home.path().join("config.yaml").exists());

    taskquery(&home)
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    let value = stdout_json(taskquery(&home).args(["config", "show", "-o", "json"]));
    assert_eq!(value["locale"], "en");
    assert_eq!(value["max_candidates"], 32);
}

#[test]
fn config_flag_overrides_env() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let path = other.path().join("custom.yaml");

    taskquery(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();

    assert!(path.exists());
    assert!(!home.path().join("config.yaml").exists());
}

#[test]
fn locales_lists_all() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(taskquery(&home).args(["locales", "-o", "json"]));

    assert_eq!(value["count"], 14);
    let codes: Vec<_> = value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["code"].as_str().unwrap().to_string())
        .collect();
    assert!(codes.contains(&"ja".to_string()));
    assert!(codes.contains(&"pt".to_string()));
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    taskquery(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taskquery"));
}

#[test]
fn completions_unknown_shell() {
    let home = TempDir::new().unwrap();
    taskquery(&home)
        .args(["completions", "tcsh"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown shell"));
}
