use std::io::Write;
use std::process::{Command, Output};

fn goldenweek(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_goldenweek"))
        .args(args)
        .env_remove("GOLDENWEEK_RULES")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn goldenweek_with_rules(rules: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_goldenweek"))
        .args(args)
        .env("GOLDENWEEK_RULES", rules)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn prints_window_for_year() {
    let output = goldenweek(&["--year", "2022"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Calculating the Go-ldenweek of 2022.\nGo-ldenweek is 2022/4/29 ~ 2022/5/8\n"
    );
}

#[test]
fn gap_zero() {
    let output = goldenweek(&["--year", "2022", "--gap", "0"]);
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Go-ldenweek is 2022/4/29 ~ 2022/5/1\n"));
}

#[test]
fn negative_gap_is_rejected() {
    let output = goldenweek(&["--year", "2022", "--gap", "-1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("Go-ldenweek is"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("allowed_gap cannot be negative."));
}

#[test]
fn defaults_to_current_year() {
    let output = goldenweek(&["--year", "0"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Calculating the Go-ldenweek of "));
    assert!(!stdout(&output).contains("Go-ldenweek of 0."));
}

#[test]
fn longest_mode() {
    let output = goldenweek(&["--year", "2020", "--longest"]);
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Go-ldenweek is 2020/5/2 ~ 2020/5/6\n"));
}

#[test]
fn json_output() {
    let output = goldenweek(&["--year", "2022", "--json"]);
    assert!(output.status.success());
    let window: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(window["start"], "2022-04-29");
    assert_eq!(window["end"], "2022-05-08");
}

#[test]
fn verbose_logs_to_stderr() {
    let output = goldenweek(&["--year", "2022", "--verbose"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("observed: 2022-04-29"));
    assert!(stderr.contains("start is 2022-04-29"));
    assert!(stdout(&output).ends_with("Go-ldenweek is 2022/4/29 ~ 2022/5/8\n"));
}

#[test]
fn rules_file_replaces_defaults() {
    let path = std::env::temp_dir().join(format!("goldenweek-rules-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"[
  {{ "WeekDay": "Sat" }},
  {{ "WeekDay": "Sun" }},
  {{ "FixedDay": {{ "name": "Showa Day", "month": 4, "day": 29 }} }}
]"#
    )
    .unwrap();
    drop(file);

    let output = goldenweek(&["--year", "2022", "--rules", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Go-ldenweek is 2022/4/29 ~ 2022/5/1\n"));
}

#[test]
fn missing_anchor_fails() {
    let output = goldenweek(&["--year", "2022", "--anchor", "Marine Day"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("Go-ldenweek is"));
}

#[test]
fn env_rules_are_added_to_defaults() {
    let output = goldenweek(&["--year", "2019"]);
    assert!(stdout(&output).ends_with("Go-ldenweek is 2019/4/27 ~ 2019/4/29\n"));

    // 2019/5/1 bridges Showa Day to the May holidays
    let rules = r#"[{ "SingularDay": { "name": "Enthronement Day", "date": "2019-05-01" } }]"#;
    let output = goldenweek_with_rules(rules, &["--year", "2019"]);
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Go-ldenweek is 2019/4/27 ~ 2019/5/6\n"));
}

#[test]
fn malformed_env_rules_fail() {
    let output = goldenweek_with_rules("[{\"FixedDay\": ", &["--year", "2019"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid JSON"));
}
