use assert_cmd::Command;
use predicates::prelude::*;

fn wordclock() -> Command {
    Command::cargo_bin("wordclock").unwrap()
}

#[test]
fn test_show_phrase_at_time() {
    wordclock()
        .args(["show", "--at", "09:15", "--format", "phrase"])
        .assert()
        .success()
        .stdout("IT IS A QUARTER PAST NINE\n");
}

#[test]
fn test_show_text_grid() {
    let output = wordclock()
        .args(["show", "--at", "00:00:00"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[8], "s e v e n T W E L V E ");
    assert_eq!(rows[9], "t e n b O ' C L O C K ");
}

#[test]
fn test_show_json() {
    let output = wordclock()
        .args(["show", "--at", "16:35", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[3]["segments"][4]["text"], "T O ");
    assert_eq!(lines[3]["segments"][4]["highlighted"], true);
}

#[test]
fn test_show_rfc3339_in_zone() {
    // 14:00 UTC is 10:00 in New York during EDT.
    wordclock()
        .args([
            "show",
            "--at",
            "2026-03-15T14:00:00Z",
            "--tz",
            "America/New_York",
            "--format",
            "phrase",
        ])
        .assert()
        .success()
        .stdout("IT IS TEN O'CLOCK\n");
}

#[test]
fn test_show_custom_threshold() {
    wordclock()
        .args(["show", "--at", "04:12", "--threshold", "1", "--format", "phrase"])
        .assert()
        .success()
        .stdout("IT IS PAST FOUR\n");
}

#[test]
fn test_show_invalid_time() {
    wordclock()
        .args(["show", "--at", "25:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time"));
}

#[test]
fn test_show_invalid_timezone() {
    wordclock()
        .args(["show", "--tz", "Mars/Olympus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn test_show_invalid_threshold() {
    wordclock()
        .args(["show", "--at", "10:00", "--threshold", "7.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid threshold"));
}

#[test]
fn test_show_now_defaults() {
    wordclock()
        .args(["show", "--format", "phrase"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("IT IS "));
}

#[test]
fn test_watch_bounded() {
    wordclock()
        .args([
            "watch",
            "--count",
            "3",
            "--interval",
            "0",
            "--every-tick",
            "--format",
            "phrase",
            "--tz",
            "UTC",
        ])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.lines().count() == 3 && out.lines().all(|l| l.starts_with("IT IS "))
        }));
}

#[test]
fn test_watch_rejects_negative_interval() {
    wordclock()
        .args(["watch", "--interval=-1", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval"));
}

#[test]
fn test_watch_rejects_oversized_interval() {
    wordclock()
        .args(["watch", "--interval", "1e20", "--count", "1", "--tz", "UTC"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: interval must be"));
}

#[test]
fn test_show_plain_time_with_zone() {
    wordclock()
        .args([
            "show",
            "--at",
            "14:05",
            "--tz",
            "Europe/London",
            "--format",
            "phrase",
        ])
        .assert()
        .success()
        .stdout("IT IS FIVE PAST TWO\n");
}

#[test]
fn test_show_plain_time_with_invalid_zone() {
    wordclock()
        .args(["show", "--at", "14:05", "--tz", "Mars/Olympus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid timezone"));
}
