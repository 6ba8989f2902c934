mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_show_month_json() {
    let fixture = TestFixture::new();
    let value = fixture.json(&["show", "--granularity", "month"]);
    let content = &value["content"];

    assert_eq!(content["granularity"], "month");
    assert_eq!(content["reference"], "2024-03-01");
    assert_eq!(content["heading"]["kind"], "month");
    assert_eq!(content["heading"]["month"], 3);
    assert_eq!(content["window"]["start"], "2024-03-01");
    assert_eq!(content["window"]["end"], "2024-03-31");
    assert_eq!(content["remaining"]["days_left"], 30);
    assert_eq!(content["remaining"]["percentage_left"], 100.0);
    assert_eq!(content["columns"], 7);
    assert_eq!(content["days"].as_array().map(Vec::len), Some(31));
    assert_eq!(content["days"][0]["is_today"], true);
    assert!(value.get("badge").is_none());
}

#[test]
fn test_show_year_json_is_full_leap_year() {
    let fixture = TestFixture::new();
    let value = fixture.json(&["show"]);
    let days = value["content"]["days"].as_array().expect("days array");

    assert_eq!(days.len(), 366);
    assert_eq!(days[0]["date"], "2024-01-01");
    assert_eq!(days[365]["date"], "2024-12-31");
    assert_eq!(days[59]["is_past"], true);
    assert_eq!(days[60]["is_today"], true);
    assert_eq!(days[61]["is_past"], false);
    assert_eq!(value["content"]["columns"], 26);
}

#[test]
fn test_no_command_shows_year_view() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2024\n"))
        .stdout(predicate::str::contains("Fri, Mar 1, 2024"))
        .stdout(predicate::str::contains("305 Days left"));
}

#[test]
fn test_show_week_plain() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["show", "-g", "week"])
        .assert()
        .success()
        .stdout("Week-1 Mar 2024\n\n◉ ● ● ● ● ● ●\n\nMarch 2024  6 Days left\n");
}

#[test]
fn test_show_percentage_readout() {
    let fixture = TestFixture::new();
    fixture
        .command_at("2024-03-10")
        .args(["show", "-g", "week", "-r", "percent"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Week-2 Mar 2024\n"))
        .stdout(predicate::str::contains("66.7% left"));
}

#[test]
fn test_show_day_view_has_zero_percent() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["show", "-g", "day", "-r", "percentage"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 March 2024\n"))
        .stdout(predicate::str::contains("0.0% left"));
}

#[test]
fn test_config_sets_initial_view() {
    let fixture = TestFixture::new();
    fixture.write_config("[display]\ninitial_granularity = \"week\"\nremaining_mode = \"percentage\"\n");

    fixture
        .command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Week-1 Mar 2024\n"))
        .stdout(predicate::str::contains("100.0% left"));
}

#[test]
fn test_flags_override_config() {
    let fixture = TestFixture::new();
    fixture.write_config("[display]\ninitial_granularity = \"week\"\n");

    fixture
        .command()
        .args(["show", "-g", "month"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("March 2024\n"));
}

#[test]
fn test_invalid_now_fails() {
    let fixture = TestFixture::new();
    fixture
        .command_at("yesterday")
        .arg("show")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid instant 'yesterday'"));
}

#[test]
fn test_invalid_config_fails() {
    let fixture = TestFixture::new();
    fixture.write_config("[display]\nyear_columns = 0\n");

    fixture
        .command()
        .arg("show")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to load"));
}

#[test]
fn test_tui_falls_back_when_not_a_terminal() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("tui")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2024\n"))
        .stderr(predicate::str::contains("not an interactive terminal"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["--log-level", "debug", "show", "-g", "day"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 March 2024\n"))
        .stderr(predicate::str::contains("rendering view"));
}
