use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_PLANNER_DIR", config_dir.path())
        .env_remove("BUDGET_PLANNER_MAX_RECORDS")
        .env_remove("BUDGET_PLANNER_MAX_CATEGORIES")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_delete_scenario() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .write_stdin(
            "add Food 10.50 Lunch --date 2025-03-21\n\
             add Transport 5.00 Bus --date 2025-03-21\n\
             add Food 7.25 Snack --date 2025-03-22\n\
             totals\n\
             delete 2\n\
             show 2\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Food: $17.75"))
        .stdout(predicate::str::contains("Transport: $5.00"))
        .stdout(predicate::str::contains("Total Expenses: $22.75"))
        .stdout(predicate::str::contains("Expense deleted successfully"))
        .stdout(predicate::str::contains("Total Expenses: $17.75"))
        .stdout(predicate::str::contains(
            r#"{"date":"2025-03-22","category":"Food","amount":7.25,"description":"Snack"}"#,
        ));
}

#[test]
fn test_capacity_from_command_line() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["--max-records", "2"])
        .write_stdin("add A 1 one\nadd B 2 two\nadd C 3 three\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Failed to add expense. Maximum number of expenses reached.",
        ))
        .stdout(predicate::str::contains("Total Expenses: $3.00"));
}

#[test]
fn test_clear_with_yes_flag() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .write_stdin("add Food 4 tea\nclear --yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All expenses cleared successfully"))
        .stdout(predicate::str::contains("No categories yet."));
}

#[test]
fn test_show_config_and_save() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["--unbounded-categories", "--currency", "€", "--save-settings", "--show-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max categories:  unlimited"))
        .stdout(predicate::str::contains("Currency symbol: €"));

    assert!(dir.path().join("config.json").exists());

    budget(&dir)
        .write_stdin("add Food 2.5 coffee\nfav 1 tea\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorite category selected: Food"))
        .stdout(predicate::str::contains("Food: €3.50"));
}

#[test]
fn test_rejects_zero_capacity() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["--max-records", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_records must be at least 1"));
}

#[test]
fn test_overflowing_amounts_keep_session_alive() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .write_stdin(
            "add A 92233720368547758 big\n\
             add A 92233720368547758 bigger\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Failed to update expenses. Totals would be too large.",
        ))
        .stdout(predicate::str::contains("Total Expenses: $922337203685477.58"));
}

#[test]
fn test_huge_capacity_starts_without_allocating() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["--max-records", "18446744073709551615"])
        .write_stdin("add Food 1 gum\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully"));
}
