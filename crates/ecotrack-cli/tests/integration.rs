#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ecotrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ecotrack").unwrap();
    cmd.current_dir(dir.path()).env("ECOTRACK_ROOT", dir.path());
    cmd
}

// ---------------------------------------------------------------------------
// ecotrack action
// ---------------------------------------------------------------------------

#[test]
fn action_list_seeds_catalog() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["action", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use reusable shopping bags"));

    assert!(dir.path().join("data/eco_actions.json").exists());
}

#[test]
fn action_add_assigns_next_id() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["action", "add", "Repair instead of replace", "--points", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added action 21"));
}

#[test]
fn action_add_rejects_blank_description() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["action", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("description"));
}

// ---------------------------------------------------------------------------
// ecotrack user
// ---------------------------------------------------------------------------

#[test]
fn user_init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["user", "init", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized user 'alice'"));
    ecotrack(&dir)
        .args(["user", "init", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn user_task_then_complete_then_stats() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir).args(["user", "init", "bob"]).assert().success();

    ecotrack(&dir)
        .args(["user", "task", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today's task"));

    ecotrack(&dir)
        .args(["user", "complete", "bob", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed action 1"));

    ecotrack(&dir)
        .args(["user", "stats", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Points: 5"));
}

#[test]
fn user_complete_twice_fails() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["user", "complete", "carol", "2"])
        .assert()
        .success();
    ecotrack(&dir)
        .args(["user", "complete", "carol", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not pending"));
}

#[test]
fn user_stats_json_output() {
    let dir = TempDir::new().unwrap();
    let output = ecotrack(&dir)
        .args(["--json", "user", "stats", "dana"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stats: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(stats["points"].as_u64().unwrap(), 0);
    assert_eq!(stats["pending_actions"].as_array().unwrap().len(), 20);
}

#[test]
fn user_location_round_trips_through_stats() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["user", "location", "erin", "51.5", "-0.12"])
        .assert()
        .success();

    ecotrack(&dir)
        .args(["user", "stats", "erin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Location: 51.5, -0.12"));
}

#[test]
fn blank_user_id_is_rejected() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["user", "init", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid user id"));
}

// ---------------------------------------------------------------------------
// ecotrack tip / notify
// ---------------------------------------------------------------------------

#[test]
fn tip_random_prints_seeded_content() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["tip", "random"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn notify_add_then_list() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["notify", "add", "Composting week starts Monday."])
        .assert()
        .success();

    ecotrack(&dir)
        .args(["notify", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Composting week starts Monday."));
}

#[test]
fn notify_add_blank_fails() {
    let dir = TempDir::new().unwrap();
    ecotrack(&dir)
        .args(["notify", "add", "   "])
        .assert()
        .failure();
}
