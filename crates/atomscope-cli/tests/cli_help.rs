//! Argument parsing and input validation that fail before any request.

use assert_cmd::Command;
use atomscope_testing::TestWorld;
use predicates::prelude::*;

#[allow(deprecated)]
fn atomscope(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("atomscope").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn test_help_lists_commands() {
    let world = TestWorld::new();
    atomscope(&world)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("trending"))
        .stdout(predicate::str::contains("positions"))
        .stdout(predicate::str::contains("sync"));
}

#[test]
fn test_unsupported_limit_is_rejected() {
    let world = TestWorld::new();
    atomscope(&world)
        .args(["top", "--limit", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported limit 30"));
}

#[test]
fn test_unknown_period_is_rejected() {
    let world = TestWorld::new();
    atomscope(&world)
        .args(["trending", "--period", "2d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value '2d'"));
}

#[test]
fn test_malformed_address_fails_without_request() {
    let world = TestWorld::new();
    let result = world
        .run(&["positions", "0x123", "--api-url", "http://127.0.0.1:9"])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Error: Invalid wallet address: 0x123"));
}

#[test]
fn test_positions_need_an_address() {
    let world = TestWorld::new();
    let result = world.run(&["positions"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("No wallet address given"));
}

#[test]
fn test_blank_search_is_rejected() {
    let world = TestWorld::new();
    let result = world.run(&["search", "   "]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Search query is empty"));
}
