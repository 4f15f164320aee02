mod common;

use common::TestContext;
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn latest_prints_lexicographically_greatest_release() {
    let ctx = TestContext::new();
    for release in ["1.2.3.4", "1.2.3.5", "1.2.3.10"] {
        ctx.add_release(release, &[]);
    }

    ctx.cli().arg("latest").assert().success().stdout("1.2.3.5\n");
}

#[test]
#[serial]
fn latest_ignores_plain_files() {
    let ctx = TestContext::new();
    ctx.add_release("1.0.0.1", &[]);
    std::fs::write(ctx.distr().join("9.9.9.9"), "not a folder").unwrap();

    ctx.cli().arg("latest").assert().success().stdout("1.0.0.1\n");
}

#[test]
#[serial]
fn latest_prints_empty_line_without_releases() {
    let ctx = TestContext::new();

    ctx.cli().arg("latest").assert().success().stdout("\n");
}

#[test]
#[serial]
fn latest_fails_when_distribution_root_is_missing() {
    let ctx = TestContext::new();
    std::fs::remove_dir_all(ctx.distr()).unwrap();

    ctx.cli()
        .arg("latest")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Distribution root not found"));
}

#[test]
#[serial]
fn config_prints_effective_configuration() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[distribution]"))
        .stdout(predicate::str::contains("demo_update_fatal = false"));
}

#[test]
#[serial]
fn explicit_config_must_exist() {
    let ctx = TestContext::new();

    ctx.bare_cli()
        .args(["--config", "absent.toml", "latest"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
#[serial]
fn next_conflicts_with_update() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["build", "--previous", "1.0.0.1", "--next", "1.0.0.2", "--update"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert!(ctx.platform_calls().is_empty());
}
