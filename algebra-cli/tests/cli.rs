use assert_cmd::prelude::*; // Add methods on commands
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::*;
use std::process::Command; // Run programs
use test_log::test;

const BIN: &str = "alg";

const ORDERS_CSV: &str = "1,ann,30\n2,bob,5\n3,cid,12\n";

const SELECT_PLAN: &str = r#"{
    "operator": "select",
    "condition": { "column": 2, "comparison": ">", "value": 10 },
    "input": { "operator": "group_scan", "group": "orders" }
}"#;

#[cfg_attr(miri, ignore)]
#[test]
fn cli_argument_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-vvv").arg("Non-existing-file.json");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-h");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Print help"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("alg"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-v").arg("-q").arg("plan.json");
    cmd.assert().failure().stderr(predicate::str::contains(
        "argument '--verbose...' cannot be used with '--quiet'",
    ));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--group").arg("orders").arg("plan.json");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=FILE"));

    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn print_physical_plan() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let plan = temp.child("plan.json");
    plan.write_str(SELECT_PLAN)?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(plan.path());
    cmd.assert().success().stdout(
        predicate::str::contains("Select #2 > 10").and(predicate::str::contains("GroupScan orders")),
    );

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--print-logical").arg(plan.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GroupScan orders").count(2));

    temp.close()?;
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn execute_plan() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let plan = temp.child("plan.json");
    plan.write_str(SELECT_PLAN)?;
    let orders = temp.child("orders.csv");
    orders.write_str(ORDERS_CSV)?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--execute")
        .arg("--group")
        .arg(format!("orders={}", orders.path().display()))
        .arg(plan.path());
    cmd.assert().success().stdout(
        predicate::str::contains(r#"[1,"ann",30]"#)
            .and(predicate::str::contains(r#"[3,"cid",12]"#))
            .and(predicate::str::contains("bob").not()),
    );

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--execute").arg(plan.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is not known to the storage layer"));

    temp.close()?;
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn invalid_plans() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let empty = temp.child("empty.json");
    empty.write_str("null")?;
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(empty.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot translate an empty plan"));

    let shape = temp.child("shape.json");
    shape.write_str(
        r#"{
            "operator": "group_scan",
            "group": "orders",
            "input": { "operator": "group_scan", "group": "items" }
        }"#,
    )?;
    cmd = Command::cargo_bin(BIN)?;
    cmd.arg(shape.path());
    cmd.assert().failure().stderr(predicate::str::contains(
        "Operator `GroupScan` expects 0 input(s) but was given 1.",
    ));

    let deep = temp.child("deep.json");
    deep.write_str(SELECT_PLAN)?;
    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--max-depth").arg("1").arg(deep.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the configured limit of 1"));

    let malformed = temp.child("malformed.json");
    malformed.write_str(r#"{ "operator": "join" }"#)?;
    cmd = Command::cargo_bin(BIN)?;
    cmd.arg(malformed.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Malformed plan description"));

    temp.close()?;
    Ok(())
}
