mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::payments_file;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("eshop-payments"));
    cmd.arg("tests/fixtures/payments.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("id,order_id,method,status"))
        .stdout(predicate::str::contains(
            "payment-123,13652556-012a-4c07-b546-54eb1396d79b,VOUCHER,SUCCESS",
        ))
        .stdout(predicate::str::contains(
            "payment-456,13652556-012a-4c07-b546-54eb1396d79b,BANK_TRANSFER,SUCCESS",
        ))
        .stdout(predicate::str::contains(
            "payment-789,7f9e15bb-4b15-42f4-aebc-c3af385fb078,VOUCHER,REJECTED",
        ));

    Ok(())
}

#[test]
fn test_cli_filters_by_order_id() {
    let mut cmd = Command::new(cargo_bin!("eshop-payments"));
    cmd.arg("tests/fixtures/payments.csv")
        .args(["--order-id", "7f9e15bb-4b15-42f4-aebc-c3af385fb078"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("payment-789"))
        .stdout(predicate::str::contains("payment-123").not())
        .stdout(predicate::str::contains("payment-456").not());
}

#[test]
fn test_cli_json_output() {
    let file = payments_file(&["p-1, o-1, BANK_TRANSFER, , BCA, "]);

    let mut cmd = Command::new(cargo_bin!("eshop-payments"));
    cmd.arg(file.path()).args(["--format", "json"]);

    cmd.assert().success().stdout(predicate::str::contains(
        r#"{"id":"p-1","order_id":"o-1","method":"BANK_TRANSFER","status":"REJECTED"}"#,
    ));
}

#[test]
fn test_cli_skips_unsupported_method() {
    let file = payments_file(&[
        "p-1, o-1, CASH, , , ",
        "p-2, o-1, VOUCHER, ESHOP1234ABC5678, , ",
    ]);

    let mut cmd = Command::new(cargo_bin!("eshop-payments"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error processing payment"))
        .stderr(predicate::str::contains("Unsupported payment method"))
        .stdout(predicate::str::contains("p-1").not())
        .stdout(predicate::str::contains("p-2,o-1,VOUCHER,SUCCESS"));
}

#[test]
fn test_cli_skips_malformed_rows() {
    let file = payments_file(&["p-1", "p-2, o-1, VOUCHER, ESHOP1234ABC5678"]);

    let mut cmd = Command::new(cargo_bin!("eshop-payments"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment"))
        .stdout(predicate::str::contains("p-2,o-1,VOUCHER,SUCCESS"));
}

#[test]
fn test_cli_duplicate_id_last_row_wins() {
    let file = payments_file(&[
        "p-1, o-1, VOUCHER, ESHOP1234ABC5678, , ",
        "p-1, o-1, VOUCHER, ESHOP123456, , ",
    ]);

    let mut cmd = Command::new(cargo_bin!("eshop-payments"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout("id,order_id,method,status\np-1,o-1,VOUCHER,REJECTED\n");
}

#[test]
fn test_cli_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("eshop-payments"));
    cmd.arg("tests/fixtures/does-not-exist.csv");

    cmd.assert().failure();
}
