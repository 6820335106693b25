use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("invocations.jsonl");
    let mut input = std::fs::File::create(&input_path)?;
    writeln!(
        input,
        r#"{{"invocationId": "req1", "parameters": {{"amount": 10.0, "currency": "EUR", "orderReference": "ord-1"}}}}"#
    )?;
    writeln!(
        input,
        r#"{{"invocationId": "req2", "parameters": {{"amount": -5, "currency": "EUR", "orderReference": "ord-2"}}}}"#
    )?;
    input.flush()?;

    let mut cmd = Command::new(cargo_bin!("checkout-bridge"));
    cmd.arg(&input_path);

    cmd.assert()
        .success()
        // req1 succeeds with a synthesized transaction reference
        .stdout(predicate::str::contains(r#""invocationId":"req1""#))
        .stdout(predicate::str::contains(r#""outcome":"ok""#))
        .stdout(predicate::str::contains(r#""transactionRef":"TX-ord-1""#))
        // req2 is rejected synchronously
        .stdout(predicate::str::contains(r#""invocationId":"req2""#))
        .stdout(predicate::str::contains("invalid amount"));

    Ok(())
}

#[test]
fn test_cli_with_scripted_outcomes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("invocations.jsonl");
    let mut input = std::fs::File::create(&input_path)?;
    writeln!(
        input,
        r#"{{"invocationId": "req1", "parameters": {{"amount": 10.0, "currency": "EUR", "orderReference": "ord-1"}}}}"#
    )?;
    writeln!(
        input,
        r#"{{"invocationId": "req2", "parameters": {{"amount": 5.0, "currency": "EUR", "orderReference": "ord-2"}}}}"#
    )?;
    input.flush()?;

    let script_path = dir.path().join("script.jsonl");
    let mut script = std::fs::File::create(&script_path)?;
    writeln!(script, r#"{{"signal": "cancel"}}"#)?;
    writeln!(
        script,
        r#"{{"signal": "failure", "code": "DECLINED", "message": "card declined"}}"#
    )?;
    script.flush()?;

    let mut cmd = Command::new(cargo_bin!("checkout-bridge"));
    cmd.arg(&input_path).arg("--script").arg(&script_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""outcome":"cancelled""#))
        .stdout(predicate::str::contains(r#""code":"DECLINED""#))
        .stdout(predicate::str::contains("card declined"));

    Ok(())
}

#[test]
fn test_cli_reports_malformed_stream_on_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("invocations.jsonl");
    let mut input = std::fs::File::create(&input_path)?;
    writeln!(input, r#"{{"invocationId": "req1""#)?;
    input.flush()?;

    let mut cmd = Command::new(cargo_bin!("checkout-bridge"));
    cmd.arg(&input_path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading invocation"));

    Ok(())
}
