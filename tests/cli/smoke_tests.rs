use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_modulo_counter"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("modulo_counter"))
        .stdout(predicate::str::contains("--digits"));
}

#[test]
fn help_warns_that_document_formats_buffer_frames() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("json and yaml keep every frame in memory until the run ends"))
        .stdout(predicate::str::contains("use jsonl for long runs"));
}

#[test]
fn multi_digit_binary_reference_run() {
    bin()
        .args(["--digits", "2", "--base", "2"])
        .assert()
        .success()
        .stdout(
            "Binary counter is generated:\n\nPrefix Increment for Multi-Digit Counter:\n\
             00 01 10 11 00 01 10 11 00 01 10 11 00 01 10 11 00 01 10 11 \n",
        );
}

#[test]
fn single_digit_hex_reference_run() {
    bin()
        .args(["-d", "1", "-b", "16"])
        .assert()
        .success()
        .stdout(
            "Hexadecimal counter is generated:\nPrefix Increment for Single-Digit Counter:\n\
             0 1 2 3 4 5 6 7 8 9 A B C D E F 0 1 2 3 \n",
        );
}

#[test]
fn prompts_on_stdin_when_parameters_are_missing() {
    bin()
        .write_stdin("0\n3\n9\n8\n")
        .args(["-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Octal counter is generated:"))
        .stdout(predicate::str::contains("000 001 002 "))
        .stderr(predicate::str::contains("Please enter a valid number of digits: "))
        .stderr(predicate::str::contains("Please enter a valid base (2, 8, 10, 16): "));
}

#[test]
fn no_prompt_fails_without_base() {
    bin()
        .args(["--digits", "2", "--no-prompt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing parameter 'base'"));
}

#[test]
fn rejects_unsupported_base() {
    bin().args(["--digits", "2", "--base", "3"]).assert().failure().stderr(predicate::str::contains("Unsupported base 3"));
}

#[test]
fn rejects_digit_count_beyond_limit() {
    bin()
        .args(["-d", "18446744073709551615", "-b", "2", "-n", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid digit count 18446744073709551615"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn jsonl_output_is_machine_readable() {
    let output = bin()
        .args(["-d", "3", "-b", "10", "-n", "12", "--mode", "postfix", "--format", "jsonl"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let records: Vec<Value> = text.lines().map(|line| serde_json::from_str(line).unwrap()).collect();

    assert_eq!(records.len(), 14);
    assert_eq!(records[0]["type"], "header");
    assert_eq!(records[0]["mode"], "postfix");
    assert_eq!(records[11]["values"], serde_json::json!([0, 1, 0]));
    assert_eq!(records[13]["final_values"], serde_json::json!([0, 1, 2]));
}
