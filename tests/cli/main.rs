// Copyright 2024 Martin Pool

//! Tests for the factorial-steps command line.

use std::env;
use std::path::PathBuf;

use indoc::indoc;
use insta::assert_snapshot;
use lazy_static::lazy_static;
use predicates::prelude::*;
use pretty_assertions::assert_eq;


lazy_static! {
    static ref MAIN_BINARY: PathBuf = assert_cmd::cargo::cargo_bin("factorial-steps");
}

/// Build a command for the main binary, without any options configured
/// in the environment running these tests.
fn run() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(MAIN_BINARY.as_os_str());
    env::vars()
        .map(|(k, _v)| k)
        .filter(|k| {
            k.starts_with("FACTORIAL_STEPS_")
                || k == "CLICOLOR_FORCE"
                || k == "NOCOLOR"
                || k == "CARGO_TERM_COLOR"
        })
        .for_each(|k| {
            cmd.env_remove(k);
        });
    cmd
}

const DEMO_OUTPUT: &str = indoc! {"
    Calculating factorial of 5
    Multiplying 1 by 1
    Multiplying 2 by 2
    Multiplying 6 by 3
    Multiplying 24 by 4
    Multiplying 120 by 5
    The factorial of 5 is 120
"};

#[test]
fn no_args_prints_the_working_and_result() {
    run()
        .assert()
        .success()
        .stdout(DEMO_OUTPUT)
        .stderr("");
}

#[test]
fn output_is_the_same_every_time() {
    let first = run().output().unwrap();
    let second = run().output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_snapshot!(String::from_utf8_lossy(&first.stdout), @r###"
    Calculating factorial of 5
    Multiplying 1 by 1
    Multiplying 2 by 2
    Multiplying 6 by 3
    Multiplying 24 by 4
    Multiplying 120 by 5
    The factorial of 5 is 120
    "###);
}

#[test]
fn show_version() {
    run()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::is_match(r"^factorial-steps \d+\.\d+\.\d+(-.*)?\n$").unwrap());
}

#[test]
fn help_goes_to_stdout_and_succeeds() {
    run()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--level").and(predicate::str::contains("--colors")));
}

#[test]
fn generate_bash_completions() {
    run()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete ").and(predicate::str::contains("factorial-steps")))
        .stdout(predicate::str::contains("Multiplying").not());
}

#[test]
fn unknown_argument_is_a_usage_error() {
    run()
        .arg("--wibble")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("--wibble"));
}

#[test]
fn positional_number_is_rejected() {
    run().arg("7").assert().code(1).stdout("");
}
