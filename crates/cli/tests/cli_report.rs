use std::io::Write;
use std::process::{Command, Output};

use tempfile::{NamedTempFile, TempDir};

/// Create a config file with the given contents
fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config");
    write!(file, "{}", contents).expect("Failed to write temp config");
    file
}

/// Command for the binary with a clean, quiet environment
fn boxoffice(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_boxoffice"));
    cmd.current_dir(workdir.path())
        .env("RUST_LOG", "error") // Quiet logs during tests
        .env_remove("BOXOFFICE_CONFIG")
        .env_remove("BOXOFFICE_OUTPUT_FORMAT");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to run boxoffice")
}

#[test]
fn test_default_catalog_when_no_config_file() {
    let workdir = TempDir::new().unwrap();
    let output = run(&mut boxoffice(&workdir));

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Available tickets:\n\
         Ticket Type: Regular Ticket, Price: $50\n\
         Ticket Type: VIP Ticket, Price: $200\n\
         Ticket Type: Regular Ticket, Price: $30\n\
         \n\
         Total Price: $280\n\
         Ticket Descriptions:\n\
         Regular Ticket: $50.0\n\
         VIP Ticket: $200.0\n\
         Regular Ticket: $30.0\n"
    );
}

#[test]
fn test_catalog_from_config_file() {
    let workdir = TempDir::new().unwrap();
    let config = config_file(
        r#"
[[tickets]]
kind = "vip"
price = 200.0

[[tickets]]
kind = "regular"
price = 50.0

[[tickets]]
kind = "vip"
price = 200.0

[[tickets]]
kind = "regular"
price = 50.0
"#,
    );

    let output = run(boxoffice(&workdir).env("BOXOFFICE_CONFIG", config.path()));

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total Price: $500\n"));
    assert!(stdout.ends_with(
        "VIP Ticket: $200.0\nRegular Ticket: $50.0\nVIP Ticket: $200.0\nRegular Ticket: $50.0\n"
    ));
}

#[test]
fn test_json_output_via_env_override() {
    let workdir = TempDir::new().unwrap();
    let config = config_file(
        r#"
[[tickets]]
kind = "regular"
price = 12.5
"#,
    );

    let output = run(boxoffice(&workdir)
        .env("BOXOFFICE_CONFIG", config.path())
        .env("BOXOFFICE_OUTPUT_FORMAT", "json"));

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ticket_count"], 1);
    assert_eq!(report["total_price"], 12.5);
    assert_eq!(report["description"], "Regular Ticket: $12.5\n");
}

#[test]
fn test_empty_catalog() {
    let workdir = TempDir::new().unwrap();
    let config = config_file("tickets = []\n");

    let output = run(boxoffice(&workdir).env("BOXOFFICE_CONFIG", config.path()));

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total Price: $0\n"));
    assert!(stdout.ends_with("Ticket Descriptions:\n"));
}

#[test]
fn test_negative_price_fails_validation() {
    let workdir = TempDir::new().unwrap();
    let config = config_file(
        r#"
[[tickets]]
kind = "vip"
price = -5.0
"#,
    );

    let output = run(boxoffice(&workdir).env("BOXOFFICE_CONFIG", config.path()));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_explicit_missing_config_fails() {
    let workdir = TempDir::new().unwrap();
    let missing = workdir.path().join("missing.toml");

    let output = run(boxoffice(&workdir).env("BOXOFFICE_CONFIG", &missing));

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_env_override_applies_to_default_catalog() {
    let workdir = TempDir::new().unwrap();

    let output = run(boxoffice(&workdir).env("BOXOFFICE_OUTPUT_FORMAT", "json"));

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ticket_count"], 3);
    assert_eq!(report["total_price"], 280.0);
}
