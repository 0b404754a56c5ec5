//! Tests for command dispatch and exit-code mapping

use std::path::PathBuf;

use tempfile::TempDir;

use libra::cli::args::Cli;
use libra::cli::commands::execute_command;
use libra::cli::error::CliError;
use libra::domain::DomainError;
use libra::exitcode;
use libra::parser::ParseError;

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("scales.txt");
    std::fs::write(&path, content).expect("write scale definitions");
    path
}

fn cli_for(file: PathBuf) -> Cli {
    Cli {
        debug: 0,
        file: Some(file),
        command: None,
    }
}

#[test]
fn given_valid_definitions_file_when_executing_then_succeeds() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_input(&temp, "S1,S2,30\nS2,5,5\n");

    // Act
    let result = execute_command(&cli_for(path));

    // Assert
    assert!(result.is_ok());
}

#[test]
fn given_malformed_record_when_executing_then_exits_with_data_error() {
    let temp = TempDir::new().unwrap();
    let path = write_input(&temp, "S1,10\n");

    let err = execute_command(&cli_for(path)).unwrap_err();

    assert!(matches!(
        err,
        CliError::Parse(ParseError::WrongFieldCount { .. })
    ));
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_invalid_tree_when_executing_then_exits_with_data_error() {
    let temp = TempDir::new().unwrap();
    let path = write_input(&temp, "S1,1,2\nS1,3,4\n");

    let err = execute_command(&cli_for(path)).unwrap_err();

    assert!(matches!(
        err,
        CliError::Domain(DomainError::DuplicateScaleName(_))
    ));
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_missing_input_file_when_executing_then_exits_with_noinput() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("does-not-exist.txt");

    let err = execute_command(&cli_for(path)).unwrap_err();

    assert!(matches!(err, CliError::Io(_)));
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}
