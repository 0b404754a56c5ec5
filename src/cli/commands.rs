//! Command dispatch: wire parsed arguments to the balancing engine.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::balance_records;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::parser;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => balance(cli.file.as_deref()),
    }
}

/// Read the whole batch, balance it, print one `name,left,right` line per
/// scale in registration order. Nothing is printed on failure.
#[instrument]
fn balance(file: Option<&Path>) -> CliResult<()> {
    let input = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    debug!("read {} bytes of scale definitions", input.len());

    let records = parser::parse_input(&input)?;
    let adjustments = balance_records(&records)?;
    for adjustment in adjustments {
        output::info(&adjustment);
    }
    Ok(())
}
