//! Line tokenizer for the scale record format.
//!
//! One record per line: `name,left,right`. Spaces are stripped, blank lines
//! and `#` comments are skipped. Any other shape aborts the whole batch
//! before a single scale is registered.

use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("wrong number of fields: {line}")]
    WrongFieldCount { line: String, count: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// One scale definition as handed to the balancing engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub left: String,
    pub right: String,
}

/// Tokenize a single line. `Ok(None)` for blank lines and comments.
#[instrument(level = "trace")]
pub fn parse_line(line: &str) -> ParseResult<Option<Record>> {
    let stripped: String = line.chars().filter(|c| *c != ' ').collect();
    if stripped.is_empty() || stripped.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = stripped.split(',').collect();
    if fields.len() != 3 {
        return Err(ParseError::WrongFieldCount {
            line: stripped.clone(),
            count: fields.len(),
        });
    }

    Ok(Some(Record {
        name: fields[0].to_string(),
        left: fields[1].to_string(),
        right: fields[2].to_string(),
    }))
}

/// Tokenize a whole input batch, failing fast on the first malformed line.
#[instrument(level = "debug", skip(input))]
pub fn parse_input(input: &str) -> ParseResult<Vec<Record>> {
    let mut records = Vec::new();
    for line in input.lines() {
        if let Some(record) = parse_line(line)? {
            records.push(record);
        }
    }
    Ok(records)
}
