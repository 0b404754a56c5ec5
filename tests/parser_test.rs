//! Tests for the record tokenizer

use libra::parser::{parse_input, parse_line, ParseError, Record};

#[test]
fn given_well_formed_line_when_parsing_then_returns_record() {
    let record = parse_line("S1,10,20").unwrap();

    assert_eq!(
        record,
        Some(Record {
            name: "S1".to_string(),
            left: "10".to_string(),
            right: "20".to_string(),
        })
    );
}

#[test]
fn given_line_with_spaces_when_parsing_then_spaces_are_stripped() {
    let record = parse_line("  S1 , S2 , 3 0 ").unwrap().unwrap();

    assert_eq!(record.name, "S1");
    assert_eq!(record.left, "S2");
    assert_eq!(record.right, "30");
}

#[test]
fn given_comments_and_blank_lines_when_parsing_batch_then_they_are_skipped() {
    let input = "# scale definitions\n\nS1,10,20\n   \n# trailing comment\n";

    let records = parse_input(input).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "S1");
}

#[test]
fn given_too_few_fields_when_parsing_then_whole_batch_fails() {
    // A two-field line aborts before anything is registered
    let input = "S1,10\nS2,5,5\n";

    let result = parse_input(input);

    assert_eq!(
        result,
        Err(ParseError::WrongFieldCount {
            line: "S1,10".to_string(),
            count: 2,
        })
    );
}

#[test]
fn given_too_many_fields_when_parsing_then_whole_batch_fails() {
    let result = parse_input("S1,10,20,30\n");

    assert_eq!(
        result,
        Err(ParseError::WrongFieldCount {
            line: "S1,10,20,30".to_string(),
            count: 4,
        })
    );
}

#[test]
fn given_empty_fields_when_parsing_then_record_passes_through() {
    // Shape is the parser's concern; empty tokens are rejected by the tree
    let record = parse_line("S1,,20").unwrap().unwrap();

    assert_eq!(record.left, "");
}
