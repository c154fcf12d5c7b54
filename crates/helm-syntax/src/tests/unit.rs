//! Unit tests for helm-syntax.

use std::collections::BTreeSet;

use rstest::rstest;

use crate::{FormatPolicy, ParseDiagnostic, ParseError, ParsedCommand, Parser, parse};

fn parse_command(line: &str) -> ParsedCommand {
    parse(line.as_bytes()).expect("lenient parse").into_command()
}

fn flag_set(flags: &[u8]) -> BTreeSet<u8> {
    flags.iter().copied().collect()
}

fn values(list: &[&str]) -> Vec<String> {
    list.iter().map(|value| (*value).to_owned()).collect()
}

// =============================================================================
// Flags
// =============================================================================

#[rstest]
#[case("top -abc")]
#[case("top -ab -c")]
#[case("top -a -b -c")]
#[case("top -c -ba")]
fn bundled_and_split_flags_are_equivalent(#[case] line: &str) {
    let command = parse_command(line);
    assert_eq!(command.name(), "top");
    assert_eq!(command.flags(), &flag_set(b"abc"));
    assert!(command.sub_command().is_none());
}

#[test]
fn lone_dash_adds_no_flags() {
    let command = parse_command("top -");
    assert!(command.flags().is_empty());
}

#[test]
fn double_dash_keeps_the_second_dash_as_a_flag() {
    let command = parse_command("top --v");
    assert_eq!(command.flags(), &flag_set(b"-v"));
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn argument_values_split_on_commas() {
    let command = parse_command("top id=1,2,3");
    assert_eq!(command.arg("id"), Some(values(&["1", "2", "3"]).as_slice()));
}

#[test]
fn argument_splits_once_on_first_equals() {
    let command = parse_command("top expr=a=b");
    assert_eq!(command.arg("expr"), Some(values(&["a=b"]).as_slice()));
}

#[test]
fn empty_value_is_kept_as_single_empty_string() {
    let command = parse_command("top id=");
    assert_eq!(command.arg("id"), Some(values(&[""]).as_slice()));
}

#[test]
fn repeated_key_keeps_last_values() {
    let command = parse_command("top id=1 id=2,3");
    assert_eq!(command.arg("id"), Some(values(&["2", "3"]).as_slice()));
    assert_eq!(command.args().len(), 1);
}

// =============================================================================
// Chaining
// =============================================================================

#[test]
fn flags_and_args_bind_to_the_nearest_preceding_word() {
    let command = parse_command("top mid=1 leaf -x");
    assert_eq!(command.name(), "top");
    assert_eq!(command.arg("mid"), Some(values(&["1"]).as_slice()));
    assert!(command.flags().is_empty());

    let leaf = command.sub_command().expect("leaf node");
    assert_eq!(leaf.name(), "leaf");
    assert_eq!(leaf.flags(), &flag_set(b"x"));
    assert!(leaf.args().is_empty());
    assert!(leaf.sub_command().is_none());
}

#[test]
fn every_later_word_starts_a_deeper_node() {
    let command = parse_command("hello one uno");
    assert_eq!(command.path(), vec!["hello", "one", "uno"]);
    assert_eq!(command.depth(), 3);
}

#[test]
fn flags_before_any_word_attach_to_the_root() {
    let command = parse_command("-v id=7 top leaf");
    assert_eq!(command.name(), "top");
    assert!(command.has_flag(b'v'));
    assert_eq!(command.arg("id"), Some(values(&["7"]).as_slice()));
    assert_eq!(command.leaf().name(), "leaf");
}

#[test]
fn flags_without_any_word_leave_the_root_unnamed() {
    let command = parse_command("-x");
    assert_eq!(command.name(), "");
    assert!(command.has_flag(b'x'));
}

// =============================================================================
// Line handling
// =============================================================================

#[rstest]
#[case(b"".as_slice())]
#[case(b"\n".as_slice())]
#[case(b"\r\n".as_slice())]
#[case(b"   \n".as_slice())]
fn blank_lines_parse_to_an_empty_command(#[case] raw: &[u8]) {
    let parsed = parse(raw).expect("parse");
    assert!(parsed.command().is_empty());
    assert!(parsed.diagnostics().is_empty());
}

#[rstest]
#[case(b"top leaf\n".as_slice())]
#[case(b"top leaf\r\n".as_slice())]
#[case(b"top  leaf".as_slice())]
#[case(b" top leaf ".as_slice())]
fn terminators_and_repeated_spaces_are_ignored(#[case] raw: &[u8]) {
    let command = parse(raw).expect("parse").into_command();
    assert_eq!(command.path(), vec!["top", "leaf"]);
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let command = parse(b"top\xff").expect("parse").into_command();
    assert_eq!(command.name(), "top\u{fffd}");
}

#[test]
fn parsing_is_idempotent() {
    let parser = Parser::default();
    let line = b"top -ab id=1,2 mid -c leaf key=v\n";
    let first = parser.parse(line).expect("first parse");
    let second = parser.parse(line).expect("second parse");
    assert_eq!(first, second);
}

#[rstest]
#[case("top -ab id=1,2 leaf -x")]
#[case("id=1,2 -ab top leaf -x")]
#[case("top id=1,2 -b -a leaf -x")]
fn flag_and_argument_order_does_not_matter(#[case] line: &str) {
    let expected = parse_command("top -ab id=1,2 leaf -x");
    assert_eq!(parse_command(line), expected);
}

#[rstest]
#[case("top")]
#[case("top -abc id=1,2,3")]
#[case("top mid=1 leaf -x")]
#[case("-x")]
#[case("hello one uno names=a,b -s")]
#[case("top --v expr=a=b empty=")]
fn rendering_parses_back_to_the_same_chain(#[case] line: &str) {
    let command = parse_command(line);
    let rendered = command.to_string();
    assert_eq!(parse_command(&rendered), command, "rendered as {rendered:?}");
}

// =============================================================================
// Format policy
// =============================================================================

#[test]
fn warn_policy_keeps_empty_key_and_reports_it() {
    let parsed = Parser::new(FormatPolicy::Warn)
        .parse(b"top =1,2 leaf")
        .expect("lenient parse");
    assert_eq!(
        parsed.diagnostics(),
        &[ParseDiagnostic::EmptyArgumentKey {
            token: "=1,2".to_owned()
        }]
    );
    let command = parsed.command();
    assert_eq!(command.arg(""), Some(values(&["1", "2"]).as_slice()));
    assert_eq!(command.leaf().name(), "leaf");
}

#[test]
fn reject_policy_fails_on_empty_key() {
    let error = Parser::new(FormatPolicy::Reject)
        .parse(b"top =1,2 leaf")
        .expect_err("strict parse should fail");
    assert_eq!(
        error,
        ParseError::InvalidArgumentFormat {
            token: "=1,2".to_owned()
        }
    );
}

#[test]
fn warn_policy_drops_non_ascii_flags() {
    let parsed = Parser::new(FormatPolicy::Warn)
        .parse("top -aé".as_bytes())
        .expect("lenient parse");
    assert_eq!(parsed.command().flags(), &flag_set(b"a"));
    assert_eq!(parsed.diagnostics().len(), 1);
}

#[test]
fn reject_policy_fails_on_non_ascii_flags() {
    let error = Parser::new(FormatPolicy::Reject)
        .parse("top -aé".as_bytes())
        .expect_err("strict parse should fail");
    assert!(matches!(error, ParseError::InvalidFlag { flag: 'é', .. }));
}

#[test]
fn reject_policy_accepts_well_formed_lines() {
    let parsed = Parser::new(FormatPolicy::Reject)
        .parse(b"top -a id=1 leaf")
        .expect("strict parse");
    assert!(parsed.diagnostics().is_empty());
    assert_eq!(parsed.command().path(), vec!["top", "leaf"]);
}
