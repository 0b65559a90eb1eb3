use std::error::Error as StdError;
use std::fmt;
use std::io;

use failcode::prelude::*;

const CODE_A: StringCode = StringCode("code_a");
const CODE_B: IntCode = IntCode(1);

#[derive(Debug)]
struct ForeignBoundary {
    inner: Failure,
}

impl fmt::Display for ForeignBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("foreign boundary")
    }
}

impl StdError for ForeignBoundary {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.inner)
    }
}

fn classify_base() -> Failure {
    new(CODE_A).with(message("xxx")).with(kv! { "zzz" => "true" })
}

fn reclassify(inner: Failure) -> Failure {
    translate(inner, CODE_B)
}

/// The head-frame function name of a node, or empty when symbols are absent.
fn head_func(node: &Failure) -> &str {
    node.call_stack().map(|stack| stack.head().func()).unwrap_or("")
}

/// Joins the non-empty segments the way the short form does.
fn join_segments(segments: &[&str]) -> String {
    segments
        .iter()
        .copied()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(": ")
}

#[test]
fn short_form_reconstructs_call_path() {
    let err = reclassify(classify_base());
    let inner = err
        .underlying()
        .and_then(|link| link.downcast_ref::<Failure>())
        .expect("inner node");

    let want = join_segments(&[
        head_func(&err),
        "code(1)",
        head_func(inner),
        "xxx",
        "zzz=true",
        "code(code_a)",
    ]);
    assert_eq!(err.to_string(), want);
}

#[test]
fn short_form_of_wrap_names_the_call_site() {
    let err = wrap(io::Error::other("yyy"));
    let want = join_segments(&[head_func(&err), "yyy"]);
    assert_eq!(err.to_string(), want);
}

#[test]
fn short_form_stops_at_the_first_foreign_error() {
    let err = wrap(ForeignBoundary {
        inner: classify_base(),
    });

    let text = err.to_string();
    assert!(text.ends_with("foreign boundary"));
    assert!(!text.contains("code(code_a)"));
    assert!(!text.contains("xxx"));
}

#[test]
fn custom_short_form_is_exactly_the_foreign_string() {
    let source = io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected end of file");
    let text = source.to_string();
    assert_eq!(custom(source).to_string(), text);
}

#[test]
fn short_form_is_idempotent() {
    let err = reclassify(classify_base());
    assert_eq!(err.to_string(), err.to_string());
}

#[test]
fn report_lists_node_blocks_in_chain_order() {
    let err = wrap(reclassify(classify_base()));
    let text = report(&err);

    assert!(text.contains("    message(\"xxx\")"));
    assert!(text.contains("    zzz = true"));
    assert!(text.contains("    code(1)"));
    assert!(text.contains("    code(code_a)"));

    // the reclassifying node comes before the root node
    let code_b = text.find("    code(1)").expect("code(1) line");
    let code_a = text.find("    code(code_a)").expect("code(code_a) line");
    assert!(code_b < code_a);
}

#[test]
fn report_location_lines_match_nodes_with_stacks() {
    let err = wrap(reclassify(classify_base()));
    let text = report(&err);

    let body = text.split("[CallStack]").next().expect("body");
    let location_lines = body.lines().filter(|line| line.starts_with('[')).count();
    assert_eq!(location_lines, 3);
}

#[test]
fn report_callstack_section_lists_every_merged_frame() {
    let err = wrap(reclassify(classify_base()));
    let text = report(&err);
    let merged = callstack_of(&err).expect("merged stack");

    let section = text.split("[CallStack]").nth(1).expect("callstack section");
    let frame_lines = section
        .lines()
        .filter(|line| line.starts_with("    ["))
        .count();
    assert_eq!(frame_lines, merged.len());
}

#[test]
fn report_appends_the_foreign_terminal() {
    let err = translate(io::Error::other("yyy"), CODE_B);
    let text = report(&err);
    assert!(text.contains("    code(1)\n    yyy\n"));
}

#[test]
fn report_is_idempotent() {
    let err = wrap(reclassify(classify_base()));
    assert_eq!(report(&err), report(&err));
}

#[test]
fn alternate_display_renders_the_report() {
    let err = reclassify(classify_base());
    assert_eq!(format!("{err:#}"), report(&err));
}

#[test]
fn report_of_custom_is_just_the_terminal() {
    let source = io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected end of file");
    let err = custom(source);
    assert_eq!(report(&err), "    unexpected end of file\n");
}
