//! Rendering an error chain as text.
//!
//! Two deterministic renderings share the same traversal:
//!
//! - the short form, produced by `Display` on
//!   [`Failure`](crate::types::Failure) — one line naming the call path,
//!   messages, debug pairs, and codes;
//! - the verbose [`report`] — a multi-line block per node plus a merged
//!   `[CallStack]` section.
//!
//! Both are pure functions of the chain: formatting never mutates it, and
//! formatting twice yields identical strings.

use core::fmt::{self, Write as _};
use std::error::Error as StdError;

use crate::chain::Chain;
use crate::query;
use crate::types::Failure;

/// Writes the short form of the chain starting at `head`.
///
/// Per node, head to tail: the head-frame function name, the message, the
/// debug pairs (`k=v`, space-joined), and `code(<code>)`, joined with `": "`.
/// Nodes join with `": "` as well; the first foreign error terminates the
/// output with its own string form. A node with nothing to contribute
/// disappears entirely, leaving no stray separator.
pub(crate) fn write_short(head: &(dyn StdError + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut wrote = false;
    for link in Chain::new(head) {
        let Some(node) = link.downcast_ref::<Failure>() else {
            if wrote {
                f.write_str(": ")?;
            }
            return write!(f, "{link}");
        };
        if let Some(func) = node
            .call_stack()
            .map(|stack| stack.head().func())
            .filter(|func| !func.is_empty())
        {
            if wrote {
                f.write_str(": ")?;
            }
            f.write_str(func)?;
            wrote = true;
        }
        if let Some(msg) = node.message().filter(|m| !m.is_empty()) {
            if wrote {
                f.write_str(": ")?;
            }
            f.write_str(msg)?;
            wrote = true;
        }
        if let Some(debug) = node.debug().filter(|d| !d.is_empty()) {
            if wrote {
                f.write_str(": ")?;
            }
            write!(f, "{debug}")?;
            wrote = true;
        }
        if let Some(code) = node.code() {
            if wrote {
                f.write_str(": ")?;
            }
            write!(f, "code({code})")?;
            wrote = true;
        }
    }
    Ok(())
}

/// Renders the verbose multi-line report of the chain starting at `err`.
///
/// One block per node, head to tail: the node's innermost call-site location
/// as `[func] file:line`, then indented `message("...")`, `key = value`
/// lines in insertion order, and `code(<code>)`. The first foreign error
/// contributes its string form, indented. A consolidated `[CallStack]`
/// section closes the report, listing every frame of the merged call stack.
///
/// # Examples
///
/// ```
/// use failcode::{kv, message, new, report, StringCode};
///
/// let err = new(StringCode("db_down"))
///     .with(message("primary is unreachable"))
///     .with(kv! { "host" => "db-1" });
///
/// let text = report(&err);
/// assert!(text.contains("message(\"primary is unreachable\")"));
/// assert!(text.contains("host = db-1"));
/// assert!(text.contains("code(db_down)"));
/// assert_eq!(text, report(&err));
/// ```
pub fn report(err: &(dyn StdError + 'static)) -> String {
    let mut out = String::with_capacity(256);
    for link in Chain::new(err) {
        let Some(node) = link.downcast_ref::<Failure>() else {
            let _ = writeln!(out, "    {link}");
            break;
        };
        if let Some(stack) = node.call_stack() {
            let _ = writeln!(out, "{}", stack.head());
        }
        if let Some(msg) = node.message() {
            let _ = writeln!(out, "    message(\"{msg}\")");
        }
        if let Some(debug) = node.debug() {
            for (key, value) in debug.iter() {
                let _ = writeln!(out, "    {key} = {value}");
            }
        }
        if let Some(code) = node.code() {
            let _ = writeln!(out, "    code({code})");
        }
    }
    if let Some(merged) = query::callstack_of(err) {
        out.push_str("[CallStack]\n");
        for frame in merged.frames() {
            let _ = writeln!(out, "    {frame}");
        }
    }
    out
}
