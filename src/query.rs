//! Recovering structured information from an error chain.
//!
//! Every function here walks the chain with [`Chain`] and tolerates foreign
//! links: a chain may freely mix [`Failure`] nodes with other error types,
//! and traversal passes through anything exposing a source. Nothing panics;
//! a chain lacking the requested information reports its absence.

use std::error::Error as StdError;

use crate::callstack::CallStack;
use crate::chain::Chain;
use crate::traits::Code;
use crate::types::{DebugMap, Failure};

/// Returns the first code in the chain, head to tail.
///
/// The nearest classification wins: translating an error puts the new code
/// in front of whatever the wrapped chain carried.
///
/// # Examples
///
/// ```
/// use failcode::{code_of, new, translate, wrap, StringCode};
///
/// let err = translate(wrap(new(StringCode("io"))), StringCode("storage"));
/// assert!(code_of(&err).unwrap().eq_code(&StringCode("storage")));
///
/// let unclassified = wrap(std::io::Error::other("boom"));
/// assert!(code_of(&unclassified).is_none());
/// ```
pub fn code_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn Code> {
    Chain::new(err).find_map(|link| link.downcast_ref::<Failure>()?.code())
}

/// Returns the first message in the chain, head to tail.
///
/// # Examples
///
/// ```
/// use failcode::{message, message_of, new, wrap, StringCode};
///
/// let err = wrap(new(StringCode("auth")).with(message("session expired")));
/// assert_eq!(message_of(&err), Some("session expired"));
/// ```
pub fn message_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a str> {
    Chain::new(err).find_map(|link| link.downcast_ref::<Failure>()?.message())
}

/// Collects every debug map in the chain, head to tail.
///
/// Nodes without a debug map are skipped; the empty vector means the chain
/// carries no debug context at all.
///
/// # Examples
///
/// ```
/// use failcode::{debugs_of, kv, new, wrap, StringCode};
///
/// let root = new(StringCode("db")).with(kv! { "table" => "users" });
/// let err = wrap(wrap(root).with(kv! { "retry" => "2" }));
///
/// let maps = debugs_of(&err);
/// assert_eq!(maps.len(), 2);
/// assert_eq!(maps[0].get("retry"), Some("2"));
/// assert_eq!(maps[1].get("table"), Some("users"));
/// ```
pub fn debugs_of<'a>(err: &'a (dyn StdError + 'static)) -> Vec<&'a DebugMap> {
    Chain::new(err)
        .filter_map(|link| link.downcast_ref::<Failure>()?.debug())
        .collect()
}

/// Returns the merged call stack of the chain.
///
/// Concatenates each node's own captured stack in head-to-tail node order,
/// preserving per-node frame order (innermost first). This is a join of the
/// per-wrap-point captures, not a deduplicated OS stack.
pub fn callstack_of(err: &(dyn StdError + 'static)) -> Option<CallStack> {
    let mut frames = Vec::new();
    for link in Chain::new(err) {
        if let Some(stack) = link.downcast_ref::<Failure>().and_then(Failure::call_stack) {
            frames.extend_from_slice(stack.frames());
        }
    }
    CallStack::from_frames(frames)
}

/// Returns the innermost error of the chain — the original trigger.
///
/// For a head with nothing wrapped, that is the head itself.
///
/// # Examples
///
/// ```
/// use failcode::{cause_of, custom};
///
/// let err = custom(std::io::Error::other("unexpected eof"));
/// let cause = cause_of(&err);
/// assert!(cause.downcast_ref::<std::io::Error>().is_some());
/// ```
pub fn cause_of<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    Chain::new(err).last().unwrap_or(err)
}

/// Whether the chain's first code equals `code`.
///
/// # Examples
///
/// ```
/// use failcode::{is_code, new, IntCode, StringCode};
///
/// let err = new(IntCode(404));
/// assert!(is_code(&err, &IntCode(404)));
/// assert!(!is_code(&err, &IntCode(500)));
/// assert!(!is_code(&err, &StringCode("404")));
/// ```
pub fn is_code(err: &(dyn StdError + 'static), code: &dyn Code) -> bool {
    code_of(err).is_some_and(|found| found.eq_code(code))
}
