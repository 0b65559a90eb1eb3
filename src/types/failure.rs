//! The chain link: a wrapped error plus code, message, debug, and call stack.

use core::fmt;
use std::error::Error as StdError;

use crate::callstack::{self, CallStack};
use crate::traits::{Code, IntoField};
use crate::types::{BoxError, DebugMap, Field};

/// One link in an error chain.
///
/// Carries an optional code, message, debug map, and captured call stack,
/// plus an exclusively-owned underlying error. Immutable once construction
/// finishes; safe to share and query from any number of threads.
///
/// Created by [`new`], [`wrap`], [`translate`], [`custom`], or
/// [`unexpected`] — there is no public field access or mutation.
///
/// # Examples
///
/// ```
/// use failcode::{new, wrap, StringCode};
///
/// let inner = new(StringCode("io"));
/// let outer = wrap(inner);
///
/// assert!(outer.code().is_none());
/// assert!(outer.underlying().is_some());
/// assert!(failcode::is_code(&outer, &StringCode("io")));
/// ```
#[derive(Debug)]
pub struct Failure {
    code: Option<Box<dyn Code>>,
    message: Option<String>,
    debug: Option<DebugMap>,
    call_stack: Option<CallStack>,
    underlying: Option<BoxError>,
}

/// Creates a fresh failure classified under `code`, with no underlying error.
///
/// Captures the call stack at the caller.
///
/// # Examples
///
/// ```
/// use failcode::{new, IntCode};
///
/// let err = new(IntCode(404));
/// assert!(failcode::is_code(&err, &IntCode(404)));
/// assert!(err.underlying().is_none());
/// ```
pub fn new(code: impl Code) -> Failure {
    Failure {
        code: Some(Box::new(code)),
        message: None,
        debug: None,
        call_stack: callstack::capture(0),
        underlying: None,
    }
}

/// Wraps `err` with call-site provenance, without reclassifying it.
///
/// The new node has no code of its own; queries pass through to the
/// underlying chain. Captures the call stack at the caller.
///
/// # Examples
///
/// ```
/// use failcode::wrap;
///
/// let err = wrap(std::io::Error::other("disk gone"));
/// assert!(err.code().is_none());
/// assert!(failcode::cause_of(&err).to_string().contains("disk gone"));
/// ```
pub fn wrap(err: impl Into<BoxError>) -> Failure {
    Failure {
        code: None,
        message: None,
        debug: None,
        call_stack: callstack::capture(0),
        underlying: Some(err.into()),
    }
}

/// Wraps `err` and reclassifies it under `code`.
///
/// The underlying error and its own classification stay reachable through
/// the chain; `code_of` sees the new code first. Captures the call stack at
/// the caller.
///
/// # Examples
///
/// ```
/// use failcode::{new, translate, code_of, StringCode};
///
/// let low = new(StringCode("io"));
/// let high = translate(low, StringCode("storage"));
///
/// let code = code_of(&high).unwrap();
/// assert!(code.eq_code(&StringCode("storage")));
/// ```
pub fn translate(err: impl Into<BoxError>, code: impl Code) -> Failure {
    Failure {
        code: Some(Box::new(code)),
        message: None,
        debug: None,
        call_stack: callstack::capture(0),
        underlying: Some(err.into()),
    }
}

/// Adapts a foreign error into the chain without adding provenance.
///
/// No code, no message, no debug map, and deliberately no call stack: the
/// short form of the result is exactly the foreign error's own string.
///
/// # Examples
///
/// ```
/// use failcode::custom;
///
/// let err = custom(std::io::Error::other("unexpected eof"));
/// assert_eq!(err.to_string(), "unexpected eof");
/// ```
pub fn custom(err: impl Into<BoxError>) -> Failure {
    Failure {
        code: None,
        message: None,
        debug: None,
        call_stack: None,
        underlying: Some(err.into()),
    }
}

/// Creates a failure for a condition that has no classification yet.
///
/// The text becomes the terminal error of the chain; the node itself carries
/// the captured call stack and any attached fields but no code.
///
/// # Examples
///
/// ```
/// use failcode::unexpected;
///
/// let err = unexpected("invariant violated");
/// assert!(err.to_string().ends_with("invariant violated"));
/// assert!(failcode::code_of(&err).is_none());
/// ```
pub fn unexpected(message: impl Into<String>) -> Failure {
    Failure {
        code: None,
        message: None,
        debug: None,
        call_stack: callstack::capture(0),
        underlying: Some(Box::new(Unexpected::new(message))),
    }
}

impl Failure {
    /// Attaches one context field, consuming and returning the node.
    ///
    /// Part of the construction phase: a later message overwrites, a later
    /// debug map merges key-by-key. No new call stack is captured.
    ///
    /// # Examples
    ///
    /// ```
    /// use failcode::{kv, message, new, StringCode};
    ///
    /// let err = new(StringCode("auth"))
    ///     .with(message("first"))
    ///     .with(message("second"))
    ///     .with(kv! { "user" => "42" });
    ///
    /// assert_eq!(err.message(), Some("second"));
    /// assert_eq!(err.debug().unwrap().get("user"), Some("42"));
    /// ```
    #[must_use]
    pub fn with(mut self, field: impl IntoField) -> Self {
        match field.into_field() {
            Field::Message(text) => self.message = Some(text),
            Field::Debug(map) => match self.debug.as_mut() {
                Some(existing) => existing.merge(map),
                None => self.debug = Some(map),
            },
        }
        self
    }

    /// Attaches a sequence of fields, applied in order.
    #[must_use]
    pub fn with_fields(self, fields: impl IntoIterator<Item = Field>) -> Self {
        fields.into_iter().fold(self, |node, field| node.with(field))
    }

    /// This node's own code, if any.
    #[inline]
    pub fn code(&self) -> Option<&dyn Code> {
        self.code.as_deref()
    }

    /// This node's own message, if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// This node's own debug map, if any.
    #[inline]
    pub fn debug(&self) -> Option<&DebugMap> {
        self.debug.as_ref()
    }

    /// The call stack captured when this node was constructed, if any.
    #[inline]
    pub fn call_stack(&self) -> Option<&CallStack> {
        self.call_stack.as_ref()
    }

    /// The wrapped error this node was built around, if any.
    pub fn underlying(&self) -> Option<&(dyn StdError + 'static)> {
        self.underlying
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

impl fmt::Display for Failure {
    /// Short form by default; the verbose report via `{:#}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&crate::report::report(self))
        } else {
            crate::report::write_short(self, f)
        }
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.underlying()
    }
}

/// Terminal error used by [`unexpected`].
///
/// Reachable through [`cause_of`](crate::query::cause_of) and downcasting
/// when callers need to recognize unclassified failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unexpected {
    message: String,
}

impl Unexpected {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The text this error was raised with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Unexpected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Unexpected {}
