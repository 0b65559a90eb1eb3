//! Coded, inspectable error chains with automatically captured call stacks.
//!
//! Call sites attach a stable error code, a display message, and debug
//! key/value context to any error value; callers later recover that
//! structured information no matter how many times the error was wrapped on
//! its way up the call chain.
//!
//! # Examples
//!
//! ## Classifying an error
//!
//! ```
//! use failcode::{kv, message, new, translate, StringCode};
//!
//! const NOT_FOUND: StringCode = StringCode("not_found");
//! const STORAGE: StringCode = StringCode("storage");
//!
//! let err = new(NOT_FOUND)
//!     .with(message("user 42 is missing"))
//!     .with(kv! { "table" => "users" });
//! let err = translate(err, STORAGE);
//!
//! assert!(failcode::is_code(&err, &STORAGE));
//! assert_eq!(failcode::message_of(&err), Some("user 42 is missing"));
//! ```
//!
//! ## Wrapping at an I/O boundary
//!
//! ```
//! use failcode::{ResultExt, StringCode};
//!
//! const CONFIG: StringCode = StringCode("config");
//!
//! fn load_config() -> Result<String, failcode::Failure> {
//!     std::fs::read_to_string("definitely-not-here.toml").translate(CONFIG)
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(failcode::is_code(&err, &CONFIG));
//! assert!(failcode::code_of(&err).is_some());
//! ```
//!
//! ## Inspecting a chain
//!
//! ```
//! use failcode::{cause_of, new, wrap, IntCode};
//!
//! let root = new(IntCode(404));
//! let outer = wrap(root);
//!
//! assert!(failcode::is_code(&outer, &IntCode(404)));
//! assert!(cause_of(&outer).to_string().contains("code(404)"));
//! ```

/// Frame records, call stacks, and the capture seam.
pub mod callstack;
/// Traversal over chains of wrapped errors.
pub mod chain;
/// Macros for debug maps, formatted messages, and user code types.
pub mod macros;
/// Convenience re-exports for quick starts.
pub mod prelude;
/// Functions that recover code/message/debug/call-stack data from a chain.
pub mod query;
/// Short-form and verbose rendering of a chain.
pub mod report;
/// Core traits: code identity, field conversion, `Result` adapters.
pub mod traits;
/// The failure node, its constructors, and context field types.
pub mod types;

pub use callstack::{CallStack, Frame};
pub use chain::Chain;
pub use query::{callstack_of, cause_of, code_of, debugs_of, is_code, message_of};
pub use report::report;
pub use traits::{Code, IntoField, ResultExt};
pub use types::{
    custom, message, new, translate, unexpected, wrap, BoxError, DebugMap, Failure, Field, IntCode,
    StringCode, Unexpected,
};
