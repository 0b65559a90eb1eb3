//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use failcode::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Constructors**: [`new`], [`wrap`], [`translate`], [`custom`],
//!   [`unexpected`]
//! - **Queries**: [`code_of`], [`message_of`], [`debugs_of`],
//!   [`callstack_of`], [`cause_of`], [`is_code`], [`report`]
//! - **Types**: [`Failure`], [`StringCode`], [`IntCode`], [`Field`],
//!   [`DebugMap`], [`CallStack`], [`Frame`]
//! - **Traits**: [`Code`], [`IntoField`], [`ResultExt`]
//! - **Macros**: [`kv!`](crate::kv), [`message!`](crate::message!),
//!   [`impl_code!`](crate::impl_code)
//!
//! # Examples
//!
//! ```
//! use failcode::prelude::*;
//!
//! const PARSE: StringCode = StringCode("parse");
//!
//! fn parse_port(raw: &str) -> Result<u16, Failure> {
//!     raw.trim().parse().translate(PARSE)
//! }
//!
//! assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
//! assert!(is_code(&parse_port("eighty").unwrap_err(), &PARSE));
//! ```

pub use crate::{impl_code, kv, message};

pub use crate::callstack::{CallStack, Frame};
pub use crate::chain::Chain;
pub use crate::query::{callstack_of, cause_of, code_of, debugs_of, is_code, message_of};
pub use crate::report::report;
pub use crate::traits::{Code, IntoField, ResultExt};
pub use crate::types::{
    custom, new, translate, unexpected, wrap, BoxError, DebugMap, Failure, Field, IntCode,
    StringCode,
};
