//! The error-code contract.
//!
//! A code is an opaque identity token attached to a failure node and used for
//! programmatic branching. The two built-in carriers are
//! [`StringCode`](crate::types::StringCode) and
//! [`IntCode`](crate::types::IntCode); any user type that is comparable for
//! equality and printable as a short token can join the contract via the
//! [`impl_code!`](crate::impl_code) macro.
//!
//! # Examples
//!
//! ```
//! use failcode::{impl_code, Code, StringCode};
//!
//! #[derive(Debug, PartialEq)]
//! struct HttpStatus(u16);
//!
//! impl std::fmt::Display for HttpStatus {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "http_{}", self.0)
//!     }
//! }
//!
//! impl_code!(HttpStatus);
//!
//! assert!(HttpStatus(404).eq_code(&HttpStatus(404)));
//! assert!(!HttpStatus(404).eq_code(&StringCode("not_found")));
//! ```

use core::any::Any;
use core::fmt::{Debug, Display};

/// Identity token attached to a failure node.
///
/// Equality is by concrete type plus value: comparing two different carrier
/// types is always `false`, which is what makes codes safe to use for
/// branching across library boundaries.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error code",
    label = "this type does not implement `Code`",
    note = "derive `Debug` and `PartialEq`, implement `Display`, then use `impl_code!({Self})`"
)]
pub trait Code: Any + Debug + Display + Send + Sync {
    /// Compares this code against another, possibly differently-typed, code.
    fn eq_code(&self, other: &dyn Code) -> bool;

    /// Upcast used by [`eq_code`](Code::eq_code) implementations to recover
    /// the concrete type on the other side.
    fn as_any(&self) -> &dyn Any;
}
