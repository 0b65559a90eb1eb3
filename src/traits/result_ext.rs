//! Extension trait for wrapping `Result` errors at call boundaries.
//!
//! These adapters are the chain-building entry points most application code
//! should use: an `Ok` value passes through untouched, so call sites can wrap
//! unconditionally without checking for an error first.
//!
//! # Examples
//!
//! ```
//! use failcode::{ResultExt, StringCode};
//!
//! const CONFIG: StringCode = StringCode("config");
//!
//! fn load() -> Result<String, failcode::Failure> {
//!     std::fs::read_to_string("missing.toml").translate(CONFIG)
//! }
//!
//! assert!(load().is_err());
//! ```

use crate::traits::{Code, IntoField};
use crate::types::{BoxError, Failure};

/// Adds `wrap`/`translate` adapters to any `Result`.
///
/// Each adapter captures a call stack anchored at its own call site, so the
/// short form of the resulting failure names the function that did the
/// wrapping.
pub trait ResultExt<T> {
    /// Wraps the error with call-site provenance, keeping its classification.
    ///
    /// # Examples
    ///
    /// ```
    /// use failcode::ResultExt;
    ///
    /// let ok: Result<i32, std::io::Error> = Ok(7);
    /// assert_eq!(ok.wrap().unwrap(), 7);
    ///
    /// let err: Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));
    /// assert!(err.wrap().is_err());
    /// ```
    fn wrap(self) -> Result<T, Failure>;

    /// Wraps the error and attaches a lazily-built field.
    ///
    /// The closure only runs on the error path.
    ///
    /// # Examples
    ///
    /// ```
    /// use failcode::ResultExt;
    ///
    /// let user_id = 42;
    /// let err: Result<(), std::io::Error> = Err(std::io::Error::other("not found"));
    /// let failure = err.wrap_with(|| ("user_id", user_id.to_string())).unwrap_err();
    /// assert_eq!(failcode::debugs_of(&failure).len(), 1);
    /// ```
    fn wrap_with<F, D>(self, field: F) -> Result<T, Failure>
    where
        F: FnOnce() -> D,
        D: IntoField;

    /// Wraps the error and reclassifies it under `code`.
    ///
    /// # Examples
    ///
    /// ```
    /// use failcode::{ResultExt, IntCode};
    ///
    /// let err: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
    /// let failure = err.translate(IntCode(500)).unwrap_err();
    /// assert!(failcode::is_code(&failure, &IntCode(500)));
    /// ```
    fn translate<C: Code>(self, code: C) -> Result<T, Failure>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    #[inline]
    fn wrap(self) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(crate::types::wrap(err)),
        }
    }

    #[inline]
    fn wrap_with<F, D>(self, field: F) -> Result<T, Failure>
    where
        F: FnOnce() -> D,
        D: IntoField,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(crate::types::wrap(err).with(field())),
        }
    }

    #[inline]
    fn translate<C: Code>(self, code: C) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(crate::types::translate(err, code)),
        }
    }
}
