//! Conversion trait for construction-time context fields.
//!
//! Everything accepted by [`Failure::with`](crate::types::Failure::with) goes
//! through [`IntoField`]: plain strings become display messages, `(key, value)`
//! pairs and [`DebugMap`]s become debug context, and a [`Field`] passes through
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use failcode::{IntoField, Field};
//!
//! let msg = "user not found".into_field();
//! assert!(matches!(msg, Field::Message(_)));
//!
//! let pair = ("user_id", "42").into_field();
//! assert!(matches!(pair, Field::Debug(_)));
//! ```

use std::borrow::Cow;

use crate::types::{DebugMap, Field};

/// Converts a value into a construction [`Field`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be attached to a failure node",
    label = "this type does not implement `IntoField`",
    note = "pass a string message, a `(key, value)` pair, a `DebugMap`, or a `Field`"
)]
pub trait IntoField {
    /// Converts `self` into a [`Field`].
    fn into_field(self) -> Field;
}

impl IntoField for Field {
    #[inline]
    fn into_field(self) -> Field {
        self
    }
}

impl IntoField for String {
    #[inline]
    fn into_field(self) -> Field {
        Field::Message(self)
    }
}

impl IntoField for &str {
    #[inline]
    fn into_field(self) -> Field {
        Field::Message(self.to_string())
    }
}

impl IntoField for Cow<'_, str> {
    #[inline]
    fn into_field(self) -> Field {
        Field::Message(self.into_owned())
    }
}

impl IntoField for DebugMap {
    #[inline]
    fn into_field(self) -> Field {
        Field::Debug(self)
    }
}

impl<K: Into<String>, V: Into<String>> IntoField for (K, V) {
    /// A single `(key, value)` pair becomes a one-entry debug map.
    #[inline]
    fn into_field(self) -> Field {
        let mut map = DebugMap::new();
        map.insert(self.0, self.1);
        Field::Debug(map)
    }
}
