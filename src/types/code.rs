//! Built-in error-code carriers.

use core::fmt;

use crate::impl_code;

/// Error code backed by a static string.
///
/// `const`-constructible, so domains can declare their codes once:
///
/// ```
/// use failcode::StringCode;
///
/// const NOT_FOUND: StringCode = StringCode("not_found");
/// const FORBIDDEN: StringCode = StringCode("forbidden");
///
/// assert_eq!(NOT_FOUND.to_string(), "not_found");
/// assert_ne!(NOT_FOUND, FORBIDDEN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StringCode(pub &'static str);

impl fmt::Display for StringCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Error code backed by an integer.
///
/// ```
/// use failcode::IntCode;
///
/// const TIMEOUT: IntCode = IntCode(504);
///
/// assert_eq!(TIMEOUT.to_string(), "504");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntCode(pub i64);

impl fmt::Display for IntCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_code!(StringCode);
impl_code!(IntCode);
