//! Macros for building context fields and enrolling user code types.
//!
//! - [`kv!`](crate::kv) builds a debug-map [`Field`](crate::types::Field)
//!   from `key => value` pairs.
//! - [`message!`](crate::message!) builds a formatted message field, the
//!   counterpart of the plain [`message`](crate::types::message) helper.
//! - [`impl_code!`](crate::impl_code) wires a user type into the
//!   [`Code`](crate::traits::Code) contract.

/// Builds a debug-map [`Field`](crate::types::Field) from `key => value`
/// pairs.
///
/// Keys and values accept anything `Into<String>`. Pair order is preserved;
/// a repeated key keeps the first position and the last value.
///
/// # Examples
///
/// ```
/// use failcode::{kv, new, StringCode};
///
/// let err = new(StringCode("db")).with(kv! {
///     "table" => "users",
///     "attempt" => "3",
/// });
///
/// let debug = err.debug().unwrap();
/// assert_eq!(debug.get("table"), Some("users"));
/// assert_eq!(debug.len(), 2);
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        $crate::types::Field::Debug($crate::types::DebugMap::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::types::DebugMap::new();
        $( map.insert($key, $value); )+
        $crate::types::Field::Debug(map)
    }};
}

/// Builds a formatted message [`Field`](crate::types::Field).
///
/// Accepts the same arguments as [`format!`].
///
/// # Examples
///
/// ```
/// use failcode::{message, new, StringCode};
///
/// let user = 42;
/// let err = new(StringCode("auth")).with(message!("user {user} rejected"));
/// assert_eq!(failcode::message_of(&err), Some("user 42 rejected"));
/// ```
#[macro_export]
macro_rules! message {
    ($($arg:tt)*) => {
        $crate::types::Field::Message(::std::format!($($arg)*))
    };
}

/// Implements [`Code`](crate::traits::Code) for a user type.
///
/// The type must be `Debug + Display + PartialEq + Send + Sync + 'static`.
/// Equality against a differently-typed code is always `false`.
///
/// # Examples
///
/// ```
/// use failcode::{impl_code, Code};
///
/// #[derive(Debug, PartialEq)]
/// enum Domain {
///     Billing,
///     Shipping,
/// }
///
/// impl std::fmt::Display for Domain {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         match self {
///             Domain::Billing => f.write_str("billing"),
///             Domain::Shipping => f.write_str("shipping"),
///         }
///     }
/// }
///
/// impl_code!(Domain);
///
/// assert!(Domain::Billing.eq_code(&Domain::Billing));
/// assert!(!Domain::Billing.eq_code(&Domain::Shipping));
/// ```
#[macro_export]
macro_rules! impl_code {
    ($type:ty) => {
        impl $crate::traits::Code for $type {
            fn eq_code(&self, other: &dyn $crate::traits::Code) -> bool {
                other
                    .as_any()
                    .downcast_ref::<$type>()
                    .is_some_and(|other| self == other)
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };
}
