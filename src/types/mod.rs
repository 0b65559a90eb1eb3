//! The failure node, its constructors, and the context field types.
//!
//! # Examples
//!
//! ```
//! use failcode::{kv, message, new, StringCode};
//!
//! let err = new(StringCode("db_down"))
//!     .with(message("primary is unreachable"))
//!     .with(kv! { "host" => "db-1" });
//!
//! assert!(err.to_string().contains("code(db_down)"));
//! ```

use smallvec::SmallVec;

pub mod code;
pub mod failure;
pub mod field;

pub use code::{IntCode, StringCode};
pub use failure::{custom, new, translate, unexpected, wrap, Failure, Unexpected};
pub use field::{message, DebugMap, Field};

/// Boxed error trait object used for the underlying link of a chain.
///
/// Anything implementing `std::error::Error + Send + Sync` converts into it,
/// including every [`Failure`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// SmallVec-backed storage for debug-map entries.
///
/// Inline capacity covers the common case of a handful of entries per node
/// without a heap allocation.
pub type EntryVec = SmallVec<[(String, String); 4]>;
