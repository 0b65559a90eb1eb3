//! Core traits for code identity, field conversion, and `Result` adapters.
//!
//! - [`Code`]: the contract any error-code type satisfies
//! - [`IntoField`]: conversion into a construction-time context field
//! - [`ResultExt`]: `wrap`/`translate` adapters on `Result`

pub mod code;
pub mod into_field;
pub mod result_ext;

pub use code::Code;
pub use into_field::IntoField;
pub use result_ext::ResultExt;
