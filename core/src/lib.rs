//! Runtime checks built on type descriptors.
//!
//! - [`bitwise`]: raw-representation equality for fixed-layout values.
//! - [`guard`]: argument checks whose failures name the parameter and its type.
//! - [`array`]: column access and string rendering for nested arrays.

pub mod array;
pub mod bitwise;
pub mod error;
pub mod guard;
pub mod options;

pub use array::{get_column, to_array_string, to_jagged_string};
pub use bitwise::{is_bitwise_equal, to_hex_string};
pub use error::GuardError;
pub use guard::Guard;
pub use options::GuardOptions;
