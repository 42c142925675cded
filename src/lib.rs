//! Warden - type-aware argument checks for Rust
//!
//! # Overview
//!
//! Warden validates values and reports failures with messages that name the
//! parameter, its type and the offending value. It is built from three pieces:
//!
//! - Bitwise comparison of fixed-layout values
//! - Human-readable type names from explicit type descriptors
//! - A thread-safe cache of those names, keyed by descriptor identity
//!
//! # Quick Start
//!
//! ```
//! use warden::{Bump, DisplayNames, Guard, TypeRegistry, guard};
//!
//! // Type descriptors live in an arena
//! let arena = Bump::new();
//! let registry = TypeRegistry::new(&arena);
//! let names = DisplayNames::new();
//! let g = Guard::new(registry, &names);
//!
//! let count = 12;
//! let err = guard!(g, is_less_than(count, 10)).unwrap_err();
//! assert_eq!(err.to_string(), "Parameter \"count\" (int) must be less than 10, was 12");
//!
//! // Names are computed once per descriptor
//! assert_eq!(&*names.type_string(registry.of::<Vec<Option<i32>>>()), "int?[]");
//! ```
//!
//! # Describing Types
//!
//! Primitives, tuples, arrays, `Option`, references and raw pointers are
//! described out of the box. Other types implement [`Describe`]:
//!
//! ```
//! use warden::{Bump, Describe, TypeDesc, TypeRegistry, format_type};
//!
//! struct Matrix<T>(Vec<T>);
//!
//! impl<'a, T: Describe<'a>> Describe<'a> for Matrix<T> {
//!     fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
//!         let definition = registry.named("Math", "Matrix`1");
//!         registry.construct(definition, &[T::describe(registry)])
//!     }
//! }
//!
//! let arena = Bump::new();
//! let registry = TypeRegistry::new(&arena);
//! assert_eq!(format_type(registry.of::<Matrix<f64>>()), "Math.Matrix<double>");
//! ```

pub use bumpalo::Bump;

// Re-export public API from warden_types
pub use warden_types::{
    CacheOptions, Describe, DisplayNames, NamedType, Primitive, TypeDesc, TypeRegistry,
    format_type, format_type_into,
};

// Re-export checks and helpers from warden_core
pub use warden_core::{
    Guard, GuardError, GuardOptions, get_column, guard, is_bitwise_equal, to_array_string,
    to_hex_string, to_jagged_string,
};
