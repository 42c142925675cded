//! Type descriptors and their human-readable names.
//!
//! This crate provides an explicit, statically-constructed description of
//! types (`TypeDesc`), an arena-backed registry that interns descriptors, and
//! a thread-safe cache of display names keyed by descriptor identity.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use warden_types::{DisplayNames, TypeRegistry};
//!
//! let arena = Bump::new();
//! let registry = TypeRegistry::new(&arena);
//! let names = DisplayNames::new();
//!
//! let pair = registry.named("", "Pair`2");
//! let ty = registry.construct(pair, &[registry.int(), registry.string()]);
//! assert_eq!(&*names.type_string(ty), "Pair<int, string>");
//! assert_eq!(&*names.type_string(registry.of::<Option<i32>>()), "int?");
//! ```

pub mod cache;
pub mod desc;
pub mod describe;
pub mod display;
pub mod registry;

#[cfg(test)]
mod registry_test;

pub use cache::{CacheOptions, DisplayNames};
pub use desc::{NamedType, Primitive, TypeDesc};
pub use describe::Describe;
pub use display::{format_type, format_type_into};
pub use registry::{MAX_TUPLE_ARITY, TypeRegistry};
