//! # kwlist
//!
//! An immutable, order-preserving keyword list for Rust.
//!
//! ## Overview
//!
//! [`OrderedMultimap`](persistent::OrderedMultimap) is an association list
//! that keeps insertion order and allows duplicate keys. It offers
//! multimap-style operations (lookup, insertion, deletion, splitting,
//! counting, transformation) that always return new instances.
//!
//! - **Persistent Data Structures**: `OrderedMultimap`, `Keyword`
//! - **Type Classes**: `Semigroup`, `Monoid`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (`Semigroup`, `Monoid`)
//! - `persistent`: The keyword list and its key type
//! - `arc`: Thread-safe reference counting (enabled by default)
//! - `serde`: Serialization as a sequence of `[key, value]` pairs
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kwlist::prelude::*;
//!
//! let list = ordered_multimap!["a" => 1, "b" => 2; a = 3];
//!
//! assert_eq!(list.get("a"), Some(&1));
//! assert_eq!(list.count("a"), 2);
//! assert_eq!(list.put("a", 4), vec![("b", 2), ("a", 4)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kwlist::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "persistent")]
    pub use crate::ordered_multimap;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
