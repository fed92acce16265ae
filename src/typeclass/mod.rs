//! Algebraic type classes.
//!
//! - [`Semigroup`]: Types with an associative binary operation (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//!
//! [`OrderedMultimap`](crate::persistent::OrderedMultimap) is a monoid:
//! `combine` is `append` and `empty` is the empty list.
//!
//! # Examples
//!
//! ```rust
//! use kwlist::persistent::OrderedMultimap;
//! use kwlist::typeclass::{Monoid, Semigroup};
//!
//! let lists = vec![
//!     OrderedMultimap::from(vec![("a", 1)]),
//!     OrderedMultimap::from(vec![("b", 2)]),
//!     OrderedMultimap::from(vec![("a", 3)]),
//! ];
//! let combined = OrderedMultimap::combine_all(lists);
//!
//! let keys: Vec<&str> = combined.keys().map(|key| key.as_str()).collect();
//! assert_eq!(keys, vec!["a", "b", "a"]);
//! assert!(OrderedMultimap::<i32>::empty().is_empty());
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
