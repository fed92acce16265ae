//! Persistent (immutable) keyword lists.
//!
//! This module provides [`OrderedMultimap`], an immutable, order-preserving
//! association list that allows duplicate keys, together with its key type
//! [`Keyword`] and its error types.
//!
//! # Structural Sharing
//!
//! Every instance holds a reference-counted backing slice. Operations never
//! write to that slice: they build a new one, or hand back the same one when
//! nothing changed.
//!
//! # Examples
//!
//! ```rust
//! use kwlist::persistent::OrderedMultimap;
//!
//! let list = OrderedMultimap::from(vec![("a", 1), ("b", 2)]);
//!
//! // The original list is preserved
//! let updated = list.put("a", 10);
//! assert_eq!(list.get("a"), Some(&1));      // Original unchanged
//! assert_eq!(updated.get("a"), Some(&10));  // New version
//!
//! // Splitting partitions the entries
//! let (matched, remainder) = updated.split(["a"]);
//! assert_eq!(matched.len() + remainder.len(), updated.len());
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// so lists can be shared across threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod keyword;
mod macros;
mod ordered_multimap;

pub use error::InvalidKeyError;
pub use error::KeyNotFoundError;
pub use error::OrderedMultimapError;
pub use keyword::IntoKeyword;
pub use keyword::Keyword;
pub use ordered_multimap::DEFAULT_DEBUG_ITEMS;
pub use ordered_multimap::Entries;
pub use ordered_multimap::GetAll;
pub use ordered_multimap::Keys;
pub use ordered_multimap::OrderedMultimap;
pub use ordered_multimap::ValueMatch;
pub use ordered_multimap::Values;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(OrderedMultimap<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Keyword: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(OrderedMultimap<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
