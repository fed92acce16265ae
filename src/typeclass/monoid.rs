//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use kwlist::persistent::OrderedMultimap;
/// use kwlist::typeclass::{Monoid, Semigroup};
///
/// let list = OrderedMultimap::from(vec![("a", 1)]);
/// assert_eq!(OrderedMultimap::empty().combine(list.clone()), list);
/// assert_eq!(list.clone().combine(OrderedMultimap::empty()), list);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Returns the identity element for empty iterators.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}
