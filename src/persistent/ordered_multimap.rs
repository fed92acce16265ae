//! Persistent, order-preserving association list with duplicate keys.
//!
//! This module provides [`OrderedMultimap`], an immutable "keyword list": an
//! ordered sequence of `(key, value)` entries in which the same key may occur
//! any number of times.
//!
//! # Overview
//!
//! `OrderedMultimap` wraps a single reference-counted backing slice. Every
//! operation that looks like a mutation (`put`, `delete`, `update`, ...)
//! builds a new backing slice and returns a new instance; the receiver is
//! never touched. Operations that turn out to change nothing return an
//! instance sharing the receiver's backing slice.
//!
//! Lookups are linear scans by key. Keyword lists are meant to be small and
//! insertion order matters, so there is no hashing index.
//!
//! # Equality
//!
//! Two lists are equal when they hold the same multiset of entries: the same
//! distinct keys and, for every key, the same values with the same
//! multiplicities. Order is not significant.
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity |
//! |---------------------------|------------|
//! | `len` / `is_empty`        | O(1)       |
//! | `get` / `contains_key`    | O(n)       |
//! | `get_all` / `count`       | O(n)       |
//! | `append` / `prepend`      | O(n + m)   |
//! | `put` / `delete` / `drop` | O(n)       |
//! | `split` / `transform`     | O(n)       |
//! | `==`                      | O(n²)      |
//!
//! # Examples
//!
//! ```rust
//! use kwlist::persistent::OrderedMultimap;
//!
//! let options = OrderedMultimap::from(vec![("include", "src"), ("exclude", "target")]);
//! let more = options.append(vec![("include", "tests")]);
//!
//! // The original is unchanged
//! assert_eq!(options.len(), 2);
//! assert_eq!(more.len(), 3);
//!
//! // Duplicate keys are kept in order
//! let includes: Vec<&&str> = more.get_all("include").collect();
//! assert_eq!(includes, vec![&"src", &"tests"]);
//!
//! // `put` collapses every entry for a key into one entry at the end
//! let replaced = more.put("include", "benches");
//! assert_eq!(replaced.count("include"), 1);
//! assert_eq!(replaced.keys().last().map(|key| key.as_str()), Some("include"));
//!
//! // Order is ignored by equality
//! assert_eq!(replaced, vec![("include", "benches"), ("exclude", "target")]);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Index, Mul};

use super::ReferenceCounter;
use super::error::{InvalidKeyError, KeyNotFoundError};
use super::keyword::{IntoKeyword, Keyword};
use crate::typeclass::{Monoid, Semigroup};

/// Number of entries rendered by the [`Debug`](fmt::Debug) implementation.
pub const DEFAULT_DEBUG_ITEMS: usize = 50;

/// Selects which entries [`OrderedMultimap::delete`] removes for a key.
///
/// A reference to a value converts into [`ValueMatch::Equal`], so callers can
/// pass `&value` directly.
#[derive(Debug)]
pub enum ValueMatch<'a, V> {
    /// Every entry for the key.
    Any,
    /// Only entries whose value equals the given one.
    Equal(&'a V),
}

impl<V> Clone for ValueMatch<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ValueMatch<'_, V> {}

impl<'a, V> From<&'a V> for ValueMatch<'a, V> {
    fn from(value: &'a V) -> Self {
        Self::Equal(value)
    }
}

impl<V: PartialEq> ValueMatch<'_, V> {
    fn matches(&self, value: &V) -> bool {
        match self {
            Self::Any => true,
            Self::Equal(expected) => *expected == value,
        }
    }
}

/// A persistent, order-preserving list of `(Keyword, V)` entries that allows
/// duplicate keys.
///
/// All operations are immutable and return new instances.
///
/// # Type Parameters
///
/// * `V` - The value type. Operations that copy entries into a new list
///   require `V: Clone`; equality requires `V: PartialEq`.
///
/// # Examples
///
/// ```rust
/// use kwlist::persistent::OrderedMultimap;
///
/// let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("a", 3)]);
///
/// assert_eq!(list.get("a"), Some(&1));
/// assert_eq!(list.count("a"), 2);
///
/// // Iterating a list yields its keys
/// let mut keys = Vec::new();
/// for key in &list {
///     keys.push(key.as_str());
/// }
/// assert_eq!(keys, vec!["a", "b", "a"]);
/// ```
pub struct OrderedMultimap<V> {
    entries: ReferenceCounter<[(Keyword, V)]>,
}

impl<V> Clone for OrderedMultimap<V> {
    fn clone(&self) -> Self {
        Self {
            entries: ReferenceCounter::clone(&self.entries),
        }
    }
}

impl<V> Default for OrderedMultimap<V> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Construction and Read Operations
// =============================================================================

impl<V> OrderedMultimap<V> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list: OrderedMultimap<i32> = OrderedMultimap::new();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Creates a list holding a single entry.
    #[must_use]
    pub fn singleton(key: impl Into<Keyword>, value: V) -> Self {
        Self::from_entries(vec![(key.into(), value)])
    }

    /// Creates a list from `(key, value)` pairs, validating every key first.
    ///
    /// Keys may be anything implementing [`IntoKeyword`]. Nothing is built
    /// unless every key is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] for the first key that is not a valid keyword.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::try_from_pairs(vec![(b"a".to_vec(), 1)]).unwrap();
    /// assert_eq!(list.get("a"), Some(&1));
    ///
    /// let invalid = OrderedMultimap::try_from_pairs(vec![(vec![0xff_u8], 1)]);
    /// assert!(invalid.is_err());
    /// ```
    pub fn try_from_pairs<I, K>(pairs: I) -> Result<Self, InvalidKeyError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoKeyword,
    {
        Self::try_from_parts(pairs, std::iter::empty::<(&str, V)>())
    }

    /// Creates a list from positional pairs followed by named pairs.
    ///
    /// The named pairs are appended after the positional ones, in the order
    /// given. This is what the [`ordered_multimap!`](crate::ordered_multimap)
    /// macro expands to.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] for the first key that is not a valid keyword.
    pub fn try_from_parts<P, K, N, L>(positional: P, named: N) -> Result<Self, InvalidKeyError>
    where
        P: IntoIterator<Item = (K, V)>,
        K: IntoKeyword,
        N: IntoIterator<Item = (L, V)>,
        L: IntoKeyword,
    {
        let positional = positional
            .into_iter()
            .map(|(key, value)| key.into_keyword().map(|key| (key, value)));
        let named = named
            .into_iter()
            .map(|(key, value)| key.into_keyword().map(|key| (key, value)));

        positional
            .chain(named)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_entries)
            .inspect_err(|error| {
                tracing::debug!(%error, "rejected key while building OrderedMultimap");
            })
    }

    fn from_entries(entries: Vec<(Keyword, V)>) -> Self {
        Self {
            entries: ReferenceCounter::from(entries),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(entry_key, _)| entry_key == key)
    }

    /// Returns the total number of entries, counting duplicates.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value of the first entry for `key`, or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1), ("a", 2)]);
    /// assert_eq!(list.get("a"), Some(&1));
    /// assert_eq!(list.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    /// Returns the value of the first entry for `key`, or `default`.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns the value of the first entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if there is no entry for `key`.
    pub fn try_get(&self, key: &str) -> Result<&V, KeyNotFoundError> {
        self.get(key).ok_or_else(|| KeyNotFoundError::new(key))
    }

    /// Returns every value stored under `key`, in list order.
    ///
    /// The iterator is lazy; call `get_all` again to restart it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("a", 3)]);
    /// let values: Vec<i32> = list.get_all("a").copied().collect();
    /// assert_eq!(values, vec![1, 3]);
    /// assert_eq!(list.get_all("z").count(), 0);
    /// ```
    #[must_use]
    pub fn get_all<'a>(&'a self, key: &'a str) -> GetAll<'a, V> {
        GetAll {
            inner: self.entries.iter(),
            key,
        }
    }

    /// Returns `true` if at least one entry has the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns the number of entries for `key`.
    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.get_all(key).count()
    }

    /// Returns every key in list order, duplicates included.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, V> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    /// Returns every value in list order, parallel to [`keys`](Self::keys).
    #[must_use]
    pub fn values(&self) -> Values<'_, V> {
        Values {
            inner: self.entries.iter(),
        }
    }

    /// Returns every `(key, value)` entry in list order.
    #[must_use]
    pub fn entries(&self) -> Entries<'_, V> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// Returns a new list where every value is replaced by `function(value)`.
    ///
    /// Keys, order and length are unchanged. The value type may change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1), ("b", 2)]);
    /// let labels = list.transform(|value| format!("#{value}"));
    /// assert_eq!(labels, vec![("a", "#1".to_string()), ("b", "#2".to_string())]);
    /// ```
    #[must_use]
    pub fn transform<W, F>(&self, mut function: F) -> OrderedMultimap<W>
    where
        F: FnMut(&V) -> W,
    {
        OrderedMultimap::from_entries(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), function(value)))
                .collect(),
        )
    }
}

impl<V: fmt::Debug> OrderedMultimap<V> {
    /// Renders at most `max_items` entries as `OrderedMultimap[key: value, ...]`.
    ///
    /// Values use their `Debug` representation. `", ..."` is appended when
    /// entries were left out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", "x"), ("b", "y")]);
    /// assert_eq!(list.to_debug_string(50), "OrderedMultimap[a: \"x\", b: \"y\"]");
    /// assert_eq!(list.to_debug_string(1), "OrderedMultimap[a: \"x\", ...]");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a rendered value's `Debug` implementation returns an error,
    /// like `format!` does.
    #[must_use]
    pub fn to_debug_string(&self, max_items: usize) -> String {
        DebugEntries {
            list: self,
            max_items,
        }
        .to_string()
    }

    fn write_debug<W: fmt::Write>(&self, writer: &mut W, max_items: usize) -> fmt::Result {
        writer.write_str("OrderedMultimap[")?;
        for (index, (key, value)) in self.entries.iter().take(max_items).enumerate() {
            if index > 0 {
                writer.write_str(", ")?;
            }
            write!(writer, "{key}: {value:?}")?;
        }
        if self.len() > max_items {
            writer.write_str(", ...")?;
        }
        writer.write_str("]")
    }
}

/// Renders a list through [`OrderedMultimap::write_debug`] with a custom item limit.
struct DebugEntries<'a, V> {
    list: &'a OrderedMultimap<V>,
    max_items: usize,
}

impl<V: fmt::Debug> fmt::Display for DebugEntries<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.write_debug(formatter, self.max_items)
    }
}

// =============================================================================
// Persistent Mutators
// =============================================================================

impl<V: Clone> OrderedMultimap<V> {
    fn retain<P>(&self, mut keep: P) -> Self
    where
        P: FnMut(&Keyword, &V) -> bool,
    {
        Self::from_entries(
            self.entries
                .iter()
                .filter(|(key, value)| keep(key, value))
                .cloned()
                .collect(),
        )
    }

    fn concat(first: &[(Keyword, V)], second: &[(Keyword, V)]) -> Self {
        let mut entries = Vec::with_capacity(first.len() + second.len());
        entries.extend_from_slice(first);
        entries.extend_from_slice(second);
        Self::from_entries(entries)
    }

    /// Returns a new list with `other`'s entries after this list's entries.
    ///
    /// `other` may be another list, a reference to one, or a `Vec` / array of
    /// `(key, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1)]);
    /// let appended = list.append(vec![("b", 2)]);
    ///
    /// let keys: Vec<&str> = appended.keys().map(|key| key.as_str()).collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn append<O: Into<Self>>(&self, other: O) -> Self {
        let other = other.into();
        if other.is_empty() {
            self.clone()
        } else if self.is_empty() {
            other
        } else {
            Self::concat(&self.entries, &other.entries)
        }
    }

    /// Returns a new list with `other`'s entries before this list's entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1)]);
    /// let prepended = list.prepend(vec![("b", 2)]);
    ///
    /// let keys: Vec<&str> = prepended.keys().map(|key| key.as_str()).collect();
    /// assert_eq!(keys, vec!["b", "a"]);
    /// ```
    #[must_use]
    pub fn prepend<O: Into<Self>>(&self, other: O) -> Self {
        let other: Self = other.into();
        other.append(self)
    }

    /// Appends raw `(key, value)` pairs, validating their keys first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] if any key is not a valid keyword.
    pub fn try_append<I, K>(&self, pairs: I) -> Result<Self, InvalidKeyError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoKeyword,
    {
        Self::try_from_pairs(pairs).map(|other| self.append(other))
    }

    /// Prepends raw `(key, value)` pairs, validating their keys first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] if any key is not a valid keyword.
    pub fn try_prepend<I, K>(&self, pairs: I) -> Result<Self, InvalidKeyError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoKeyword,
    {
        Self::try_from_pairs(pairs).map(|other| self.prepend(other))
    }

    /// Returns a new list containing this list's entries `count` times in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1), ("b", 2)]);
    /// assert_eq!(list.repeat(3).len(), 6);
    /// assert!(list.repeat(0).is_empty());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with `capacity overflow` if the repeated length does not fit in
    /// a `usize`. An empty list can be repeated any number of times.
    #[must_use]
    pub fn repeat(&self, count: usize) -> Self {
        match count {
            0 => Self::new(),
            _ if count == 1 || self.is_empty() => self.clone(),
            _ => {
                let Some(length) = self.len().checked_mul(count) else {
                    panic!("capacity overflow");
                };
                let mut entries = Vec::with_capacity(length);
                for _ in 0..count {
                    entries.extend_from_slice(&self.entries);
                }
                Self::from_entries(entries)
            }
        }
    }

    /// Returns a new list where every entry for `key` is replaced by a single
    /// `(key, value)` entry at the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("a", 3)]);
    /// let updated = list.put("a", 9);
    ///
    /// let entries: Vec<(&str, i32)> = updated
    ///     .entries()
    ///     .map(|(key, value)| (key.as_str(), *value))
    ///     .collect();
    /// assert_eq!(entries, vec![("b", 2), ("a", 9)]);
    /// ```
    #[must_use]
    pub fn put(&self, key: impl Into<Keyword>, value: V) -> Self {
        let key = key.into();
        let mut entries: Vec<(Keyword, V)> = self
            .entries
            .iter()
            .filter(|(entry_key, _)| *entry_key != key)
            .cloned()
            .collect();
        entries.push((key, value));
        Self::from_entries(entries)
    }

    /// Returns a new list with `(key, value)` appended, unless `key` already
    /// has an entry, in which case the list is returned unchanged.
    #[must_use]
    pub fn put_if_absent(&self, key: impl Into<Keyword>, value: V) -> Self {
        let key = key.into();
        if self.contains_key(&key) {
            self.clone()
        } else {
            let mut entries = Vec::with_capacity(self.len() + 1);
            entries.extend_from_slice(&self.entries);
            entries.push((key, value));
            Self::from_entries(entries)
        }
    }

    /// Returns a new list without the entries for `key` selected by `value`.
    ///
    /// [`ValueMatch::Any`] removes every entry for `key`; passing `&value`
    /// removes only entries holding that value. Returns the list unchanged
    /// when nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::{OrderedMultimap, ValueMatch};
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1), ("a", 2), ("b", 1)]);
    ///
    /// assert_eq!(list.delete("a", ValueMatch::Any), vec![("b", 1)]);
    /// assert_eq!(list.delete("a", &2), vec![("a", 1), ("b", 1)]);
    /// ```
    #[must_use]
    pub fn delete<'v, M>(&self, key: &str, value: M) -> Self
    where
        M: Into<ValueMatch<'v, V>>,
        V: PartialEq + 'v,
    {
        let selector = value.into();
        let is_target = |entry_key: &Keyword, entry_value: &V| {
            entry_key == key && selector.matches(entry_value)
        };

        if self
            .entries
            .iter()
            .any(|(entry_key, entry_value)| is_target(entry_key, entry_value))
        {
            self.retain(|entry_key, entry_value| !is_target(entry_key, entry_value))
        } else {
            self.clone()
        }
    }

    /// Returns a new list without the first entry for `key`.
    ///
    /// Later entries for the same key are kept.
    #[must_use]
    pub fn delete_first(&self, key: &str) -> Self {
        self.position(key).map_or_else(
            || self.clone(),
            |position| Self::concat(&self.entries[..position], &self.entries[position + 1..]),
        )
    }

    /// Returns a new list where `key` holds `function(first value)`.
    ///
    /// When `key` is present this behaves as `put(key, function(first))`: the
    /// function sees only the first value, and every entry for `key`
    /// collapses into one entry at the end. When `key` is absent, `initial`
    /// is inserted with [`put_if_absent`](Self::put_if_absent).
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` is absent and `initial` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("a", 3)]);
    ///
    /// let updated = list.update("a", |count| count + 1, None).unwrap();
    /// assert_eq!(updated, vec![("b", 2), ("a", 2)]);
    ///
    /// let inserted = list.update("c", |count| count + 1, Some(0)).unwrap();
    /// assert_eq!(inserted.get("c"), Some(&0));
    ///
    /// assert!(list.update("c", |count| count + 1, None).is_err());
    /// ```
    pub fn update<F>(
        &self,
        key: impl Into<Keyword>,
        function: F,
        initial: Option<V>,
    ) -> Result<Self, KeyNotFoundError>
    where
        F: FnOnce(&V) -> V,
    {
        let key = key.into();
        match (self.get(&key), initial) {
            (Some(current), _) => {
                let updated = function(current);
                Ok(self.put(key, updated))
            }
            (None, Some(initial)) => Ok(self.put_if_absent(key, initial)),
            (None, None) => {
                tracing::debug!(%key, "update on missing key without an initial value");
                Err(KeyNotFoundError::new(key))
            }
        }
    }

    /// Returns a new list without any entry whose key is in `keys`.
    #[must_use]
    pub fn drop<I>(&self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keys = KeySet::new(keys);
        self.retain(|key, _| !keys.contains(key))
    }

    /// Returns a new list with only the entries whose key is in `keys`.
    #[must_use]
    pub fn take<I>(&self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keys = KeySet::new(keys);
        self.retain(|key, _| keys.contains(key))
    }

    /// Partitions the entries by whether their key is in `keys`.
    ///
    /// Returns `(matched, remainder)`. Both keep the original relative order,
    /// and every entry lands in exactly one of them. Keys without entries are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("c", 3)]);
    /// let (matched, remainder) = list.split(["a", "c", "e"]);
    ///
    /// assert_eq!(matched, vec![("a", 1), ("c", 3)]);
    /// assert_eq!(remainder, vec![("b", 2)]);
    /// ```
    #[must_use]
    pub fn split<I>(&self, keys: I) -> (Self, Self)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keys = KeySet::new(keys);
        let (matched, remainder): (Vec<_>, Vec<_>) = self
            .entries
            .iter()
            .cloned()
            .partition(|(key, _)| keys.contains(key));
        (Self::from_entries(matched), Self::from_entries(remainder))
    }

    /// Returns a new list where `function` is applied to the values whose key
    /// satisfies `key_predicate`.
    ///
    /// Other entries are copied unchanged. Keys, order and length are
    /// preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kwlist::persistent::OrderedMultimap;
    ///
    /// let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("a", 3)]);
    /// let doubled = list.transform_where(|value| value * 2, |key| key == "a");
    /// assert_eq!(doubled, vec![("a", 2), ("b", 2), ("a", 6)]);
    /// ```
    #[must_use]
    pub fn transform_where<F, P>(&self, mut function: F, mut key_predicate: P) -> Self
    where
        F: FnMut(&V) -> V,
        P: FnMut(&str) -> bool,
    {
        Self::from_entries(
            self.entries
                .iter()
                .map(|(key, value)| {
                    let value = if key_predicate(key) {
                        function(value)
                    } else {
                        value.clone()
                    };
                    (key.clone(), value)
                })
                .collect(),
        )
    }
}

/// The key argument of `drop`, `take` and `split`.
struct KeySet<S> {
    keys: Vec<S>,
}

impl<S: AsRef<str>> KeySet<S> {
    fn new<I: IntoIterator<Item = S>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|candidate| candidate.as_ref() == key)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the keys of an [`OrderedMultimap`], duplicates included.
pub struct Keys<'a, V> {
    inner: std::slice::Iter<'a, (Keyword, V)>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a Keyword;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Keys<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// Iterator over the values of an [`OrderedMultimap`].
pub struct Values<'a, V> {
    inner: std::slice::Iter<'a, (Keyword, V)>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

/// Iterator over the `(key, value)` entries of an [`OrderedMultimap`].
pub struct Entries<'a, V> {
    inner: std::slice::Iter<'a, (Keyword, V)>,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a Keyword, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Entries<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<V> ExactSizeIterator for Entries<'_, V> {}

/// Iterator over the values stored under one key.
pub struct GetAll<'a, V> {
    inner: std::slice::Iter<'a, (Keyword, V)>,
    key: &'a str,
}

impl<'a, V> Iterator for GetAll<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.key;
        self.inner
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, V> IntoIterator for &'a OrderedMultimap<V> {
    type Item = &'a Keyword;
    type IntoIter = Keys<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<K: Into<Keyword>, V> FromIterator<(K, V)> for OrderedMultimap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

impl<K: Into<Keyword>, V> From<Vec<(K, V)>> for OrderedMultimap<V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<Keyword>, V, const N: usize> From<[(K, V); N]> for OrderedMultimap<V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<V> From<&OrderedMultimap<V>> for OrderedMultimap<V> {
    fn from(list: &OrderedMultimap<V>) -> Self {
        list.clone()
    }
}

// =============================================================================
// Equality
// =============================================================================

/// Multiset comparison of two entry sequences.
///
/// Every left entry must claim a distinct, equal right entry. With equal
/// lengths this is a bijection, so both sides have the same keys and the same
/// value multiplicities per key.
fn same_entries<'a, V>(left: &[(&'a str, &'a V)], right: &[(&'a str, &'a V)]) -> bool
where
    V: PartialEq,
{
    if left.len() != right.len() {
        return false;
    }
    let mut claimed = vec![false; right.len()];
    left.iter().all(|(key, value)| {
        let candidate = right.iter().enumerate().position(|(index, (other_key, other_value))| {
            !claimed[index] && key == other_key && *value == *other_value
        });
        match candidate {
            Some(index) => {
                claimed[index] = true;
                true
            }
            None => false,
        }
    })
}

impl<V> OrderedMultimap<V> {
    fn borrowed_entries(&self) -> Vec<(&str, &V)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }
}

fn borrow_pairs<K: AsRef<str>, V>(pairs: &[(K, V)]) -> Vec<(&str, &V)> {
    pairs
        .iter()
        .map(|(key, value)| (key.as_ref(), value))
        .collect()
}

impl<V: PartialEq> PartialEq for OrderedMultimap<V> {
    fn eq(&self, other: &Self) -> bool {
        same_entries(&self.borrowed_entries(), &other.borrowed_entries())
    }
}

impl<V: Eq> Eq for OrderedMultimap<V> {}

impl<K: AsRef<str>, V: PartialEq> PartialEq<[(K, V)]> for OrderedMultimap<V> {
    fn eq(&self, other: &[(K, V)]) -> bool {
        same_entries(&self.borrowed_entries(), &borrow_pairs(other))
    }
}

impl<K: AsRef<str>, V: PartialEq> PartialEq<Vec<(K, V)>> for OrderedMultimap<V> {
    fn eq(&self, other: &Vec<(K, V)>) -> bool {
        *self == *other.as_slice()
    }
}

impl<K: AsRef<str>, V: PartialEq, const N: usize> PartialEq<[(K, V); N]> for OrderedMultimap<V> {
    fn eq(&self, other: &[(K, V); N]) -> bool {
        *self == *other.as_slice()
    }
}

impl<K: AsRef<str>, V: PartialEq> PartialEq<OrderedMultimap<V>> for Vec<(K, V)> {
    fn eq(&self, other: &OrderedMultimap<V>) -> bool {
        *other == *self.as_slice()
    }
}

impl<K: AsRef<str>, V: PartialEq, const N: usize> PartialEq<OrderedMultimap<V>> for [(K, V); N] {
    fn eq(&self, other: &OrderedMultimap<V>) -> bool {
        *other == *self.as_slice()
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<V: Clone, O: Into<OrderedMultimap<V>>> Add<O> for OrderedMultimap<V> {
    type Output = Self;

    fn add(self, other: O) -> Self {
        self.append(other)
    }
}

impl<V: Clone, O: Into<OrderedMultimap<V>>> Add<O> for &OrderedMultimap<V> {
    type Output = OrderedMultimap<V>;

    fn add(self, other: O) -> OrderedMultimap<V> {
        self.append(other)
    }
}

impl<K: Into<Keyword>, V: Clone> Add<OrderedMultimap<V>> for Vec<(K, V)> {
    type Output = OrderedMultimap<V>;

    fn add(self, list: OrderedMultimap<V>) -> OrderedMultimap<V> {
        list.prepend(self)
    }
}

impl<V: Clone> Mul<usize> for OrderedMultimap<V> {
    type Output = Self;

    fn mul(self, count: usize) -> Self {
        self.repeat(count)
    }
}

impl<V: Clone> Mul<usize> for &OrderedMultimap<V> {
    type Output = OrderedMultimap<V>;

    fn mul(self, count: usize) -> OrderedMultimap<V> {
        self.repeat(count)
    }
}

impl<V: Clone> Mul<OrderedMultimap<V>> for usize {
    type Output = OrderedMultimap<V>;

    fn mul(self, list: OrderedMultimap<V>) -> OrderedMultimap<V> {
        list.repeat(self)
    }
}

impl<V> Index<&str> for OrderedMultimap<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if there is no entry for `key`. Use
    /// [`try_get`](OrderedMultimap::try_get) to handle a missing key.
    fn index(&self, key: &str) -> &V {
        match self.try_get(key) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<V: fmt::Debug> fmt::Debug for OrderedMultimap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_debug(formatter, DEFAULT_DEBUG_ITEMS)
    }
}

impl<V: fmt::Display> fmt::Display for OrderedMultimap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for (key, value) in self.entries() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<V: Clone> Semigroup for OrderedMultimap<V> {
    fn combine(self, other: Self) -> Self {
        self.append(other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.append(other)
    }
}

impl<V: Clone> Monoid for OrderedMultimap<V> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for OrderedMultimap<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.entries.iter() {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedMultimapVisitor<V> {
    marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, V> serde::de::Visitor<'de> for OrderedMultimapVisitor<V>
where
    V: serde::Deserialize<'de>,
{
    type Value = OrderedMultimap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of [key, value] pairs")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut entries = Vec::with_capacity(capacity);
        while let Some(entry) = seq.next_element::<(Keyword, V)>()? {
            entries.push(entry);
        }
        Ok(OrderedMultimap::from_entries(entries))
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::Deserialize<'de> for OrderedMultimap<V>
where
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedMultimapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
