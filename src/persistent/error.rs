//! Error types for [`OrderedMultimap`](super::OrderedMultimap).
//!
//! - [`InvalidKeyError`]: a key was rejected while building a collection.
//! - [`KeyNotFoundError`]: a lookup or update required a key that has no entries.
//! - [`OrderedMultimapError`]: either of the above, for callers chaining both with `?`.

use super::Keyword;

/// Represents a key that could not be turned into a [`Keyword`].
///
/// Construction validates every key before building anything, so this error
/// never comes with a partially built collection.
///
/// # Examples
///
/// ```rust
/// use kwlist::persistent::{InvalidKeyError, OrderedMultimap};
///
/// let result = OrderedMultimap::try_from_pairs(vec![(Some("a"), 1), (None, 2)]);
/// assert_eq!(result.unwrap_err(), InvalidKeyError::new("None"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidKeyError {
    found: String,
}

impl InvalidKeyError {
    /// Creates an error describing the rejected input.
    #[must_use]
    pub fn new(found: impl Into<String>) -> Self {
        Self {
            found: found.into(),
        }
    }

    /// Returns a description of the rejected input.
    #[must_use]
    pub fn found(&self) -> &str {
        &self.found
    }
}

impl std::fmt::Display for InvalidKeyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "only string keywords can be used (found {})",
            self.found
        )
    }
}

impl std::error::Error for InvalidKeyError {}

/// Represents a lookup of a key that has no entries.
///
/// # Examples
///
/// ```rust
/// use kwlist::persistent::OrderedMultimap;
///
/// let list: OrderedMultimap<i32> = OrderedMultimap::new();
/// let error = list.try_get("missing").unwrap_err();
/// assert_eq!(error.key(), "missing");
/// assert_eq!(format!("{error}"), "key \"missing\" not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotFoundError {
    key: Keyword,
}

impl KeyNotFoundError {
    /// Creates an error for the given key.
    #[must_use]
    pub fn new(key: impl Into<Keyword>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the key that was not found.
    #[must_use]
    pub const fn key(&self) -> &Keyword {
        &self.key
    }
}

impl std::fmt::Display for KeyNotFoundError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "key \"{}\" not found", self.key)
    }
}

impl std::error::Error for KeyNotFoundError {}

/// Represents any error raised by [`OrderedMultimap`](super::OrderedMultimap).
///
/// # Examples
///
/// ```rust
/// use kwlist::persistent::{OrderedMultimap, OrderedMultimapError};
///
/// fn first_port(pairs: Vec<(&str, u16)>) -> Result<u16, OrderedMultimapError> {
///     let list = OrderedMultimap::try_from_pairs(pairs)?;
///     Ok(*list.try_get("port")?)
/// }
///
/// assert_eq!(first_port(vec![("port", 80), ("port", 443)]), Ok(80));
/// assert!(matches!(
///     first_port(vec![]),
///     Err(OrderedMultimapError::KeyNotFound(_))
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedMultimapError {
    /// A key was rejected during construction.
    InvalidKey(InvalidKeyError),
    /// A required key had no entries.
    KeyNotFound(KeyNotFoundError),
}

impl std::fmt::Display for OrderedMultimapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(error) => write!(formatter, "{error}"),
            Self::KeyNotFound(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for OrderedMultimapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKey(error) => Some(error),
            Self::KeyNotFound(error) => Some(error),
        }
    }
}

impl From<InvalidKeyError> for OrderedMultimapError {
    fn from(error: InvalidKeyError) -> Self {
        Self::InvalidKey(error)
    }
}

impl From<KeyNotFoundError> for OrderedMultimapError {
    fn from(error: KeyNotFoundError) -> Self {
        Self::KeyNotFound(error)
    }
}
