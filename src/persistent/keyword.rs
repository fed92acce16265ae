//! Keys of an [`OrderedMultimap`](super::OrderedMultimap).
//!
//! A [`Keyword`] is an immutable, reference-counted string. Cloning one is a
//! reference count increment, so entries can be copied between instances
//! without reallocating their keys.
//!
//! Two conversion traits feed keywords into the collection:
//!
//! - `Into<Keyword>` for inputs that are always valid (`&str`, `String`, `char`, ...).
//!   Used by the infallible constructors and by [`FromIterator`].
//! - [`IntoKeyword`] for the wider, closed set of inputs accepted by
//!   [`OrderedMultimap::try_from_pairs`](super::OrderedMultimap::try_from_pairs),
//!   some of which can be rejected with an [`InvalidKeyError`].
//!
//! # Examples
//!
//! ```rust
//! use kwlist::persistent::{IntoKeyword, Keyword};
//!
//! let keyword = Keyword::from("name");
//! assert_eq!(keyword, "name");
//! assert_eq!(keyword.as_str(), "name");
//!
//! assert!(b"valid".as_slice().into_keyword().is_ok());
//! assert!(vec![0xff_u8, 0xfe].into_keyword().is_err());
//! assert!(None::<&str>.into_keyword().is_err());
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use super::ReferenceCounter;
use super::error::InvalidKeyError;

/// An immutable string key.
#[derive(Clone)]
pub struct Keyword(ReferenceCounter<str>);

impl Keyword {
    /// Returns the keyword as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if both keywords share the same allocation.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Keyword {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Keyword {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Keyword {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Keyword {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl Eq for Keyword {}

impl PartialEq<str> for Keyword {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Keyword {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<String> for Keyword {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        &*self.0 == other.as_str()
    }
}

impl PartialEq<Keyword> for &str {
    #[inline]
    fn eq(&self, other: &Keyword) -> bool {
        *self == &*other.0
    }
}

impl PartialOrd for Keyword {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyword {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

// Must agree with `Hash for str` so that `Borrow<str>` lookups work.
impl Hash for Keyword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, formatter)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

// =============================================================================
// Infallible Conversions
// =============================================================================

impl From<&str> for Keyword {
    fn from(value: &str) -> Self {
        Self(ReferenceCounter::from(value))
    }
}

impl From<String> for Keyword {
    fn from(value: String) -> Self {
        Self(ReferenceCounter::from(value))
    }
}

impl From<&String> for Keyword {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Box<str>> for Keyword {
    fn from(value: Box<str>) -> Self {
        Self(ReferenceCounter::from(value))
    }
}

impl From<Cow<'_, str>> for Keyword {
    fn from(value: Cow<'_, str>) -> Self {
        match value {
            Cow::Borrowed(borrowed) => Self::from(borrowed),
            Cow::Owned(owned) => Self::from(owned),
        }
    }
}

impl From<char> for Keyword {
    fn from(value: char) -> Self {
        let mut buffer = [0_u8; 4];
        Self::from(&*value.encode_utf8(&mut buffer))
    }
}

impl From<&Keyword> for Keyword {
    fn from(value: &Keyword) -> Self {
        value.clone()
    }
}

impl From<Keyword> for String {
    fn from(value: Keyword) -> Self {
        value.as_str().to_owned()
    }
}

// =============================================================================
// Fallible Conversions
// =============================================================================

/// Conversion into a [`Keyword`] that may be rejected.
///
/// This is the closed set of key inputs accepted by
/// [`OrderedMultimap::try_from_pairs`](super::OrderedMultimap::try_from_pairs).
/// Strings always succeed; byte input must be valid UTF-8; `None` is never a key.
pub trait IntoKeyword {
    /// Converts `self` into a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] if `self` does not describe a string key.
    fn into_keyword(self) -> Result<Keyword, InvalidKeyError>;
}

macro_rules! impl_into_keyword_via_from {
    ($($source:ty),* $(,)?) => {
        $(
            impl IntoKeyword for $source {
                #[inline]
                fn into_keyword(self) -> Result<Keyword, InvalidKeyError> {
                    Ok(Keyword::from(self))
                }
            }
        )*
    };
}

impl_into_keyword_via_from!(&str, String, &String, Box<str>, char, Keyword, &Keyword);

impl IntoKeyword for Cow<'_, str> {
    #[inline]
    fn into_keyword(self) -> Result<Keyword, InvalidKeyError> {
        Ok(Keyword::from(self))
    }
}

impl IntoKeyword for &[u8] {
    fn into_keyword(self) -> Result<Keyword, InvalidKeyError> {
        std::str::from_utf8(self)
            .map(Keyword::from)
            .map_err(|_| InvalidKeyError::new("non UTF-8 bytes"))
    }
}

impl IntoKeyword for Vec<u8> {
    fn into_keyword(self) -> Result<Keyword, InvalidKeyError> {
        String::from_utf8(self)
            .map(Keyword::from)
            .map_err(|_| InvalidKeyError::new("non UTF-8 bytes"))
    }
}

impl<K: IntoKeyword> IntoKeyword for Option<K> {
    fn into_keyword(self) -> Result<Keyword, InvalidKeyError> {
        self.map_or_else(|| Err(InvalidKeyError::new("None")), IntoKeyword::into_keyword)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Keyword {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self)
    }
}

#[cfg(feature = "serde")]
struct KeywordVisitor;

#[cfg(feature = "serde")]
impl KeywordVisitor {
    fn reject<E: serde::de::Error>(found: &str) -> E {
        E::custom(InvalidKeyError::new(found))
    }
}

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for KeywordVisitor {
    type Value = Keyword;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string keyword")
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Keyword::from(value))
    }

    fn visit_string<E: serde::de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Keyword::from(value))
    }

    fn visit_bytes<E: serde::de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        value.into_keyword().map_err(E::custom)
    }

    fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Err(Self::reject(&format!("boolean `{value}`")))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Err(Self::reject(&format!("integer `{value}`")))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Err(Self::reject(&format!("integer `{value}`")))
    }

    fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Err(Self::reject(&format!("floating point `{value}`")))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::reject("null"))
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::reject("None"))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Keyword {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Binary formats are not self-describing, so a non-string key can only
        // be named in human-readable ones.
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(KeywordVisitor)
        } else {
            deserializer.deserialize_str(KeywordVisitor)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
