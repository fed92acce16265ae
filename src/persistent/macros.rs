//! Literal construction of an [`OrderedMultimap`](super::OrderedMultimap).

/// Builds an [`OrderedMultimap`](crate::persistent::OrderedMultimap) from
/// literal entries.
///
/// Positional entries are written `key => value`. Named entries follow a `;`
/// and are written `name = value`; the identifier becomes the key. Named
/// entries are appended after positional ones, in the order written.
///
/// # Syntax
///
/// - `ordered_multimap![]` - An empty list
/// - `ordered_multimap!["a" => 1, "b" => 2]` - Positional entries
/// - `ordered_multimap!["a" => 1; b = 2, c = 3]` - Positional, then named entries
/// - `ordered_multimap![; b = 2]` - Named entries only
///
/// # Examples
///
/// ```rust
/// use kwlist::ordered_multimap;
///
/// let list = ordered_multimap!["a" => 1, "b" => 2; a = 3, b = 4];
///
/// let keys: Vec<&str> = list.keys().map(|key| key.as_str()).collect();
/// assert_eq!(keys, vec!["a", "b", "a", "b"]);
/// assert_eq!(list, vec![("a", 1), ("a", 3), ("b", 2), ("b", 4)]);
/// ```
#[macro_export]
macro_rules! ordered_multimap {
    () => {
        $crate::persistent::OrderedMultimap::new()
    };

    ($($key:expr => $value:expr),* ; $($name:ident = $named:expr),* $(,)?) => {
        <$crate::persistent::OrderedMultimap<_> as ::core::iter::FromIterator<_>>::from_iter([
            $(($crate::persistent::Keyword::from($key), $value),)*
            $(($crate::persistent::Keyword::from(::core::stringify!($name)), $named),)*
        ])
    };

    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::persistent::OrderedMultimap<_> as ::core::iter::FromIterator<_>>::from_iter([
            $(($crate::persistent::Keyword::from($key), $value),)+
        ])
    };
}
