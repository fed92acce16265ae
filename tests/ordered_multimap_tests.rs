//! Unit tests for OrderedMultimap.
//!
//! These tests verify construction, lookups, equality and every persistent
//! mutator, and check that no operation alters the list it was called on.

use kwlist::ordered_multimap;
use kwlist::persistent::{
    InvalidKeyError, KeyNotFoundError, Keyword, OrderedMultimap, ValueMatch,
};
use kwlist::typeclass::{Monoid, Semigroup};
use rstest::{fixture, rstest};

const NO_ENTRIES: [(&str, i32); 0] = [];

fn keys_of<V>(list: &OrderedMultimap<V>) -> Vec<&str> {
    list.keys().map(Keyword::as_str).collect()
}

fn entries_of<V: Clone>(list: &OrderedMultimap<V>) -> Vec<(&str, V)> {
    list.entries()
        .map(|(key, value)| (key.as_str(), value.clone()))
        .collect()
}

#[fixture]
fn single() -> OrderedMultimap<i32> {
    OrderedMultimap::from(vec![("a", 1)])
}

#[fixture]
fn duplicated() -> OrderedMultimap<i32> {
    OrderedMultimap::from(vec![("a", 1), ("b", 2), ("a", 3)])
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list, NO_ENTRIES);
}

#[rstest]
fn test_from_pairs_keeps_order() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 2)]);
    assert_eq!(entries_of(&list), vec![("a", 1), ("b", 2)]);
}

#[rstest]
fn test_try_from_parts_appends_named_after_positional() {
    let list =
        OrderedMultimap::try_from_parts(vec![("a", 1), ("b", 2)], vec![("a", 3), ("b", 4)])
            .unwrap();
    assert_eq!(entries_of(&list), vec![("a", 1), ("b", 2), ("a", 3), ("b", 4)]);
}

#[rstest]
fn test_macro_matches_try_from_parts() {
    let from_macro = ordered_multimap!["a" => 1, "b" => 2; a = 3, b = 4];
    let from_parts =
        OrderedMultimap::try_from_parts(vec![("a", 1), ("b", 2)], vec![("a", 3), ("b", 4)])
            .unwrap();
    assert_eq!(entries_of(&from_macro), entries_of(&from_parts));
}

#[rstest]
fn test_try_from_pairs_rejects_missing_key() {
    let result = OrderedMultimap::try_from_pairs(vec![(None::<&str>, 1)]);
    assert_eq!(result.unwrap_err(), InvalidKeyError::new("None"));
}

#[rstest]
fn test_try_from_pairs_rejects_any_invalid_key() {
    let pairs: Vec<(Vec<u8>, i32)> = vec![(b"a".to_vec(), 1), (vec![0xff], 2), (b"c".to_vec(), 3)];
    let error = OrderedMultimap::try_from_pairs(pairs).unwrap_err();
    assert_eq!(error.found(), "non UTF-8 bytes");
}

#[rstest]
fn test_try_from_parts_rejects_invalid_named_key() {
    let result = OrderedMultimap::try_from_parts(vec![("a", 1)], vec![(None::<&str>, 2)]);
    assert_eq!(result.unwrap_err(), InvalidKeyError::new("None"));
}

#[rstest]
fn test_try_from_parts_rejects_invalid_named_key_after_valid_ones() {
    let named: Vec<(Vec<u8>, i32)> = vec![(b"b".to_vec(), 2), (vec![0xc3, 0x28], 3)];
    let error = OrderedMultimap::try_from_parts(vec![("a", 1)], named).unwrap_err();
    assert_eq!(error.found(), "non UTF-8 bytes");
}

#[rstest]
fn test_singleton() {
    let list = OrderedMultimap::singleton('k', "value");
    assert_eq!(list, [("k", "value")]);
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_a_bunch() {
    let list = OrderedMultimap::from(vec![("a", 2), ("b", 3), ("a", 4)]);

    assert_eq!(list, list);
    assert_ne!(list, OrderedMultimap::from(vec![("a", 2), ("b", 3)]));
    assert_eq!(list, vec![("a", 4), ("b", 3), ("a", 2)]);
}

#[rstest]
fn test_empty_lists_are_equal() {
    let left: OrderedMultimap<i32> = OrderedMultimap::new();
    let right: OrderedMultimap<i32> = OrderedMultimap::default();
    assert_eq!(left, right);
}

#[rstest]
fn test_order_is_ignored() {
    assert_eq!(
        OrderedMultimap::from(vec![("a", 1), ("b", 2)]),
        OrderedMultimap::from(vec![("b", 2), ("a", 1)])
    );
}

#[rstest]
fn test_pair_sequence_equality_both_directions(single: OrderedMultimap<i32>) {
    assert_eq!(single, vec![("a", 1)]);
    assert_eq!(vec![("a", 1)], single);
    assert_eq!([("a", 1)], single);
    assert_eq!(single, *[("a", 1)].as_slice());
}

#[rstest]
fn test_pair_sequence_with_owned_keys(single: OrderedMultimap<i32>) {
    assert_eq!(single, vec![(String::from("a"), 1)]);
}

#[rstest]
#[case(vec![("b", 1)])]
#[case(vec![("a", 2)])]
#[case(vec![("a", 1), ("a", 1)])]
#[case(vec![])]
fn test_inequality(single: OrderedMultimap<i32>, #[case] other: Vec<(&str, i32)>) {
    assert_ne!(single, other);
    assert_ne!(single, OrderedMultimap::from(other));
}

#[rstest]
fn test_inequality_multiple_entries() {
    let list = OrderedMultimap::from(vec![
        ("a", 1),
        ("a", 1),
        ("a", 1),
        ("b", 1),
        ("b", 1),
        ("b", 1),
    ]);
    let other = OrderedMultimap::from(vec![
        ("a", 1),
        ("a", 1),
        ("b", 1),
        ("b", 1),
        ("b", 1),
        ("b", 1),
    ]);
    assert_ne!(list, other);
}

#[rstest]
fn test_equality_distinguishes_values_of_different_keys() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 2)]);
    assert_ne!(list, vec![("a", 2), ("b", 1)]);
}

// =============================================================================
// Formatting
// =============================================================================

#[rstest]
fn test_debug_empty() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert_eq!(format!("{list:?}"), "OrderedMultimap[]");
}

#[rstest]
fn test_debug_with_values() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 2)]);
    assert_eq!(format!("{list:?}"), "OrderedMultimap[a: 1, b: 2]");
}

#[rstest]
fn test_debug_truncated_items() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 2)]);
    assert_eq!(list.to_debug_string(1), "OrderedMultimap[a: 1, ...]");
}

#[rstest]
fn test_debug_uses_value_debug_representation() {
    let list = OrderedMultimap::from(vec![("name", String::from("x"))]);
    assert_eq!(list.to_debug_string(50), "OrderedMultimap[name: \"x\"]");
}

// =============================================================================
// Read Operations
// =============================================================================

#[rstest]
fn test_index() {
    let list = OrderedMultimap::from(vec![("a", 2)]);
    assert_eq!(list["a"], 2);
}

#[rstest]
#[should_panic(expected = "key \"a\" not found")]
fn test_index_missing_panics() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    let _value = list["a"];
}

#[rstest]
fn test_try_get(duplicated: OrderedMultimap<i32>) {
    assert_eq!(duplicated.try_get("a"), Ok(&1));
    assert_eq!(duplicated.try_get("z"), Err(KeyNotFoundError::new("z")));
}

#[rstest]
fn test_get(single: OrderedMultimap<i32>) {
    assert_eq!(single.get("a"), Some(&1));
}

#[rstest]
fn test_get_missing() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert_eq!(list.get("x"), None);
}

#[rstest]
fn test_get_or_returns_default_only_when_missing(single: OrderedMultimap<i32>) {
    let default = -1;
    assert_eq!(single.get_or("a", &default), &1);
    assert!(std::ptr::eq(single.get_or("b", &default), &default));
}

#[rstest]
fn test_get_distinguishes_stored_none_from_missing() {
    let list = OrderedMultimap::from(vec![("present", None::<i32>)]);
    assert_eq!(list.get("present"), Some(&None));
    assert_eq!(list.get("absent"), None);
}

#[rstest]
fn test_len() {
    let list: OrderedMultimap<i32> = (0..10).map(|value| ("a", value)).collect();
    assert_eq!(list.len(), 10);
}

#[rstest]
fn test_key_iteration_empty() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert_eq!((&list).into_iter().count(), 0);
}

#[rstest]
fn test_key_iteration() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("c", 3)]);
    let mut keys = Vec::new();
    for key in &list {
        keys.push(key.to_string());
    }
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[rstest]
fn test_keys_include_duplicates(duplicated: OrderedMultimap<i32>) {
    assert_eq!(keys_of(&duplicated), vec!["a", "b", "a"]);
    assert_eq!(duplicated.keys().len(), 3);
}

#[rstest]
fn test_keys_are_restartable(duplicated: OrderedMultimap<i32>) {
    let first: Vec<&Keyword> = duplicated.keys().collect();
    let second: Vec<&Keyword> = duplicated.keys().collect();
    assert_eq!(first, second);
}

#[rstest]
fn test_values_parallel_to_keys(duplicated: OrderedMultimap<i32>) {
    let values: Vec<i32> = duplicated.values().copied().collect();
    assert_eq!(values, vec![1, 2, 3]);
    assert!(duplicated.values().any(|value| *value == 2));
}

#[rstest]
fn test_contains_key(single: OrderedMultimap<i32>) {
    assert!(single.contains_key("a"));
    assert!(!single.contains_key("b"));
}

#[rstest]
fn test_get_all(duplicated: OrderedMultimap<i32>) {
    let values: Vec<&i32> = duplicated.get_all("a").collect();
    assert_eq!(values, vec![&1, &3]);
}

#[rstest]
fn test_get_all_is_restartable(duplicated: OrderedMultimap<i32>) {
    let mut partial = duplicated.get_all("a");
    assert_eq!(partial.next(), Some(&1));

    let restarted: Vec<&i32> = duplicated.get_all("a").collect();
    assert_eq!(restarted, vec![&1, &3]);
    assert_eq!(partial.collect::<Vec<_>>(), vec![&3]);
}

#[rstest]
fn test_get_all_missing() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert_eq!(list.get_all("a").next(), None);
}

#[rstest]
fn test_count(duplicated: OrderedMultimap<i32>) {
    assert_eq!(duplicated.count("a"), 2);
    assert_eq!(duplicated.count("b"), 1);
    assert_eq!(duplicated.count("c"), 0);
}

// =============================================================================
// Concatenation and Repetition
// =============================================================================

#[rstest]
fn test_concat_lists(single: OrderedMultimap<i32>) {
    let concatenated = single.clone() + OrderedMultimap::from(vec![("b", 2)]);
    assert_eq!(concatenated, vec![("a", 1), ("b", 2)]);
    assert_eq!(single, vec![("a", 1)]);
}

#[rstest]
fn test_concat_list_with_pairs(single: OrderedMultimap<i32>) {
    let concatenated = &single + vec![("b", 2)];
    assert_eq!(concatenated, vec![("a", 1), ("b", 2)]);
    assert_eq!(keys_of(&concatenated), vec!["a", "b"]);
}

#[rstest]
fn test_prepend_list(single: OrderedMultimap<i32>) {
    let prepended = single.prepend(OrderedMultimap::from(vec![("b", 2)]));
    assert_eq!(prepended, vec![("a", 1), ("b", 2)]);
    assert_eq!(keys_of(&prepended), vec!["b", "a"]);
}

#[rstest]
fn test_pairs_plus_list_prepends(single: OrderedMultimap<i32>) {
    let prepended = vec![("b", 2)] + single;
    assert_eq!(prepended, vec![("a", 1), ("b", 2)]);
    assert_eq!(keys_of(&prepended), vec!["b", "a"]);
}

#[rstest]
fn test_append_keeps_duplicates_in_position(duplicated: OrderedMultimap<i32>) {
    let appended = duplicated.append(&duplicated);
    assert_eq!(keys_of(&appended), vec!["a", "b", "a", "a", "b", "a"]);
}

#[rstest]
fn test_try_append_validates_keys(single: OrderedMultimap<i32>) {
    let appended = single.try_append(vec![(Some("b"), 2)]).unwrap();
    assert_eq!(keys_of(&appended), vec!["a", "b"]);

    let rejected = single.try_append(vec![(None::<&str>, 2)]);
    assert!(rejected.is_err());
}

#[rstest]
fn test_try_prepend_validates_keys(single: OrderedMultimap<i32>) {
    let prepended = single.try_prepend(vec![(b"b".as_slice(), 2)]).unwrap();
    assert_eq!(keys_of(&prepended), vec!["b", "a"]);

    let rejected = single.try_prepend(vec![([0xff_u8].as_slice(), 2)]);
    assert!(rejected.is_err());
}

#[rstest]
fn test_multiply_empty() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert_eq!(list.clone() * 2, NO_ENTRIES);
    assert_eq!(2_usize * list, NO_ENTRIES);
}

#[rstest]
fn test_multiply() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 2)]);
    let repeated = &list * 2;
    assert_eq!(repeated, vec![("a", 1), ("b", 2), ("a", 1), ("b", 2)]);
    assert_eq!(keys_of(&repeated), vec!["a", "b", "a", "b"]);
    assert_eq!(keys_of(&(2_usize * list)), keys_of(&repeated));
}

#[rstest]
fn test_repeat_zero_is_empty(duplicated: OrderedMultimap<i32>) {
    assert!(duplicated.repeat(0).is_empty());
}

#[rstest]
fn test_repeat_empty_list_any_number_of_times() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert!(list.repeat(usize::MAX).is_empty());
    assert!((usize::MAX * list).is_empty());
}

#[rstest]
#[should_panic(expected = "capacity overflow")]
fn test_repeat_overflowing_length_panics(duplicated: OrderedMultimap<i32>) {
    let _repeated = duplicated.repeat(usize::MAX);
}

#[rstest]
fn test_semigroup_combine_is_append(single: OrderedMultimap<i32>) {
    let combined = single.clone().combine(OrderedMultimap::from(vec![("b", 2)]));
    assert_eq!(keys_of(&combined), vec!["a", "b"]);
    assert_eq!(single.combine_ref(&OrderedMultimap::empty()), single);
}

#[rstest]
fn test_monoid_combine_all() {
    let lists = vec![
        OrderedMultimap::from(vec![("a", 1)]),
        OrderedMultimap::from(vec![("b", 2)]),
    ];
    let combined = OrderedMultimap::combine_all(lists);
    assert_eq!(keys_of(&combined), vec!["a", "b"]);
    assert!(OrderedMultimap::<i32>::combine_all(Vec::new()).is_empty());
}

// =============================================================================
// Persistent Mutators
// =============================================================================

#[rstest]
fn test_put() {
    let list: OrderedMultimap<&str> = OrderedMultimap::new();
    let updated = list.put("a", "value");
    assert_eq!(updated["a"], "value");
    assert!(list.is_empty());
}

#[rstest]
fn test_put_existing_key(single: OrderedMultimap<i32>) {
    let updated = single.put("a", 2);
    assert_eq!(updated, vec![("a", 2)]);
    assert_eq!(single, vec![("a", 1)]);
}

#[rstest]
fn test_put_moves_key_to_end(duplicated: OrderedMultimap<i32>) {
    let updated = duplicated.put("a", 7);
    assert_eq!(entries_of(&updated), vec![("b", 2), ("a", 7)]);
}

#[rstest]
fn test_put_twice_collapses() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    let updated = list.put("k", 1).put("k", 2);
    assert_eq!(entries_of(&updated), vec![("k", 2)]);
}

#[rstest]
fn test_put_if_absent_no_existing_key() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert_eq!(list.put_if_absent("a", 2), vec![("a", 2)]);
}

#[rstest]
fn test_put_if_absent_existing_key() {
    let list = OrderedMultimap::from(vec![("a", 1), ("a", 2)]);
    assert_eq!(list.put_if_absent("a", 3), vec![("a", 1), ("a", 2)]);
}

#[rstest]
fn test_delete(single: OrderedMultimap<i32>) {
    assert_eq!(single.delete("a", ValueMatch::Any), NO_ENTRIES);
    assert_eq!(single, vec![("a", 1)]);
}

#[rstest]
fn test_delete_with_value() {
    let list = OrderedMultimap::from(vec![("a", 1), ("a", 2)]);
    assert_eq!(list.delete("a", &2), vec![("a", 1)]);
}

#[rstest]
fn test_delete_all() {
    let list = OrderedMultimap::from(vec![("a", 1), ("a", 2), ("b", 3)]);
    assert_eq!(list.delete("a", ValueMatch::Any), vec![("b", 3)]);
}

#[rstest]
fn test_delete_with_value_only_touches_that_key() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 1), ("a", 1), ("a", 2)]);
    let deleted = list.delete("a", &1);
    assert_eq!(entries_of(&deleted), vec![("b", 1), ("a", 2)]);
}

#[rstest]
#[case("z", ValueMatch::Any)]
#[case("a", ValueMatch::Equal(&99))]
fn test_delete_without_match_is_noop(
    duplicated: OrderedMultimap<i32>,
    #[case] key: &str,
    #[case] value: ValueMatch<'static, i32>,
) {
    assert_eq!(duplicated.delete(key, value), duplicated);
}

#[rstest]
fn test_delete_first() {
    let list = OrderedMultimap::from(vec![("a", 1), ("a", 2)]);
    assert_eq!(list.delete_first("a"), vec![("a", 2)]);
}

#[rstest]
fn test_delete_first_keeps_position_of_others() {
    let list = OrderedMultimap::from(vec![("b", 0), ("a", 1), ("c", 2), ("a", 3)]);
    let deleted = list.delete_first("a");
    assert_eq!(entries_of(&deleted), vec![("b", 0), ("c", 2), ("a", 3)]);
}

#[rstest]
fn test_delete_first_empty() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert_eq!(list.delete_first("b"), list);
}

#[rstest]
fn test_delete_first_none_found_non_empty(single: OrderedMultimap<i32>) {
    assert_eq!(single.delete_first("b"), single);
}

#[rstest]
fn test_update(single: OrderedMultimap<i32>) {
    let updated = single.update("a", |count| count + 1, None).unwrap();
    assert_eq!(updated, vec![("a", 2)]);
}

#[rstest]
fn test_update_missing_key() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    let result = list.update("a", |_| 0, None);
    assert_eq!(result.unwrap_err(), KeyNotFoundError::new("a"));
}

#[rstest]
fn test_update_initial_value() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    let updated = list.update("a", |_| 0, Some(123)).unwrap();
    assert_eq!(updated, vec![("a", 123)]);
}

#[rstest]
fn test_update_initial_value_ignored_when_present(single: OrderedMultimap<i32>) {
    let updated = single.update("a", |count| count * 10, Some(123)).unwrap();
    assert_eq!(updated, vec![("a", 10)]);
}

#[rstest]
fn test_update_many_entries(duplicated: OrderedMultimap<i32>) {
    let updated = duplicated.update("a", |count| count + 1, None).unwrap();
    assert_eq!(updated, vec![("b", 2), ("a", 2)]);
    assert_eq!(keys_of(&updated), vec!["b", "a"]);
}

#[rstest]
fn test_drop_single_key(single: OrderedMultimap<i32>) {
    assert_eq!(single.drop(["a"]), NO_ENTRIES);
}

#[rstest]
fn test_drop_multiple_keys() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("c", 3), ("a", 4), ("c", 5)]);
    let dropped = list.drop(vec!["a", "b"]);
    assert_eq!(entries_of(&dropped), vec![("c", 3), ("c", 5)]);
}

#[rstest]
fn test_drop_key_missing(single: OrderedMultimap<i32>) {
    assert_eq!(single.drop(["b"]), single);
}

#[rstest]
fn test_drop_accepts_owned_keys(duplicated: OrderedMultimap<i32>) {
    let keys = vec![String::from("a")];
    assert_eq!(duplicated.drop(&keys), vec![("b", 2)]);
}

#[rstest]
fn test_split_empty() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    let (matched, remainder) = list.split(["a"]);
    assert_eq!(matched, NO_ENTRIES);
    assert_eq!(remainder, NO_ENTRIES);
}

#[rstest]
fn test_split() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("c", 3)]);
    let (matched, remainder) = list.split(["a", "c", "e"]);
    assert_eq!(matched, vec![("a", 1), ("c", 3)]);
    assert_eq!(remainder, vec![("b", 2)]);
}

#[rstest]
fn test_split_multiple_entries() {
    let list = OrderedMultimap::from(vec![("a", 1), ("b", 2), ("c", 3), ("a", 4)]);
    let (matched, remainder) = list.split(["a", "c", "e"]);
    assert_eq!(entries_of(&matched), vec![("a", 1), ("c", 3), ("a", 4)]);
    assert_eq!(entries_of(&remainder), vec![("b", 2)]);
}

#[rstest]
fn test_take_matches_split(duplicated: OrderedMultimap<i32>) {
    let (matched, _) = duplicated.split(["a"]);
    assert_eq!(entries_of(&duplicated.take(["a"])), entries_of(&matched));
}

#[rstest]
fn test_transform_empty() {
    let list: OrderedMultimap<i32> = OrderedMultimap::new();
    assert_eq!(list.transform(|value| *value), NO_ENTRIES);
}

#[rstest]
fn test_transform_all(duplicated: OrderedMultimap<i32>) {
    let doubled = duplicated.transform(|value| value * 2);
    assert_eq!(entries_of(&doubled), vec![("a", 2), ("b", 4), ("a", 6)]);
}

#[rstest]
fn test_transform_some(duplicated: OrderedMultimap<i32>) {
    let doubled = duplicated.transform_where(|value| value * 2, |key| key == "a");
    assert_eq!(entries_of(&doubled), vec![("a", 2), ("b", 2), ("a", 6)]);
}

#[rstest]
fn test_transform_changes_value_type(single: OrderedMultimap<i32>) {
    let rendered = single.transform(|value| value.to_string());
    assert_eq!(rendered, vec![("a", String::from("1"))]);
}

// =============================================================================
// Receiver Is Never Modified
// =============================================================================

#[rstest]
fn test_no_operation_modifies_receiver(duplicated: OrderedMultimap<i32>) {
    let snapshot = entries_of(&duplicated);

    let _ = duplicated.append(vec![("z", 0)]);
    let _ = duplicated.prepend(vec![("z", 0)]);
    let _ = duplicated.repeat(3);
    let _ = duplicated.put("a", 0);
    let _ = duplicated.put_if_absent("z", 0);
    let _ = duplicated.delete("a", ValueMatch::Any);
    let _ = duplicated.delete("a", &3);
    let _ = duplicated.delete_first("a");
    let _ = duplicated.update("a", |value| value + 1, None);
    let _ = duplicated.drop(["a"]);
    let _ = duplicated.split(["b"]);
    let _ = duplicated.take(["b"]);
    let _ = duplicated.transform(|value| value + 1);
    let _ = duplicated.transform_where(|value| value + 1, |_| true);

    assert_eq!(entries_of(&duplicated), snapshot);
}
