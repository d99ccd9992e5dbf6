#![cfg(test)]

use std::collections::BTreeMap;

use test_log::test;

use super::*;
use crate::hash::config::ConfigError;
use crate::hash::index::bucket_index;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

const FRUIT: [&str; 12] = [
    "apple", "banana", "carrot", "dog", "elephant", "frog",
    "grape", "hat", "ice cream", "jacket", "kite", "lion",
];

fn sorted<T: Ord>(iter: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut items: Vec<T> = iter.into_iter().collect();
    items.sort();
    items
}

#[test]
fn test_insert_and_get() {
    let mut map = HashMap::new();
    assert!(map.is_empty());
    assert_eq!(map.insert("apple", 1), None, "Fresh keys shouldn't return a value.");
    assert_eq!(map.insert("banana", 2), None);

    assert_eq!(map.get("apple"), Some(&1));
    assert_eq!(map.get("banana"), Some(&2));
    assert_eq!(map.get("carrot"), None, "Missing keys should be reported as None.");
    assert!(map.contains_key("apple"));
    assert!(!map.contains_key("carrot"));
    assert_eq!(map.get_entry("banana"), Some((&"banana", &2)));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_replace_in_place() {
    let mut map = HashMap::with_cap(4).expect("valid config");
    map.insert("apple", "red");
    map.insert("banana", "yellow");

    let cap = map.cap();
    assert_eq!(
        map.insert("apple", "green"),
        Some("red"),
        "Replacing a value should return the old one."
    );
    assert_eq!(map.get("apple"), Some(&"green"));
    assert_eq!(map.len(), 2, "Replacing a value shouldn't change the length.");
    assert_eq!(map.cap(), cap, "Replacing a value shouldn't trigger growth.");

    // Replacement keeps the entry's position in its bucket.
    let index = bucket_index("apple", map.cap);
    assert!(map.bucket(index).expect("in bounds").contains(&("apple", "green")));
}

#[test]
fn test_grow_at_load_factor() {
    let mut map = HashMap::with_cap_and_load_factor(16, 0.75).expect("valid config");

    for (i, key) in FRUIT.iter().take(11).enumerate() {
        map.insert(*key, i);
    }
    assert_eq!(map.cap(), 16, "11 / 16 is below the load factor.");

    map.insert(FRUIT[11], 11);
    assert_eq!(map.len(), 12);
    assert_eq!(map.cap(), 32, "Reaching 12 / 16 = 0.75 exactly should double the capacity.");

    for (i, key) in FRUIT.iter().enumerate() {
        assert_eq!(map.get(key), Some(&i), "{key} should survive the resize.");
    }
}

#[test]
fn test_grow_rehashes() {
    let mut map = HashMap::with_cap_and_load_factor(2, 1.0).expect("valid config");
    for key in FRUIT {
        map.insert(key.to_string(), key.len());
    }
    assert_eq!(map.cap(), 16, "2 -> 4 -> 8 -> 16 as the length reaches each capacity.");

    for index in 0..map.cap() {
        for (key, _) in map.bucket(index).expect("in bounds") {
            assert_eq!(
                bucket_index(key, map.cap),
                index,
                "Every entry should sit in the bucket its key hashes to at the new capacity."
            );
        }
    }
}

#[test]
fn test_grow_repeatedly_for_small_load_factor() {
    let mut map = HashMap::with_cap_and_load_factor(1, 0.4).expect("valid config");
    map.insert("a", ());
    // 1 / 1 and 1 / 2 both reach 0.4, 1 / 4 doesn't.
    assert_eq!(map.cap(), 4);
    assert!(!map.should_grow(), "The map should sit below its load factor after growing.");
}

#[test]
fn test_remove() {
    let mut map: HashMap<String, usize> = FRUIT.iter()
        .map(|k| (k.to_string(), k.len()))
        .collect();
    let cap = map.cap();
    let len = map.len();

    assert!(map.remove("dog"), "Removing a present key should return true.");
    assert!(!map.contains_key("dog"));
    assert_eq!(map.len(), len - 1);

    assert!(!map.remove("dog"), "Removing an absent key should return false.");
    assert_eq!(map.len(), len - 1, "Removing an absent key shouldn't change the length.");

    assert_eq!(map.remove_entry("frog"), Some(("frog".to_string(), 4)));
    assert_eq!(map.take("lion"), Some(4));
    assert_eq!(map.take("lion"), None);
    assert_eq!(map.len(), len - 3);
    assert_eq!(map.cap(), cap, "Removal should never shrink the map.");
}

#[test]
fn test_collisions_chain_in_insertion_order() {
    // A single bucket with a generous load factor forces every key into the same chain.
    let mut map = HashMap::with_cap_and_load_factor(1, 10.0).expect("valid config");
    map.insert("zero", 0);
    map.insert("one", 1);
    map.insert("two", 2);
    map.insert("three", 3);

    assert_eq!(map.bucket(0).expect("in bounds"), [("zero", 0), ("one", 1), ("two", 2), ("three", 3)]);

    map.remove("one");
    assert_eq!(
        map.bucket(0).expect("in bounds"),
        [("zero", 0), ("two", 2), ("three", 3)],
        "Removal should keep the rest of the chain in order."
    );
    assert_eq!(map.get("three"), Some(&3));
}

#[test]
fn test_clear() {
    let mut map: HashMap<&str, usize> = FRUIT.iter().map(|k| (*k, k.len())).collect();
    let cap = map.cap();

    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.cap(), cap, "Clearing shouldn't change the capacity.");
    for key in FRUIT {
        assert!(!map.contains_key(key), "{key} should be gone after clearing.");
    }
    assert_eq!(map.iter().count(), 0);

    map.insert("moon", 4);
    assert_eq!(map.get("moon"), Some(&4), "A cleared map should still be usable.");
}

#[test]
fn test_bucket_out_of_bounds() {
    let mut map: HashMap<&str, ()> = HashMap::new();
    assert!(map.bucket(15).is_ok());

    let err = map.bucket(16).expect_err("16 is out of bounds for 16 buckets");
    assert_eq!(err, IndexOutOfBounds { index: 16, cap: 16 });
    assert_eq!(err.to_string(), "Index 16 out of bounds for table with 16 buckets!");

    assert!(map.bucket_at(usize::MAX).is_err());
}

#[test]
fn test_invalid_config() {
    assert!(HashMap::<&str, ()>::with_cap(0).is_err_and(|e| e.is_zero_capacity()));
    assert!(
        HashMap::<&str, ()>::with_cap(usize::MAX).is_err_and(|e| e.is_capacity_overflow()),
        "Capacities that can't be allocated should be rejected rather than panic."
    );

    for load_factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            HashMap::<&str, ()>::with_cap_and_load_factor(8, load_factor),
            Err(ConfigError::InvalidLoadFactor(_))
        ));
    }
}

#[test]
fn test_iteration_is_consistent() {
    let map: HashMap<String, usize> = FRUIT.iter()
        .map(|k| (k.to_string(), k.len()))
        .collect();

    let keys: Vec<&String> = map.keys().collect();
    let values: Vec<&usize> = map.values().collect();
    let entries: Vec<(&String, &usize)> = map.entries().collect();

    assert_eq!(keys.len(), map.len());
    assert_eq!(values.len(), map.len());
    assert_eq!(map.keys().len(), map.len(), "Iterators should know their exact length.");
    assert_eq!(
        entries,
        keys.into_iter().zip(values).collect::<Vec<_>>(),
        "Traversal order should be stable for an unmodified map."
    );

    assert_eq!(
        sorted(map.keys().map(String::as_str)),
        sorted(FRUIT),
        "Every key should be visited exactly once."
    );
}

#[test]
fn test_iteration_order_follows_buckets() {
    let map: HashMap<&str, ()> = FRUIT.iter().map(|k| (*k, ())).collect();
    let indices: Vec<usize> = map.keys().map(|k| bucket_index(k, map.cap)).collect();

    assert!(
        indices.is_sorted(),
        "Keys should be visited in bucket index order."
    );
}

#[test]
fn test_mutation_through_iterators() {
    let mut map: HashMap<&str, usize> = FRUIT.iter().map(|k| (*k, 0)).collect();

    if let Some(value) = map.get_mut("kite") {
        *value = 10;
    }
    assert_eq!(map.get("kite"), Some(&10));

    for value in map.values_mut() {
        *value += 1;
    }
    for (key, value) in map.iter_mut() {
        if *key == "hat" {
            *value *= 100;
        }
    }

    assert_eq!(map.get("kite"), Some(&11));
    assert_eq!(map.get("hat"), Some(&100));
    assert_eq!(map.values().sum::<usize>(), 11 + 100 + 10);
}

#[test]
fn test_owned_iteration() {
    let map: HashMap<String, usize> = FRUIT.iter()
        .map(|k| (k.to_string(), k.len()))
        .collect();

    let into_iter = map.clone().into_iter();
    assert_eq!(into_iter.len(), FRUIT.len());

    let expected: BTreeMap<String, usize> = FRUIT.iter()
        .map(|k| (k.to_string(), k.len()))
        .collect();
    assert_eq!(into_iter.collect::<BTreeMap<_, _>>(), expected);

    assert_eq!(sorted(map.clone().into_keys()), sorted(expected.keys().cloned()));
    assert_eq!(sorted(map.into_values()), sorted(expected.values().copied()));
}

#[test]
fn test_equality_ignores_capacity() {
    let mut small = HashMap::with_cap(1).expect("valid config");
    let mut large = HashMap::with_cap(128).expect("valid config");
    for (i, key) in FRUIT.iter().enumerate() {
        small.insert(*key, i);
        large.insert(*key, i);
    }
    assert_ne!(small.cap(), large.cap());
    assert_eq!(small, large);

    large.insert("moon", 12);
    assert_ne!(small, large);
}

#[test]
fn test_extend() {
    let mut map = HashMap::new();
    map.extend([("a", 1), ("b", 2)]);
    map.extend([("b", 3), ("c", 4)]);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get("b"), Some(&3), "Later values should replace earlier ones.");
}

#[test]
fn test_fmt() {
    let mut map = HashMap::with_cap(2).expect("valid config");
    map.insert("a", 1);

    assert_eq!(format!("{map}"), r#"#{"a": 1}"#);

    // "a" is 97, which lands in bucket 1 of 2.
    assert_eq!(
        format!("{map:?}"),
        r#"HashMap { buckets: [-, ("a": 1)], len: 1, cap: 2, load_factor: 0.75 }"#
    );
}

#[test]
fn test_capacity_overflow() {
    assert_panics!({
        let mut map: HashMap<&str, ()> = HashMap::with_cap(1).expect("valid config");
        map.len = usize::MAX;
        map.grow();
    }, "Growing past MAX_CAP should panic.");
}
