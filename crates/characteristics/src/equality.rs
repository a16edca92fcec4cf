//! Loose equality: maps of wrapped values compare by their raw values.
//!
//! Two maps are loosely equal when they hold the same key set and, key by
//! key, the unwrapped values are equal. Wrapper identity and descriptors never
//! take part, so values resolved against different descriptors (or different
//! subject types entirely) still compare equal.
//!
//! Equality ignores key order, so [`loose_hash`] combines entries with a
//! commutative sum to stay consistent with [`loose_eq`].

use std::hash::{DefaultHasher, Hash, Hasher};

use indexmap::IndexMap;
use serde_json::Value;

use crate::curation::RawValued;

/// Compare two maps by key set and raw values.
pub fn loose_eq<K, A, B>(a: &IndexMap<K, A>, b: &IndexMap<K, B>) -> bool
where
    K: Hash + Eq,
    A: RawValued,
    B: RawValued,
{
    a.len() == b.len()
        && a.iter().all(|(key, wrapped)| {
            b.get(key)
                .is_some_and(|other| wrapped.raw_value() == other.raw_value())
        })
}

/// Hash a map consistently with [`loose_eq`].
pub fn loose_hash<K, W, H>(map: &IndexMap<K, W>, state: &mut H)
where
    K: Hash,
    W: RawValued,
    H: Hasher,
{
    let combined = unordered_sum(map.iter().map(|(key, wrapped)| {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hash_value(wrapped.raw_value(), &mut hasher);
        hasher.finish()
    }));

    state.write_usize(map.len());
    state.write_u64(combined);
}

/// Hash a JSON value consistently with its `PartialEq`.
pub fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    std::mem::discriminant(value).hash(state);
    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(state),
        Value::Number(n) => {
            if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
                // -0.0 == 0.0
                let f = if f == 0.0 { 0.0 } else { f };
                2u8.hash(state);
                f.to_bits().hash(state);
            } else if let Some(i) = n.as_i64() {
                0u8.hash(state);
                i.hash(state);
            } else if let Some(u) = n.as_u64() {
                1u8.hash(state);
                u.hash(state);
            }
        }
        Value::String(s) => s.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            let combined = unordered_sum(map.iter().map(|(key, item)| {
                let mut hasher = DefaultHasher::new();
                key.hash(&mut hasher);
                hash_value(item, &mut hasher);
                hasher.finish()
            }));
            map.len().hash(state);
            combined.hash(state);
        }
    }
}

fn unordered_sum(hashes: impl Iterator<Item = u64>) -> u64 {
    hashes.fold(0u64, |acc, h| acc.wrapping_add(h))
}
