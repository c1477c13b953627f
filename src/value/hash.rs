//! Order-independent hashing helpers
//!
//! `HashMap` does not implement `Hash`, and any hash over its iteration
//! order would break the `a == b => hash(a) == hash(b)` contract. Maps are
//! hashed entry by entry into independent hashers and the results summed,
//! which is commutative and associative.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hashes a value with a hasher whose keys are fixed, so the result is
/// stable across calls and processes built from the same toolchain.
pub fn deterministic_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Combines `(key, value)` entries into a hash that does not depend on the
/// order the entries are visited in.
pub fn unordered_entries_hash<'a, K, V, I>(entries: I) -> u64
where
    K: Hash + ?Sized + 'a,
    V: Hash + ?Sized + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    entries.fold(0u64, |acc, (key, value)| {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        value.hash(&mut hasher);
        acc.wrapping_add(hasher.finish())
    })
}
