//! Fixed-bucket hash table with separate chaining.
//!
//! The number of buckets is chosen at construction and never changes.
//! Each bucket holds a short list of `(key, value)` pairs which is scanned
//! linearly for an exact key match. With a well-distributed hash and a
//! modest load factor this gives O(1) average operations; a pathological
//! hash degrades to O(n).

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

/// Default number of buckets (prime).
pub const DEFAULT_BUCKET_COUNT: usize = 16411;

/// Deterministic hasher used when none is supplied.
pub type DefaultBuildHasher = BuildHasherDefault<DefaultHasher>;

/// A key-value map with a fixed number of chained buckets.
///
/// # Examples
///
/// ```
/// use flight_planner::collections::AssociativeMap;
///
/// let mut map = AssociativeMap::new();
/// map.put("LHR", 1);
/// map.put("LHR", 2);
///
/// assert_eq!(map.get("LHR"), Some(&2));
/// assert_eq!(map.len(), 1);
///
/// map.remove("LHR");
/// assert!(!map.contains_key("LHR"));
/// ```
#[derive(Debug, Clone)]
pub struct AssociativeMap<K, V, S = DefaultBuildHasher> {
    buckets: Vec<Vec<(K, V)>>,
    hasher: S,
    len: usize,
}

impl<K: Hash + Eq, V> AssociativeMap<K, V> {
    /// Create a map with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create a map with the given number of buckets.
    ///
    /// A count of zero is treated as one.
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_buckets_and_hasher(bucket_count, DefaultBuildHasher::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> AssociativeMap<K, V, S> {
    /// Create a map with the given number of buckets and hasher.
    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: S) -> Self {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);

        Self {
            buckets,
            hasher,
            len: 0,
        }
    }

    /// Insert or overwrite the value for `key`.
    ///
    /// Returns the previous value if the key was already present.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        for entry in bucket.iter_mut() {
            if entry.0 == key {
                return Some(std::mem::replace(&mut entry.1, value));
            }
        }

        bucket.push((key, value));
        self.len += 1;
        None
    }

    /// Returns the value for `key`, or `None` if missing.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns the value for `key`, inserting `default()` first if missing.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        let position = match bucket.iter().position(|(k, _)| *k == key) {
            Some(position) => position,
            None => {
                bucket.push((key, default()));
                self.len += 1;
                bucket.len() - 1
            }
        };

        &mut bucket[position].1
    }

    /// Remove `key` if present, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(k, _)| k.borrow() == key)?;

        self.len -= 1;
        Some(bucket.swap_remove(position).1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index].iter().any(|(k, _)| k.borrow() == key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate over all entries in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }
}

impl<K: Hash + Eq, V> Default for AssociativeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::Hasher;

    /// Hasher that sends every key to the same bucket.
    #[derive(Default)]
    struct Colliding;

    impl Hasher for Colliding {
        fn finish(&self) -> u64 {
            7
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    type CollidingMap<K, V> = AssociativeMap<K, V, BuildHasherDefault<Colliding>>;

    fn colliding<K: Hash + Eq, V>() -> CollidingMap<K, V> {
        AssociativeMap::with_buckets_and_hasher(64, BuildHasherDefault::default())
    }

    #[test]
    fn put_then_get() {
        let mut map = AssociativeMap::new();
        assert_eq!(map.put("JFK".to_string(), 10), None);
        assert_eq!(map.get("JFK"), Some(&10));
        assert_eq!(map.get("LAX"), None);
        assert_eq!(map.bucket_count(), DEFAULT_BUCKET_COUNT);
    }

    #[test]
    fn put_overwrites_without_duplicating() {
        let mut map = AssociativeMap::with_buckets(11);
        map.put("JFK", 1);
        assert_eq!(map.put("JFK", 2), Some(1));
        assert_eq!(map.get("JFK"), Some(&2));
        assert_eq!(map.len(), 1);
        assert_eq!(map.iter().count(), 1);
    }

    #[test]
    fn remove_then_get_is_missing() {
        let mut map = AssociativeMap::with_buckets(11);
        map.put("JFK", 1);
        map.put("LAX", 2);

        assert_eq!(map.remove("JFK"), Some(1));
        assert_eq!(map.get("JFK"), None);
        assert!(!map.contains_key("JFK"));
        assert_eq!(map.get("LAX"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut map: AssociativeMap<&str, i32> = AssociativeMap::with_buckets(11);
        map.put("JFK", 1);
        assert_eq!(map.remove("ORD"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn zero_buckets_treated_as_one() {
        let mut map = AssociativeMap::with_buckets(0);
        assert_eq!(map.bucket_count(), 1);
        map.put(1, 'a');
        map.put(2, 'b');
        assert_eq!(map.get(&1), Some(&'a'));
        assert_eq!(map.get(&2), Some(&'b'));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = AssociativeMap::with_buckets(11);
        map.put("SFO", vec![1]);
        if let Some(v) = map.get_mut("SFO") {
            v.push(2);
        }
        assert_eq!(map.get("SFO"), Some(&vec![1, 2]));
        assert!(map.get_mut("SEA").is_none());
    }

    #[test]
    fn get_or_insert_with_inserts_once() {
        let mut map: AssociativeMap<&str, Vec<u32>> = AssociativeMap::with_buckets(11);
        map.get_or_insert_with("BOS", Vec::new).push(1);
        map.get_or_insert_with("BOS", || unreachable!()).push(2);

        assert_eq!(map.get("BOS"), Some(&vec![1, 2]));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn collisions_keep_keys_distinct() {
        let mut map = colliding();
        for i in 0..20 {
            map.put(i, i * 10);
        }

        assert_eq!(map.len(), 20);
        for i in 0..20 {
            assert_eq!(map.get(&i), Some(&(i * 10)));
        }

        map.remove(&5);
        map.put(7, 700);

        assert!(!map.contains_key(&5));
        assert_eq!(map.get(&7), Some(&700));
        assert_eq!(map.get(&6), Some(&60));
        assert_eq!(map.len(), 19);
    }
}
