use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::num::NonZeroUsize;

use log::{debug, trace};

use super::{IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::hash::config::{self, ConfigError, LoadFactor, DEFAULT_CAP, GROWTH_FACTOR, MAX_CAP};
use crate::hash::index::bucket_index;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// A map of string-like keys to values, using separate chaining to resolve collisions.
///
/// Entries live in a fixed number of buckets, each bucket holding every entry whose key currently
/// hashes to its index (see [`bucket_index`]). Once an insertion brings the ratio of entries to
/// buckets up to the map's [`LoadFactor`], the number of buckets doubles and every entry is
/// rehashed. The capacity never shrinks, not even on [`clear`](HashMap::clear).
///
/// Keys can be anything that exposes itself as a [`str`] through [`AsRef`]. Lookups accept any
/// borrowed form of the key, so a `HashMap<String, V>` can be queried with a `&str`. It is a logic
/// error for a key's string form to change while it is in the map, or for a key and its borrowed
/// form to produce different strings.
///
/// Iteration visits buckets in index order and entries within a bucket in insertion order. This
/// order depends on the capacity and isn't meaningful to callers, but it doesn't change between
/// calls unless the map is modified.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
/// - `b`: The number of entries in the bucket of the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(b)`, `O(n)`* |
/// | `get` | `O(b)` |
/// | `remove` | `O(b)` |
/// | `contains_key` | `O(b)` |
/// | `clear` | `O(n + cap)` |
///
/// \* If the insertion reaches the load factor, the whole table is rebuilt.
#[derive(Clone)]
pub struct HashMap<K, V> {
    pub(crate) buckets: Box<[Bucket<K, V>]>,
    pub(crate) cap: NonZeroUsize,
    pub(crate) len: usize,
    pub(crate) load_factor: LoadFactor,
}

/// All entries whose keys hash to the same index, in insertion order.
pub type Bucket<K, V> = Vec<(K, V)>;

impl<K: AsRef<str> + Eq, V> HashMap<K, V> {
    /// Creates a new HashMap with the default capacity of 16 buckets and load factor of 0.75.
    pub fn new() -> HashMap<K, V> {
        HashMap::with_config(DEFAULT_CAP, LoadFactor::default())
    }

    /// Creates a new HashMap with the provided `cap`acity and the default load factor.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroCapacity`] if `cap` is 0, or [`ConfigError::CapacityOverflow`]
    /// if `cap` is above [`MAX_CAP`].
    pub fn with_cap(cap: usize) -> Result<HashMap<K, V>, ConfigError> {
        HashMap::with_cap_and_load_factor(cap, config::DEFAULT_LOAD_FACTOR)
    }

    /// Creates a new HashMap with the provided `cap`acity and `load_factor`.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroCapacity`] if `cap` is 0,
    /// [`ConfigError::CapacityOverflow`] if `cap` is above [`MAX_CAP`], or
    /// [`ConfigError::InvalidLoadFactor`] if `load_factor` isn't finite and positive.
    ///
    /// A capacity within [`MAX_CAP`] is still allocated up front, so the allocator may fail for
    /// capacities the system can't back with memory.
    pub fn with_cap_and_load_factor(
        cap: usize,
        load_factor: f64,
    ) -> Result<HashMap<K, V>, ConfigError> {
        let (cap, load_factor) = config::validate(cap, load_factor)?;
        Ok(HashMap::with_config(cap, load_factor))
    }

    /// Creates a new HashMap from an already validated configuration.
    pub fn with_config(cap: NonZeroUsize, load_factor: LoadFactor) -> HashMap<K, V> {
        HashMap {
            buckets: alloc_buckets(cap),
            cap,
            len: 0,
            load_factor,
        }
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of buckets.
    pub const fn cap(&self) -> usize {
        self.cap.get()
    }

    /// Returns the load factor this HashMap was created with.
    pub const fn load_factor(&self) -> LoadFactor {
        self.load_factor
    }

    /// Inserts the provided `key`-`value` pair into the HashMap. If the key was already associated
    /// with a value, that value is replaced in place and returned. Otherwise the entry is appended
    /// to its bucket and, if the map has reached its load factor, the map grows.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Panics
    /// Panics if growing the map would take its capacity above [`MAX_CAP`]. A very small load
    /// factor makes the map grow by many doublings at once, and the allocation of the new buckets
    /// can fail well before that limit.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.index_of(&key);
        let bucket = self.bucket_at(index).throw();

        if let Some(existing) = bucket.iter_mut().find(|entry| entry.0 == key) {
            // Replacing never changes the length, so there is no need to check the load factor.
            return Some(mem::replace(&mut existing.1, value));
        }

        bucket.push((key, value));
        self.len += 1;
        trace!("inserted entry into bucket {index} (len = {}, cap = {})", self.len, self.cap);

        if self.should_grow() {
            self.grow();
        }

        None
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q is a borrowed form of K, which must produce the same string as the owned key.
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.bucket(self.index_of(key))
            .throw()
            .iter()
            .find(|entry| key == entry.0.borrow())
            .map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        let index = self.index_of(key);

        self.bucket_at(index)
            .throw()
            .iter_mut()
            .find(|entry| key == entry.0.borrow())
            .map(|entry| &mut entry.1)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists. The capacity of the
    /// map is left unchanged.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        let index = self.index_of(key);
        let bucket = self.bucket_at(index).throw();

        let position = bucket.iter().position(|entry| key == entry.0.borrow())?;
        // Vec::remove keeps the remaining entries of the bucket in insertion order.
        let removed = bucket.remove(position);
        self.len -= 1;
        trace!("removed entry from bucket {index} (len = {})", self.len);

        Some(removed)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry associated with `key`, returning whether there was one to remove.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes every entry from the HashMap. The number of buckets stays the same, so keys will
    /// hash to the same indices as they did before clearing.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns the bucket at `index`, containing every entry whose key hashes to `index` at the
    /// current capacity.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` isn't less than [`cap`](HashMap::cap).
    pub fn bucket(&self, index: usize) -> Result<&[(K, V)], IndexOutOfBounds> {
        self.buckets.get(index)
            .map(Vec::as_slice)
            .ok_or(IndexOutOfBounds { index, cap: self.buckets.len() })
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references. Keys come with
    /// their values, in the same order as [`keys`](HashMap::keys) and
    /// [`values`](HashMap::values) would produce them for an unmodified map.
    pub fn entries(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    /// Returns an iterator over all key-value pairs in the HashMap, with mutable references to the
    /// values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K: AsRef<str> + Eq, V> HashMap<K, V> {
    /// Calculates the index of the bucket that `key` belongs to at the current capacity.
    pub(crate) fn index_of<Q: AsRef<str> + ?Sized>(&self, key: &Q) -> usize {
        bucket_index(key.as_ref(), self.cap)
    }

    /// Returns a mutable reference to the bucket at `index`. The index is checked against the
    /// bucket store itself rather than trusted.
    pub(crate) fn bucket_at(&mut self, index: usize) -> Result<&mut Bucket<K, V>, IndexOutOfBounds> {
        let cap = self.buckets.len();
        self.buckets.get_mut(index).ok_or(IndexOutOfBounds { index, cap })
    }

    /// Determines whether the HashMap's length has reached the load factor, meaning that it should
    /// grow.
    pub(crate) fn should_grow(&self) -> bool {
        self.load_factor.is_reached(self.len, self.cap)
    }

    /// Grows the HashMap by the growth factor until it sits below its load factor again, then
    /// rehashes every entry into the new buckets.
    ///
    /// Doubling halves the ratio, so a single step is enough unless the load factor is small
    /// enough that `len / (2 * cap)` still reaches it (only possible while `load_factor * cap < 1`).
    ///
    /// # Panics
    /// Panics if the new capacity would go above [`MAX_CAP`].
    pub(crate) fn grow(&mut self) {
        let mut new_cap = self.cap;
        while self.load_factor.is_reached(self.len, new_cap) {
            new_cap = new_cap.checked_mul(GROWTH_FACTOR)
                .filter(|cap| cap.get() <= MAX_CAP)
                .ok_or(CapacityOverflow)
                .throw();
        }

        debug!(
            "growing table from {} to {} buckets, rehashing {} entries",
            self.cap, new_cap, self.len
        );
        self.realloc_with_cap(new_cap);
    }

    /// Replaces the bucket store with `new_cap` empty buckets and moves every entry into the
    /// bucket its key hashes to at the new capacity.
    ///
    /// Entries are visited in iteration order and appended, so entries that share a bucket after
    /// the move keep their relative order. Keys are already unique, which means no bucket needs
    /// to be scanned for duplicates.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: NonZeroUsize) {
        // Replace the buckets first so that we can consume the old ones.
        let old_buckets = mem::replace(&mut self.buckets, alloc_buckets(new_cap));
        self.cap = new_cap;

        for (key, value) in old_buckets.into_vec().into_iter().flatten() {
            let index = self.index_of(&key);
            self.bucket_at(index).throw().push((key, value));
        }
    }
}

/// Allocates `cap` empty buckets. Empty Vecs don't allocate, so this is a single allocation.
fn alloc_buckets<K, V>(cap: NonZeroUsize) -> Box<[Bucket<K, V>]> {
    (0..cap.get()).map(|_| Vec::new()).collect()
}

impl<K: AsRef<str> + Eq, V> Default for HashMap<K, V> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: AsRef<str> + Eq, V> FromIterator<(K, V)> for HashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<str> + Eq, V> Extend<(K, V)> for HashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: AsRef<str> + Eq, V: PartialEq> PartialEq for HashMap<K, V> {
    /// Two maps are equal if they contain the same entries, regardless of their capacity or load
    /// factor.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: AsRef<str> + Eq, V: Eq> Eq for HashMap<K, V> {}

impl<K: Debug, V: Debug> Debug for HashMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<DebugRaw> = self.buckets.iter()
            .map(|bucket| DebugRaw(if bucket.is_empty() {
                "-".into()
            } else {
                bucket.iter()
                    .map(|(k, v)| format!("({k:?}: {v:?})"))
                    .collect::<Vec<_>>()
                    .join(" -> ")
            }))
            .collect();

        f.debug_struct("HashMap")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.cap)
            .field("load_factor", &self.load_factor.get())
            .finish()
    }
}

impl<K: AsRef<str> + Eq + Debug, V: Debug> Display for HashMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
