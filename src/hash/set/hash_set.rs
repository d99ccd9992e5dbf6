use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::num::NonZeroUsize;

use super::Iter;
use crate::hash::config::{ConfigError, LoadFactor};
use crate::hash::HashMap;
use crate::util::error::IndexOutOfBounds;

/// A set of string-like items, using separate chaining to resolve collisions.
///
/// A HashSet is a [`HashMap`] with unit values, so it shares the map's buckets, hash function and
/// growth behaviour. See [`HashMap`] for details on both.
#[derive(Clone)]
pub struct HashSet<T> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, ()>,
}

impl<T: AsRef<str> + Eq> HashSet<T> {
    /// Creates a new HashSet with the default capacity of 16 buckets and load factor of 0.75.
    pub fn new() -> HashSet<T> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new HashSet with the provided `cap`acity and the default load factor.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroCapacity`] if `cap` is 0, or [`ConfigError::CapacityOverflow`]
    /// if `cap` is too large. See [`HashMap::with_cap`].
    pub fn with_cap(cap: usize) -> Result<HashSet<T>, ConfigError> {
        Ok(HashSet {
            inner: HashMap::with_cap(cap)?,
        })
    }

    /// Creates a new HashSet with the provided `cap`acity and `load_factor`.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroCapacity`] if `cap` is 0, [`ConfigError::CapacityOverflow`] if
    /// `cap` is too large, or [`ConfigError::InvalidLoadFactor`] if `load_factor` isn't finite and
    /// positive. See [`HashMap::with_cap_and_load_factor`].
    pub fn with_cap_and_load_factor(
        cap: usize,
        load_factor: f64,
    ) -> Result<HashSet<T>, ConfigError> {
        Ok(HashSet {
            inner: HashMap::with_cap_and_load_factor(cap, load_factor)?,
        })
    }

    /// Creates a new HashSet from an already validated configuration.
    pub fn with_config(cap: NonZeroUsize, load_factor: LoadFactor) -> HashSet<T> {
        HashSet {
            inner: HashMap::with_config(cap, load_factor),
        }
    }

    /// Returns the number of items in the HashSet.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the HashSet contains no items.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the current number of buckets.
    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Returns the load factor this HashSet was created with.
    pub const fn load_factor(&self) -> LoadFactor {
        self.inner.load_factor()
    }

    /// Adds `item` to the HashSet, returning true if it wasn't already present. Adding an item
    /// that is already present leaves the set untouched, including the stored item.
    ///
    /// # Panics
    /// Panics if growing the set would overflow its capacity.
    pub fn insert(&mut self, item: T) -> bool {
        // The map keeps the existing key on replacement, and replacing () is a no-op.
        self.inner.insert(item, ()).is_none()
    }

    /// Returns true if the HashSet contains `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns a reference to the stored item equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.inner.get_entry(item).map(|(k, _)| k)
    }

    /// Removes `item` from the HashSet, returning whether it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.inner.remove(item)
    }

    /// Removes and returns the stored item equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(k, _)| k)
    }

    /// Removes every item from the HashSet, keeping its capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over the items in the bucket at `index`, in insertion order.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` isn't less than [`cap`](HashSet::cap).
    pub fn bucket(
        &self,
        index: usize,
    ) -> Result<impl ExactSizeIterator<Item = &T>, IndexOutOfBounds> {
        Ok(self.inner.bucket(index)?.iter().map(|(item, _)| item))
    }

    /// Returns an iterator over all items in the HashSet, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all items in the HashSet, as references. This is the same as
    /// [`iter`](HashSet::iter).
    pub fn keys(&self) -> Iter<'_, T> {
        self.iter()
    }
}

impl<T: AsRef<str> + Eq> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AsRef<str> + Eq> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<T: AsRef<str> + Eq> Extend<T> for HashSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: AsRef<str> + Eq> PartialEq for HashSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: AsRef<str> + Eq> Eq for HashSet<T> {}

impl<T: Debug> Debug for HashSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents = self.inner.buckets.iter()
            .flatten()
            .map(|(item, _)| format!("{item:?}"))
            .collect::<Vec<String>>()
            .join(", ");

        f.debug_struct("HashSet")
            .field("contents", &format_args!("#{{{contents}}}"))
            .field("len", &self.inner.len)
            .field("cap", &self.inner.cap)
            .field("load_factor", &self.inner.load_factor.get())
            .finish()
    }
}

impl<T: AsRef<str> + Eq + Display> Display for HashSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
