//! The string hash used to place keys into buckets.
//!
//! The hash is a polynomial rolling hash with a multiplier of [`MULTIPLIER`] over the UTF-16 code
//! units of the key. Rather than computing a full-width hash and reducing it once, the accumulator
//! is reduced modulo the capacity after every code unit. As a consequence the index of a key
//! depends on the capacity it was computed for, and a table that changes capacity must recompute
//! the index of every entry.

use std::num::NonZeroUsize;

/// The multiplier applied to the accumulator before each code unit is added.
pub const MULTIPLIER: u128 = 31;

/// Calculates the bucket index of `key` in a table with `cap` buckets.
///
/// The result is always in `[0, cap)`. The empty string always maps to bucket 0.
///
/// ```
/// # use std::num::NonZeroUsize;
/// # use chained_hash::hash::index::bucket_index;
/// let cap = NonZeroUsize::new(16).unwrap();
/// assert_eq!(bucket_index("", cap), 0);
/// assert_eq!(bucket_index("a", cap), 97 % 16);
/// assert_eq!(bucket_index("ab", cap), (31 * (97 % 16) + 98) % 16);
/// ```
pub fn bucket_index(key: &str, cap: NonZeroUsize) -> usize {
    // Widened so that 31 * (cap - 1) + u16::MAX can't overflow for any usize capacity.
    let modulus = cap.get() as u128;

    let index = key.encode_utf16()
        .fold(0_u128, |acc, unit| (MULTIPLIER * acc + unit as u128) % modulus);

    // The accumulator is always reduced below cap, so it fits back into a usize.
    index as usize
}
