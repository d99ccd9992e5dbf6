//! Construction-time configuration shared by [`HashMap`](super::HashMap) and
//! [`HashSet`](super::HashSet).
//!
//! A container's load factor is fixed once it has been created, while its capacity only ever grows
//! by [`GROWTH_FACTOR`].

use std::fmt::{self, Display, Formatter};
use std::mem;
use std::num::NonZeroUsize;

use derive_more::{Display, Error, From, IsVariant};

use crate::util::error::CapacityOverflow;

/// The capacity used by `new` and `default`.
pub const DEFAULT_CAP: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(cap) => cap,
    None => unreachable!(),
};

/// The largest number of buckets a table may hold, as the bucket store can't exceed `isize::MAX`
/// bytes.
pub const MAX_CAP: usize = isize::MAX as usize / mem::size_of::<Vec<()>>();

/// The load factor used when none is provided.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// The factor by which the capacity is multiplied whenever a table grows.
pub const GROWTH_FACTOR: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(factor) => factor,
    None => unreachable!(),
};

/// The maximum ratio of entries to buckets a table tolerates before it grows.
///
/// Any finite, strictly positive value is accepted. Values above 1 are allowed and simply mean
/// that buckets hold more than one entry on average before the table grows.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LoadFactor(f64);

impl LoadFactor {
    /// Validates and wraps the provided `value`.
    pub fn new(value: f64) -> Result<LoadFactor, InvalidLoadFactorError> {
        if value.is_finite() && value > 0.0 {
            Ok(LoadFactor(value))
        } else {
            Err(InvalidLoadFactorError { value })
        }
    }

    /// Returns the wrapped ratio.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns true if `len` entries spread over `cap` buckets reach or exceed this load factor.
    pub(crate) fn is_reached(self, len: usize, cap: NonZeroUsize) -> bool {
        len as f64 / cap.get() as f64 >= self.0
    }
}

impl Default for LoadFactor {
    fn default() -> Self {
        LoadFactor(DEFAULT_LOAD_FACTOR)
    }
}

impl Display for LoadFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for LoadFactor {
    type Error = InvalidLoadFactorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        LoadFactor::new(value)
    }
}

/// Returned when a container is created with a capacity of 0. A table needs at least one bucket
/// to place keys in.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unable to create a hash-based collection with capacity 0")]
pub struct ZeroCapacityError;

/// Returned when a load factor is NaN, infinite, zero or negative.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq)]
#[display("load factor must be finite and greater than 0, got {value}")]
pub struct InvalidLoadFactorError {
    /// The rejected value.
    pub value: f64,
}

/// Any error produced while validating a container's configuration.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// See [`ZeroCapacityError`].
    ZeroCapacity(ZeroCapacityError),
    /// See [`InvalidLoadFactorError`].
    InvalidLoadFactor(InvalidLoadFactorError),
    /// The requested capacity is above [`MAX_CAP`].
    CapacityOverflow(CapacityOverflow),
}

/// Validates a capacity and load factor pair, as accepted by the fallible constructors.
pub(crate) fn validate(cap: usize, load_factor: f64) -> Result<(NonZeroUsize, LoadFactor), ConfigError> {
    let cap = NonZeroUsize::new(cap).ok_or(ZeroCapacityError)?;
    if cap.get() > MAX_CAP {
        return Err(CapacityOverflow.into());
    }
    let load_factor = LoadFactor::new(load_factor)?;
    Ok((cap, load_factor))
}
