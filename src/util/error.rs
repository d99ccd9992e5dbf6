//! Errors shared between the containers.

use derive_more::{Display, Error};

/// Returned when a bucket is requested with an index outside `[0, cap)`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for table with {cap} buckets!")]
pub struct IndexOutOfBounds {
    /// The requested bucket index.
    pub index: usize,
    /// The number of buckets at the time of the request.
    pub cap: usize,
}

/// Returned when growing a table would overflow its capacity.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
