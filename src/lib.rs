//! A pair of string-keyed associative containers, [`HashMap`](hash::HashMap) and
//! [`HashSet`](hash::HashSet), built on open hashing with separate chaining.
//!
//! # Method
//! Each container owns a fixed number of buckets, each bucket being a short list of entries whose
//! keys currently hash to that bucket's index. Every operation hashes the key, locates the bucket
//! and scans it linearly. Once the ratio of entries to buckets reaches the container's load
//! factor, the bucket count doubles and every entry is rehashed.
//!
//! The hash function is a polynomial rolling hash reduced modulo the current capacity at every
//! step (see [`hash::index`]), which makes the index of a key depend on the capacity. Because of
//! this a resize recomputes the index of every entry rather than splitting buckets.
//!
//! [`HashSet`](hash::HashSet) is a thin wrapper over a [`HashMap`](hash::HashMap) with a unit
//! value, so both containers share one bucket store and one resize path.
//!
//! # Error Handling
//! Looking up, removing or testing for a key that isn't present is a normal outcome and is
//! reported through [`Option`] or [`bool`] return values. Errors are reserved for invalid
//! configuration ([`ConfigError`](hash::config::ConfigError)) and for bucket access with an index
//! outside the table ([`IndexOutOfBounds`](util::error::IndexOutOfBounds)). Errors are strongly
//! typed structs, combined into enums for static dispatch.
//!
//! # Logging
//! The containers emit [`log`] records: `debug` when a table is resized and `trace` for individual
//! insertions and removals. No logger is installed by this crate.
//!
//! # Concurrency
//! None. The containers are plain owned values; share them across threads the way you would any
//! other `&mut`-mutated collection.

#![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod hash;
pub mod util;
