//! Hash-based collections using separate chaining.
//!
//! [`HashMap`] owns the bucket store and the growth logic, [`HashSet`] wraps a map with unit
//! values. Both place keys with the capacity-dependent string hash in [`index`] and are configured
//! through the types in [`config`].

pub mod config;
pub mod index;
pub mod map;
pub mod set;

#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
