//! A module containing [`HashSet`] and associated types.
//!
//! Currently, the only other included types provide owned and borrowed iteration over a set's
//! items.
//!
//! As a note, there is no mutable iterator over the items of a set because mutating them in place
//! would leave them in the wrong bucket.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;

pub use hash_set::*;
pub use iter::*;
