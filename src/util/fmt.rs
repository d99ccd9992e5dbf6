use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when formatted with `{:?}`, so pre-rendered fragments can
/// be passed to the [`Formatter`] debug builders without being quoted.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
