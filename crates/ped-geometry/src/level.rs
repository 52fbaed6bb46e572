//! Discrete floor identifier.

use std::fmt;

/// The floor a coordinate lies on.
///
/// Levels are plain integers; equality, ordering, and hashing delegate to
/// the id.  Negative levels (basements) are valid.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub id: i32,
}

impl Level {
    /// The ground floor, level 1.
    pub const GROUND: Level = Level { id: 1 };

    #[inline]
    pub const fn new(id: i32) -> Self {
        Self { id }
    }
}

impl Default for Level {
    /// The ground floor.
    #[inline]
    fn default() -> Self {
        Self::GROUND
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
