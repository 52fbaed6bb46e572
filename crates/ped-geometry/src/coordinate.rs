//! Position in the walkable geometry.

use std::fmt;

use ped_core::Length;

use crate::Level;

/// An (x, y, level) triple locating a point on a specific floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: Length,
    pub y: Length,
    pub lvl: Level,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: Length, y: Length, lvl: Level) -> Self {
        Self { x, y, lvl }
    }
}

impl Default for Coordinate {
    /// The origin of the ground floor: `(0 m, 0 m, level 1)`.
    #[inline]
    fn default() -> Self {
        Self::new(Length::ZERO, Length::ZERO, Level::GROUND)
    }
}

/// Renders as `"(x, y, lvl)"` using each component's own format,
/// e.g. `"(1.0000 m, 2.0000 m, 3)"`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.lvl)
    }
}
