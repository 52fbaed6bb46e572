//! Planar displacement vector.

use std::fmt;

use ped_core::Length;

/// An (x, y) pair of lengths describing a planar direction or displacement.
///
/// Purely a value aggregate; equality is component-wise.  Vector arithmetic
/// belongs to the simulation kernels that consume this type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpatialVector {
    pub x: Length,
    pub y: Length,
}

impl SpatialVector {
    #[inline]
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for SpatialVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
