//! Line segment between two coordinates.

use std::fmt;

use crate::Coordinate;

/// An immutable ordered pair of coordinates.
///
/// A zero-length segment (`start == end`) is well-defined; nothing requires
/// the endpoints to be distinct or to share a level.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    start: Coordinate,
    end: Coordinate,
}

impl LineSegment {
    #[inline]
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> Coordinate {
        self.end
    }

    /// `true` for the degenerate zero-length segment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.start, self.end)
    }
}
