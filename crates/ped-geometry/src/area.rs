//! Polygonal areas of the walkable geometry.

use std::fmt;

use ped_core::{Identified, SpecialAreaId};

use crate::Coordinate;

// ── Area ──────────────────────────────────────────────────────────────────────

/// An ordered polygon of coordinates.
///
/// Vertex order is significant (it defines the winding) and is preserved
/// exactly as supplied: no deduplication, no automatic closure.  The area
/// owns its vertex sequence — construction copies out of borrowed input, and
/// cloning an area deep-copies the sequence.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    polygon: Vec<Coordinate>,
}

impl Area {
    #[inline]
    pub fn new(polygon: Vec<Coordinate>) -> Self {
        Self { polygon }
    }

    /// Read-only view of the vertices, in construction order.
    #[inline]
    pub fn polygon(&self) -> &[Coordinate] {
        &self.polygon
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.polygon.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }
}

impl From<&[Coordinate]> for Area {
    /// Copies the caller's vertices; later mutation of the source does not
    /// affect the area.
    fn from(polygon: &[Coordinate]) -> Self {
        Self {
            polygon: polygon.to_vec(),
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, vertex) in self.polygon.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "]")
    }
}

// ── SpecialArea ───────────────────────────────────────────────────────────────

/// An area with a simulation role, e.g. a spawn zone, a goal, an obstacle.
///
/// The `u32` classification tag names that role; its meaning belongs to the
/// simulation layer consuming the geometry.  Every special area claims a
/// [`SpecialAreaId`] at construction, and equality is id equality.
#[derive(Debug)]
pub struct SpecialArea {
    id: SpecialAreaId,
    area: Area,
    tag: u32,
}

impl SpecialArea {
    pub fn new(area: Area, tag: u32) -> Self {
        Self {
            id: SpecialAreaId::next(),
            area,
            tag,
        }
    }

    #[inline]
    pub fn area(&self) -> &Area {
        &self.area
    }

    #[inline]
    pub fn tag(&self) -> u32 {
        self.tag
    }
}

impl Identified for SpecialArea {
    type Id = SpecialAreaId;

    #[inline]
    fn id(&self) -> SpecialAreaId {
        self.id
    }
}

impl PartialEq for SpecialArea {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SpecialArea {}

impl fmt::Display for SpecialArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AREA {} tag {}: {}", self.id, self.tag, self.area)
    }
}
