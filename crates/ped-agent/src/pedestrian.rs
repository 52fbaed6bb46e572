//! The pedestrian entity.

use std::fmt;

use ped_core::{Identified, PedestrianId};
use ped_geometry::Coordinate;

/// A pedestrian: a unique id and a current position.
///
/// The id is claimed atomically at construction and never changes; equality
/// is id equality, so two pedestrians standing on the same coordinate are
/// still two pedestrians.  The position is freely writable — any coordinate
/// is admissible here, and reachability or collision checks belong to the
/// simulation layer.
#[derive(Debug)]
pub struct Pedestrian {
    id: PedestrianId,
    pub pos: Coordinate,
}

/// The name the entity goes by at the package boundary and in the Python
/// binding; `Pedestrian` internally.
pub type Agent = Pedestrian;

impl Pedestrian {
    pub fn new(pos: Coordinate) -> Self {
        Self {
            id: PedestrianId::next(),
            pos,
        }
    }

    #[inline]
    pub fn id(&self) -> PedestrianId {
        self.id
    }
}

impl Identified for Pedestrian {
    type Id = PedestrianId;

    #[inline]
    fn id(&self) -> PedestrianId {
        self.id
    }
}

impl PartialEq for Pedestrian {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pedestrian {}

/// Renders as `"PED <id>:(<position>)"`,
/// e.g. `"PED 4:((1.0000 m, 2.0000 m, 3))"`.
impl fmt::Display for Pedestrian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PED {}:({})", self.id, self.pos)
    }
}
