//! Unit tests for ped-geometry value types.

#[cfg(test)]
mod level {
    use crate::Level;

    #[test]
    fn default_is_ground_floor() {
        assert_eq!(Level::default(), Level::GROUND);
        assert_eq!(Level::default().id, 1);
    }

    #[test]
    fn ordering_follows_the_integer() {
        assert!(Level::new(-12) < Level::new(0));
        assert!(Level::new(2) > Level::GROUND);
    }

    #[test]
    fn display() {
        assert_eq!(Level::new(-3).to_string(), "-3");
        assert_eq!(Level::GROUND.to_string(), "1");
    }
}

#[cfg(test)]
mod vector {
    use ped_core::LengthExt;

    use crate::SpatialVector;

    #[test]
    fn equality_is_component_wise() {
        let v = SpatialVector::new(50.cm(), 2.m());
        assert_eq!(v, SpatialVector::new(0.5.m(), 200.cm()));
        assert_ne!(v, SpatialVector::new(2.m(), 50.cm()));
    }

    #[test]
    fn default_is_zero() {
        let v = SpatialVector::default();
        assert_eq!(v.x, 0.m());
        assert_eq!(v.y, 0.m());
    }

    #[test]
    fn display() {
        let v = SpatialVector::new(0.5.m(), (-0.25).m());
        assert_eq!(v.to_string(), "(0.5000 m, -0.2500 m)");
    }
}

#[cfg(test)]
mod coordinate {
    use ped_core::LengthExt;

    use crate::{Coordinate, Level};

    #[test]
    fn default_is_ground_origin() {
        let c = Coordinate::default();
        assert_eq!(c, Coordinate::new(0.m(), 0.m(), Level::GROUND));
    }

    #[test]
    fn equality_is_component_wise() {
        let c = Coordinate::new(1.m(), 2.m(), Level::new(3));
        assert_eq!(c, Coordinate::new(100.cm(), 2_000.mm(), Level::new(3)));
        assert_ne!(c, Coordinate::new(1.m(), 2.m(), Level::new(4)));
    }

    #[test]
    fn display() {
        let c = Coordinate::new(1.m(), 2.m(), Level::new(3));
        assert_eq!(c.to_string(), "(1.0000 m, 2.0000 m, 3)");
    }
}

#[cfg(test)]
mod line_segment {
    use ped_core::LengthExt;

    use crate::{Coordinate, Level, LineSegment};

    fn coord(x_m: i64, y_m: i64) -> Coordinate {
        Coordinate::new(x_m.m(), y_m.m(), Level::GROUND)
    }

    #[test]
    fn accessors() {
        let seg = LineSegment::new(coord(0, 0), coord(3, 4));
        assert_eq!(seg.start(), coord(0, 0));
        assert_eq!(seg.end(), coord(3, 4));
    }

    #[test]
    fn equality_is_pair_equality() {
        let seg = LineSegment::new(coord(0, 0), coord(1, 1));
        assert_eq!(seg, LineSegment::new(coord(0, 0), coord(1, 1)));
        // Direction matters: the reversed segment is a different value.
        assert_ne!(seg, LineSegment::new(coord(1, 1), coord(0, 0)));
    }

    #[test]
    fn zero_length_segment_is_well_defined() {
        let seg = LineSegment::new(coord(2, 2), coord(2, 2));
        assert!(seg.is_degenerate());
        assert!(!LineSegment::new(coord(0, 0), coord(0, 1)).is_degenerate());
    }
}

#[cfg(test)]
mod area {
    use ped_core::LengthExt;

    use crate::{Area, Coordinate, Level};

    pub(super) fn unit_square() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.m(), 0.m(), Level::GROUND),
            Coordinate::new(1.m(), 0.m(), Level::GROUND),
            Coordinate::new(1.m(), 1.m(), Level::GROUND),
            Coordinate::new(0.m(), 1.m(), Level::GROUND),
        ]
    }

    #[test]
    fn vertex_order_is_preserved() {
        let vertices = unit_square();
        let area = Area::new(vertices.clone());
        assert_eq!(area.polygon(), &vertices[..]);
        assert_eq!(area.vertex_count(), 4);
    }

    #[test]
    fn owns_an_independent_copy() {
        let mut vertices = unit_square();
        let area = Area::from(&vertices[..]);
        vertices.clear();
        assert_eq!(area.vertex_count(), 4);
        assert_eq!(area.polygon(), &unit_square()[..]);
    }

    #[test]
    fn equality_is_element_wise_in_order() {
        let area = Area::new(unit_square());
        assert_eq!(area, Area::new(unit_square()));

        let mut reversed = unit_square();
        reversed.reverse();
        // Same vertices, opposite winding: not the same polygon.
        assert_ne!(area, Area::new(reversed));
    }

    #[test]
    fn empty_area_is_allowed() {
        let area = Area::new(Vec::new());
        assert!(area.is_empty());
        assert_eq!(area.to_string(), "[]");
    }

    #[test]
    fn display_lists_vertices_in_order() {
        let area = Area::new(vec![
            Coordinate::new(0.m(), 0.m(), Level::GROUND),
            Coordinate::new(1.m(), 0.m(), Level::GROUND),
        ]);
        assert_eq!(
            area.to_string(),
            "[(0.0000 m, 0.0000 m, 1), (1.0000 m, 0.0000 m, 1)]"
        );
    }
}

#[cfg(test)]
mod special_area {
    use ped_core::Identified;

    use crate::{Area, SpecialArea};

    use super::area::unit_square;

    #[test]
    fn accessors() {
        let sa = SpecialArea::new(Area::new(unit_square()), 7);
        assert_eq!(sa.tag(), 7);
        assert_eq!(sa.area().vertex_count(), 4);
    }

    #[test]
    fn identity_not_structure() {
        let a = SpecialArea::new(Area::new(unit_square()), 1);
        let b = SpecialArea::new(Area::new(unit_square()), 1);
        // Same polygon, same tag — still two distinct areas.
        assert_ne!(a, b);
        assert!(a.id() < b.id());
    }

    #[test]
    fn display_carries_id_and_tag() {
        let sa = SpecialArea::new(Area::new(Vec::new()), 3);
        assert_eq!(sa.to_string(), format!("AREA {} tag 3: []", sa.id()));
    }
}
