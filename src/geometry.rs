//! Coordinate model for the 3x3x3 cube lattice.
//!
//! Cubie positions are integer triples centered on the origin, so each
//! component is one of -1, 0, +1. Keeping coordinates integral means face
//! membership tests stay exact no matter how many rotations are applied;
//! `snap` exists for consumers that interpolate positions in floating point
//! and need to land back on the lattice.

/// A 3D coordinate representing a cubie position, centered on the origin.
pub type Coord = (i32, i32, i32);

/// Grid dimension per axis.
pub const DIM: usize = 3;

/// Total number of cubies in the lattice (DIM^3).
pub const CUBIE_COUNT: usize = DIM * DIM * DIM;

/// Extremal coordinate value along any axis: (DIM - 1) / 2.
pub const HALF_WIDTH: i32 = (DIM as i32 - 1) / 2;

/// The valid coordinate values along each axis, in ascending order.
pub const LATTICE_VALUES: [i32; DIM] = [-1, 0, 1];

/// One of the three spatial axes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes, in catalog order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the coordinate component along this axis.
    #[inline]
    pub fn component(self, (x, y, z): Coord) -> i32 {
        match self {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        }
    }
}

/// Selects one of the two parallel faces perpendicular to an axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    /// Both signs, in catalog order.
    pub const ALL: [Sign; 2] = [Sign::Pos, Sign::Neg];

    /// Returns +1 or -1.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }
}

/// Iterates over all 27 lattice coordinates in x-major order.
///
/// The order is fixed: x varies slowest, z fastest. Cubie ids are assigned
/// from this order at construction, so it must stay stable.
pub fn lattice_coords() -> impl Iterator<Item = Coord> {
    LATTICE_VALUES.into_iter().flat_map(|x| {
        LATTICE_VALUES
            .into_iter()
            .flat_map(move |y| LATTICE_VALUES.into_iter().map(move |z| (x, y, z)))
    })
}

/// Snaps a floating-point component to the nearest valid lattice value.
///
/// Consumers that animate positions accumulate rounding error; snapping the
/// final position guarantees it coincides with the engine's exact coordinate.
#[inline]
pub fn snap(value: f32) -> i32 {
    (value.round() as i32).clamp(-HALF_WIDTH, HALF_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_has_27_distinct_coords() {
        let coords: Vec<Coord> = lattice_coords().collect();
        assert_eq!(coords.len(), CUBIE_COUNT);

        let mut deduped = coords.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), CUBIE_COUNT);
    }

    #[test]
    fn test_lattice_components_are_valid() {
        for (x, y, z) in lattice_coords() {
            for component in [x, y, z] {
                assert!(
                    LATTICE_VALUES.contains(&component),
                    "invalid component {component} in lattice"
                );
            }
        }
    }

    #[test]
    fn test_lattice_order_is_x_major() {
        let mut coords = lattice_coords();
        assert_eq!(coords.next(), Some((-1, -1, -1)));
        assert_eq!(coords.next(), Some((-1, -1, 0)));
        assert_eq!(coords.next(), Some((-1, -1, 1)));
        assert_eq!(coords.next(), Some((-1, 0, -1)));
        assert_eq!(coords.last(), Some((1, 1, 1)));
    }

    #[test]
    fn test_snap_rounds_to_nearest_lattice_value() {
        assert_eq!(snap(0.9999), 1);
        assert_eq!(snap(1.0001), 1);
        assert_eq!(snap(-0.9999), -1);
        assert_eq!(snap(0.0001), 0);
        assert_eq!(snap(-0.0001), 0);
    }

    #[test]
    fn test_snap_clamps_out_of_range_values() {
        assert_eq!(snap(1.6), 1);
        assert_eq!(snap(-1.6), -1);
    }

    #[test]
    fn test_axis_component() {
        let coord = (1, -1, 0);
        assert_eq!(Axis::X.component(coord), 1);
        assert_eq!(Axis::Y.component(coord), -1);
        assert_eq!(Axis::Z.component(coord), 0);
    }
}
