//! Quarter-turn rotations: the value type, the 12-entry catalog, and the
//! coordinate transform a rotation induces.
//!
//! A rotation names a face (axis + sign) and a turn direction as seen from
//! outside the cube along the outward normal. The transform is a signed
//! permutation of the coordinate triple: the component along the rotation
//! axis is fixed, the other two are swapped with one negated.

use std::fmt;

use crate::geometry::{Axis, Coord, Sign};

/// One quarter turn of a face.
///
/// Equality is structural on all three fields. The only legitimate source of
/// rotation values for shuffling is [`ROTATIONS`]; the enums in the fields
/// make malformed axis/sign values unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rotation {
    /// Axis perpendicular to the rotating face.
    pub axis: Axis,
    /// Which of the two parallel faces along `axis` rotates.
    pub sign: Sign,
    /// Turn direction viewed from outside along the outward normal.
    pub clockwise: bool,
}

/// All 12 legal quarter turns: 3 axes x 2 signs x 2 directions.
///
/// Ordering note: axis varies slowest, direction fastest, so the inverse of
/// entry `i` is always entry `i ^ 1`. `catalog_index` and the shuffle
/// driver's exclusion remapping rely on this ordering.
pub const ROTATIONS: [Rotation; 12] = [
    Rotation { axis: Axis::X, sign: Sign::Pos, clockwise: true },
    Rotation { axis: Axis::X, sign: Sign::Pos, clockwise: false },
    Rotation { axis: Axis::X, sign: Sign::Neg, clockwise: true },
    Rotation { axis: Axis::X, sign: Sign::Neg, clockwise: false },
    Rotation { axis: Axis::Y, sign: Sign::Pos, clockwise: true },
    Rotation { axis: Axis::Y, sign: Sign::Pos, clockwise: false },
    Rotation { axis: Axis::Y, sign: Sign::Neg, clockwise: true },
    Rotation { axis: Axis::Y, sign: Sign::Neg, clockwise: false },
    Rotation { axis: Axis::Z, sign: Sign::Pos, clockwise: true },
    Rotation { axis: Axis::Z, sign: Sign::Pos, clockwise: false },
    Rotation { axis: Axis::Z, sign: Sign::Neg, clockwise: true },
    Rotation { axis: Axis::Z, sign: Sign::Neg, clockwise: false },
];

impl Rotation {
    /// Returns the rotation that exactly undoes this one.
    ///
    /// Same face, opposite direction. Applying a rotation and then its
    /// inverse restores every affected cubie's coordinate.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }

    /// Returns this rotation's position in [`ROTATIONS`].
    #[inline]
    pub fn catalog_index(self) -> usize {
        let axis = self.axis as usize;
        let sign = self.sign as usize;
        let direction = usize::from(!self.clockwise);
        axis * 4 + sign * 2 + direction
    }

    /// Maps a coordinate to its position after this quarter turn.
    ///
    /// The handedness factor `s` folds the face choice and the turn
    /// direction together, so e.g. turning the +X face clockwise moves
    /// cubies the same way as turning the -X face counterclockwise (they
    /// are distinct rotations because they affect different faces).
    #[inline]
    pub fn transform(self, (x, y, z): Coord) -> Coord {
        let s = self.sign.value() * if self.clockwise { 1 } else { -1 };
        match self.axis {
            Axis::X => (x, s * z, -s * y),
            Axis::Y => (-s * z, y, s * x),
            Axis::Z => (s * y, -s * x, z),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        };
        let sign = match self.sign {
            Sign::Pos => '+',
            Sign::Neg => '-',
        };
        let direction = if self.clockwise { "cw" } else { "ccw" };
        write!(f, "{axis}{sign} {direction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lattice_coords;

    #[test]
    fn test_catalog_has_12_distinct_rotations() {
        for (i, a) in ROTATIONS.iter().enumerate() {
            for b in &ROTATIONS[i + 1..] {
                assert_ne!(a, b, "duplicate catalog entry {a}");
            }
        }
    }

    #[test]
    fn test_catalog_covers_every_combination() {
        for axis in Axis::ALL {
            for sign in Sign::ALL {
                for clockwise in [true, false] {
                    let rotation = Rotation {
                        axis,
                        sign,
                        clockwise,
                    };
                    assert!(ROTATIONS.contains(&rotation), "missing {rotation}");
                }
            }
        }
    }

    #[test]
    fn test_catalog_index_roundtrip() {
        for (i, rotation) in ROTATIONS.iter().enumerate() {
            assert_eq!(rotation.catalog_index(), i);
        }
    }

    #[test]
    fn test_inverse_is_adjacent_catalog_entry() {
        for (i, rotation) in ROTATIONS.iter().enumerate() {
            assert_eq!(rotation.inverse(), ROTATIONS[i ^ 1]);
        }
    }

    #[test]
    fn test_inverse_is_an_involution() {
        for rotation in ROTATIONS {
            assert_eq!(rotation.inverse().inverse(), rotation);
        }
    }

    #[test]
    fn test_inverse_transform_undoes_transform() {
        for rotation in ROTATIONS {
            for coord in lattice_coords() {
                let there = rotation.transform(coord);
                assert_eq!(rotation.inverse().transform(there), coord);
            }
        }
    }

    #[test]
    fn test_transform_has_order_4() {
        for rotation in ROTATIONS {
            for coord in lattice_coords() {
                let mut current = coord;
                for _ in 0..4 {
                    current = rotation.transform(current);
                }
                assert_eq!(current, coord, "4x {rotation} should fix {coord:?}");
            }
        }
    }

    #[test]
    fn test_transform_is_not_the_identity() {
        // only the point on the rotation axis itself may be fixed
        for rotation in ROTATIONS {
            let moved = lattice_coords()
                .filter(|&coord| rotation.transform(coord) != coord)
                .count();
            assert!(moved > 0, "{rotation} fixes every coordinate");
        }
    }

    #[test]
    fn test_z_positive_clockwise_example() {
        let rotation = Rotation {
            axis: Axis::Z,
            sign: Sign::Pos,
            clockwise: true,
        };
        assert_eq!(rotation.transform((1, 1, 1)), (1, -1, 1));
        assert_eq!(rotation.transform((-1, 0, 1)), (0, 1, 1));
        assert_eq!(rotation.transform((0, 0, 1)), (0, 0, 1));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ROTATIONS[0].to_string(), "x+ cw");
        assert_eq!(ROTATIONS[11].to_string(), "z- ccw");
    }
}
