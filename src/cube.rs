//! Cubie registry: the puzzle's mutable state.
//!
//! The cube owns all 27 cubies and is the sole mutator of their coordinates.
//! Cubies are created once at construction and never destroyed; a rotation
//! only permutes coordinates. At every committed state the cubies occupy the
//! full lattice bijectively: 27 cubies, 27 distinct coordinates.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::geometry::{lattice_coords, Coord, CUBIE_COUNT, HALF_WIDTH, LATTICE_VALUES};
use crate::rotation::Rotation;

/// Stable identity of a cubie, assigned once at construction.
///
/// Consumers that track per-cubie state (scene nodes, in-flight animations)
/// must key it by this id, not by a cubie's position in any list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CubieId(u8);

impl CubieId {
    /// Returns the id as a dense index in `0..CUBIE_COUNT`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Single-character label for text rendering: 0-9, then A-Q.
    fn display_char(self) -> char {
        if self.0 < 10 {
            char::from(b'0' + self.0)
        } else {
            char::from(b'A' + self.0 - 10)
        }
    }
}

/// One of the 27 unit pieces, carrying its current coordinate.
#[derive(Clone, Copy, Debug)]
pub struct Cubie {
    /// Stable identity.
    pub id: CubieId,
    /// Current lattice position.
    pub coord: Coord,
}

/// The full 3x3x3 cube state.
#[derive(Clone)]
pub struct Cube {
    cubies: Vec<Cubie>,
}

impl Cube {
    /// Creates the solved cube: cubie `i` sits at the `i`-th lattice
    /// coordinate (x-major order).
    pub fn solved() -> Self {
        let cubies = lattice_coords()
            .enumerate()
            .map(|(i, coord)| Cubie {
                id: CubieId(i as u8),
                coord,
            })
            .collect();
        Self { cubies }
    }

    /// Read access to all cubies, in id order.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Looks up a cubie by id.
    pub fn cubie(&self, id: CubieId) -> &Cubie {
        // ids are dense indices into the construction-ordered list
        &self.cubies[id.index()]
    }

    /// Returns the ids of the 9 cubies on the face a rotation affects.
    ///
    /// A cubie is on the face iff its component along the rotation's axis
    /// equals the extremal value on the rotation's side. Coordinates are
    /// exact integers, so this is a plain equality test.
    pub fn face(&self, rotation: Rotation) -> Vec<CubieId> {
        let extremal = rotation.sign.value() * HALF_WIDTH;
        self.cubies
            .iter()
            .filter(|cubie| rotation.axis.component(cubie.coord) == extremal)
            .map(|cubie| cubie.id)
            .collect()
    }

    /// Applies one rotation as a single atomic state transition.
    ///
    /// Selects the affected face and replaces each selected cubie's
    /// coordinate with its transformed value; every other cubie is left
    /// untouched. The transform permutes the face's coordinate set onto
    /// itself, so the lattice bijection is preserved.
    pub fn apply(&mut self, rotation: Rotation) {
        let extremal = rotation.sign.value() * HALF_WIDTH;
        for cubie in &mut self.cubies {
            if rotation.axis.component(cubie.coord) == extremal {
                cubie.coord = rotation.transform(cubie.coord);
            }
        }
        debug_assert!(self.occupies_full_lattice());
    }

    /// Checks the bijection invariant: 27 distinct coordinates covering the
    /// whole lattice.
    pub fn occupies_full_lattice(&self) -> bool {
        let coords: FxHashSet<Coord> = self.cubies.iter().map(|cubie| cubie.coord).collect();
        coords.len() == CUBIE_COUNT && lattice_coords().all(|coord| coords.contains(&coord))
    }

    /// Returns true if every cubie is back at its home coordinate.
    pub fn is_solved(&self) -> bool {
        self.cubies
            .iter()
            .zip(lattice_coords())
            .all(|(cubie, home)| cubie.coord == home)
    }

    /// Formats the state as three z-slices of cubie labels.
    ///
    /// Each slice lists rows from y=1 down to y=-1, columns from x=-1 to
    /// x=1; cells show the id of the cubie currently at that position.
    pub fn format_state(&self) -> String {
        let by_coord: FxHashMap<Coord, CubieId> = self
            .cubies
            .iter()
            .map(|cubie| (cubie.coord, cubie.id))
            .collect();

        let mut output = String::new();
        for (i, z) in LATTICE_VALUES.iter().rev().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("z={z}\n"));
            for y in LATTICE_VALUES.iter().rev() {
                for x in LATTICE_VALUES {
                    let id = by_coord[&(x, *y, *z)];
                    output.push(id.display_char());
                }
                output.push('\n');
            }
        }

        output
    }
}
