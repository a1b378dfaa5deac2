//! Shuffle driver: picks random rotations without trivial cancellation.
//!
//! Each pick after the first excludes exactly one catalog entry, the inverse
//! of the previously applied rotation, so no move immediately undoes its
//! predecessor. This is a scramble-quality heuristic, nothing more: longer
//! sequences that combine to a net identity through a different axis path
//! are still possible.

use rand::Rng;

use crate::cube::Cube;
use crate::rotation::{Rotation, ROTATIONS};

/// Default number of moves per shuffle.
pub const DEFAULT_MOVES: usize = 30;

/// State of an (at most one) active shuffle session.
///
/// The driver is idle when no moves remain. Consumers that animate each
/// rotation pump the session with [`Shuffler::next`] once the previous
/// rotation's coordinate commit has happened, so rotation i+1 always
/// observes the post-state of rotation i.
pub struct Shuffler {
    remaining: usize,
    last: Option<Rotation>,
}

impl Shuffler {
    /// Creates an idle driver.
    pub fn new() -> Self {
        Self {
            remaining: 0,
            last: None,
        }
    }

    /// Returns true while a shuffle session is active.
    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    /// Starts a session of `moves` picks.
    ///
    /// A start request while a session is running is silently ignored (not
    /// queued) and returns false.
    pub fn start(&mut self, moves: usize) -> bool {
        if self.is_running() {
            return false;
        }
        self.remaining = moves;
        self.last = None;
        true
    }

    /// Picks the next rotation of the session, or `None` once it is over.
    ///
    /// The caller must apply the returned rotation before asking for the
    /// next one; the pick is recorded so its inverse can be excluded.
    pub fn next(&mut self, rng: &mut impl Rng) -> Option<Rotation> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let rotation = pick(self.last, rng);
        self.last = Some(rotation);
        Some(rotation)
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks a rotation uniformly, excluding the inverse of the last one.
///
/// The exclusion is index remapping over the fixed catalog order: draw from
/// the 11 remaining slots and shift past the forbidden index. Bounded cost,
/// no retry loop.
fn pick(last: Option<Rotation>, rng: &mut impl Rng) -> Rotation {
    match last {
        None => ROTATIONS[rng.random_range(0..ROTATIONS.len())],
        Some(last) => {
            let forbidden = last.inverse().catalog_index();
            let mut index = rng.random_range(0..ROTATIONS.len() - 1);
            if index >= forbidden {
                index += 1;
            }
            ROTATIONS[index]
        }
    }
}

/// Shuffles a cube in place with `moves` random rotations.
///
/// Synchronous driver for callers that do not animate: each pick is applied
/// immediately. Returns the applied sequence.
pub fn shuffle(cube: &mut Cube, moves: usize, rng: &mut impl Rng) -> Vec<Rotation> {
    let mut shuffler = Shuffler::new();
    shuffler.start(moves);

    let mut applied = Vec::with_capacity(moves);
    while let Some(rotation) = shuffler.next(rng) {
        cube.apply(rotation);
        applied.push(rotation);
    }
    applied
}
