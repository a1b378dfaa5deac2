//! Twisty Cube Engine Library
//!
//! Discrete state engine for a 3x3x3 twisty puzzle: cubie coordinates on a
//! 27-point lattice, the algebra of quarter-turn face rotations, and a
//! shuffle driver that never immediately undoes its previous move. Rendering
//! and animation consume this state but live outside the engine.

pub mod cube;
pub mod geometry;
pub mod rotation;
pub mod shuffle;

pub use cube::{Cube, Cubie, CubieId};
pub use rotation::{Rotation, ROTATIONS};
