//! Enumeration and classification of tetracubes, the 4-cell polycubes,
//! for use as pieces in a packing puzzle.
//!
//! A single cell is grown one face-adjacent cell at a time
//! ([`expander`]), the raw 4-cell candidates are reduced to shape classes
//! ([`classify`]) using the 24 proper rotations of the cube ([`rotation`]),
//! and the named pieces ([`pieces`]) are written out as solver facts
//! ([`facts`]) and read back from solver answers ([`answer`]).

#[cfg(test)]
mod test;

pub mod answer;
mod canonical;
pub mod classify;
pub mod expander;
pub mod facts;
pub mod pieces;
pub mod rotation;
pub mod shape;
pub mod view;

pub use classify::{classify, Classification};
pub use expander::generate_tetracubes;
pub use pieces::{PieceTable, TetracubeType};
pub use shape::{Cell, Shape};
