//! The eight named one-sided tetracubes used as puzzle pieces.

use std::str::FromStr;

use crate::shape::Shape;

/// A named one-sided tetracube.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub enum TetracubeType {
    I,
    T,
    L,
    Pyramid,
    O,
    N,
    Z,
    ZMirror,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tetracube type {0:?}")]
pub struct UnknownTypeName(pub String);

impl TetracubeType {
    pub const ALL: [TetracubeType; 8] = [
        TetracubeType::I,
        TetracubeType::T,
        TetracubeType::L,
        TetracubeType::Pyramid,
        TetracubeType::O,
        TetracubeType::N,
        TetracubeType::Z,
        TetracubeType::ZMirror,
    ];

    /// The name the solver knows this type by.
    pub fn name(self) -> &'static str {
        match self {
            TetracubeType::I => "I",
            TetracubeType::T => "T",
            TetracubeType::L => "L",
            TetracubeType::Pyramid => "Pyramid",
            TetracubeType::O => "O",
            TetracubeType::N => "N",
            TetracubeType::Z => "Z",
            TetracubeType::ZMirror => "Z_mirror",
        }
    }

    /// One character used when drawing placed pieces.
    pub fn symbol(self) -> char {
        match self {
            TetracubeType::Pyramid => 'P',
            TetracubeType::ZMirror => 'M',
            other => other.name().chars().next().unwrap_or('?'),
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// The orientation every rotation list of this type is generated from.
    pub fn base_shape(self) -> Shape {
        match self {
            TetracubeType::I => Shape::from([(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 0, 3)]),
            TetracubeType::T => Shape::from([(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 1, 1)]),
            TetracubeType::L => Shape::from([(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 1, 0)]),
            TetracubeType::Pyramid => Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 0), (1, 0, 0)]),
            TetracubeType::O => Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1)]),
            TetracubeType::N => Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 1), (0, 1, 2)]),
            TetracubeType::Z => Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 0), (1, 1, 0)]),
            TetracubeType::ZMirror => Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 0), (1, 0, 1)]),
        }
    }
}

impl FromStr for TetracubeType {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TetracubeType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTypeName(s.to_string()))
    }
}

impl core::fmt::Display for TetracubeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The rotation list of every [`TetracubeType`].
///
/// Rotation ids are 1-based indices into these lists. Both the emitted
/// solver facts and the lookup of solver answers go through the same table,
/// so they always agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceTable {
    orientations: [Vec<Shape>; 8],
}

impl Default for PieceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceTable {
    pub fn new() -> Self {
        let orientations = TetracubeType::ALL.map(|t| t.base_shape().all_rotations());
        Self { orientations }
    }

    pub fn orientations(&self, ty: TetracubeType) -> &[Shape] {
        &self.orientations[ty.index()]
    }

    /// The orientation with 1-based `rotation_id`, if it exists.
    pub fn orientation(&self, ty: TetracubeType, rotation_id: usize) -> Option<&Shape> {
        let index = rotation_id.checked_sub(1)?;
        self.orientations(ty).get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TetracubeType, &[Shape])> + '_ {
        TetracubeType::ALL
            .into_iter()
            .map(move |t| (t, self.orientations(t)))
    }

    pub fn total_orientations(&self) -> usize {
        self.orientations.iter().map(Vec::len).sum()
    }
}
