//! Lattice cells and the shapes built out of them.

use std::collections::VecDeque;

/// A single unit cube, identified by the lattice point at its minimum corner.
///
/// Cells order lexicographically: first by `x`, then `y`, then `z`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The six face-adjacent neighbours of this cell, in the order
    /// `+x, -x, +y, -y, +z, -z`.
    pub fn faces(self) -> std::array::IntoIter<Cell, 6> {
        let Cell { x, y, z } = self;
        [
            Cell::new(x + 1, y, z),
            Cell::new(x - 1, y, z),
            Cell::new(x, y + 1, z),
            Cell::new(x, y - 1, z),
            Cell::new(x, y, z + 1),
            Cell::new(x, y, z - 1),
        ]
        .into_iter()
    }

    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy, self.z + dz)
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        let d = (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs();
        d == 1
    }
}

impl From<(i32, i32, i32)> for Cell {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Cell::new(x, y, z)
    }
}

impl From<Cell> for (i32, i32, i32) {
    fn from(value: Cell) -> Self {
        (value.x, value.y, value.z)
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The extent of a shape along each axis, as inclusive `(min, max)` corners.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Bounds {
    pub min: Cell,
    pub max: Cell,
}

impl Bounds {
    /// The number of cells spanned along each axis.
    pub fn dims(&self) -> (usize, usize, usize) {
        (
            (self.max.x - self.min.x + 1) as usize,
            (self.max.y - self.min.y + 1) as usize,
            (self.max.z - self.min.z + 1) as usize,
        )
    }
}

/// An ordered sequence of distinct cells.
///
/// Growth appends cells, so the order records how a shape was built. Two
/// shapes compare equal only if their sequences are equal; use
/// [`Shape::sorted`] to compare cell sets.
#[derive(PartialEq, Eq, Hash, Clone, Debug, PartialOrd, Ord, Default)]
pub struct Shape {
    cells: Vec<Cell>,
}

impl From<Vec<Cell>> for Shape {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

/// Writing shapes out as coordinate triples is convenient
/// when you're writing them out by hand.
impl<const N: usize> From<[(i32, i32, i32); N]> for Shape {
    fn from(value: [(i32, i32, i32); N]) -> Self {
        Self {
            cells: value.into_iter().map(Cell::from).collect(),
        }
    }
}

impl FromIterator<Cell> for Shape {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "]")
    }
}

impl Shape {
    /// The single cube at the origin that all growth starts from.
    pub fn seed() -> Self {
        Self {
            cells: vec![Cell::ORIGIN],
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Create a new [`Shape`] with `cell` appended to the end.
    pub fn with_cell(&self, cell: Cell) -> Shape {
        let mut cells = Vec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(cell);
        Shape { cells }
    }

    /// The per-axis minimum and maximum of this shape.
    ///
    /// Panics if the shape is empty.
    pub fn bounds(&self) -> Bounds {
        assert!(!self.is_empty(), "cannot take the bounds of an empty shape");

        let first = self.cells[0];
        self.cells.iter().fold(
            Bounds {
                min: first,
                max: first,
            },
            |Bounds { min, max }, c| Bounds {
                min: Cell::new(min.x.min(c.x), min.y.min(c.y), min.z.min(c.z)),
                max: Cell::new(max.x.max(c.x), max.y.max(c.y), max.z.max(c.z)),
            },
        )
    }

    /// Create a new [`Shape`], representing `self` translated so that the
    /// minimum coordinate along every axis is 0. Cell order is preserved.
    ///
    /// Panics if the shape is empty.
    pub fn normalized(&self) -> Shape {
        let Bounds { min, .. } = self.bounds();
        self.translated(-min.x, -min.y, -min.z)
    }

    /// Create a new [`Shape`], representing `self` with its cells in
    /// ascending order.
    pub fn sorted(&self) -> Shape {
        let mut cells = self.cells.clone();
        cells.sort_unstable();
        Shape { cells }
    }

    /// Create a new [`Shape`], representing `self` moved by `(dx, dy, dz)`.
    pub fn translated(&self, dx: i32, dy: i32, dz: i32) -> Shape {
        self.cells.iter().map(|c| c.offset(dx, dy, dz)).collect()
    }

    /// Check whether every cell can be reached from the first one through
    /// face-adjacent cells.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.cells.first() else {
            return false;
        };

        let mut visited = vec![false; self.cells.len()];
        visited[0] = true;
        let mut queue = VecDeque::from([start]);

        while let Some(cell) = queue.pop_front() {
            for (i, other) in self.cells.iter().enumerate() {
                if !visited[i] && cell.is_adjacent(other) {
                    visited[i] = true;
                    queue.push_back(*other);
                }
            }
        }

        visited.into_iter().all(|v| v)
    }
}
