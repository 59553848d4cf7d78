//! The 24 proper rotations of the cube, and the rotation images of shapes.

use std::iter::FusedIterator;

use hashbrown::HashSet;

use crate::shape::{Cell, Shape};

/// Which signed source axis feeds one output axis.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum MatrixCol {
    XP,
    XN,
    YP,
    YN,
    ZP,
    ZN,
}

use MatrixCol::*;

impl MatrixCol {
    #[inline]
    pub fn pick(self, cell: Cell) -> i32 {
        match self {
            XP => cell.x,
            XN => -cell.x,
            YP => cell.y,
            YN => -cell.y,
            ZP => cell.z,
            ZN => -cell.z,
        }
    }

    /// This column as a row of a 3x3 matrix.
    pub fn row(self) -> [i32; 3] {
        match self {
            XP => [1, 0, 0],
            XN => [-1, 0, 0],
            YP => [0, 1, 0],
            YN => [0, -1, 0],
            ZP => [0, 0, 1],
            ZN => [0, 0, -1],
        }
    }

    fn from_row(row: [i32; 3]) -> Option<Self> {
        let col = match row {
            [1, 0, 0] => XP,
            [-1, 0, 0] => XN,
            [0, 1, 0] => YP,
            [0, -1, 0] => YN,
            [0, 0, 1] => ZP,
            [0, 0, -1] => ZN,
            _ => return None,
        };
        Some(col)
    }
}

/// A signed permutation of the three axes.
///
/// `(x, y, z)` maps to `(x_col.pick(c), y_col.pick(c), z_col.pick(c))`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Rotation {
    pub x_col: MatrixCol,
    pub y_col: MatrixCol,
    pub z_col: MatrixCol,
}

const fn rot(x_col: MatrixCol, y_col: MatrixCol, z_col: MatrixCol) -> Rotation {
    Rotation {
        x_col,
        y_col,
        z_col,
    }
}

/// The proper rotation group of the cube.
///
/// The order of this table determines the order of [`Shape::all_rotations`],
/// and therefore the rotation ids handed to the solver.
#[rustfmt::skip]
pub const ROTATIONS: [Rotation; 24] = [
    rot(XP, YP, ZP), rot(XP, ZP, YN), rot(XP, YN, ZN), rot(XP, ZN, YP),
    rot(XN, YP, ZN), rot(XN, ZN, YN), rot(XN, YN, ZP), rot(XN, ZP, YP),
    rot(YP, XP, ZN), rot(YP, ZN, XN), rot(YP, XN, ZP), rot(YP, ZP, XP),
    rot(YN, XP, ZP), rot(YN, ZP, XN), rot(YN, XN, ZN), rot(YN, ZN, XP),
    rot(ZP, XP, YP), rot(ZP, YP, XN), rot(ZP, XN, YN), rot(ZP, YN, XP),
    rot(ZN, XP, YN), rot(ZN, YN, XN), rot(ZN, XN, YP), rot(ZN, YP, XP),
];

impl Rotation {
    pub const IDENTITY: Rotation = rot(XP, YP, ZP);

    #[inline]
    pub fn apply(&self, cell: Cell) -> Cell {
        Cell::new(
            self.x_col.pick(cell),
            self.y_col.pick(cell),
            self.z_col.pick(cell),
        )
    }

    /// Rotate every cell of `shape`, keeping the cell order.
    pub fn apply_shape(&self, shape: &Shape) -> Shape {
        shape.cells().iter().map(|c| self.apply(*c)).collect()
    }

    pub fn matrix(&self) -> [[i32; 3]; 3] {
        [self.x_col.row(), self.y_col.row(), self.z_col.row()]
    }

    /// Build a rotation from a matrix, if every row is a signed unit vector.
    pub fn from_matrix(m: [[i32; 3]; 3]) -> Option<Rotation> {
        Some(Rotation {
            x_col: MatrixCol::from_row(m[0])?,
            y_col: MatrixCol::from_row(m[1])?,
            z_col: MatrixCol::from_row(m[2])?,
        })
    }

    pub fn determinant(&self) -> i32 {
        let [a, b, c] = self.matrix();
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// Whether this is a signed permutation with determinant +1.
    pub fn is_proper(&self) -> bool {
        let m = self.matrix();
        let axes_distinct = (0..3).all(|col| m.iter().filter(|row| row[col] != 0).count() == 1);
        axes_distinct && self.determinant() == 1
    }

    /// The rotation that applies `other` first, then `self`.
    pub fn compose(&self, other: &Rotation) -> Rotation {
        let a = self.matrix();
        let b = other.matrix();
        let mut m = [[0; 3]; 3];

        for (r, row) in m.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = (0..3).map(|k| a[r][k] * b[k][c]).sum();
            }
        }

        Rotation::from_matrix(m).expect("product of signed permutations is a signed permutation")
    }
}

/// Yields the normalized and sorted image of a shape under each entry of
/// [`ROTATIONS`], duplicates included.
struct RotatedImages<'a> {
    base: &'a Shape,
    next: usize,
}

impl Iterator for RotatedImages<'_> {
    type Item = Shape;

    fn next(&mut self) -> Option<Self::Item> {
        let rotation = ROTATIONS.get(self.next)?;
        self.next += 1;
        Some(rotation.apply_shape(self.base).normalized().sorted())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = ROTATIONS.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RotatedImages<'_> {}

impl FusedIterator for RotatedImages<'_> {}

impl Shape {
    /// Obtain an iterator yielding the normalized, sorted image of `self`
    /// under every rotation, in table order. Images of symmetric shapes
    /// repeat.
    pub fn rotated_images(&self) -> impl Iterator<Item = Shape> + ExactSizeIterator + '_ {
        RotatedImages {
            base: self,
            next: 0,
        }
    }

    /// All distinct rotation images of `self`, normalized and sorted.
    ///
    /// Each image is kept at the position of the first rotation that
    /// produced it, so the result is stable for a given shape.
    ///
    /// Panics if the shape is empty.
    pub fn all_rotations(&self) -> Vec<Shape> {
        let mut seen = HashSet::with_capacity(ROTATIONS.len());
        let mut out = Vec::new();

        for image in self.rotated_images() {
            if seen.insert(image.clone()) {
                out.push(image);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_the_proper_rotation_group() {
        for r in ROTATIONS.iter() {
            assert!(r.is_proper(), "{r:?} is not a proper rotation");
        }

        let distinct: std::collections::HashSet<_> = ROTATIONS.iter().collect();
        assert_eq!(distinct.len(), 24);

        for a in ROTATIONS.iter() {
            for b in ROTATIONS.iter() {
                assert!(ROTATIONS.contains(&a.compose(b)));
            }
        }
    }

    #[test]
    fn first_entry_is_identity() {
        assert_eq!(ROTATIONS[0], Rotation::IDENTITY);
        let cell = Cell::new(1, 2, 3);
        assert_eq!(Rotation::IDENTITY.apply(cell), cell);
    }

    #[test]
    fn matrices_are_orthogonal() {
        for r in ROTATIONS.iter() {
            let m = r.matrix();
            for i in 0..3 {
                for j in 0..3 {
                    let dot: i32 = (0..3).map(|k| m[i][k] * m[j][k]).sum();
                    assert_eq!(dot, i32::from(i == j));
                }
            }
        }
    }

    #[test]
    fn reflection_is_not_proper() {
        let mirror = Rotation {
            x_col: XN,
            y_col: YP,
            z_col: ZP,
        };
        assert_eq!(mirror.determinant(), -1);
        assert!(!mirror.is_proper());
        assert!(!ROTATIONS.contains(&mirror));
    }

    #[test]
    fn apply_follows_orientation_code() {
        // (x, z, -y)
        let r = ROTATIONS[1];
        assert_eq!(r.apply(Cell::new(1, 2, 3)), Cell::new(1, 3, -2));
    }

    #[test]
    fn correct_amount_of_rotated_images() {
        let shape = Shape::from([(0, 0, 0), (0, 0, 1)]);
        assert_eq!(shape.rotated_images().len(), 24);
        assert_eq!(shape.rotated_images().count(), 24);
    }

    #[test]
    fn straight_line_rotations() {
        let i = Shape::from([(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 0, 3)]);
        let rotations = i.all_rotations();

        assert_eq!(rotations.len(), 3);
        assert_eq!(rotations[0], i);
        assert_eq!(
            rotations[1],
            Shape::from([(0, 0, 0), (0, 1, 0), (0, 2, 0), (0, 3, 0)])
        );
        assert_eq!(
            rotations[2],
            Shape::from([(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)])
        );
    }

    #[test]
    fn rotations_are_deterministic() {
        let l = Shape::from([(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 1, 0)]);
        assert_eq!(l.all_rotations(), l.all_rotations());
        assert_eq!(l.all_rotations().len(), 24);
    }

    #[test]
    fn rotation_images_are_normalized_and_sorted() {
        let t = Shape::from([(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 1, 1)]);
        for image in t.all_rotations() {
            assert_eq!(image, image.sorted());
            assert_eq!(image.bounds().min, Cell::ORIGIN);
        }
    }

    #[test]
    fn single_cell_has_one_rotation() {
        assert_eq!(Shape::seed().all_rotations(), vec![Shape::seed()]);
    }
}
