//! Reading placements back out of a solver answer set.
//!
//! An answer set is a whitespace-separated list of atoms. Two of them are
//! needed to rebuild a solution:
//!
//! - `assignType(<id>,"<Type>")` names the piece type of a piece id;
//! - `position(<id>,<rotation_id>,<x>,<y>,<z>)` places that piece.
//!
//! Everything else the solver prints is ignored.

use std::{collections::BTreeMap, str::FromStr};

use crate::{
    pieces::{PieceTable, TetracubeType, UnknownTypeName},
    shape::{Cell, Shape},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("malformed atom `{0}`")]
    MalformedAtom(String),

    #[error(transparent)]
    UnknownType(#[from] UnknownTypeName),

    #[error("piece {0} has a type but no position")]
    MissingPosition(u32),

    #[error("piece {id} refers to {ty} rotation {rotation_id}, which does not exist")]
    UnknownOrientation {
        id: u32,
        ty: TetracubeType,
        rotation_id: usize,
    },

    #[error("invalid puzzle box `{0}`, expected DEPTHxHEIGHTxWIDTH")]
    InvalidBox(String),
}

/// Where the solver put one piece: a rotation id and the offset of that
/// orientation's origin.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Position {
    pub rotation_id: usize,
    pub offset: Cell,
}

/// The atoms of one answer set that describe piece placements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub types: BTreeMap<u32, TetracubeType>,
    pub positions: BTreeMap<u32, Position>,
}

/// A piece resolved to the cells it occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub id: u32,
    pub ty: TetracubeType,
    pub rotation_id: usize,
    pub cells: Shape,
}

/// Split `name(a,b,c)` into its name and arguments.
fn split_atom(atom: &str) -> Option<(&str, Vec<&str>)> {
    let (name, rest) = atom.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    Some((name, args.split(',').map(str::trim).collect()))
}

fn number<T: FromStr>(atom: &str, arg: &str) -> Result<T, AnswerError> {
    arg.parse()
        .map_err(|_| AnswerError::MalformedAtom(atom.to_string()))
}

impl Solution {
    /// Collect the `assignType` and `position` atoms of `text`.
    pub fn parse(text: &str) -> Result<Self, AnswerError> {
        let mut solution = Solution::default();

        for atom in text.split_whitespace() {
            let malformed = || AnswerError::MalformedAtom(atom.to_string());

            if atom.starts_with("assignType(") {
                let (_, args) = split_atom(atom).ok_or_else(malformed)?;
                let [id, ty] = args.as_slice() else {
                    return Err(malformed());
                };

                let ty = ty
                    .strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))
                    .ok_or_else(malformed)?;

                solution.types.insert(number(atom, id)?, ty.parse()?);
            } else if atom.starts_with("position(") {
                let (_, args) = split_atom(atom).ok_or_else(malformed)?;
                let [id, rotation_id, x, y, z] = args.as_slice() else {
                    return Err(malformed());
                };

                let position = Position {
                    rotation_id: number(atom, rotation_id)?,
                    offset: Cell::new(number(atom, x)?, number(atom, y)?, number(atom, z)?),
                };
                solution.positions.insert(number(atom, id)?, position);
            }
        }

        Ok(solution)
    }

    /// Resolve every typed piece to its absolute cells, ordered by piece id.
    pub fn placements(&self, table: &PieceTable) -> Result<Vec<Placement>, AnswerError> {
        self.types
            .iter()
            .map(|(&id, &ty)| {
                let position = self
                    .positions
                    .get(&id)
                    .ok_or(AnswerError::MissingPosition(id))?;

                let orientation = table.orientation(ty, position.rotation_id).ok_or(
                    AnswerError::UnknownOrientation {
                        id,
                        ty,
                        rotation_id: position.rotation_id,
                    },
                )?;

                let Cell { x, y, z } = position.offset;

                Ok(Placement {
                    id,
                    ty,
                    rotation_id: position.rotation_id,
                    cells: orientation.translated(x, y, z),
                })
            })
            .collect()
    }
}

/// The box a puzzle is packed into, written `DEPTHxHEIGHTxWIDTH`
/// (so `2x4x4` is 4 wide along x, 4 high along y and 2 deep along z).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PuzzleBox {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl PuzzleBox {
    pub fn contains(&self, cell: &Cell) -> bool {
        let inside = |v: i32, len: usize| v >= 0 && (v as usize) < len;
        inside(cell.x, self.width) && inside(cell.y, self.height) && inside(cell.z, self.depth)
    }

    pub fn volume(&self) -> usize {
        self.width * self.height * self.depth
    }
}

impl Default for PuzzleBox {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            depth: 2,
        }
    }
}

impl FromStr for PuzzleBox {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AnswerError::InvalidBox(s.to_string());

        let dims: Vec<usize> = s
            .split('x')
            .map(|d| d.parse().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;

        match dims.as_slice() {
            &[depth, height, width] if depth > 0 && height > 0 && width > 0 => Ok(PuzzleBox {
                width,
                height,
                depth,
            }),
            _ => Err(invalid()),
        }
    }
}

impl core::fmt::Display for PuzzleBox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}x{}", self.depth, self.height, self.width)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use super::*;

    pub const SOLUTION_2X4X4: &str = "assignType(1,\"O\") assignType(2,\"Z\") assignType(3,\"L\") assignType(4,\"Z_mirror\") assignType(5,\"T\") assignType(6,\"Pyramid\") assignType(7,\"N\") assignType(8,\"I\") position(1,1,3,0,0) position(8,2,0,0,0) position(6,5,2,2,0) position(2,6,1,0,0) position(4,6,0,1,0) position(7,11,0,0,0) position(5,12,1,2,0) position(3,20,0,2,1)";

    pub const SOLUTION_2X2X8: &str = "assignType(1,\"I\") assignType(2,\"T\") assignType(3,\"L\") assignType(4,\"Pyramid\") assignType(5,\"O\") assignType(6,\"N\") assignType(7,\"Z\") assignType(8,\"Z_mirror\") position(1,3,4,0,1) position(2,11,0,0,0) position(3,21,5,1,0) position(4,7,1,0,0) position(5,1,3,0,0) position(6,12,5,0,0) position(7,4,0,0,0) position(8,4,4,0,0)";

    fn assert_tiles(solution: &str, puzzle_box: PuzzleBox) {
        let table = PieceTable::new();
        let placements = Solution::parse(solution)
            .unwrap()
            .placements(&table)
            .unwrap();

        assert_eq!(placements.len(), 8);

        let cells: Vec<Cell> = placements
            .iter()
            .flat_map(|p| p.cells.cells().iter().copied())
            .collect();
        let distinct: HashSet<_> = cells.iter().collect();

        assert_eq!(cells.len(), puzzle_box.volume());
        assert_eq!(distinct.len(), cells.len());
        assert!(cells.iter().all(|c| puzzle_box.contains(c)));
    }

    #[test]
    fn sample_solutions_fill_their_box() {
        assert_tiles(SOLUTION_2X4X4, "2x4x4".parse().unwrap());
        assert_tiles(SOLUTION_2X2X8, "2x2x8".parse().unwrap());
    }

    #[test]
    fn parse_atoms() {
        let solution =
            Solution::parse("Answer: 1\nassignType(3,\"L\") hint(1) position(3,20,0,2,1)\nSATISFIABLE")
                .unwrap();

        assert_eq!(solution.types.get(&3), Some(&TetracubeType::L));
        assert_eq!(
            solution.positions.get(&3),
            Some(&Position {
                rotation_id: 20,
                offset: Cell::new(0, 2, 1),
            })
        );
    }

    #[test]
    fn resolve_placement_cells() {
        let table = PieceTable::new();
        let placements = Solution::parse("assignType(1,\"O\") position(1,1,3,0,0)")
            .unwrap()
            .placements(&table)
            .unwrap();

        assert_eq!(
            placements,
            vec![Placement {
                id: 1,
                ty: TetracubeType::O,
                rotation_id: 1,
                cells: Shape::from([(3, 0, 0), (3, 0, 1), (3, 1, 0), (3, 1, 1)]),
            }]
        );
    }

    #[test]
    fn malformed_atoms() {
        assert_eq!(
            Solution::parse("position(1,2,3)"),
            Err(AnswerError::MalformedAtom("position(1,2,3)".to_string()))
        );
        assert_eq!(
            Solution::parse("assignType(1,O)"),
            Err(AnswerError::MalformedAtom("assignType(1,O)".to_string()))
        );
        assert_eq!(
            Solution::parse("position(a,1,0,0,0)"),
            Err(AnswerError::MalformedAtom("position(a,1,0,0,0)".to_string()))
        );
        assert!(matches!(
            Solution::parse("assignType(1,\"S\")"),
            Err(AnswerError::UnknownType(_))
        ));
    }

    #[test]
    fn unresolvable_pieces() {
        let table = PieceTable::new();

        let missing = Solution::parse("assignType(2,\"I\")").unwrap();
        assert_eq!(missing.placements(&table), Err(AnswerError::MissingPosition(2)));

        let unknown = Solution::parse("assignType(2,\"I\") position(2,4,0,0,0)").unwrap();
        assert_eq!(
            unknown.placements(&table),
            Err(AnswerError::UnknownOrientation {
                id: 2,
                ty: TetracubeType::I,
                rotation_id: 4,
            })
        );
    }

    #[test]
    fn puzzle_boxes() {
        assert_eq!("2x4x4".parse::<PuzzleBox>(), Ok(PuzzleBox::default()));
        assert_eq!(
            "2x2x8".parse::<PuzzleBox>(),
            Ok(PuzzleBox {
                width: 8,
                height: 2,
                depth: 2,
            })
        );
        assert!("2x4".parse::<PuzzleBox>().is_err());
        assert!("0x4x4".parse::<PuzzleBox>().is_err());
        assert_eq!(PuzzleBox::default().to_string(), "2x4x4");
    }
}
