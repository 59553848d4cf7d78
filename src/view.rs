//! Browsing classified shapes as text.
//!
//! Navigation is a [`ViewState`] value: every button press produces a new
//! state, and [`render`] turns a state into a [`Frame`] to print.

use std::str::FromStr;

use crate::{
    answer::{Placement, PuzzleBox},
    classify::Classification,
    shape::{Cell, Shape},
};

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum Category {
    #[default]
    Free,
    Unilateral,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Free => "free",
            Category::Unilateral => "unilateral",
        }
    }

    pub fn shapes(self, classes: &Classification) -> &[Shape] {
        match self {
            Category::Free => &classes.free,
            Category::Unilateral => &classes.unilateral,
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Category::Free),
            "unilateral" => Ok(Category::Unilateral),
            _ => Err(format!("unknown category {s:?}")),
        }
    }
}

/// Which shape of which category is on screen.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct ViewState {
    pub category: Category,
    pub index: usize,
}

impl ViewState {
    /// The state after pressing "next" in a category of `len` shapes.
    #[must_use]
    pub fn next(self, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % len,
            ..self
        }
    }

    /// The state after pressing "previous" in a category of `len` shapes.
    #[must_use]
    pub fn prev(self, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        Self {
            index: (self.index + len - 1) % len,
            ..self
        }
    }

    /// Switch category, starting again at the first shape.
    #[must_use]
    pub fn with_category(self, category: Category) -> Self {
        Self { category, index: 0 }
    }
}

/// One drawable screen: a title and the shape to draw, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub title: String,
    pub shape: Option<Shape>,
}

pub fn render(state: &ViewState, classes: &Classification) -> Frame {
    let shapes = state.category.shapes(classes);
    let label = state.category.label();

    match shapes.get(state.index) {
        Some(shape) => {
            let mut title = label.to_string();
            title[..1].make_ascii_uppercase();

            Frame {
                title: format!("{title} Tetracube {} of {}", state.index + 1, shapes.len()),
                shape: Some(shape.clone()),
            }
        }
        None => Frame {
            title: format!("No tetracubes in {label} category"),
            shape: None,
        },
    }
}

/// Draw the cells picked by `symbol_at` as z-layers of x-by-y grids, with
/// `.` for empty cells.
fn write_layers<F>(
    f: &mut core::fmt::Formatter<'_>,
    (width, height, depth): (usize, usize, usize),
    symbol_at: F,
) -> core::fmt::Result
where
    F: Fn(Cell) -> Option<char>,
{
    for z in 0..depth {
        writeln!(f, "z = {z}")?;
        for y in (0..height).rev() {
            let row: String = (0..width)
                .map(|x| symbol_at(Cell::new(x as i32, y as i32, z as i32)).unwrap_or('.'))
                .collect();
            writeln!(f, "{row}")?;
        }
    }
    Ok(())
}

impl core::fmt::Display for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", self.title)?;

        let Some(shape) = &self.shape else {
            return Ok(());
        };

        writeln!(f, "{shape}")?;

        let shape = shape.normalized();
        write_layers(f, shape.bounds().dims(), |c| {
            shape.contains(&c).then_some('#')
        })
    }
}

/// The first `shown` placements of a solution, drawn inside their box.
#[derive(Clone, Debug)]
pub struct PlacementFrame<'a> {
    pub placements: &'a [Placement],
    pub puzzle_box: PuzzleBox,
    pub shown: usize,
}

pub fn render_placements(
    placements: &[Placement],
    puzzle_box: PuzzleBox,
    shown: usize,
) -> PlacementFrame<'_> {
    PlacementFrame {
        placements,
        puzzle_box,
        shown: shown.min(placements.len()),
    }
}

impl PlacementFrame<'_> {
    pub fn title(&self) -> String {
        let total = self.placements.len();
        let title = if self.shown == 0 {
            format!("Empty {} Grid", self.puzzle_box)
        } else if self.shown == total {
            format!("All Tetracubes in {}", self.puzzle_box)
        } else {
            format!("First {} Tetracubes in {}", self.shown, self.puzzle_box)
        };

        format!("{title} ({}/{total})", self.shown)
    }

    fn symbol_at(&self, cell: Cell) -> Option<char> {
        self.placements[..self.shown]
            .iter()
            .find(|p| p.cells.contains(&cell))
            .map(|p| p.ty.symbol())
    }
}

impl core::fmt::Display for PlacementFrame<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", self.title())?;

        let PuzzleBox {
            width,
            height,
            depth,
        } = self.puzzle_box;

        write_layers(f, (width, height, depth), |c| self.symbol_at(c))
    }
}
