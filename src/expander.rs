//! This module implements an iterator that provides all N + 1 expansions
//! for a shape of N cells, and the growth passes built on top of it.

use hashbrown::HashSet;
use indicatif::ProgressBar;

use crate::shape::{Cell, Shape};

type Sides = std::array::IntoIter<Cell, 6>;

#[derive(Clone)]
struct ExpansionIterator<'a> {
    shape: &'a Shape,
    cell_index: usize,
    iterating_cell: Option<Sides>,
}

impl Iterator for ExpansionIterator<'_> {
    type Item = Shape;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.iterating_cell.is_none() {
                let cell = *self.shape.cells().get(self.cell_index)?;
                self.cell_index += 1;
                self.iterating_cell = Some(cell.faces());
            }

            let Some(sides) = self.iterating_cell.as_mut() else {
                return None;
            };

            let Some(face) = sides.next() else {
                self.iterating_cell.take();
                continue;
            };

            // If the cell is already set, skip this face
            if self.shape.contains(&face) {
                continue;
            }

            return Some(self.shape.with_cell(face));
        }
    }
}

impl Shape {
    /// Every shape obtained by appending one face-adjacent cell to `self`,
    /// in cell order and then face order. The same cell set may be yielded
    /// more than once.
    pub fn expand(&self) -> impl Iterator<Item = Shape> + Clone + '_ {
        ExpansionIterator {
            shape: self,
            cell_index: 0,
            iterating_cell: None,
        }
    }

    /// Obtain all distinct one-cell expansions of `self`.
    ///
    /// Two expansions are the same if they contain the same cells. The first
    /// expansion of every cell set is kept, in [`expand`](Shape::expand)
    /// order.
    ///
    /// Panics if the shape is empty.
    pub fn grow(&self) -> Vec<Shape> {
        assert!(!self.is_empty(), "cannot grow an empty shape");

        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for expansion in self.expand() {
            #[cfg(feature = "diagnostics")]
            assert!(expansion.is_connected(), "disconnected expansion {expansion}");

            if seen.insert(expansion.sorted()) {
                out.push(expansion);
            }
        }

        out
    }
}

/// Grow every shape in `from_set` by one cell and concatenate the results.
///
/// Duplicates across different parents are kept.
pub fn grow_all<'a, I>(progress_bar: &ProgressBar, from_set: I) -> Vec<Shape>
where
    I: Iterator<Item = &'a Shape> + ExactSizeIterator,
{
    let mut next_level = Vec::with_capacity(from_set.len() * 6);

    for value in from_set {
        next_level.extend(value.grow());
        progress_bar.inc(1);
    }

    next_level
}

/// All raw `n`-cell shapes grown from [`Shape::seed`], with duplicates.
///
/// Panics if `n` is 0.
pub fn generate(n: usize) -> Vec<Shape> {
    generate_with_progress(n, |_| ProgressBar::hidden())
}

/// Like [`generate`], reporting each growth level on the bar returned by
/// `make_bar(parents)`.
pub fn generate_with_progress<F>(n: usize, mut make_bar: F) -> Vec<Shape>
where
    F: FnMut(u64) -> ProgressBar,
{
    assert!(n > 0, "shapes have at least one cell");

    let mut current = vec![Shape::seed()];

    for size in 2..=n {
        let bar = make_bar(current.len() as u64);
        current = grow_all(&bar, current.iter());
        bar.finish_with_message(format!("{} candidates (N = {size})", current.len()));

        tracing::debug!(size, candidates = current.len(), "grew shapes");
    }

    current
}

/// All raw 4-cell candidates: three growth passes from the seed.
pub fn generate_tetracubes() -> Vec<Shape> {
    generate(4)
}
