//! Reduction of the raw candidate list to shape classes.

use hashbrown::HashSet;
use rayon::prelude::*;

use crate::shape::Shape;

/// The shape classes found among a list of candidates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Distinct canonical forms, in first-seen order.
    pub free: Vec<Shape>,
    /// Distinct normalized and sorted candidates, in first-seen order.
    ///
    /// Only translations are merged here: two rotations of the same shape
    /// are kept as separate entries.
    pub unilateral: Vec<Shape>,
}

/// Keeps the first occurrence of every key, in insertion order.
#[derive(Default)]
struct FirstSeen {
    seen: HashSet<Shape>,
    order: Vec<Shape>,
}

impl FirstSeen {
    fn insert(&mut self, shape: Shape) {
        if !self.seen.contains(&shape) {
            self.seen.insert(shape.clone());
            self.order.push(shape);
        }
    }

    fn into_inner(self) -> Vec<Shape> {
        self.order
    }
}

/// The keys every candidate is classified by: its normalized, sorted cells
/// and its canonical form.
fn keys(candidate: &Shape) -> (Shape, Shape) {
    let normalized = candidate.normalized().sorted();
    let canonical = normalized.canonical_form();
    (normalized, canonical)
}

fn collect(keyed: impl Iterator<Item = (Shape, Shape)>) -> Classification {
    let mut free = FirstSeen::default();
    let mut unilateral = FirstSeen::default();

    for (normalized, canonical) in keyed {
        free.insert(canonical);
        unilateral.insert(normalized);
    }

    let classification = Classification {
        free: free.into_inner(),
        unilateral: unilateral.into_inner(),
    };

    tracing::debug!(
        free = classification.free.len(),
        unilateral = classification.unilateral.len(),
        "classified candidates"
    );

    classification
}

/// Partition `candidates` into free and unilateral classes.
///
/// Panics if any candidate is empty.
pub fn classify(candidates: &[Shape]) -> Classification {
    collect(candidates.iter().map(keys))
}

/// Same as [`classify`], computing the canonical forms in parallel.
///
/// The output is identical to [`classify`].
pub fn classify_rayon(candidates: &[Shape]) -> Classification {
    let keyed: Vec<_> = candidates.par_iter().map(keys).collect();
    collect(keyed.into_iter())
}
