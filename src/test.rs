use std::collections::HashSet;

use crate::{
    classify::{classify, classify_rayon},
    expander::generate_tetracubes,
    pieces::{PieceTable, TetracubeType},
    rotation::ROTATIONS,
    shape::{Cell, Shape},
};

#[test]
pub fn tetracube_class_counts() {
    let candidates = generate_tetracubes();
    let classes = classify(&candidates);

    assert_eq!(candidates.len(), 792);
    // Identifying rotations leaves the two mirror-image skew pieces apart.
    assert_eq!(classes.free.len(), 8);
    // Translation-only dedup: every fixed orientation of every piece.
    assert_eq!(classes.unilateral.len(), 86);
}

#[test]
pub fn classification_is_deterministic() {
    let first = classify(&generate_tetracubes());
    let second = classify(&generate_tetracubes());

    assert_eq!(first, second);
    assert_eq!(first, classify_rayon(&generate_tetracubes()));
}

#[test]
pub fn free_forms_in_first_seen_order() {
    let classes = classify(&generate_tetracubes());

    #[rustfmt::skip]
    let expected = vec![
        Shape::from([(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 1, 1)]),
        Shape::from([(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 0, 3)]),
        Shape::from([(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 1, 0)]),
        Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 0), (1, 0, 0)]),
        Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1)]),
        Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 1), (0, 1, 2)]),
        Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 0), (1, 1, 0)]),
        Shape::from([(0, 0, 0), (0, 0, 1), (0, 1, 0), (1, 0, 1)]),
    ];

    assert_eq!(classes.free, expected);
}

/// Every named piece is one of the free forms, and every free form is
/// one of the named pieces.
#[test]
pub fn free_forms_are_the_named_pieces() {
    let classes = classify(&generate_tetracubes());

    let free: HashSet<_> = classes.free.iter().cloned().collect();
    let named: HashSet<_> = TetracubeType::ALL
        .iter()
        .map(|t| t.base_shape().canonical_form())
        .collect();

    assert_eq!(free, named);
}

/// The unilateral list is exactly the set of piece orientations handed to
/// the solver.
#[test]
pub fn unilateral_forms_are_the_piece_orientations() {
    let classes = classify(&generate_tetracubes());
    let table = PieceTable::new();

    let unilateral: HashSet<_> = classes.unilateral.iter().cloned().collect();
    let orientations: HashSet<_> = table
        .iter()
        .flat_map(|(_, o)| o.iter().cloned())
        .collect();

    assert_eq!(unilateral.len(), classes.unilateral.len());
    assert_eq!(unilateral, orientations);
}

#[test]
pub fn candidates_are_tetracubes() {
    for candidate in generate_tetracubes() {
        assert_eq!(candidate.len(), 4);
        assert!(candidate.is_connected());

        let distinct: HashSet<_> = candidate.cells().iter().collect();
        assert_eq!(distinct.len(), 4);
    }
}

#[test]
pub fn canonical_form_ignores_rotation_and_translation() {
    for candidate in generate_tetracubes().iter().step_by(7) {
        let canonical = candidate.canonical_form();

        for r in ROTATIONS.iter() {
            let moved = r.apply_shape(candidate).translated(-4, 9, 2);
            assert_eq!(moved.canonical_form(), canonical);
        }
    }
}

#[test]
pub fn rotation_image_counts_divide_the_group() {
    for candidate in generate_tetracubes() {
        let n = candidate.all_rotations().len();
        assert!((1..=24).contains(&n));
        assert_eq!(24 % n, 0);
    }
}

#[test]
pub fn normalized_candidates_touch_the_origin_planes() {
    for candidate in generate_tetracubes() {
        assert_eq!(candidate.normalized().bounds().min, Cell::ORIGIN);
    }
}
