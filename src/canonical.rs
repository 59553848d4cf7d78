//! Orientation- and position-independent identity of a shape.

use crate::shape::Shape;

impl Shape {
    /// Find the canonical form of this shape: the smallest of the normalized,
    /// sorted rotation images of `self`.
    ///
    /// Any rotation or translation of `self` has the same canonical form.
    ///
    /// Panics if the shape is empty.
    pub fn canonical_form(&self) -> Shape {
        assert!(!self.is_empty(), "cannot canonicalize an empty shape");

        self.sorted()
            .normalized()
            .rotated_images()
            .min()
            .expect("the rotation table is not empty")
    }
}
