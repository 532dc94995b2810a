//! Concept vector computation.
//!
//! A concept vector is the unit-length mean direction of a cluster's member
//! documents. It is recomputed from scratch after every reassignment; there is
//! no incremental update because membership can change arbitrarily between
//! iterations.

use ndarray::{Array1, Array2};

use crate::vecmath::{scale, sum_rows, try_normalize};

/// Compute the concept vector for the given member rows of `data`.
///
/// Sums the member vectors, rescales by `1 / word_count`, then normalizes to
/// unit length. The rescale is redundant ahead of the normalize but is kept so
/// quality values match the reference algorithm exactly.
///
/// An empty membership (or a membership whose vectors cancel exactly) yields
/// the zero vector. Assignment treats similarity against a zero concept as
/// always-losing, so such a cluster receives no documents.
pub fn compute_concept(data: &Array2<f32>, members: &[usize]) -> Array1<f32> {
    let mut cv = sum_rows(data, members);
    if members.is_empty() {
        return cv;
    }
    scale(&mut cv.view_mut(), 1.0 / data.ncols() as f32);
    try_normalize(&mut cv.view_mut());
    cv
}
