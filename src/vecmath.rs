//! Dense vector primitives used by the clustering core.
//!
//! Everything operates on `f32` vectors of matching length. Documents live in
//! an `Array2<f32>` (one row per document); these helpers work on row views so
//! the caller never copies a document to operate on it.

use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1};

/// Inner product of two equal-length vectors.
#[inline]
pub fn dot(a: &ArrayView1<'_, f32>, b: &ArrayView1<'_, f32>) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm: `sqrt(dot(v, v))`.
#[inline]
pub fn norm(v: &ArrayView1<'_, f32>) -> f32 {
    dot(v, v).sqrt()
}

/// Normalize `v` to unit Euclidean norm in place.
///
/// Returns `false` and leaves `v` untouched when the norm is zero. Callers
/// decide what a zero-norm vector means: a degenerate input document is an
/// error, an empty partition's concept stays the zero vector.
pub fn try_normalize(v: &mut ArrayViewMut1<'_, f32>) -> bool {
    let n = norm(&v.view());
    if n == 0.0 {
        return false;
    }
    divide(v, n);
    true
}

/// Element-wise sum of the selected rows of `data`.
///
/// Returns the zero vector for an empty selection.
pub fn sum_rows(data: &Array2<f32>, rows: &[usize]) -> Array1<f32> {
    let mut acc = Array1::<f32>::zeros(data.ncols());
    for &r in rows {
        acc += &data.row(r);
    }
    acc
}

/// Multiply every element of `v` by `factor` in place.
#[inline]
pub fn scale(v: &mut ArrayViewMut1<'_, f32>, factor: f32) {
    for x in v.iter_mut() {
        *x *= factor;
    }
}

/// Divide every element of `v` by `divisor` in place.
#[inline]
pub fn divide(v: &mut ArrayViewMut1<'_, f32>, divisor: f32) {
    for x in v.iter_mut() {
        *x /= divisor;
    }
}

/// Cosine similarity: `dot(a, b) / (norm(a) * norm(b))`, range [-1, 1].
///
/// When either norm is zero the similarity is `NEG_INFINITY`, so a degenerate
/// vector loses every strict-greater comparison during assignment.
pub fn cosine_similarity(a: &ArrayView1<'_, f32>, b: &ArrayView1<'_, f32>) -> f32 {
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return f32::NEG_INFINITY;
    }
    dot(a, b) / denom
}
