//! Aggregate partition quality, the loop's convergence signal.
//!
//! Per-cluster quality is `dot(sum(members), concept)`; the total is the sum
//! over all k clusters. Algebraically this equals the sum over clusters of
//! (size × average cosine alignment of members to the concept), so it rewards
//! both large and tight clusters. It is a pure function of the current
//! (partition, concept) pairing and is recomputed in full every iteration.

use ndarray::{Array2, ArrayView1};

use crate::partition::PartitionSet;
use crate::vecmath::{dot, sum_rows};

/// Quality of one cluster: alignment of its member sum with its concept.
///
/// An empty cluster sums to the zero vector and contributes exactly 0.
pub fn partition_quality(
    data: &Array2<f32>,
    members: &[usize],
    concept: &ArrayView1<'_, f32>,
) -> f32 {
    let sum = sum_rows(data, members);
    dot(&sum.view(), concept)
}

/// Total quality over all clusters, with `concepts` holding one row per cluster.
pub fn total_quality(data: &Array2<f32>, parts: &PartitionSet, concepts: &Array2<f32>) -> f32 {
    (0..parts.k())
        .map(|i| partition_quality(data, parts.members(i), &concepts.row(i)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::compute_concept;
    use ndarray::arr2;

    #[test]
    fn test_singleton_unit_cluster_quality_is_one() {
        let data = arr2(&[[1.0f32, 0.0]]);
        let cv = compute_concept(&data, &[0]);
        let q = partition_quality(&data, &[0], &cv.view());
        assert!((q - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_cluster_contributes_zero() {
        let data = arr2(&[[1.0f32, 0.0]]);
        let cv = compute_concept(&data, &[]);
        let q = partition_quality(&data, &[], &cv.view());
        assert_eq!(q, 0.0);
    }

    #[test]
    fn test_quality_equals_member_sum_norm() {
        // With concept = normalized member sum, dot(sum, concept) = ||sum||.
        let data = arr2(&[[1.0f32, 0.0], [0.0, 1.0]]);
        let cv = compute_concept(&data, &[0, 1]);
        let q = partition_quality(&data, &[0, 1], &cv.view());
        assert!((q - 2.0f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_total_quality_is_pure() {
        let data = arr2(&[[1.0f32, 0.0], [0.9, 0.1], [0.0, 1.0]]);
        let parts = PartitionSet::from_labels(&[0, 0, 1], 2);

        let mut concepts = Array2::<f32>::zeros((2, 2));
        for i in 0..2 {
            concepts.row_mut(i).assign(&compute_concept(&data, parts.members(i)));
        }

        let q1 = total_quality(&data, &parts, &concepts);
        let q2 = total_quality(&data, &parts, &concepts);
        assert_eq!(q1, q2, "quality must be bit-identical without mutation");
    }
}
