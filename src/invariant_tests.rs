//! Cross-cutting invariant checks over whole clustering runs.

use rand::prelude::*;

use crate::spherical::SphericalKmeans;
use crate::vecmath::norm;

/// Seeded random term-weight matrix; the offset keeps every row off zero.
fn random_docs(n: usize, wc: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..wc).map(|_| rng.random::<f32>() + 0.01).collect())
        .collect()
}

#[test]
fn test_partition_totality_and_disjointness() {
    let docs = random_docs(60, 8, 42);
    let result = SphericalKmeans::new(5).fit(&docs).unwrap();

    let mut seen = vec![false; docs.len()];
    for (i, p) in result.partitions().iter().enumerate() {
        for &doc in p.members() {
            assert!(!seen[doc], "document {} in more than one partition", doc);
            seen[doc] = true;
            assert_eq!(result.labels()[doc], i);
        }
    }
    assert!(seen.iter().all(|&s| s), "some document was never assigned");

    let total: usize = result.partitions().iter().map(|p| p.len()).sum();
    assert_eq!(total, docs.len());
}

#[test]
fn test_concept_unit_norm_for_nonempty_partitions() {
    let docs = random_docs(40, 6, 7);
    let result = SphericalKmeans::new(4).fit(&docs).unwrap();

    for p in result.partitions() {
        if !p.is_empty() {
            let n = norm(&p.concept().view());
            assert!((n - 1.0).abs() < 1e-5, "concept norm {} not unit", n);
        }
    }
}

#[test]
fn test_convergence_within_cap() {
    for seed in [1u64, 9, 123] {
        let docs = random_docs(80, 10, seed);
        let (result, stats) = SphericalKmeans::new(6)
            .with_stats(true)
            .fit_with_stats(&docs)
            .unwrap();
        let stats = stats.unwrap();

        assert!(
            result.iterations() < 100,
            "seed {}: hit the iteration cap",
            seed
        );
        // Converged: the final quality gain was at or below the threshold.
        let trace = &stats.quality_trace;
        let last_delta = trace[trace.len() - 1] - trace[trace.len() - 2];
        assert!(f64::from(last_delta) <= 1e-3);
    }
}

#[test]
fn test_tie_break_prefers_lower_partition_index() {
    // Both initial blocks produce the identical diagonal concept, so every
    // document ties and must land in partition 0.
    let docs = vec![
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
    ];
    let result = SphericalKmeans::new(2).fit(&docs).unwrap();

    assert_eq!(result.labels(), &[0, 0, 0, 0]);
    assert_eq!(result.partitions()[0].len(), 4);
    assert!(result.partitions()[1].is_empty());
}

#[test]
fn test_emptied_partition_gets_zero_concept_and_stays_empty() {
    let docs = vec![
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
    ];
    let result = SphericalKmeans::new(2).fit(&docs).unwrap();

    let empty = &result.partitions()[1];
    assert!(empty.is_empty());
    assert!(empty.concept().iter().all(|&x| x == 0.0));

    // Quality is carried entirely by the surviving partition: ||[2, 2]||.
    assert!((result.quality() - 8.0f32.sqrt()).abs() < 1e-4);
}

#[test]
fn test_quality_bounded_by_document_count() {
    let docs = random_docs(50, 12, 3);
    let result = SphericalKmeans::new(5).fit(&docs).unwrap();

    // Each unit document contributes at most 1 to its partition's quality.
    assert!(result.quality() > 0.0);
    assert!(result.quality() <= docs.len() as f32 + 1e-3);
}

#[test]
fn test_larger_k_never_loses_documents() {
    let docs = random_docs(33, 5, 11);
    for k in [1, 2, 7, 33] {
        let result = SphericalKmeans::new(k).fit(&docs).unwrap();
        assert_eq!(result.labels().len(), docs.len());
        let total: usize = result.partitions().iter().map(|p| p.len()).sum();
        assert_eq!(total, docs.len(), "k = {}", k);
    }
}
