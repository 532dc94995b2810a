//! Spherical k-means clustering.
//!
//! K-means on the unit hypersphere: documents are compared by **cosine
//! similarity** instead of Euclidean distance, which is the right notion of
//! closeness for normalized text-frequency vectors where only direction
//! carries meaning.
//!
//! # The Objective
//!
//! Maximize the aggregate quality
//!
//! ```text
//! Q = Σₖ dot(Σᵢ∈Cₖ xᵢ, cₖ)
//! ```
//!
//! where `cₖ` is cluster k's unit-length **concept vector** (its normalized
//! mean direction). Each term equals the norm of the cluster's member sum, so
//! Q rewards large, directionally tight clusters.
//!
//! # The Algorithm
//!
//! 1. Normalize every document to unit norm, once (the TXN scheme)
//! 2. Split the document sequence into k contiguous, roughly equal blocks
//! 3. **Assign**: each document → concept with greatest cosine similarity
//! 4. **Update**: recompute every concept from its new members
//! 5. Repeat 3–4 until the quality gain drops to the threshold
//!
//! The initial partitioning is deterministic, so two runs over the same input
//! always produce the same result.
//!
//! # Convergence
//!
//! The loop continues only while `ΔQ > threshold`. A zero or negative delta
//! (the latter possible from floating-point error even though assignment is
//! greedy-optimal for fixed concepts) terminates immediately; this is an
//! early-stop rule, not a strict monotonic-improvement guarantee. Quality is
//! bounded above by the document count, so termination is guaranteed in
//! practice; a configurable iteration cap is kept as a backstop.
//!
//! # References
//!
//! - Dhillon & Modha (2001). "Concept Decompositions for Large Sparse Text
//!   Data using Clustering"

use std::time::{Duration, Instant};

use ndarray::{Array2, ArrayView1};

use crate::concept::compute_concept;
use crate::error::{Error, Result};
use crate::partition::{ClusterResult, Partition, PartitionSet};
use crate::quality::total_quality;
use crate::traits::Clustering;
use crate::vecmath::{cosine_similarity, try_normalize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default quality-gain threshold below which refinement stops.
pub const DEFAULT_THRESHOLD: f64 = 1e-3;

/// Spherical k-means clusterer.
#[derive(Debug, Clone)]
pub struct SphericalKmeans {
    /// Number of clusters.
    k: usize,
    /// Quality-gain threshold for convergence.
    threshold: f64,
    /// Defensive iteration cap.
    max_iter: usize,
    /// Track per-phase statistics.
    track_stats: bool,
}

/// Statistics from a refinement run.
#[derive(Debug, Clone, Default)]
pub struct RefineStats {
    /// Total iterations performed.
    pub iterations: usize,
    /// Quality after initialization, then after each iteration.
    pub quality_trace: Vec<f32>,
    /// Cumulative time in the assignment pass.
    pub assign_time: Duration,
    /// Cumulative time recomputing concept vectors.
    pub concept_time: Duration,
    /// Cumulative time scoring quality.
    pub quality_time: Duration,
}

impl SphericalKmeans {
    /// Create a new spherical k-means clusterer with `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            threshold: DEFAULT_THRESHOLD,
            max_iter: 100,
            track_stats: false,
        }
    }

    /// Set the convergence threshold on the per-iteration quality gain.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the maximum number of refinement iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Enable statistics tracking.
    pub fn with_stats(mut self, track: bool) -> Self {
        self.track_stats = track;
        self
    }

    /// Run the full clustering and return the partitions with their concepts.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<ClusterResult> {
        self.fit_with_stats(data).map(|(result, _)| result)
    }

    /// Run the full clustering, also returning per-phase statistics when
    /// enabled via [`with_stats`](Self::with_stats).
    pub fn fit_with_stats(
        &self,
        data: &[Vec<f32>],
    ) -> Result<(ClusterResult, Option<RefineStats>)> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }

        let n = data.len();
        let wc = data[0].len();

        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }

        // Convert to ndarray
        let mut flat: Vec<f32> = Vec::with_capacity(n * wc);
        for doc in data {
            if doc.len() != wc {
                return Err(Error::DimensionMismatch {
                    expected: wc,
                    found: doc.len(),
                });
            }
            flat.extend(doc);
        }
        let mut docs =
            Array2::from_shape_vec((n, wc), flat).map_err(|e| Error::Other(e.to_string()))?;

        // TXN scheme: the one and only normalization the documents receive.
        for (i, mut row) in docs.rows_mut().into_iter().enumerate() {
            if !try_normalize(&mut row) {
                return Err(Error::DegenerateVector { index: i });
            }
        }

        // Initial partitioning: k contiguous blocks in original order, the
        // last block absorbing the remainder.
        let split = n / self.k;
        let mut labels: Vec<usize> = (0..n).map(|i| (i / split).min(self.k - 1)).collect();

        let mut parts = PartitionSet::from_labels(&labels, self.k);
        let mut concepts = compute_concepts(&docs, &parts);
        let mut quality = total_quality(&docs, &parts, &concepts);

        let mut stats = RefineStats {
            quality_trace: vec![quality],
            ..RefineStats::default()
        };

        let mut iterations = 0;
        while iterations < self.max_iter {
            iterations += 1;

            // Assignment: every document votes for its nearest concept. The
            // concept matrix is an immutable snapshot for the whole pass.
            let assign_start = Instant::now();
            #[cfg(feature = "parallel")]
            {
                let docs_ref = &docs;
                let concepts_ref = &concepts;
                labels.par_iter_mut().enumerate().for_each(|(i, label)| {
                    *label = nearest_concept(&docs_ref.row(i), concepts_ref);
                });
            }
            #[cfg(not(feature = "parallel"))]
            for (i, label) in labels.iter_mut().enumerate() {
                *label = nearest_concept(&docs.row(i), &concepts);
            }
            stats.assign_time += assign_start.elapsed();

            // Full rebuild; the previous partition set is discarded, not merged.
            parts = PartitionSet::from_labels(&labels, self.k);

            let concept_start = Instant::now();
            concepts = compute_concepts(&docs, &parts);
            stats.concept_time += concept_start.elapsed();

            let quality_start = Instant::now();
            let new_quality = total_quality(&docs, &parts, &concepts);
            stats.quality_time += quality_start.elapsed();

            let delta = new_quality - quality;
            quality = new_quality;
            stats.quality_trace.push(quality);

            // Strict "greater than threshold" to continue: zero or negative
            // gain terminates.
            if f64::from(delta) <= self.threshold {
                break;
            }
        }
        stats.iterations = iterations;

        let partitions: Vec<Partition> = (0..self.k)
            .map(|i| Partition::new(parts.members(i).to_vec(), concepts.row(i).to_owned()))
            .collect();
        let result = ClusterResult::new(partitions, labels, quality, iterations, wc);

        let final_stats = if self.track_stats { Some(stats) } else { None };
        Ok((result, final_stats))
    }
}

/// Index of the concept with strictly greatest cosine similarity to `doc`.
///
/// Ties keep the lowest-indexed concept. Documents are unit-norm after
/// initialization, but the similarity still divides by both norms; a zero
/// concept (empty cluster) compares as `NEG_INFINITY` and can never win.
fn nearest_concept(doc: &ArrayView1<'_, f32>, concepts: &Array2<f32>) -> usize {
    let mut best = 0;
    let mut best_sim = cosine_similarity(doc, &concepts.row(0));
    for j in 1..concepts.nrows() {
        let sim = cosine_similarity(doc, &concepts.row(j));
        if sim > best_sim {
            best_sim = sim;
            best = j;
        }
    }
    best
}

/// Recompute every concept vector from the current membership.
fn compute_concepts(docs: &Array2<f32>, parts: &PartitionSet) -> Array2<f32> {
    let mut concepts = Array2::<f32>::zeros((parts.k(), docs.ncols()));
    for i in 0..parts.k() {
        concepts
            .row_mut(i)
            .assign(&compute_concept(docs, parts.members(i)));
    }
    concepts
}

impl Clustering for SphericalKmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        self.fit(data).map(|result| result.labels().to_vec())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
