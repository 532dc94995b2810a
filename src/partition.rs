//! Partition bookkeeping: which document belongs to which cluster.
//!
//! A [`PartitionSet`] is rebuilt wholesale from the label array after every
//! assignment pass and swapped in as a unit; nothing is patched incrementally.
//! The previous set is dropped once the new one replaces it.

use ndarray::Array1;

/// Document-index memberships for k clusters.
///
/// Membership is disjoint and exhaustive by construction: every document index
/// appears in exactly the one partition its label names.
#[derive(Debug, Clone)]
pub struct PartitionSet {
    memberships: Vec<Vec<usize>>,
    n_docs: usize,
}

impl PartitionSet {
    /// Build a partition set from per-document labels.
    ///
    /// `labels[i]` is the cluster index of document `i` and must be `< k`.
    pub fn from_labels(labels: &[usize], k: usize) -> Self {
        let mut memberships = vec![Vec::new(); k];
        for (doc, &cluster) in labels.iter().enumerate() {
            memberships[cluster].push(doc);
        }
        Self {
            memberships,
            n_docs: labels.len(),
        }
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.memberships.len()
    }

    /// Total number of documents across all partitions.
    pub fn n_docs(&self) -> usize {
        self.n_docs
    }

    /// Document indices assigned to cluster `i`.
    pub fn members(&self, i: usize) -> &[usize] {
        &self.memberships[i]
    }

    /// Member count per cluster.
    pub fn sizes(&self) -> Vec<usize> {
        self.memberships.iter().map(Vec::len).collect()
    }
}

/// One cluster of the final result: member indices plus its concept vector.
#[derive(Debug, Clone)]
pub struct Partition {
    members: Vec<usize>,
    concept: Array1<f32>,
}

impl Partition {
    pub(crate) fn new(members: Vec<usize>, concept: Array1<f32>) -> Self {
        Self { members, concept }
    }

    /// Indices of the documents assigned to this cluster.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of member documents.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cluster ended up with no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Unit-length concept direction (the zero vector for an empty cluster).
    pub fn concept(&self) -> &Array1<f32> {
        &self.concept
    }
}

/// Final output of a clustering run.
#[derive(Debug, Clone)]
pub struct ClusterResult {
    partitions: Vec<Partition>,
    labels: Vec<usize>,
    quality: f32,
    iterations: usize,
    n_docs: usize,
    n_words: usize,
}

impl ClusterResult {
    pub(crate) fn new(
        partitions: Vec<Partition>,
        labels: Vec<usize>,
        quality: f32,
        iterations: usize,
        n_words: usize,
    ) -> Self {
        let n_docs = labels.len();
        Self {
            partitions,
            labels,
            quality,
            iterations,
            n_docs,
            n_words,
        }
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.partitions.len()
    }

    /// The clusters, in index order.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Cluster label per document.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Final aggregate quality (sum over clusters of `dot(member_sum, concept)`).
    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Refinement iterations performed, including the confirming pass.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Total document count.
    pub fn n_docs(&self) -> usize {
        self.n_docs
    }

    /// Vector dimensionality (vocabulary size).
    pub fn n_words(&self) -> usize {
        self.n_words
    }

    /// The `n` highest-weighted dimensions of cluster `i`'s concept vector,
    /// as `(dimension, weight)` pairs in descending weight order.
    ///
    /// For bag-of-words input these are the terms most characteristic of the
    /// cluster.
    pub fn top_dimensions(&self, i: usize, n: usize) -> Vec<(usize, f32)> {
        let concept = &self.partitions[i].concept;
        let mut ranked: Vec<(usize, f32)> =
            concept.iter().enumerate().map(|(j, &w)| (j, w)).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(n.min(self.n_words));
        ranked
    }
}
