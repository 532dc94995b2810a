//! # spkmeans
//!
//! Spherical k-means: cluster dense bag-of-words vectors by **cosine
//! similarity**, producing one unit-length "concept" direction per cluster.
//!
//! The crate is the refinement engine only. Reading document/vocabulary files,
//! argument parsing, and result reporting are the caller's job; the core takes
//! an in-memory slice of dense vectors and returns a [`ClusterResult`].
//!
//! ```rust
//! use spkmeans::{Clustering, SphericalKmeans};
//!
//! let docs = vec![
//!     vec![1.0, 0.0],
//!     vec![0.9, 0.1],
//!     vec![0.0, 1.0],
//!     vec![0.1, 0.9],
//! ];
//!
//! // Labels only, via the Clustering trait.
//! let labels = SphericalKmeans::new(2).fit_predict(&docs).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//!
//! // Full result: partitions, concept vectors, quality, iteration count.
//! let result = SphericalKmeans::new(2).fit(&docs).unwrap();
//! assert_eq!(result.k(), 2);
//! assert!(result.partitions().iter().all(|p| !p.is_empty()));
//! ```
//!
//! The `parallel` feature routes the per-document assignment pass through
//! rayon; results are identical to the sequential build.

pub mod concept;
/// Error types used across `spkmeans`.
pub mod error;
pub mod partition;
pub mod quality;
pub mod spherical;
pub mod traits;
pub mod vecmath;

#[cfg(test)]
mod invariant_tests;

pub use error::{Error, Result};
pub use partition::{ClusterResult, Partition, PartitionSet};
pub use spherical::{RefineStats, SphericalKmeans, DEFAULT_THRESHOLD};
pub use traits::Clustering;
