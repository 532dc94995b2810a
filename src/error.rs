use core::fmt;

/// Result alias for `spkmeans`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering core.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// Document vector length mismatch.
    DimensionMismatch {
        /// Expected dimension (word count).
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid number of clusters requested (zero, or more than documents).
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of documents.
        n_items: usize,
    },

    /// A document vector has zero Euclidean norm and cannot be normalized.
    DegenerateVector {
        /// Index of the offending document.
        index: usize,
    },

    /// Generic error with message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} items")
            }
            Error::DegenerateVector { index } => {
                write!(f, "document {index} has zero norm and cannot be normalized")
            }
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
