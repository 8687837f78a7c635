use crate::Energy;

/// Errors that can occur while configuring, training, or applying a model.
#[derive(Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// Rejected model parameters (centroid count, iteration cap, threshold)
    /// or an input vector with non-finite coordinates.
    InvalidConfiguration(String),
    /// Sample size is zero or exceeds the number of available items.
    InvalidSampleSize { requested: usize, available: usize },
    /// A vector at `index` does not share the dimension of the first one.
    DimensionMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },
    /// Assignment was requested from a model without centroids.
    ModelNotTrained,
    /// A refinement pass left the centroid at this index with no members.
    EmptyCluster(usize),
    /// The iteration cap was exhausted before movement fell to the threshold.
    NotConverged { iterations: usize, movement: Energy },
}

impl std::fmt::Display for KMeansError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
            Self::InvalidSampleSize {
                requested,
                available,
            } => write!(
                f,
                "invalid sample size: requested {} of {} items",
                requested, available
            ),
            Self::DimensionMismatch {
                expected,
                found,
                index,
            } => write!(
                f,
                "dimension mismatch at vector {}: expected {}, found {}",
                index, expected, found
            ),
            Self::ModelNotTrained => write!(f, "model has no centroids; train it first"),
            Self::EmptyCluster(j) => write!(f, "centroid {} has no assigned points", j),
            Self::NotConverged {
                iterations,
                movement,
            } => write!(
                f,
                "no convergence after {} iterations (movement {:.6})",
                iterations, movement
            ),
        }
    }
}

impl std::error::Error for KMeansError {}
