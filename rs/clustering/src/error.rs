use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClusteringError {
    /// Requested number of clusters is outside `[1, available]`.
    #[error("Invalid cluster count {requested}: expected a value between 1 and {available}")]
    InvalidClusterCount { requested: usize, available: usize },

    /// No point was assigned to the cluster at `index`.
    #[error("Cluster {index} is empty, cannot compute its summary")]
    EmptyCluster { index: usize },

    /// A row of the input table could not be turned into a point.
    #[error("Malformed input row at line {line}: {reason}")]
    MalformedInputRow { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, ClusteringError>;
