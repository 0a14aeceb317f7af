//! Error types for waygraph
//!
//! All failures are ordinary function-level errors the caller inspects;
//! none are retried and none are fatal to the process. An unreachable
//! destination is not an error (see [`crate::search::PathResult`]).

use thiserror::Error;

/// Errors that can occur during graph construction, mutation, or search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node id referenced a position outside the graph
    #[error("node {id} out of range (graph size {size})")]
    OutOfRangeNode { id: usize, size: usize },

    /// A negative edge weight was found by a weighted shortest-path search
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: i64 },
}

impl GraphError {
    /// Create an error for a node id outside the graph's range
    pub fn out_of_range(id: usize, size: usize) -> Self {
        GraphError::OutOfRangeNode { id, size }
    }

    /// Create an error for a negative-weight edge
    pub fn negative_weight(from: usize, to: usize, weight: i64) -> Self {
        GraphError::NegativeWeight { from, to, weight }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::OutOfRangeNode { .. } => "out_of_range_node",
            GraphError::NegativeWeight { .. } => "negative_weight",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for waygraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
