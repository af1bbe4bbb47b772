//! Error types for vector operations
//!
//! Every operation on [`Vector3D`](crate::Vector3D) is total over the IEEE-754
//! domain except normalization, which has a mathematical precondition.

use thiserror::Error;

/// Main error type for vector3d
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// An operation was applied to a vector that violates its precondition,
    /// e.g. normalizing the zero vector
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;
