//! Error types shared by the gate editor and the axis scale engine.

use thiserror::Error;

use crate::gates::region::RegionId;

/// Result type alias for gate-core operations.
pub type Result<T> = std::result::Result<T, GateError>;

#[derive(Debug, Error)]
pub enum GateError {
    /// A query was made against a region that cannot answer it: an unclosed
    /// polygon, a vertex list too short for the region kind, or an interior
    /// test against a line segment.
    #[error("invalid region state: {0}")]
    InvalidRegionState(&'static str),

    /// No region with the given id exists in the collection.
    #[error("no region with id {0}")]
    UnknownRegion(RegionId),

    /// A resize referred to a vertex index the region does not have.
    #[error("invalid point index {index} for region with {len} points")]
    InvalidPointIndex { index: usize, len: usize },

    /// An axis transform was applied to a value it cannot represent.
    #[error("invalid transform input: {0}")]
    InvalidTransform(String),
}
