use lease_core::ValidationError;
use thiserror::Error;

/// Errors produced by the projection engine.
///
/// Parameters are checked before any year is simulated, so a projection
/// either fails here or completes.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ValidationError),
}
