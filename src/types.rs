//! Error types and the crate wide result alias.

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelCompressionError {
    /// The caller handed over data the engine cannot work with: an empty
    /// channel list, a zero dimension matrix, mismatched channel shapes,
    /// or a truncation rank of zero.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The singular value decomposition driver did not converge. The
    /// affected image counts as failed to load.
    #[error("singular value decomposition did not converge: {0}")]
    NumericInstability(LinalgError),
}

pub type Result<T> = std::result::Result<T, PixelCompressionError>;
