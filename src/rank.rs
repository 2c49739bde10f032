//! The valid truncation range of a decomposed image.

use ndarray_linalg::Scalar;

use crate::decompose::ChannelDecomposition;
use crate::types::{PixelCompressionError, Result};

/// The largest truncation rank usable across every channel at once.
///
/// This is the minimum of the per channel economy ranks. Truncation
/// ranks in `1..=max_rank` are meaningful for all channels of the image
/// simultaneously.
pub fn max_rank<A: Scalar>(decomposition: &[ChannelDecomposition<A>]) -> Result<usize> {
    decomposition
        .iter()
        .map(|channel| channel.rank())
        .min()
        .ok_or_else(|| {
            PixelCompressionError::InvalidInput(
                "decomposition must contain at least one channel".to_string(),
            )
        })
}
