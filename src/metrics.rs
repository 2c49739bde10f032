//! Compression ratio and retained energy metrics.
//!
//! Storing the leading `k` components of an $m\times n$ channel costs
//! $k(m + n + 1)$ numbers: $k$ columns of $U$, $k$ singular values and
//! $k$ rows of $V^T$. The compression ratio compares this against the
//! $mn$ pixels of the original plane. Retained energy measures how much
//! of $\sum_i \sigma_i^2$ survives the truncation, aggregated over all
//! channels of the image.

use ndarray_linalg::Scalar;
use num::ToPrimitive;

use crate::decompose::ChannelDecomposition;
use crate::types::{PixelCompressionError, Result};

/// The ratio of original to compressed storage size at truncation rank `k`.
///
/// Strictly decreasing in `k`. `k` is not clamped here; the storage cost
/// of `k` components is well defined beyond the economy rank.
pub fn compression_ratio(shape: (usize, usize), nchannels: usize, k: usize) -> Result<f64> {
    if k == 0 {
        return Err(PixelCompressionError::InvalidInput(
            "truncation rank must be at least 1".to_string(),
        ));
    }

    let (rows, cols) = shape;
    let original_size = rows * cols * nchannels;
    let compressed_size = nchannels * k * (rows + cols + 1);

    Ok(original_size as f64 / compressed_size as f64)
}

/// The percentage of total spectral energy retained by the leading `k`
/// components.
///
/// Raw squared singular values are summed across all channels before
/// dividing, so channels with more energy weigh proportionally more.
/// `k` is clamped down to each channel's economy rank. An image with no
/// energy at all reports zero.
pub fn energy_retained<A: Scalar>(
    decomposition: &[ChannelDecomposition<A>],
    k: usize,
) -> Result<f64> {
    if k == 0 {
        return Err(PixelCompressionError::InvalidInput(
            "truncation rank must be at least 1".to_string(),
        ));
    }

    let mut total_energy = 0.0;
    let mut retained_energy = 0.0;

    for channel in decomposition {
        let clamped = k.min(channel.rank());
        for (index, sigma) in channel.s.iter().enumerate() {
            let energy = sigma.to_f64().unwrap().powi(2);
            total_energy += energy;
            if index < clamped {
                retained_energy += energy;
            }
        }
    }

    if total_energy == 0.0 {
        return Ok(0.0);
    }

    Ok(100.0 * retained_energy / total_energy)
}
