//! Rebuilding pixel planes from truncated decompositions.
//!
//! Reconstruction multiplies the leading `k` components of each channel
//! back into a dense plane, confines every entry to the pixel range
//! $[0, 255]$, rounds to the nearest integer and reassembles the
//! channels in their original order.

use ndarray::ArrayView2;
use ndarray_linalg::{Lapack, Scalar};
use num::traits::cast::cast;
use num::Float;

use crate::decompose::ChannelDecomposition;
use crate::image::{PixelImage, PixelMatrix};
use crate::types::{PixelCompressionError, Result};

/// Confine a real valued plane to the pixel range.
///
/// Entries are clipped to $[0, 255]$ and rounded to the nearest integer.
pub fn quantize<A>(plane: ArrayView2<A>) -> PixelMatrix
where
    A: Scalar<Real = A> + Float,
{
    let max_intensity = cast::<f64, A>(255.0).unwrap();

    plane.map(|&value| {
        let clipped = num::clamp(value, A::zero(), max_intensity);
        cast::<A, u8>(Float::round(clipped)).unwrap()
    })
}

/// Rebuild an approximate image from the leading `k` components of every
/// channel.
///
/// `k` is clamped down to each channel's economy rank, so an oversized
/// `k` reproduces the full rank reconstruction. A `k` of zero is
/// rejected.
pub fn reconstruct_image<A>(
    decomposition: &[ChannelDecomposition<A>],
    k: usize,
) -> Result<PixelImage>
where
    A: Scalar<Real = A> + Lapack + Float,
{
    if k == 0 {
        return Err(PixelCompressionError::InvalidInput(
            "truncation rank must be at least 1".to_string(),
        ));
    }

    let channels = decomposition
        .iter()
        .map(|channel| quantize(channel.reconstruct(k).view()))
        .collect();

    PixelImage::new(channels)
}
