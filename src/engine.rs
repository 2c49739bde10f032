//! The compression engine bound to one loaded image.
//!
//! [`CompressionEngine::load_image`] decomposes every channel once and
//! caches the factors for the lifetime of the handle. All queries are
//! read only views over that cache and can be repeated cheaply while a
//! slider sweeps the truncation rank. Loading another image constructs a
//! new engine value, so a replacement decomposition can never be observed
//! by a reader of the old one.

use ndarray::ArrayView1;
use rayon::prelude::*;
use tracing::debug;

use crate::decompose::{ChannelDecomposition, DecomposeChannel, ImageDecomposition};
use crate::image::PixelImage;
use crate::metrics;
use crate::rank;
use crate::reconstruct;
use crate::types::Result;

/// A cached per channel decomposition of one pixel image.
pub struct CompressionEngine {
    nrows: usize,
    ncols: usize,
    decomposition: ImageDecomposition<f64>,
    max_rank: usize,
}

impl CompressionEngine {
    /// Decompose every channel of `image` and cache the factors.
    ///
    /// Channels are independent and are decomposed in parallel. If any
    /// channel fails to converge the whole load fails and no partial
    /// cache is handed out.
    pub fn load_image(image: &PixelImage) -> Result<Self> {
        let decomposition = image
            .channels()
            .par_iter()
            .map(|channel| f64::decompose(channel.mapv(|pixel| f64::from(pixel)).view()))
            .collect::<Result<ImageDecomposition<f64>>>()?;

        let max_rank = rank::max_rank(&decomposition)?;

        debug!(
            "decomposed {} channel(s) of a {}x{} image, max rank {}",
            decomposition.len(),
            image.nrows(),
            image.ncols(),
            max_rank
        );

        Ok(CompressionEngine {
            nrows: image.nrows(),
            ncols: image.ncols(),
            decomposition,
            max_rank,
        })
    }

    /// Number of pixel rows of the loaded image.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of pixel columns of the loaded image.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of channels of the loaded image.
    pub fn nchannels(&self) -> usize {
        self.decomposition.len()
    }

    /// The largest truncation rank valid across all channels.
    pub fn max_rank(&self) -> usize {
        self.max_rank
    }

    /// Rebuild the image from the leading `k` components per channel.
    ///
    /// An oversized `k` is clamped down per channel; `k = 0` is rejected.
    pub fn reconstruct(&self, k: usize) -> Result<PixelImage> {
        reconstruct::reconstruct_image(&self.decomposition, k)
    }

    /// The ratio of original to compressed storage size at rank `k`.
    pub fn compression_ratio(&self, k: usize) -> Result<f64> {
        metrics::compression_ratio((self.nrows, self.ncols), self.nchannels(), k)
    }

    /// The percentage of spectral energy retained at rank `k`.
    pub fn energy_retained(&self, k: usize) -> Result<f64> {
        metrics::energy_retained(&self.decomposition, k)
    }

    /// Views of the singular value sequence of every channel.
    pub fn singular_values(&self) -> Vec<ArrayView1<f64>> {
        self.decomposition
            .iter()
            .map(|channel| channel.s.view())
            .collect()
    }

    /// The cached channel decompositions.
    pub fn decomposition(&self) -> &[ChannelDecomposition<f64>] {
        &self.decomposition
    }
}
