//! The pixel image data model.
//!
//! An image is an ordered sequence of channel planes. Each plane is a
//! matrix of intensities in $[0, 255]$, and all planes of one image share
//! the same dimensions. A grayscale image is simply the one channel case,
//! so no code downstream needs to distinguish grayscale from RGB.

use itertools::Itertools;
use ndarray::Array2;

use crate::types::{PixelCompressionError, Result};

/// A single channel plane of intensities.
pub type PixelMatrix = Array2<u8>;

/// A decoded image as an ordered sequence of equally shaped channel planes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelImage {
    channels: Vec<PixelMatrix>,
}

impl PixelImage {
    /// Validate and wrap a sequence of channel planes.
    ///
    /// Requires at least one channel, no zero dimension, and identical
    /// dimensions across all channels.
    pub fn new(channels: Vec<PixelMatrix>) -> Result<Self> {
        if channels.is_empty() {
            return Err(PixelCompressionError::InvalidInput(
                "image must contain at least one channel".to_string(),
            ));
        }
        if channels
            .iter()
            .any(|channel| channel.nrows() == 0 || channel.ncols() == 0)
        {
            return Err(PixelCompressionError::InvalidInput(
                "channel dimensions must be at least 1x1".to_string(),
            ));
        }
        if !channels.iter().map(|channel| channel.dim()).all_equal() {
            return Err(PixelCompressionError::InvalidInput(format!(
                "all channels must share the same dimensions, first channel is {}x{}",
                channels[0].nrows(),
                channels[0].ncols()
            )));
        }

        Ok(PixelImage { channels })
    }

    /// Wrap a single plane as a grayscale image.
    pub fn grayscale(channel: PixelMatrix) -> Result<Self> {
        PixelImage::new(vec![channel])
    }

    /// Number of pixel rows.
    pub fn nrows(&self) -> usize {
        self.channels[0].nrows()
    }

    /// Number of pixel columns.
    pub fn ncols(&self) -> usize {
        self.channels[0].ncols()
    }

    /// The (rows, cols) dimension shared by every channel.
    pub fn dim(&self) -> (usize, usize) {
        self.channels[0].dim()
    }

    /// Number of channels.
    pub fn nchannels(&self) -> usize {
        self.channels.len()
    }

    /// The channel planes in their original order.
    pub fn channels(&self) -> &[PixelMatrix] {
        &self.channels
    }
}
