//! Collect all traits and other exports here.

pub use crate::decompose::{ChannelDecomposition, DecomposeChannel, ImageDecomposition};
pub use crate::engine::CompressionEngine;
pub use crate::image::{PixelImage, PixelMatrix};
pub use crate::metrics::{compression_ratio, energy_retained};
pub use crate::random_pixels::{random_low_rank_image, random_pixel_image, random_pixel_matrix};
pub use crate::rank::max_rank;
pub use crate::reconstruct::{quantize, reconstruct_image};
pub use crate::types::{PixelCompressionError, Result};
