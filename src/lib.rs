//! Lossy image compression through low rank matrix approximation.
//!
//! Every channel plane of an image factorizes as $A = U\Sigma V^T$ with
//! the singular values in $\Sigma$ sorted descending. Keeping only the
//! leading $k$ components costs $k(m + n + 1)$ numbers per channel
//! instead of $mn$ pixels, while retaining the share of the spectral
//! energy $\sum_i \sigma_i^2$ carried by the largest singular values.
//!
//! The crate exposes a small engine around this idea: load an image once
//! (the decomposition is computed per channel and cached), then query
//! reconstructions and metrics for any truncation rank.
//!
//! ```
//! use pixel_compression::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let image = random_low_rank_image((64, 48), 3, 8, &mut rng);
//!
//! let engine = CompressionEngine::load_image(&image).unwrap();
//! let approximation = engine.reconstruct(8).unwrap();
//!
//! assert_eq!(approximation.dim(), image.dim());
//! assert!(engine.compression_ratio(8).unwrap() > 1.0);
//! assert!(engine.energy_retained(8).unwrap() > 90.0);
//! ```

pub mod decompose;
pub mod demos;
pub mod engine;
pub mod image;
pub mod metrics;
pub mod random_pixels;
pub mod rank;
pub mod reconstruct;
pub mod types;

pub mod prelude;

pub use decompose::{ChannelDecomposition, DecomposeChannel, ImageDecomposition};
pub use engine::CompressionEngine;
pub use image::{PixelImage, PixelMatrix};
pub use metrics::{compression_ratio, energy_retained};
pub use rank::max_rank;
pub use reconstruct::{quantize, reconstruct_image};
pub use types::{PixelCompressionError, Result};
