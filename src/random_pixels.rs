//! Generation of random pixel images for tests and examples.

use ndarray::{Array1, Array2, Axis};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::image::{PixelImage, PixelMatrix};
use crate::reconstruct::quantize;

/// Generate a pixel matrix with uniformly distributed intensities.
///
/// # Arguments
///
/// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
/// * `rng`: The random number generator to use.
pub fn random_pixel_matrix<R: Rng>(dimension: (usize, usize), rng: &mut R) -> PixelMatrix {
    let mut mat = PixelMatrix::zeros(dimension);
    mat.map_inplace(|item| *item = rng.gen::<u8>());
    mat
}

/// Generate a multi channel image with uniformly distributed intensities.
///
/// # Arguments
///
/// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
/// * `nchannels`: Number of channel planes.
/// * `rng`: The random number generator to use.
pub fn random_pixel_image<R: Rng>(
    dimension: (usize, usize),
    nchannels: usize,
    rng: &mut R,
) -> PixelImage {
    let channels = (0..nchannels)
        .map(|_| random_pixel_matrix(dimension, rng))
        .collect();
    PixelImage::new(channels).expect("`random_pixel_image`: invalid image dimensions.")
}

/// Generate an approximately low rank pixel image.
///
/// Each channel is a sum of `rank` Gaussian outer products with
/// geometrically decaying weights, rescaled to span the full intensity
/// range. Truncating such an image at `rank` components retains nearly
/// all of its energy.
///
/// # Arguments
///
/// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
/// * `nchannels`: Number of channel planes.
/// * `rank`: Number of outer product components per channel.
/// * `rng`: The random number generator to use.
pub fn random_low_rank_image<R: Rng>(
    dimension: (usize, usize),
    nchannels: usize,
    rank: usize,
    rng: &mut R,
) -> PixelImage {
    let normal = Normal::new(0.0, 1.0).unwrap();

    let channels = (0..nchannels)
        .map(|_| {
            let mut plane = Array2::<f64>::zeros(dimension);
            for component in 0..rank {
                let weight = 0.5_f64.powi(component as i32);
                let col: Array1<f64> =
                    (0..dimension.0).map(|_| normal.sample(rng)).collect();
                let row: Array1<f64> =
                    (0..dimension.1).map(|_| normal.sample(rng)).collect();
                let outer = col.insert_axis(Axis(1)).dot(&row.insert_axis(Axis(0)));
                plane.scaled_add(weight, &outer);
            }

            let min = plane.fold(f64::INFINITY, |acc, &item| acc.min(item));
            let max = plane.fold(f64::NEG_INFINITY, |acc, &item| acc.max(item));
            let span = if max > min { max - min } else { 1.0 };
            let rescaled = plane.mapv(|item| 255.0 * (item - min) / span);

            quantize(rescaled.view())
        })
        .collect();

    PixelImage::new(channels).expect("`random_low_rank_image`: invalid image dimensions.")
}
