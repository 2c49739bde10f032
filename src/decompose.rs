//! Economy size singular value decomposition of channel planes.
//!
//! A channel plane $A\in\mathbb{R}^{m\times n}$ factorizes as
//! $A = U\Sigma V^T$, where $U\in\mathbb{R}^{m\times r}$ has orthonormal
//! columns, $V^T\in\mathbb{R}^{r\times n}$ has orthonormal rows,
//! $\Sigma$ is diagonal with non-negative entries sorted descending, and
//! $r = \min(m, n)$ is the economy rank. The leading components carry the
//! bulk of the energy $\sum_i \sigma_i^2$, which is what makes rank
//! truncation an effective lossy compressor for pixel data.
//!
//! The decomposition is computed through the LAPACK divide-and-conquer
//! driver exposed by `ndarray-linalg`. The signs of paired $U$ columns
//! and $V^T$ rows are whatever the driver returns; the product
//! $U\Sigma V^T$ is unaffected.

use ndarray::{s, Array1, Array2, ArrayView2, Axis, Zip};
use ndarray_linalg::{JobSvd, Lapack, Scalar, SVDDCInto};

use crate::types::{PixelCompressionError, Result};

/// The factors of one decomposed channel plane.
pub struct ChannelDecomposition<A: Scalar> {
    /// The U matrix
    pub u: Array2<A>,
    /// The array of singular values
    pub s: Array1<A::Real>,
    /// The vt matrix
    pub vt: Array2<A>,
}

/// One [`ChannelDecomposition`] per channel, in channel order.
pub type ImageDecomposition<A> = Vec<ChannelDecomposition<A>>;

impl<A: Scalar> ChannelDecomposition<A> {
    /// Number of rows of the decomposed plane.
    pub fn nrows(&self) -> usize {
        self.u.nrows()
    }

    /// Number of columns of the decomposed plane.
    pub fn ncols(&self) -> usize {
        self.vt.ncols()
    }

    /// The economy rank, i.e. the number of singular values.
    pub fn rank(&self) -> usize {
        self.s.len()
    }

    /// Keep only the leading `k` components of the decomposition.
    ///
    /// A `k` larger than [`rank`](ChannelDecomposition::rank) is clamped
    /// down to it.
    pub fn truncate(self, mut k: usize) -> ChannelDecomposition<A> {
        let (u, s, vt) = (self.u, self.s, self.vt);

        if k > s.len() {
            k = s.len()
        }

        let u = u.slice_move(s![.., 0..k]);
        let s = s.slice_move(s![0..k]);
        let vt = vt.slice_move(s![0..k, ..]);

        ChannelDecomposition { u, s, vt }
    }
}

impl<A> ChannelDecomposition<A>
where
    A: Scalar<Real = A> + Lapack,
{
    /// Multiply the leading `k` components back into a dense plane.
    ///
    /// `k` is clamped down to the economy rank. The result is real valued
    /// and not yet confined to the pixel range.
    pub fn reconstruct(&self, k: usize) -> Array2<A> {
        let k = k.min(self.rank());

        let mut scaled_vt = self.vt.slice(s![0..k, ..]).to_owned();
        Zip::from(scaled_vt.axis_iter_mut(Axis(0)))
            .and(self.s.slice(s![0..k]))
            .for_each(|mut row, &sigma| row.map_inplace(|item| *item *= A::from_real(sigma)));

        self.u.slice(s![.., 0..k]).dot(&scaled_vt)
    }
}

/// A simple trait to wrap the per channel SVD computation.
pub trait DecomposeChannel {
    type A: Scalar + Lapack;

    /// Compute the economy size SVD of a single channel plane.
    fn decompose(arr: ArrayView2<Self::A>) -> Result<ChannelDecomposition<Self::A>>;
}

macro_rules! decompose_impl {
    ($scalar:ty) => {
        impl DecomposeChannel for $scalar {
            type A = $scalar;
            fn decompose(arr: ArrayView2<Self::A>) -> Result<ChannelDecomposition<Self::A>> {
                if arr.nrows() == 0 || arr.ncols() == 0 {
                    return Err(PixelCompressionError::InvalidInput(
                        "channel dimensions must be at least 1x1".to_string(),
                    ));
                }

                let result = arr.to_owned().svddc_into(JobSvd::Some);

                let (u, s, vt) = match result {
                    Ok((u, s, vt)) => (u.unwrap(), s, vt.unwrap()),
                    Err(err) => return Err(PixelCompressionError::NumericInstability(err)),
                };

                Ok(ChannelDecomposition { u, s, vt })
            }
        }
    };
}

decompose_impl!(f32);
decompose_impl!(f64);

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::arr2;
    use rand::Rng;

    fn random_plane<A, R>(dimension: (usize, usize), rng: &mut R) -> Array2<A>
    where
        A: Scalar + Lapack,
        R: Rng,
    {
        let mut mat = Array2::<A>::zeros(dimension);
        mat.map_inplace(|item| {
            *item = A::from_real(A::real(255.0 * rng.gen::<f64>()));
        });
        mat
    }

    macro_rules! decompose_factor_tests {

        ($($name:ident: $scalar:ty, $dim:expr, $tol:expr,)*) => {

            $(

        #[test]
        fn $name() {
            let m = $dim.0;
            let n = $dim.1;
            let k = m.min(n);

            let mut rng = rand::thread_rng();
            let mat = random_plane::<$scalar, _>((m, n), &mut rng);

            let decomp = <$scalar>::decompose(mat.view()).unwrap();

            assert_eq!(decomp.u.dim(), (m, k));
            assert_eq!(decomp.s.len(), k);
            assert_eq!(decomp.vt.dim(), (k, n));
            assert_eq!(decomp.rank(), k);

            // Singular values sorted descending and non-negative.

            for pair in decomp.s.as_slice().unwrap().windows(2) {
                assert!(pair[0] >= pair[1]);
            }
            assert!(decomp.s[k - 1] >= 0.0);

            // Check orthonormality of U^T U and Vt Vt^T.

            let utu = decomp.u.t().dot(&decomp.u);
            let vtv = decomp.vt.dot(&decomp.vt.t());

            for gram in [utu, vtv].iter() {
                for ((i, j), &val) in gram.indexed_iter() {
                    if i == j {
                        assert!((val - 1.0).abs() < $tol);
                    } else {
                        assert!(val.abs() < $tol);
                    }
                }
            }

            // Full rank reconstruction recovers the plane.

            let rec = decomp.reconstruct(k);
            for (&actual, &expected) in rec.iter().zip(mat.iter()) {
                assert!((actual - expected).abs() < 255.0 * $tol);
            }
        }

            )*

        }
    }

    decompose_factor_tests! {
        test_decompose_f32_thin: f32, (60, 40), 1E-4,
        test_decompose_f64_thin: f64, (60, 40), 1E-10,
        test_decompose_f32_thick: f32, (40, 60), 1E-4,
        test_decompose_f64_thick: f64, (40, 60), 1E-10,
    }

    #[test]
    fn test_known_matrix_round_trip() {
        let mat = arr2(&[[3.0, 1.0, 1.0], [-1.0, 3.0, 1.0]]);

        let decomp = f64::decompose(mat.view()).unwrap();
        let rec = decomp.reconstruct(decomp.rank());

        let mut max_diff: f64 = 0.0;
        for (&actual, &expected) in rec.iter().zip(mat.iter()) {
            max_diff = max_diff.max((actual - expected).abs());
        }
        assert!(max_diff < 1E-8);
    }

    #[test]
    fn test_constant_plane_is_rank_one() {
        let mat = Array2::<f64>::from_elem((20, 30), 128.0);

        let decomp = f64::decompose(mat.view()).unwrap();

        assert!(decomp.s[0] > 0.0);
        for &sigma in decomp.s.slice(s![1..]).iter() {
            assert!(sigma < 1E-8 * decomp.s[0]);
        }
    }

    #[test]
    fn test_zero_plane_does_not_fail() {
        let mat = Array2::<f64>::zeros((10, 10));

        let decomp = f64::decompose(mat.view()).unwrap();

        for &sigma in decomp.s.iter() {
            assert!(sigma.abs() < 1E-12);
        }
    }

    #[test]
    fn test_single_pixel_plane() {
        let mat = arr2(&[[200.0_f64]]);

        let decomp = f64::decompose(mat.view()).unwrap();

        assert_eq!(decomp.rank(), 1);
        assert!((decomp.s[0] - 200.0).abs() < 1E-12);
    }

    #[test]
    fn test_truncate_slices_factors() {
        let mut rng = rand::thread_rng();
        let mat = random_plane::<f64, _>((30, 20), &mut rng);

        let truncated = f64::decompose(mat.view()).unwrap().truncate(5);

        assert_eq!(truncated.u.dim(), (30, 5));
        assert_eq!(truncated.s.len(), 5);
        assert_eq!(truncated.vt.dim(), (5, 20));
    }

    #[test]
    fn test_truncate_clamps_oversized_rank() {
        let mut rng = rand::thread_rng();
        let mat = random_plane::<f64, _>((30, 20), &mut rng);

        let truncated = f64::decompose(mat.view()).unwrap().truncate(1000);

        assert_eq!(truncated.rank(), 20);
    }
}
