#![allow(unused)]

use std::ops::RangeInclusive;

use ndarray::prelude::*;
use ndarray_rand::{rand_distr::StandardNormal, RandomExt};
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use rand::Rng;

const FLOAT_RANGE: RangeInclusive<f64> = -1000.0..=1000.0;
const DIM_RANGE: RangeInclusive<usize> = 1..=10;

/// Memory layouts which keep a symmetric matrix symmetric and its spectrum unchanged
#[derive(Debug, Arbitrary)]
struct Layout {
    reverse: bool,
    transpose: bool,
}

impl Layout {
    fn apply(&self, mut arr: Array2<f64>) -> Array2<f64> {
        if self.reverse {
            arr.invert_axis(Axis(0));
            arr.invert_axis(Axis(1));
        }
        if self.transpose {
            arr.reversed_axes()
        } else {
            arr
        }
    }
}

/// Householder reflection `I - 2 w w^T / (w^T w)`, which is orthogonal and symmetric
pub fn householder(w: &Array1<f64>) -> Array2<f64> {
    let n = w.len();
    let norm_sq = w.dot(w);
    if norm_sq < 1e-6 {
        return Array2::eye(n);
    }
    let outer = Array2::from_shape_fn((n, n), |(i, j)| w[i] * w[j]);
    Array2::eye(n) - outer * (2. / norm_sq)
}

/// Dense symmetric matrix with spectrum `eigvals`, rotated by a reflection along a normally
/// distributed vector
pub fn random_spectral<R: Rng>(eigvals: &Array1<f64>, rng: &mut R) -> Array2<f64> {
    let w = Array1::random_using(eigvals.len(), StandardNormal, rng);
    let h = householder(&w);
    h.dot(&Array2::from_diag(eigvals)).dot(&h)
}

pub fn min(arr: &Array1<f64>) -> f64 {
    arr.iter().cloned().fold(f64::INFINITY, f64::min)
}

pub fn max_abs(arr: &Array1<f64>) -> f64 {
    arr.iter().fold(0., |acc: f64, x| acc.max(x.abs()))
}

prop_compose! {
    pub fn diag_vec()(dim in DIM_RANGE)
        (data in prop::collection::vec(FLOAT_RANGE, dim)) -> Array1<f64> {
        Array1::from(data)
    }
}

prop_compose! {
    /// Dense symmetric matrix `H D H` with a random reflection `H`, together with the diagonal
    /// of `D`, i.e. its eigenvalues
    pub fn spectral_arr()(dim in DIM_RANGE)
        (eigvals in prop::collection::vec(FLOAT_RANGE, dim),
         w in prop::collection::vec(-1.0..=1.0f64, dim),
         layout in any::<Layout>()) -> (Array2<f64>, Array1<f64>) {
        let eigvals = Array1::from(eigvals);
        let h = householder(&Array1::from(w));
        let arr = h.dot(&Array2::from_diag(&eigvals)).dot(&h);
        let arr = (&arr + &arr.t()) / 2.;
        (layout.apply(arr), eigvals)
    }
}
