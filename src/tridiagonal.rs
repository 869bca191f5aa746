//! Eigenvalue bisection for symmetric tridiagonal matrices
//!
//! A symmetric tridiagonal matrix `T` of size `m - 1` is given by two slices of length `m`:
//! `alpha[1..m]` is the diagonal and `beta[1..m-1]` the subdiagonal, so that
//! `T[i, i] = alpha[i]` and `T[i, i + 1] = beta[i]` with 1-based `i`. `alpha[0]` and `beta[0]`
//! are unused and expected to be zero. `beta[m - 1]` does not belong to `T`, it only widens the
//! search interval. This is exactly the layout that the Lanczos iteration accumulates.

use num_traits::Float;

/// Upper bound on the magnitude of every eigenvalue of `T`
///
/// Computed as `sqrt(sum alpha_i^2 + 2 sum beta_i^2)`, i.e. the Frobenius norm of `T` (with the
/// trailing `beta` included), which bounds the spectral radius. The entries are scaled by the
/// largest magnitude before squaring, so the bound stays finite whenever the entries are.
pub fn eigen_bound<A: Float>(alpha: &[A], beta: &[A]) -> A {
    let two = A::from(2.0).unwrap();
    let scale = alpha
        .iter()
        .chain(beta)
        .fold(A::zero(), |acc, &x| acc.max(x.abs()));
    if scale.is_zero() {
        return A::zero();
    }

    let sum_sq = |acc: A, &x: &A| {
        let x = x / scale;
        acc + x * x
    };
    let diag = alpha.iter().fold(A::zero(), sum_sq);
    let off_diag = beta.iter().fold(A::zero(), sum_sq);

    scale * (diag + two * off_diag).sqrt()
}

/// Count the eigenvalues of `T` strictly smaller than `c`
///
/// Evaluates the Sturm sequence in its quotient form: the number of negative pivots of the
/// `LDL^T` factorization of `T - c I` equals the number of eigenvalues below `c`. A pivot that
/// hits zero exactly is replaced by a tiny positive value to keep the recurrence finite.
pub fn sturm_count<A: Float>(c: A, alpha: &[A], beta: &[A]) -> usize {
    let tiny = A::from(1e-12).unwrap();
    let mut q = A::one();
    let mut count = 0;

    for i in 1..alpha.len() {
        q = alpha[i] - c - beta[i - 1] * beta[i - 1] / q;
        if q < A::zero() {
            count += 1;
        }
        if q.is_zero() {
            q = tiny;
        }
    }

    count
}

/// Approximate the smallest eigenvalue of `T` by bisection
///
/// Starts from `[-r, r]` with `r` from [`eigen_bound`] and halves the interval until its width
/// is below `tol` relative to the smaller endpoint magnitude. If the midpoint repeats (which
/// happens once the interval has collapsed to neighbouring floats, e.g. around a zero
/// eigenvalue) the search stops early. Returns the lower end of the final interval.
pub fn smallest_eigenvalue<A: Float>(alpha: &[A], beta: &[A], tol: A) -> A {
    let two = A::from(2.0).unwrap();
    let r = eigen_bound(alpha, beta);
    let (mut a, mut b) = (-r, r);
    let mut prev_mid = A::max_value();

    while b - a > a.abs().min(b.abs()) * tol {
        let mid = (a + b) / two;
        if sturm_count(mid, alpha, beta) >= 1 {
            b = mid;
        } else {
            a = mid;
        }

        if mid == prev_mid {
            break;
        }
        prev_mid = mid;
    }

    a
}
