use log::{debug, trace};
use ndarray::prelude::*;
use std::iter::Sum;

use crate::{
    norm::*, operator::LinearOperator, tridiagonal::smallest_eigenvalue, LanczosError, Result,
};

use super::{reconstruct_eigvec, EigResult, KrylovState, LanczosParams, Termination};

/// Residual norm below which the Krylov subspace is considered invariant
const BREAKDOWN_THRESHOLD: f64 = 1e-16;

/// Remove the components of `v` along every vector of `basis`
///
/// The basis vectors must be orthonormal (or zero), `v` may have any norm.
fn orthogonalize<A: NdFloat>(v: &mut Array1<A>, basis: &[Array1<A>]) {
    for u in basis {
        let proj = v.dot(u);
        v.scaled_add(-proj, u);
    }
}

/// Run the Lanczos iteration on `op` starting from `init`
///
/// # Arguments
/// * `op` - The symmetric operator, only evaluated by matrix-vector products
/// * `init` - Starting vector of length `op.dim()`, normalized before the first step. It must
/// not be zero.
/// * `params` - Tolerances and iteration cap
///
/// Returns the Krylov basis, the tridiagonal coefficients and the estimate of the smallest
/// eigenvalue, which is everything [`reconstruct_eigvec`] needs. Hitting the iteration cap is
/// not an error, see [`KrylovState::termination`] for why the iteration stopped.
///
/// Fails before the first matrix-vector product if the parameters or the starting vector are
/// invalid, and during the iteration if `op` returns a vector of the wrong length.
pub fn lanczos_iterate<A, O>(
    op: &O,
    init: Array1<A>,
    params: &LanczosParams<A>,
) -> Result<KrylovState<A>>
where
    A: NdFloat + Sum,
    O: LinearOperator<Elem = A> + ?Sized,
{
    params.check()?;

    let n = op.dim();
    if n == 0 {
        return Err(LanczosError::EmptyOperator);
    }
    if init.len() != n {
        return Err(LanczosError::DimensionMismatch {
            expected: n,
            actual: init.len(),
        });
    }
    let maxiter = params.max_iteration.unwrap_or(n);
    if maxiter == 0 {
        return Err(LanczosError::NoIterations);
    }

    let mut uk = init;
    if uk.norm_l2().is_zero() {
        return Err(LanczosError::ZeroInitialVector);
    }
    uk.normalize_inplace();

    let threshold = A::from(BREAKDOWN_THRESHOLD).unwrap();
    let tridiag_tol = params.tridiag_tol();

    let mut basis = Vec::with_capacity(params.capacity_hint);
    let mut alpha = Vec::with_capacity(params.capacity_hint);
    let mut beta = Vec::with_capacity(params.capacity_hint);
    basis.push(Array1::zeros(n));
    basis.push(uk);
    alpha.push(A::zero());
    beta.push(A::zero());

    debug!("starting Lanczos iteration with n = {}, maxiter = {}", n, maxiter);

    let mut eigval = A::zero();
    let mut prev_eigval = A::max_value();
    let mut iterations = maxiter;
    let mut termination = Termination::MaxIterations;

    for k in 1..=maxiter {
        let mut r = op.apply(basis[k].view());
        if r.len() != n {
            return Err(LanczosError::DimensionMismatch {
                expected: n,
                actual: r.len(),
            });
        }

        let alpha_k = basis[k].dot(&r);
        alpha.push(alpha_k);

        // three-term recurrence, followed by a full sweep against roundoff
        r.scaled_add(-beta[k - 1], &basis[k - 1]);
        r.scaled_add(-alpha_k, &basis[k]);
        orthogonalize(&mut r, &basis);

        let beta_k = r.norm_l2();
        beta.push(beta_k);

        eigval = smallest_eigenvalue(&alpha, &beta, tridiag_tol);
        trace!(
            "step {}: alpha = {:e}, beta = {:e}, eigval = {:e}",
            k,
            alpha_k,
            beta_k,
            eigval
        );

        if beta_k < threshold {
            // keeps `basis` one longer than `alpha`, the vector itself is never used
            basis.push(r);
            iterations = k;
            termination = Termination::InvariantSubspace;
            break;
        }

        r /= beta_k;
        basis.push(r);

        if (eigval - prev_eigval).abs() < eigval.abs().min(prev_eigval.abs()) * params.eps {
            iterations = k;
            termination = Termination::Converged;
            break;
        }
        prev_eigval = eigval;
    }

    debug!(
        "Lanczos iteration stopped after {} steps ({:?}), eigval = {:e}",
        iterations, termination, eigval
    );

    Ok(KrylovState {
        basis,
        alpha,
        beta,
        eigval,
        iterations,
        termination,
    })
}

/// Find the smallest eigenvalue and its eigenvector of the symmetric operator `op`
///
/// Runs [`lanczos_iterate`] from `init` and expands the tridiagonal eigenvector into the
/// original space with [`reconstruct_eigvec`].
///
/// ```rust
/// use ndarray::prelude::*;
/// use lanczos_eig::{lanczos, LanczosParams, SymmetricTriplets};
///
/// // tridiagonal matrix with 2 on the diagonal and -1 next to it
/// let n = 20;
/// let mut a = SymmetricTriplets::new(n);
/// for i in 0..n {
///     a.push(2., i, i);
///     if i + 1 < n {
///         a.push(-1., i, i + 1);
///     }
/// }
///
/// let init = Array1::linspace(1., 2., n);
/// let res = lanczos(&a, init, &LanczosParams::default()).unwrap();
///
/// let expected = 2. - 2. * (std::f64::consts::PI / (n as f64 + 1.)).cos();
/// assert!((res.eigval - expected).abs() < 1e-8);
/// assert!(res.iterations <= n);
/// ```
pub fn lanczos<A, O>(op: &O, init: Array1<A>, params: &LanczosParams<A>) -> Result<EigResult<A>>
where
    A: NdFloat + Sum,
    O: LinearOperator<Elem = A> + ?Sized,
{
    let state = lanczos_iterate(op, init, params)?;
    let eigvec = reconstruct_eigvec(&state);

    Ok(EigResult {
        eigval: state.eigval,
        eigvec,
        iterations: state.iterations,
    })
}
