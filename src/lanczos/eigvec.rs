use ndarray::prelude::*;
use std::iter::Sum;

use crate::norm::*;

use super::KrylovState;

/// Expand the eigenvector of the tridiagonal matrix into the original space
///
/// The eigenvector `c` of `T` belonging to `state.eigval` satisfies the three-term recurrence
/// `beta[k] c[k] = (eigval - alpha[k+1]) c[k+1] - beta[k+1] c[k+2]`. It is solved backwards from
/// `c[m] = 0` and `c[m-1] = 1`, treating the trailing `beta[m-1]` as zero, and the result is the
/// normalized combination `sum_k c[k] basis[k]`.
///
/// The recurrence divides by the subdiagonal entries without any safeguard. Entries produced by
/// [`lanczos_iterate`](super::lanczos_iterate) are never below the breakdown threshold, but
/// very small ones amplify the error of `eigval`.
pub fn reconstruct_eigvec<A: NdFloat + Sum>(state: &KrylovState<A>) -> Array1<A> {
    let alpha = &state.alpha;
    let beta = &state.beta;
    let ev = state.eigval;
    let m = alpha.len();

    let beta_at = |k: usize| if k + 1 == m { A::zero() } else { beta[k] };

    let mut cv = vec![A::zero(); m + 1];
    cv[m - 1] = A::one();

    let mut eigvec = state.basis[m - 1].clone();
    for k in (1..m - 1).rev() {
        cv[k] = ((ev - alpha[k + 1]) * cv[k + 1] - beta_at(k + 1) * cv[k + 2]) / beta_at(k);
        eigvec.scaled_add(cv[k], &state.basis[k]);
    }

    eigvec.normalize_inplace();
    eigvec
}
