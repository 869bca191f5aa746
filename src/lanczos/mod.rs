//!
//! The Lanczos method finds an extremal eigenvalue and the corresponding eigenvector of a large
//! real symmetric operator `A` using nothing but matrix-vector products.
//!
//! Starting from a unit vector `u_1` it builds an orthonormal basis `u_1, .., u_m` of the Krylov
//! subspace `span{u_1, A u_1, A^2 u_1, ..}` together with the tridiagonal matrix `T_m` that
//! represents `A` restricted to this subspace. The eigenvalues of `T_m` approximate the extremal
//! eigenvalues of `A` very quickly. Every step:
//! * re-orthogonalizes the new basis vector against all previous ones, so the basis does not
//!   lose orthogonality to roundoff
//! * estimates the smallest eigenvalue of `T_m` by Sturm-sequence bisection (see
//!   [`tridiagonal`](crate::tridiagonal)) and stops once two consecutive estimates agree
//! * stops early if the residual vanishes, in which case the subspace is invariant and the
//!   estimate is exact
//!
//! Afterwards the eigenvector of `T_m` is mapped back into the original space.
//!
//! The solver always converges towards the *smallest* eigenvalue. Wrap the operator in
//! [`Negated`](crate::Negated) to obtain the largest one.
//!
//! See also the wikipedia article at [Lanczos algorithm](https://en.wikipedia.org/wiki/Lanczos_algorithm)
//!
mod algorithm;
mod eig;
mod eigvec;

use ndarray::prelude::*;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::{LanczosError, Result};

pub use algorithm::{lanczos, lanczos_iterate};
pub use eig::LanczosEig;
pub use eigvec::reconstruct_eigvec;

/// Generate a random vector with entries uniformly distributed in `[-1, 1]`
pub(crate) fn random<A: NdFloat, R: Rng>(n: usize, rng: &mut R) -> Array1<A> {
    let dist = Uniform::new_inclusive(-1.0f64, 1.0);
    Array1::from_shape_fn(n, |_| A::from(dist.sample(rng)).unwrap())
}

/// Parameters of a single Lanczos run
///
/// All parameters have defaults, see [`LanczosParams::default`]. Validation happens when a run
/// starts, never while building.
#[derive(Debug, Clone, PartialEq)]
pub struct LanczosParams<A> {
    /// Relative convergence threshold on the change of the eigenvalue estimate between two steps
    pub eps: A,
    /// Tolerance of the tridiagonal bisection relative to `eps`, has to lie strictly in (0, 1)
    pub tridiag_eps_ratio: A,
    /// Number of basis vectors to allocate upfront, the basis grows beyond it if needed
    pub capacity_hint: usize,
    /// Maximal number of Lanczos steps, defaults to the dimension of the operator
    pub max_iteration: Option<usize>,
}

impl<A: NdFloat> Default for LanczosParams<A> {
    /// `eps = 1e-12`, `tridiag_eps_ratio = 0.1`, `capacity_hint = 200` and as many steps as the
    /// operator has dimensions
    fn default() -> Self {
        LanczosParams {
            eps: A::from(1e-12).unwrap(),
            tridiag_eps_ratio: A::from(0.1).unwrap(),
            capacity_hint: 200,
            max_iteration: None,
        }
    }
}

impl<A: NdFloat> LanczosParams<A> {
    pub fn precision(mut self, eps: A) -> Self {
        self.eps = eps;

        self
    }

    pub fn tridiag_eps_ratio(mut self, ratio: A) -> Self {
        self.tridiag_eps_ratio = ratio;

        self
    }

    pub fn capacity_hint(mut self, capacity: usize) -> Self {
        self.capacity_hint = capacity;

        self
    }

    pub fn maxiter(mut self, maxiter: usize) -> Self {
        self.max_iteration = Some(maxiter);

        self
    }

    /// Tolerance handed to the tridiagonal bisection
    pub fn tridiag_tol(&self) -> A {
        self.eps * self.tridiag_eps_ratio
    }

    pub(crate) fn check(&self) -> Result<()> {
        let ratio = self.tridiag_eps_ratio;
        if ratio > A::zero() && ratio < A::one() {
            Ok(())
        } else {
            Err(LanczosError::InvalidEpsRatio(ratio.to_f64().unwrap_or(f64::NAN)))
        }
    }
}

/// Why the Lanczos iteration stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Two consecutive eigenvalue estimates agreed within `eps`
    Converged,
    /// The residual vanished, the Krylov subspace is invariant under the operator
    InvariantSubspace,
    /// The maximal number of steps was reached
    MaxIterations,
}

/// State of the Lanczos iteration after it stopped
///
/// The vectors are indexed from one: `basis[0]` is a zero vector and `alpha[0] = beta[0] = 0`.
/// The tridiagonal matrix `T` has diagonal `alpha[1..]` and subdiagonal `beta[1..m-1]`, with
/// `m = alpha.len()`. `basis[1..m]` is orthonormal, `basis[m]` is the last residual direction
/// (unnormalized if the subspace became invariant). It always holds that
/// `basis.len() == alpha.len() + 1` and `alpha.len() == beta.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct KrylovState<A> {
    pub basis: Vec<Array1<A>>,
    pub alpha: Vec<A>,
    pub beta: Vec<A>,
    /// Estimate of the smallest eigenvalue of `T`
    pub eigval: A,
    /// Number of performed steps
    pub iterations: usize,
    pub termination: Termination,
}

/// Eigenpair found by the solver
#[derive(Debug, Clone, PartialEq)]
pub struct EigResult<A> {
    pub eigval: A,
    /// Unit eigenvector of length `n`
    pub eigvec: Array1<A>,
    /// Number of performed Lanczos steps, never more than the configured maximum
    pub iterations: usize,
}
