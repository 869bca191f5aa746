//! Matrix-free Lanczos solver for one extremal eigenpair of a real symmetric operator.
//!
//! The operator is only ever observed through matrix-vector products (see
//! [`LinearOperator`](operator::LinearOperator)), so it can be dense, sparse or computed on the
//! fly. The Lanczos iteration builds an orthonormal Krylov basis with full re-orthogonalization,
//! estimates the smallest eigenvalue of the projected tridiagonal matrix by Sturm-sequence
//! bisection, and finally expands the tridiagonal eigenvector back into the original space.
//!
//! ```rust
//! use ndarray::{arr1, Array2};
//! use lanczos_eig::LanczosEig;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! let a = Array2::from_diag(&arr1(&[3.0f64, 1., 4., 1.5, 9.]));
//!
//! let res = LanczosEig::new_with_rng(&a, Xoshiro256Plus::seed_from_u64(42))
//!     .precision(1e-12)
//!     .run()
//!     .unwrap();
//!
//! assert!((res.eigval - 1.0).abs() < 1e-8);
//! ```

pub mod lanczos;
pub mod norm;
pub mod operator;
pub mod sparse;
pub mod tridiagonal;

use thiserror::Error;

pub use lanczos::{
    lanczos, lanczos_iterate, reconstruct_eigvec, EigResult, KrylovState, LanczosEig,
    LanczosParams, Termination,
};
pub use operator::{FnOperator, LinearOperator, Negated};
pub use sparse::SymmetricTriplets;

#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum LanczosError {
    #[error("Tridiagonal tolerance ratio must lie strictly between 0 and 1, got {0}")]
    InvalidEpsRatio(f64),
    #[error("Operator has dimension zero")]
    EmptyOperator,
    #[error("Expected a vector of length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Maximal number of iterations must be at least one")]
    NoIterations,
    #[error("Initial vector has zero norm")]
    ZeroInitialVector,
}

pub type Result<T> = std::result::Result<T, LanczosError>;
