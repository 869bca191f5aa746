//! Matrix-free linear operators
//!
//! The Lanczos iteration never looks at matrix entries, it only needs the product `A x`. Anything
//! that can compute this product for a fixed real symmetric `A` implements [`LinearOperator`]:
//! dense matrices, the sparse [`SymmetricTriplets`](crate::SymmetricTriplets) or a closure that
//! computes the product procedurally.

use ndarray::{prelude::*, Data, NdFloat};
use std::marker::PhantomData;

/// A real symmetric operator of dimension `dim() x dim()`
///
/// The scalar type is fixed by the operator, so the solver's result type follows from the
/// operator alone.
pub trait LinearOperator {
    /// Scalar type of the operator and of the vectors it acts on
    type Elem;

    /// Number of rows (and columns) of the operator
    fn dim(&self) -> usize;

    /// Compute `A x`
    ///
    /// Implementations may panic if `x.len() != self.dim()`. The solver only ever passes vectors
    /// of the right length.
    fn apply(&self, x: ArrayView1<Self::Elem>) -> Array1<Self::Elem>;
}

impl<O: LinearOperator + ?Sized> LinearOperator for &O {
    type Elem = O::Elem;

    fn dim(&self) -> usize {
        (**self).dim()
    }

    fn apply(&self, x: ArrayView1<O::Elem>) -> Array1<O::Elem> {
        (**self).apply(x)
    }
}

/// Dense square matrices. Symmetry is assumed, not checked.
impl<A: NdFloat, S: Data<Elem = A>> LinearOperator for ArrayBase<S, Ix2> {
    type Elem = A;

    fn dim(&self) -> usize {
        self.nrows()
    }

    fn apply(&self, x: ArrayView1<A>) -> Array1<A> {
        self.dot(&x)
    }
}

/// Operator defined by a matrix-vector product closure
///
/// ```rust
/// use ndarray::prelude::*;
/// use lanczos_eig::{FnOperator, LinearOperator};
///
/// // 1D Laplacian with Dirichlet boundaries, never stored
/// let n = 5;
/// let laplace = FnOperator::new(n, |x: ArrayView1<f64>| {
///     Array1::from_shape_fn(n, |i| {
///         let left = if i > 0 { x[i - 1] } else { 0. };
///         let right = if i + 1 < n { x[i + 1] } else { 0. };
///         2. * x[i] - left - right
///     })
/// });
///
/// assert_eq!(laplace.apply(Array1::ones(n).view()), array![1., 0., 0., 0., 1.]);
/// ```
#[derive(Debug, Clone)]
pub struct FnOperator<A, F> {
    dim: usize,
    matvec: F,
    elem: PhantomData<fn() -> A>,
}

impl<A, F: Fn(ArrayView1<A>) -> Array1<A>> FnOperator<A, F> {
    pub fn new(dim: usize, matvec: F) -> Self {
        FnOperator {
            dim,
            matvec,
            elem: PhantomData,
        }
    }
}

impl<A, F: Fn(ArrayView1<A>) -> Array1<A>> LinearOperator for FnOperator<A, F> {
    type Elem = A;

    fn dim(&self) -> usize {
        self.dim
    }

    fn apply(&self, x: ArrayView1<A>) -> Array1<A> {
        (self.matvec)(x)
    }
}

/// The operator `-A`
///
/// The solver converges to the smallest eigenvalue of the operator it is given. To obtain the
/// largest eigenvalue of `A`, solve for `Negated(A)` and negate the resulting eigenvalue, the
/// eigenvector stays the same.
#[derive(Debug, Clone)]
pub struct Negated<O>(pub O);

impl<A: NdFloat, O: LinearOperator<Elem = A>> LinearOperator for Negated<O> {
    type Elem = A;

    fn dim(&self) -> usize {
        self.0.dim()
    }

    fn apply(&self, x: ArrayView1<A>) -> Array1<A> {
        -self.0.apply(x)
    }
}
