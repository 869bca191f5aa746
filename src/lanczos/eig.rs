//! Builder around the Lanczos solver
//!
use super::{lanczos, random, EigResult, LanczosParams};
use crate::{operator::LinearOperator, Result};

use log::debug;
use ndarray::prelude::*;
use rand::Rng;
use std::{fmt, iter::Sum, rc::Rc};

/// Source of the starting vector
#[derive(Clone)]
enum InitVector<A, R> {
    Random,
    Fixed(Array1<A>),
    Generator(Rc<dyn Fn(usize, &mut R) -> Array1<A>>),
}

impl<A: fmt::Debug, R> fmt::Debug for InitVector<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitVector::Random => f.write_str("Random"),
            InitVector::Fixed(init) => f.debug_tuple("Fixed").field(init).finish(),
            InitVector::Generator(_) => f.write_str("Generator"),
        }
    }
}

#[derive(Debug, Clone)]
/// Extremal eigenpair solver
///
/// This struct wraps the Lanczos algorithm and provides convenient builder-pattern access to
/// parameters like the maximal number of iterations, the precision and the starting vector. If no
/// starting vector is given, a random one is drawn from the generator passed at construction, so
/// runs are reproducible with a seeded generator.
///
/// # Example
///
/// ```rust
/// use ndarray::{arr1, Array2};
/// use lanczos_eig::LanczosEig;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let diag = arr1(&[1.0f64, 2., 3., 4., 5.]);
/// let a = Array2::from_diag(&diag);
///
/// let mut eig = LanczosEig::new_with_rng(a, Xoshiro256Plus::seed_from_u64(42))
///    .precision(1e-12)
///    .maxiter(50);
///
/// let res = eig.run().unwrap();
/// assert!((res.eigval - 1.).abs() < 1e-8);
/// ```
pub struct LanczosEig<A, O, R> {
    operator: O,
    params: LanczosParams<A>,
    init: InitVector<A, R>,
    rng: R,
}

impl<A: NdFloat + Sum, O: LinearOperator<Elem = A>, R: Rng> LanczosEig<A, O, R> {
    /// Create a new solver with default parameters
    ///
    /// # Properties
    /// * `operator`: the symmetric operator
    /// * `rng`: random number generator for the starting vector
    pub fn new_with_rng(operator: O, rng: R) -> LanczosEig<A, O, R> {
        LanczosEig {
            operator,
            params: LanczosParams::default(),
            init: InitVector::Random,
            rng,
        }
    }

    /// Set desired precision
    ///
    /// The iteration stops once two consecutive eigenvalue estimates differ by less than
    /// `precision` relative to their magnitude.
    pub fn precision(mut self, precision: A) -> Self {
        self.params = self.params.precision(precision);

        self
    }

    /// Set the tolerance of the tridiagonal bisection relative to the precision
    ///
    /// Must lie strictly between zero and one, otherwise [`run`](Self::run) fails.
    pub fn tridiag_eps_ratio(mut self, ratio: A) -> Self {
        self.params = self.params.tridiag_eps_ratio(ratio);

        self
    }

    /// Set the number of basis vectors allocated upfront
    pub fn capacity_hint(mut self, capacity: usize) -> Self {
        self.params = self.params.capacity_hint(capacity);

        self
    }

    /// Set the maximal number of iterations
    ///
    /// Defaults to the dimension of the operator. The solver returns its current estimate when
    /// the limit is reached.
    pub fn maxiter(mut self, maxiter: usize) -> Self {
        self.params = self.params.maxiter(maxiter);

        self
    }

    /// Start from `init` instead of a random vector
    pub fn initial_vector(mut self, init: Array1<A>) -> Self {
        self.init = InitVector::Fixed(init);

        self
    }

    /// Generate the starting vector with `generator`
    ///
    /// The generator is called on every [`run`](Self::run) with the dimension of the operator and
    /// the solver's random number generator. Its output is normalized before the first step.
    pub fn initial_vector_fn<G>(mut self, generator: G) -> Self
    where
        G: Fn(usize, &mut R) -> Array1<A> + 'static,
    {
        self.init = InitVector::Generator(Rc::new(generator));

        self
    }

    pub fn params(&self) -> &LanczosParams<A> {
        &self.params
    }

    /// Compute the smallest eigenvalue and its eigenvector
    ///
    /// Every call without an explicit starting vector draws a fresh random one.
    pub fn run(&mut self) -> Result<EigResult<A>> {
        let n = self.operator.dim();
        let init = match self.init {
            InitVector::Fixed(ref init) => init.clone(),
            InitVector::Generator(ref generator) => {
                debug!("generating initial vector of length {}", n);
                (**generator)(n, &mut self.rng)
            }
            InitVector::Random => {
                debug!("drawing random initial vector of length {}", n);
                random(n, &mut self.rng)
            }
        };

        lanczos(&self.operator, init, &self.params)
    }
}
