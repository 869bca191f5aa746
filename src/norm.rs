//! Norm of vectors

use ndarray::{prelude::*, Data, DataMut};

/// Define norm as a metric linear space, treating the whole array as one big vector.
pub trait Norm {
    type Output;

    /// L-2 norm
    fn norm_l2(&self) -> Self::Output;
}

impl<A, S, D> Norm for ArrayBase<S, D>
where
    A: NdFloat + std::iter::Sum,
    S: Data<Elem = A>,
    D: Dimension,
{
    type Output = A;

    fn norm_l2(&self) -> Self::Output {
        self.iter().map(|&x| x * x).sum::<A>().sqrt()
    }
}

/// Scale an array to unit L-2 norm
pub trait Normalize {
    type Output;

    /// Divide every element by the L-2 norm and return the norm it had before.
    ///
    /// A zero array is divided by zero like any other, so the caller has to rule that out.
    fn normalize_inplace(&mut self) -> Self::Output;
}

impl<A, S, D> Normalize for ArrayBase<S, D>
where
    A: NdFloat + std::iter::Sum,
    S: DataMut<Elem = A>,
    D: Dimension,
{
    type Output = A;

    fn normalize_inplace(&mut self) -> A {
        let norm = self.norm_l2();
        self.mapv_inplace(|x| x / norm);
        norm
    }
}
