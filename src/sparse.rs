//! Sparse symmetric matrix in triplet form
//!
//! Only the upper triangle (diagonal included) is stored. The product mirrors every strictly
//! off-diagonal entry, which gives the full symmetric product from half the storage.

use ndarray::{prelude::*, NdFloat};

use crate::operator::LinearOperator;

/// Upper-triangular `(value, row, col)` triplets of a symmetric `n x n` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricTriplets<A> {
    dim: usize,
    values: Vec<A>,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl<A: NdFloat> SymmetricTriplets<A> {
    /// Create an empty (zero) matrix of dimension `dim`
    pub fn new(dim: usize) -> Self {
        SymmetricTriplets {
            dim,
            values: Vec::new(),
            rows: Vec::new(),
            cols: Vec::new(),
        }
    }

    /// Collect triplets into a matrix of dimension `dim`
    pub fn from_triplets<I: IntoIterator<Item = (A, usize, usize)>>(dim: usize, iter: I) -> Self {
        let mut mat = Self::new(dim);
        for (value, row, col) in iter {
            mat.push(value, row, col);
        }
        mat
    }

    /// Store entry `(row, col)`, which also stands for its mirror `(col, row)`
    ///
    /// Entries below the diagonal are swapped into the upper triangle. Pushing the same position
    /// twice adds both values.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not smaller than the dimension.
    pub fn push(&mut self, value: A, row: usize, col: usize) {
        assert!(
            row < self.dim && col < self.dim,
            "Index ({}, {}) out of bounds for dimension {}",
            row,
            col,
            self.dim
        );
        let (row, col) = if row <= col { (row, col) } else { (col, row) };
        self.values.push(value);
        self.rows.push(row);
        self.cols.push(col);
    }

    /// Number of stored triplets
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Expand into a dense symmetric matrix
    pub fn to_dense(&self) -> Array2<A> {
        let mut dense = Array2::zeros((self.dim, self.dim));
        for ((&value, &row), &col) in self.values.iter().zip(&self.rows).zip(&self.cols) {
            dense[(row, col)] += value;
            if row != col {
                dense[(col, row)] += value;
            }
        }
        dense
    }
}

impl<A: NdFloat> LinearOperator for SymmetricTriplets<A> {
    type Elem = A;

    fn dim(&self) -> usize {
        self.dim
    }

    fn apply(&self, x: ArrayView1<A>) -> Array1<A> {
        let mut y = Array1::zeros(self.dim);
        for ((&value, &row), &col) in self.values.iter().zip(&self.rows).zip(&self.cols) {
            y[row] += value * x[col];
            if row != col {
                y[col] += value * x[row];
            }
        }
        y
    }
}
