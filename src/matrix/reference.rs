//! Reference SpMV via dense multiplication
//!
//! This provides a baseline for correctness testing and performance
//! comparison. The matrix is densified and multiplied with ndarray, so the
//! result is independent of any sparse-layout bookkeeping.

use ndarray::{Array1, Array2, LinalgScalar};
use num_traits::Num;

use crate::matrix::SparseMatrixCSR;

/// Computes `y = A * x` by densifying `A` and using a dense dot product.
///
/// Not meant for large matrices; use it to validate the sparse kernels.
pub fn reference_spmv<T>(a: &SparseMatrixCSR<T>, x: &[T]) -> Vec<T>
where
    T: Copy + Num + LinalgScalar,
{
    assert_eq!(x.len(), a.n_cols, "x length must match matrix columns");

    let mut dense = Array2::<T>::zeros((a.n_rows, a.n_cols));
    for i in 0..a.n_rows {
        for (j, &val) in a.row_iter(i) {
            // Accumulate in case the coordinate list held duplicates.
            dense[[i, j]] = dense[[i, j]] + val;
        }
    }

    dense.dot(&Array1::from(x.to_vec())).to_vec()
}
