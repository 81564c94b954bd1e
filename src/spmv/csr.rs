//! SpMV kernels for the CSR format
//!
//! Every kernel fully overwrites its output: each `y[i]` is stored exactly
//! once, from a sum accumulated in a local variable, so callers never need
//! to zero `y` beforehand. The summation order within a row is fixed
//! (left to right in storage order), which makes results reproducible
//! across runs and thread counts.

use std::ops::AddAssign;

use num_traits::Num;
use rayon::prelude::*;

use crate::matrix::SparseMatrixCSR;

/// Lower bound on rows per work-stealing split. Rows are irregular, so
/// splitting stays dynamic, but splits below this length cost more in task
/// bookkeeping than they recover in balance.
const MIN_ROWS_PER_SPLIT: usize = 64;

/// Computes `y = A * x` serially, one row at a time.
pub fn spmv_csr<T>(a: &SparseMatrixCSR<T>, x: &[T]) -> Vec<T>
where
    T: Copy + Num + AddAssign,
{
    let mut y = vec![T::zero(); a.n_rows];
    spmv_csr_into(a, x, &mut y);
    y
}

/// Serial CSR SpMV writing into a caller-provided output slice.
pub fn spmv_csr_into<T>(a: &SparseMatrixCSR<T>, x: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign,
{
    assert_eq!(x.len(), a.n_cols, "x length must match matrix columns");
    assert_eq!(y.len(), a.n_rows, "y length must match matrix rows");

    for i in 0..a.n_rows {
        let mut sum = T::zero();
        for k in a.row_ptr[i]..a.row_ptr[i + 1] {
            sum += a.values[k] * x[a.col_idx[k]];
        }
        y[i] = sum;
    }
}

/// Computes `y = A * x` with rows distributed across the rayon pool.
pub fn spmv_csr_parallel<T>(a: &SparseMatrixCSR<T>, x: &[T]) -> Vec<T>
where
    T: Copy + Num + AddAssign + Send + Sync,
{
    let mut y = vec![T::zero(); a.n_rows];
    spmv_csr_parallel_into(a, x, &mut y);
    y
}

/// Parallel CSR SpMV writing into a caller-provided output slice.
///
/// Each worker owns a disjoint range of rows and writes only its own
/// `y[i]` slots; work stealing rebalances the irregular row lengths, so no
/// synchronization is needed on the output.
pub fn spmv_csr_parallel_into<T>(a: &SparseMatrixCSR<T>, x: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign + Send + Sync,
{
    assert_eq!(x.len(), a.n_cols, "x length must match matrix columns");
    assert_eq!(y.len(), a.n_rows, "y length must match matrix rows");

    y.par_iter_mut()
        .enumerate()
        .with_min_len(MIN_ROWS_PER_SPLIT)
        .for_each(|(i, yi)| {
            let mut sum = T::zero();
            for k in a.row_ptr[i]..a.row_ptr[i + 1] {
                sum += a.values[k] * x[a.col_idx[k]];
            }
            *yi = sum;
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> SparseMatrixCSR<f64> {
        // [1 2 0]
        // [0 3 0]
        // [4 0 5]
        SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        )
    }

    #[test]
    fn test_spmv_csr() {
        let a = sample_matrix();
        let y = spmv_csr(&a, &[1.0, 2.0, 3.0]);
        assert_eq!(y, vec![5.0, 6.0, 19.0]);
    }

    #[test]
    fn test_spmv_csr_parallel_matches_serial() {
        let a = sample_matrix();
        let x = [1.0, 2.0, 3.0];
        assert_eq!(spmv_csr(&a, &x), spmv_csr_parallel(&a, &x));
    }

    #[test]
    fn test_into_overwrites_stale_output() {
        let a = sample_matrix();
        let mut y = vec![99.0; 3];
        spmv_csr_into(&a, &[1.0, 1.0, 1.0], &mut y);
        assert_eq!(y, vec![3.0, 3.0, 9.0]);
    }

    #[test]
    fn test_empty_rows_produce_zeros() {
        let a = SparseMatrixCSR::new(3, 2, vec![0, 1, 1, 1], vec![1], vec![2.0]);
        let y = spmv_csr(&a, &[1.0, 10.0]);
        assert_eq!(y, vec![20.0, 0.0, 0.0]);
    }

    #[test]
    fn test_zero_dimension_matrix() {
        let a = SparseMatrixCSR::<f64>::zeros(0, 0);
        assert!(spmv_csr(&a, &[]).is_empty());
        assert!(spmv_csr_parallel(&a, &[]).is_empty());
    }
}
