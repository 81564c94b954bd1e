//! SpMV kernels for the blocked HLL format
//!
//! Same output contract as the CSR kernels: `y` is fully overwritten, with
//! per-row sums accumulated in a local variable. Blocks own disjoint row
//! ranges and disjoint storage, so a block is the natural unit of parallel
//! work and the output partitions into disjoint `hack_size` chunks.

use std::ops::AddAssign;

use num_traits::Num;
use rayon::prelude::*;

use crate::matrix::{HllBlock, SparseMatrixHLL, PADDING_COL};

/// Computes `y = A * x` serially, block by block.
pub fn spmv_hll<T>(a: &SparseMatrixHLL<T>, x: &[T]) -> Vec<T>
where
    T: Copy + Num + AddAssign,
{
    let mut y = vec![T::zero(); a.n_rows];
    spmv_hll_into(a, x, &mut y);
    y
}

/// Serial HLL SpMV writing into a caller-provided output slice.
pub fn spmv_hll_into<T>(a: &SparseMatrixHLL<T>, x: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign,
{
    assert_eq!(x.len(), a.n_cols, "x length must match matrix columns");
    assert_eq!(y.len(), a.n_rows, "y length must match matrix rows");

    for (b, block) in a.blocks.iter().enumerate() {
        let start = a.block_start(b);
        block_spmv(block, x, &mut y[start..start + block.rows_in_block]);
    }
}

/// Computes `y = A * x` with blocks distributed across the rayon pool.
pub fn spmv_hll_parallel<T>(a: &SparseMatrixHLL<T>, x: &[T]) -> Vec<T>
where
    T: Copy + Num + AddAssign + Send + Sync,
{
    let mut y = vec![T::zero(); a.n_rows];
    spmv_hll_parallel_into(a, x, &mut y);
    y
}

/// Parallel HLL SpMV writing into a caller-provided output slice.
///
/// `y` is split into `hack_size`-sized chunks which line up exactly with
/// the block row ranges, so every worker writes a disjoint region.
pub fn spmv_hll_parallel_into<T>(a: &SparseMatrixHLL<T>, x: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign + Send + Sync,
{
    assert_eq!(x.len(), a.n_cols, "x length must match matrix columns");
    assert_eq!(y.len(), a.n_rows, "y length must match matrix rows");

    y.par_chunks_mut(a.hack_size)
        .zip(a.blocks.par_iter())
        .for_each(|(chunk, block)| {
            block_spmv(block, x, &mut chunk[..block.rows_in_block]);
        });
}

/// Multiplies one block against `x`, overwriting the block's slice of `y`.
///
/// Every slot up to `max_nz_per_row` is visited; padding slots carry the
/// sentinel column and a zero value, so they are skipped rather than
/// dereferenced. An all-empty block writes zeros to its whole slice.
fn block_spmv<T>(block: &HllBlock<T>, x: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign,
{
    let rows = block.rows_in_block;
    for local_row in 0..rows {
        let mut sum = T::zero();
        for slot in 0..block.max_nz_per_row {
            let idx = slot * rows + local_row;
            let col = block.col_idx[idx];
            if col != PADDING_COL {
                sum += block.values[idx] * x[col];
            }
        }
        y[local_row] = sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::TripletBuffer;

    fn sample_hll(hack_size: usize) -> SparseMatrixHLL<f64> {
        // [1 2 0]
        // [0 3 0]
        // [4 0 5]
        let mut buf = TripletBuffer::with_capacity(3, 3, 5);
        buf.push(0, 0, 1.0);
        buf.push(0, 1, 2.0);
        buf.push(1, 1, 3.0);
        buf.push(2, 0, 4.0);
        buf.push(2, 2, 5.0);
        SparseMatrixHLL::from_triplets(&buf, hack_size)
    }

    #[test]
    fn test_spmv_hll() {
        for hack_size in [1, 2, 3, 32] {
            let a = sample_hll(hack_size);
            let y = spmv_hll(&a, &[1.0, 2.0, 3.0]);
            assert_eq!(y, vec![5.0, 6.0, 19.0], "hack_size {}", hack_size);
        }
    }

    #[test]
    fn test_spmv_hll_parallel_matches_serial() {
        for hack_size in [1, 2, 32] {
            let a = sample_hll(hack_size);
            let x = [1.0, 2.0, 3.0];
            assert_eq!(spmv_hll(&a, &x), spmv_hll_parallel(&a, &x));
        }
    }

    #[test]
    fn test_into_overwrites_stale_output() {
        let a = sample_hll(2);
        let mut y = vec![-7.0; 3];
        spmv_hll_into(&a, &[1.0, 1.0, 1.0], &mut y);
        assert_eq!(y, vec![3.0, 3.0, 9.0]);
    }

    #[test]
    fn test_empty_matrix_writes_zeros() {
        let buf = TripletBuffer::<f64>::with_capacity(4, 3, 0);
        let a = SparseMatrixHLL::from_triplets(&buf, 2);

        let mut y = vec![1.0; 4];
        spmv_hll_parallel_into(&a, &[0.0, 0.0, 0.0], &mut y);
        assert_eq!(y, vec![0.0; 4]);
    }

    #[test]
    fn test_zero_row_matrix() {
        let buf = TripletBuffer::<f64>::with_capacity(0, 0, 0);
        let a = SparseMatrixHLL::from_triplets(&buf, 32);
        assert!(spmv_hll(&a, &[]).is_empty());
        assert!(spmv_hll_parallel(&a, &[]).is_empty());
    }
}
