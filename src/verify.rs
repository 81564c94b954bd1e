//! Structural verification of built matrices
//!
//! Read-only invariant checks, independent of the construction path.
//! Verification returns a boolean signal rather than an error: an invalid
//! structure is something the caller decides how to handle, typically by
//! skipping computation for that matrix. Rejections log the offending
//! index through the `log` facade.

use log::warn;
use num_traits::Num;

use crate::matrix::{SparseMatrixCSR, SparseMatrixHLL};

/// Checks the CSR structural invariants.
///
/// Rejects when array lengths disagree with the dimensions, when
/// `row_ptr` decreases, when `row_ptr[n_rows]` is not the nonzero count,
/// or when any column index falls outside `[0, n_cols)`. Safe to call
/// repeatedly or concurrently; never mutates the matrix.
pub fn verify_csr<T: Copy + Num>(mat: &SparseMatrixCSR<T>) -> bool {
    if mat.row_ptr.len() != mat.n_rows + 1 {
        warn!(
            "CSR row_ptr has length {}, expected {}",
            mat.row_ptr.len(),
            mat.n_rows + 1
        );
        return false;
    }

    if mat.col_idx.len() != mat.values.len() {
        warn!(
            "CSR col_idx/values lengths disagree: {} vs {}",
            mat.col_idx.len(),
            mat.values.len()
        );
        return false;
    }

    for i in 0..mat.n_rows {
        if mat.row_ptr[i] > mat.row_ptr[i + 1] {
            warn!(
                "CSR row_ptr decreases between row_ptr[{}]={} and row_ptr[{}]={}",
                i,
                mat.row_ptr[i],
                i + 1,
                mat.row_ptr[i + 1]
            );
            return false;
        }
    }

    if mat.row_ptr[mat.n_rows] != mat.nnz() {
        warn!(
            "CSR row_ptr[{}]={} but nnz={}",
            mat.n_rows,
            mat.row_ptr[mat.n_rows],
            mat.nnz()
        );
        return false;
    }

    for (k, &col) in mat.col_idx.iter().enumerate() {
        if col >= mat.n_cols {
            warn!("CSR col_idx[{}]={} outside [0, {})", k, col, mat.n_cols);
            return false;
        }
    }

    true
}

/// Checks the HLL structural invariants.
///
/// Every block must have positive `rows_in_block` and `max_nz_per_row`
/// and arrays of the matching size; a degenerate block is rejected here
/// even though the builder can legally produce one for an all-empty row
/// group. Slot columns must lie in `[0, n_cols)` unless the slot's value
/// is zero — that exemption is what admits the padding sentinel.
pub fn verify_hll<T: Copy + Num>(mat: &SparseMatrixHLL<T>) -> bool {
    for (b, block) in mat.blocks.iter().enumerate() {
        if block.rows_in_block == 0 || block.max_nz_per_row == 0 {
            warn!(
                "HLL block {} is degenerate (rows_in_block={}, max_nz_per_row={})",
                b, block.rows_in_block, block.max_nz_per_row
            );
            return false;
        }

        let size = block.storage_len();
        if block.col_idx.len() != size || block.values.len() != size {
            warn!(
                "HLL block {} arrays have lengths {}/{}, expected {}",
                b,
                block.col_idx.len(),
                block.values.len(),
                size
            );
            return false;
        }

        for i in 0..size {
            if block.col_idx[i] >= mat.n_cols && !block.values[i].is_zero() {
                warn!(
                    "HLL block {} slot {} has column {} outside [0, {}) with nonzero value",
                    b, i, block.col_idx[i], mat.n_cols
                );
                return false;
            }
        }
    }

    true
}
