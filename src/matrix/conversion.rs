//! Conversion functions between matrix formats

use num_traits::Num;

use crate::matrix::{SparseMatrixCSR, SparseMatrixHLL};

impl<T: Copy + Num> SparseMatrixCSR<T> {
    /// Converts this CSR matrix to the blocked HLL format.
    ///
    /// Logically lossless: every row's nonzero set survives unchanged, the
    /// HLL side merely adds padding. See [`SparseMatrixHLL::from_csr`].
    pub fn to_hll(&self, hack_size: usize) -> SparseMatrixHLL<T> {
        SparseMatrixHLL::from_csr(self, hack_size)
    }
}
