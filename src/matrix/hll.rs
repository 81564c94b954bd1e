//! Hacked-ELLPACK (HLL) blocked matrix format implementation
//!
//! Rows are grouped into fixed-size blocks ("hacks"). Each block stores a
//! dense, column-major, zero-padded rectangle sized by the block's widest
//! row, which gives the SpMV inner loop a regular stride at the cost of
//! padding proportional to the nonzero-count variance within the block.
//! Blocks own disjoint row ranges and disjoint storage, so they can be
//! built and multiplied independently.

use std::fmt;

use aligned_vec::AVec;
use log::debug;
use num_traits::Num;

use crate::matrix::{SparseMatrixCSR, TripletBuffer};

/// Column index stored in padding slots. Out of range for any real column,
/// which is what the structural verifier keys its exemption on.
pub const PADDING_COL: usize = usize::MAX;

/// One block of up to `hack_size` consecutive rows.
#[derive(Clone)]
pub struct HllBlock<T> {
    /// Rows covered by this block (the last block of a matrix may hold
    /// fewer than `hack_size`)
    pub rows_in_block: usize,

    /// Widest row in the block; 0 only if every covered row is empty
    pub max_nz_per_row: usize,

    /// Column indices, column-major: slot s of local row r lives at
    /// `s * rows_in_block + r` (AVec provides alignment)
    pub col_idx: AVec<usize>,

    /// Values, same size and addressing as `col_idx`
    pub values: AVec<T>,
}

impl<T> HllBlock<T>
where
    T: Copy + Num,
{
    /// Flat storage size of the block's two arrays.
    pub fn storage_len(&self) -> usize {
        self.rows_in_block * self.max_nz_per_row
    }
}

/// A sparse matrix in the blocked, padded HLL format.
#[derive(Clone)]
pub struct SparseMatrixHLL<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Rows per block; fixed configuration, not derived from the matrix
    pub hack_size: usize,

    /// ceil(n_rows / hack_size) blocks covering consecutive row ranges
    pub blocks: Vec<HllBlock<T>>,
}

impl<T> SparseMatrixHLL<T>
where
    T: Copy + Num,
{
    /// Builds an HLL matrix from an ingested triplet buffer.
    ///
    /// Entries are bucketed by row first, then each block is laid out
    /// independently. Produces the same logical layout as
    /// [`SparseMatrixHLL::from_csr`] on the same underlying matrix.
    pub fn from_triplets(triplets: &TripletBuffer<T>, hack_size: usize) -> Self {
        assert!(hack_size > 0, "hack_size must be positive");

        let mut by_row: Vec<Vec<(usize, T)>> = vec![Vec::new(); triplets.n_rows];
        for k in 0..triplets.len() {
            by_row[triplets.rows[k]].push((triplets.cols[k], triplets.values[k]));
        }

        let num_blocks = (triplets.n_rows + hack_size - 1) / hack_size;
        let mut blocks = Vec::with_capacity(num_blocks);

        for b in 0..num_blocks {
            let start = b * hack_size;
            let end = ((b + 1) * hack_size).min(triplets.n_rows);
            let rows_in_block = end - start;

            let max_nz = by_row[start..end]
                .iter()
                .map(|row| row.len())
                .max()
                .unwrap_or(0);

            let mut block = empty_block(rows_in_block, max_nz);
            for (local_row, row) in by_row[start..end].iter().enumerate() {
                for (slot, &(col, val)) in row.iter().enumerate() {
                    let idx = slot * rows_in_block + local_row;
                    block.col_idx[idx] = col;
                    block.values[idx] = val;
                }
            }
            blocks.push(block);
        }

        debug!(
            "built {}x{} HLL matrix, {} blocks of hack size {}",
            triplets.n_rows,
            triplets.n_cols,
            blocks.len(),
            hack_size
        );

        Self {
            n_rows: triplets.n_rows,
            n_cols: triplets.n_cols,
            hack_size,
            blocks,
        }
    }

    /// Builds an HLL matrix by reading each row slice of a CSR matrix
    /// directly; no intermediate bucketing.
    pub fn from_csr(csr: &SparseMatrixCSR<T>, hack_size: usize) -> Self {
        assert!(hack_size > 0, "hack_size must be positive");

        let num_blocks = (csr.n_rows + hack_size - 1) / hack_size;
        let mut blocks = Vec::with_capacity(num_blocks);

        for b in 0..num_blocks {
            let start = b * hack_size;
            let end = ((b + 1) * hack_size).min(csr.n_rows);
            let rows_in_block = end - start;

            let max_nz = (start..end).map(|i| csr.row_nnz(i)).max().unwrap_or(0);

            let mut block = empty_block(rows_in_block, max_nz);
            for i in start..end {
                let local_row = i - start;
                let row_start = csr.row_ptr[i];
                for (slot, k) in (row_start..csr.row_ptr[i + 1]).enumerate() {
                    let idx = slot * rows_in_block + local_row;
                    block.col_idx[idx] = csr.col_idx[k];
                    block.values[idx] = csr.values[k];
                }
            }
            blocks.push(block);
        }

        debug!(
            "converted {}x{} CSR matrix to HLL, {} blocks of hack size {}",
            csr.n_rows,
            csr.n_cols,
            blocks.len(),
            hack_size
        );

        Self {
            n_rows: csr.n_rows,
            n_cols: csr.n_cols,
            hack_size,
            blocks,
        }
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// First global row covered by block `b`.
    pub fn block_start(&self, b: usize) -> usize {
        b * self.hack_size
    }

    /// Returns an iterator over the non-padding entries of global row `i`,
    /// as (col_idx, value) tuples in storage order.
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let block = &self.blocks[i / self.hack_size];
        let local_row = i % self.hack_size;
        let rows = block.rows_in_block;

        (0..block.max_nz_per_row)
            .map(move |slot| slot * rows + local_row)
            .filter(move |&idx| block.col_idx[idx] != PADDING_COL)
            .map(move |idx| (block.col_idx[idx], &block.values[idx]))
    }
}

/// Allocates a block with every slot set to the padding sentinel.
fn empty_block<T: Copy + Num>(rows_in_block: usize, max_nz_per_row: usize) -> HllBlock<T> {
    let size = rows_in_block * max_nz_per_row;
    HllBlock {
        rows_in_block,
        max_nz_per_row,
        col_idx: AVec::from_iter(64, std::iter::repeat(PADDING_COL).take(size)),
        values: AVec::from_iter(64, std::iter::repeat(T::zero()).take(size)),
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixHLL<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SparseMatrixHLL {{ {} x {}, hack_size: {}",
            self.n_rows, self.n_cols, self.hack_size
        )?;
        for (b, block) in self.blocks.iter().take(8).enumerate() {
            writeln!(
                f,
                "  block {}: rows = {}, max_nz_per_row = {}",
                b, block.rows_in_block, block.max_nz_per_row
            )?;
        }
        if self.blocks.len() > 8 {
            writeln!(f, "  ... ({} more blocks)", self.blocks.len() - 8)?;
        }
        write!(f, "}}")
    }
}
