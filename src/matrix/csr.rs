//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;

use log::debug;
use num_traits::Num;

use crate::matrix::TripletBuffer;
use crate::utils::exclusive_scan;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Entries within a row keep their ingestion order; they are not sorted by
/// column.
#[derive(Clone)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n_rows] must equal col_idx.len()
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Builds a CSR matrix from an ingested triplet buffer.
    ///
    /// The per-row counts become `row_ptr` through an exclusive prefix
    /// scan, then a counting sort places every entry at its row's write
    /// cursor. The sort is stable: entries land in ingestion order within
    /// each row. Runs in O(count) time with O(n_rows + count) extra space.
    ///
    /// An empty buffer (or one with zero rows) is legal and produces an
    /// all-zero `row_ptr` with empty index/value arrays.
    pub fn from_triplets(triplets: &TripletBuffer<T>) -> Self {
        let row_ptr = exclusive_scan(&triplets.row_counts);
        let nnz = triplets.len();
        debug_assert_eq!(row_ptr[triplets.n_rows], nnz);

        let mut col_idx = vec![0usize; nnz];
        let mut values = vec![T::zero(); nnz];
        let mut cursor = vec![0usize; triplets.n_rows];

        for k in 0..nnz {
            let r = triplets.rows[k];
            let idx = row_ptr[r] + cursor[r];
            col_idx[idx] = triplets.cols[k];
            values[idx] = triplets.values[k];
            cursor[r] += 1;
        }

        debug!(
            "built {}x{} CSR matrix with {} nonzeros",
            triplets.n_rows, triplets.n_cols, nnz
        );

        Self::new(triplets.n_rows, triplets.n_cols, row_ptr, col_idx, values)
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Number of nonzeros stored in row `i`.
    pub fn row_nnz(&self, i: usize) -> usize {
        self.row_ptr[i + 1] - self.row_ptr[i]
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a non-zero element
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SparseMatrixCSR {{ {} x {}, nnz: {}",
            self.n_rows,
            self.n_cols,
            self.nnz()
        )?;

        for i in 0..self.n_rows.min(5) {
            write!(f, "  row {}:", i)?;
            for (col, val) in self.row_iter(i).take(5) {
                write!(f, " ({}, {:?})", col, val)?;
            }
            if self.row_nnz(i) > 5 {
                write!(f, " ... ({} more)", self.row_nnz(i) - 5)?;
            }
            writeln!(f)?;
        }
        if self.n_rows > 5 {
            writeln!(f, "  ... ({} more rows)", self.n_rows - 5)?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let matrix = SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        );

        assert_eq!(matrix.n_rows, 3);
        assert_eq!(matrix.n_cols, 3);
        assert_eq!(matrix.nnz(), 5);
    }

    #[test]
    fn test_from_triplets_counting_sort() {
        // Entries deliberately out of row order.
        let mut buf = TripletBuffer::with_capacity(3, 3, 5);
        buf.push(2, 1, 5.0);
        buf.push(0, 0, 1.0);
        buf.push(1, 1, 3.0);
        buf.push(0, 1, 2.0);
        buf.push(2, 0, 4.0);

        let matrix = SparseMatrixCSR::from_triplets(&buf);

        assert_eq!(matrix.row_ptr, vec![0, 2, 3, 5]);

        // Within each row the ingestion order is preserved.
        let row0: Vec<_> = matrix.row_iter(0).map(|(c, &v)| (c, v)).collect();
        assert_eq!(row0, vec![(0, 1.0), (1, 2.0)]);
        let row2: Vec<_> = matrix.row_iter(2).map(|(c, &v)| (c, v)).collect();
        assert_eq!(row2, vec![(1, 5.0), (0, 4.0)]);
    }

    #[test]
    fn test_from_triplets_empty() {
        let buf = TripletBuffer::<f64>::with_capacity(4, 4, 0);
        let matrix = SparseMatrixCSR::from_triplets(&buf);

        assert_eq!(matrix.row_ptr, vec![0; 5]);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_row_iter() {
        let matrix = SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        );

        let row1: Vec<_> = matrix.row_iter(1).collect();
        assert_eq!(row1, vec![(1, &3.0)]);

        let row2: Vec<_> = matrix.row_iter(2).collect();
        assert_eq!(row2, vec![(0, &4.0), (2, &5.0)]);
    }

    #[test]
    fn test_zeros() {
        let matrix = SparseMatrixCSR::<f64>::zeros(3, 4);

        assert_eq!(matrix.row_ptr, vec![0, 0, 0, 0]);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    #[should_panic(expected = "row_ptr.len() must be n_rows + 1")]
    fn test_invalid_row_ptr() {
        SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3], // Missing last element
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        );
    }
}
