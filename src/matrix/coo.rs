//! Coordinate-format ingestion buffer
//!
//! Raw (row, col, value) triples arrive from the Matrix Market reader in
//! arbitrary order. The buffer keeps them together with a per-row tally so
//! the CSR and HLL builders can place every entry in a single pass.

use num_traits::Num;

/// An unordered list of matrix entries plus per-row occupancy counts.
///
/// Symmetric inputs are expanded at push time: the mirrored `(col, row)`
/// entry is stored explicitly, so downstream builders never need to know
/// the source was symmetric. Diagonal entries are never duplicated.
#[derive(Clone, Debug)]
pub struct TripletBuffer<T> {
    /// Number of matrix rows
    pub n_rows: usize,

    /// Number of matrix columns
    pub n_cols: usize,

    /// Row index of each stored entry
    pub rows: Vec<usize>,

    /// Column index of each stored entry
    pub cols: Vec<usize>,

    /// Value of each stored entry
    pub values: Vec<T>,

    /// Number of stored entries per row (size: n_rows)
    pub row_counts: Vec<usize>,
}

impl<T> TripletBuffer<T>
where
    T: Copy + Num,
{
    /// Creates an empty buffer for an `n_rows` × `n_cols` matrix.
    ///
    /// `capacity` should be the worst-case entry count: twice the declared
    /// nonzero count for symmetric inputs, the declared count otherwise.
    pub fn with_capacity(n_rows: usize, n_cols: usize, capacity: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            row_counts: vec![0; n_rows],
        }
    }

    /// Appends a single 0-indexed entry.
    pub fn push(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.n_rows, "row index out of bounds");
        debug_assert!(col < self.n_cols, "column index out of bounds");

        self.rows.push(row);
        self.cols.push(col);
        self.values.push(value);
        self.row_counts[row] += 1;
    }

    /// Appends an entry, mirroring it across the diagonal when `symmetric`
    /// is set and the entry is off-diagonal.
    pub fn push_expanded(&mut self, row: usize, col: usize, value: T, symmetric: bool) {
        self.push(row, col, value);

        if symmetric && row != col {
            self.push(col, row, value);
        }
    }

    /// Number of stored entries, after any symmetric expansion.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
