//! Utilities for converting between our matrix formats and external libraries

use num_traits::Num;
use sprs::CsMat;

use crate::matrix::SparseMatrixCSR;

/// Converts our CSR matrix format to sprs CsMat format
///
/// sprs requires column-sorted rows; ours keep ingestion order, so each
/// row is sorted on the way out.
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    let mut col_idx = Vec::with_capacity(matrix.nnz());
    let mut values = Vec::with_capacity(matrix.nnz());

    for i in 0..matrix.n_rows {
        let mut row: Vec<(usize, T)> = matrix.row_iter(i).map(|(c, &v)| (c, v)).collect();
        row.sort_by_key(|&(c, _)| c);
        for (c, v) in row {
            col_idx.push(c);
            values.push(v);
        }
    }

    CsMat::new(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_ptr.clone(),
        col_idx,
        values,
    )
}

/// Converts sprs CsMat in CSR format to our SparseMatrixCSR format
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(shape.0, shape.1, indptr, indices, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_roundtrip() {
        // Rows intentionally not column-sorted.
        let original = SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![1, 0, 1, 2, 0],
            vec![2.0f64, 1.0, 3.0, 5.0, 4.0],
        );

        let sprs_mat = to_sprs_csr(&original);
        let roundtrip = from_sprs_csr(sprs_mat);

        assert_eq!(roundtrip.n_rows, original.n_rows);
        assert_eq!(roundtrip.n_cols, original.n_cols);
        assert_eq!(roundtrip.nnz(), original.nnz());
        assert_eq!(roundtrip.row_ptr, original.row_ptr);

        // Per-row sets survive; order within a row may differ.
        for i in 0..original.n_rows {
            let mut original_row: Vec<_> = original.row_iter(i).map(|(c, &v)| (c, v)).collect();
            let mut roundtrip_row: Vec<_> = roundtrip.row_iter(i).map(|(c, &v)| (c, v)).collect();
            original_row.sort_by_key(|&(c, _)| c);
            roundtrip_row.sort_by_key(|&(c, _)| c);
            assert_eq!(original_row, roundtrip_row);
        }
    }

    #[test]
    fn test_sprs_spmv_agrees() {
        let ours = SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0f64, 2.0, 3.0, 4.0, 5.0],
        );
        let x = vec![1.0, 2.0, 3.0];

        let sprs_mat = to_sprs_csr(&ours);
        let mut y_sprs = vec![0.0; 3];
        sprs::prod::mul_acc_mat_vec_csr(sprs_mat.view(), &x[..], &mut y_sprs);

        let y_ours = crate::spmv::spmv_csr(&ours, &x);
        for (a, b) in y_ours.iter().zip(&y_sprs) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
