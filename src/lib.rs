//! # hackmv: sparse matrix-vector multiplication with CSR and HLL storage
//!
//! This library stores large sparse matrices in two compact layouts and
//! computes `y = A * x` against both, serially and across a thread pool.
//! It exists to benchmark and validate SpMV strategies on multicore
//! hardware.
//!
//! ## Components
//!
//! 1. **Ingestion**: a [`TripletBuffer`] collects (row, col, value)
//!    entries — from the Matrix Market reader or built by hand — and
//!    expands symmetric inputs into explicit mirrored entries.
//!
//! 2. **Storage formats**:
//!    - [`SparseMatrixCSR`]: row pointer / column index / value arrays,
//!      built with a stable counting sort.
//!    - [`SparseMatrixHLL`]: a sliced-ELLPACK layout; fixed-size row
//!      blocks stored as dense, column-major, zero-padded rectangles.
//!      Built from triplets or converted from CSR.
//!
//! 3. **Kernels**: serial and rayon-parallel SpMV for each format. All
//!    kernels fully overwrite their output vector.
//!
//! 4. **Verification**: read-only structural checks for each format,
//!    returning a boolean validity signal.
//!
//! ## Usage
//!
//! ```
//! use hackmv::{SparseMatrixCSR, TripletBuffer, spmv_csr, verify_csr};
//!
//! let mut triplets = TripletBuffer::with_capacity(3, 3, 3);
//! triplets.push(0, 0, 1.0);
//! triplets.push(1, 2, 2.0);
//! triplets.push(2, 1, 3.0);
//!
//! let a = SparseMatrixCSR::from_triplets(&triplets);
//! assert!(verify_csr(&a));
//!
//! let y = spmv_csr(&a, &[1.0, 1.0, 1.0]);
//! assert_eq!(y, vec![1.0, 2.0, 3.0]);
//! ```

pub mod error;
pub mod market;
pub mod matrix;
pub mod spmv;
pub mod utils;
pub mod verify;

// Re-export primary components
pub use error::MarketError;
pub use market::read_matrix_market;
pub use matrix::config::{SpmvConfig, SystemParameters, DEFAULT_HACK_SIZE};
pub use matrix::{reference_spmv, HllBlock, SparseMatrixCSR, SparseMatrixHLL, TripletBuffer, PADDING_COL};
pub use spmv::{
    spmv_csr, spmv_csr_into, spmv_csr_parallel, spmv_csr_parallel_into, spmv_hll, spmv_hll_into,
    spmv_hll_parallel, spmv_hll_parallel_into,
};
pub use utils::{from_sprs_csr, random_vector, to_sprs_csr};
pub use verify::{verify_csr, verify_hll};

/// Version information for the hackmv library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
