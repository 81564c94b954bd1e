// Serial and parallel SpMV kernels for both storage formats

pub mod csr;
pub mod hll;

pub use csr::{spmv_csr, spmv_csr_into, spmv_csr_parallel, spmv_csr_parallel_into};
pub use hll::{spmv_hll, spmv_hll_into, spmv_hll_parallel, spmv_hll_parallel_into};
