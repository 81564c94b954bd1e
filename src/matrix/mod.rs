// Matrix data structures and operations

pub mod config;
pub mod conversion;
pub mod coo;
pub mod csr;
pub mod hll;
pub mod reference;

pub use config::{SpmvConfig, SystemParameters, DEFAULT_HACK_SIZE};
pub use coo::TripletBuffer;
pub use csr::SparseMatrixCSR;
pub use hll::{HllBlock, SparseMatrixHLL, PADDING_COL};
pub use reference::reference_spmv;
