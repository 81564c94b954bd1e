//! Benchmarks for sparse matrix-vector multiplication

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hackmv::utils::random_vector;
use hackmv::{
    spmv_csr, spmv_csr_parallel, spmv_hll, spmv_hll_parallel, SparseMatrixCSR, TripletBuffer,
    DEFAULT_HACK_SIZE,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const N_ROWS: usize = 20_000;
const N_COLS: usize = 20_000;
const AVG_NNZ_PER_ROW: usize = 16;

/// Builds a seeded random matrix with irregular row lengths.
fn bench_matrix() -> SparseMatrixCSR<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let mut buf = TripletBuffer::with_capacity(N_ROWS, N_COLS, N_ROWS * AVG_NNZ_PER_ROW);

    for i in 0..N_ROWS {
        let row_nnz = rng.gen_range(0..=2 * AVG_NNZ_PER_ROW);
        for _ in 0..row_nnz {
            buf.push(i, rng.gen_range(0..N_COLS), rng.gen_range(-1.0..1.0));
        }
    }

    SparseMatrixCSR::from_triplets(&buf)
}

fn bench_spmv(c: &mut Criterion) {
    let csr = bench_matrix();
    let hll = csr.to_hll(DEFAULT_HACK_SIZE);
    let x = random_vector(N_COLS, &mut ChaCha8Rng::seed_from_u64(42));

    let mut group = c.benchmark_group("spmv");

    group.bench_function("csr_serial", |bench| {
        bench.iter(|| spmv_csr(black_box(&csr), black_box(&x)))
    });

    group.bench_function("csr_parallel", |bench| {
        bench.iter(|| spmv_csr_parallel(black_box(&csr), black_box(&x)))
    });

    group.bench_function("hll_serial", |bench| {
        bench.iter(|| spmv_hll(black_box(&hll), black_box(&x)))
    });

    group.bench_function("hll_parallel", |bench| {
        bench.iter(|| spmv_hll_parallel(black_box(&hll), black_box(&x)))
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let csr = bench_matrix();

    c.bench_function("csr_to_hll", |bench| {
        bench.iter(|| black_box(&csr).to_hll(DEFAULT_HACK_SIZE))
    });
}

criterion_group!(benches, bench_spmv, bench_construction);
criterion_main!(benches);
