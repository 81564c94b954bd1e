use hackmv::{
    read_matrix_market, spmv_csr, spmv_csr_parallel, spmv_hll, spmv_hll_parallel, verify_csr,
    verify_hll, SparseMatrixCSR, SpmvConfig, TripletBuffer,
};
use hackmv::utils::random_vector;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    pretty_env_logger::init();

    println!("hackmv: sparse matrix-vector multiplication benchmark core");

    let config = SpmvConfig::default();
    println!("\nConfiguration:");
    println!("  Hack size: {}", config.hack_size);
    println!("  Threads: {}", config.system_params.n_threads);

    // Load a Matrix Market file if one was given, otherwise use a small
    // built-in example.
    let triplets = match std::env::args().nth(1) {
        Some(path) => match read_matrix_market(&path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            let mut t = TripletBuffer::with_capacity(3, 3, 3);
            t.push(0, 0, 1.0);
            t.push(1, 2, 2.0);
            t.push(2, 1, 3.0);
            t
        }
    };

    println!(
        "\nMatrix: {} x {}, {} stored entries",
        triplets.n_rows,
        triplets.n_cols,
        triplets.len()
    );

    let csr = SparseMatrixCSR::from_triplets(&triplets);
    if !verify_csr(&csr) {
        eprintln!("CSR structure failed verification");
        std::process::exit(1);
    }
    println!("CSR structure verified");

    let hll = csr.to_hll(config.hack_size);
    if !verify_hll(&hll) {
        eprintln!("HLL structure failed verification");
        std::process::exit(1);
    }
    println!("HLL structure verified ({} blocks)", hll.num_blocks());

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let x = random_vector(csr.n_cols, &mut rng);

    let y_csr = spmv_csr(&csr, &x);
    let y_csr_par = spmv_csr_parallel(&csr, &x);
    let y_hll = spmv_hll(&hll, &x);
    let y_hll_par = spmv_hll_parallel(&hll, &x);

    println!("\nSpMV results (first entries):");
    for (name, y) in [
        ("CSR serial", &y_csr),
        ("CSR parallel", &y_csr_par),
        ("HLL serial", &y_hll),
        ("HLL parallel", &y_hll_par),
    ] {
        let head: Vec<f64> = y.iter().take(5).copied().collect();
        println!("  {:<13} {:?}", name, head);
    }

    let max_diff = y_csr
        .iter()
        .zip(&y_hll_par)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f64, f64::max);
    println!("\nMax |CSR serial - HLL parallel| = {:e}", max_diff);
}
