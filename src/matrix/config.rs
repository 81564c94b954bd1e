//! Configuration and system parameters for SpMV

/// Rows grouped into one HLL block unless overridden. Chosen to balance
/// padding waste against per-block metadata overhead; never derived from
/// matrix statistics.
pub const DEFAULT_HACK_SIZE: usize = 32;

/// System parameters for performance tuning
#[derive(Debug, Clone)]
pub struct SystemParameters {
    /// Number of threads to use
    pub n_threads: usize,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

/// Configuration for matrix construction and the SpMV kernels
#[derive(Debug, Clone)]
pub struct SpmvConfig {
    /// Rows per HLL block
    pub hack_size: usize,

    /// System parameters for performance tuning
    pub system_params: SystemParameters,
}

impl Default for SpmvConfig {
    fn default() -> Self {
        Self {
            hack_size: DEFAULT_HACK_SIZE,
            system_params: SystemParameters::default(),
        }
    }
}

impl SpmvConfig {
    /// Create a config with a specific hack size
    pub fn with_hack_size(hack_size: usize) -> Self {
        assert!(hack_size > 0, "hack_size must be positive");
        Self {
            hack_size,
            system_params: SystemParameters::default(),
        }
    }
}
