//! Configuration management for the kinship hub analyzer

/// Default configuration for an analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Extraction stops once a hub removes fewer neighbors than this
    pub min_degree: usize,

    /// Maximum number of hubs to extract
    pub max_hubs: usize,

    /// Number of worker threads (0 = use all available cores)
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_degree: 3,
            max_hubs: 100,
            threads: 0,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(min_degree: usize, max_hubs: usize, threads: usize) -> Self {
        Self {
            min_degree,
            max_hubs,
            threads,
        }
    }

    /// Resolve the worker thread count, falling back to all available cores
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }
}
