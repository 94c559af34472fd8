use crate::log_debug;

/// Sizes the blocking worker fan-out for batch normalization
pub struct ConcurrencyCalculator;

impl ConcurrencyCalculator {
    /// Normalization is CPU-bound, so one in-flight record per core is enough
    pub fn calculate_worker_concurrency() -> usize {
        const MIN_WORKERS: usize = 2;
        const MAX_WORKERS: usize = 32;

        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        let optimal = cpu_count.clamp(MIN_WORKERS, MAX_WORKERS);

        log_debug!(
            "Calculated normalization concurrency: {} (CPUs: {})",
            optimal,
            cpu_count
        );

        optimal
    }
}
