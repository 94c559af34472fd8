use log::{debug, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("job_normalizer_lib", log::LevelFilter::Debug)
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log the start and end of a single record normalization
    pub fn normalization(title: &str, company: &str, quality: Option<f64>) {
        match quality {
            Some(score) => debug!(
                "Normalize: '{}' at '{}' done (quality: {:.2})",
                title, company, score
            ),
            None => debug!("Normalize: starting '{}'", title),
        }
    }

    /// Log a malformed field that was resolved with a default
    pub fn defaulted_field(field: &str, raw: &str, fallback: &str) {
        debug!(
            "Malformed input: {} '{}' could not be used, defaulting to {}",
            field, raw, fallback
        );
    }

    /// Log batch progress
    pub fn batch_progress(completed: usize, total: usize, failed: usize) {
        info!(
            "Batch: [{}/{}] normalized, {} passed through unchanged",
            completed, total, failed
        );
    }

    /// Log a record that failed inside a batch
    pub fn batch_item_failed(index: usize, error: &dyn std::error::Error) {
        warn!("Batch: record #{} kept raw: {}", index, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
