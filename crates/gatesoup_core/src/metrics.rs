//! Run counters and logging setup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters for one evolution run.
pub struct EvolutionMetrics {
    generations: AtomicU64,
    evaluations: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
    mutations: AtomicU64,
    start_time: Instant,
}

impl Default for EvolutionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl EvolutionMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: AtomicU64::new(0),
            evaluations: AtomicU64::new(0),
            births: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            mutations: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a finished generation.
    pub fn record_generation(&self, evaluations: u64, births: u64, deaths: u64, mutations: u64) {
        self.generations.fetch_add(1, Ordering::Relaxed);
        self.evaluations.fetch_add(evaluations, Ordering::Relaxed);
        self.births.fetch_add(births, Ordering::Relaxed);
        self.deaths.fetch_add(deaths, Ordering::Relaxed);
        self.mutations.fetch_add(mutations, Ordering::Relaxed);
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn mutations(&self) -> u64 {
        self.mutations.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the run totals.
    pub fn log_summary(&self) {
        tracing::info!(
            generations = self.generations(),
            evaluations = self.evaluations(),
            births = self.births(),
            deaths = self.deaths(),
            mutations = self.mutations(),
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Run summary"
        );
    }
}

/// Initialize tracing subscriber for logging. `RUST_LOG` overrides the
/// default `info` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = EvolutionMetrics::new();
        assert_eq!(metrics.generations(), 0);
        assert_eq!(metrics.births(), 0);
    }

    #[test]
    fn test_record_generation() {
        let metrics = EvolutionMetrics::new();
        metrics.record_generation(4096, 10, 12, 3);
        metrics.record_generation(4096, 1, 2, 0);
        assert_eq!(metrics.generations(), 2);
        assert_eq!(metrics.evaluations(), 8192);
        assert_eq!(metrics.births(), 11);
        assert_eq!(metrics.deaths(), 14);
        assert_eq!(metrics.mutations(), 3);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
    }
}
