//! Simulation result caching using Moka.
//!
//! Provides in-memory caching for portfolio reports to avoid
//! redundant computations when the same request is repeated.

use finplan_shared::config::SimulationConfig;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::engine::PortfolioSimulator;
use super::types::{PortfolioReport, PortfolioRequest};

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for portfolio reports.
///
/// Uses the request hash as the cache key. Requests whose crypto jitter is
/// not seeded are never cached, since two runs would differ.
#[derive(Clone)]
pub struct SimulationCache {
    cache: Cache<String, Arc<PortfolioReport>>,
    simulator: PortfolioSimulator,
}

impl SimulationCache {
    /// Creates a new simulation cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new(simulator: PortfolioSimulator) -> Self {
        Self::with_config(simulator, DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new simulation cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `simulator` - Simulator used on cache misses
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(simulator: PortfolioSimulator, max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache, simulator }
    }

    /// Creates a cache and simulator from configuration.
    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::with_config(
            PortfolioSimulator::from_config(config),
            config.cache_capacity,
            config.cache_ttl_secs,
        )
    }

    /// Runs a simulation, returning cached results if available.
    ///
    /// If a cached result exists for the given request, it is returned
    /// with `cached: true`. Otherwise, the simulation is run and, when the
    /// request is deterministic, the result is cached before being returned.
    #[must_use]
    pub fn run_cached(&self, request: &PortfolioRequest) -> PortfolioReport {
        if !request.is_deterministic() {
            debug!("Unseeded crypto jitter, bypassing simulation cache");
            return self.simulator.run(request);
        }

        let cache_key = PortfolioSimulator::hash_params(request);

        if let Some(cached_result) = self.cache.get(&cache_key) {
            let mut result = (*cached_result).clone();
            result.cached = true;
            return result;
        }

        let result = self.simulator.run(request);
        self.cache.insert(cache_key, Arc::new(result.clone()));

        result
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Invalidates a specific cache entry by request.
    pub fn invalidate(&self, request: &PortfolioRequest) {
        let cache_key = PortfolioSimulator::hash_params(request);
        self.cache.invalidate(&cache_key);
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles this automatically, but calling it explicitly makes
    /// invalidations and counts visible immediately.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for SimulationCache {
    fn default() -> Self {
        Self::new(PortfolioSimulator::default())
    }
}
