//! Random workload generation.
//!
//! Produces reproducible process lists for experiments and property
//! checks. The same configuration (including the seed) always yields
//! the same processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Parameters for a random workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Largest gap between consecutive arrivals (gaps are drawn from 0..=max).
    pub max_interarrival: i64,
    /// Smallest burst (>= 1).
    pub min_burst: i64,
    /// Largest burst.
    pub max_burst: i64,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadConfig {
    /// Creates a configuration for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the maximum gap between consecutive arrivals.
    pub fn with_max_interarrival(mut self, max_interarrival: i64) -> Self {
        self.max_interarrival = max_interarrival;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_interarrival: 4,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }
}

/// Generates a process list named `P1..Pn` with non-decreasing arrivals.
///
/// The first process arrives at t=0. Out-of-range settings are clamped:
/// bursts are at least 1, gaps at least 0, and an inverted burst range is
/// treated as a single value.
pub fn generate(config: &WorkloadConfig) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let max_gap = config.max_interarrival.max(0);

    let mut arrival: i64 = 0;
    (0..config.count)
        .map(|idx| {
            if idx > 0 {
                arrival += rng.random_range(0..=max_gap);
            }
            let burst = rng.random_range(min_burst..=max_burst);
            Process::new(format!("P{}", idx + 1), arrival, burst)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_scenario;

    #[test]
    fn test_generate_count_and_names() {
        let processes = generate(&WorkloadConfig::new(6));
        assert_eq!(processes.len(), 6);
        assert_eq!(processes[0].name, "P1");
        assert_eq!(processes[5].name, "P6");
        assert_eq!(processes[0].arrival, 0);
    }

    #[test]
    fn test_generate_ranges() {
        let config = WorkloadConfig::new(50)
            .with_seed(7)
            .with_max_interarrival(3)
            .with_burst_range(2, 5);
        let processes = generate(&config);

        for pair in processes.windows(2) {
            let gap = pair[1].arrival - pair[0].arrival;
            assert!((0..=3).contains(&gap));
        }
        assert!(processes.iter().all(|p| (2..=5).contains(&p.burst)));
        assert!(validate_scenario(&processes).is_ok());
    }

    #[test]
    fn test_generate_deterministic() {
        let config = WorkloadConfig::new(10).with_seed(42);
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn test_generate_clamps() {
        let config = WorkloadConfig::new(5)
            .with_burst_range(0, -3)
            .with_max_interarrival(-1);
        let processes = generate(&config);
        assert!(processes.iter().all(|p| p.burst == 1 && p.arrival == 0));
    }

    #[test]
    fn test_generate_empty() {
        assert!(generate(&WorkloadConfig::new(0)).is_empty());
    }
}
