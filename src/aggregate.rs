/// A single benchmark's final, immutable result record.
///
/// One of these is produced per dispatched descriptor and stored in the
/// results store keyed by full instance name. All durations are in
/// nanoseconds; all `*_iteration_performance` fields are in iterations per
/// second.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub name: String,
    pub warmup_runs: u64,
    pub num_runs: u64,
    pub num_iterations: u64,
    pub lowest_rsd: f64,
    pub lowest_rsd_mean: f64,
    pub lowest_rsd_index: u64,
    pub warmup_execution_time: f64,
    pub mean_execution_time: f64,
    pub fastest_execution_time: u64,
    pub slowest_execution_time: u64,
    pub average_iteration_performance: f64,
    pub fastest_iteration_performance: f64,
    pub slowest_iteration_performance: f64,
    /// Set when every observed fastest-per-run sample was zero, i.e. the
    /// callable ran faster than the clock could resolve. In this case
    /// `mean_execution_time` is also floored (it would otherwise be 0 too),
    /// to the same overhead-derived value `fastest_execution_time` is
    /// floored to, and every `*_iteration_performance` field is derived
    /// from floored denominators rather than dividing by zero.
    pub below_clock_resolution: bool,
}

/// Final state handed off by the stabilization loop once it terminates.
pub struct LoopOutcome {
    pub name: String,
    pub warmup_runs: u64,
    pub num_runs: u64,
    pub num_iterations: u64,
    pub lowest_rsd: f64,
    pub lowest_rsd_mean: f64,
    pub lowest_rsd_index: u64,
    pub warmup_execution_time: f64,
    pub per_run_means: Vec<f64>,
    pub fastest: u64,
    pub slowest: u64,
    /// Clock-overhead estimate, used as the throughput floor when `fastest`
    /// never rose above zero.
    pub clock_overhead: i64,
}

/// Derive a [`BenchmarkResult`] from a loop's terminal state.
///
/// This is a pure function: no IO, no clock reads. It must never produce
/// `NaN` or infinity, which is why the zero-fastest and zero-mean cases
/// (both reachable when a callable runs below clock resolution) are
/// floored rather than divided through directly, and `lowest_rsd` is
/// clamped to `[0, 100]` since a noisy enough first run can otherwise
/// report a relative standard deviation above 100%.
pub fn aggregate(outcome: LoopOutcome) -> BenchmarkResult {
    let global_mean =
        outcome.per_run_means.iter().sum::<f64>() / outcome.per_run_means.len() as f64;

    let below_clock_resolution = outcome.fastest == 0;
    let fastest_floor = if below_clock_resolution {
        outcome.clock_overhead.max(1) as u64
    } else {
        outcome.fastest
    };
    // When every compensated sample is 0 (below clock resolution), the mean
    // is 0 too. Floor it against the same value `fastest` was floored to,
    // not a flat 1ns: flooring independently could otherwise put the mean
    // below the floored fastest and violate `fastest <= mean`.
    let mean_floor = global_mean.max(fastest_floor as f64);

    BenchmarkResult {
        name: outcome.name,
        warmup_runs: outcome.warmup_runs,
        num_runs: outcome.num_runs,
        num_iterations: outcome.num_iterations,
        lowest_rsd: outcome.lowest_rsd.clamp(0.0, 100.0),
        lowest_rsd_mean: outcome.lowest_rsd_mean,
        lowest_rsd_index: outcome.lowest_rsd_index,
        warmup_execution_time: outcome.warmup_execution_time,
        mean_execution_time: mean_floor,
        fastest_execution_time: fastest_floor,
        slowest_execution_time: outcome.slowest,
        average_iteration_performance: 1e9 / mean_floor,
        fastest_iteration_performance: 1e9 / fastest_floor as f64,
        slowest_iteration_performance: 1e9 / outcome.slowest.max(1) as f64,
        below_clock_resolution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(fastest: u64, slowest: u64, means: Vec<f64>) -> LoopOutcome {
        outcome_with_rsd(fastest, slowest, means, 1.5)
    }

    fn outcome_with_rsd(
        fastest: u64,
        slowest: u64,
        means: Vec<f64>,
        lowest_rsd: f64,
    ) -> LoopOutcome {
        LoopOutcome {
            name: "Noop".to_string(),
            warmup_runs: 3,
            num_runs: means.len() as u64,
            num_iterations: 20,
            lowest_rsd,
            lowest_rsd_mean: means[0],
            lowest_rsd_index: 1,
            warmup_execution_time: 10.0,
            per_run_means: means,
            fastest,
            slowest,
            clock_overhead: 5,
        }
    }

    #[test]
    fn normal_case_has_no_zero_divisions() {
        let r = aggregate(outcome(50, 200, vec![100.0, 110.0, 90.0]));
        assert!(!r.below_clock_resolution);
        assert_eq!(50, r.fastest_execution_time);
        assert!(r.average_iteration_performance.is_finite());
        assert!(r.fastest_iteration_performance.is_finite());
        assert!(r.slowest_iteration_performance.is_finite());
    }

    #[test]
    fn zero_fastest_is_flagged_and_floored() {
        let r = aggregate(outcome(0, 40, vec![20.0, 25.0]));
        assert!(r.below_clock_resolution);
        assert_eq!(5, r.fastest_execution_time);
        assert!(r.fastest_iteration_performance.is_finite());
        assert!(!r.fastest_iteration_performance.is_nan());
    }

    #[test]
    fn global_mean_is_arithmetic_mean_of_per_run_means() {
        let r = aggregate(outcome(10, 30, vec![10.0, 20.0, 30.0]));
        assert_eq!(20.0, r.mean_execution_time);
    }

    #[test]
    fn zero_mean_is_floored_so_average_throughput_is_finite() {
        // Every compensated sample below clock resolution: fastest and all
        // per-run means are 0.
        let r = aggregate(outcome(0, 0, vec![0.0, 0.0]));
        assert!(r.below_clock_resolution);
        assert!(r.mean_execution_time > 0.0);
        assert!(r.average_iteration_performance.is_finite());
        assert!(!r.average_iteration_performance.is_nan());
        // Property #3: fastest <= global_mean must still hold once both are
        // floored, even though the overhead-derived floor (5ns here) is
        // bigger than 1ns.
        assert_eq!(r.fastest_execution_time, 5);
        assert!(r.fastest_execution_time as f64 <= r.mean_execution_time);
    }

    #[test]
    fn lowest_rsd_is_clamped_to_one_hundred() {
        // A noisy first run (stddev > mean) would otherwise emit rsd > 100.
        let r = aggregate(outcome_with_rsd(10, 30, vec![20.0, 20.0], 400.0));
        assert_eq!(100.0, r.lowest_rsd);
    }

    #[test]
    fn lowest_rsd_is_clamped_at_zero() {
        let r = aggregate(outcome_with_rsd(10, 30, vec![20.0, 20.0], -5.0));
        assert_eq!(0.0, r.lowest_rsd);
    }
}
