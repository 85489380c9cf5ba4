/// Fixed iteration count per run. This is a constant, not a tunable, across
/// the whole engine.
pub const ITERATIONS_PER_RUN: u64 = 20;

/// Minimum number of runs a benchmark must complete, barring an early
/// wall-clock budget exhaustion on the very first run.
pub const MIN_RUNS: u64 = 2;

/// A wall-clock budget and run cap derived from an early execution-time
/// estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plan {
    /// Total wall-clock budget for the run phase, in nanoseconds.
    pub budget_ns: u64,
    /// The maximum number of runs to perform.
    pub max_runs: u64,
}

/// Derive a [`Plan`] from an early per-iteration time estimate, in
/// nanoseconds.
///
/// `estimate_ns` is clamped to at least 1ns first, since a benchmark whose
/// warmup measured exactly zero (below clock resolution) would otherwise
/// divide by zero when computing the total iteration count.
pub fn plan(estimate_ns: u64) -> Plan {
    let e = estimate_ns.max(1);

    let base_budget_ns: u64 = if e <= 100 {
        500_000_000
    } else if e <= 1_000 {
        1_000_000_000
    } else if e <= 100_000 {
        2_500_000_000
    } else if e <= 1_000_000 {
        5_000_000_000
    } else if e <= 100_000_000 {
        7_500_000_000
    } else {
        10_000_000_000
    };

    let floor_ns = e.saturating_mul(MIN_RUNS).saturating_mul(ITERATIONS_PER_RUN);
    let budget_ns = base_budget_ns.max(floor_ns);

    let total_iterations = budget_ns / e;
    let max_runs = (total_iterations / ITERATIONS_PER_RUN).max(MIN_RUNS);

    log::debug!(
        "planned budget={budget_ns}ns max_runs={max_runs} from estimate={estimate_ns}ns",
    );
    Plan { budget_ns, max_runs }
}
