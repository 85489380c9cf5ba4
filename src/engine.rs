use std::time::{Duration, Instant};

use crate::aggregate::{aggregate, BenchmarkResult, LoopOutcome};
use crate::measurement::{measure_once, Callable};
use crate::overhead::estimate_overhead;
use crate::planner::{self, plan};
use crate::progress::{NullSink, ProgressSink};
use crate::stats;

/// Number of warmup invocations performed before planning, unless the
/// caller overrides it with `-w/--warmup`.
pub const DEFAULT_WARMUP_RUNS: u64 = 3;

/// Drive a single callable through warmup, planning, the stabilization
/// loop, and aggregation, producing its final [`BenchmarkResult`].
///
/// `name` is the full instance name this result will be stored under
/// (e.g. `Fib/19` for a template instantiation). `warmup_runs` is the
/// caller-configured warmup count, already clamped to `max(n, 1)` by the
/// CLI layer.
pub fn run(name: &str, warmup_runs: u64, f: &mut Callable) -> BenchmarkResult {
    run_with_progress(name, warmup_runs, f, &mut NullSink)
}

/// Like [`run`], but reports iteration and best-estimate events to `sink`
/// as it goes, for driving a live progress indicator.
pub fn run_with_progress(
    name: &str,
    warmup_runs: u64,
    f: &mut Callable,
    sink: &mut dyn ProgressSink,
) -> BenchmarkResult {
    let clock_overhead = estimate_overhead();

    let warmup_runs = warmup_runs.max(1);
    let mut warmup_estimate = u64::MAX;
    for _ in 0..warmup_runs {
        let d = measure_once(f, clock_overhead);
        warmup_estimate = warmup_estimate.min(d);
    }
    let warmup_execution_time = warmup_estimate as f64;
    log::debug!("{name}: warmup estimate = {warmup_execution_time}ns over {warmup_runs} runs");

    let plan = plan(warmup_estimate);
    log::debug!(
        "{name}: planned max_runs={} budget={:?}",
        plan.max_runs,
        Duration::from_nanos(plan.budget_ns),
    );

    let outcome =
        stabilize(name, warmup_runs, warmup_execution_time, plan, f, clock_overhead, sink);
    let result = aggregate(outcome);
    log::debug!(
        "{name}: done after {} runs, lowest_rsd={:.2}% at run {}",
        result.num_runs,
        result.lowest_rsd,
        result.lowest_rsd_index,
    );
    result
}

/// The run phase of the stabilization loop (spec's "core"): repeatedly
/// performs a fixed-size batch of measurements, tracks the lowest-RSD
/// estimate under its mean-improvement guard, and terminates on whichever
/// of the run-count cap or wall-clock budget is hit first.
fn stabilize(
    name: &str,
    warmup_runs: u64,
    warmup_execution_time: f64,
    plan: planner::Plan,
    f: &mut Callable,
    clock_overhead: i64,
    sink: &mut dyn ProgressSink,
) -> LoopOutcome {
    let mut lowest_rsd = 0.0_f64;
    let mut lowest_rsd_mean = 0.0_f64;
    let mut lowest_rsd_index = 0_u64;
    let mut fastest = 0_u64;
    let mut slowest = 0_u64;
    let mut per_run_means = Vec::with_capacity(plan.max_runs as usize);
    let mut num_runs = 0_u64;
    let mut durations = [0_u64; planner::ITERATIONS_PER_RUN as usize];

    let benchmark_start = Instant::now();
    let budget = Duration::from_nanos(plan.budget_ns);

    loop {
        for slot in durations.iter_mut() {
            *slot = measure_once(f, clock_overhead);
            sink.on_iteration();
        }
        let run_stats = stats::compute(&durations);
        per_run_means.push(run_stats.mean);
        num_runs += 1;

        let mut adopted_new_best = false;
        if num_runs == 1 {
            lowest_rsd = run_stats.rsd;
            lowest_rsd_mean = run_stats.mean;
            lowest_rsd_index = 1;
            fastest = run_stats.fastest;
            slowest = run_stats.slowest;
            adopted_new_best = true;
        } else {
            if run_stats.rsd < lowest_rsd && run_stats.mean < lowest_rsd_mean {
                lowest_rsd = run_stats.rsd;
                lowest_rsd_mean = run_stats.mean;
                lowest_rsd_index = num_runs;
                adopted_new_best = true;
            }
            if run_stats.fastest > 0 {
                fastest = fastest.min(run_stats.fastest);
            }
            slowest = slowest.max(run_stats.slowest);
        }
        if adopted_new_best {
            sink.on_best_estimate(lowest_rsd_mean, lowest_rsd);
        }

        log::trace!(
            "{name}: run {num_runs} mean={:.2}ns rsd={:.2}% (best so far: run {lowest_rsd_index}, rsd={:.2}%)",
            run_stats.mean,
            run_stats.rsd,
            lowest_rsd,
        );

        if num_runs >= plan.max_runs {
            log::debug!("{name}: terminating, run cap {} reached", plan.max_runs);
            break;
        }
        if benchmark_start.elapsed() > budget {
            log::debug!("{name}: terminating, wall-clock budget {budget:?} exceeded");
            break;
        }
    }
    sink.finish();

    LoopOutcome {
        name: name.to_string(),
        warmup_runs,
        num_runs,
        num_iterations: planner::ITERATIONS_PER_RUN,
        lowest_rsd,
        lowest_rsd_mean,
        lowest_rsd_index,
        warmup_execution_time,
        per_run_means,
        fastest,
        slowest,
        clock_overhead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Timers;

    #[test]
    fn noop_produces_a_sane_result() {
        let mut f: Callable = Box::new(|_: &mut Timers| {});
        let r = run("Noop", DEFAULT_WARMUP_RUNS, &mut f);
        assert_eq!(20, r.num_iterations);
        assert!(r.num_runs >= planner::MIN_RUNS);
        assert!(r.lowest_rsd >= 0.0 && r.lowest_rsd <= 100.0);
        assert!(r.mean_execution_time.is_finite());
        assert!(r.fastest_execution_time as f64 <= r.lowest_rsd_mean);
    }

    #[test]
    fn warmup_runs_is_floored_at_one() {
        let mut f: Callable = Box::new(|_: &mut Timers| {});
        let r = run("Noop", 0, &mut f);
        assert_eq!(1, r.warmup_runs);
    }

    #[test]
    fn fastest_never_exceeds_slowest() {
        let mut f: Callable = Box::new(|_: &mut Timers| {
            std::thread::sleep(std::time::Duration::from_micros(1));
        });
        let r = run("Sleepy", 2, &mut f);
        assert!(r.fastest_execution_time <= r.slowest_execution_time);
    }

    #[test]
    fn lowest_rsd_index_is_within_num_runs() {
        let mut f: Callable = Box::new(|_: &mut Timers| {});
        let r = run("Noop", DEFAULT_WARMUP_RUNS, &mut f);
        assert!(r.lowest_rsd_index >= 1 && r.lowest_rsd_index <= r.num_runs);
    }
}
