use crate::args::Filter;
use crate::engine;
use crate::planner;
use crate::progress::{Bar, NullSink, ProgressSink};
use crate::registry::Registry;
use crate::results::ResultsStore;

/// Dispatch every registered benchmark, in declaration order.
pub fn run_all(registry: &mut Registry, warmup_runs: u64, quiet: bool) -> ResultsStore {
    dispatch(registry, warmup_runs, quiet, |_| true)
}

/// Dispatch only benchmarks whose full name matches `filter`, in
/// declaration order.
pub fn run_filtered(
    registry: &mut Registry,
    warmup_runs: u64,
    quiet: bool,
    filter: &Filter,
) -> ResultsStore {
    dispatch(registry, warmup_runs, quiet, |name| filter.include(name))
}

fn dispatch(
    registry: &mut Registry,
    warmup_runs: u64,
    quiet: bool,
    mut select: impl FnMut(&str) -> bool,
) -> ResultsStore {
    let mut store = ResultsStore::new();
    for entry in registry.iter_mut() {
        if !select(&entry.full_name) {
            continue;
        }
        log::debug!("dispatching {}", entry.full_name);

        // The exact number of runs isn't known until the adaptive planner
        // has seen the warmup estimate, so the bar is sized optimistically
        // at a benchmark's run cap under the slowest budget tier; it just
        // won't reach 100% for a benchmark that plans fewer runs. This
        // mirrors the upstream bar, which sizes itself off max_num_runs
        // once planning has happened — we size it off the iteration count
        // per run only, and let `on_iteration` drive it incrementally.
        let mut sink: Box<dyn ProgressSink> = if quiet {
            Box::new(NullSink)
        } else {
            Box::new(Bar::new(&entry.full_name, planner::ITERATIONS_PER_RUN * 64))
        };

        let result = engine::run_with_progress(
            &entry.full_name,
            warmup_runs,
            &mut entry.callable,
            sink.as_mut(),
        );
        crate::format::console::write_result(&result);
        store.insert(result);
    }
    store
}
