use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress events from the stabilization loop.
///
/// The engine calls `on_iteration` once per measurement and
/// `on_best_estimate` whenever the lowest-RSD estimate changes, regardless
/// of whether a visible progress indicator is attached. This keeps the
/// engine's core free of any dependency on a terminal or on indicatif
/// itself; `NullSink` and [`Bar`] are just two implementations of the same
/// narrow interface.
pub trait ProgressSink {
    fn on_iteration(&mut self);
    fn on_best_estimate(&mut self, mean_ns: f64, rsd: f64);
    fn finish(&mut self);
}

/// A sink that does nothing, used when `-q/--quiet` is given.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_iteration(&mut self) {}
    fn on_best_estimate(&mut self, _mean_ns: f64, _rsd: f64) {}
    fn finish(&mut self) {}
}

/// A live `indicatif` block-style progress bar, one per benchmark.
///
/// `max_progress` is `max_runs * N`, the total number of individual
/// iterations the stabilization loop expects to perform if it runs to its
/// run-count cap (it may terminate earlier on the wall-clock budget, in
/// which case the bar simply never reaches 100%).
pub struct Bar {
    bar: ProgressBar,
}

impl Bar {
    pub fn new(benchmark_name: &str, max_progress: u64) -> Bar {
        let bar = ProgressBar::new(max_progress);
        bar.set_style(
            ProgressStyle::with_template(
                "{prefix:.bold} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
        );
        bar.set_prefix(format!(" > {benchmark_name}"));
        Bar { bar }
    }
}

impl ProgressSink for Bar {
    fn on_iteration(&mut self) {
        self.bar.inc(1);
    }

    fn on_best_estimate(&mut self, mean_ns: f64, rsd: f64) {
        self.bar.set_message(format!("{mean_ns:.2}ns (rsd {rsd:.2}%)"));
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}
