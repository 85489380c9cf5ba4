use crate::aggregate::BenchmarkResult;

/// The flattened, writer-facing view of a [`BenchmarkResult`].
///
/// This is the common shape every writer (CSV, JSON, Markdown, AsciiDoc)
/// builds from; it exists so that the field list required by the external
/// result file formats lives in exactly one place. All durations are
/// nanoseconds, all throughputs are iterations per second, and every
/// floating-point field is rendered with 2 decimal places, matching the
/// rest of the console output.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ResultRecord {
    pub name: String,
    pub warmup_runs: u64,
    pub iterations: u64,
    pub mean_execution_time: String,
    pub fastest_execution_time: String,
    pub slowest_execution_time: String,
    pub lowest_rsd_execution_time: String,
    pub lowest_rsd_percentage: String,
    pub lowest_rsd_index: u64,
    pub average_iteration_performance: String,
    pub fastest_iteration_performance: String,
    pub slowest_iteration_performance: String,
}

impl From<&BenchmarkResult> for ResultRecord {
    fn from(r: &BenchmarkResult) -> ResultRecord {
        ResultRecord {
            name: r.name.clone(),
            warmup_runs: r.warmup_runs,
            iterations: r.num_runs * r.num_iterations,
            mean_execution_time: fixed2(r.mean_execution_time),
            fastest_execution_time: format!("{}", r.fastest_execution_time),
            slowest_execution_time: format!("{}", r.slowest_execution_time),
            lowest_rsd_execution_time: fixed2(r.lowest_rsd_mean),
            lowest_rsd_percentage: fixed2(r.lowest_rsd),
            lowest_rsd_index: r.lowest_rsd_index,
            average_iteration_performance: fixed2(r.average_iteration_performance),
            fastest_iteration_performance: fixed2(r.fastest_iteration_performance),
            slowest_iteration_performance: fixed2(r.slowest_iteration_performance),
        }
    }
}

fn fixed2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Build the ordered list of records for every result in `results`, in
/// execution order (not hashmap order).
pub fn records(results: &crate::results::ResultsStore) -> Vec<ResultRecord> {
    results.in_execution_order().map(ResultRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> BenchmarkResult {
        BenchmarkResult {
            name: "Noop".to_string(),
            warmup_runs: 3,
            num_runs: 4,
            num_iterations: 20,
            lowest_rsd: 1.234,
            lowest_rsd_mean: 100.5,
            lowest_rsd_index: 2,
            warmup_execution_time: 95.0,
            mean_execution_time: 101.2,
            fastest_execution_time: 80,
            slowest_execution_time: 130,
            average_iteration_performance: 9_881_422.9,
            fastest_iteration_performance: 12_500_000.0,
            slowest_iteration_performance: 7_692_307.7,
            below_clock_resolution: false,
        }
    }

    #[test]
    fn iterations_is_num_runs_times_n() {
        let rec = ResultRecord::from(&result());
        assert_eq!(80, rec.iterations);
    }

    #[test]
    fn floats_are_rendered_with_two_decimals() {
        let rec = ResultRecord::from(&result());
        assert_eq!("1.23", rec.lowest_rsd_percentage);
        assert_eq!("100.50", rec.lowest_rsd_execution_time);
    }
}
