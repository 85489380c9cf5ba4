use anyhow::Context;

use crate::format::record::{records, ResultRecord};
use crate::results::ResultsStore;

/// Write every result in execution order as a CSV file.
///
/// The header is literal (exact column names), matching the field list
/// every writer shares; see [`ResultRecord`].
pub fn write(path: &std::path::Path, results: &ResultsStore) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    let mut writer = csv::WriterBuilder::new().from_writer(file);
    writer.write_record([
        "Name",
        "Warmup Runs",
        "Iterations",
        "Mean Execution Time (ns)",
        "Fastest Execution Time (ns)",
        "Slowest Execution Time (ns)",
        "Lowest RSD Execution Time (ns)",
        "Lowest RSD (%)",
        "Lowest RSD Index",
        "Average Iteration Performance (iters/sec)",
        "Fastest Iteration Performance (iters/sec)",
        "Slowest Iteration Performance (iters/sec)",
    ])?;
    for record in records(results) {
        write_row(&mut writer, &record)?;
    }
    writer.flush().context("failed to flush CSV writer")?;
    Ok(())
}

fn write_row<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    r: &ResultRecord,
) -> anyhow::Result<()> {
    writer.write_record([
        r.name.as_str(),
        &r.warmup_runs.to_string(),
        &r.iterations.to_string(),
        &r.mean_execution_time,
        &r.fastest_execution_time,
        &r.slowest_execution_time,
        &r.lowest_rsd_execution_time,
        &r.lowest_rsd_percentage,
        &r.lowest_rsd_index.to_string(),
        &r.average_iteration_performance,
        &r.fastest_iteration_performance,
        &r.slowest_iteration_performance,
    ])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::BenchmarkResult;

    #[test]
    fn writes_one_row_per_result_in_execution_order() {
        let mut store = ResultsStore::new();
        store.insert(BenchmarkResult {
            name: "Noop".to_string(),
            warmup_runs: 3,
            num_runs: 2,
            num_iterations: 20,
            lowest_rsd: 1.0,
            lowest_rsd_mean: 10.0,
            lowest_rsd_index: 1,
            warmup_execution_time: 10.0,
            mean_execution_time: 10.0,
            fastest_execution_time: 5,
            slowest_execution_time: 15,
            average_iteration_performance: 1e8,
            fastest_iteration_performance: 2e8,
            slowest_iteration_performance: 6e7,
            below_clock_resolution: false,
        });

        let dir = std::env::temp_dir().join("benchbar-csv-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("results.csv");
        write(&path, &store).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Name,Warmup Runs"));
        assert!(contents.contains("Noop"));
        std::fs::remove_file(&path).ok();
    }
}
