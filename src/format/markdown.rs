use anyhow::Context;
use std::fmt::Write as _;

use crate::format::record::{records, ResultRecord};
use crate::results::ResultsStore;

const HEADERS: &[&str] = &[
    "Name",
    "Warmup Runs",
    "Iterations",
    "Mean (ns)",
    "Fastest (ns)",
    "Slowest (ns)",
    "Lowest RSD Mean (ns)",
    "Lowest RSD (%)",
    "Lowest RSD Index",
    "Avg iters/sec",
    "Fastest iters/sec",
    "Slowest iters/sec",
];

/// Write every result in execution order as a column-aligned Markdown
/// table.
pub fn write(path: &std::path::Path, results: &ResultsStore) -> anyhow::Result<()> {
    let rendered = render(results);
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

fn render(results: &ResultsStore) -> String {
    let mut out = String::new();
    write_row(&mut out, HEADERS.iter().map(|s| s.to_string()));
    write_row(&mut out, HEADERS.iter().map(|_| "---".to_string()));
    for record in records(results) {
        write_row(&mut out, row_cells(&record).into_iter());
    }
    out
}

fn row_cells(r: &ResultRecord) -> Vec<String> {
    vec![
        r.name.clone(),
        r.warmup_runs.to_string(),
        r.iterations.to_string(),
        r.mean_execution_time.clone(),
        r.fastest_execution_time.clone(),
        r.slowest_execution_time.clone(),
        r.lowest_rsd_execution_time.clone(),
        r.lowest_rsd_percentage.clone(),
        r.lowest_rsd_index.to_string(),
        r.average_iteration_performance.clone(),
        r.fastest_iteration_performance.clone(),
        r.slowest_iteration_performance.clone(),
    ]
}

fn write_row(out: &mut String, cells: impl Iterator<Item = String>) {
    out.push('|');
    for cell in cells {
        let _ = write!(out, " {} |", cell);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::BenchmarkResult;

    #[test]
    fn emits_header_divider_and_one_row_per_result() {
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
        let rendered = render(&store);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(3, lines.len());
        assert!(lines[0].starts_with("| Name |"));
        assert!(lines[1].contains("---"));
        assert!(lines[2].contains("Noop"));
    }
}
