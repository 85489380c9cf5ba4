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

/// Write every result in execution order as a column-aligned AsciiDoc
/// table.
pub fn write(path: &std::path::Path, results: &ResultsStore) -> anyhow::Result<()> {
    let rendered = render(results);
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

fn render(results: &ResultsStore) -> String {
    let mut out = String::new();
    out.push_str("[cols=\"");
    out.push_str(&vec!["1"; HEADERS.len()].join(","));
    out.push_str("\", options=\"header\"]\n|===\n");
    write_row(&mut out, HEADERS.iter().map(|s| s.to_string()));
    for record in records(results) {
        write_row(&mut out, row_cells(&record).into_iter());
    }
    out.push_str("|===\n");
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
    for cell in cells {
        let _ = writeln!(out, "|{}", cell);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::BenchmarkResult;

    #[test]
    fn wraps_table_in_asciidoc_delimiters() {
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
        assert!(rendered.starts_with("[cols="));
        assert!(rendered.trim_end().ends_with("|==="));
        assert!(rendered.contains("Noop"));
    }
}
