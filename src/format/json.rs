use anyhow::Context;
use serde::Serialize;

use crate::format::record::records;
use crate::results::ResultsStore;

#[derive(Serialize)]
struct Document {
    benchmarks: Vec<crate::format::record::ResultRecord>,
}

/// Write every result in execution order as a single JSON document with
/// an array under the key `benchmarks`.
pub fn write(path: &std::path::Path, results: &ResultsStore) -> anyhow::Result<()> {
    let doc = Document { benchmarks: records(results) };
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    serde_json::to_writer_pretty(file, &doc).context("failed to write JSON results")?;
    Ok(())
}
