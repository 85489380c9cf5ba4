//! Result writers: one module per export format, plus the console summary
//! line every benchmark prints regardless of whether an export was
//! requested.

pub mod asciidoc;
pub mod console;
pub mod csv;
pub mod json;
pub mod markdown;
pub mod record;

/// The `-e/--export_results` format choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Markdown,
    AsciiDoc,
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<ExportFormat> {
        let fmt = match s {
            "csv" => ExportFormat::Csv,
            "json" => ExportFormat::Json,
            "md" => ExportFormat::Markdown,
            "asciidoc" => ExportFormat::AsciiDoc,
            unknown => anyhow::bail!(
                "unrecognized export format '{}', must be one of csv, json, md, asciidoc",
                unknown,
            ),
        };
        Ok(fmt)
    }
}

/// Write `results` to `path` in `format`, dispatching to the matching
/// writer module.
pub fn export(
    format: ExportFormat,
    path: &std::path::Path,
    results: &crate::results::ResultsStore,
) -> anyhow::Result<()> {
    match format {
        ExportFormat::Csv => csv::write(path, results),
        ExportFormat::Json => json::write(path, results),
        ExportFormat::Markdown => markdown::write(path, results),
        ExportFormat::AsciiDoc => asciidoc::write(path, results),
    }
}
