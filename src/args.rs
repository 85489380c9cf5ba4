use std::fmt::{Debug, Display, Write};

use {
    anyhow::Context,
    lexopt::{Parser, ValueExt},
    regex::Regex,
};

/// Parses the next `p.value()` into `T`. Any error messages will include the
/// given flag name in them.
pub fn parse<T>(p: &mut Parser, flag_name: &'static str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: Display + Debug + Send + Sync + 'static,
{
    let osv = p.value().context(flag_name)?;
    let strv = match osv.to_str() {
        Some(strv) => strv,
        None => {
            let err = lexopt::Error::NonUnicodeValue(osv.into());
            return Err(anyhow::Error::from(err).context(flag_name));
        }
    };
    let parsed = match strv.parse() {
        Err(err) => return Err(anyhow::Error::msg(err)),
        Ok(parsed) => parsed,
    };
    Ok(parsed)
}

/// A single regex-based include/exclude rule applied to a benchmark's
/// full name, used by `--run_filtered` and `--list_filtered`.
///
/// Unlike the whitelist/blacklist precedence rules this crate's ancestor
/// carries for comparison commands, the filter here is a single pattern:
/// the CLI takes exactly one filter regex, matched with search (not
/// anchored) semantics.
#[derive(Clone, Debug)]
pub struct Filter {
    re: Regex,
}

impl Filter {
    pub const USAGE_RUN: Usage = Usage::new(
        "-r, --run_filtered <regex>",
        "Run only benchmarks matching this regex.",
        r#"
Run only benchmarks whose full name matches this regex.

The full name of a benchmark is '{name}' for a direct registration or
'{name}/{instance}' for a template instantiation, e.g. 'Fib/19'. Matching
uses search semantics (the regex need not match the entire name).
"#,
    );

    pub const USAGE_LIST: Usage = Usage::new(
        "--list_filtered <regex>",
        "List only benchmarks matching this regex.",
        r#"
Print the full names of benchmarks whose name matches this regex, one per
line, in declaration order, without running anything. Uses the exact same
filter predicate as -r/--run_filtered.
"#,
    );

    /// Compile a new filter from the given regex pattern.
    pub fn new(pattern: &str) -> anyhow::Result<Filter> {
        let re =
            Regex::new(pattern).context("filter regex is not valid")?;
        Ok(Filter { re })
    }

    /// Return true if and only if the given full name matches this filter.
    pub fn include(&self, full_name: &str) -> bool {
        self.re.is_match(full_name)
    }
}

impl std::str::FromStr for Filter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Filter> {
        Filter::new(s)
    }
}

/// A type for expressing the documentation of a flag.
///
/// The `Usage::short` and `Usage::long` functions take a slice of usages and
/// format them into a human readable display. It does simple word wrapping
/// and column alignment for you.
#[derive(Clone, Debug)]
pub struct Usage {
    /// The format of the flag, for example, '-w, --warmup <n>'.
    pub format: &'static str,
    /// A very short description of the flag. Should fit on one line along
    /// with the format.
    pub short: &'static str,
    /// A longer form description of the flag. May be multiple paragraphs
    /// long (but doesn't have to be).
    pub long: &'static str,
}

impl Usage {
    pub const WARMUP: Usage = Usage::new(
        "-w, --warmup <n>",
        "Number of warmup runs (default: 3).",
        r#"
The number of times to invoke the callable before planning begins.

The minimum observed duration across these warmup invocations seeds the
adaptive planner and is recorded in the result as the warmup execution
time. The value is clamped to at least 1 regardless of what is given here.
"#,
    );

    pub const LIST: Usage = Usage::new(
        "-l, --list",
        "List all registered benchmarks.",
        r#"
Print the full name of every registered benchmark, one per line, in
declaration order, without running anything.
"#,
    );

    pub const EXPORT: Usage = Usage::new(
        "-e, --export_results <fmt> <file>",
        "Write results to a file after running.",
        r#"
After all selected benchmarks have run, write their results to the given
file in the given format. The format is one of: csv, json, md, asciidoc.
"#,
    );

    pub const QUIET: Usage = Usage::new(
        "-q, --quiet",
        "Suppress the progress indicator.",
        r#"
Suppress the live progress bar. The engine runs identically; only the
terminal output changes. The per-benchmark summary line is still printed.
"#,
    );

    /// Create a new usage from the given components.
    pub const fn new(
        format: &'static str,
        short: &'static str,
        long: &'static str,
    ) -> Usage {
        Usage { format, short, long }
    }

    /// Format a two column table from the given usages, where the first
    /// column is the format and the second column is the short description.
    pub fn short(usages: &[Usage]) -> String {
        const MIN_SPACE: usize = 2;

        let mut result = String::new();
        let max_len = match usages.iter().map(|u| u.format.len()).max() {
            None => return result,
            Some(len) => len,
        };
        for usage in usages.iter() {
            let padlen = MIN_SPACE + (max_len - usage.format.len());
            let padding = " ".repeat(padlen);
            writeln!(result, "    {}{}{}", usage.format, padding, usage.short)
                .unwrap();
        }
        result
    }

    /// Print the format of each usage and its long description below the
    /// format. This also does appropriate indentation with the assumption
    /// that it is in an OPTIONS section of a bigger usage message.
    pub fn long(usages: &[Usage]) -> String {
        let wrap_opts = textwrap::Options::new(79)
            .initial_indent("        ")
            .subsequent_indent("        ");
        let mut result = String::new();
        for (i, usage) in usages.iter().enumerate() {
            if i > 0 {
                writeln!(result).unwrap();
            }
            writeln!(result, "    {}", usage.format).unwrap();
            for (i, paragraph) in usage.long.trim().split("\n\n").enumerate() {
                if i > 0 {
                    result.push('\n');
                }
                let flattened = paragraph.replace('\n', " ");
                for line in textwrap::wrap(&flattened, &wrap_opts) {
                    result.push_str(&line);
                    result.push('\n');
                }
            }
        }
        result
    }
}
