use std::io::Write;
use std::path::PathBuf;

use lexopt::Arg;

use crate::args::{self, Filter, Usage};
use crate::dispatch;
use crate::format::ExportFormat;
use crate::registry::Registry;
use crate::signal;

const USAGE: &str = "\
A microbenchmarking barometer: runs registered callables, adaptively
stabilizes the iteration count and reports timing statistics.

USAGE:
    <binary> [OPTIONS]

OPTIONS:
";

fn usages() -> Vec<Usage> {
    vec![
        Usage::WARMUP,
        Usage::LIST,
        Filter::USAGE_LIST,
        Filter::USAGE_RUN,
        Usage::EXPORT,
        Usage::QUIET,
    ]
}

fn usage() -> String {
    let mut out = USAGE.to_string();
    out.push_str(&Usage::short(&usages()));
    out.push('\n');
    out.push_str(&Usage::long(&usages()));
    out
}

/// What the parsed command line asks the engine to do.
enum Action {
    ListAll,
    ListFiltered(Filter),
    RunAll,
    RunFiltered(Filter),
}

struct Config {
    warmup_runs: u64,
    quiet: bool,
    action: Action,
    export: Option<(ExportFormat, PathBuf)>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            warmup_runs: crate::engine::DEFAULT_WARMUP_RUNS,
            quiet: false,
            action: Action::RunAll,
            export: None,
        }
    }
}

fn parse(p: &mut lexopt::Parser) -> anyhow::Result<Config> {
    let mut config = Config::default();
    while let Some(arg) = p.next()? {
        match arg {
            Arg::Short('w') | Arg::Long("warmup") => {
                let n: u64 = args::parse(p, "-w/--warmup")?;
                config.warmup_runs = n.max(1);
            }
            Arg::Short('l') | Arg::Long("list") => {
                config.action = Action::ListAll;
            }
            Arg::Long("list_filtered") => {
                let pattern: String = args::parse(p, "--list_filtered")?;
                config.action = Action::ListFiltered(Filter::new(&pattern)?);
            }
            Arg::Short('r') | Arg::Long("run_filtered") => {
                let pattern: String = args::parse(p, "-r/--run_filtered")?;
                config.action = Action::RunFiltered(Filter::new(&pattern)?);
            }
            Arg::Short('e') | Arg::Long("export_results") => {
                let fmt: ExportFormat = args::parse(p, "-e/--export_results")?;
                let path: PathBuf = args::parse(p, "-e/--export_results")?;
                config.export = Some((fmt, path));
            }
            Arg::Short('q') | Arg::Long("quiet") => {
                config.quiet = true;
            }
            Arg::Short('h') | Arg::Long("help") => {
                anyhow::bail!("{}", usage());
            }
            arg => return Err(arg.unexpected().into()),
        }
    }
    Ok(config)
}

/// Parse `std::env::args`, drive `registry` accordingly, and return the
/// process exit code. This is the function a consumer's `main` calls
/// after registering its benchmarks.
pub fn main(registry: &mut Registry) -> i32 {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    if let Err(err) = signal::install_cursor_restore() {
        log::debug!("failed to install signal handler: {err:#}");
    }

    match run(registry, &mut lexopt::Parser::from_env()) {
        Ok(()) => 0,
        Err(err) => {
            if std::env::var("RUST_BACKTRACE").map_or(false, |v| v == "1") {
                writeln!(&mut std::io::stderr(), "{:?}", err).unwrap();
            } else {
                writeln!(&mut std::io::stderr(), "{:#}", err).unwrap();
            }
            1
        }
    }
}

fn run(registry: &mut Registry, p: &mut lexopt::Parser) -> anyhow::Result<()> {
    let config = parse(p)?;

    match &config.action {
        Action::ListAll => {
            registry.list_all();
            return Ok(());
        }
        Action::ListFiltered(filter) => {
            registry.list_filtered(filter);
            return Ok(());
        }
        _ => {}
    }

    let _cursor_guard = (!config.quiet).then(signal::CursorGuard::new);

    let store = match &config.action {
        Action::RunAll => dispatch::run_all(registry, config.warmup_runs, config.quiet),
        Action::RunFiltered(filter) => {
            dispatch::run_filtered(registry, config.warmup_runs, config.quiet, filter)
        }
        Action::ListAll | Action::ListFiltered(_) => unreachable!(),
    };

    if let Some((format, path)) = &config.export {
        crate::format::export(*format, path, &store)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_warmup_and_quiet() {
        let mut p = lexopt::Parser::from_args(["-w", "5", "-q"]);
        let config = parse(&mut p).unwrap();
        assert_eq!(5, config.warmup_runs);
        assert!(config.quiet);
    }

    #[test]
    fn warmup_is_floored_at_one() {
        let mut p = lexopt::Parser::from_args(["--warmup", "0"]);
        let config = parse(&mut p).unwrap();
        assert_eq!(1, config.warmup_runs);
    }

    #[test]
    fn unrecognized_flag_is_an_error() {
        let mut p = lexopt::Parser::from_args(["--bogus"]);
        assert!(parse(&mut p).is_err());
    }

    #[test]
    fn export_flag_captures_format_and_path() {
        let mut p = lexopt::Parser::from_args(["-e", "csv", "out.csv"]);
        let config = parse(&mut p).unwrap();
        let (fmt, path) = config.export.unwrap();
        assert_eq!(ExportFormat::Csv, fmt);
        assert_eq!(PathBuf::from("out.csv"), path);
    }
}
