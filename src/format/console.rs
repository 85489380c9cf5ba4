use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::aggregate::BenchmarkResult;

/// Print a short human-readable summary line after a benchmark completes.
///
/// This is the default "writer": it runs regardless of whether
/// `--export_results` was given, and is distinct from the progress bar,
/// which only tracks live iteration count while a benchmark is running.
pub fn write_result(result: &BenchmarkResult) {
    let mut stream = StandardStream::stdout(color_choice());
    let _ = write_result_to(&mut stream, result);
}

fn write_result_to(
    wtr: &mut dyn WriteColor,
    result: &BenchmarkResult,
) -> std::io::Result<()> {
    wtr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(wtr, " \u{2713} ")?;
    wtr.reset()?;
    writeln!(wtr, "{}", result.name)?;

    writeln!(
        wtr,
        "    {} warmup runs, {} benchmark run{}, {} iterations per run",
        result.warmup_runs,
        result.num_runs,
        if result.num_runs == 1 { "" } else { "s" },
        result.num_iterations,
    )?;
    writeln!(
        wtr,
        "    mean {} (rsd {:.2}% at run {})",
        human_duration(result.mean_execution_time),
        result.lowest_rsd,
        result.lowest_rsd_index,
    )?;
    writeln!(
        wtr,
        "    fastest {}, slowest {}{}",
        human_duration(result.fastest_execution_time as f64),
        human_duration(result.slowest_execution_time as f64),
        if result.below_clock_resolution { " (below clock resolution)" } else { "" },
    )?;
    Ok(())
}

fn color_choice() -> termcolor::ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        termcolor::ColorChoice::Auto
    } else {
        termcolor::ColorChoice::Never
    }
}

/// Render a nanosecond duration with the coarsest unit that keeps the
/// magnitude at least 1, at 2 decimal places, matching the numeric
/// formatting rule used by every result writer.
fn human_duration(ns: f64) -> String {
    let abs = ns.abs();
    if abs < 1e3 {
        format!("{:.2} ns", ns)
    } else if abs < 1e6 {
        format!("{:.2} us", ns / 1e3)
    } else if abs < 1e9 {
        format!("{:.2} ms", ns / 1e6)
    } else {
        format!("{:.2} s", ns / 1e9)
    }
}
