//! A microbenchmarking engine: register callables, let the engine
//! adaptively stabilize the iteration count for each one, and get back
//! timing statistics with a minimum-RSD best estimate.
//!
//! The typical shape of a consumer crate mirrors `criterion_group!` /
//! `criterion_main!`: build a [`Registry`], register benchmarks into it
//! with the [`bench!`] / [`bench_template!`] macros, then hand the
//! registry to [`cli::main`].

#[macro_use]
mod macros;

pub mod aggregate;
pub mod args;
pub mod clock;
pub mod cli;
pub mod dispatch;
pub mod engine;
pub mod format;
pub mod measurement;
pub mod overhead;
pub mod planner;
pub mod progress;
pub mod registry;
pub mod results;
pub mod signal;
pub mod stats;

pub use measurement::{Callable, Timers};
pub use registry::{BenchmarkDescriptor, Registry};
pub use results::ResultsStore;
