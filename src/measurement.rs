use crate::clock::{diff, Timestamp};

/// The timer handle passed by mutable reference to every callable.
///
/// This is the Rust rendition of the C++ original's pair of out-parameters
/// (a `time_point&` for start and an `optional<time_point>&` for teardown).
/// A callable that wants to exclude its own setup work calls
/// [`Timers::mark_start`] once setup is done; one that wants to exclude
/// teardown calls [`Timers::mark_teardown`] before teardown begins. Neither
/// call is required — by default the engine measures from just before the
/// callable is invoked to just after it returns.
#[derive(Debug)]
pub struct Timers {
    start: Timestamp,
    teardown: Option<Timestamp>,
}

impl Timers {
    fn new(engine_start: Timestamp) -> Timers {
        Timers { start: engine_start, teardown: None }
    }

    /// Override the measured interval's start, excluding setup performed
    /// before this call from the timing.
    pub fn mark_start(&mut self) {
        self.start = Timestamp::now();
    }

    /// Override the measured interval's end, excluding teardown performed
    /// after this call from the timing.
    pub fn mark_teardown(&mut self) {
        self.teardown = Some(Timestamp::now());
    }
}

/// The type-erased benchmark callable.
///
/// Unlike the C++ original's `void*` parameter pointer ferried alongside a
/// raw function pointer, this is just a boxed `FnMut`. Parameterized
/// benchmarks capture their bound arguments in the closure rather than
/// reading them back out of an opaque pointer; see `registry.rs`.
pub type Callable = Box<dyn FnMut(&mut Timers) + Send>;

/// Run `f` once and return the compensated duration of the measured
/// interval, in nanoseconds.
///
/// `clock_overhead` is subtracted from the raw observed duration. Doing so
/// can push a very fast, very noisy sample slightly negative, so the result
/// is folded back to its absolute value rather than clamped to zero, which
/// would bias every such sample toward zero instead of letting the noise
/// average out.
pub fn measure_once(f: &mut Callable, clock_overhead: i64) -> u64 {
    let t0 = Timestamp::now();
    let mut timers = Timers::new(t0);
    f(&mut timers);
    let t1 = Timestamp::now();
    let end = timers.teardown.unwrap_or(t1);
    let raw = diff(timers.start, end);
    (raw - clock_overhead).unsigned_abs()
}
