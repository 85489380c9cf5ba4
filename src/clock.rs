use std::time::Instant;

/// A single point in time read from the engine's clock.
///
/// This wraps [`std::time::Instant`] rather than exposing it directly so
/// that the rest of the engine only ever goes through [`Timestamp::now`] and
/// [`diff`]. `Instant` is already monotonic and steady on every platform
/// Rust supports, so there's no real abstraction to build here, but naming
/// the type keeps the measurement code honest about what it's doing with
/// timestamps instead of durations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp(Instant);

impl Timestamp {
    /// Read the clock now.
    pub fn now() -> Timestamp {
        Timestamp(Instant::now())
    }
}

/// Returns the signed number of nanoseconds from `a` to `b`.
///
/// This is signed because, on some platforms, a clock can report a zero (or
/// in theory even a negative, though `Instant` guarantees non-negative for
/// well-ordered reads) delta between two back-to-back reads. Callers are
/// responsible for clamping as appropriate; this function just measures.
pub fn diff(a: Timestamp, b: Timestamp) -> i64 {
    if b.0 >= a.0 {
        i64::try_from(b.0.duration_since(a.0).as_nanos()).unwrap_or(i64::MAX)
    } else {
        // Instant is documented as monotonic on every platform we target,
        // so this branch shouldn't be reachable in practice. We still
        // handle it rather than panic, since a negative delta is exactly
        // the kind of clock degeneracy this engine is built to tolerate.
        -i64::try_from(a.0.duration_since(b.0).as_nanos()).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_is_non_negative_for_consecutive_reads() {
        let a = Timestamp::now();
        let b = Timestamp::now();
        assert!(diff(a, b) >= 0);
    }

    #[test]
    fn diff_is_zero_for_same_timestamp() {
        let a = Timestamp::now();
        assert_eq!(0, diff(a, a));
    }
}
