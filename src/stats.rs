/// Summary statistics computed from one run of `N` back-to-back
/// measurements, all in nanoseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStats {
    pub mean: f64,
    pub stddev: f64,
    /// Relative standard deviation, as a percentage: `stddev * 100 / mean`.
    pub rsd: f64,
    pub fastest: u64,
    pub slowest: u64,
}

/// Compute [`RunStats`] over a single run's durations.
///
/// Panics if `durations` is empty; every caller in this crate runs a fixed
/// `N = 20` iterations per run, so an empty slice would indicate a bug in
/// the caller, not a reachable runtime condition.
pub fn compute(durations: &[u64]) -> RunStats {
    assert!(!durations.is_empty(), "run must contain at least one measurement");

    let n = durations.len() as f64;
    let sum: f64 = durations.iter().map(|&d| d as f64).sum();
    let mean = sum / n;

    let variance: f64 =
        durations.iter().map(|&d| (d as f64 - mean).powi(2)).sum::<f64>() / n;
    let stddev = variance.sqrt();
    let rsd = if mean == 0.0 { 0.0 } else { stddev * 100.0 / mean };

    let fastest = *durations.iter().min().unwrap();
    let slowest = *durations.iter().max().unwrap();

    RunStats { mean, stddev, rsd, fastest, slowest }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_run_has_zero_rsd() {
        let s = compute(&[100; 20]);
        assert_eq!(100.0, s.mean);
        assert_eq!(0.0, s.stddev);
        assert_eq!(0.0, s.rsd);
        assert_eq!(100, s.fastest);
        assert_eq!(100, s.slowest);
    }

    #[test]
    fn fastest_and_slowest_track_extremes() {
        let s = compute(&[50, 100, 150]);
        assert_eq!(50, s.fastest);
        assert_eq!(150, s.slowest);
        assert_eq!(100.0, s.mean);
    }

    #[test]
    fn all_zero_run_does_not_divide_by_zero() {
        let s = compute(&[0, 0, 0]);
        assert_eq!(0.0, s.mean);
        assert_eq!(0.0, s.rsd);
        assert_eq!(0, s.fastest);
    }
}
