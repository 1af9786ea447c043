use std::fmt;
use std::time::Duration;
use std::time::Instant;

/// Units a [`Timing`] can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimingUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TimingUnit::Seconds => "s",
            TimingUnit::Milliseconds => "ms",
            TimingUnit::Microseconds => "µs",
            TimingUnit::Nanoseconds => "ns",
        }
    }
}

impl fmt::Display for TimingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An elapsed wall-clock duration with per-unit views.
///
/// The component accessors split the duration into whole seconds plus the
/// sub-second part expressed in ms, µs, or ns; the `*_raw` accessors give
/// the full duration as a float in the requested unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    elapsed: Duration,
}

impl Timing {
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whole seconds.
    pub fn seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Sub-second part in milliseconds (0..1_000).
    pub fn milliseconds(&self) -> u32 {
        self.elapsed.subsec_millis()
    }

    /// Sub-second part in microseconds (0..1_000_000).
    pub fn microseconds(&self) -> u32 {
        self.elapsed.subsec_micros()
    }

    /// Sub-second part in nanoseconds (0..1_000_000_000).
    pub fn nanoseconds(&self) -> u32 {
        self.elapsed.subsec_nanos()
    }

    pub fn seconds_raw(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn milliseconds_raw(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }

    pub fn microseconds_raw(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e6
    }

    pub fn nanoseconds_raw(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e9
    }

    /// The total in the given unit.
    pub fn in_unit(&self, unit: TimingUnit) -> f64 {
        match unit {
            TimingUnit::Seconds => self.seconds_raw(),
            TimingUnit::Milliseconds => self.milliseconds_raw(),
            TimingUnit::Microseconds => self.microseconds_raw(),
            TimingUnit::Nanoseconds => self.nanoseconds_raw(),
        }
    }

    /// Compact total, e.g. `"0.04217s"`.
    pub fn summary(&self) -> String {
        format!("{:.5}{}", self.seconds_raw(), TimingUnit::Seconds)
    }
}

impl From<Duration> for Timing {
    fn from(elapsed: Duration) -> Self {
        Self::new(elapsed)
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seconds={}; milliseconds={:02}; microseconds={:02}; nanoseconds={:02}",
            self.seconds(),
            self.milliseconds(),
            self.microseconds(),
            self.nanoseconds(),
        )
    }
}

/// Run `f` and measure how long it took.
pub fn time<T, F: FnOnce() -> T>(f: F) -> (T, Timing) {
    let start = Instant::now();
    let value = f();
    (value, Timing::new(start.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_breakdown() {
        let t = Timing::new(Duration::new(3, 123_456_789));
        assert_eq!(t.seconds(), 3);
        assert_eq!(t.milliseconds(), 123);
        assert_eq!(t.microseconds(), 123_456);
        assert_eq!(t.nanoseconds(), 123_456_789);
    }

    #[test]
    fn test_raw_totals() {
        let t = Timing::new(Duration::from_millis(1500));
        assert_eq!(t.seconds_raw(), 1.5);
        assert_eq!(t.milliseconds_raw(), 1500.0);
        assert_eq!(t.in_unit(TimingUnit::Microseconds), 1_500_000.0);
    }

    #[test]
    fn test_summary_format() {
        let t = Timing::new(Duration::from_millis(123));
        assert_eq!(t.summary(), "0.12300s");
    }

    #[test]
    fn test_display_format() {
        let t = Timing::new(Duration::new(2, 7_000_000));
        assert_eq!(
            format!("{}", t),
            "seconds=2; milliseconds=07; microseconds=7000; nanoseconds=7000000"
        );
    }

    #[test]
    fn test_unit_symbols() {
        assert_eq!(TimingUnit::Seconds.symbol(), "s");
        assert_eq!(TimingUnit::Milliseconds.symbol(), "ms");
        assert_eq!(TimingUnit::Microseconds.symbol(), "µs");
        assert_eq!(TimingUnit::Nanoseconds.symbol(), "ns");
    }

    #[test]
    fn test_time_closure() {
        let (value, timing) = time(|| (0..100).sum::<u32>());
        assert_eq!(value, 4950);
        assert!(timing.seconds_raw() >= 0.0);
    }
}
