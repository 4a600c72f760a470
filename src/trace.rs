//! Decomposition instrumentation and progress logging.
//!
//! There is no process-wide logging state: the caller builds a [`Trace`]
//! and hands it to the driver, which accumulates counters into it and,
//! when verbose, prints progress lines on stderr.

/// Counters gathered while decomposing one or more curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Extension attempts, accepted and rejected. Bounded by 2n + 2 for
    /// a curve of n points.
    pub extension_attempts: usize,
    /// Extensions that recombined the slope (one-unit exterior cases).
    pub slope_updates: usize,
    /// Segments emitted.
    pub segments: usize,
}

impl Stats {
    /// Fold another run's counters into this one.
    pub fn merge(&mut self, other: Stats) {
        self.extension_attempts += other.extension_attempts;
        self.slope_updates += other.slope_updates;
        self.segments += other.segments;
    }
}

/// Explicit logging and instrumentation context for the driver.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    verbose: bool,
    pub stats: Stats,
}

impl Trace {
    /// Collect counters only, print nothing.
    pub fn silent() -> Self {
        Trace::default()
    }

    /// Collect counters and print per-segment progress on stderr.
    pub fn verbose() -> Self {
        Trace {
            verbose: true,
            stats: Stats::default(),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_adds_counters() {
        let mut a = Stats {
            extension_attempts: 10,
            slope_updates: 2,
            segments: 3,
        };
        a.merge(Stats {
            extension_attempts: 5,
            slope_updates: 1,
            segments: 1,
        });
        assert_eq!(a.extension_attempts, 15);
        assert_eq!(a.slope_updates, 3);
        assert_eq!(a.segments, 4);
    }

    #[test]
    fn trace_defaults_to_silent() {
        assert!(!Trace::silent().is_verbose());
        assert!(Trace::verbose().is_verbose());
    }
}
