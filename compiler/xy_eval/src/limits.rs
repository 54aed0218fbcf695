//! Cooperative cancellation limits.
//!
//! Limits are sampled before every step of a `run()`. The first one that
//! reports it has been reached aborts the run with `LimitReached`. Nothing
//! preempts a primitive already executing.

use std::fmt;
use std::time::{Duration, Instant};

/// A cancellation policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Limit {
    /// At most this many steps per run. `Steps(0)` stops before the first.
    Steps(u64),
    /// Wall-clock budget per run.
    Time(Duration),
}

impl Limit {
    /// Whether this limit has fired for the run tracked by `clock`.
    pub(crate) fn reached(&self, clock: &RunClock) -> bool {
        match *self {
            Limit::Steps(max) => clock.steps >= max,
            Limit::Time(budget) => clock.started.elapsed() >= budget,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Steps(max) => write!(f, "{max} steps"),
            Limit::Time(budget) => write!(f, "{}ms", budget.as_millis()),
        }
    }
}

/// Per-run progress sampled by the limits.
pub(crate) struct RunClock {
    pub(crate) steps: u64,
    started: Instant,
}

impl RunClock {
    pub(crate) fn start() -> Self {
        RunClock {
            steps: 0,
            started: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_limit_counts_completed_steps() {
        let mut clock = RunClock::start();
        let limit = Limit::Steps(2);
        assert!(!limit.reached(&clock));
        clock.steps = 2;
        assert!(limit.reached(&clock));
    }

    #[test]
    fn zero_steps_fires_immediately() {
        assert!(Limit::Steps(0).reached(&RunClock::start()));
    }

    #[test]
    fn zero_time_fires_immediately() {
        assert!(Limit::Time(Duration::ZERO).reached(&RunClock::start()));
        assert!(!Limit::Time(Duration::from_secs(3600)).reached(&RunClock::start()));
    }

    #[test]
    fn display() {
        assert_eq!(Limit::Steps(10).to_string(), "10 steps");
        assert_eq!(Limit::Time(Duration::from_millis(250)).to_string(), "250ms");
    }
}
