use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// Frame deltas of any size are added to a time debt; each due tick pays off
/// exactly one tick duration. A slow frame therefore yields several ticks
/// instead of a longer one, and the simulation speed never depends on the
/// frame rate.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SimulationClock {
    tick_nanos: i64,
    accumulator_nanos: i64,
}

impl SimulationClock {
    /// # Panics
    ///
    /// Panics when `tick_duration` is zero.
    #[must_use]
    pub fn new(tick_duration: Duration) -> Self {
        let tick_nanos = i64::try_from(tick_duration.as_nanos()).unwrap_or(i64::MAX);
        assert!(tick_nanos > 0, "tick duration must be positive");

        Self {
            tick_nanos,
            accumulator_nanos: 0,
        }
    }

    /// Adds one frame's elapsed time. Negative deltas are ignored.
    pub fn advance(&mut self, frame_delta_nanos: i64) {
        self.accumulator_nanos = self
            .accumulator_nanos
            .saturating_add(frame_delta_nanos.max(0));
    }

    /// Consumes one tick's worth of time if available.
    ///
    /// Call in a loop until it returns false to run every due tick.
    pub fn should_tick(&mut self) -> bool {
        if self.accumulator_nanos < self.tick_nanos {
            return false;
        }

        self.accumulator_nanos -= self.tick_nanos;
        true
    }

    #[must_use]
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(self.tick_nanos.unsigned_abs())
    }
}
