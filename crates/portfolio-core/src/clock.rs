use instant::Instant;

/// Time sample handed to every per-frame update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
}

/// Monotonic frame clock driven by the host rendering loop.
pub struct Clock {
    start: Instant,
    last: Instant,
    elapsed: f32,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            elapsed: 0.0,
        }
    }

    /// Sample wall time and return elapsed/delta for this frame.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = (now - self.last).as_secs_f32();
        self.last = now;
        self.elapsed = (now - self.start).as_secs_f32();
        FrameTime {
            elapsed: self.elapsed,
            delta,
        }
    }

    /// Advance by a fixed step without touching wall time. Used by hosts that
    /// drive the scene from their own timeline.
    pub fn advance(&mut self, delta: f32) -> FrameTime {
        let delta = sanitize_delta(delta);
        self.elapsed += delta;
        FrameTime {
            elapsed: self.elapsed,
            delta,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Deltas come from a monotonic source; anything else is treated as no time passing.
#[inline]
pub fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    }
}
