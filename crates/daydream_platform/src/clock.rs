//! Frame timing

/// Time of one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock's epoch
    pub seconds: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

/// Turns monotonically increasing nanosecond timestamps into [`FrameTime`]s
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    previous: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `ns` nanoseconds
    pub fn tick(&mut self, ns: u64) -> FrameTime {
        let seconds = ns as f64 / 1_000_000_000.0;
        let seconds = seconds as f32;
        let delta = seconds - self.previous;
        self.previous = seconds;
        FrameTime { seconds, delta }
    }
}
