//! Timed caption visibility

/// Keeps a caption up for a fixed time after it is triggered
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionTimer {
    duration: f32,
    started_at: Option<f32>,
}

impl CaptionTimer {
    pub const DEFAULT_DURATION_SECS: f32 = 5.0;

    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration: duration_secs,
            started_at: None,
        }
    }

    /// Show the caption from `now`; re-triggering restarts the countdown
    pub fn trigger(&mut self, now: f32) {
        self.started_at = Some(now);
    }

    /// Whether the caption should be drawn at `now`
    ///
    /// Visible while at most `duration` seconds have passed since the last
    /// trigger. The first query past that switches the timer off.
    pub fn is_visible(&mut self, now: f32) -> bool {
        match self.started_at {
            Some(start) if now - start <= self.duration => true,
            Some(_) => {
                self.started_at = None;
                false
            }
            None => false,
        }
    }

    /// Triggered and not yet switched off
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

impl Default for CaptionTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_triggered() {
        let mut timer = CaptionTimer::default();
        assert!(!timer.is_visible(0.0));
        assert!(!timer.is_active());
    }

    #[test]
    fn test_visible_for_duration_inclusive() {
        let mut timer = CaptionTimer::new(5.0);
        timer.trigger(2.0);

        assert!(timer.is_visible(2.0));
        assert!(timer.is_visible(7.0));
        assert!(!timer.is_visible(7.5));
        assert!(!timer.is_active());

        // Stays off even if time went backwards
        assert!(!timer.is_visible(3.0));
    }

    #[test]
    fn test_retrigger_restarts() {
        let mut timer = CaptionTimer::new(1.0);
        timer.trigger(0.0);
        timer.trigger(0.75);
        assert!(timer.is_visible(1.5));
        assert!(!timer.is_visible(2.0));
    }
}
