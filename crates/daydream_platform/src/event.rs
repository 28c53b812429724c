//! Event loop and frame events

use std::collections::BTreeMap;

use crate::error::Result;
use crate::input::{Button, PadState};

/// Event loop abstraction
///
/// Calls the handler once per frame, on the calling thread, until it
/// returns [`ControlFlow::Exit`] or the loop runs out of frames.
pub trait EventLoop {
    /// Run the loop; returns the number of frames handled
    fn run<F>(self, handler: F) -> Result<u64>
    where
        F: FnMut(&FrameEvent) -> ControlFlow;
}

/// Control flow after handling a frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep running
    #[default]
    Continue,
    /// Stop the loop
    Exit,
}

/// One frame tick
#[derive(Clone, Debug)]
pub struct FrameEvent {
    /// Zero-based frame index
    pub index: u64,
    /// Monotonic timestamp in nanoseconds
    pub timestamp_ns: u64,
    /// Pad state polled for this frame
    pub pad: PadState,
}

/// Headless event loop with scripted input
///
/// Frames are spaced `frame_interval_ns` apart starting at one interval.
/// A button scripted with `press_at(n, b)` is held during frame `n` only.
#[derive(Clone, Debug)]
pub struct ScriptedEventLoop {
    max_frames: u64,
    frame_interval_ns: u64,
    presses: BTreeMap<u64, Vec<Button>>,
}

impl ScriptedEventLoop {
    /// 60 Hz
    pub const DEFAULT_FRAME_INTERVAL_NS: u64 = 16_666_667;

    /// Loop that runs at most `max_frames` frames
    pub fn new(max_frames: u64) -> Self {
        Self {
            max_frames,
            frame_interval_ns: Self::DEFAULT_FRAME_INTERVAL_NS,
            presses: BTreeMap::new(),
        }
    }

    /// Set the spacing between frames
    pub fn frame_interval_ns(mut self, interval: u64) -> Self {
        self.frame_interval_ns = interval;
        self
    }

    /// Hold `button` during frame `frame`
    pub fn press_at(mut self, frame: u64, button: Button) -> Self {
        self.presses.entry(frame).or_default().push(button);
        self
    }
}

impl EventLoop for ScriptedEventLoop {
    fn run<F>(self, mut handler: F) -> Result<u64>
    where
        F: FnMut(&FrameEvent) -> ControlFlow,
    {
        let mut pad = PadState::new();
        let mut handled = 0;

        for index in 0..self.max_frames {
            let held = self.presses.get(&index).cloned().unwrap_or_default();
            pad.update(held);

            let event = FrameEvent {
                index,
                timestamp_ns: (index + 1).saturating_mul(self.frame_interval_ns),
                pad,
            };
            handled += 1;

            if handler(&event) == ControlFlow::Exit {
                tracing::debug!("event loop: exit requested at frame {}", index);
                break;
            }
        }

        Ok(handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_default() {
        assert_eq!(ControlFlow::default(), ControlFlow::Continue);
    }

    #[test]
    fn test_runs_until_budget() {
        let frames = ScriptedEventLoop::new(5)
            .run(|_| ControlFlow::Continue)
            .expect("run");
        assert_eq!(frames, 5);
    }

    #[test]
    fn test_exit_stops_loop() {
        let frames = ScriptedEventLoop::new(100)
            .press_at(3, Button::Plus)
            .run(|frame| {
                if frame.pad.is_down(Button::Plus) {
                    ControlFlow::Exit
                } else {
                    ControlFlow::Continue
                }
            })
            .expect("run");
        assert_eq!(frames, 4);
    }

    #[test]
    fn test_timestamps_and_presses() {
        let mut seen = Vec::new();
        ScriptedEventLoop::new(3)
            .frame_interval_ns(10)
            .press_at(1, Button::ZR)
            .run(|frame| {
                seen.push((frame.timestamp_ns, frame.pad.is_down(Button::ZR)));
                ControlFlow::Continue
            })
            .expect("run");

        assert_eq!(seen, vec![(10, false), (20, true), (30, false)]);
    }
}
