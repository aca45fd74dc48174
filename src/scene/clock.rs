use crate::error::Error;
use std::time::Duration;

/// Fixed-rate frame timeline, standing in for the elapsed-time query of an
/// interactive loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    fps: f32,
    start_frame: u64,
}

impl FrameClock {
    pub fn new(fps: f32) -> Result<Self, Error> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(Error::invalid_argument("fps", "must be a positive number"));
        }
        Ok(Self {
            fps,
            start_frame: 0,
        })
    }

    pub fn starting_at(mut self, frame: u64) -> Self {
        self.start_frame = frame;
        self
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Elapsed time at the start of `frame`, counted from frame zero.
    ///
    /// Fails when the time does not fit in a [`Duration`], which a very low
    /// rate can reach after a single frame.
    pub fn elapsed(&self, frame: u64) -> Result<Duration, Error> {
        Duration::try_from_secs_f64(frame as f64 / self.fps as f64).map_err(|err| {
            Error::invalid_argument("frame", &format!("{frame} at {} fps: {err}", self.fps))
        })
    }

    /// `(frame, elapsed)` for `count` consecutive frames from the start frame.
    pub fn frames(&self, count: u64) -> impl Iterator<Item = Result<(u64, Duration), Error>> + '_ {
        let start = self.start_frame;
        (start..start.saturating_add(count))
            .map(move |frame| self.elapsed(frame).map(|elapsed| (frame, elapsed)))
    }
}
