use clap::Parser;

use dashgl_math::{Demo, Error, FrameClock, Viewport};

#[derive(Parser, Debug)]
#[command(
    name = "mvp-trace",
    about = "Prints the per-frame MVP matrix of a DashGL tutorial demo",
    long_about = "Replays a demo's frame timeline without a GL context and prints the \
                  matrix each frame would upload to the \"mvp\" uniform"
)]
pub struct Cli {
    /// Demo to trace: transform, cube or box
    #[arg(short = 'd', long, default_value = "cube", value_parser = parse_demo)]
    pub demo: Demo,

    /// Number of frames to print
    #[arg(short = 'n', long, default_value = "1", value_name = "COUNT")]
    pub frames: u64,

    /// First frame index
    #[arg(short = 's', long, default_value = "0", value_name = "FRAME")]
    pub start_frame: u64,

    /// Frames per second of the simulated timeline
    #[arg(short = 'f', long, default_value = "60.0", value_name = "FPS")]
    pub fps: f32,

    /// Viewport width in pixels
    #[arg(long, default_value = "640", value_name = "PIXELS")]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value = "480", value_name = "PIXELS")]
    pub height: u32,

    /// Print the 16 column-major floats on one line instead of matrix rows
    #[arg(long)]
    pub raw: bool,
}

fn parse_demo(s: &str) -> Result<Demo, String> {
    s.parse().map_err(|err: Error| err.to_string())
}

impl Cli {
    /// Validates the CLI arguments
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 {
            return Err(Error::invalid_argument("width", "must be positive"));
        }

        if self.height == 0 {
            return Err(Error::invalid_argument("height", "must be positive"));
        }

        // the last frame bounds the largest elapsed time
        let clock = self.clock()?;
        let last = self.start_frame.saturating_add(self.frames.saturating_sub(1));
        clock.elapsed(last).map(|_| ())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn clock(&self) -> Result<FrameClock, Error> {
        Ok(FrameClock::new(self.fps)?.starting_at(self.start_frame))
    }
}
