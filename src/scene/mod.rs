//! Per-frame MVP composition for the animated tutorial demos.

mod clock;
mod demo;

pub use clock::FrameClock;
pub use demo::{Demo, Viewport};
