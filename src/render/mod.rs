//! Rendering-side values
//!
//! The camera used by the perspective demos and the uniform layout the MVP is
//! uploaded through. No GL calls are made here.

pub mod camera;
pub mod uniform;

pub use camera::Camera;
pub use uniform::{MvpUniform, MVP_UNIFORM};
