//! # dashgl-math
//!
//! Column-major 4x4 transform math for the DashGL OpenGL 2.0 tutorials.
//!
//! ## Features
//! - `Mat4` / `Vec3` value types laid out for direct `glUniformMatrix4fv` upload
//! - Translation, axis and Euler rotations, and in-place product accumulation
//! - `gluPerspective` / `gluLookAt` style projection and view matrices that fall
//!   back to identity on degenerate input
//! - Per-frame MVP composition for the transform, cube and box demos
//!
//! ## Example
//! ```rust
//! use dashgl_math::math::{Mat4, Vec3};
//!
//! let angle = 0.5_f32;
//! let mut mvp = Mat4::IDENTITY;
//! mvp *= Mat4::perspective(45.0, 640.0 / 480.0, 0.1, 10.0);
//! mvp *= Mat4::look_at(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -4.0), Vec3::Y);
//! mvp *= Mat4::translation(Vec3::new(0.0, 0.0, -4.0));
//! mvp *= Mat4::rotation_y(angle);
//!
//! // 16 column-major floats for the "mvp" uniform
//! assert_eq!(mvp.as_slice().len(), 16);
//! ```

pub mod error;
pub mod math;
pub mod render;
pub mod scene;

pub use error::Error;
pub use math::{Mat4, Transform, Vec3, Vec4};
pub use render::{Camera, MvpUniform, MVP_UNIFORM};
pub use scene::{Demo, FrameClock, Viewport};
