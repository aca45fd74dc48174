use crate::error::Error;
use crate::math::{Mat4, Transform, Vec3};
use crate::render::Camera;
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Spin rate shared by every animated demo.
const DEGREES_PER_SECOND: f32 = 45.0;
/// Period of the transform demo's horizontal sway.
const SWAY_PERIOD_SECONDS: f32 = 5.0;
/// Distance the cube and box sit in front of the world origin.
const MODEL_DEPTH: f32 = -4.0;

/// Framebuffer size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or 1.0 for a zero-height viewport.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

/// The tutorial demos that update their MVP every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    /// 2D triangle swaying along X while spinning about Z.
    Transform,
    /// Vertex-colored cube spinning about Y under a perspective camera.
    Cube,
    /// Textured box tumbling about all three axes.
    Box,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::Transform, Demo::Cube, Demo::Box];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Transform => "transform",
            Demo::Cube => "cube",
            Demo::Box => "box",
        }
    }

    /// Spin angle in radians after `elapsed`.
    pub fn angle_at(elapsed: Duration) -> f32 {
        elapsed.as_secs_f32() * DEGREES_PER_SECOND * PI / 180.0
    }

    /// Placement of the demo's geometry after `elapsed`.
    pub fn transform_at(self, elapsed: Duration) -> Transform {
        let t = elapsed.as_secs_f32();
        let angle = Self::angle_at(elapsed);

        match self {
            Demo::Transform => {
                let x = (t * 2.0 * PI / SWAY_PERIOD_SECONDS).sin();
                Transform::new(Vec3::new(x, 0.0, 0.0), Vec3::new(0.0, 0.0, angle))
            }
            Demo::Cube => Transform::new(
                Vec3::new(0.0, 0.0, MODEL_DEPTH),
                Vec3::new(0.0, angle, 0.0),
            ),
            Demo::Box => Transform::new(
                Vec3::new(0.0, 0.0, MODEL_DEPTH),
                Vec3::new(angle * 0.5, angle, angle * 0.25),
            ),
        }
    }

    pub fn model_at(self, elapsed: Duration) -> Mat4 {
        self.transform_at(elapsed).to_matrix()
    }

    /// The camera this demo views through, or `None` for the 2D demo which
    /// draws straight into clip space.
    pub fn camera(self, viewport: Viewport) -> Option<Camera> {
        match self {
            Demo::Transform => None,
            Demo::Cube | Demo::Box => Some(Camera::default().with_aspect(viewport.aspect())),
        }
    }

    /// The matrix uploaded to the `mvp` uniform after `elapsed`.
    ///
    /// Accumulated left to right into one matrix starting from identity:
    /// projection, view, then the model's translation and rotation.
    pub fn mvp_at(self, elapsed: Duration, viewport: Viewport) -> Mat4 {
        let mut mvp = Mat4::IDENTITY;
        if let Some(camera) = self.camera(viewport) {
            mvp *= camera.projection_matrix();
            mvp *= camera.view_matrix();
        }
        mvp *= self.model_at(elapsed);

        log::trace!("{self} mvp at {:.3}s: {:?}", elapsed.as_secs_f32(), mvp.data);
        mvp
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::ALL
            .into_iter()
            .find(|demo| demo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::invalid_argument(
                    "demo",
                    &format!("unknown demo '{s}', expected transform, cube or box"),
                )
            })
    }
}
