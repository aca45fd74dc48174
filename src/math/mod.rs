//! Math utilities module
//!
//! Column-major matrix and vector types plus the transform constructors the
//! tutorial demos compose into a model-view-projection matrix.

mod mat4;
mod projection;
mod transform;
mod vec;

pub use mat4::Mat4;
pub use transform::Transform;
pub use vec::{Vec3, Vec4, EPSILON};
