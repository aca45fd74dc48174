//! Projection and view constructors with the `gluPerspective` / `gluLookAt`
//! conventions: right-handed view space, camera looking down -Z, clip-space
//! depth in `[-1, 1]`.
//!
//! The unchecked constructors sit on the per-frame path and never fail:
//! degenerate input logs a warning and yields [`Mat4::IDENTITY`]. The
//! `try_` forms report what was wrong instead.

use super::mat4::Mat4;
use super::vec::{Vec3, EPSILON};
use crate::error::Error;

impl Mat4 {
    /// Symmetric perspective projection from a vertical field of view in
    /// degrees. A view-space point `(x, y, z, 1)` maps to clip space with
    /// `w = -z`.
    pub fn try_perspective(
        fov_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, Error> {
        if ![fov_degrees, aspect, near, far].iter().all(|v| v.is_finite()) {
            return Err(Error::projection_not_finite());
        }
        if near <= 0.0 {
            return Err(Error::near_not_positive());
        }
        if far <= near {
            return Err(Error::far_not_beyond_near());
        }
        if fov_degrees <= 0.0 || fov_degrees >= 180.0 {
            return Err(Error::fov_out_of_range());
        }
        if aspect <= 0.0 {
            return Err(Error::aspect_not_positive());
        }

        let f = 1.0 / (fov_degrees.to_radians() * 0.5).tan();
        let depth = near - far;

        let mut m = Mat4::ZERO;
        m.set(0, 0, f / aspect);
        m.set(1, 1, f);
        m.set(2, 2, (far + near) / depth);
        m.set(2, 3, 2.0 * far * near / depth);
        m.set(3, 2, -1.0);

        // extreme but valid inputs can still overflow the entries
        if !m.is_finite() {
            return Err(Error::projection_not_finite());
        }
        Ok(m)
    }

    /// [`Mat4::try_perspective`], falling back to identity.
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::try_perspective(fov_degrees, aspect, near, far).unwrap_or_else(|err| {
            log::warn!(
                "perspective(fov={fov_degrees}, aspect={aspect}, near={near}, far={far}): {err}; using identity"
            );
            Mat4::IDENTITY
        })
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// Rows 0..3 of the rotation part are `right`, `up` and `-forward`, so the
    /// third row dotted with the normalized view direction is `-1`.
    pub fn try_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self, Error> {
        let offset = target - eye;
        if !eye.is_finite() || !target.is_finite() || !up.is_finite() || !offset.is_finite() {
            return Err(Error::view_not_finite());
        }
        if offset.length() < EPSILON {
            return Err(Error::eye_at_target());
        }
        let forward = offset.try_normalize().ok_or_else(Error::eye_at_target)?;

        // parallelism is judged on unit vectors, whatever the length of `up`
        let up = up.try_normalize().ok_or_else(Error::up_parallel_to_forward)?;
        let side = forward.cross(up);
        if side.length() < EPSILON {
            return Err(Error::up_parallel_to_forward());
        }
        let right = side.try_normalize().ok_or_else(Error::up_parallel_to_forward)?;
        let true_up = right.cross(forward);
        let back = -forward;

        let m = Mat4::from_rows([
            [right.x, right.y, right.z, -right.dot(eye)],
            [true_up.x, true_up.y, true_up.z, -true_up.dot(eye)],
            [back.x, back.y, back.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        if !m.is_finite() {
            return Err(Error::view_not_finite());
        }
        Ok(m)
    }

    /// [`Mat4::try_look_at`], falling back to identity.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self::try_look_at(eye, target, up).unwrap_or_else(|err| {
            log::warn!("look_at(eye={eye:?}, target={target:?}, up={up:?}): {err}; using identity");
            Mat4::IDENTITY
        })
    }
}
