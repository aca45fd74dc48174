use super::vec::{Vec3, Vec4};
use bytemuck::{Pod, Zeroable};
use std::ops::{Mul, MulAssign};

/// A 4x4 matrix stored column-major: element `(row, col)` lives at
/// `data[col * 4 + row]`, the layout `glUniformMatrix4fv` expects with
/// `transpose = GL_FALSE`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const ZERO: Self = Self { data: [0.0; 16] };

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Builds a matrix from rows as written on paper.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut m = Self::ZERO;
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                m.set(r, c, value);
            }
        }
        m
    }

    #[inline]
    const fn index(row: usize, col: usize) -> usize {
        col * 4 + row
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[Self::index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[Self::index(row, col)] = value;
    }

    pub fn row(&self, row: usize) -> [f32; 4] {
        [
            self.get(row, 0),
            self.get(row, 1),
            self.get(row, 2),
            self.get(row, 3),
        ]
    }

    pub fn col(&self, col: usize) -> [f32; 4] {
        let start = col * 4;
        [
            self.data[start],
            self.data[start + 1],
            self.data[start + 2],
            self.data[start + 3],
        ]
    }

    /// Overwrites every component with those of `source`.
    pub fn copy_from(&mut self, source: &Mat4) {
        self.data = source.data;
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::ZERO;
        for r in 0..4 {
            for c in 0..4 {
                t.set(c, r, self.get(r, c));
            }
        }
        t
    }

    /// Identity with `t` in the last column.
    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.set(0, 3, t.x);
        m.set(1, 3, t.y);
        m.set(2, 3, t.z);
        m
    }

    /// Rotation about the X axis, counter-clockwise looking down -X.
    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.set(1, 1, cos);
        m.set(1, 2, -sin);
        m.set(2, 1, sin);
        m.set(2, 2, cos);
        m
    }

    /// Rotation about the Y axis, counter-clockwise looking down -Y.
    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.set(0, 0, cos);
        m.set(0, 2, sin);
        m.set(2, 0, -sin);
        m.set(2, 2, cos);
        m
    }

    /// Rotation about the Z axis, counter-clockwise looking down -Z.
    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.set(0, 0, cos);
        m.set(0, 1, -sin);
        m.set(1, 0, sin);
        m.set(1, 1, cos);
        m
    }

    /// Rotation by an Euler triple in radians.
    ///
    /// Equal to `rotation_z(z) * rotation_y(y) * rotation_x(x)`: a column
    /// vector is rotated about the world X axis first, then Y, then Z.
    pub fn rotation(angles: Vec3) -> Self {
        Self::rotation_z(angles.z) * Self::rotation_y(angles.y) * Self::rotation_x(angles.x)
    }

    /// Standard product `a × b`.
    pub fn multiply(a: &Mat4, b: &Mat4) -> Self {
        let mut out = Self::ZERO;
        for c in 0..4 {
            for r in 0..4 {
                out.data[Self::index(r, c)] = a.get(r, 0) * b.get(0, c)
                    + a.get(r, 1) * b.get(1, c)
                    + a.get(r, 2) * b.get(2, c)
                    + a.get(r, 3) * b.get(3, c);
            }
        }
        out
    }

    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        let [x, y, z, w] = v.to_array();
        let row = |r: usize| {
            self.get(r, 0) * x + self.get(r, 1) * y + self.get(r, 2) * z + self.get(r, 3) * w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }

    /// Applies the matrix to `p` with `w = 1`, without a perspective divide.
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        self.transform_vec4(p.extend(1.0)).truncate()
    }

    pub fn abs_diff_eq(&self, other: &Mat4, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        self.data
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::multiply(&self, &rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform_vec4(rhs)
    }
}

/// `acc *= rhs` replaces `acc` with `acc × rhs`. The product is built in
/// scratch storage before `acc` is overwritten, so `rhs` may be a copy of
/// `acc` itself.
impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        let product = Mat4::multiply(self, &rhs);
        self.copy_from(&product);
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array(&m.data)
    }
}
