//! Shader interface names and the MVP uniform layout.

use crate::math::Mat4;
use bytemuck::{Pod, Zeroable};

/// Uniform slot receiving the model-view-projection matrix.
pub const MVP_UNIFORM: &str = "mvp";
/// Sampler uniform of the textured box.
pub const TEXTURE_UNIFORM: &str = "mytexture";

pub const COORD2D_ATTRIBUTE: &str = "coord2d";
pub const COORD3D_ATTRIBUTE: &str = "coord3d";
pub const COLOR_ATTRIBUTE: &str = "v_color";
pub const TEXCOORD_ATTRIBUTE: &str = "texcoord";

/// The `mvp` uniform as uploaded: 16 column-major floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MvpUniform {
    pub mvp: [f32; 16],
}

impl MvpUniform {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn as_floats(&self) -> &[f32] {
        &self.mvp
    }
}

impl From<Mat4> for MvpUniform {
    fn from(m: Mat4) -> Self {
        Self {
            mvp: m.to_cols_array(),
        }
    }
}

impl Default for MvpUniform {
    fn default() -> Self {
        Mat4::IDENTITY.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn uniform_is_64_bytes_column_major() {
        let uniform = MvpUniform::from(Mat4::translation(Vec3::new(1.0, 2.0, 3.0)));
        let bytes = uniform.as_bytes();
        assert_eq!(bytes.len(), 64);

        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(&floats[12..16], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.as_floats(), Mat4::translation(Vec3::new(1.0, 2.0, 3.0)).as_slice());
    }
}
