use crate::scene::FrameUniforms;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer for the preview plane. Layout matches
/// `PreviewUniform` in `preview.wgsl`.
pub struct PreviewUniform {
    /// Camera view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Plane model matrix.
    pub model: [[f32; 4]; 4],
    /// Distortion offset (shader space).
    pub offset: [f32; 2],
    /// Preview opacity.
    pub alpha: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for PreviewUniform {
    fn default() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
            offset: [0.0; 2],
            alpha: 0.0,
            _pad: 0.0,
        }
    }
}

impl From<&FrameUniforms> for PreviewUniform {
    fn from(frame: &FrameUniforms) -> Self {
        Self {
            view_proj: frame.view_proj.to_cols_array_2d(),
            model: frame.model.to_cols_array_2d(),
            offset: frame.offset.to_array(),
            alpha: frame.alpha,
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec2};

    use super::*;

    #[test]
    fn size_is_a_multiple_of_sixteen() {
        assert_eq!(size_of::<PreviewUniform>(), 144);
        assert_eq!(size_of::<PreviewUniform>() % 16, 0);
    }

    #[test]
    fn copies_frame_values() {
        let frame = FrameUniforms {
            view_proj: Mat4::from_scale(glam::Vec3::splat(2.0)),
            model: Mat4::IDENTITY,
            offset: Vec2::new(0.01, -0.02),
            alpha: 0.5,
            texture: Some(1),
        };
        let uniform = PreviewUniform::from(&frame);
        assert_eq!(uniform.view_proj[0][0], 2.0);
        assert_eq!(uniform.offset, [0.01, -0.02]);
        assert_eq!(uniform.alpha, 0.5);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 144);
    }
}
