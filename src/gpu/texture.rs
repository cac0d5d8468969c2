//! GPU textures: the multisampled color target and uploaded images.

use crate::error::GlimpseError;
use crate::images::DecodedImage;

/// Multisampled color target resolved into the swapchain each frame.
pub struct RenderTarget {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl RenderTarget {
    /// Create a color target with the given size, format and sample count.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        (width, height): (u32, u32),
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Preview MSAA Target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// An image uploaded as an sRGB texture.
pub struct ImageTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

/// Reject images the device cannot hold in a single 2D texture.
///
/// # Errors
///
/// Returns [`GlimpseError::ImageDecode`] for slot `index` when either side
/// is zero or larger than `max_dimension`.
pub fn check_texture_size(
    index: usize,
    image: &DecodedImage,
    max_dimension: u32,
) -> Result<(), GlimpseError> {
    let (width, height) = (image.width, image.height);
    if width == 0 || height == 0 {
        return Err(GlimpseError::ImageDecode {
            index,
            message: format!("image is empty ({width}x{height})"),
        });
    }
    if width > max_dimension || height > max_dimension {
        return Err(GlimpseError::ImageDecode {
            index,
            message: format!(
                "{width}x{height} exceeds the device texture limit of \
                 {max_dimension}"
            ),
        });
    }
    Ok(())
}

impl ImageTexture {
    /// Upload `image` into a new texture.
    #[must_use]
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DecodedImage,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.rgba8,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.width * 4),
                rows_per_image: Some(image.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32) -> DecodedImage {
        DecodedImage {
            width,
            height,
            rgba8: vec![0; (width * height * 4) as usize],
        }
    }

    #[test]
    fn images_within_the_limit_are_accepted() {
        assert!(check_texture_size(0, &image(8, 4), 8).is_ok());
    }

    #[test]
    fn oversized_sides_are_rejected_for_their_slot() {
        for oversized in [image(9, 4), image(4, 9)] {
            let err = check_texture_size(3, &oversized, 8).unwrap_err();
            assert!(matches!(err, GlimpseError::ImageDecode { index: 3, .. }));
            assert!(err.to_string().contains("limit of 8"));
        }
    }

    #[test]
    fn empty_images_are_rejected() {
        assert!(matches!(
            check_texture_size(1, &image(0, 4), 8),
            Err(GlimpseError::ImageDecode { index: 1, .. })
        ));
    }
}
