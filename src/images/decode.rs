use crate::error::GlimpseError;

/// A decoded image in straight (non-premultiplied) RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes.
    pub rgba8: Vec<u8>,
}

impl DecodedImage {
    /// A 1×1 fully transparent image.
    pub fn transparent() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba8: vec![0; 4],
        }
    }
}

/// Decode an encoded image (PNG, JPEG, WebP) for slot `index`.
pub fn decode_image(
    index: usize,
    bytes: &[u8],
) -> Result<DecodedImage, GlimpseError> {
    let dyn_img = image::load_from_memory(bytes).map_err(|e| {
        GlimpseError::ImageDecode {
            index,
            message: e.to_string(),
        }
    })?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width,
        height,
        rgba8: rgba.into_raw(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use super::*;

    /// Encode a solid-color PNG of the given size.
    pub(crate) fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn decode_png_dimensions_and_pixels() {
        let bytes = png_bytes(3, 2, [100, 50, 200, 128]);
        let decoded = decode_image(0, &bytes).unwrap();
        assert_eq!(decoded.width, 3);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.rgba8.len(), 3 * 2 * 4);
        // Straight alpha: color channels untouched
        assert_eq!(&decoded.rgba8[..4], &[100, 50, 200, 128]);
    }

    #[test]
    fn garbage_reports_its_slot() {
        let err = decode_image(4, b"not an image").unwrap_err();
        assert!(matches!(err, GlimpseError::ImageDecode { index: 4, .. }));
    }

    #[test]
    fn transparent_placeholder_is_one_pixel() {
        let img = DecodedImage::transparent();
        assert_eq!((img.width, img.height), (1, 1));
        assert_eq!(img.rgba8, vec![0, 0, 0, 0]);
    }
}
