use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;

use crate::ExportError;

/// Highest JPEG quality the encoder accepts.
pub const JPEG_QUALITY: u8 = 100;

/// JPEG bytes plus the pixel size they decode to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub fn encode_jpeg(bitmap: &RgbImage) -> Result<EncodedImage, ExportError> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).encode_image(bitmap)?;
    Ok(EncodedImage {
        bytes,
        width: bitmap.width(),
        height: bitmap.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use image::Rgb;
    use pretty_assertions::assert_eq;

    #[test]
    fn encoded_jpeg_decodes_to_same_size() {
        let bitmap = RgbImage::from_pixel(48, 32, Rgb([0xf8, 0xfa, 0xfc]));
        let encoded = encode_jpeg(&bitmap).unwrap();
        assert_eq!((encoded.width, encoded.height), (48, 32));

        let decoded =
            image::load_from_memory_with_format(&encoded.bytes, ImageFormat::Jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (48, 32));
    }
}
