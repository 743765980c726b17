//! Image decoding and encoding.
//!
//! Raw bytes in, `RgbaImage` out, and back again in the same format.
//! Only formats that can carry an alpha channel losslessly are
//! accepted, since the fill writes opaque pixels into images that may
//! have transparent regions elsewhere.

use std::io::Cursor;

use crate::types::{ImageFormat, PipelineError, RgbaImage};

/// Returns `true` if `format` can be written back with RGBA pixels
/// without loss.
#[must_use]
pub const fn writes_alpha(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png | ImageFormat::Bmp | ImageFormat::WebP
    )
}

/// Decode raw image bytes into RGBA, remembering the source format.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the format is
/// unrecognized or the data is corrupt.
/// Returns [`PipelineError::UnsupportedFormat`] if the format cannot be
/// written back with an alpha channel.
pub fn decode_rgba(bytes: &[u8]) -> Result<(RgbaImage, ImageFormat), PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let format = image::guess_format(bytes)?;
    if !writes_alpha(format) {
        return Err(PipelineError::UnsupportedFormat(format));
    }

    let img = image::load_from_memory_with_format(bytes, format)?;
    Ok((img.into_rgba8(), format))
}

/// Encode an RGBA image in the given format.
///
/// # Errors
///
/// Returns [`PipelineError::UnsupportedFormat`] for formats rejected by
/// [`writes_alpha`], and [`PipelineError::ImageEncode`] if the encoder
/// fails.
pub fn encode(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, PipelineError> {
    if !writes_alpha(format) {
        return Err(PipelineError::UnsupportedFormat(format));
    }

    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .map_err(PipelineError::ImageEncode)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use image::Rgba;

    use super::*;

    fn checker(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([12, 34, 56, 0])
            }
        })
    }

    #[test]
    fn empty_input_returns_error() {
        let result = decode_rgba(&[]);
        assert!(matches!(result, Err(PipelineError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_returns_image_decode_error() {
        let result = decode_rgba(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(PipelineError::ImageDecode(_))));
    }

    #[test]
    fn png_survives_encode_and_decode() {
        let img = checker(5, 3);
        let bytes = encode(&img, ImageFormat::Png).unwrap();
        let (decoded, format) = decode_rgba(&bytes).unwrap();
        assert_eq!(format, ImageFormat::Png);
        assert_eq!(decoded.as_raw(), img.as_raw());
    }

    #[test]
    fn bmp_keeps_its_format() {
        let img = checker(4, 4);
        let bytes = encode(&img, ImageFormat::Bmp).unwrap();
        let (_, format) = decode_rgba(&bytes).unwrap();
        assert_eq!(format, ImageFormat::Bmp);
    }

    #[test]
    fn jpeg_is_rejected() {
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]));
        let mut buf = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();

        let result = decode_rgba(&buf);
        assert!(matches!(
            result,
            Err(PipelineError::UnsupportedFormat(ImageFormat::Jpeg))
        ));
    }

    #[test]
    fn encode_rejects_lossy_target() {
        let result = encode(&checker(1, 1), ImageFormat::Jpeg);
        assert!(matches!(result, Err(PipelineError::UnsupportedFormat(_))));
    }
}
