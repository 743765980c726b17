//! cornerfill-pipeline: Pure corner background fill (sans-IO).
//!
//! Replaces a white-ish background touching any image corner with a
//! solid fill color:
//! decode -> flood fill from each corner -> encode.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and images and returns structured reports. Filesystem
//! access and logging live in the `cornerfill` binary.

pub mod codec;
pub mod color;
pub mod corner;
pub mod fill;
pub mod types;

pub use color::parse_hex_color;
pub use corner::Corner;
pub use fill::fill_from_seed;
pub use types::{
    Coord, CornerReport, Dimensions, FillConfig, FillReport, ImageFormat, PipelineError,
    ProcessResult, RgbaImage, SeedOutcome,
};

/// Flood fill from each of the four corners, in [`Corner::ALL`] order.
///
/// Fills run sequentially on the same image, so a later corner sees the
/// pixels painted by earlier ones. With a dark fill color, a corner
/// inside a region already painted is reported as skipped. A zero-sized
/// image produces an empty report.
pub fn fill_corners(image: &mut RgbaImage, config: &FillConfig) -> FillReport {
    let dimensions = Dimensions::of(image);
    let corners = Corner::ALL
        .into_iter()
        .filter_map(|corner| {
            let seed = corner.seed(dimensions)?;
            Some(CornerReport {
                corner,
                seed,
                outcome: fill_from_seed(image, seed, config),
            })
        })
        .collect();
    FillReport { corners }
}

/// Run the full pipeline on encoded image bytes.
///
/// # Pipeline steps
///
/// 1. Decode image (PNG, BMP, WebP) and convert to RGBA
/// 2. Flood fill from each corner
/// 3. Encode back to the source format
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is unrecognized.
/// Returns [`PipelineError::UnsupportedFormat`] if the format cannot hold alpha.
/// Returns [`PipelineError::ImageEncode`] if re-encoding fails.
pub fn process(image_bytes: &[u8], config: &FillConfig) -> Result<ProcessResult, PipelineError> {
    let (mut image, format) = codec::decode_rgba(image_bytes)?;
    let dimensions = Dimensions::of(&image);

    let report = fill_corners(&mut image, config);

    let bytes = codec::encode(&image, format)?;
    Ok(ProcessResult {
        bytes,
        format,
        dimensions,
        report,
    })
}
