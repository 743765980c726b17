//! Shared types for the cornerfill pipeline.

use serde::{Deserialize, Serialize};

use crate::corner::Corner;

/// Re-export `RgbaImage` so downstream crates can hold the working
/// raster without depending on `image` directly.
pub use image::RgbaImage;

/// Re-export `ImageFormat` so callers can inspect which encoding the
/// pipeline read and wrote.
pub use image::ImageFormat;

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column (pixels from left edge).
    pub x: u32,
    /// Row (pixels from top edge).
    pub y: u32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Dimensions of an existing image.
    #[must_use]
    pub fn of(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }

    /// Returns `true` if `coord` addresses a pixel inside these bounds.
    #[must_use]
    pub const fn contains(self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Returns `true` if either side is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Configuration for the corner fill.
///
/// One threshold drives both checks: a seed is rejected when any RGB
/// channel is below it, and a neighbor is admitted only when every RGB
/// channel is strictly above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// RGB color written over the background. Alpha is always 255.
    pub fill_color: [u8; 3],

    /// Brightness threshold applied per RGB channel.
    pub brightness_threshold: u8,
}

impl FillConfig {
    /// Default fill color, `#0A0A0A`.
    pub const DEFAULT_FILL_COLOR: [u8; 3] = [10, 10, 10];

    /// Default per-channel brightness threshold.
    pub const DEFAULT_BRIGHTNESS_THRESHOLD: u8 = 200;

    /// The fill color as a fully opaque RGBA pixel.
    #[must_use]
    pub const fn fill_rgba(&self) -> image::Rgba<u8> {
        let [r, g, b] = self.fill_color;
        image::Rgba([r, g, b, u8::MAX])
    }
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            fill_color: Self::DEFAULT_FILL_COLOR,
            brightness_threshold: Self::DEFAULT_BRIGHTNESS_THRESHOLD,
        }
    }
}

/// What a single flood-fill call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedOutcome {
    /// The seed pixel was too dark to be background; the image was not
    /// touched.
    Skipped {
        /// RGBA color found at the seed.
        color: [u8; 4],
    },
    /// The region reachable from the seed was painted.
    Filled {
        /// RGBA color at the seed before painting.
        original: [u8; 4],
        /// Number of pixels painted, the seed included.
        pixels: usize,
    },
    /// The seed lies outside the image.
    OutOfBounds,
}

impl SeedOutcome {
    /// Number of pixels this call painted.
    #[must_use]
    pub const fn filled_pixels(&self) -> usize {
        match *self {
            Self::Filled { pixels, .. } => pixels,
            Self::Skipped { .. } | Self::OutOfBounds => 0,
        }
    }
}

/// Outcome of filling from one image corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerReport {
    /// Which corner was used as the seed.
    pub corner: Corner,
    /// Pixel coordinate of the seed.
    pub seed: Coord,
    /// What the fill did.
    pub outcome: SeedOutcome,
}

/// Per-corner outcomes of one [`fill_corners`](crate::fill_corners) run,
/// in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    /// One entry per corner that was processed.
    pub corners: Vec<CornerReport>,
}

impl FillReport {
    /// Total number of pixels painted across all corners.
    #[must_use]
    pub fn filled_pixels(&self) -> usize {
        self.corners.iter().map(|c| c.outcome.filled_pixels()).sum()
    }

    /// Number of corners whose seed was rejected as dark.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.corners
            .iter()
            .filter(|c| matches!(c.outcome, SeedOutcome::Skipped { .. }))
            .count()
    }
}

/// Result of running [`process`](crate::process) on encoded image bytes.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// The re-encoded image, in the same format as the input.
    pub bytes: Vec<u8>,
    /// Format the input was decoded from and the output encoded to.
    pub format: ImageFormat,
    /// Dimensions of the image in pixels.
    pub dimensions: Dimensions,
    /// What each corner fill did.
    pub report: FillReport,
}

/// Errors that can occur during pipeline processing.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Failed to encode the processed image.
    #[error("failed to encode image: {0}")]
    ImageEncode(#[source] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The input decoded fine but its format cannot be written back
    /// with an alpha channel.
    #[error("cannot write {0:?} images with an alpha channel")]
    UnsupportedFormat(ImageFormat),

    /// Fill configuration is invalid.
    #[error("invalid fill configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_constants() {
        let config = FillConfig::default();
        assert_eq!(config.fill_color, [10, 10, 10]);
        assert_eq!(config.brightness_threshold, 200);
        assert_eq!(config.fill_rgba(), image::Rgba([10, 10, 10, 255]));
    }

    #[test]
    fn config_json_fills_missing_fields_with_defaults() {
        let config: FillConfig = serde_json::from_str(r#"{"brightness_threshold": 180}"#).unwrap();
        assert_eq!(config.brightness_threshold, 180);
        assert_eq!(config.fill_color, FillConfig::DEFAULT_FILL_COLOR);
    }

    #[test]
    fn dimensions_contains_excludes_far_edges() {
        let dims = Dimensions {
            width: 3,
            height: 2,
        };
        assert!(dims.contains(Coord::new(2, 1)));
        assert!(!dims.contains(Coord::new(3, 0)));
        assert!(!dims.contains(Coord::new(0, 2)));
    }

    #[test]
    fn report_totals() {
        let report = FillReport {
            corners: vec![
                CornerReport {
                    corner: Corner::TopLeft,
                    seed: Coord::new(0, 0),
                    outcome: SeedOutcome::Filled {
                        original: [255, 255, 255, 255],
                        pixels: 7,
                    },
                },
                CornerReport {
                    corner: Corner::TopRight,
                    seed: Coord::new(3, 0),
                    outcome: SeedOutcome::Skipped {
                        color: [10, 10, 10, 255],
                    },
                },
            ],
        };
        assert_eq!(report.filled_pixels(), 7);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = FillReport {
            corners: vec![CornerReport {
                corner: Corner::BottomRight,
                seed: Coord::new(1, 1),
                outcome: SeedOutcome::OutOfBounds,
            }],
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: FillReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
