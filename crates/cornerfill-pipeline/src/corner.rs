//! Image corners used as flood-fill seeds.

use serde::{Deserialize, Serialize};

use crate::types::{Coord, Dimensions};

/// One of the four corners of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    /// `(0, 0)`.
    TopLeft,
    /// `(width - 1, 0)`.
    TopRight,
    /// `(0, height - 1)`.
    BottomLeft,
    /// `(width - 1, height - 1)`.
    BottomRight,
}

impl Corner {
    /// All corners, in the order they are filled.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Pixel coordinate of this corner, or `None` for an empty image.
    #[must_use]
    pub const fn seed(self, dimensions: Dimensions) -> Option<Coord> {
        if dimensions.is_empty() {
            return None;
        }
        let right = dimensions.width - 1;
        let bottom = dimensions.height - 1;
        Some(match self {
            Self::TopLeft => Coord::new(0, 0),
            Self::TopRight => Coord::new(right, 0),
            Self::BottomLeft => Coord::new(0, bottom),
            Self::BottomRight => Coord::new(right, bottom),
        })
    }
}
