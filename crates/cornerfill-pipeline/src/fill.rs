//! Flood fill of bright background regions.
//!
//! A region is grown from a seed pixel through 4-connected neighbors
//! whose RGB channels all exceed the brightness threshold. Every
//! admitted pixel is painted with the fill color. Traversal uses an
//! explicit LIFO frontier so large regions cannot exhaust the call
//! stack.
//!
//! Neighbor brightness is read from the live image, so a fill sees
//! pixels painted earlier in the same call and by earlier calls.

use image::Rgba;

use crate::types::{Coord, Dimensions, FillConfig, RgbaImage, SeedOutcome};

/// Returns `true` if every RGB channel is strictly above `threshold`.
///
/// Alpha is ignored.
#[must_use]
pub const fn is_bright(pixel: Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

/// Returns `true` if any RGB channel is below `threshold`.
///
/// Used to reject a seed. Note this is not the negation of
/// [`is_bright`]: a channel exactly at the threshold passes the seed
/// check but fails the neighbor check.
#[must_use]
pub const fn is_dark(pixel: Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r < threshold || g < threshold || b < threshold
}

/// Flood fill the bright region containing `seed`.
///
/// Returns [`SeedOutcome::OutOfBounds`] if `seed` is outside the image
/// and [`SeedOutcome::Skipped`] if the seed is dark; in both cases the
/// image is left untouched. Otherwise every pixel reachable from the
/// seed through bright 4-connected neighbors is set to
/// [`FillConfig::fill_rgba`].
pub fn fill_from_seed(image: &mut RgbaImage, seed: Coord, config: &FillConfig) -> SeedOutcome {
    let dimensions = Dimensions::of(image);
    if !dimensions.contains(seed) {
        return SeedOutcome::OutOfBounds;
    }

    let threshold = config.brightness_threshold;
    let original = *image.get_pixel(seed.x, seed.y);
    if is_dark(original, threshold) {
        return SeedOutcome::Skipped { color: original.0 };
    }

    let fill = config.fill_rgba();
    let width = dimensions.width as usize;
    let index = |c: Coord| c.y as usize * width + c.x as usize;

    let mut visited = vec![false; width * dimensions.height as usize];
    visited[index(seed)] = true;
    let mut frontier = vec![seed];
    let mut pixels = 0;

    while let Some(current) = frontier.pop() {
        image.put_pixel(current.x, current.y, fill);
        pixels += 1;

        for neighbor in neighbors(current, dimensions) {
            let i = index(neighbor);
            if visited[i] {
                continue;
            }
            if is_bright(*image.get_pixel(neighbor.x, neighbor.y), threshold) {
                visited[i] = true;
                frontier.push(neighbor);
            }
        }
    }

    SeedOutcome::Filled {
        original: original.0,
        pixels,
    }
}

/// In-bounds axis-aligned neighbors: left, right, up, down.
fn neighbors(c: Coord, dimensions: Dimensions) -> impl Iterator<Item = Coord> {
    let left = c.x.checked_sub(1).map(|x| Coord::new(x, c.y));
    let right = c.x.checked_add(1).map(|x| Coord::new(x, c.y));
    let up = c.y.checked_sub(1).map(|y| Coord::new(c.x, y));
    let down = c.y.checked_add(1).map(|y| Coord::new(c.x, y));

    [left, right, up, down]
        .into_iter()
        .flatten()
        .filter(move |n| dimensions.contains(*n))
}
