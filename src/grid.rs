//! Grid overlay.
//!
//! Recolors every pixel whose column or row index is a multiple of the grid
//! size. Rows are walked in stored order, so on a bottom-up bitmap row 0 of
//! the walk is the bottom row of the displayed image.

use alloc::vec::Vec;

use crate::color::GridColor;
use crate::error::{EditError, Result};
use crate::header::BitmapHeader;
use crate::number::to_int;

/// Color used when the caller does not name one.
pub const DEFAULT_GRID_COLOR: &str = "white";

/// A validated grid: line spacing plus color.
///
/// # Example
///
/// ```
/// use zenbmpedit::{GridColor, GridOverlay};
///
/// let grid = GridOverlay::new(16)?.with_color(GridColor::Cyan);
/// assert!(grid.is_on_line(32, 5));
/// assert!(!grid.is_on_line(3, 5));
/// # Ok::<(), zenbmpedit::EditError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridOverlay {
    size: u64,
    color: GridColor,
}

impl GridOverlay {
    /// Grid with lines every `size` pixels, in the default color.
    ///
    /// Sizes below 1 fail with [`EditError::InvalidInput`].
    pub fn new(size: i64) -> Result<Self> {
        if size < 1 {
            return Err(EditError::InvalidInput {
                name: "grid size",
                value: alloc::format!("{size}"),
                expected: ">= 1",
            });
        }
        Ok(Self {
            size: size as u64,
            color: GridColor::default(),
        })
    }

    /// Set the line color.
    pub fn with_color(mut self, color: GridColor) -> Self {
        self.color = color;
        self
    }

    /// Line spacing in pixels.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Line color.
    pub fn color(&self) -> GridColor {
        self.color
    }

    /// Whether pixel `(x, y)` lies on a grid line.
    pub fn is_on_line(&self, x: usize, y: usize) -> bool {
        x as u64 % self.size == 0 || y as u64 % self.size == 0
    }

    /// Draw the grid into `data` and hand it back.
    ///
    /// Depth is resolved and the pixel segment length checked before the
    /// first write, so an error never leaves a half-drawn grid. The header
    /// is not touched. Only the first three bytes of a pixel are written;
    /// on 32-bit images the fourth byte keeps its value. On 8- and 16-bit
    /// images the three color bytes run into the following pixel(s),
    /// clipped at the end of the buffer.
    pub fn apply(&self, data: Vec<u8>) -> Result<Vec<u8>> {
        let header = BitmapHeader::read(&data)?;
        self.draw(data, &header)
    }

    fn draw(&self, mut data: Vec<u8>, header: &BitmapHeader) -> Result<Vec<u8>> {
        let bpp = header.depth()?.bytes_per_pixel();

        let offset = header.pixel_offset();
        let available = data.len().saturating_sub(offset);
        let needed = header.pixel_bytes(bpp).ok_or(EditError::PixelDataTruncated {
            needed: usize::MAX,
            available,
        })?;
        if available < needed {
            return Err(EditError::PixelDataTruncated { needed, available });
        }
        if needed == 0 {
            log::debug!("grid: empty image, nothing to draw");
            return Ok(data);
        }

        let color = self.color.bgr();
        let width = header.columns();
        let pixels = &mut data[offset..];
        let mut recolored = 0usize;
        for y in 0..header.rows() {
            let row_start = y * width;
            for x in 0..width {
                if !self.is_on_line(x, y) {
                    continue;
                }
                let at = (row_start + x) * bpp;
                let end = (at + color.len()).min(pixels.len());
                pixels[at..end].copy_from_slice(&color[..end - at]);
                recolored += 1;
            }
            log::trace!("grid: row {y} done");
        }

        log::debug!(
            "grid: {recolored} pixels set to {} every {} px",
            self.color,
            self.size
        );
        Ok(data)
    }
}

/// Overlay a grid on a bitmap, taking the parameters as text.
///
/// `grid_size` goes through [`to_int`] and must be at least 1;
/// `grid_color` must be one of the [`GridColor`] names (pass
/// [`DEFAULT_GRID_COLOR`] for white). Returns the buffer with its pixel
/// segment recolored in place.
pub fn add_grid(data: Vec<u8>, grid_size: &str, grid_color: &str) -> Result<Vec<u8>> {
    let header = BitmapHeader::read(&data)?;
    let grid = GridOverlay::new(to_int(grid_size)?)?;
    let color = GridColor::from_name(grid_color)?;
    grid.with_color(color).draw(data, &header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bmp, patterned, pixel};

    const WHITE: [u8; 3] = [0xFF; 3];
    const BLACK: [u8; 3] = [0x00; 3];

    #[test]
    fn eight_by_eight_black_grid_of_four() {
        let data = bmp(8, 8, 24, [0; 4]);
        let out = add_grid(data, "4", "white").unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let expected = if x == 0 || x == 4 || y == 0 || y == 4 {
                    WHITE
                } else {
                    BLACK
                };
                assert_eq!(pixel(&out, 8, 3, x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn size_one_recolors_everything() {
        let data = patterned(5, 3, 24);
        let out = add_grid(data, "1", "red").unwrap();
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(pixel(&out, 5, 3, x, y), [0x00, 0x00, 0xFF]);
            }
        }
    }

    #[test]
    fn off_line_pixels_unchanged() {
        let k = 3;
        let source = patterned(10, 7, 24);
        let out = add_grid(source.clone(), "3", "green").unwrap();
        for y in 0..7 {
            for x in 0..10 {
                let before = pixel(&source, 10, 3, x, y);
                let after = pixel(&out, 10, 3, x, y);
                if x % k != 0 && y % k != 0 {
                    assert_eq!(after, before, "pixel ({x}, {y}) should be untouched");
                } else {
                    assert_eq!(after, [0x00, 0xFF, 0x00], "pixel ({x}, {y}) should be green");
                }
            }
        }
    }

    #[test]
    fn alpha_byte_preserved() {
        let data = bmp(4, 4, 32, [1, 2, 3, 0x80]);
        let out = add_grid(data, "2", "magenta").unwrap();
        assert_eq!(pixel(&out, 4, 4, 0, 0), [0xFF, 0x00, 0xFF, 0x80]);
        assert_eq!(pixel(&out, 4, 4, 1, 1), [1, 2, 3, 0x80]);
        assert_eq!(pixel(&out, 4, 4, 2, 3), [0xFF, 0x00, 0xFF, 0x80]);
    }

    #[test]
    fn header_and_length_unchanged() {
        let source = bmp(6, 6, 24, [9; 4]);
        let out = add_grid(source.clone(), "2", DEFAULT_GRID_COLOR).unwrap();
        assert_eq!(out.len(), source.len());
        assert_eq!(out[..54], source[..54]);
    }

    #[test]
    fn eight_bit_writes_spill_and_clip() {
        let data = bmp(3, 3, 8, [0; 4]);
        let out = add_grid(data, "2", "blue").unwrap();
        assert_eq!(out.len(), 54 + 9);
        assert_eq!(
            out[54..],
            [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn zero_size_is_invalid_input() {
        let err = add_grid(bmp(4, 4, 24, [0; 4]), "0", "white").unwrap_err();
        assert!(matches!(err, EditError::InvalidInput { name: "grid size", .. }));
    }

    #[test]
    fn size_checked_before_color() {
        let err = add_grid(bmp(4, 4, 24, [0; 4]), "0", "purple").unwrap_err();
        assert!(matches!(err, EditError::InvalidInput { name: "grid size", .. }));
        let err = add_grid(bmp(4, 4, 24, [0; 4]), "2", "purple").unwrap_err();
        assert!(matches!(err, EditError::UnsupportedColor(ref c) if c == "purple"));
    }

    #[test]
    fn negative_size_is_invalid_input() {
        let err = add_grid(bmp(4, 4, 24, [0; 4]), "-2", "white").unwrap_err();
        assert!(matches!(err, EditError::InvalidInput { .. }));
    }

    #[test]
    fn non_numeric_size() {
        let err = add_grid(bmp(4, 4, 24, [0; 4]), "big", "white").unwrap_err();
        assert!(matches!(err, EditError::InvalidNumber(_)));
    }

    #[test]
    fn unknown_color() {
        let err = add_grid(bmp(4, 4, 24, [0; 4]), "2", "orange").unwrap_err();
        assert!(matches!(err, EditError::UnsupportedColor(_)));
    }

    #[test]
    fn unsupported_depth() {
        let mut data = bmp(4, 4, 24, [0; 4]);
        data[28] = 12;
        let err = add_grid(data, "2", "white").unwrap_err();
        assert!(matches!(err, EditError::UnsupportedDepth(12)));
    }

    #[test]
    fn truncated_pixel_data() {
        let mut data = bmp(4, 4, 24, [0; 4]);
        data.truncate(data.len() - 1);
        let err = add_grid(data, "2", "white").unwrap_err();
        assert!(matches!(
            err,
            EditError::PixelDataTruncated {
                needed: 48,
                available: 47
            }
        ));
    }

    #[test]
    fn top_down_image_left_alone() {
        let mut data = bmp(4, 4, 24, [7; 4]);
        data[22..26].copy_from_slice(&(-4i32).to_le_bytes());
        let before = data.clone();
        let out = add_grid(data, "2", "black").unwrap();
        assert_eq!(out, before);
    }

    #[test]
    fn typed_overlay() {
        let grid = GridOverlay::new(5).unwrap().with_color(GridColor::Yellow);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.color(), GridColor::Yellow);
        assert!(grid.is_on_line(0, 3));
        assert!(grid.is_on_line(3, 10));
        assert!(!grid.is_on_line(4, 4));

        let out = grid.apply(bmp(6, 6, 24, [0; 4])).unwrap();
        assert_eq!(pixel(&out, 6, 3, 5, 2), [0x00, 0xFF, 0xFF]);
        assert_eq!(pixel(&out, 6, 3, 4, 4), BLACK);
    }
}
