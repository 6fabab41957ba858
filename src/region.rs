//! Region extraction (crop).
//!
//! Copies a sub-rectangle of the pixel segment out into a new, smaller
//! image. Nothing is resampled: the output pixels are the source pixels,
//! in the same row-major order. The rows are written back unpadded, and
//! the file header is kept as-is apart from the width and height fields.

use alloc::vec::Vec;

use crate::error::{EditError, RegionError, Result};
use crate::header::{BitmapHeader, write_dimensions};
use crate::number::to_int;

/// Smallest width or height a region may have.
pub const MIN_REGION_SIDE: i64 = 4;

/// A crop rectangle in source pixel coordinates.
///
/// Constructed unchecked; [`validate()`](Self::validate) compares it against
/// a source header.
///
/// # Example
///
/// ```
/// use zenbmpedit::Region;
///
/// let region = Region::new(64, 32).at(10, 20);
/// assert_eq!(region.byte_len(3), Some(64 * 32 * 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Left column.
    pub start_x: i64,
    /// First row, in stored row order.
    pub start_y: i64,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
}

impl Region {
    /// A `width` x `height` region anchored at `(0, 0)`.
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            start_x: 0,
            start_y: 0,
            width,
            height,
        }
    }

    /// Move the region's origin.
    pub fn at(mut self, start_x: i64, start_y: i64) -> Self {
        self.start_x = start_x;
        self.start_y = start_y;
        self
    }

    /// Bytes the extracted pixels occupy at `bytes_per_pixel`.
    ///
    /// Only meaningful for a validated region. `None` on overflow.
    pub fn byte_len(&self, bytes_per_pixel: usize) -> Option<usize> {
        usize::try_from(self.width.max(0))
            .ok()?
            .checked_mul(usize::try_from(self.height.max(0)).ok()?)?
            .checked_mul(bytes_per_pixel)
    }

    /// Check the region against the source dimensions.
    ///
    /// Checks run in a fixed order (width, height, x, y) and the first
    /// failure is returned.
    pub fn validate(&self, header: &BitmapHeader) -> Result<(), RegionError> {
        check_width(self.width, header)?;
        check_height(self.height, header)?;
        check_x(self.start_x, self.width, header)?;
        check_y(self.start_y, self.height, header)
    }

    /// Validate, then crop `data` to this region.
    pub fn extract(&self, data: Vec<u8>) -> Result<Vec<u8>> {
        let header = BitmapHeader::read(&data)?;
        let bpp = header.depth()?.bytes_per_pixel();
        self.validate(&header)?;
        self.crop(data, &header, bpp)
    }

    fn crop(&self, mut data: Vec<u8>, header: &BitmapHeader, bpp: usize) -> Result<Vec<u8>> {
        let pixels = self.copy_pixels(header.pixel_segment(&data), header.columns(), bpp);

        let expected = self.byte_len(bpp).unwrap_or(usize::MAX);
        if pixels.len() != expected {
            log::error!(
                "region {self:?}: copied {} bytes, expected {expected}",
                pixels.len()
            );
            return Err(EditError::InternalConsistency {
                actual: pixels.len(),
                expected,
            });
        }

        write_dimensions(&mut data, self.width as i32, self.height as i32)?;
        data.truncate(header.pixel_offset());
        data.extend_from_slice(&pixels);
        log::debug!(
            "region: {}x{} at ({}, {}) from {}x{}, {} pixel bytes",
            self.width,
            self.height,
            self.start_x,
            self.start_y,
            header.width,
            header.height,
            pixels.len()
        );
        Ok(data)
    }

    /// Row-major copy of the region's pixels.
    ///
    /// Rows that fall (partly) past the end of `segment` contribute only
    /// the bytes that exist, so a short segment shows up as a length
    /// mismatch rather than a panic. The output never holds more than
    /// `segment.len()` bytes, whatever the header claims.
    fn copy_pixels(&self, segment: &[u8], source_width: usize, bpp: usize) -> Vec<u8> {
        let row_len = (self.width as usize).saturating_mul(bpp);
        let capacity = self.byte_len(bpp).unwrap_or(usize::MAX).min(segment.len());
        let mut out = Vec::with_capacity(capacity);
        let rows = self.start_y as usize..(self.start_y + self.height) as usize;
        for y in rows {
            let start = y
                .checked_mul(source_width)
                .and_then(|p| p.checked_add(self.start_x as usize))
                .and_then(|p| p.checked_mul(bpp))
                .unwrap_or(usize::MAX);
            // Row starts only grow; nothing further down is in the segment.
            if start >= segment.len() {
                break;
            }
            let end = start.saturating_add(row_len).min(segment.len());
            out.extend_from_slice(&segment[start..end]);
            log::trace!("region: row {y} copied {} bytes", end - start);
        }
        out
    }
}

fn check_width(width: i64, header: &BitmapHeader) -> Result<(), RegionError> {
    let max = i64::from(header.width);
    if width < MIN_REGION_SIDE || width > max {
        return Err(RegionError::Width {
            value: width,
            min: MIN_REGION_SIDE,
            max,
        });
    }
    Ok(())
}

fn check_height(height: i64, header: &BitmapHeader) -> Result<(), RegionError> {
    let max = i64::from(header.height);
    if height < MIN_REGION_SIDE || height > max {
        return Err(RegionError::Height {
            value: height,
            min: MIN_REGION_SIDE,
            max,
        });
    }
    Ok(())
}

fn check_x(start_x: i64, width: i64, header: &BitmapHeader) -> Result<(), RegionError> {
    if start_x < 0 {
        return Err(RegionError::NegativeX { value: start_x });
    }
    let end = start_x.saturating_add(width);
    let max = i64::from(header.width);
    if end > max {
        return Err(RegionError::RightEdge { end, max });
    }
    Ok(())
}

fn check_y(start_y: i64, height: i64, header: &BitmapHeader) -> Result<(), RegionError> {
    if start_y < 0 {
        return Err(RegionError::NegativeY { value: start_y });
    }
    let end = start_y.saturating_add(height);
    let max = i64::from(header.height);
    if end > max {
        return Err(RegionError::BottomEdge { end, max });
    }
    Ok(())
}

/// Crop a bitmap, taking the parameters as text.
///
/// Each parameter is coerced with [`to_int`] and checked immediately, in
/// the order width, height, x, y; the first bad value stops the call
/// before any byte is copied. On success the returned buffer holds the
/// original bytes up to the pixel-data offset (with width and height
/// rewritten) followed by the extracted pixels.
pub fn extract_region(
    data: Vec<u8>,
    new_width: &str,
    new_height: &str,
    start_x: &str,
    start_y: &str,
) -> Result<Vec<u8>> {
    let header = BitmapHeader::read(&data)?;
    let bpp = header.depth()?.bytes_per_pixel();

    let width = to_int(new_width)?;
    check_width(width, &header)?;
    let height = to_int(new_height)?;
    check_height(height, &header)?;
    let x = to_int(start_x)?;
    check_x(x, width, &header)?;
    let y = to_int(start_y)?;
    check_y(y, height, &header)?;

    Region::new(width, height).at(x, y).crop(data, &header, bpp)
}
