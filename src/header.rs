//! Fixed-offset bitmap header fields.
//!
//! Only the four fields the edits need are read, straight from their
//! offsets in the file header and the info header that follows it. No
//! attempt is made to identify the info-header version: files written with
//! a larger info header still keep these fields at the same offsets.

use crate::error::{EditError, Result};
use crate::pixel::BitDepth;

/// Byte offset of the pixel-data offset field (u32 LE).
pub const PIXEL_OFFSET_FIELD: usize = 10;
/// Byte offset of the width field (i32 LE).
pub const WIDTH_FIELD: usize = 18;
/// Byte offset of the height field (i32 LE).
pub const HEIGHT_FIELD: usize = 22;
/// Byte offset of the bit-depth field (u16 LE).
pub const BIT_DEPTH_FIELD: usize = 28;
/// Bytes needed to read every field above.
pub const MIN_HEADER_LEN: usize = BIT_DEPTH_FIELD + 2;

/// Header values read from a bitmap buffer.
///
/// Values are passed through as stored. Negative dimensions (top-down
/// bitmaps), offsets past the end of the buffer and unsupported depths are
/// not rejected here; they surface in the operation that uses them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapHeader {
    /// Byte index where pixel data starts.
    pub pixel_data_offset: u32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels. Stored bottom-up when positive.
    pub height: i32,
    /// Raw bits per pixel.
    pub bit_depth: u16,
}

impl BitmapHeader {
    /// Read the header fields from `data`.
    ///
    /// The only failure is a buffer too short to hold the fields.
    pub fn read(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_HEADER_LEN {
            return Err(EditError::TruncatedHeader {
                len: data.len(),
                needed: MIN_HEADER_LEN,
            });
        }
        let header = Self {
            pixel_data_offset: u32::from_le_bytes(field(data, PIXEL_OFFSET_FIELD)),
            width: i32::from_le_bytes(field(data, WIDTH_FIELD)),
            height: i32::from_le_bytes(field(data, HEIGHT_FIELD)),
            bit_depth: u16::from_le_bytes(field(data, BIT_DEPTH_FIELD)),
        };
        log::debug!(
            "bitmap header: {}x{} @ {} bpp, pixels at {}",
            header.width,
            header.height,
            header.bit_depth,
            header.pixel_data_offset
        );
        Ok(header)
    }

    /// Resolve [`bit_depth`](Self::bit_depth) to a supported layout.
    pub fn depth(&self) -> Result<BitDepth> {
        BitDepth::from_bits(self.bit_depth)
    }

    /// Pixel-data offset as an index.
    pub fn pixel_offset(&self) -> usize {
        self.pixel_data_offset as usize
    }

    /// Width clamped to zero, as a walk bound.
    pub fn columns(&self) -> usize {
        self.width.max(0) as usize
    }

    /// Height clamped to zero, as a walk bound.
    pub fn rows(&self) -> usize {
        self.height.max(0) as usize
    }

    /// The bytes from the pixel-data offset to the end of `data`.
    ///
    /// Empty when the offset lies past the end.
    pub fn pixel_segment<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        data.get(self.pixel_offset()..).unwrap_or(&[])
    }

    /// Bytes a `columns() x rows()` image of `bytes_per_pixel` occupies
    /// without row padding. `None` on overflow.
    pub fn pixel_bytes(&self, bytes_per_pixel: usize) -> Option<usize> {
        self.columns()
            .checked_mul(self.rows())?
            .checked_mul(bytes_per_pixel)
    }
}

/// Overwrite the width and height fields of `data` in place.
///
/// `data` must already hold a header (see [`MIN_HEADER_LEN`]).
pub fn write_dimensions(data: &mut [u8], width: i32, height: i32) -> Result<()> {
    if data.len() < MIN_HEADER_LEN {
        return Err(EditError::TruncatedHeader {
            len: data.len(),
            needed: MIN_HEADER_LEN,
        });
    }
    data[WIDTH_FIELD..WIDTH_FIELD + 4].copy_from_slice(&width.to_le_bytes());
    data[HEIGHT_FIELD..HEIGHT_FIELD + 4].copy_from_slice(&height.to_le_bytes());
    Ok(())
}

fn field<const N: usize>(data: &[u8], at: usize) -> [u8; N] {
    let mut buf = [0u8; N];
    buf.copy_from_slice(&data[at..at + N]);
    buf
}
