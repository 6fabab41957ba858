//! Synthetic bitmaps for unit tests.

use alloc::vec::Vec;

const HEADER_LEN: usize = 54;

/// Minimal unpadded bitmap with every pixel set to the first
/// `bits / 8` bytes of `fill`.
pub(crate) fn bmp(width: i32, height: i32, bits: u16, fill: [u8; 4]) -> Vec<u8> {
    let bpp = (bits / 8) as usize;
    let count = width.max(0) as usize * height.max(0) as usize;
    let mut data = header(width, height, bits, count * bpp);
    for _ in 0..count {
        data.extend_from_slice(&fill[..bpp]);
    }
    data
}

/// Bitmap whose pixel bytes are `0, 1, 2, ...` wrapping at 251, so every
/// pixel of a small image is distinguishable.
pub(crate) fn patterned(width: i32, height: i32, bits: u16) -> Vec<u8> {
    let len = width as usize * height as usize * (bits / 8) as usize;
    let mut data = header(width, height, bits, len);
    data.extend((0..len).map(|i| (i % 251) as u8));
    data
}

/// Bytes of pixel `(x, y)` in a buffer built by this module.
pub(crate) fn pixel(data: &[u8], width: usize, bpp: usize, x: usize, y: usize) -> &[u8] {
    let at = HEADER_LEN + (y * width + x) * bpp;
    &data[at..at + bpp]
}

fn header(width: i32, height: i32, bits: u16, pixel_len: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(HEADER_LEN + pixel_len);
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&((HEADER_LEN + pixel_len) as u32).to_le_bytes());
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&bits.to_le_bytes());
    data.extend_from_slice(&[0; 24]);
    debug_assert_eq!(data.len(), HEADER_LEN);
    data
}
