//! Pixel layout derived from the header bit depth.

use crate::error::{EditError, Result};

/// Supported uncompressed bit depths.
///
/// Only the byte-aligned depths are accepted. Palette-indexed 1/4-bit
/// images and anything else are rejected rather than guessed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum BitDepth {
    /// 1 byte per pixel.
    Bits8 = 8,
    /// 2 bytes per pixel.
    Bits16 = 16,
    /// 3 bytes per pixel, B,G,R.
    Bits24 = 24,
    /// 4 bytes per pixel, B,G,R plus an alpha/padding byte.
    Bits32 = 32,
}

impl BitDepth {
    /// Every supported depth, ascending.
    pub const ALL: [BitDepth; 4] = [Self::Bits8, Self::Bits16, Self::Bits24, Self::Bits32];

    /// Resolve a raw header value.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(Self::Bits8),
            16 => Ok(Self::Bits16),
            24 => Ok(Self::Bits24),
            32 => Ok(Self::Bits32),
            other => Err(EditError::UnsupportedDepth(other)),
        }
    }

    /// Raw header value.
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Bytes occupied by one pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Bits8 => 1,
            Self::Bits16 => 2,
            Self::Bits24 => 3,
            Self::Bits32 => 4,
        }
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = EditError;

    fn try_from(bits: u16) -> Result<Self> {
        Self::from_bits(bits)
    }
}

impl core::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Bytes per pixel for a raw header bit depth.
///
/// Fails with [`EditError::UnsupportedDepth`] for anything outside
/// {8, 16, 24, 32}.
pub fn bytes_per_pixel(bit_depth: u16) -> Result<usize> {
    BitDepth::from_bits(bit_depth).map(BitDepth::bytes_per_pixel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use test_case::test_case;

    #[test_case(8, 1)]
    #[test_case(16, 2)]
    #[test_case(24, 3)]
    #[test_case(32, 4)]
    fn supported_depths(bits: u16, bpp: usize) {
        assert_eq!(bytes_per_pixel(bits).unwrap(), bpp);
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(4)]
    #[test_case(15)]
    #[test_case(48)]
    #[test_case(64)]
    #[test_case(u16::MAX)]
    fn unsupported_depth_names_value(bits: u16) {
        assert!(matches!(
            bytes_per_pixel(bits),
            Err(EditError::UnsupportedDepth(got)) if got == bits
        ));
    }

    #[test]
    fn bits_roundtrip() {
        for depth in BitDepth::ALL {
            assert_eq!(BitDepth::try_from(depth.bits()).unwrap(), depth);
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BitDepth::Bits24), "24-bit");
    }
}
