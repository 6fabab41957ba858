//! Named grid colors.
//!
//! The palette is closed: eight names, each a fixed triple stored in
//! bitmap byte order (blue, green, red).

use alloc::string::ToString;

use crate::error::{EditError, Result};

/// A grid line color.
///
/// Variant docs give the stored bytes, blue first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GridColor {
    /// `FF FF FF`.
    #[default]
    White,
    /// `00 00 00`.
    Black,
    /// `00 00 FF`.
    Red,
    /// `00 FF 00`.
    Green,
    /// `FF 00 00`.
    Blue,
    /// `00 FF FF`.
    Yellow,
    /// `FF 00 FF`.
    Magenta,
    /// `FF FF 00`.
    Cyan,
}

impl GridColor {
    /// Every color, in menu order.
    pub const ALL: [GridColor; 8] = [
        Self::White,
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Magenta,
        Self::Cyan,
    ];

    /// Look up a color by its lowercase name. Matching is exact.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "yellow" => Ok(Self::Yellow),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            other => Err(EditError::UnsupportedColor(other.to_string())),
        }
    }

    /// Lowercase name, as accepted by [`from_name`](Self::from_name).
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
        }
    }

    /// Byte triple in B,G,R order.
    pub const fn bgr(self) -> [u8; 3] {
        match self {
            Self::White => [0xFF, 0xFF, 0xFF],
            Self::Black => [0x00, 0x00, 0x00],
            Self::Red => [0x00, 0x00, 0xFF],
            Self::Green => [0x00, 0xFF, 0x00],
            Self::Blue => [0xFF, 0x00, 0x00],
            Self::Yellow => [0x00, 0xFF, 0xFF],
            Self::Magenta => [0xFF, 0x00, 0xFF],
            Self::Cyan => [0xFF, 0xFF, 0x00],
        }
    }
}

impl core::str::FromStr for GridColor {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl core::fmt::Display for GridColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// B,G,R bytes for a color name.
///
/// Fails with [`EditError::UnsupportedColor`] for anything but the eight
/// lowercase names.
pub fn color_bytes(name: &str) -> Result<[u8; 3]> {
    GridColor::from_name(name).map(GridColor::bgr)
}
