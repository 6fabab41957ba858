//! Error types for bitmap edits.
//!
//! [`EditError`] is returned by every operation in the crate. Region bound
//! failures carry a [`RegionError`] naming which constraint was violated,
//! in the same shape as a limit check: the offending value plus the bound.

use alloc::string::String;

#[cfg(feature = "std")]
use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T, E = EditError> = core::result::Result<T, E>;

/// Errors produced while editing a bitmap buffer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EditError {
    /// A parameter parsed fine but is outside what the operation accepts.
    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidInput {
        /// Parameter name.
        name: &'static str,
        /// Offending value, as given.
        value: String,
        /// Constraint the value failed.
        expected: &'static str,
    },

    /// A text parameter is not a base-10 integer.
    #[error("'{0}' is not an integer")]
    InvalidNumber(String),

    /// Bit depth outside {8, 16, 24, 32}.
    #[error("unsupported bit depth: {0}")]
    UnsupportedDepth(u16),

    /// Color name outside the fixed palette.
    #[error("unsupported color: {0}")]
    UnsupportedColor(String),

    /// Requested crop violates the source bounds or the minimum size.
    #[error(transparent)]
    InvalidRegion(#[from] RegionError),

    /// Extracted byte count differs from what the region dimensions imply.
    ///
    /// Only reachable when the pixel segment is shorter than the header
    /// claims; treat as an unexpected-state signal, not a user error.
    #[error("extracted {actual} pixel bytes, expected {expected}")]
    InternalConsistency {
        /// Bytes actually copied.
        actual: usize,
        /// `width * height * bytes_per_pixel` of the region.
        expected: usize,
    },

    /// Buffer too short to contain the header fields.
    #[error("buffer of {len} bytes is too short for a bitmap header ({needed} needed)")]
    TruncatedHeader {
        /// Buffer length.
        len: usize,
        /// Bytes required to read every header field.
        needed: usize,
    },

    /// Pixel segment shorter than `width * height * bytes_per_pixel`.
    #[error("pixel data holds {available} bytes, {needed} needed")]
    PixelDataTruncated {
        /// Bytes the header dimensions require.
        needed: usize,
        /// Bytes present after the pixel-data offset.
        available: usize,
    },

    /// File does not exist.
    #[cfg(feature = "std")]
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// File exists but cannot be accessed.
    #[cfg(feature = "std")]
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// Path that was accessed.
        path: PathBuf,
    },

    /// Any other I/O failure from the storage layer.
    #[cfg(feature = "std")]
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path that was accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A region bound was violated.
///
/// Returned (wrapped in [`EditError::InvalidRegion`]) by
/// [`Region::validate()`](crate::Region::validate). Checks run in the order
/// of the variants below; the first failure wins.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    /// `4 <= width <= source width` does not hold.
    #[error("width {value} must satisfy {min} <= width <= {max}")]
    Width {
        /// Requested width.
        value: i64,
        /// Minimum crop width.
        min: i64,
        /// Source image width.
        max: i64,
    },
    /// `4 <= height <= source height` does not hold.
    #[error("height {value} must satisfy {min} <= height <= {max}")]
    Height {
        /// Requested height.
        value: i64,
        /// Minimum crop height.
        min: i64,
        /// Source image height.
        max: i64,
    },
    /// Horizontal start is negative.
    #[error("start x {value} must not be negative")]
    NegativeX {
        /// Requested start x.
        value: i64,
    },
    /// `start_x + width` runs past the right edge.
    #[error("start x + width ({end}) exceeds source width {max}")]
    RightEdge {
        /// `start_x + width`.
        end: i64,
        /// Source image width.
        max: i64,
    },
    /// Vertical start is negative.
    #[error("start y {value} must not be negative")]
    NegativeY {
        /// Requested start y.
        value: i64,
    },
    /// `start_y + height` runs past the bottom edge.
    #[error("start y + height ({end}) exceeds source height {max}")]
    BottomEdge {
        /// `start_y + height`.
        end: i64,
        /// Source image height.
        max: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn region_error_display() {
        let err = RegionError::Width {
            value: 3,
            min: 4,
            max: 10,
        };
        assert_eq!(format!("{err}"), "width 3 must satisfy 4 <= width <= 10");

        let err = RegionError::RightEdge { end: 12, max: 10 };
        assert_eq!(
            format!("{err}"),
            "start x + width (12) exceeds source width 10"
        );
    }

    #[test]
    fn invalid_region_is_transparent() {
        let err = EditError::from(RegionError::NegativeY { value: -1 });
        assert_eq!(err.to_string(), "start y -1 must not be negative");
        assert!(matches!(
            err,
            EditError::InvalidRegion(RegionError::NegativeY { value: -1 })
        ));
    }

    #[test]
    fn messages_carry_offending_value() {
        assert_eq!(
            EditError::InvalidNumber("abc".into()).to_string(),
            "'abc' is not an integer"
        );
        assert_eq!(
            EditError::UnsupportedDepth(4).to_string(),
            "unsupported bit depth: 4"
        );
        assert_eq!(
            EditError::UnsupportedColor("purple".into()).to_string(),
            "unsupported color: purple"
        );
        let err = EditError::InvalidInput {
            name: "grid size",
            value: "0".into(),
            expected: ">= 1",
        };
        assert_eq!(err.to_string(), "invalid grid size: 0 (expected >= 1)");
    }

    #[test]
    fn edit_error_is_error() {
        fn assert_error<E: core::error::Error>(_: &E) {}
        assert_error(&EditError::UnsupportedDepth(1));
        assert_error(&RegionError::NegativeX { value: -2 });
    }
}
