//! Byte-level editing of uncompressed BMP files.
//!
//! Two operations work directly on the raw file bytes:
//!
//! - [`add_grid`] / [`GridOverlay`]: recolor every pixel on a periodic
//!   row/column grid
//! - [`extract_region`] / [`Region`]: crop a sub-rectangle into a new,
//!   smaller bitmap (no resampling)
//!
//! Both read the same four header fields ([`BitmapHeader`]), derive the
//! pixel layout from the bit depth ([`BitDepth`]) and walk pixels in stored
//! row-major order. Text parameters pass through [`to_int`] once at the
//! boundary; the typed entry points take integers directly.
//!
//! Operations take the buffer by value and return it, mutated or rebuilt.
//! Reading and writing files is left to a [`Storage`] (with the `std`
//! feature), which keeps the core usable without `std`.
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, bitfield) or palette-aware editing
//! - Depth conversion or interpolated scaling
//! - Fixing up row padding or bottom-up row order
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmpedit::{FsStorage, Storage, add_grid, extract_region};
//! use std::path::Path;
//!
//! let data = FsStorage.read_bytes(Path::new("in.bmp"))?;
//! let data = add_grid(data, "16", "red")?;
//! let data = extract_region(data, "64", "64", "0", "0")?;
//! FsStorage.write_bytes(Path::new("out.bmp"), &data)?;
//! # Ok::<(), zenbmpedit::EditError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod color;
mod error;
mod grid;
mod header;
mod number;
mod pixel;
mod region;

#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
mod storage;
#[cfg(feature = "std")]
mod workspace;

#[cfg(test)]
mod test_support;

pub use color::{GridColor, color_bytes};
pub use error::{EditError, RegionError, Result};
pub use grid::{DEFAULT_GRID_COLOR, GridOverlay, add_grid};
pub use header::{BitmapHeader, MIN_HEADER_LEN, write_dimensions};
pub use number::to_int;
pub use pixel::{BitDepth, bytes_per_pixel};
pub use region::{MIN_REGION_SIDE, Region, extract_region};

#[cfg(feature = "std")]
pub use session::Session;
#[cfg(feature = "std")]
pub use storage::{FsStorage, Storage};
#[cfg(feature = "std")]
pub use workspace::{INPUT_DIR, OUTPUT_DIR, RECORD_DIR, RECORD_FILE, Workspace};
