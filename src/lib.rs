//! # zenbmp
//!
//! Decoder and encoder for one narrow BMP profile: uncompressed,
//! 24-bit-per-pixel, single-plane bitmaps with the classic 40-byte info
//! header. Anything outside that profile is rejected up front rather than
//! best-effort decoded.
//!
//! ## Validate First
//!
//! Every structural invariant of the file (magic, declared file size,
//! pixel data offset, bit depth, pixel array bounds, compression, plane
//! count, stride consistency) is checked before any header-derived offset
//! is trusted. After [`BmpHeader::validate`] succeeds, decoding is a
//! straight per-row copy with no further bounds concerns.
//!
//! ## Canonical Pixel Store
//!
//! A decoded [`Bitmap`] holds a fully packed buffer of BGR triples in
//! bottom-up row order (the on-disk convention, preserved rather than
//! normalized). Row padding is stripped once during decode and re-added
//! during encode, so per-pixel access never pays for it. The
//! [`Bitmap::get_pixel`]/[`Bitmap::set_pixel`] accessors present a
//! top-down (x, y) coordinate space and swap channels to (r, g, b).
//!
//! ## Non-Goals
//!
//! - Other bit depths, palettes, RLE or bitfield compression
//! - Info header versions other than the 40-byte BITMAPINFOHEADER
//! - Top-down (negative height) pixel arrays
//!
//! ## Usage
//!
//! ```
//! use zenbmp::{Bitmap, Unstoppable, decode, encode};
//!
//! let mut image = Bitmap::new(2, 2)?;
//! image.set_pixel(0, 0, 255, 0, 0);
//! image.set_pixel(1, 1, 0, 255, 0);
//!
//! let bytes = encode(&image, Unstoppable)?;
//! let back = decode(&bytes, Unstoppable)?;
//! assert_eq!(back.get_pixel(0, 0), Some((255, 0, 0)));
//! assert_eq!(back.get_pixel(1, 1), Some((0, 255, 0)));
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
mod decode;
mod encode;
mod error;
mod header;
mod limits;

#[cfg(feature = "std")]
mod storage;

// Re-exports
pub use bitmap::Bitmap;
pub use decode::{decode, decode_with_limits};
pub use encode::encode;
pub use enough::{Stop, Unstoppable};
pub use error::{BmpError, MalformedError};
pub use header::{BmpHeader, HEADER_LEN, INFO_HEADER_LEN, row_stride};
pub use limits::Limits;
