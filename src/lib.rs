//! # zenbmp24
//!
//! Decoder and encoder for uncompressed 24-bit Windows BMP files.
//!
//! Every decoded image comes back as a [`Raster`]: `width * height * 3` bytes
//! of R, G, B, row 0 at the top, no row padding. That holds whatever the file
//! looked like on disk (BGR order, rows padded to 4 bytes, bottom-up or
//! top-down). The encoder takes the same layout and always writes a standard
//! bottom-up file with a 54-byte header.
//!
//! ## Supported
//!
//! - `BITMAPINFOHEADER` files with 24 bits per pixel and `BI_RGB` (no compression)
//! - Both row orders (positive and negative height)
//!
//! ## Non-Goals
//!
//! - RLE4/RLE8 and bitfield compression
//! - Palettes and any bit depth other than 24
//! - Alpha channels
//! - Image processing (resize, blend, filter)
//!
//! ## Usage
//!
//! ```
//! use zenbmp24::{Raster, decode_bmp, encode_bmp};
//!
//! let raster = Raster::new(2, 1, vec![255, 0, 0, 0, 0, 255])?;
//! let bytes = encode_bmp(&raster)?;
//! assert_eq!(&bytes[..2], b"BM");
//! assert_eq!(bytes.len(), 54 + 8);
//!
//! let decoded = decode_bmp(&bytes)?;
//! assert_eq!(decoded, raster);
//! # Ok::<(), zenbmp24::BitmapError>(())
//! ```
//!
//! With the `std` feature (on by default), [`fs::load_bmp`] and
//! [`fs::save_bmp`] read and write files directly.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod raster;
mod request;

pub mod bmp;

#[cfg(feature = "std")]
pub mod fs;

use alloc::vec::Vec;

// Re-exports
pub use bmp::encoded_size;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::BitmapError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use raster::Raster;
pub use request::{DecodeRequest, EncodeRequest};

/// Decode a complete 24-bit BMP file held in memory.
pub fn decode_bmp(data: &[u8]) -> Result<Raster, BitmapError> {
    DecodeRequest::new(data).decode(Unstoppable)
}

/// Decode with cooperative cancellation.
pub fn decode_bmp_with_stop(data: &[u8], stop: impl Stop) -> Result<Raster, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode a raster to a new 24-bit BMP buffer.
pub fn encode_bmp(raster: &Raster) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::new(raster).encode(Unstoppable)
}

/// Encode into `buf`, returning the number of bytes written.
///
/// `buf` must hold at least [`encoded_size`] bytes; anything past that is
/// left untouched.
pub fn encode_bmp_into(raster: &Raster, buf: &mut [u8]) -> Result<usize, BitmapError> {
    EncodeRequest::new(raster).encode_into(buf, Unstoppable)
}
