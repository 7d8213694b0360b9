//! Uncompressed 24-bit BMP decoder and encoder (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc.

pub(crate) mod decode;
mod encode;
pub(crate) mod header;

pub use encode::encoded_size;
pub use header::{FILE_HEADER_SIZE, INFO_HEADER_SIZE, PIXEL_DATA_OFFSET, row_size};

use crate::error::BitmapError;
use crate::limits::Limits;
use crate::raster::Raster;
use alloc::vec::Vec;
use enough::Stop;

/// Decode BMP data into a top-down RGB raster.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster, BitmapError> {
    decode::decode_bmp(data, limits, stop)
}

/// Encode to a new BMP buffer.
pub(crate) fn encode(raster: &Raster, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(raster, stop)
}

/// Encode into a caller-supplied buffer.
pub(crate) fn encode_into(
    raster: &Raster,
    buf: &mut [u8],
    stop: &dyn Stop,
) -> Result<usize, BitmapError> {
    encode::encode_bmp_into(raster, buf, stop)
}
