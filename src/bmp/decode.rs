//! 24-bit BMP decoder: stored BGR rows into the canonical top-down RGB raster.

use alloc::vec::Vec;

use enough::Stop;

use super::header::{FileHeader, Geometry, InfoHeader};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::raster::Raster;

/// Parsed and validated headers for one file.
pub(crate) struct BmpHeader {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub geometry: Geometry,
}

/// Parse both header records and validate the variant and dimensions.
///
/// Order matters: signature, info header length, variant, then dimensions.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpHeader, BitmapError> {
    let file = FileHeader::parse(data)?;
    let info = InfoHeader::parse(data)?;
    let geometry = info.geometry()?;
    Ok(BmpHeader {
        file,
        info,
        geometry,
    })
}

/// Decode a complete BMP file held in memory.
pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster, BitmapError> {
    let BmpHeader { file, geometry, .. } = parse_bmp_header(data)?;
    if let Some(limits) = limits {
        limits.check_raster(geometry.width, geometry.height)?;
    }

    let stored = stored_pixels(data, file.pixel_data_offset as usize, &geometry)?;
    let raster_size = geometry.raster_size().ok_or_else(|| geometry.too_large())?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(raster_size)
        .map_err(|_| BitmapError::MemoryAllocation { bytes: raster_size })?;
    pixels.resize(raster_size, 0);

    stop.check()?;
    unpack_rows(stored, &geometry, &mut pixels, stop)?;

    Ok(Raster {
        width: geometry.width,
        height: geometry.height,
        pixels,
    })
}

/// Slice out exactly `row_size * height` stored bytes starting at `offset`.
fn stored_pixels<'a>(
    data: &'a [u8],
    offset: usize,
    geometry: &Geometry,
) -> Result<&'a [u8], BitmapError> {
    let needed = geometry.stored_size().ok_or_else(|| geometry.too_large())?;
    let available = data.len().saturating_sub(offset);
    data.get(offset..)
        .and_then(|rest| rest.get(..needed))
        .ok_or(BitmapError::ReadFailed {
            offset,
            needed,
            available,
        })
}

/// Copy stored rows into `out`, flipping bottom-up files and swapping BGR to RGB.
/// Padding bytes at the end of each stored row are skipped.
fn unpack_rows(
    stored: &[u8],
    geometry: &Geometry,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    let out_stride = geometry.width as usize * 3;
    let mut rows = stored.chunks_exact(geometry.row_size);

    for file_row in 0..geometry.height as usize {
        if file_row % 16 == 0 {
            stop.check()?;
        }
        let src = rows.next().ok_or(BitmapError::ReadFailed {
            offset: file_row * geometry.row_size,
            needed: geometry.row_size,
            available: rows.remainder().len(),
        })?;
        let dst_start = geometry.canonical_row(file_row) * out_stride;
        let dst = &mut out[dst_start..dst_start + out_stride];

        for (rgb, bgr) in dst.chunks_exact_mut(3).zip(src[..out_stride].chunks_exact(3)) {
            rgb[0] = bgr[2];
            rgb[1] = bgr[1];
            rgb[2] = bgr[0];
        }
    }
    Ok(())
}
