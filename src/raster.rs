use alloc::vec::Vec;

use crate::error::BitmapError;

/// An 8-bit RGB image in canonical layout.
///
/// `pixels` holds `width * height * 3` bytes of interleaved red, green, blue,
/// row-major, with row 0 at the top. Rows are not padded.
///
/// Fields are public so callers can build a raster directly; the encoder
/// re-checks the size invariant with [`Raster::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Wrap an existing RGB buffer, checking its length against the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        let raster = Self {
            width,
            height,
            pixels,
        };
        raster.validate()?;
        Ok(raster)
    }

    /// A raster with every pixel set to `rgb`.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, BitmapError> {
        let len = buffer_len(width, height)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| BitmapError::MemoryAllocation { bytes: len })?;
        pixels.extend(rgb.iter().copied().cycle().take(len));
        Self::new(width, height, pixels)
    }

    /// Check `width > 0`, `height > 0` and `pixels.len() == width * height * 3`.
    pub fn validate(&self) -> Result<(), BitmapError> {
        if self.width == 0 || self.height == 0 {
            return Err(BitmapError::InvalidRaster(alloc::format!(
                "dimensions must be non-zero, got {}x{}",
                self.width,
                self.height
            )));
        }
        let expected = buffer_len(self.width, self.height)?;
        if self.pixels.len() != expected {
            return Err(BitmapError::InvalidRaster(alloc::format!(
                "{}x{} RGB raster needs {expected} bytes, got {}",
                self.width,
                self.height,
                self.pixels.len()
            )));
        }
        Ok(())
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes in one unpadded row.
    pub fn stride(&self) -> usize {
        self.width as usize * 3
    }

    /// Row `y` counted from the top, or `None` when out of range.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride();
        self.pixels.get(start..start + self.stride())
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.stride().max(1))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let off = self.offset(x, y)?;
        let px = self.pixels.get(off..off + 3)?;
        Some([px[0], px[1], px[2]])
    }

    /// Set one pixel; returns `false` when `(x, y)` is outside the raster.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) -> bool {
        match self.offset(x, y) {
            Some(off) if off + 3 <= self.pixels.len() => {
                self.pixels[off..off + 3].copy_from_slice(&rgb);
                true
            }
            _ => false,
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 3)
    }

    /// View the buffer as typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB8] {
        use rgb::AsPixels as _;
        self.pixels.as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(self.as_rgb(), self.width as usize, self.height as usize)
    }

    /// Copy into an owned [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(
            self.as_rgb().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}

fn buffer_len(width: u32, height: u32) -> Result<usize, BitmapError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(3))
        .ok_or(BitmapError::DimensionsTooLarge {
            width: width.into(),
            height: height.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn new_rejects_wrong_length() {
        assert!(Raster::new(2, 2, vec![0; 12]).is_ok());
        match Raster::new(2, 2, vec![0; 11]) {
            Err(BitmapError::InvalidRaster(_)) => {}
            other => panic!("expected InvalidRaster, got {other:?}"),
        }
        assert!(matches!(
            Raster::new(0, 2, Vec::new()),
            Err(BitmapError::InvalidRaster(_))
        ));
    }

    #[test]
    fn pixel_access_is_top_down_rgb() {
        let mut raster = Raster::filled(3, 2, [1, 2, 3]).unwrap();
        assert!(raster.set_pixel(2, 1, [9, 8, 7]));
        assert!(!raster.set_pixel(3, 0, [0, 0, 0]));
        assert_eq!(raster.pixel(2, 1), Some([9, 8, 7]));
        assert_eq!(raster.pixel(0, 0), Some([1, 2, 3]));
        assert_eq!(raster.pixel(0, 2), None);
        assert_eq!(raster.row(1).unwrap(), &[1, 2, 3, 1, 2, 3, 9, 8, 7]);
        assert_eq!(raster.rows().count(), 2);
    }
}
