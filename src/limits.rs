use crate::error::BitmapError;

/// Caps applied to a BMP header before the raster buffer is allocated.
///
/// All fields default to `None` (no limit). Build with struct update syntax
/// or the `with_*` helpers:
///
/// ```
/// use zenbmp24::Limits;
///
/// let limits = Limits::default().with_max_pixels(4096 * 4096);
/// assert_eq!(limits.max_pixels, Some(4096 * 4096));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded RGB buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub fn with_max_width(mut self, width: u32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_max_height(mut self, height: u32) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn with_max_pixels(mut self, pixels: u64) -> Self {
        self.max_pixels = Some(pixels);
        self
    }

    pub fn with_max_memory_bytes(mut self, bytes: u64) -> Self {
        self.max_memory_bytes = Some(bytes);
        self
    }

    /// Validate a raster of `width` x `height` RGB pixels against every cap.
    pub(crate) fn check_raster(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        let exceeded = |what: &str, value: u64, cap: u64| {
            BitmapError::LimitExceeded(alloc::format!("{what} {value} exceeds limit {cap}"))
        };

        if let Some(cap) = self.max_width.filter(|&cap| width > cap) {
            return Err(exceeded("width", width.into(), cap.into()));
        }
        if let Some(cap) = self.max_height.filter(|&cap| height > cap) {
            return Err(exceeded("height", height.into(), cap.into()));
        }

        let pixels = u64::from(width) * u64::from(height);
        if let Some(cap) = self.max_pixels.filter(|&cap| pixels > cap) {
            return Err(exceeded("pixel count", pixels, cap));
        }

        let bytes = pixels.saturating_mul(3);
        if let Some(cap) = self.max_memory_bytes.filter(|&cap| bytes > cap) {
            return Err(exceeded("raster allocation (bytes)", bytes, cap));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_anything() {
        assert!(Limits::default().check_raster(u32::MAX, u32::MAX).is_ok());
    }

    #[test]
    fn each_cap_is_enforced() {
        let cases = [
            Limits::default().with_max_width(9),
            Limits::default().with_max_height(4),
            Limits::default().with_max_pixels(49),
            Limits::default().with_max_memory_bytes(149),
        ];
        for limits in cases {
            match limits.check_raster(10, 5) {
                Err(BitmapError::LimitExceeded(_)) => {}
                other => panic!("expected LimitExceeded for {limits:?}, got {other:?}"),
            }
            assert!(limits.check_raster(1, 1).is_ok());
        }
    }
}
