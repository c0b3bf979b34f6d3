use crate::EncodeError;

/// Resource limits checked before an encode writes anything.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for any single buffer the encode allocates.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits.
    pub fn check(&self, width: u32, height: u32) -> Result<(), EncodeError> {
        if let Some(max_w) = self.max_width
            && u64::from(width) > max_w
        {
            return Err(EncodeError::LimitExceeded(alloc::format!(
                "width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height
            && u64::from(height) > max_h
        {
            return Err(EncodeError::LimitExceeded(alloc::format!(
                "height {height} exceeds limit {max_h}"
            )));
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(EncodeError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub fn check_memory(&self, bytes: usize) -> Result<(), EncodeError> {
        if let Some(max_mem) = self.max_memory_bytes
            && bytes as u64 > max_mem
        {
            return Err(EncodeError::LimitExceeded(alloc::format!(
                "allocation {bytes} bytes exceeds memory limit {max_mem}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_everything() {
        let l = Limits::default();
        assert!(l.check(u32::MAX, u32::MAX).is_ok());
        assert!(l.check_memory(usize::MAX).is_ok());
    }

    #[test]
    fn each_limit_trips() {
        let l = Limits {
            max_width: Some(10),
            max_height: Some(20),
            max_pixels: Some(100),
            max_memory_bytes: Some(1000),
        };
        assert!(l.check(10, 10).is_ok());
        assert!(matches!(l.check(11, 1), Err(EncodeError::LimitExceeded(_))));
        assert!(matches!(l.check(1, 21), Err(EncodeError::LimitExceeded(_))));
        assert!(matches!(l.check(10, 11), Err(EncodeError::LimitExceeded(_))));
        assert!(l.check_memory(1000).is_ok());
        assert!(l.check_memory(1001).is_err());
    }
}
