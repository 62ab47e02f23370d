use log::debug;

use crate::utils::{UtilsError, validate_range};

/// Inclusive range of values to find expressions for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub min: i32,
    pub max: i32,
}

impl SearchConfig {
    /// # Errors
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, UtilsError> {
        validate_range(min, max)?;
        debug!("Search range [{}, {}]", min, max);
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of values in the range; up to 2^32, so it does not fit in `u32`.
    pub fn width(&self) -> u64 {
        (i64::from(self.max) - i64::from(self.min) + 1) as u64
    }
}
