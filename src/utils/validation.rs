use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `min` is greater than `max`.
pub fn validate_range(min: i32, max: i32) -> Result<(), UtilsError> {
    debug!("Validating range [{}, {}]", min, max);

    if min > max {
        warn!("Range is empty: min={} max={}", min, max);
        return Err(UtilsError::InvalidRange { min, max });
    }

    debug!("Range validation successful");
    Ok(())
}
