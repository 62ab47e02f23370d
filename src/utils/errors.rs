use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Invalid range: min={min} is greater than max={max}")]
    InvalidRange { min: i32, max: i32 },
}
