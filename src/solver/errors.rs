use thiserror::Error;

use crate::expression::{ParseError, StoreError};
use crate::grammar::Op;
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid search range: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Expression store error: {0}")]
    StoreError(#[from] StoreError),
    #[error(
        "Internal length mismatch: '{}' node predicted at length {expected}, built at {actual}",
        .op.symbol()
    )]
    LengthMismatch { op: Op, expected: u32, actual: u32 },
    #[error("Expression '{rendered}' reported for {value} does not evaluate back: {reason}")]
    VerificationFailed {
        value: i32,
        rendered: String,
        reason: String,
    },
}

impl SolverError {
    pub(crate) fn verification(value: i32, rendered: &str, err: ParseError) -> Self {
        SolverError::VerificationFailed {
            value,
            rendered: rendered.to_string(),
            reason: err.to_string(),
        }
    }
}
