use thiserror::Error;

use crate::grammar::Op;

/// Reasons a candidate composition is discarded
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("Result does not fit in a 32-bit signed integer")]
    Overflow,
    #[error("Division or remainder by zero, or i32::MIN by -1")]
    UndefinedArithmetic,
    #[error("Operand of '{}' would need parentheses that are not printed", .0.symbol())]
    PrecedenceRejected(Op),
    #[error("Shift amount outside 0..=31, negative shifted value, or lossy left shift")]
    ShiftOutOfRange,
    #[error("Operator '{}' applied to the wrong number of operands", .0.symbol())]
    ArityMismatch(Op),
}

/// Errors from the reference parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected character '{found}' at offset {pos}")]
    UnexpectedChar { pos: usize, found: char },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Trailing input at offset {pos}")]
    TrailingInput { pos: usize },
    #[error("Evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

/// Errors from the expression node store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Expression store is full ({0} nodes)")]
    Exhausted(usize),
    #[error("Length bucket {requested} opened out of order (next is {next})")]
    BucketOutOfOrder { requested: u32, next: usize },
}
