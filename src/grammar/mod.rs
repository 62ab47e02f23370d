//! Operator grammar: the closed set of operators expressions are built from

mod op;

pub use op::{LITERAL_PRECEDENCE, Op};
