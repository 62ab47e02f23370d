use std::fmt;

use crate::grammar::Op;

/// Stable handle to a node in an [`ExprStore`](super::ExprStore).
///
/// Ids are assigned densely in creation order and never reused, so an
/// operand id is always smaller than the id of the node referencing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExprId(u32);

impl ExprId {
    /// The `![]{}` node every store starts with.
    pub const LITERAL: ExprId = ExprId(0);

    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One operator application and the value it evaluates to.
///
/// Unary nodes leave `rhs` at [`ExprId::LITERAL`]; the literal node leaves
/// both operands there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprNode {
    pub op: Op,
    pub length: u32,
    pub lhs: ExprId,
    pub rhs: ExprId,
    pub value: i32,
}

impl ExprNode {
    pub fn literal() -> Self {
        Self {
            op: Op::NotLambda,
            length: Op::NotLambda.length(),
            lhs: ExprId::LITERAL,
            rhs: ExprId::LITERAL,
            value: 0,
        }
    }

    pub fn precedence(&self) -> u8 {
        self.op.precedence()
    }

    /// Printed length the grammar predicts for `op` applied to the given
    /// operands. Operands beyond the operator's arity are ignored.
    pub fn composed_length(op: Op, lhs: &ExprNode, rhs: &ExprNode) -> u32 {
        match op.arity() {
            0 => op.length(),
            1 => op.length() + lhs.length,
            _ => op.length() + lhs.length + rhs.length,
        }
    }
}
