use crate::expression::errors::EvalError;
use crate::expression::node::ExprNode;
use crate::grammar::Op;

/// Apply a unary operator to `operand`, rejecting it when the printed
/// result would parse differently.
///
/// Parentheses accept any operand; `-` and `~` need an operand that binds
/// at least as tightly as they do.
///
/// # Errors
///
/// Returns why the composition is invalid.
#[inline]
pub fn eval_unary(op: Op, operand: &ExprNode) -> Result<i32, EvalError> {
    if op != Op::Paren && operand.precedence() < op.precedence() {
        return Err(EvalError::PrecedenceRejected(op));
    }
    apply_unary(op, operand.value)
}

/// Apply a binary operator to two nodes.
///
/// All binary operators are left-associative, so the right operand must
/// bind strictly tighter than `op` while the left may bind equally tight.
///
/// # Errors
///
/// Returns why the composition is invalid.
#[inline]
pub fn eval_binary(op: Op, lhs: &ExprNode, rhs: &ExprNode) -> Result<i32, EvalError> {
    if lhs.precedence() < op.precedence() || rhs.precedence() <= op.precedence() {
        return Err(EvalError::PrecedenceRejected(op));
    }
    apply_binary(op, lhs.value, rhs.value)
}

/// Unary arithmetic without any precedence check.
///
/// # Errors
///
/// Fails on `-i32::MIN` or when `op` is not unary.
#[inline]
pub fn apply_unary(op: Op, value: i32) -> Result<i32, EvalError> {
    match op {
        Op::Paren => Ok(value),
        Op::Neg => value.checked_neg().ok_or(EvalError::Overflow),
        Op::Compl => Ok(!value),
        _ => Err(EvalError::ArityMismatch(op)),
    }
}

/// Binary arithmetic without any precedence check.
///
/// # Errors
///
/// Fails on signed overflow, undefined division, out of range or lossy
/// shifts, or when `op` is not binary.
#[inline]
pub fn apply_binary(op: Op, lhs: i32, rhs: i32) -> Result<i32, EvalError> {
    match op {
        Op::Mul => lhs.checked_mul(rhs).ok_or(EvalError::Overflow),
        Op::Div => lhs.checked_div(rhs).ok_or(EvalError::UndefinedArithmetic),
        Op::Rem => lhs.checked_rem(rhs).ok_or(EvalError::UndefinedArithmetic),
        Op::Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow),
        Op::Sub => lhs.checked_sub(rhs).ok_or(EvalError::Overflow),
        Op::Shl => {
            let amount = shift_amount(lhs, rhs)?;
            let shifted = lhs << amount;
            // Shifting back must restore the operand, so no bit reaches the sign.
            if shifted >> amount == lhs {
                Ok(shifted)
            } else {
                Err(EvalError::ShiftOutOfRange)
            }
        }
        Op::Shr => Ok(lhs >> shift_amount(lhs, rhs)?),
        Op::BitAnd => Ok(lhs & rhs),
        Op::BitXor => Ok(lhs ^ rhs),
        Op::BitOr => Ok(lhs | rhs),
        _ => Err(EvalError::ArityMismatch(op)),
    }
}

#[inline]
fn shift_amount(lhs: i32, rhs: i32) -> Result<u32, EvalError> {
    if lhs < 0 || !(0..32).contains(&rhs) {
        return Err(EvalError::ShiftOutOfRange);
    }
    Ok(rhs as u32)
}
