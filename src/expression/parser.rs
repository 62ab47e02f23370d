use log::debug;

use crate::expression::errors::ParseError;
use crate::expression::eval::{apply_binary, apply_unary};
use crate::grammar::{LITERAL_PRECEDENCE, Op};

/// Parse a printed expression with C operator precedence and evaluate it.
///
/// Only the grammar's own tokens are accepted: `![]{}`, parentheses,
/// prefix `-` and `~`, and the binary operators, all left-associative.
/// Arithmetic is checked exactly as during the search.
///
/// # Errors
///
/// Returns an error on malformed input or when evaluation fails.
pub fn parse_and_evaluate(text: &str) -> Result<i32, ParseError> {
    debug!("Parsing expression: {}", text);

    let mut parser = Parser::new(text);
    let value = parser.parse_level(1)?;
    if parser.pos < parser.input.len() {
        return Err(ParseError::TrailingInput { pos: parser.pos });
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            input: text.as_bytes(),
            pos: 0,
        }
    }

    fn rest(&self) -> &'a [u8] {
        self.input.get(self.pos..).unwrap_or_default()
    }

    fn unexpected(&self) -> ParseError {
        match self.rest().first() {
            Some(&b) => ParseError::UnexpectedChar {
                pos: self.pos,
                found: b as char,
            },
            None => ParseError::UnexpectedEnd,
        }
    }

    fn peek_binary(&self) -> Option<Op> {
        let rest = self.rest();
        if rest.starts_with(b"<<") {
            return Some(Op::Shl);
        }
        if rest.starts_with(b">>") {
            return Some(Op::Shr);
        }
        let op = match rest.first()? {
            b'*' => Op::Mul,
            b'/' => Op::Div,
            b'%' => Op::Rem,
            b'+' => Op::Add,
            b'-' => Op::Sub,
            b'&' => Op::BitAnd,
            b'^' => Op::BitXor,
            b'|' => Op::BitOr,
            _ => return None,
        };
        Some(op)
    }

    /// Parse a chain of binary operators of precedence `level` or tighter.
    fn parse_level(&mut self, level: u8) -> Result<i32, ParseError> {
        if level >= LITERAL_PRECEDENCE {
            return self.parse_unary();
        }

        let mut lhs = self.parse_level(level + 1)?;
        while let Some(op) = self.peek_binary()
            && op.precedence() == level
        {
            self.pos += op.length() as usize;
            let rhs = self.parse_level(level + 1)?;
            lhs = apply_binary(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<i32, ParseError> {
        let literal = Op::NotLambda.symbol().as_bytes();
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            return Ok(0);
        }

        match self.rest().first() {
            Some(b'-') => {
                self.pos += 1;
                let operand = self.parse_unary()?;
                Ok(apply_unary(Op::Neg, operand)?)
            }
            Some(b'~') => {
                self.pos += 1;
                let operand = self.parse_unary()?;
                Ok(apply_unary(Op::Compl, operand)?)
            }
            Some(b'(') => {
                self.pos += 1;
                let inner = self.parse_level(1)?;
                if self.rest().first() != Some(&b')') {
                    return Err(self.unexpected());
                }
                self.pos += 1;
                Ok(inner)
            }
            _ => Err(self.unexpected()),
        }
    }
}
