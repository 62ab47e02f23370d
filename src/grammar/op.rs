/// Precedence of anything that never needs protecting parentheses.
pub const LITERAL_PRECEDENCE: u8 = 7;

/// Every operator an expression node can be built from.
///
/// The set is fixed; the search iterates [`Op::UNARY`] and [`Op::BINARY`]
/// in declaration order, which decides which of several equally short
/// expressions is found first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `![]{}`, a lambda negated to `false`: the only source of a value
    NotLambda,
    Paren,
    Neg,
    Compl,
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Shl,
    Shr,
    BitAnd,
    BitXor,
    BitOr,
}

impl Op {
    pub const UNARY: [Op; 3] = [Op::Paren, Op::Neg, Op::Compl];

    pub const BINARY: [Op; 10] = [
        Op::Mul,
        Op::Div,
        Op::Rem,
        Op::Add,
        Op::Sub,
        Op::Shl,
        Op::Shr,
        Op::BitAnd,
        Op::BitXor,
        Op::BitOr,
    ];

    /// Printed form. For [`Op::Paren`] this is both brackets together.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::NotLambda => "![]{}",
            Op::Paren => "()",
            Op::Neg => "-",
            Op::Compl => "~",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Shl => "<<",
            Op::Shr => ">>",
            Op::BitAnd => "&",
            Op::BitXor => "^",
            Op::BitOr => "|",
        }
    }

    /// Binding strength, 1 (`|`) to 7 (unary and atoms). Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Op::NotLambda | Op::Paren | Op::Neg | Op::Compl => LITERAL_PRECEDENCE,
            Op::Mul | Op::Div | Op::Rem => 6,
            Op::Add | Op::Sub => 5,
            Op::Shl | Op::Shr => 4,
            Op::BitAnd => 3,
            Op::BitXor => 2,
            Op::BitOr => 1,
        }
    }

    /// Characters the operator itself contributes to a printed expression.
    pub fn length(self) -> u32 {
        self.symbol().len() as u32
    }

    pub fn arity(self) -> usize {
        match self {
            Op::NotLambda => 0,
            Op::Paren | Op::Neg | Op::Compl => 1,
            _ => 2,
        }
    }

    pub fn is_unary(self) -> bool {
        self.arity() == 1
    }

    pub fn is_binary(self) -> bool {
        self.arity() == 2
    }
}
