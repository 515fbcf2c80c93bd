use std::fmt;

use crate::BinaryOp;

/// Token kinds.
///
/// Operand kinds own the exact text they were lexed from; the evaluator
/// resolves that text to a value only when it reaches the token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Operands
    /// Decimal integer literal, e.g. `42`.
    Int(String),
    /// Hexadecimal literal including its `0x`/`0X` prefix, e.g. `0x1F`.
    Hex(String),
    /// Register reference including its `$` sigil, e.g. `$eax`.
    Register(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    EqEq,
    NotEq,
    AndAnd,
    OrOr,

    // Delimiters
    LParen,
    RParen,
}

impl TokenKind {
    /// The binary operator this token denotes, if any.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        Some(match self {
            Self::Plus => BinaryOp::Add,
            Self::Minus => BinaryOp::Sub,
            Self::Star => BinaryOp::Mul,
            Self::Slash => BinaryOp::Div,
            Self::EqEq => BinaryOp::Eq,
            Self::NotEq => BinaryOp::NotEq,
            Self::AndAnd => BinaryOp::And,
            Self::OrOr => BinaryOp::Or,
            Self::Int(_) | Self::Hex(_) | Self::Register(_) | Self::LParen | Self::RParen => {
                return None
            }
        })
    }

    /// Source text of this token.
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Int(text) | Self::Hex(text) | Self::Register(text) => text.as_str(),
            Self::LParen => "(",
            Self::RParen => ")",
            op => op.binary_op().map_or("", BinaryOp::as_symbol),
        }
    }

    /// Short category name for token dumps and error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Hex(_) => "hex",
            Self::Register(_) => "register",
            Self::LParen => "'('",
            Self::RParen => "')'",
            _ => "operator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}
