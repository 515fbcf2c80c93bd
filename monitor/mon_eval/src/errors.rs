//! Error types for expression evaluation.
//!
//! `EvalErrorKind` is the structured category; constructor functions below
//! are the public way to build an [`EvalError`] and are the only place the
//! messages are defined.

use mon_ir::Span;

/// Result of evaluating a token range.
pub type EvalResult = Result<u32, EvalError>;

/// Why a token range does not form an expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    /// The expression has no tokens at all.
    EmptyExpression,
    /// `()` with nothing inside.
    EmptyParens,
    /// An operator with nothing to its left, e.g. `*2`.
    MissingLeftOperand,
    /// An operator with nothing to its right, e.g. `2+`.
    MissingRightOperand,
    /// Two operands with no operator between them, e.g. `1 2` or `(1)(2)`.
    MissingOperator,
    /// A token that cannot stand alone as an operand, e.g. a lone `)`.
    UnexpectedToken,
    /// A `(` whose matching `)` lies outside the range being evaluated.
    UnclosedParen,
}

impl MalformedReason {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::EmptyExpression => "empty expression",
            Self::EmptyParens => "empty parentheses",
            Self::MissingLeftOperand => "operator is missing its left operand",
            Self::MissingRightOperand => "operator is missing its right operand",
            Self::MissingOperator => "expected an operator between operands",
            Self::UnexpectedToken => "token cannot be used as an operand",
            Self::UnclosedParen => "parenthesis is not closed within its sub-expression",
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EvalErrorKind {
    /// A `)` closes nothing, or a `(` is never closed.
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    /// The register snapshot has no value for this name.
    #[error("unknown register ${name}")]
    UnknownRegister { name: String },
    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// The token range does not form an expression.
    #[error("malformed expression: {}", .reason.describe())]
    Malformed { reason: MalformedReason },
    /// A literal does not fit in 32 bits.
    #[error("literal {lexeme} does not fit in 32 bits")]
    LiteralOutOfRange { lexeme: String },
}

/// An evaluation error located at the tokens that caused it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source location, when one token or range is to blame.
    pub span: Option<Span>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a source location.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// Parentheses do not balance.
#[cold]
pub fn unbalanced_parens() -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnbalancedParens)
}

/// Register `name` (without sigil) is missing from the snapshot.
#[cold]
pub fn unknown_register(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownRegister {
        name: name.to_owned(),
    })
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// The range does not form an expression.
#[cold]
pub fn malformed(reason: MalformedReason) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Malformed { reason })
}

/// Literal `lexeme` overflows `u32`.
#[cold]
pub fn literal_out_of_range(lexeme: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LiteralOutOfRange {
        lexeme: lexeme.to_owned(),
    })
}
