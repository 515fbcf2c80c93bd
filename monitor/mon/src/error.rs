//! The error type returned by [`evaluate`](crate::evaluate).

use mon_diagnostic::{Diagnostic, ErrorCode};
use mon_eval::{EvalError, EvalErrorKind, MalformedReason};
use mon_ir::Span;
use mon_lexer::{LexError, LexErrorKind};

/// Any failure between expression text and value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ExprError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExprError::Lex(err) => match err.kind {
                LexErrorKind::NoMatchingRule { .. } => ErrorCode::E0001,
                LexErrorKind::TooManyTokens { .. } => ErrorCode::E0002,
            },
            ExprError::Eval(err) => match err.kind {
                EvalErrorKind::UnbalancedParens => ErrorCode::E1001,
                EvalErrorKind::Malformed { .. } => ErrorCode::E1002,
                EvalErrorKind::UnknownRegister { .. } => ErrorCode::E2001,
                EvalErrorKind::DivisionByZero => ErrorCode::E2002,
                EvalErrorKind::LiteralOutOfRange { .. } => ErrorCode::E2003,
            },
        }
    }

    /// Byte range of the expression at fault, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            ExprError::Lex(err) => Some(err.span),
            ExprError::Eval(err) => err.span,
        }
    }

    /// Build a diagnostic with code, message and a label on the culprit.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code());
        match self {
            ExprError::Lex(err) => {
                diag = diag.with_message(err.kind.to_string());
                match err.kind {
                    LexErrorKind::NoMatchingRule { found } => {
                        diag = diag.with_label(err.span, "unexpected character");
                        if found.is_ascii_alphabetic() {
                            diag = diag.with_note("register names need the '$' sigil, e.g. $eax");
                        }
                    }
                    LexErrorKind::TooManyTokens { .. } => {
                        diag = diag
                            .with_label(err.span, "limit reached here")
                            .with_suggestion("raise the limit with --max-tokens=<N>");
                    }
                }
            }
            ExprError::Eval(err) => {
                diag = diag.with_message(err.kind.to_string());
                if let Some(span) = err.span {
                    diag = diag.with_label(span, eval_label(&err.kind));
                }
                diag = match &err.kind {
                    EvalErrorKind::Malformed {
                        reason: MalformedReason::MissingLeftOperand,
                    } => diag.with_note("there are no unary operators; write 0-x instead of -x"),
                    EvalErrorKind::UnknownRegister { name } => {
                        diag.with_suggestion(format!("provide a value with --reg {name}=<value>"))
                    }
                    _ => diag,
                };
            }
        }
        diag
    }
}

fn eval_label(kind: &EvalErrorKind) -> &'static str {
    match kind {
        EvalErrorKind::UnbalancedParens => "unmatched parenthesis",
        EvalErrorKind::UnknownRegister { .. } => "not in the register snapshot",
        EvalErrorKind::DivisionByZero => "divisor is zero",
        EvalErrorKind::LiteralOutOfRange { .. } => "exceeds 0xffffffff",
        EvalErrorKind::Malformed { reason } => match reason {
            MalformedReason::MissingLeftOperand => "nothing to the left",
            MalformedReason::MissingRightOperand => "nothing to the right",
            MalformedReason::MissingOperator => "operands without an operator",
            MalformedReason::EmptyParens => "empty group",
            MalformedReason::UnexpectedToken => "not an operand",
            MalformedReason::UnclosedParen => "not closed here",
            MalformedReason::EmptyExpression => "here",
        },
    }
}

#[cfg(test)]
mod tests;
