//! Lexer error types.
//!
//! Errors carry WHERE (`span`, the offending byte range) and WHAT (`kind`).
//! A lexical failure stops the call; the caller never evaluates a partially
//! tokenized expression.

use mon_ir::Span;

/// A lexer error with the location needed for a caret diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at offset {}", .span.start)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// No pattern rule matches at the scan position.
    #[error("no token rule matches {found:?}")]
    NoMatchingRule { found: char },
    /// The expression has more tokens than the configured safety limit.
    #[error("expression exceeds the limit of {limit} tokens")]
    TooManyTokens { limit: usize },
}

impl LexError {
    /// Byte offset of the failure, for the caret pointer.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.span.start
    }

    /// No rule matched `found`, which starts at byte `offset`.
    #[cold]
    pub fn no_matching_rule(offset: usize, found: char) -> Self {
        LexError {
            span: Span::from_range(offset..offset + found.len_utf8()),
            kind: LexErrorKind::NoMatchingRule { found },
        }
    }

    /// The token at `span` would exceed `limit`.
    #[cold]
    pub fn too_many_tokens(span: Span, limit: usize) -> Self {
        LexError {
            span,
            kind: LexErrorKind::TooManyTokens { limit },
        }
    }
}
