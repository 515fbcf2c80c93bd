//! Tokenizer for monitor expressions.
//!
//! Scans an expression left to right. At each position the pattern rules in
//! [`rules::PATTERN_RULES`] are tried in priority order; the first rule that
//! matches a non-empty prefix decides the next token. Whitespace is consumed
//! without producing a token. If no rule matches, lexing stops with a
//! [`LexError`] pointing at the offending character.
//!
//! The produced [`TokenList`] is owned by the caller. The only state shared
//! between calls is the compiled rule table, which is immutable.

mod lex_error;
pub mod rules;

pub use lex_error::{LexError, LexErrorKind};
pub use rules::{init, PatternRule, RuleKind, PATTERN_RULES};

use rules::global_rule_set;

use mon_ir::{Span, Token, TokenList};
use tracing::{debug, trace};

/// Token count accepted by [`tokenize`].
pub const DEFAULT_MAX_TOKENS: usize = 256;

/// Tokenize `source` with the default token limit.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    tokenize_with_limit(source, DEFAULT_MAX_TOKENS)
}

/// Tokenize `source`, failing once more than `max_tokens` tokens are produced.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn tokenize_with_limit(source: &str, max_tokens: usize) -> Result<TokenList, LexError> {
    let rules = global_rule_set();
    let mut tokens = TokenList::new();
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        let Some(matched) = rules.match_prefix(rest) else {
            let found = rest.chars().next().unwrap_or('\0');
            debug!(pos, ?found, "no pattern rule matches");
            return Err(LexError::no_matching_rule(pos, found));
        };

        let end = pos + matched.len;
        let text = &source[pos..end];
        trace!(rule = matched.rule.name, pos, text, "rule matched");

        if let Some(kind) = matched.rule.kind.cook(text) {
            let span = Span::from_range(pos..end);
            if tokens.len() >= max_tokens {
                return Err(LexError::too_many_tokens(span, max_tokens));
            }
            tokens.push(Token::new(kind, span));
        }
        pos = end;
    }

    debug!(tokens = tokens.len(), "tokenized expression");
    Ok(tokens)
}
