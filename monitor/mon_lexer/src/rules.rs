//! Declarative lexical pattern rules.
//!
//! Every token the monitor understands is described by one entry in
//! [`PATTERN_RULES`]. At each scan position the rules are tried in table
//! order and the first one whose pattern matches a non-empty prefix wins.
//! This is first-match, not longest-match: order is the contract.
//!
//! The order encodes these constraints (each is covered by a test):
//! - whitespace is tried first so it can be discarded before anything else
//! - the hexadecimal rule precedes the decimal rule, otherwise `0x1F` would
//!   lex as `0` followed by an unmatched `x`
//! - `==` is tried before any rule that could consume a leading `=`
//!
//! The table is compiled into a [`RuleSet`] once per process, on first use
//! or eagerly through [`init`].

use std::sync::OnceLock;

use mon_ir::TokenKind;
use regex::Regex;

/// What a matched rule produces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RuleKind {
    /// Matched and discarded; never materialized as a token.
    Whitespace,
    Plus,
    EqEq,
    Hex,
    Int,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Register,
    AndAnd,
    OrOr,
    NotEq,
}

impl RuleKind {
    /// Turn a matched slice into a token kind.
    ///
    /// Returns `None` for whitespace.
    pub fn cook(self, text: &str) -> Option<TokenKind> {
        Some(match self {
            Self::Whitespace => return None,
            Self::Plus => TokenKind::Plus,
            Self::EqEq => TokenKind::EqEq,
            Self::Hex => TokenKind::Hex(text.to_owned()),
            Self::Int => TokenKind::Int(text.to_owned()),
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Register => TokenKind::Register(text.to_owned()),
            Self::AndAnd => TokenKind::AndAnd,
            Self::OrOr => TokenKind::OrOr,
            Self::NotEq => TokenKind::NotEq,
        })
    }
}

/// A declarative lexical rule: a pattern and the kind it produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PatternRule {
    /// Human-readable name for tracing and token dumps.
    pub name: &'static str,

    /// Regular expression, unanchored. [`RuleSet::compile`] anchors it.
    pub pattern: &'static str,

    /// The kind a match produces.
    pub kind: RuleKind,
}

impl PatternRule {
    const fn new(name: &'static str, pattern: &'static str, kind: RuleKind) -> Self {
        PatternRule {
            name,
            pattern,
            kind,
        }
    }
}

/// All lexical rules in priority order. First match wins.
pub static PATTERN_RULES: &[PatternRule] = &[
    PatternRule::new("whitespace", r"\s+", RuleKind::Whitespace),
    PatternRule::new("plus", r"\+", RuleKind::Plus),
    PatternRule::new("eq_eq", r"==", RuleKind::EqEq),
    PatternRule::new("hex", r"0[xX][0-9a-fA-F]+", RuleKind::Hex),
    PatternRule::new("int", r"[0-9]+", RuleKind::Int),
    PatternRule::new("minus", r"-", RuleKind::Minus),
    PatternRule::new("star", r"\*", RuleKind::Star),
    PatternRule::new("slash", r"/", RuleKind::Slash),
    PatternRule::new("lparen", r"\(", RuleKind::LParen),
    PatternRule::new("rparen", r"\)", RuleKind::RParen),
    PatternRule::new("reg_abcd_x", r"\$e[abcd]x", RuleKind::Register),
    PatternRule::new("reg_bs_p", r"\$e[bs]p", RuleKind::Register),
    PatternRule::new("reg_sd_i", r"\$e[sd]i", RuleKind::Register),
    PatternRule::new("reg_ip", r"\$eip", RuleKind::Register),
    PatternRule::new("and_and", r"&&", RuleKind::AndAnd),
    PatternRule::new("or_or", r"\|\|", RuleKind::OrOr),
    PatternRule::new("not_eq", r"!=", RuleKind::NotEq),
];

/// A pattern rule paired with its anchored, compiled regex.
#[derive(Debug)]
struct CompiledRule {
    rule: &'static PatternRule,
    regex: Regex,
}

/// A successful rule match at the current scan position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RuleMatch {
    pub(crate) rule: &'static PatternRule,
    /// Length of the matched prefix in bytes. Never zero.
    pub(crate) len: usize,
}

/// The compiled, immutable rule table.
#[derive(Debug)]
pub(crate) struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile `rules`, preserving their order.
    ///
    /// Each pattern is wrapped as `^(?:pattern)` so it can only match at
    /// the start of the remaining input.
    pub(crate) fn compile(rules: &'static [PatternRule]) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|rule| {
                Regex::new(&format!("^(?:{})", rule.pattern))
                    .map(|regex| CompiledRule { rule, regex })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RuleSet { rules })
    }

    /// Try every rule against the start of `rest`, in order.
    ///
    /// Zero-length matches are ignored so a rule can never stall the scan.
    pub(crate) fn match_prefix(&self, rest: &str) -> Option<RuleMatch> {
        self.rules.iter().find_map(|compiled| {
            compiled
                .regex
                .find(rest)
                .filter(|m| m.start() == 0 && !m.is_empty())
                .map(|m| RuleMatch {
                    rule: compiled.rule,
                    len: m.end(),
                })
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }
}

static GLOBAL_RULE_SET: OnceLock<RuleSet> = OnceLock::new();

/// Get the process-wide rule set (compiled on first use).
#[expect(
    clippy::expect_used,
    reason = "PATTERN_RULES is a static table; every pattern is compiled in tests"
)]
pub(crate) fn global_rule_set() -> &'static RuleSet {
    GLOBAL_RULE_SET.get_or_init(|| {
        RuleSet::compile(PATTERN_RULES).expect("static pattern rules must compile")
    })
}

/// Compile the rule table now instead of on the first tokenize call.
pub fn init() {
    let rules = global_rule_set();
    tracing::debug!(rules = rules.len(), "pattern rules compiled");
}
