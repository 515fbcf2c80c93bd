//! Stable error codes for monitor diagnostics.

use std::fmt;

/// Error codes for all monitor diagnostics.
///
/// Format: E#### where the first digit is the stage that failed:
/// - E0xxx: tokenizer errors
/// - E1xxx: expression structure errors
/// - E2xxx: evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Tokenizer Errors (E0xxx)
    /// No token rule matches the input
    E0001,
    /// Too many tokens
    E0002,

    // Structure Errors (E1xxx)
    /// Unbalanced parentheses
    E1001,
    /// Malformed expression
    E1002,

    // Evaluation Errors (E2xxx)
    /// Unknown register
    E2001,
    /// Division by zero
    E2002,
    /// Literal out of range
    E2003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }

    /// One-line summary, as listed by `mon --explain` without an argument.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "no token rule matches the input",
            ErrorCode::E0002 => "expression has too many tokens",
            ErrorCode::E1001 => "unbalanced parentheses",
            ErrorCode::E1002 => "malformed expression",
            ErrorCode::E2001 => "unknown register",
            ErrorCode::E2002 => "division by zero",
            ErrorCode::E2003 => "literal does not fit in 32 bits",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
