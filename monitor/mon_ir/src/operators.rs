//! Binary operators of the monitor expression language.
//!
//! The language has no unary operators: every operator token splits a
//! range into a left and a right operand.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    NotEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in token dumps and error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly). The evaluator
    /// splits a range at the operator with the highest value, so the
    /// loosest-binding operator becomes the outermost node. Only the
    /// relative order matters; the gaps are left for operators this
    /// language does not have yet.
    ///
    /// - 3: `*` `/`
    /// - 4: `+` `-`
    /// - 7: `==` `!=`
    /// - 11: `&&`
    /// - 12: `||`
    pub const fn precedence(self) -> u8 {
        match self {
            // Multiplicative (tightest)
            Self::Mul | Self::Div => 3,
            // Additive
            Self::Add | Self::Sub => 4,
            // Equality
            Self::Eq | Self::NotEq => 7,
            // Logical AND
            Self::And => 11,
            // Logical OR (loosest)
            Self::Or => 12,
        }
    }
}
