//! x86 register names that may appear in an expression as `$name`.

use std::fmt;

/// Sigil that prefixes a register reference in expression text.
pub const REGISTER_SIGIL: char = '$';

/// A 32-bit x86 register readable from an expression.
///
/// Discriminants follow the hardware encoding order of the general purpose
/// registers, with `eip` appended.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Register {
    Eax,
    Ecx,
    Edx,
    Ebx,
    Esp,
    Ebp,
    Esi,
    Edi,
    Eip,
}

impl Register {
    /// Every register, in encoding order.
    pub const ALL: [Register; 9] = [
        Self::Eax,
        Self::Ecx,
        Self::Edx,
        Self::Ebx,
        Self::Esp,
        Self::Ebp,
        Self::Esi,
        Self::Edi,
        Self::Eip,
    ];

    /// Lowercase register name, without the sigil.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eax => "eax",
            Self::Ecx => "ecx",
            Self::Edx => "edx",
            Self::Ebx => "ebx",
            Self::Esp => "esp",
            Self::Ebp => "ebp",
            Self::Esi => "esi",
            Self::Edi => "edi",
            Self::Eip => "eip",
        }
    }

    /// Look up a register by name. A leading sigil is accepted.
    pub fn from_name(name: &str) -> Option<Register> {
        let bare = name.strip_prefix(REGISTER_SIGIL).unwrap_or(name);
        Self::ALL.into_iter().find(|reg| reg.name() == bare)
    }

    /// Position in [`Register::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
