//! Register snapshots the evaluator reads from.
//!
//! The surrounding debugger owns the machine state; the evaluator only sees
//! it through [`RegisterSnapshot`] and never writes to it.

use std::collections::HashMap;
use std::hash::BuildHasher;

use mon_ir::Register;
use rustc_hash::FxHashMap;

/// Read-only view of register values at evaluation time.
pub trait RegisterSnapshot {
    /// Value of the register called `name` (no `$` sigil), if known.
    fn get(&self, name: &str) -> Option<u32>;
}

impl<T: RegisterSnapshot + ?Sized> RegisterSnapshot for &T {
    #[inline]
    fn get(&self, name: &str) -> Option<u32> {
        (**self).get(name)
    }
}

impl<S: BuildHasher> RegisterSnapshot for HashMap<String, u32, S> {
    fn get(&self, name: &str) -> Option<u32> {
        HashMap::get(self, name).copied()
    }
}

/// A 32-bit x86 register file.
///
/// Every name in [`Register::ALL`] resolves, so lookups only fail for names
/// that are not x86 registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CpuState {
    values: [u32; Register::ALL.len()],
}

impl CpuState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn read(&self, reg: Register) -> u32 {
        self.values[reg.index()]
    }

    #[inline]
    pub fn write(&mut self, reg: Register, value: u32) {
        self.values[reg.index()] = value;
    }

    /// Builder-style [`write`](Self::write).
    #[must_use]
    pub fn with(mut self, reg: Register, value: u32) -> Self {
        self.write(reg, value);
        self
    }

    /// Registers and their values, in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, u32)> + '_ {
        Register::ALL.into_iter().map(|reg| (reg, self.read(reg)))
    }
}

impl RegisterSnapshot for CpuState {
    fn get(&self, name: &str) -> Option<u32> {
        Register::from_name(name).map(|reg| self.read(reg))
    }
}

/// Sparse snapshot for callers that only know some registers.
pub type RegisterMap = FxHashMap<String, u32>;
