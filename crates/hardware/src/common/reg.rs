//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which acts as a unified interface for
//! accessing both General Purpose Registers (GPRs) and Floating-Point Registers (FPRs).
//! It provides:
//! 1. **ISA Sizing:** Register counts taken from the core's architecture.
//! 2. **Abstraction:** A single set of methods for reading and writing register values.
//! 3. **Reset:** Clearing all architectural registers back to zero.

use crate::core::arch::fpr::Fpr;
use crate::core::arch::gpr::Gpr;
use crate::isa::Isa;

/// Unified register file containing both general-purpose and floating-point registers.
///
/// # Examples
///
/// ```
/// use mpsim_core::common::RegisterFile;
/// use mpsim_core::Isa;
///
/// let mut regs = RegisterFile::for_isa(Isa::X86);
/// assert_eq!(regs.int_count(), 16);
/// assert_eq!(regs.float_count(), 8);
///
/// regs.write(3, 42);
/// assert_eq!(regs.read(3), 42);
/// regs.clear();
/// assert!(regs.is_zeroed());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterFile {
    gpr: Gpr,
    fpr: Fpr,
}

impl RegisterFile {
    /// Creates a zeroed register file sized for `isa`.
    ///
    /// # Arguments
    ///
    /// * `isa` - Architecture that selects register counts.
    ///
    /// # Returns
    ///
    /// A new `RegisterFile` with every register set to zero.
    pub fn for_isa(isa: Isa) -> Self {
        Self {
            gpr: Gpr::new(isa),
            fpr: Fpr::new(isa),
        }
    }

    /// Number of integer registers.
    pub fn int_count(&self) -> usize {
        self.gpr.len()
    }

    /// Number of floating-point registers.
    pub fn float_count(&self) -> usize {
        self.fpr.len()
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. On RISC-V and MIPS, register 0 always returns 0.
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the specified register.
    pub fn read(&self, idx: usize) -> u64 {
        self.gpr.read(idx)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Writes to a hardwired zero register are ignored.
    /// * `val` - The 64-bit value to write.
    pub fn write(&mut self, idx: usize, val: u64) {
        self.gpr.write(idx, val);
    }

    /// Reads a floating-point register as raw bits.
    pub fn read_f(&self, idx: usize) -> u64 {
        self.fpr.read(idx)
    }

    /// Writes raw bits to a floating-point register.
    pub fn write_f(&mut self, idx: usize, val: u64) {
        self.fpr.write(idx, val);
    }

    /// Zeroes every integer and floating-point register.
    pub fn clear(&mut self) {
        self.gpr.clear();
        self.fpr.clear();
    }

    /// Returns true if every register holds zero.
    pub fn is_zeroed(&self) -> bool {
        self.gpr.is_zeroed() && self.fpr.is_zeroed()
    }
}
