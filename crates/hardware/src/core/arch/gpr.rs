//! General-Purpose Register File.
//!
//! This module implements the integer register file of a simulated core.
//! It performs the following:
//! 1. **Storage:** Maintains an ISA-sized bank of 64-bit integer registers.
//! 2. **Invariant Enforcement:** Hardwires register 0 to zero on ISAs that define a zero register.
//! 3. **Reset:** Zeroing and zero-state checks used by core reset.

use crate::isa::Isa;

/// General-Purpose Register file.
///
/// The register count comes from [`Isa::register_shape`]. On RISC-V and MIPS register 0
/// reads as zero and ignores writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gpr {
    regs: Vec<u64>,
    zero_reg: bool,
}

impl Gpr {
    /// Creates a zeroed register file sized for `isa`.
    ///
    /// # Arguments
    ///
    /// * `isa` - Architecture that determines register count and zero-register behavior.
    pub fn new(isa: Isa) -> Self {
        Self {
            regs: vec![0; isa.register_shape().int_regs],
            zero_reg: isa.has_zero_register(),
        }
    }

    /// Number of integer registers.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns true if the file holds no registers.
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Reads an integer register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Out-of-range indices read as zero.
    ///
    /// # Returns
    ///
    /// The 64-bit register value.
    pub fn read(&self, idx: usize) -> u64 {
        if self.zero_reg && idx == 0 {
            return 0;
        }
        self.regs.get(idx).copied().unwrap_or(0)
    }

    /// Writes an integer register.
    ///
    /// Writes to the zero register and to out-of-range indices are ignored.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index.
    /// * `val` - The 64-bit value to write.
    pub fn write(&mut self, idx: usize, val: u64) {
        if self.zero_reg && idx == 0 {
            return;
        }
        if let Some(reg) = self.regs.get_mut(idx) {
            *reg = val;
        }
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs.fill(0);
    }

    /// Returns true if every register holds zero.
    pub fn is_zeroed(&self) -> bool {
        self.regs.iter().all(|&r| r == 0)
    }
}
