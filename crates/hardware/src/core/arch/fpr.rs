//! Floating-Point Register File.
//!
//! This module implements the floating-point register file of a simulated core.
//! Registers are stored as IEEE 754 double-precision values and exposed as raw bits,
//! matching how the integer file is accessed.

use crate::isa::Isa;

/// Floating-Point Register file sized by [`Isa::register_shape`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fpr {
    fregs: Vec<f64>,
}

impl Fpr {
    /// Creates a zeroed floating-point register file sized for `isa`.
    pub fn new(isa: Isa) -> Self {
        Self {
            fregs: vec![0.0; isa.register_shape().float_regs],
        }
    }

    /// Number of floating-point registers.
    pub fn len(&self) -> usize {
        self.fregs.len()
    }

    /// Returns true if the file holds no registers.
    pub fn is_empty(&self) -> bool {
        self.fregs.is_empty()
    }

    /// Reads a floating-point register as raw bits.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Out-of-range indices read as zero.
    ///
    /// # Returns
    ///
    /// The 64-bit IEEE 754 representation of the stored value.
    pub fn read(&self, idx: usize) -> u64 {
        self.fregs.get(idx).map_or(0, |v| v.to_bits())
    }

    /// Writes raw bits to a floating-point register. Out-of-range writes are ignored.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index.
    /// * `val` - The 64-bit IEEE 754 representation to store.
    pub fn write(&mut self, idx: usize, val: u64) {
        if let Some(reg) = self.fregs.get_mut(idx) {
            *reg = f64::from_bits(val);
        }
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.fregs.fill(0.0);
    }

    /// Returns true if every register holds positive zero.
    pub fn is_zeroed(&self) -> bool {
        self.fregs.iter().all(|v| v.to_bits() == 0)
    }
}
