//! Architectural state of a simulated core.
//!
//! This module contains the register files carried by each core:
//! 1. **GPRs:** Integer register file, sized per ISA.
//! 2. **FPRs:** Floating-point register file, sized per ISA.

/// Floating-Point Register file implementation.
pub mod fpr;

/// General-Purpose Register file implementation.
pub mod gpr;
