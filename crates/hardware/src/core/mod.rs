//! Core processor implementation.
//!
//! This module contains the per-core model: architectural register files, the
//! instruction pipeline, the execution-unit inventory, and the `Core` that drives
//! them one cycle at a time.

/// Architectural register files.
pub mod arch;

/// Core state, per-cycle step, and reset.
pub mod cpu;

/// Instruction pipeline (stages, topology, advancement engine).
pub mod pipeline;

/// Execution-unit inventory (ALU, FPU, load/store, branch).
pub mod units;

pub use self::cpu::Core;
