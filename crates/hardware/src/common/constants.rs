//! Global Simulator Constants.
//!
//! This module defines simulator-wide constants. It includes:
//! 1. **Workload Constants:** The synthetic fetch cadence and the instruction pattern it emits.
//! 2. **Instruction Constants:** Program-counter stride for sequential fetch.
//! 3. **Execution-Unit Constants:** The fixed per-core unit inventory and unit latencies.

/// A core fetches one synthetic instruction every `FETCH_INTERVAL` cycles.
pub const FETCH_INTERVAL: u64 = 5;

/// Program-counter stride between consecutive synthetic instructions, in bytes.
pub const INSTRUCTION_BYTES: u64 = 4;

/// Opcode of the synthetic integer instruction (ADD).
pub const SYNTHETIC_OPCODE: u8 = 0x01;

/// Operands of the synthetic instruction: `r1 = r2 + r3`.
pub const SYNTHETIC_OPERANDS: [u8; 3] = [1, 2, 3];

/// Integer ALUs per core.
pub const ALU_COUNT: usize = 2;

/// Internal stage count of an integer ALU.
pub const ALU_STAGES: u32 = 1;

/// Floating-point units per core.
pub const FPU_COUNT: usize = 1;

/// Internal stage count of a floating-point unit.
pub const FPU_STAGES: u32 = 3;

/// Load/store units per core.
pub const LSU_COUNT: usize = 1;

/// Internal stage count of a load/store unit.
pub const LSU_STAGES: u32 = 1;

/// Branch units per core.
pub const BRANCH_UNIT_COUNT: usize = 1;

/// Internal stage count of a branch unit.
pub const BRANCH_UNIT_STAGES: u32 = 1;

/// Number of stages in the superscalar-style x86 front/back end before padding.
pub const X86_DEEP_BASE_STAGES: usize = 11;
