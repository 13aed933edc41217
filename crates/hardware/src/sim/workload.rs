//! Synthetic instruction source.
//!
//! No program image is loaded. Instead each core fetches on a fixed cadence:
//! 1. **Cadence:** One fetch attempt on every cycle that is a multiple of `FETCH_INTERVAL`.
//! 2. **Pattern:** A fixed integer ADD at the current program counter.
//! 3. **Sequencing:** The program counter advances by `INSTRUCTION_BYTES` per accepted fetch.

use crate::common::constants::{
    FETCH_INTERVAL, INSTRUCTION_BYTES, SYNTHETIC_OPCODE, SYNTHETIC_OPERANDS,
};
use crate::core::pipeline::{InstructionClass, PipelineInstruction};

/// Stateless generator of the synthetic instruction stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyntheticWorkload;

impl SyntheticWorkload {
    /// True if a core at `cycle` should attempt a fetch.
    pub const fn fetch_due(cycle: u64) -> bool {
        cycle != 0 && cycle.is_multiple_of(FETCH_INTERVAL)
    }

    /// The instruction found at `pc`.
    pub fn instruction_at(pc: u64) -> PipelineInstruction {
        PipelineInstruction::new(
            pc,
            SYNTHETIC_OPCODE,
            SYNTHETIC_OPERANDS.to_vec(),
            InstructionClass::Integer,
        )
    }

    /// Program counter following `pc` in sequential order.
    pub const fn next_pc(pc: u64) -> u64 {
        pc.wrapping_add(INSTRUCTION_BYTES)
    }
}
