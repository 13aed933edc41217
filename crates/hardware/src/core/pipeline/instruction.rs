//! In-flight instruction records.
//!
//! The pipeline carries synthetic instructions, not decoded machine code. Each record
//! keeps the attributes needed for observation plus the per-stage countdown that drives
//! advancement.

use std::fmt;

use serde::Serialize;

/// Coarse classification of an instruction, used to pick an execution-unit pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum InstructionClass {
    /// Integer arithmetic/logic.
    #[default]
    Integer,
    /// Floating-point arithmetic.
    Float,
    /// Load or store.
    Memory,
    /// Branch or jump.
    Branch,
    /// System / privileged operation.
    System,
}

impl fmt::Display for InstructionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "int",
            Self::Float => "float",
            Self::Memory => "mem",
            Self::Branch => "branch",
            Self::System => "system",
        })
    }
}

/// An instruction occupying a pipeline stage.
///
/// `cycles_left` is owned by the pipeline: it is set to the occupying stage's latency on
/// entry and counts down while the instruction sits in that stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineInstruction {
    /// Synthetic program-counter value.
    pub address: u64,
    /// Opcode byte.
    pub opcode: u8,
    /// Register operands.
    pub operands: Vec<u8>,
    /// Classification.
    pub class: InstructionClass,
    /// Cycles remaining before the instruction may leave its current stage.
    pub cycles_left: u32,
}

impl PipelineInstruction {
    /// Creates an instruction that has not yet entered a stage.
    pub fn new(address: u64, opcode: u8, operands: Vec<u8>, class: InstructionClass) -> Self {
        Self {
            address,
            opcode,
            operands,
            class,
            cycles_left: 0,
        }
    }
}

impl fmt::Display for PipelineInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x} op={:#04x} {}", self.address, self.opcode, self.class)
    }
}
