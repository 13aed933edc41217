//! Instruction pipeline implementation.
//!
//! This module contains the per-core pipeline model. It includes the following components:
//! 1. **Instructions:** Synthetic in-flight instruction records.
//! 2. **Stages:** Single-slot stage positions with a fixed latency.
//! 3. **Topology:** Deterministic stage layouts derived from depth and ISA.
//! 4. **Engine:** The advance/insert/flush state machine.

/// Pipeline advancement engine.
pub mod engine;

/// In-flight instruction records.
pub mod instruction;

/// Stage slots.
pub mod stage;

/// Stage-layout construction from depth and ISA.
pub mod topology;

pub use engine::{AdvanceReport, Pipeline};
pub use instruction::{InstructionClass, PipelineInstruction};
pub use stage::Stage;
pub use topology::build_stages;
