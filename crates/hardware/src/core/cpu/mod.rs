//! Core Definition and Initialization.
//!
//! This module defines the `Core` structure, which holds the complete state of one
//! simulated processor. It coordinates the following:
//! 1. **State Management:** ISA-sized registers and the program counter.
//! 2. **Pipeline Control:** One owned pipeline whose topology is fixed at construction.
//! 3. **Resources:** The execution-unit inventory.
//! 4. **Accounting:** Per-core cycle, fetch, retirement, busy, and stall counters.

/// Per-cycle step and reset.
pub mod execution;

use crate::common::RegisterFile;
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::pipeline::{Pipeline, Stage};
use crate::core::units::ExecutionUnits;
use crate::isa::Isa;
use crate::stats::CoreStats;

/// One simulated processor.
///
/// A `Core` is not internally synchronized. The simulator keeps each core behind its own
/// lock, and `tick` and `reset` take `&mut self`, so a cycle is atomic with respect to
/// any observer holding that lock.
///
/// # Examples
///
/// ```
/// use mpsim_core::{Config, Core};
///
/// let mut core = Core::new(0, &Config::default()).unwrap();
/// for _ in 0..100 {
///     core.tick();
/// }
/// assert_eq!(core.stats().cycles, 100);
/// assert_eq!(core.executed_instructions(), 19);
/// ```
#[derive(Debug, Clone)]
pub struct Core {
    id: usize,
    isa: Isa,
    regs: RegisterFile,
    pc: u64,
    pipeline: Pipeline,
    units: ExecutionUnits,
    stats: CoreStats,
}

impl Core {
    /// Creates a core in its power-on state.
    ///
    /// # Arguments
    ///
    /// * `id` - Core identifier, normally its index in the simulator.
    /// * `config` - Simulator configuration; only the `processor` section is consulted.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if `config` fails validation and
    /// `SimError::InvalidDepth` if the pipeline cannot be built.
    pub fn new(id: usize, config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        let isa = config.processor.isa;
        let pipeline = Pipeline::new(config.processor.pipeline_depth, isa)?;
        tracing::trace!(core = id, %isa, depth = pipeline.depth(), "core constructed");

        Ok(Self {
            id,
            isa,
            regs: RegisterFile::for_isa(isa),
            pc: 0,
            pipeline,
            units: ExecutionUnits::standard(),
            stats: CoreStats::default(),
        })
    }

    /// Core identifier.
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Architecture of this core.
    pub const fn isa(&self) -> Isa {
        self.isa
    }

    /// Address of the next instruction to fetch.
    pub const fn pc(&self) -> u64 {
        self.pc
    }

    /// Snapshot of the accumulated counters.
    pub const fn stats(&self) -> CoreStats {
        self.stats
    }

    /// Instructions retired since construction or the last reset.
    pub const fn executed_instructions(&self) -> u64 {
        self.stats.instructions_retired
    }

    /// Busy cycles divided by elapsed cycles; 0 before the first cycle.
    pub fn utilization(&self) -> f64 {
        self.stats.utilization()
    }

    /// Independent copy of the pipeline's stage state.
    pub fn pipeline_state(&self) -> Vec<Stage> {
        self.pipeline.stages()
    }

    /// The core's pipeline.
    pub const fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// The register file.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Mutable register file access.
    pub const fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// The execution-unit inventory.
    pub const fn units(&self) -> &ExecutionUnits {
        &self.units
    }

    /// Mutable execution-unit access.
    pub const fn units_mut(&mut self) -> &mut ExecutionUnits {
        &mut self.units
    }
}
