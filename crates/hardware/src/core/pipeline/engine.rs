//! Pipeline advancement engine.
//!
//! This module owns the per-core stage array and moves instructions through it:
//! 1. **Entry:** `try_insert` accepts an instruction only when stage 0 is free.
//! 2. **Advance:** One tail-to-head pass per cycle, so an instruction moves at most one
//!    stage and never overtakes an instruction ahead of it.
//! 3. **Retirement:** The instruction leaving the final stage is handed back in the
//!    cycle report, exactly once.
//! 4. **Observation:** `stages` returns an independent copy of stage state.

use tracing::trace;

use crate::common::error::SimError;
use crate::isa::Isa;

use super::instruction::PipelineInstruction;
use super::stage::Stage;
use super::topology::build_stages;

/// Outcome of one call to [`Pipeline::advance`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct AdvanceReport {
    /// True if any stage held an instruction at the start of the pass.
    pub work_done: bool,
    /// The instruction that left the final stage this cycle, if any.
    pub retired: Option<PipelineInstruction>,
    /// Instructions that finished their stage but could not move because the next one was occupied.
    pub stalled: usize,
}

/// An ordered, fixed-topology sequence of stages for one core.
///
/// # Examples
///
/// ```
/// use mpsim_core::core::pipeline::{InstructionClass, Pipeline, PipelineInstruction};
/// use mpsim_core::Isa;
///
/// let mut pipeline = Pipeline::new(5, Isa::RiscV).unwrap();
/// let inst = PipelineInstruction::new(0, 0x01, vec![1, 2, 3], InstructionClass::Integer);
/// assert!(pipeline.try_insert(inst).is_ok());
/// assert!(pipeline.is_full());
///
/// let report = pipeline.advance();
/// assert!(report.work_done);
/// assert!(pipeline.stages()[1].is_busy());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Builds an empty pipeline whose layout is determined by `depth` and `isa`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidDepth` if `depth` is zero.
    pub fn new(depth: usize, isa: Isa) -> Result<Self, SimError> {
        Ok(Self {
            stages: build_stages(depth, isa)?,
        })
    }

    /// Number of stages.
    pub fn depth(&self) -> usize {
        self.stages.len()
    }

    /// Places `inst` in stage 0 if that stage is free.
    ///
    /// The instruction's countdown is set to stage 0's latency on entry.
    ///
    /// # Errors
    ///
    /// Returns the instruction unchanged when stage 0 is occupied. This is backpressure,
    /// not a failure.
    pub fn try_insert(&mut self, inst: PipelineInstruction) -> Result<(), PipelineInstruction> {
        match self.stages.first_mut() {
            Some(entry) if !entry.is_busy() => {
                entry.occupy(inst);
                Ok(())
            }
            _ => Err(inst),
        }
    }

    /// Advances every in-flight instruction by one cycle.
    ///
    /// Stages are visited from last to first. For each occupied stage the countdown is
    /// decremented; once it reaches zero the instruction retires (final stage), moves to a
    /// free next stage, or stays pinned at zero until the next stage clears.
    pub fn advance(&mut self) -> AdvanceReport {
        let mut report = AdvanceReport::default();
        let last = self.stages.len().saturating_sub(1);

        for i in (0..self.stages.len()).rev() {
            let Some(inst) = self.stages[i].instruction_mut() else {
                continue;
            };
            report.work_done = true;
            inst.cycles_left = inst.cycles_left.saturating_sub(1);
            if inst.cycles_left > 0 {
                continue;
            }

            if i == last {
                report.retired = self.stages[i].take();
                if let Some(retired) = &report.retired {
                    trace!(address = retired.address, "retired");
                }
            } else if self.stages[i + 1].is_busy() {
                report.stalled += 1;
            } else if let Some(inst) = self.stages[i].take() {
                self.stages[i + 1].occupy(inst);
            }
        }

        report
    }

    /// True iff stage 0 is occupied, so no instruction can enter this cycle.
    pub fn is_full(&self) -> bool {
        self.stages.first().is_some_and(Stage::is_busy)
    }

    /// True iff no stage is occupied.
    pub fn is_empty(&self) -> bool {
        !self.stages.iter().any(Stage::is_busy)
    }

    /// Number of occupied stages.
    pub fn occupancy(&self) -> usize {
        self.stages.iter().filter(|s| s.is_busy()).count()
    }

    /// Empties every stage. The topology is left untouched.
    pub fn flush(&mut self) {
        self.stages.iter_mut().for_each(Stage::clear);
    }

    /// Returns an independent copy of the current stage state.
    pub fn stages(&self) -> Vec<Stage> {
        self.stages.clone()
    }

    /// Stage names joined with arrows, e.g. `Fetch → Decode → Execute`.
    pub fn flow(&self) -> String {
        self.stages
            .iter()
            .map(|s| &*s.name)
            .collect::<Vec<_>>()
            .join(" → ")
    }
}
