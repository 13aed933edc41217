//! Pipeline stage slots.

use std::borrow::Cow;

use serde::Serialize;

use super::instruction::PipelineInstruction;

/// One pipeline position.
///
/// A stage holds at most one instruction. Its busy flag is derived from the slot, so
/// the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    /// Semantic label such as `Fetch` or `Writeback`.
    pub name: Cow<'static, str>,
    /// Cycles an instruction spends in this stage; always at least 1.
    pub latency: u32,
    slot: Option<PipelineInstruction>,
}

impl Stage {
    /// Creates an empty stage. A latency of zero is raised to one.
    pub fn new(name: impl Into<Cow<'static, str>>, latency: u32) -> Self {
        Self {
            name: name.into(),
            latency: latency.max(1),
            slot: None,
        }
    }

    /// Returns true if an instruction occupies this stage.
    pub const fn is_busy(&self) -> bool {
        self.slot.is_some()
    }

    /// The occupying instruction, if any.
    pub const fn instruction(&self) -> Option<&PipelineInstruction> {
        self.slot.as_ref()
    }

    pub(super) fn instruction_mut(&mut self) -> Option<&mut PipelineInstruction> {
        self.slot.as_mut()
    }

    /// Places `inst` in this stage and arms its countdown with this stage's latency.
    pub(super) fn occupy(&mut self, mut inst: PipelineInstruction) {
        inst.cycles_left = self.latency;
        self.slot = Some(inst);
    }

    pub(super) fn take(&mut self) -> Option<PipelineInstruction> {
        self.slot.take()
    }

    pub(super) fn clear(&mut self) {
        self.slot = None;
    }
}
