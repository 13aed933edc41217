//! Execution units.
//!
//! Every core carries a fixed inventory of functional units:
//! 1. **ALU:** Integer arithmetic, two units.
//! 2. **FPU:** Floating-point arithmetic, one three-stage unit.
//! 3. **LSU:** Load/store, one unit.
//! 4. **Branch:** Branch resolution, one unit.
//!
//! The inventory describes capacity only. Instructions are not dispatched to units, so
//! the busy flags change only through `release_all` on reset.

use std::collections::BTreeMap;
use std::fmt;

use crate::common::constants::{
    ALU_COUNT, ALU_STAGES, BRANCH_UNIT_COUNT, BRANCH_UNIT_STAGES, FPU_COUNT, FPU_STAGES,
    LSU_COUNT, LSU_STAGES,
};
use crate::core::pipeline::InstructionClass;

/// Kind of functional unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitKind {
    /// Integer ALU.
    Alu,
    /// Floating-point unit.
    Fpu,
    /// Load/store unit.
    LoadStore,
    /// Branch unit.
    Branch,
}

impl UnitKind {
    /// The unit pool an instruction class would be dispatched to. System
    /// instructions have no dedicated unit.
    pub const fn for_class(class: InstructionClass) -> Option<Self> {
        match class {
            InstructionClass::Integer => Some(Self::Alu),
            InstructionClass::Float => Some(Self::Fpu),
            InstructionClass::Memory => Some(Self::LoadStore),
            InstructionClass::Branch => Some(Self::Branch),
            InstructionClass::System => None,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Alu => "ALU",
            Self::Fpu => "FPU",
            Self::LoadStore => "LoadStore",
            Self::Branch => "Branch",
        })
    }
}

/// A single functional unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionUnit {
    /// Unit kind.
    pub kind: UnitKind,
    /// Whether the unit is occupied.
    pub busy: bool,
    /// Internal pipeline stages of the unit.
    pub stages: u32,
}

impl ExecutionUnit {
    /// Creates an idle unit.
    pub const fn new(kind: UnitKind, stages: u32) -> Self {
        Self {
            kind,
            busy: false,
            stages,
        }
    }
}

/// Per-core unit pools keyed by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionUnits {
    pools: BTreeMap<UnitKind, Vec<ExecutionUnit>>,
}

impl ExecutionUnits {
    /// The standard inventory: 2 ALUs, 1 FPU, 1 load/store unit, 1 branch unit.
    pub fn standard() -> Self {
        let pools = [
            (UnitKind::Alu, ALU_COUNT, ALU_STAGES),
            (UnitKind::Fpu, FPU_COUNT, FPU_STAGES),
            (UnitKind::LoadStore, LSU_COUNT, LSU_STAGES),
            (UnitKind::Branch, BRANCH_UNIT_COUNT, BRANCH_UNIT_STAGES),
        ]
        .into_iter()
        .map(|(kind, count, stages)| (kind, vec![ExecutionUnit::new(kind, stages); count]))
        .collect();
        Self { pools }
    }

    /// Units of one kind.
    pub fn pool(&self, kind: UnitKind) -> &[ExecutionUnit] {
        self.pools.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Mutable access to the units of one kind.
    pub fn pool_mut(&mut self, kind: UnitKind) -> &mut [ExecutionUnit] {
        self.pools
            .get_mut(&kind)
            .map(Vec::as_mut_slice)
            .unwrap_or_default()
    }

    /// Number of units of one kind.
    pub fn count(&self, kind: UnitKind) -> usize {
        self.pool(kind).len()
    }

    /// True if any unit is busy.
    pub fn any_busy(&self) -> bool {
        self.pools.values().flatten().any(|u| u.busy)
    }

    /// Marks every unit idle.
    pub fn release_all(&mut self) {
        self.pools
            .values_mut()
            .flatten()
            .for_each(|u| u.busy = false);
    }

    /// Iterates over all units in kind order.
    pub fn iter(&self) -> impl Iterator<Item = &ExecutionUnit> {
        self.pools.values().flatten()
    }
}

impl Default for ExecutionUnits {
    fn default() -> Self {
        Self::standard()
    }
}
