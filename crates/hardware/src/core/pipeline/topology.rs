//! Stage-layout construction.
//!
//! Topology is a pure function of `(depth, isa)`:
//! 1. **Classic RISC:** depth 5 on RISC-V or MIPS.
//! 2. **Simplified x86:** depth 6 on x86, with a two-cycle decode.
//! 3. **Deep x86:** depth 11 and above on x86, padded with `ExtraStageN` before the
//!    execute tail so the last stage stays `Writeback`.
//! 4. **Generic:** everything else. Stage 0 is `Fetch` and, from depth 2, the last stage
//!    is `Writeback`.

use std::borrow::Cow;

use crate::common::constants::X86_DEEP_BASE_STAGES;
use crate::common::error::SimError;
use crate::isa::Isa;

use super::stage::Stage;

/// Front end of the deep x86 layout, up to and including `Dispatch`.
const X86_DEEP_FRONT: [&str; 8] = [
    "Fetch1", "Fetch2", "Decode1", "Decode2", "Decode3", "Rename", "Schedule", "Dispatch",
];

/// Back end shared by every multi-stage layout.
const TAIL: [&str; 3] = ["Execute", "Memory", "Writeback"];

/// Builds the stage sequence for a pipeline of `depth` stages targeting `isa`.
///
/// # Arguments
///
/// * `depth` - Number of stages; must be at least 1.
/// * `isa` - Target architecture.
///
/// # Returns
///
/// Exactly `depth` empty stages.
///
/// # Errors
///
/// Returns `SimError::InvalidDepth` if `depth` is zero.
pub fn build_stages(depth: usize, isa: Isa) -> Result<Vec<Stage>, SimError> {
    if depth == 0 {
        return Err(SimError::InvalidDepth(depth));
    }

    let stages = match (depth, isa) {
        (5, Isa::RiscV | Isa::Mips) => ["Fetch", "Decode", "Execute", "Memory", "Writeback"]
            .into_iter()
            .map(|name| Stage::new(name, 1))
            .collect(),
        (6, Isa::X86) => vec![
            Stage::new("Fetch", 1),
            Stage::new("Decode", 2),
            Stage::new("Issue", 1),
            Stage::new("Execute", 1),
            Stage::new("Memory", 1),
            Stage::new("Writeback", 1),
        ],
        (d, Isa::X86) if d >= X86_DEEP_BASE_STAGES => deep_x86(d),
        (d, _) => generic(d),
    };

    Ok(stages)
}

fn deep_x86(depth: usize) -> Vec<Stage> {
    let extra = depth - X86_DEEP_BASE_STAGES;
    X86_DEEP_FRONT
        .into_iter()
        .map(|name| Stage::new(name, 1))
        .chain((1..=extra).map(|n| Stage::new(format!("ExtraStage{n}"), 1)))
        .chain(TAIL.into_iter().map(|name| Stage::new(name, 1)))
        .collect()
}

fn generic(depth: usize) -> Vec<Stage> {
    match depth {
        1 => vec![Stage::new("Fetch", 1)],
        2 => vec![Stage::new("Fetch", 1), Stage::new("Writeback", 1)],
        3 => vec![
            Stage::new("Fetch", 1),
            Stage::new("Execute", 1),
            Stage::new("Writeback", 1),
        ],
        d => (0..d)
            .map(|i| {
                let name: Cow<'static, str> = match i {
                    0 => "Fetch".into(),
                    1 => "Decode".into(),
                    i if i == d - 1 => "Writeback".into(),
                    i if i == d - 2 => "Execute".into(),
                    2 => "Issue".into(),
                    3 => "Memory".into(),
                    i => format!("Stage{i}").into(),
                };
                Stage::new(name, 1)
            })
            .collect(),
    }
}
