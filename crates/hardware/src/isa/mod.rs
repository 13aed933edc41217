//! Instruction Set Architecture descriptors.
//!
//! The simulator does not decode real instructions. The ISA selects two things:
//! 1. **Register shape:** How many integer and floating-point registers each core carries.
//! 2. **Pipeline topology:** Which named stage layout a given depth produces
//!    (see [`crate::core::pipeline::topology`]).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported instruction-set architectures.
///
/// This is a closed enumeration: configuration values outside it are rejected when the
/// configuration is parsed, so every constructed core has a known register shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Isa {
    /// RISC-V.
    #[default]
    #[serde(rename = "RISC-V", alias = "RISCV", alias = "riscv", alias = "risc-v")]
    RiscV,
    /// x86.
    #[serde(rename = "x86", alias = "X86")]
    X86,
    /// ARM.
    #[serde(rename = "ARM", alias = "Arm", alias = "arm")]
    Arm,
    /// MIPS.
    #[serde(rename = "MIPS", alias = "Mips", alias = "mips")]
    Mips,
    /// Custom experimental ISA; uses the default register shape.
    #[serde(rename = "Custom", alias = "custom")]
    Custom,
}

/// Register-file dimensions for an ISA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterShape {
    /// Number of integer registers.
    pub int_regs: usize,
    /// Number of floating-point registers.
    pub float_regs: usize,
}

impl RegisterShape {
    /// Shape used by ISAs without a dedicated entry.
    pub const DEFAULT: Self = Self {
        int_regs: 32,
        float_regs: 32,
    };
}

impl Isa {
    /// All supported ISAs, in declaration order.
    pub const ALL: [Self; 5] = [Self::RiscV, Self::X86, Self::Arm, Self::Mips, Self::Custom];

    /// Returns the integer and floating-point register counts for this ISA.
    pub const fn register_shape(self) -> RegisterShape {
        match self {
            Self::X86 => RegisterShape {
                int_regs: 16,
                float_regs: 8,
            },
            Self::Arm => RegisterShape {
                int_regs: 16,
                float_regs: 32,
            },
            Self::RiscV | Self::Mips | Self::Custom => RegisterShape::DEFAULT,
        }
    }

    /// Whether integer register 0 is hardwired to zero (`x0` / `$zero`).
    pub const fn has_zero_register(self) -> bool {
        matches!(self, Self::RiscV | Self::Mips)
    }

    /// Canonical configuration name of the ISA.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RiscV => "RISC-V",
            Self::X86 => "x86",
            Self::Arm => "ARM",
            Self::Mips => "MIPS",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for Isa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
