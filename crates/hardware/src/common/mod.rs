//! Common utilities and types used throughout the simulator.
//!
//! This module provides building blocks shared by every component:
//! 1. **Constants:** Synthetic workload cadence, instruction width, and execution-unit inventory.
//! 2. **Error Handling:** The crate-wide `SimError` type.
//! 3. **Register Management:** A unified, ISA-sized integer and floating-point register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{FETCH_INTERVAL, INSTRUCTION_BYTES};
pub use error::SimError;
pub use reg::RegisterFile;
