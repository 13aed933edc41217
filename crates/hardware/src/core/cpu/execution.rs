//! Main Execution Step.
//!
//! This module implements the per-cycle behavior of a core. Each cycle performs:
//! 1. **Timing:** Increment the core's cycle counter.
//! 2. **Advance:** Move in-flight instructions one step and record retirement and stalls.
//! 3. **Fetch:** On fetch-interval cycles, offer one synthetic instruction to the pipeline.

use tracing::trace;

use super::Core;
use crate::sim::workload::SyntheticWorkload;
use crate::stats::CoreStats;

impl Core {
    /// Executes one simulated cycle.
    ///
    /// A cycle counts as busy if the pipeline held any instruction at the start of the
    /// advance pass or a new instruction was accepted. Retirement is counted from the
    /// pipeline's explicit retirement event, once per departing instruction.
    pub fn tick(&mut self) {
        self.stats.cycles += 1;

        let report = self.pipeline.advance();
        let mut busy = report.work_done;
        self.stats.stall_cycles += report.stalled as u64;
        if let Some(inst) = report.retired {
            self.stats.instructions_retired += 1;
            trace!(core = self.id, address = inst.address, "instruction retired");
        }

        if !self.pipeline.is_full() && SyntheticWorkload::fetch_due(self.stats.cycles) {
            let inst = SyntheticWorkload::instruction_at(self.pc);
            if self.pipeline.try_insert(inst).is_ok() {
                trace!(core = self.id, pc = self.pc, "instruction fetched");
                self.pc = SyntheticWorkload::next_pc(self.pc);
                self.stats.instructions_fetched += 1;
                busy = true;
            }
        }

        if busy {
            self.stats.busy_cycles += 1;
        }
    }

    /// Returns the core to its power-on state without rebuilding it.
    ///
    /// Counters, the program counter, and every register are zeroed; the pipeline is
    /// flushed and every execution unit is released. The pipeline topology is kept.
    pub fn reset(&mut self) {
        self.pc = 0;
        self.stats = CoreStats::default();
        self.pipeline.flush();
        self.regs.clear();
        self.units.release_all();
    }
}
