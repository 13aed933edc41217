//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the multi-core simulator. It provides:
//! 1. **Per-core counters:** Cycles, fetched and retired instructions, busy cycles, and stalls.
//! 2. **Aggregates:** Total instructions and the per-core average IPC.
//! 3. **Placeholders:** Cache, memory, and interconnect figures reserved for a memory model.
//! 4. **Reporting:** Sectioned text report and JSON serialization.

use std::io::{self, Write};

use serde::Serialize;

/// Counters owned by a single core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoreStats {
    /// Cycles elapsed on this core.
    pub cycles: u64,
    /// Instructions that left the final pipeline stage.
    pub instructions_retired: u64,
    /// Instructions accepted into the first pipeline stage.
    pub instructions_fetched: u64,
    /// Cycles in which the pipeline did any work or accepted an instruction.
    pub busy_cycles: u64,
    /// Stage-cycles in which a finished instruction was blocked by an occupied successor.
    pub stall_cycles: u64,
}

impl CoreStats {
    /// Fraction of elapsed cycles that were busy; 0 before the first cycle.
    pub fn utilization(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.busy_cycles as f64 / self.cycles as f64
        }
    }
}

/// Simulator-wide statistics, recomputed from per-core counters after each run.
///
/// `ipc` is the average per-core throughput: total retired instructions divided by
/// `total_cycles × cores`. It is not the sum across cores.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Cycle count requested by the last run.
    pub total_cycles: u64,
    /// Instructions retired across all cores.
    pub instructions_executed: u64,
    /// Average instructions per cycle per core.
    pub ipc: f64,
    /// Not modeled; always 0.
    pub cache_hit_rate: f64,
    /// Busy fraction of each core, indexed by core id.
    pub core_utilization: Vec<f64>,
    /// Not modeled; always 0.
    pub memory_access_latency: f64,
    /// Not modeled; always 0.
    pub interconnect_utilization: f64,
    /// Raw counters of each core, indexed by core id.
    pub per_core: Vec<CoreStats>,
    /// Wall-clock duration of the last run.
    pub host_seconds: f64,
}

/// Section names for selective report output.
///
/// Pass an empty slice to [`Statistics::write_report`] to write all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "cores", "memory"];

const RULE_HEAVY: &str = "==========================================================";
const RULE_LIGHT: &str = "----------------------------------------------------------";

impl Statistics {
    /// Zeroed statistics shaped for `num_cores` cores.
    pub fn with_cores(num_cores: usize) -> Self {
        Self {
            core_utilization: vec![0.0; num_cores],
            per_core: vec![CoreStats::default(); num_cores],
            ..Self::default()
        }
    }

    /// Derives aggregate statistics from per-core counters after a run of `cycles` cycles.
    ///
    /// # Arguments
    ///
    /// * `cycles` - Requested cycle count of the run.
    /// * `per_core` - Counters of every core, in core-id order.
    /// * `host_seconds` - Wall-clock time spent running.
    pub fn from_cores(cycles: u64, per_core: Vec<CoreStats>, host_seconds: f64) -> Self {
        let instructions_executed = per_core.iter().map(|c| c.instructions_retired).sum();
        let denom = cycles as f64 * per_core.len() as f64;
        let ipc = if denom > 0.0 {
            instructions_executed as f64 / denom
        } else {
            0.0
        };

        Self {
            total_cycles: cycles,
            instructions_executed,
            ipc,
            core_utilization: per_core.iter().map(CoreStats::utilization).collect(),
            per_core,
            host_seconds,
            ..Self::default()
        }
    }

    /// Number of cores these statistics describe.
    pub fn num_cores(&self) -> usize {
        self.core_utilization.len()
    }

    /// Writes the requested report sections.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"cores"`, or `"memory"`.
    /// Pass an empty slice to write every section.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn write_report<W: Write>(&self, out: &mut W, sections: &[&str]) -> io::Result<()> {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| *x == s);

        writeln!(out, "\n{RULE_HEAVY}")?;
        writeln!(out, "MULTI-CORE SIMULATION STATISTICS")?;
        writeln!(out, "{RULE_HEAVY}")?;

        if want("summary") {
            writeln!(out, "host_seconds             {:.4} s", self.host_seconds)?;
            writeln!(out, "sim_cycles               {}", self.total_cycles)?;
            writeln!(out, "sim_cores                {}", self.num_cores())?;
            writeln!(out, "sim_insts                {}", self.instructions_executed)?;
            writeln!(out, "sim_ipc                  {:.4}", self.ipc)?;
            writeln!(out, "{RULE_LIGHT}")?;
        }
        if want("cores") {
            writeln!(out, "CORE BREAKDOWN")?;
            for (id, util) in self.core_utilization.iter().enumerate() {
                let c = self.per_core.get(id).copied().unwrap_or_default();
                writeln!(
                    out,
                    "  core{:<3} util: {:>6.2}% | retired: {:<8} | fetched: {:<8} | stalls: {}",
                    id,
                    util * 100.0,
                    c.instructions_retired,
                    c.instructions_fetched,
                    c.stall_cycles
                )?;
            }
            writeln!(out, "{RULE_LIGHT}")?;
        }
        if want("memory") {
            writeln!(out, "MEMORY HIERARCHY (not modeled)")?;
            writeln!(out, "  cache.hit_rate         {:.2}%", self.cache_hit_rate * 100.0)?;
            writeln!(out, "  mem.access_latency     {:.2}", self.memory_access_latency)?;
            writeln!(
                out,
                "  noc.utilization        {:.2}%",
                self.interconnect_utilization * 100.0
            )?;
        }
        writeln!(out, "{RULE_HEAVY}")
    }

    /// Prints only the requested report sections to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn print_sections(&self, sections: &[&str]) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_report(&mut lock, sections)
    }

    /// Prints all report sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn print(&self) -> io::Result<()> {
        self.print_sections(&[])
    }
}
