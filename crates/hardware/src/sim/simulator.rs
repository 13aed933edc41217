//! Simulator: owns every core and the run-level state.
//!
//! This module coordinates parallel execution of independent cores. It performs:
//! 1. **Construction:** One core per configured core count, with failures attributed to a core index.
//! 2. **Run:** One named worker thread per core, each stepping its core under that core's lock.
//! 3. **Cancellation:** Cooperative stop observed by workers between cycles.
//! 4. **Aggregation:** Statistics recomputed wholesale from per-core counters after every run.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Instant;

use parking_lot::{Mutex, MutexGuard, RwLock};
use tracing::{debug, info, warn};

use super::signal::StopSignal;
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Core;
use crate::core::pipeline::Stage;
use crate::stats::{CoreStats, Statistics};

/// Top-level multi-core simulator.
///
/// All operations take `&self`, so a simulator can be shared across threads: one thread
/// runs while another observes statistics or requests shutdown.
///
/// # Examples
///
/// ```
/// use mpsim_core::{Config, Simulator};
///
/// let sim = Simulator::new(Config::default()).unwrap();
/// sim.run(100).unwrap();
///
/// let stats = sim.statistics();
/// assert_eq!(stats.total_cycles, 100);
/// assert_eq!(stats.core_utilization.len(), 4);
/// assert!(stats.core_utilization.iter().all(|&u| u > 0.0 && u < 1.0));
/// ```
#[derive(Debug)]
pub struct Simulator {
    config: Config,
    cores: Vec<Mutex<Core>>,
    /// Claimed with compare-and-set; at most one run proceeds.
    running: AtomicBool,
    stop: Mutex<StopSignal>,
    /// Held for the whole of a run, workers and aggregation included.
    run_gate: Mutex<()>,
    stats: RwLock<Statistics>,
    clock: AtomicU64,
}

impl Simulator {
    /// Creates a simulator with one core per `config.processor.num_cores`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the configuration fails validation and
    /// `SimError::CoreInit` naming the first core that could not be built.
    pub fn new(config: Config) -> Result<Self, SimError> {
        config.validate()?;
        let num_cores = config.processor.num_cores;

        let cores = (0..num_cores)
            .map(|index| {
                Core::new(index, &config)
                    .map(Mutex::new)
                    .map_err(|source| SimError::CoreInit {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            cores = num_cores,
            isa = %config.processor.isa,
            depth = config.processor.pipeline_depth,
            "simulator constructed"
        );

        Ok(Self {
            config,
            cores,
            running: AtomicBool::new(false),
            stop: Mutex::new(StopSignal::new()),
            run_gate: Mutex::new(()),
            stats: RwLock::new(Statistics::with_cores(num_cores)),
            clock: AtomicU64::new(0),
        })
    }

    /// Runs every core for `cycles` cycles in parallel and blocks until all workers finish.
    ///
    /// Workers check the stop signal before each cycle and return early once it has fired.
    /// Cores are not synchronized with each other, so a stopped run may leave them at
    /// different cycle counts. Statistics are recomputed when the workers are done, even
    /// if the run was stopped or a worker failed.
    ///
    /// # Errors
    ///
    /// * `SimError::InvalidCycleCount` if `cycles` is zero; no worker is started.
    /// * `SimError::AlreadyRunning` if another run is in progress; that run is unaffected.
    /// * `SimError::WorkerSpawn` / `SimError::WorkerPanicked` if a worker could not be
    ///   started or panicked. The remaining workers are stopped.
    pub fn run(&self, cycles: u64) -> Result<(), SimError> {
        if cycles == 0 {
            return Err(SimError::InvalidCycleCount);
        }
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(cycles, "run rejected: simulation already running");
            return Err(SimError::AlreadyRunning);
        }

        let gate = self.run_gate.lock();
        let stop = self.stop.lock().clone();
        info!(cycles, cores = self.cores.len(), "simulation started");
        let started = Instant::now();

        let failure = thread::scope(|scope| {
            let handles: Vec<_> = self
                .cores
                .iter()
                .enumerate()
                .map(|(index, core)| {
                    let stop = stop.clone();
                    thread::Builder::new()
                        .name(format!("core-{index}"))
                        .spawn_scoped(scope, move || drive_core(index, core, cycles, &stop))
                        .map_err(|e| SimError::WorkerSpawn {
                            index,
                            reason: e.to_string(),
                        })
                })
                .collect();

            if handles.iter().any(Result::is_err) {
                stop.fire();
            }

            let mut failure = None;
            for (index, handle) in handles.into_iter().enumerate() {
                let err = match handle {
                    Ok(handle) => match handle.join() {
                        Ok(_) => continue,
                        Err(_) => SimError::WorkerPanicked(index),
                    },
                    Err(err) => err,
                };
                warn!(core = index, error = %err, "worker failed; stopping remaining workers");
                stop.fire();
                failure = failure.or(Some(err));
            }
            failure
        });

        let elapsed = started.elapsed().as_secs_f64();
        let stats = self.calculate_statistics(cycles, elapsed);
        info!(
            cycles,
            instructions = stats.instructions_executed,
            ipc = stats.ipc,
            host_seconds = elapsed,
            stopped = stop.is_fired(),
            "simulation finished"
        );

        self.running.store(false, Ordering::Release);
        drop(gate);

        failure.map_or(Ok(()), Err)
    }

    /// Recomputes statistics from the cores' current counters and advances the global clock.
    fn calculate_statistics(&self, cycles: u64, host_seconds: f64) -> Statistics {
        let per_core: Vec<CoreStats> = self.cores.iter().map(|c| c.lock().stats()).collect();
        let max_cycles = per_core.iter().map(|c| c.cycles).max().unwrap_or(0);
        self.clock.store(max_cycles, Ordering::Release);

        let stats = Statistics::from_cores(cycles, per_core, host_seconds);
        let mut slot = self.stats.write();
        slot.clone_from(&stats);
        stats
    }

    /// Stops an active run and waits for its workers to exit.
    ///
    /// Does nothing if no run is active. The fired signal stays fired until [`reset`], so
    /// a later run without a reset completes zero cycles.
    ///
    /// [`reset`]: Self::reset
    pub fn shutdown(&self) {
        if !self.running.load(Ordering::Acquire) {
            return;
        }
        info!("shutdown requested");
        self.stop.lock().fire();
        // The run may have claimed the flag without reaching the gate yet.
        loop {
            drop(self.run_gate.lock());
            if !self.running.load(Ordering::Acquire) {
                break;
            }
            thread::yield_now();
        }
        debug!("shutdown complete");
    }

    /// Returns the simulator to its freshly constructed state.
    ///
    /// Waits for any active run to finish, then zeroes the clock and statistics, installs a
    /// new stop signal, and resets every core in place.
    ///
    /// The running flag is left alone: it is clear once the gate is free, unless a run has
    /// claimed it and is about to take the gate, in which case that run owns it.
    pub fn reset(&self) {
        let _gate = self.run_gate.lock();
        self.clock.store(0, Ordering::Release);
        *self.stop.lock() = StopSignal::new();
        *self.stats.write() = Statistics::with_cores(self.cores.len());
        for core in &self.cores {
            core.lock().reset();
        }
        debug!("simulator reset");
    }

    /// Independent copy of the statistics from the last run.
    pub fn statistics(&self) -> Statistics {
        self.stats.read().clone()
    }

    /// Largest cycle count reached by any core in the last run; 0 after reset.
    pub fn clock(&self) -> u64 {
        self.clock.load(Ordering::Acquire)
    }

    /// True while a run is in progress.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Number of simulated cores.
    pub fn num_cores(&self) -> usize {
        self.cores.len()
    }

    /// The configuration the simulator was built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn lock_core(&self, index: usize) -> Option<MutexGuard<'_, Core>> {
        self.cores.get(index).map(|core| core.lock())
    }

    /// Calls `f` with one core locked and returns its result.
    ///
    /// The lock is released before this returns. During a run, this blocks for at most
    /// one cycle of that core.
    ///
    /// # Returns
    ///
    /// `None` if `index` is out of range.
    pub fn with_core<R>(&self, index: usize, f: impl FnOnce(&Core) -> R) -> Option<R> {
        self.lock_core(index).map(|core| f(&core))
    }

    /// Snapshot of one core's counters.
    pub fn core_stats(&self, index: usize) -> Option<CoreStats> {
        self.with_core(index, Core::stats)
    }

    /// Snapshot of one core's pipeline stages.
    pub fn pipeline_state(&self, index: usize) -> Option<Vec<Stage>> {
        self.with_core(index, Core::pipeline_state)
    }
}

/// Worker body: steps one core until `cycles` are done or the stop signal fires.
///
/// # Returns
///
/// The number of cycles completed.
fn drive_core(index: usize, core: &Mutex<Core>, cycles: u64, stop: &StopSignal) -> u64 {
    for done in 0..cycles {
        if stop.is_fired() {
            debug!(core = index, completed = done, "stop observed");
            return done;
        }
        core.lock().tick();
    }
    cycles
}
