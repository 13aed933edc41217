//! Simulator error definitions.
//!
//! This module defines the error taxonomy surfaced by the simulator:
//! 1. **Configuration errors:** Rejected configuration, fatal to construction.
//! 2. **Invalid arguments:** Zero pipeline depth or zero cycle count, fatal to the call.
//! 3. **State conflicts:** A run requested while another is active; the active run is unaffected.
//! 4. **Worker failures:** A core thread that could not be spawned or that panicked.
//!
//! Pipeline backpressure (a full entry stage, an occupied downstream stage) is not an
//! error and never appears here.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors returned by pipeline, core, and simulator operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A pipeline was requested with zero stages.
    #[error("invalid pipeline depth {0}: a pipeline needs at least one stage")]
    InvalidDepth(usize),

    /// A core could not be constructed.
    #[error("failed to initialize core {index}: {source}")]
    CoreInit {
        /// Index of the failing core.
        index: usize,
        /// Underlying construction failure.
        #[source]
        source: Box<SimError>,
    },

    /// `run` was called with a cycle count of zero.
    #[error("cycle count must be greater than 0")]
    InvalidCycleCount,

    /// `run` was called while another run was in progress.
    #[error("simulation is already running")]
    AlreadyRunning,

    /// The worker thread for a core could not be started.
    #[error("failed to spawn worker for core {index}: {reason}")]
    WorkerSpawn {
        /// Index of the core whose worker failed to start.
        index: usize,
        /// OS-level reason.
        reason: String,
    },

    /// The worker thread for a core panicked.
    #[error("worker for core {0} panicked")]
    WorkerPanicked(usize),
}

impl SimError {
    /// Returns the index of the core this error is attributed to, if any.
    pub fn core_index(&self) -> Option<usize> {
        match self {
            Self::CoreInit { index, .. } | Self::WorkerSpawn { index, .. } => Some(*index),
            Self::WorkerPanicked(index) => Some(*index),
            _ => None,
        }
    }
}
