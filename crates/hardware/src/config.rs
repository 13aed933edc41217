//! Configuration system for the multi-core simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline processor, cache, memory, and interconnect values.
//! 2. **Structures:** Hierarchical config for processor, cache, memory, interconnect, and workload.
//! 3. **Enums:** Closed sets of legal ISA, coherence-protocol, and interconnect values.
//! 4. **Loading:** YAML and JSON parsing followed by validation.
//!
//! Every section rejects keys it does not know, so a misspelled field is a parse error
//! rather than a silent fallback to its default.
//!
//! Only the `processor` section drives behavior today. Cache, memory, interconnect, and
//! workload settings are parsed and validated so a future memory subsystem can consume them.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::isa::Isa;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of simulated cores.
    pub const NUM_CORES: usize = 4;

    /// Core clock frequency in MHz (3 GHz). Informational only.
    pub const CLOCK_FREQUENCY_MHZ: u32 = 3000;

    /// Classic five-stage pipeline.
    pub const PIPELINE_DEPTH: usize = 5;

    /// L1 cache size in KiB.
    pub const L1_SIZE_KB: u32 = 32;
    /// L1 cache associativity.
    pub const L1_ASSOCIATIVITY: u32 = 8;
    /// L1 hit latency in cycles.
    pub const L1_LATENCY: u32 = 3;

    /// L2 cache size in KiB.
    pub const L2_SIZE_KB: u32 = 256;
    /// L2 cache associativity.
    pub const L2_ASSOCIATIVITY: u32 = 8;
    /// L2 hit latency in cycles.
    pub const L2_LATENCY: u32 = 12;

    /// L3 cache size in KiB (8 MiB).
    pub const L3_SIZE_KB: u32 = 8192;
    /// L3 cache associativity.
    pub const L3_ASSOCIATIVITY: u32 = 16;
    /// L3 hit latency in cycles.
    pub const L3_LATENCY: u32 = 40;

    /// Main memory access latency in cycles.
    pub const MEMORY_LATENCY: u32 = 200;

    /// Interconnect bandwidth in GB/s.
    pub const INTERCONNECT_BANDWIDTH_GBPS: u32 = 256;

    /// Workload image path (accepted, not loaded).
    pub const WORKLOAD_PATH: &str = "workloads/default.bin";
}

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML document could not be parsed.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document could not be parsed.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parsed value is outside its legal range.
    #[error("validation error: {0}")]
    Validation(String),

    /// The file extension is not `.yaml`, `.yml`, or `.json`.
    #[error("unknown config file format: {0}")]
    UnknownFormat(String),
}

/// Cache-coherence protocol selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoherenceProtocol {
    /// Modified/Exclusive/Shared/Invalid.
    #[default]
    Mesi,
    /// MESI plus Owned.
    Moesi,
    /// Modified/Shared/Invalid.
    Msi,
    /// MESI plus Forward.
    Mesif,
    /// No coherence protocol.
    #[serde(rename = "None", alias = "none", alias = "NONE")]
    None,
}

impl fmt::Display for CoherenceProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mesi => "MESI",
            Self::Moesi => "MOESI",
            Self::Msi => "MSI",
            Self::Mesif => "MESIF",
            Self::None => "None",
        })
    }
}

/// On-chip interconnect topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterconnectTopology {
    /// Shared bus.
    Bus,
    /// Bidirectional ring.
    #[default]
    Ring,
    /// 2D mesh.
    Mesh,
    /// Full crossbar.
    Crossbar,
    /// 2D torus.
    Torus,
}

impl fmt::Display for InterconnectTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bus => "bus",
            Self::Ring => "ring",
            Self::Mesh => "mesh",
            Self::Crossbar => "crossbar",
            Self::Torus => "torus",
        })
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use mpsim_core::config::{Config, Isa};
///
/// let config = Config::default();
/// assert_eq!(config.processor.num_cores, 4);
/// assert_eq!(config.processor.isa, Isa::RiscV);
///
/// let yaml = "processor:\n  num_cores: 2\n  isa: x86\n  pipeline_depth: 6\n";
/// let config = Config::from_yaml_str(yaml).unwrap();
/// assert_eq!(config.processor.num_cores, 2);
/// assert_eq!(config.processor.isa, Isa::X86);
/// assert_eq!(config.cache.l2.size_kb, 256);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Core count, clock, ISA, and pipeline depth.
    pub processor: ProcessorConfig,
    /// Cache hierarchy (inert).
    pub cache: CacheHierarchyConfig,
    /// Main memory and coherence (inert).
    pub memory: MemoryConfig,
    /// On-chip interconnect (inert).
    pub interconnect: InterconnectConfig,
    /// Workload source (inert).
    pub workload: WorkloadConfig,
}

/// Processor settings shared by every core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessorConfig {
    /// Number of cores; must be positive.
    pub num_cores: usize,
    /// Clock frequency in MHz; must be positive. Informational only.
    pub clock_frequency_mhz: u32,
    /// Instruction-set architecture.
    pub isa: Isa,
    /// Number of pipeline stages; must be positive.
    pub pipeline_depth: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            num_cores: defaults::NUM_CORES,
            clock_frequency_mhz: defaults::CLOCK_FREQUENCY_MHZ,
            isa: Isa::default(),
            pipeline_depth: defaults::PIPELINE_DEPTH,
        }
    }
}

/// One cache level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheLevelConfig {
    /// Capacity in KiB.
    pub size_kb: u32,
    /// Number of ways; must be positive.
    pub associativity: u32,
    /// Hit latency in cycles.
    pub latency: u32,
}

/// Three-level cache hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheHierarchyConfig {
    /// Private L1.
    pub l1: CacheLevelConfig,
    /// Private L2.
    pub l2: CacheLevelConfig,
    /// Shared L3.
    pub l3: CacheLevelConfig,
}

impl Default for CacheHierarchyConfig {
    fn default() -> Self {
        Self {
            l1: CacheLevelConfig {
                size_kb: defaults::L1_SIZE_KB,
                associativity: defaults::L1_ASSOCIATIVITY,
                latency: defaults::L1_LATENCY,
            },
            l2: CacheLevelConfig {
                size_kb: defaults::L2_SIZE_KB,
                associativity: defaults::L2_ASSOCIATIVITY,
                latency: defaults::L2_LATENCY,
            },
            l3: CacheLevelConfig {
                size_kb: defaults::L3_SIZE_KB,
                associativity: defaults::L3_ASSOCIATIVITY,
                latency: defaults::L3_LATENCY,
            },
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryConfig {
    /// Access latency in cycles.
    pub latency: u32,
    /// Cache-coherence protocol.
    pub coherence_protocol: CoherenceProtocol,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            latency: defaults::MEMORY_LATENCY,
            coherence_protocol: CoherenceProtocol::default(),
        }
    }
}

/// Interconnect configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterconnectConfig {
    /// Network topology.
    pub topology: InterconnectTopology,
    /// Bandwidth in GB/s.
    pub bandwidth_gbps: u32,
}

impl Default for InterconnectConfig {
    fn default() -> Self {
        Self {
            topology: InterconnectTopology::default(),
            bandwidth_gbps: defaults::INTERCONNECT_BANDWIDTH_GBPS,
        }
    }
}

/// Workload configuration.
///
/// Instructions are generated synthetically; the path is recorded but never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkloadConfig {
    /// Path to a program image.
    pub path: String,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            path: defaults::WORKLOAD_PATH.to_string(),
        }
    }
}

impl Config {
    /// Loads and validates a configuration file.
    ///
    /// The format is chosen by extension: `.yaml`/`.yml` or `.json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, a parse error if the
    /// document is malformed or names an unsupported enum value,
    /// `ConfigError::UnknownFormat` for other extensions, and
    /// `ConfigError::Validation` for out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnknownFormat(path.display().to_string())),
        }
    }

    /// Parses and validates a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Yaml` on malformed input and `ConfigError::Validation`
    /// for out-of-range values.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` on malformed input and `ConfigError::Validation`
    /// for out-of-range values.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks ranges that the type system does not already enforce.
    ///
    /// Enumerated fields are closed at parse time, so only numeric bounds are checked here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.processor;
        if p.num_cores == 0 {
            return Err(ConfigError::Validation(
                "number of cores must be positive".to_string(),
            ));
        }
        if p.clock_frequency_mhz == 0 {
            return Err(ConfigError::Validation(
                "clock frequency must be positive".to_string(),
            ));
        }
        if p.pipeline_depth == 0 {
            return Err(ConfigError::Validation(
                "pipeline depth must be positive".to_string(),
            ));
        }
        for (name, level) in [
            ("l1", &self.cache.l1),
            ("l2", &self.cache.l2),
            ("l3", &self.cache.l3),
        ] {
            if level.associativity == 0 {
                return Err(ConfigError::Validation(format!(
                    "cache {name} associativity must be positive"
                )));
            }
        }
        Ok(())
    }
}
