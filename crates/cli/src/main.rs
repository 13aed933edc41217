//! Multi-core pipeline simulator CLI.
//!
//! This binary runs one simulation from the command line. It performs:
//! 1. **Configuration:** Loads a YAML/JSON file or falls back to built-in defaults.
//! 2. **Run:** Builds the simulator and runs every core for the requested cycle count.
//! 3. **Interrupt:** Ctrl-C or SIGTERM stops the run cooperatively.
//! 4. **Report:** Prints statistics as a text report or as JSON, partial ones after an interrupt.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mpsim_core::config::Config;
use mpsim_core::core::pipeline::Pipeline;
use mpsim_core::{Simulator, Statistics};

#[derive(Parser, Debug)]
#[command(
    name = "mpsim",
    author,
    version,
    about = "Cycle-level multi-core processor pipeline simulator",
    long_about = "Advance synthetic instructions through a configurable pipeline on every simulated core and report utilization and throughput.\n\nExamples:\n  mpsim\n  mpsim -c configs/default.yaml -n 5000\n  mpsim -c configs/x86.json --show-pipeline --json"
)]
struct Cli {
    /// Configuration file (.yaml, .yml or .json). Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of cycles to simulate.
    #[arg(short = 'n', long, default_value_t = 1000)]
    cycles: u64,

    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,

    /// Print the stage flow of the configured pipeline before running.
    #[arg(long)]
    show_pipeline: bool,

    /// Print statistics as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides `level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { "info" });

    let config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            error!(path = %path.display(), error = %e, "failed to load configuration");
            process::exit(1);
        }),
        None => {
            info!("no configuration file given; using built-in defaults");
            Config::default()
        }
    };

    print_config(&config);

    if cli.show_pipeline {
        print_pipeline(&config);
    }

    let sim = Simulator::new(config).map(Arc::new).unwrap_or_else(|e| {
        error!(error = %e, "failed to create simulator");
        process::exit(1);
    });

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let sim = Arc::clone(&sim);
        let interrupted = Arc::clone(&interrupted);
        if let Err(e) = ctrlc::set_handler(move || interrupt(&sim, &interrupted)) {
            warn!(error = %e, "cannot install interrupt handler; Ctrl-C will abort the run");
        }
    }

    if let Err(e) = sim.run(cli.cycles) {
        error!(error = %e, "simulation failed");
        process::exit(1);
    }
    if interrupted.load(Ordering::Acquire) {
        info!("simulation terminated by signal; reporting partial statistics");
    }

    let stats = sim.statistics();
    if let Err(e) = report(&stats, cli.json) {
        error!(error = %e, "failed to write statistics");
        process::exit(1);
    }
}

/// Signal handler body: records the interrupt and stops the active run.
///
/// Blocks until the run's workers have exited. Repeated signals after the run ends are
/// no-ops.
fn interrupt(sim: &Simulator, interrupted: &AtomicBool) {
    if !interrupted.swap(true, Ordering::AcqRel) {
        info!("interrupt received; stopping simulation");
    }
    sim.shutdown();
}

/// Prints a one-screen summary of the effective configuration.
fn print_config(config: &Config) {
    let p = &config.processor;
    let c = &config.cache;
    println!("Configuration:");
    println!(
        "  Cores: {}  Clock: {} MHz  ISA: {}  Pipeline depth: {}",
        p.num_cores, p.clock_frequency_mhz, p.isa, p.pipeline_depth
    );
    println!(
        "  Coherence: {}  Interconnect: {} ({} GB/s)  Memory latency: {} cycles",
        config.memory.coherence_protocol,
        config.interconnect.topology,
        config.interconnect.bandwidth_gbps,
        config.memory.latency
    );
    for (name, level) in [("L1", &c.l1), ("L2", &c.l2), ("L3", &c.l3)] {
        println!(
            "  {name}: {} KB, {}-way, {} cycles",
            level.size_kb, level.associativity, level.latency
        );
    }
    println!("  Workload: {}", config.workload.path);
    println!();
}

/// Prints the stage flow and per-stage latency of the configured pipeline.
fn print_pipeline(config: &Config) {
    match Pipeline::new(config.processor.pipeline_depth, config.processor.isa) {
        Ok(pipeline) => {
            println!("Pipeline ({} stages):", pipeline.depth());
            println!("  {}", pipeline.flow());
            for (i, stage) in pipeline.stages().iter().enumerate() {
                println!("  [{i:>2}] {:<12} latency {}", stage.name, stage.latency);
            }
            println!();
        }
        Err(e) => error!(error = %e, "cannot build pipeline"),
    }
}

fn report(stats: &Statistics, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        stats.print()?;
    }
    Ok(())
}
