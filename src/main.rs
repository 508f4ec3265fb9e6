// Airport Ops Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/airport-ops-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/airport-ops-simulator --sink file --sink-path events.jsonl --seed 7 --verbose
// ```

use airport_ops_simulator::simulation::{
    LoggingConfig, LoggingGuard, ShutdownSignal, SimulationOrchestrator, SimulationStatistics,
};
use airport_ops_simulator::sink::build_sink;
use airport_ops_simulator::types::config::CliArgs;
use airport_ops_simulator::types::SimulationConfig;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let _logging_guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Install the logging preset selected by the CLI flags
fn init_logging(args: &CliArgs) -> Result<LoggingGuard> {
    LoggingConfig::from_cli(args).init().map_err(|e| anyhow!(e))
}

fn run(args: CliArgs) -> Result<()> {
    info!("Starting Airport Ops Simulator");

    let dry_run = args.dry_run;
    let config =
        SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_startup_banner(&config);

    // A run without a working sink would silently drop every record
    let mut sink = build_sink(&config.sink)
        .with_context(|| format!("Could not establish the {} sink", config.sink.kind))?;

    let shutdown = ShutdownSignal::new();
    shutdown.install_ctrlc_handler().context("Failed to install Ctrl-C handler")?;

    let mut orchestrator =
        SimulationOrchestrator::new(config).context("Failed to initialize simulation")?;

    let outcome = orchestrator.run(&mut sink, &shutdown);
    print_final_statistics(orchestrator.statistics());
    if let Err(e) = &outcome {
        error!(
            "{} error stopped the run (recoverable on restart: {})",
            e.category(),
            e.is_recoverable()
        );
    }
    let reason = outcome.context("Simulation halted")?;

    info!("Airport Ops Simulator stopped: {:?}", reason);
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Airport Ops Simulator");
    eprintln!("=====================");
    eprintln!("Time-compressed flight-operations event stream for a hub-and-spoke network");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!(
        "  Hub: {} ({:.4}, {:.4})",
        config.hub_airport, config.hub_latitude, config.hub_longitude
    );
    eprintln!("  Spokes: {}", config.spoke_airports.join(", "));
    eprintln!("  Active Flights: {}", config.max_active_flights);
    eprintln!(
        "  Time Step: {} simulated minutes every {:.2}s",
        config.time_step_minutes, config.tick_interval_secs
    );
    eprintln!("  Taxi Window: {} minutes", config.taxi_window_minutes);
    eprintln!("  Delivery Policy: {}", config.delivery_policy);
    eprintln!("  Sink: {}", config.sink.kind);
    if let Some(endpoint) = &config.sink.endpoint {
        eprintln!("  Endpoint: {}", endpoint);
    }
    if let Some(path) = &config.sink.path {
        eprintln!("  Output Path: {}", path);
    }
    match config.max_ticks {
        Some(ticks) => eprintln!("  Ticks: {}", ticks),
        None => eprintln!("  Ticks: until interrupted"),
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

/// Print the shutdown report
fn print_final_statistics(statistics: &SimulationStatistics) {
    eprintln!();
    eprintln!("{}", statistics);
}
