/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::io::BufRead;
use std::path::PathBuf;
use std::thread::Builder;

/* Custom libraries */
use console::Command;
use coordinator::Coordinator;
use shared::ElevatorStatus;

/* Modules */
mod config;
mod console;
mod coordinator;
mod elevator;
mod shared;

/// Simulated elevators restricted to even or odd floors.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the length of one time unit in milliseconds
    #[clap(long)]
    time_unit_ms: Option<u64>,
}

/* Main */
fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load the configuration
    let mut config = unwrap_or_exit!(config::load_config(&args.config));
    if let Some(time_unit_ms) = args.time_unit_ms {
        config.simulation.time_unit_ms = time_unit_ms;
        unwrap_or_exit!(config.validate());
    }

    // Initialize channels
    let (state_tx, state_rx) = cbc::unbounded::<(String, ElevatorStatus)>();

    // Start the elevators
    let coordinator = Coordinator::new(&config, state_tx)?;

    // Trace every published state change
    Builder::new()
        .name("state_logger".into())
        .spawn(move || {
            for (id, status) in state_rx.iter() {
                debug!(
                    "{}: floor {} door_open={} moving={} queue={:?} trace='{}'",
                    id,
                    status.current_floor,
                    status.door_open,
                    status.moving,
                    status.queue,
                    status.active_trace
                );
            }
        })?;

    info!(
        "Elevators {:?} ready, type 'help' for commands",
        coordinator.elevator_ids()
    );

    // Console loop
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                println!("{}", console::parse_error_reply(e));
                continue;
            }
        };

        match console::handle(&coordinator, command) {
            Some(reply) => println!("{}", reply),
            None => break,
        }
    }

    info!("Shutting down");
    Ok(())
}
