/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::FloorSet;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub elevators: Vec<ElevatorConfig>,
}

/**
 * Timing and bookkeeping shared by every elevator.
 *
 * # Fields
 * - `time_unit_ms`:    Wall-clock length of one time unit.
 * - `step_time`:       Time units between two movement ticks.
 * - `door_open_time`:  Time units the door stays open after an arrival.
 * - `log_capacity`:    Number of event messages kept per elevator.
 */
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub time_unit_ms: u64,
    #[serde(default = "default_step_time")]
    pub step_time: u64,
    #[serde(default = "default_door_open_time")]
    pub door_open_time: u64,
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ElevatorConfig {
    pub id: String,
    pub floors: FloorSet,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// One day; longer delays are certainly a unit mix-up
const MAX_DELAY_MS: u64 = 24 * 60 * 60 * 1000;

fn default_step_time() -> u64 {
    2
}

fn default_door_open_time() -> u64 {
    5
}

fn default_log_capacity() -> usize {
    20
}

impl SimulationConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_time.saturating_mul(self.time_unit_ms))
    }

    pub fn door_delay(&self) -> Duration {
        Duration::from_millis(self.door_open_time.saturating_mul(self.time_unit_ms))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_unit_ms: 1000,
            step_time: default_step_time(),
            door_open_time: default_door_open_time(),
            log_capacity: default_log_capacity(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let elevator = |id: &str, floors| ElevatorConfig {
            id: id.to_string(),
            floors,
        };

        Config {
            simulation: SimulationConfig::default(),
            elevators: vec![
                elevator("E1", FloorSet::Even),
                elevator("E2", FloorSet::Even),
                elevator("E3", FloorSet::Odd),
                elevator("E4", FloorSet::Odd),
            ],
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.elevators.is_empty() {
            return Err(ConfigError::Invalid("no elevators configured".into()));
        }
        if self.simulation.time_unit_ms == 0 {
            return Err(ConfigError::Invalid("time_unit_ms must be positive".into()));
        }
        let simulation = &self.simulation;
        for (name, units) in [
            ("step_time", simulation.step_time),
            ("door_open_time", simulation.door_open_time),
        ] {
            let in_range = units
                .checked_mul(simulation.time_unit_ms)
                .map_or(false, |ms| ms <= MAX_DELAY_MS);
            if !in_range {
                return Err(ConfigError::Invalid(format!(
                    "{} of {} units at {} ms per unit is too long",
                    name, units, simulation.time_unit_ms
                )));
            }
        }
        if self.simulation.log_capacity == 0 {
            return Err(ConfigError::Invalid("log_capacity must be positive".into()));
        }

        let mut seen = HashSet::new();
        for elevator in &self.elevators {
            if !seen.insert(elevator.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate elevator id {}",
                    elevator.id
                )));
            }
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
