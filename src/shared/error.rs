//! Errors surfaced to callers of the coordinator.
//!
//! The display strings are what the console hands back to the user, so they
//! are kept short and free of internal detail.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    #[error("Invalid floor for this elevator.")]
    InvalidFloor { elevator: String, floor: i64 },

    #[error("Floor already requested or current floor.")]
    DuplicateRequest { elevator: String, floor: u8 },

    #[error("Invalid elevator id")]
    UnknownElevator(String),
}
