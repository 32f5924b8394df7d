/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ElevatorError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `from` towards `to`, `None` when already there.
    pub fn towards(from: u8, to: u8) -> Option<Direction> {
        if to > from {
            Some(Direction::Up)
        } else if to < from {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/**
 * Movement state of a single elevator.
 *
 * Moving always carries its direction, and the door can only be open while
 * the car is standing still.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "moving")]
    Moving(Direction),
    #[serde(rename = "doorOpen")]
    DoorOpen,
}

impl Behaviour {
    pub fn is_moving(&self) -> bool {
        matches!(self, Behaviour::Moving(_))
    }

    pub fn is_door_open(&self) -> bool {
        *self == Behaviour::DoorOpen
    }

    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Behaviour::Moving(direction) => Some(direction),
            _ => None,
        }
    }
}

/**
 * Snapshot of one elevator as seen by the outside world.
 *
 * # Fields
 * - `current_floor`:   Floor the car is at (or just passed).
 * - `door_open`:       True while the car is parked with the door open.
 * - `moving`:          True while the car is stepping towards a destination.
 * - `direction`:       `up`/`down` while moving, `null` otherwise.
 * - `queue`:           Pending destinations, head first.
 * - `log`:             Most recent event messages, oldest first.
 * - `active_trace`:    Trace of the last step, empty when idle or door open.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorStatus {
    pub current_floor: u8,
    pub door_open: bool,
    pub moving: bool,
    pub direction: Option<Direction>,
    pub queue: Vec<u8>,
    pub log: Vec<String>,
    #[serde(rename = "dfa_trace")]
    pub active_trace: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RequestReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Result<(), ElevatorError>> for RequestReply {
    fn from(result: Result<(), ElevatorError>) -> Self {
        match result {
            Ok(()) => RequestReply {
                success: true,
                message: None,
            },
            Err(e) => RequestReply {
                success: false,
                message: Some(e.to_string()),
            },
        }
    }
}
