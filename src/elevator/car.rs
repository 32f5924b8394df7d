/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::elevator::event_log::EventLog;
use crate::elevator::path_trace;
use crate::elevator::FloorSet;
use crate::shared::{Behaviour, Direction, ElevatorError, ElevatorStatus};

/// Follow-up event a transition asks to have fired later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Step,
    DoorClose,
}

impl Timer {
    pub fn delay(&self, config: &SimulationConfig) -> Duration {
        match *self {
            Timer::Step => config.step_delay(),
            Timer::DoorClose => config.door_delay(),
        }
    }
}

/**
 * State of one simulated elevator car.
 *
 * Every transition returns the timer it wants armed next, if any. The caller
 * owns the clock; nothing in here sleeps or spawns.
 *
 * # Fields
 * - `id`:              Identifier used in log output and errors.
 * - `floor_set`:       Floors this car may stop at.
 * - `floor`:           Current floor, always a member of `floor_set`.
 * - `behaviour`:       Idle, moving in a direction, or parked with the door open.
 * - `queue`:           Pending destinations, served head first.
 * - `log`:             Bounded history of event messages.
 * - `active_trace`:    Trace of the step just taken, cleared on arrival.
 */
#[derive(Debug)]
pub struct Elevator {
    id: String,
    floor_set: FloorSet,
    floor: u8,
    behaviour: Behaviour,
    queue: VecDeque<u8>,
    log: EventLog,
    active_trace: Option<String>,
}

impl Elevator {
    pub fn new(id: &str, floor_set: FloorSet, log_capacity: usize) -> Elevator {
        Elevator {
            id: id.to_string(),
            floor_set,
            floor: floor_set.floors()[0],
            behaviour: Behaviour::Idle,
            queue: VecDeque::new(),
            log: EventLog::new(log_capacity),
            active_trace: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn floor_set(&self) -> FloorSet {
        self.floor_set
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn behaviour(&self) -> Behaviour {
        self.behaviour
    }

    pub fn is_idle(&self) -> bool {
        self.behaviour == Behaviour::Idle
    }

    pub fn queue(&self) -> Vec<u8> {
        self.queue.iter().copied().collect()
    }

    #[cfg(test)]
    pub fn active_trace(&self) -> Option<&str> {
        self.active_trace.as_deref()
    }

    pub fn validate_floor(&self, floor: u8) -> bool {
        self.floor_set.contains(floor)
    }

    /**
     * Queues `floor` as a new destination.
     *
     * An idle car takes its first step right away; the returned timer must
     * then be armed by the caller. Rejected requests leave the car untouched.
     */
    pub fn request_floor(&mut self, floor: u8) -> Result<Option<Timer>, ElevatorError> {
        if !self.validate_floor(floor) {
            return Err(ElevatorError::InvalidFloor {
                elevator: self.id.clone(),
                floor: floor.into(),
            });
        }
        if floor == self.floor || self.queue.contains(&floor) {
            return Err(ElevatorError::DuplicateRequest {
                elevator: self.id.clone(),
                floor,
            });
        }

        self.queue.push_back(floor);
        self.record(format!("Floor {} requested.", floor));
        info!("{}: floor {} requested, queue {:?}", self.id, floor, self.queue);

        if self.is_idle() {
            Ok(self.advance_step())
        } else {
            Ok(None)
        }
    }

    /// One movement tick towards the head of the queue.
    pub fn advance_step(&mut self) -> Option<Timer> {
        let target = match self.queue.front() {
            Some(&target) => target,
            None => {
                self.behaviour = Behaviour::Idle;
                return None;
            }
        };

        let direction = match Direction::towards(self.floor, target) {
            Some(direction) => direction,
            None => return Some(self.arrive(target)),
        };

        let previous = self.floor;
        self.floor = self.floor_set.next_floor(previous, direction);
        self.behaviour = Behaviour::Moving(direction);
        self.record(format!("Moving {} to floor {}.", direction, self.floor));

        let trace = path_trace(self.floor_set, previous, self.floor);
        debug!("{}: {} (target {})", self.id, trace, target);
        self.record(trace.clone());
        self.active_trace = Some(trace);

        Some(Timer::Step)
    }

    fn arrive(&mut self, target: u8) -> Timer {
        self.behaviour = Behaviour::DoorOpen;
        self.record(format!("Arrived at floor {}.", target));
        self.record(path_trace(self.floor_set, self.floor, target));
        self.active_trace = None;
        self.queue.pop_front();
        info!("{}: arrived at floor {}, door open", self.id, target);

        Timer::DoorClose
    }

    /// Fired by the door timer; resumes service if more floors are queued.
    pub fn close_door(&mut self) -> Option<Timer> {
        if !self.behaviour.is_door_open() {
            warn!(
                "{}: door close fired while {:?}, ignoring",
                self.id, self.behaviour
            );
            return None;
        }

        self.behaviour = Behaviour::Idle;
        self.record(format!(
            "Door closed at floor {}. Waiting for input.",
            self.floor
        ));
        self.active_trace = None;
        debug!("{}: door closed at floor {}", self.id, self.floor);

        if self.queue.is_empty() {
            None
        } else {
            self.advance_step()
        }
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            current_floor: self.floor,
            door_open: self.behaviour.is_door_open(),
            moving: self.behaviour.is_moving(),
            direction: self.behaviour.direction(),
            queue: self.queue(),
            log: self.log.to_vec(),
            active_trace: self.active_trace.clone().unwrap_or_default(),
        }
    }

    fn record(&mut self, message: String) {
        self.log.push(message);
    }
}
