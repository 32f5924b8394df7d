/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread::{Builder, JoinHandle};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::elevator::{Elevator, ElevatorFSM, Timer};
use crate::shared::{ElevatorError, ElevatorStatus};

/***************************************/
/*       Private data structures       */
/***************************************/
struct ElevatorHandle {
    elevator: Arc<Mutex<Elevator>>,
    timer_tx: cbc::Sender<Timer>,
    terminate_tx: cbc::Sender<()>,
    thread: Option<JoinHandle<()>>,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Owns the fleet and is the only way in from the outside.
 *
 * The set of elevators is fixed when the coordinator is built. Each elevator
 * gets a timer thread; requests lock that elevator only, so elevators never
 * wait on each other. Dropping the coordinator stops and joins every thread.
 */
pub struct Coordinator {
    elevators: BTreeMap<String, ElevatorHandle>,
    state_tx: cbc::Sender<(String, ElevatorStatus)>,
}

impl Coordinator {
    pub fn new(
        config: &Config,
        state_tx: cbc::Sender<(String, ElevatorStatus)>,
    ) -> std::io::Result<Coordinator> {
        let mut elevators = BTreeMap::new();

        for entry in &config.elevators {
            let elevator = Arc::new(Mutex::new(Elevator::new(
                &entry.id,
                entry.floors,
                config.simulation.log_capacity,
            )));
            let (timer_tx, timer_rx) = cbc::unbounded::<Timer>();
            let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

            let elevator_fsm = ElevatorFSM::new(
                elevator.clone(),
                &config.simulation,
                timer_rx,
                state_tx.clone(),
                terminate_rx,
            );
            let thread = Builder::new()
                .name(format!("elevator_fsm_{}", entry.id))
                .spawn(move || elevator_fsm.run())?;

            info!("Elevator {} serving {:?} floors", entry.id, entry.floors);
            elevators.insert(
                entry.id.clone(),
                ElevatorHandle {
                    elevator,
                    timer_tx,
                    terminate_tx,
                    thread: Some(thread),
                },
            );
        }

        Ok(Coordinator {
            elevators,
            state_tx,
        })
    }

    pub fn elevator_ids(&self) -> Vec<String> {
        self.elevators.keys().cloned().collect()
    }

    pub fn floors(&self, elevator_id: &str) -> Result<&'static [u8], ElevatorError> {
        let handle = self.handle(elevator_id)?;
        let floors = handle.elevator.lock().floor_set().floors();
        Ok(floors)
    }

    /// True iff `floor` is one the elevator may stop at; unknown ids are never valid.
    pub fn validate_floor(&self, elevator_id: &str, floor: u8) -> bool {
        match self.handle(elevator_id) {
            Ok(handle) => handle.elevator.lock().validate_floor(floor),
            Err(_) => false,
        }
    }

    pub fn request_floor(&self, elevator_id: &str, floor: u8) -> Result<(), ElevatorError> {
        let handle = self.handle(elevator_id)?;
        let mut elevator = handle.elevator.lock();

        match elevator.request_floor(floor) {
            Ok(timer) => {
                // The car just left idle, so this is its only outstanding timer
                if let Some(timer) = timer {
                    if handle.timer_tx.send(timer).is_err() {
                        warn!("{}: timer thread is gone, request will not be served", elevator_id);
                    }
                }
                let _ = self.state_tx.send((elevator_id.to_string(), elevator.status()));
                Ok(())
            }
            Err(e) => {
                warn!("{}: rejected request for floor {}: {}", elevator_id, floor, e);
                Err(e)
            }
        }
    }

    pub fn get_status(&self, elevator_id: &str) -> Result<ElevatorStatus, ElevatorError> {
        let handle = self.handle(elevator_id)?;
        let status = handle.elevator.lock().status();
        Ok(status)
    }

    fn handle(&self, elevator_id: &str) -> Result<&ElevatorHandle, ElevatorError> {
        self.elevators
            .get(elevator_id)
            .ok_or_else(|| ElevatorError::UnknownElevator(elevator_id.to_string()))
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        for handle in self.elevators.values() {
            let _ = handle.terminate_tx.send(());
        }
        for (id, handle) in self.elevators.iter_mut() {
            if let Some(thread) = handle.thread.take() {
                if thread.join().is_err() {
                    warn!("{}: timer thread panicked", id);
                }
            }
        }
    }
}
