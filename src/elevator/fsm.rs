use crate::config::SimulationConfig;
use crate::elevator::car::{Elevator, Timer};
use crate::shared::ElevatorStatus;
use crossbeam_channel as cbc;
use log::{debug, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;

/**
 * Drives the timed transitions of one elevator.
 *
 * The `ElevatorFSM` runs on its own thread and owns the single outstanding
 * timer of its elevator. Transitions that want a follow-up hand the timer
 * back; request intake, which may start an idle car, forwards its timer
 * through `timer_rx`.
 *
 * # Fields
 * - `elevator`:        Shared elevator state, locked for every transition.
 * - `config`:          Step and door delays.
 * - `timer_rx`:        Receives timers armed outside this thread.
 * - `state_tx`:        Publishes a status snapshot after every transition.
 * - `terminate_rx`:    Stops the thread.
 * - `pending`:         The armed timer and the instant it fires.
 */
pub struct ElevatorFSM {
    elevator: Arc<Mutex<Elevator>>,
    config: SimulationConfig,

    // Coordinator channels
    timer_rx: cbc::Receiver<Timer>,
    state_tx: cbc::Sender<(String, ElevatorStatus)>,
    terminate_rx: cbc::Receiver<()>,

    // Private fields
    id: String,
    pending: Option<(Timer, Instant)>,
}

impl ElevatorFSM {
    pub fn new(
        elevator: Arc<Mutex<Elevator>>,
        config: &SimulationConfig,
        timer_rx: cbc::Receiver<Timer>,
        state_tx: cbc::Sender<(String, ElevatorStatus)>,
        terminate_rx: cbc::Receiver<()>,
    ) -> ElevatorFSM {
        let id = elevator.lock().id().to_string();
        ElevatorFSM {
            elevator,
            config: config.clone(),
            timer_rx,
            state_tx,
            terminate_rx,
            id,
            pending: None,
        }
    }

    pub fn run(mut self) {
        loop {
            let deadline = match self.pending {
                Some((_, at)) => cbc::at(at),
                None => cbc::never(),
            };

            cbc::select! {
                recv(self.timer_rx) -> timer => {
                    match timer {
                        Ok(t) => self.arm(t),
                        Err(_) => break,
                    }
                }
                recv(deadline) -> _ => self.fire(),
                recv(self.terminate_rx) -> _ => break,
            }
        }
        debug!("{}: timer thread stopped", self.id);
    }

    fn arm(&mut self, timer: Timer) {
        if let Some((armed, _)) = self.pending {
            warn!(
                "{}: {:?} armed while {:?} still pending, replacing",
                self.id, timer, armed
            );
        }
        self.pending = Some((timer, Instant::now() + timer.delay(&self.config)));
    }

    fn fire(&mut self) {
        let timer = match self.pending.take() {
            Some((timer, _)) => timer,
            None => return,
        };

        // Publish under the lock so snapshots leave in transition order
        let next = {
            let mut elevator = self.elevator.lock();
            let next = match timer {
                Timer::Step => elevator.advance_step(),
                Timer::DoorClose => elevator.close_door(),
            };
            debug!(
                "{}: {:?} fired, {:?} at floor {}",
                self.id,
                timer,
                elevator.behaviour(),
                elevator.floor()
            );
            let _ = self.state_tx.send((self.id.clone(), elevator.status()));
            next
        };

        if let Some(next) = next {
            self.arm(next);
        }
    }
}
