pub mod car;
pub mod event_log;
pub mod floors;
pub mod fsm;
pub mod trace;
pub mod trace_tests;

pub use car::Elevator;
pub use car::Timer;
pub use floors::FloorSet;
pub use fsm::ElevatorFSM;
pub use trace::path_trace;
