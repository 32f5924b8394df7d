pub mod error;
pub mod macros;
pub mod structs;

pub use error::ElevatorError;
pub use structs::Behaviour;
pub use structs::Direction;
pub use structs::ElevatorStatus;
pub use structs::RequestReply;
