/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde_json::json;
use serde_json::Value;
use std::num::IntErrorKind;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::Coordinator;
use crate::shared::{ElevatorError, RequestReply};

const HELP: &str = "commands: list | validate <id> <floor> | request <id> <floor> | status <id> | quit";

/// One line typed on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Validate(String, i64),
    Request(String, i64),
    Status(String),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["list"] => Ok(Command::List),
            ["help"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["status", id] => Ok(Command::Status(id.to_string())),
            ["validate", id, floor] => Ok(Command::Validate(id.to_string(), parse_floor(floor)?)),
            ["request", id, floor] => Ok(Command::Request(id.to_string(), parse_floor(floor)?)),
            _ => Err(format!("unrecognised command '{}'", line.trim())),
        }
    }
}

/// Any integer is a floor number; whether the car serves it is decided later.
fn parse_floor(word: &str) -> Result<i64, String> {
    match word.parse::<i64>() {
        Ok(floor) => Ok(floor),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("'{}' is not a floor number", word)),
        },
    }
}

fn request_floor(coordinator: &Coordinator, id: &str, floor: i64) -> Result<(), ElevatorError> {
    match u8::try_from(floor) {
        Ok(floor) => coordinator.request_floor(id, floor),
        Err(_) => {
            coordinator.floors(id)?;
            Err(ElevatorError::InvalidFloor {
                elevator: id.to_string(),
                floor,
            })
        }
    }
}

/**
 * Answers a command with the JSON object a client would get back.
 *
 * Returns `None` for `quit`.
 */
pub fn handle(coordinator: &Coordinator, command: Command) -> Option<Value> {
    let reply = match command {
        Command::List => {
            let elevators: Vec<Value> = coordinator
                .elevator_ids()
                .into_iter()
                .map(|id| {
                    let floors = coordinator.floors(&id).unwrap_or_default();
                    json!({ "id": id, "floors": floors })
                })
                .collect();
            json!({ "elevators": elevators })
        }
        Command::Validate(id, floor) => {
            let valid = u8::try_from(floor)
                .map(|floor| coordinator.validate_floor(&id, floor))
                .unwrap_or(false);
            json!({ "valid": valid })
        }
        Command::Request(id, floor) => {
            let reply = RequestReply::from(request_floor(coordinator, &id, floor));
            json!(reply)
        }
        Command::Status(id) => match coordinator.get_status(&id) {
            Ok(status) => json!(status),
            Err(e) => json!({ "error": e.to_string() }),
        },
        Command::Help => json!({ "help": HELP }),
        Command::Quit => return None,
    };
    Some(reply)
}

/// Reply for a line that did not parse as a command.
pub fn parse_error_reply(message: String) -> Value {
    json!({ "error": message })
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::config::Config;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("  status E2 "), Ok(Command::Status("E2".into())));
        assert_eq!(Command::parse("request E3 7"), Ok(Command::Request("E3".into(), 7)));
        assert_eq!(Command::parse("validate E1 4"), Ok(Command::Validate("E1".into(), 4)));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert!(Command::parse("request E3 seven").is_err());
        assert_eq!(Command::parse("request E3 -1"), Ok(Command::Request("E3".into(), -1)));
        assert_eq!(
            Command::parse("validate E1 99999999999999999999"),
            Ok(Command::Validate("E1".into(), i64::MAX))
        );
        assert!(Command::parse("request E3 1.5").is_err());
        assert!(Command::parse("jump").is_err());
    }

    #[test]
    fn test_handle_replies_as_json() {
        // Arrange
        let (state_tx, _state_rx) = unbounded();
        let coordinator = Coordinator::new(&Config::default(), state_tx).unwrap();

        // Act
        let invalid = handle(&coordinator, Command::Request("E1".into(), 3)).unwrap();
        let valid = handle(&coordinator, Command::Validate("E3".into(), 1)).unwrap();
        let unknown = handle(&coordinator, Command::Status("E7".into())).unwrap();
        let status = handle(&coordinator, Command::Status("E2".into())).unwrap();
        let quit = handle(&coordinator, Command::Quit);

        // Assert
        assert_eq!(
            invalid,
            json!({ "success": false, "message": "Invalid floor for this elevator." })
        );
        assert_eq!(valid, json!({ "valid": true }));
        assert_eq!(unknown, json!({ "error": "Invalid elevator id" }));
        assert_eq!(status["current_floor"], json!(0));
        assert_eq!(status["direction"], Value::Null);
        assert_eq!(status["dfa_trace"], json!(""));
        assert!(quit.is_none());
    }

    #[test]
    fn test_handle_out_of_range_floors() {
        // Purpose: Floors outside 0..=255 still get a JSON answer, not a parse error

        // Arrange
        let (state_tx, _state_rx) = unbounded();
        let coordinator = Coordinator::new(&Config::default(), state_tx).unwrap();
        let invalid_floor = json!({ "success": false, "message": "Invalid floor for this elevator." });

        // Act
        let validate_high = Command::parse("validate E1 300").map(|c| handle(&coordinator, c));
        let validate_low = Command::parse("validate E3 -1").map(|c| handle(&coordinator, c));
        let request_high = Command::parse("request E1 300").map(|c| handle(&coordinator, c));
        let request_low = Command::parse("request E3 -1").map(|c| handle(&coordinator, c));
        let request_unknown = handle(&coordinator, Command::Request("E9".into(), -1));

        // Assert
        assert_eq!(validate_high, Ok(Some(json!({ "valid": false }))));
        assert_eq!(validate_low, Ok(Some(json!({ "valid": false }))));
        assert_eq!(request_high, Ok(Some(invalid_floor.clone())));
        assert_eq!(request_low, Ok(Some(invalid_floor)));
        assert_eq!(
            request_unknown,
            Some(json!({ "success": false, "message": "Invalid elevator id" }))
        );
        assert!(coordinator.get_status("E1").unwrap().log.is_empty());
        assert!(coordinator.get_status("E3").unwrap().log.is_empty());
    }

    #[test]
    fn test_parse_error_reply() {
        let reply = parse_error_reply("'x' is not a floor number".into());

        assert_eq!(reply, json!({ "error": "'x' is not a floor number" }));
    }
}
