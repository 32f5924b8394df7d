/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

const EVEN_FLOORS: [u8; 7] = [0, 2, 4, 6, 8, 10, 12];
const ODD_FLOORS: [u8; 8] = [0, 1, 3, 5, 7, 9, 11, 13];

/**
 * The fixed subset of floors an elevator may stop at.
 *
 * Both sets share the ground floor. Odd elevators reach floor 1 from the
 * ground in a single-floor hop, every other hop covers two floors.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FloorSet {
    Even,
    Odd,
}

impl FloorSet {
    /// Legal floors in ascending order.
    pub fn floors(&self) -> &'static [u8] {
        match *self {
            FloorSet::Even => &EVEN_FLOORS,
            FloorSet::Odd => &ODD_FLOORS,
        }
    }

    pub fn contains(&self, floor: u8) -> bool {
        self.floors().contains(&floor)
    }

    /// Number of floors covered by one movement tick leaving `from` in `direction`.
    pub fn step_size(&self, from: u8, direction: Direction) -> u8 {
        match (*self, from, direction) {
            (FloorSet::Odd, 0, Direction::Up) | (FloorSet::Odd, 1, Direction::Down) => 1,
            _ => 2,
        }
    }

    /// Floor reached after one tick from `from` in `direction`.
    pub fn next_floor(&self, from: u8, direction: Direction) -> u8 {
        let step = self.step_size(from, direction);
        match direction {
            Direction::Up => from.saturating_add(step),
            Direction::Down => from.saturating_sub(step),
        }
    }
}
