use crate::elevator::FloorSet;
use crate::shared::Direction;

const SEPARATOR: &str = ">";

fn label(floor: u8) -> String {
    format!("q{}", floor)
}

/**
 * Renders the floors visited between `start` and `end` as automaton states.
 *
 * Every hop uses the step size of the floor it leaves, so an odd elevator
 * going from the ground to floor 5 reads `q0>q1>q3>q5`. The walk stops as
 * soon as `end` is reached or passed, which keeps illegal inputs finite.
 */
pub fn path_trace(floor_set: FloorSet, start: u8, end: u8) -> String {
    let direction = match Direction::towards(start, end) {
        Some(direction) => direction,
        None => return label(start),
    };

    let mut path = vec![label(start)];
    let mut current = start;
    loop {
        let next = floor_set.next_floor(current, direction);
        if next == current {
            break;
        }
        current = next;
        path.push(label(current));

        let done = match direction {
            Direction::Up => current >= end,
            Direction::Down => current <= end,
        };
        if done {
            break;
        }
    }
    path.join(SEPARATOR)
}
