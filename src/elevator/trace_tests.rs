/*
 * Unit tests for floor topology and path traces
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_floor_sets_are_ascending
 * - test_step_size_ground_exception
 * - test_trace_same_floor
 * - test_trace_scenarios
 * - test_trace_all_legal_pairs
 * - test_trace_illegal_input_terminates
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod trace_tests {
    use crate::elevator::path_trace;
    use crate::elevator::FloorSet::{self, Even, Odd};
    use crate::shared::Direction::{Down, Up};

    fn floors_of(trace: &str) -> Vec<u8> {
        trace
            .split('>')
            .map(|label| label.trim_start_matches('q').parse().unwrap())
            .collect()
    }

    #[test]
    fn test_floor_sets_are_ascending() {
        assert_eq!(Even.floors(), &[0, 2, 4, 6, 8, 10, 12]);
        assert_eq!(Odd.floors(), &[0, 1, 3, 5, 7, 9, 11, 13]);

        assert!(Odd.contains(0));
        assert!(Odd.contains(13));
        assert!(!Odd.contains(2));
        assert!(!Even.contains(1));
        assert!(!Even.contains(14));
    }

    #[test]
    fn test_step_size_ground_exception() {
        // Purpose: Only odd elevators moving between floor 0 and 1 take a single-floor step

        assert_eq!(Odd.step_size(0, Up), 1);
        assert_eq!(Odd.step_size(1, Down), 1);
        assert_eq!(Odd.step_size(1, Up), 2);
        assert_eq!(Odd.step_size(3, Down), 2);
        assert_eq!(Even.step_size(0, Up), 2);
        assert_eq!(Even.step_size(2, Down), 2);

        assert_eq!(Odd.next_floor(0, Up), 1);
        assert_eq!(Odd.next_floor(3, Down), 1);
        assert_eq!(Even.next_floor(4, Down), 2);
    }

    #[test]
    fn test_trace_same_floor() {
        for floor_set in [Even, Odd] {
            for &floor in floor_set.floors() {
                assert_eq!(path_trace(floor_set, floor, floor), format!("q{}", floor));
            }
        }
    }

    #[test]
    fn test_trace_scenarios() {
        assert_eq!(path_trace(Odd, 0, 1), "q0>q1");
        assert_eq!(path_trace(Odd, 1, 0), "q1>q0");
        assert_eq!(path_trace(Odd, 0, 5), "q0>q1>q3>q5");
        assert_eq!(path_trace(Odd, 5, 0), "q5>q3>q1>q0");
        assert_eq!(path_trace(Even, 0, 6), "q0>q2>q4>q6");
        assert_eq!(path_trace(Even, 12, 8), "q12>q10>q8");
    }

    #[test]
    fn test_trace_all_legal_pairs() {
        // Purpose: Every trace starts and ends at the right floor and moves one legal step at a time

        for floor_set in [Even, Odd] {
            for &start in floor_set.floors() {
                for &end in floor_set.floors() {
                    // Act
                    let floors = floors_of(&path_trace(floor_set, start, end));

                    // Assert
                    assert_eq!(floors.first(), Some(&start));
                    assert_eq!(floors.last(), Some(&end));
                    for pair in floors.windows(2) {
                        let (from, to) = (pair[0], pair[1]);
                        assert!(floor_set.contains(to), "{:?} visited {}", floor_set, to);

                        let delta = if to > from { to - from } else { from - to };
                        let crosses_ground = floor_set == FloorSet::Odd && from.max(to) == 1 && from.min(to) == 0;
                        let expected = if crosses_ground { 1 } else { 2 };
                        assert_eq!(delta, expected, "{:?} {} -> {}", floor_set, from, to);
                    }
                }
            }
        }
    }

    #[test]
    fn test_trace_illegal_input_terminates() {
        // Purpose: A floor outside the set must not send the walk past its end forever

        assert_eq!(path_trace(Even, 0, 3), "q0>q2>q4");
        assert_eq!(path_trace(Even, 1, 0), "q1>q0");
    }
}
