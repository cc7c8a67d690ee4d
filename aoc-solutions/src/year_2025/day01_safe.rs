//! Advent of Code 2025
//! Day 1: Secret Entrance
//! https://adventofcode.com/2025/day/1

use crate::utils::parse::parse_lines;
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, title = "Secret Entrance", tags = ["easy"])]
pub struct Day01;

const DIAL_SIZE: i32 = 100;
const DIAL_START: i32 = 50;
/// Longest rotation accepted; keeps the dial arithmetic in `i32`
const MAX_DISTANCE: i32 = 1_000_000;

#[derive(Debug)]
pub struct SharedData {
    /// Signed rotations: left is negative
    rotations: Vec<i32>,
    zero_counts: Option<ZeroCounts>,
}

#[derive(Debug, Clone, Copy)]
struct ZeroCounts {
    /// Rotations that leave the dial at 0
    at_rest: u64,
    /// Clicks that land on 0, during or at the end of a rotation
    any_click: u64,
}

impl AocParser for Day01 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rotations = parse_lines(input, |line| {
            let sign = match line.as_bytes().first() {
                Some(b'L') => -1,
                Some(b'R') => 1,
                _ => return Err(anyhow!("rotation must start with 'L' or 'R'")),
            };
            let distance: i32 = line[1..].parse()?;
            ensure!(
                (0..=MAX_DISTANCE).contains(&distance),
                "rotation distance must be between 0 and {}",
                MAX_DISTANCE
            );
            Ok(sign * distance)
        })?;

        Ok(SharedData {
            rotations,
            zero_counts: None,
        })
    }
}

impl PartSolver<1> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).at_rest.to_string())
    }
}

impl PartSolver<2> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).any_click.to_string())
    }
}

/// Simulate the dial once; both parts read from the same pass
fn zero_counts(shared: &mut SharedData) -> ZeroCounts {
    let rotations = &shared.rotations;
    *shared.zero_counts.get_or_insert_with(|| {
        let mut dial = DIAL_START;
        let mut counts = ZeroCounts {
            at_rest: 0,
            any_click: 0,
        };
        for &rotation in rotations {
            let before = dial;
            let unwrapped = dial + rotation;
            if unwrapped <= 0 && before != 0 {
                counts.any_click += 1;
            }
            counts.any_click += u64::from((unwrapped / DIAL_SIZE).unsigned_abs());
            dial = unwrapped.rem_euclid(DIAL_SIZE);
            if dial == 0 {
                counts.at_rest += 1;
            }
        }
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_parse_rotations() {
        let shared = Day01::parse(EXAMPLE).unwrap();
        assert_eq!(
            shared.rotations,
            vec![-68, -30, 48, -5, 60, -55, -1, -99, 14, -82]
        );
    }

    #[test]
    fn test_example() {
        let mut shared = Day01::parse(EXAMPLE).unwrap();
        assert_eq!(Day01::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Day01::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_long_rotation_passes_zero_repeatedly() {
        let mut shared = Day01::parse("R1000").unwrap();
        assert_eq!(Day01::solve_part(&mut shared, 2).unwrap(), "10");
        assert_eq!(Day01::solve_part(&mut shared, 1).unwrap(), "0");

        let mut shared = Day01::parse("L250").unwrap();
        assert_eq!(Day01::solve_part(&mut shared, 2).unwrap(), "3");
    }

    #[test]
    fn test_part_two_reuses_simulation() {
        let mut shared = Day01::parse(EXAMPLE).unwrap();
        assert!(shared.zero_counts.is_none());
        Day01::solve_part(&mut shared, 1).unwrap();
        assert!(shared.zero_counts.is_some());
    }

    #[test]
    fn test_rejects_bad_direction() {
        assert!(Day01::parse("L10\nU5").is_err());
        assert!(Day01::parse("R-5").is_err());
    }

    #[test]
    fn test_rejects_oversized_rotation() {
        assert!(Day01::parse("R2147483647").is_err());
        assert!(Day01::parse("L4294967296").is_err());

        let mut shared = Day01::parse("R1000000").unwrap();
        assert_eq!(Day01::solve_part(&mut shared, 2).unwrap(), "10000");
    }
}
