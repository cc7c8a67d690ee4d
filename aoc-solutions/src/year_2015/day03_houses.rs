//! Advent of Code 2015
//! Day 3: Perfectly Spherical Houses in a Vacuum
//! https://adventofcode.com/2015/day/3

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, title = "Perfectly Spherical Houses in a Vacuum", tags = ["easy", "grid"])]
pub struct Day03;

type Pos = (i32, i32);

impl AocParser for Day03 {
    type SharedData<'a> = Vec<Pos>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| match c {
                '^' => Ok((0, -1)),
                '>' => Ok((1, 0)),
                'v' => Ok((0, 1)),
                '<' => Ok((-1, 0)),
                other => Err(ParseError::InvalidFormat(format!("unknown move {:?}", other))),
            })
            .collect()
    }
}

impl PartSolver<1> for Day03 {
    fn solve(moves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(presents_count(moves, 1).to_string())
    }
}

impl PartSolver<2> for Day03 {
    fn solve(moves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(presents_count(moves, 2).to_string())
    }
}

/// Houses receiving at least one present when `santas` take turns following `moves`
fn presents_count(moves: &[Pos], santas: usize) -> usize {
    let mut visited: HashSet<Pos> = HashSet::from([(0, 0)]);
    for santa in 0..santas {
        let mut pos = (0, 0);
        for &(dx, dy) in moves.iter().skip(santa).step_by(santas) {
            pos = (pos.0 + dx, pos.1 + dy);
            visited.insert(pos);
        }
    }
    visited.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(input: &str, santas: usize) -> usize {
        presents_count(&Day03::parse(input).unwrap(), santas)
    }

    #[test]
    fn test_santa_alone() {
        assert_eq!(count(">", 1), 2);
        assert_eq!(count("^>v<", 1), 4);
        assert_eq!(count("^v^v^v^v^v", 1), 2);
    }

    #[test]
    fn test_with_robo_santa() {
        assert_eq!(count("^v", 2), 3);
        assert_eq!(count("^>v<", 2), 3);
        assert_eq!(count("^v^v^v^v^v", 2), 11);
    }

    #[test]
    fn test_unknown_move() {
        assert!(Day03::parse("^>x").is_err());
    }
}
