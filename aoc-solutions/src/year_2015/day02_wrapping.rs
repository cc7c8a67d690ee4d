//! Advent of Code 2015
//! Day 2: I Was Told There Would Be No Math
//! https://adventofcode.com/2015/day/2

use crate::utils::parse::parse_lines;
use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 2, title = "I Was Told There Would Be No Math", tags = ["easy"])]
pub struct Day02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present {
    length: u64,
    width: u64,
    height: u64,
}

impl Present {
    /// Sides sorted ascending
    fn sides(&self) -> [u64; 3] {
        let mut sides = [self.length, self.width, self.height];
        sides.sort_unstable();
        sides
    }

    /// Surface area plus the area of the smallest side as slack; `None` on overflow
    fn paper(&self) -> Option<u64> {
        let [a, b, c] = self.sides();
        let (ab, bc, ca) = (a.checked_mul(b)?, b.checked_mul(c)?, c.checked_mul(a)?);
        ab.checked_add(bc)?
            .checked_add(ca)?
            .checked_mul(2)?
            .checked_add(ab)
    }

    /// Smallest perimeter plus the volume for the bow; `None` on overflow
    fn ribbon(&self) -> Option<u64> {
        let [a, b, c] = self.sides();
        let volume = a.checked_mul(b)?.checked_mul(c)?;
        a.checked_add(b)?.checked_mul(2)?.checked_add(volume)
    }
}

impl AocParser for Day02 {
    type SharedData<'a> = Vec<Present>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let dims = line
                .split('x')
                .map(str::parse::<u64>)
                .collect::<Result<Vec<_>, _>>()?;
            match dims[..] {
                [length, width, height] => Ok(Present {
                    length,
                    width,
                    height,
                }),
                _ => Err(anyhow!("expected LxWxH, got {:?}", line)),
            }
        })
    }
}

impl PartSolver<1> for Day02 {
    fn solve(presents: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(presents, Present::paper)
    }
}

impl PartSolver<2> for Day02 {
    fn solve(presents: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(presents, Present::ribbon)
    }
}

fn total(
    presents: &[Present],
    amount: fn(&Present) -> Option<u64>,
) -> Result<String, SolveError> {
    presents
        .iter()
        .try_fold(0u64, |sum, present| sum.checked_add(amount(present)?))
        .map(|sum| sum.to_string())
        .ok_or_else(|| SolveError::failed("order is too large to total in 64 bits"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    #[test]
    fn test_single_presents() {
        let presents = Day02::parse("2x3x4\n1x1x10").unwrap();
        assert_eq!(presents[0].paper(), Some(58));
        assert_eq!(presents[1].paper(), Some(43));
        assert_eq!(presents[0].ribbon(), Some(34));
        assert_eq!(presents[1].ribbon(), Some(14));
    }

    #[test]
    fn test_totals() {
        let mut presents = Day02::parse("2x3x4\n1x1x10\n").unwrap();
        assert_eq!(Day02::solve_part(&mut presents, 1).unwrap(), "101");
        assert_eq!(Day02::solve_part(&mut presents, 2).unwrap(), "48");
    }

    #[test]
    fn test_huge_dimensions_fail_instead_of_overflowing() {
        let mut presents = Day02::parse("4294967296x4294967296x1").unwrap();
        assert!(matches!(
            Day02::solve_part(&mut presents, 1),
            Err(SolveError::SolveFailed(_))
        ));
        assert!(matches!(
            Day02::solve_part(&mut presents, 2),
            Err(SolveError::SolveFailed(_))
        ));

        let mut presents = Day02::parse("3000000x1x1\n18446744073709551615x1x1").unwrap();
        assert!(Day02::solve_part(&mut presents, 2).is_err());
    }

    #[test]
    fn test_malformed_dimensions() {
        assert!(Day02::parse("2x3").is_err());
        assert!(Day02::parse("2x3x4\n2xAx4").is_err());
    }
}
