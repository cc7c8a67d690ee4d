//! Advent of Code 2015
//! Day 1: Not Quite Lisp
//! https://adventofcode.com/2015/day/1

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, title = "Not Quite Lisp", tags = ["easy"])]
pub struct Day01;

impl AocParser for Day01 {
    /// One step per instruction: `+1` for `(`, `-1` for `)`
    type SharedData<'a> = Vec<i8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .char_indices()
            .map(|(pos, c)| match c {
                '(' => Ok(1),
                ')' => Ok(-1),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected {:?} at position {}",
                    other,
                    pos + 1
                ))),
            })
            .collect()
    }
}

impl PartSolver<1> for Day01 {
    fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(floors(steps).last().unwrap_or(0).to_string())
    }
}

impl PartSolver<2> for Day01 {
    fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        floors(steps)
            .position(|floor| floor < 0)
            .map(|pos| (pos + 1).to_string())
            .ok_or_else(|| SolveError::failed("Santa never enters the basement"))
    }
}

/// Floor reached after each instruction
fn floors(steps: &[i8]) -> impl Iterator<Item = i64> + '_ {
    steps.iter().scan(0i64, |floor, &step| {
        *floor += i64::from(step);
        Some(*floor)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    fn solve(input: &str, part: u8) -> Result<String, SolveError> {
        let mut steps = Day01::parse(input).unwrap();
        Day01::solve_part(&mut steps, part)
    }

    #[test]
    fn test_final_floor() {
        for (input, floor) in [
            ("(())", "0"),
            ("()()", "0"),
            ("(((", "3"),
            ("(()(()(", "3"),
            ("))(((((", "3"),
            ("())", "-1"),
            ("))(", "-1"),
            (")))", "-3"),
            (")())())", "-3"),
            ("", "0"),
        ] {
            assert_eq!(solve(input, 1).unwrap(), floor, "input {:?}", input);
        }
    }

    #[test]
    fn test_basement_position() {
        assert_eq!(solve(")", 2).unwrap(), "1");
        assert_eq!(solve("()())", 2).unwrap(), "5");
        assert!(matches!(solve("(((", 2), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_trailing_newline_ignored() {
        assert_eq!(solve("(((()))))(((((\n", 1).unwrap(), "4");
        assert_eq!(solve("(((()))))(((((\n", 2).unwrap(), "9");
    }

    #[test]
    fn test_rejects_other_characters() {
        assert!(matches!(
            Day01::parse("(()x"),
            Err(ParseError::InvalidFormat(msg)) if msg.contains("position 4")
        ));
    }
}
