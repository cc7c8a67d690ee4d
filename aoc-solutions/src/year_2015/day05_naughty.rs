//! Advent of Code 2015
//! Day 5: Doesn't He Have Intern-Elves For This?
//! https://adventofcode.com/2015/day/5

use crate::utils::parse::parse_lines;
use anyhow::ensure;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, title = "Doesn't He Have Intern-Elves For This?", tags = ["easy", "strings"])]
pub struct Day05;

impl AocParser for Day05 {
    /// The strings, borrowed straight from the input
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            ensure!(
                line.bytes().all(|b| b.is_ascii_lowercase()),
                "expected lowercase letters only, got {:?}",
                line
            );
            Ok(line)
        })
    }
}

impl PartSolver<1> for Day05 {
    fn solve(strings: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(strings.iter().filter(|s| is_nice(s)).count().to_string())
    }
}

impl PartSolver<2> for Day05 {
    fn solve(strings: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(strings.iter().filter(|s| is_nice_2(s)).count().to_string())
    }
}

fn is_nice(s: &str) -> bool {
    let bytes = s.as_bytes();
    let vowels = bytes.iter().filter(|&&b| b"aeiou".contains(&b)).count();
    let has_double = bytes.windows(2).any(|w| w[0] == w[1]);
    let has_forbidden = bytes
        .windows(2)
        .any(|w| matches!(w, b"ab" | b"cd" | b"pq" | b"xy"));
    vowels >= 3 && has_double && !has_forbidden
}

fn is_nice_2(s: &str) -> bool {
    let bytes = s.as_bytes();
    // a pair that appears twice without overlapping
    let has_repeated_pair = (0..bytes.len().saturating_sub(3)).any(|i| {
        let pair = &bytes[i..i + 2];
        bytes[i + 2..].windows(2).any(|w| w == pair)
    });
    let has_sandwich = bytes.windows(3).any(|w| w[0] == w[2]);
    has_repeated_pair && has_sandwich
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    #[test]
    fn test_old_rules() {
        assert!(is_nice("ugknbfddgicrmopn"));
        assert!(is_nice("aaa"));
        assert!(!is_nice("jchzalrnumimnmhp"));
        assert!(!is_nice("haegwjzuvuyypxyu"));
        assert!(!is_nice("dvszwmarrgswjxmb"));
    }

    #[test]
    fn test_new_rules() {
        assert!(is_nice_2("qjhvhtzxzqqjkmpb"));
        assert!(is_nice_2("xxyxx"));
        assert!(!is_nice_2("uurcxstgmygtbstg"));
        assert!(!is_nice_2("ieodomkazucvgmuy"));
        // overlapping pair does not count
        assert!(!is_nice_2("aaa"));
    }

    #[test]
    fn test_counts() {
        let mut old = Day05::parse("ugknbfddgicrmopn\naaa\njchzalrnumimnmhp\nhaegwjzuvuyypxyu\n").unwrap();
        assert_eq!(Day05::solve_part(&mut old, 1).unwrap(), "2");

        let mut new = Day05::parse("qjhvhtzxzqqjkmpb\nxxyxx\nuurcxstgmygtbstg\nieodomkazucvgmuy").unwrap();
        assert_eq!(Day05::solve_part(&mut new, 2).unwrap(), "2");
    }

    #[test]
    fn test_rejects_non_letters() {
        assert!(Day05::parse("abc\nab1").is_err());
    }
}
