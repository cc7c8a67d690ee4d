//! Advent of Code 2015
//! Day 6: Probably a Fire Hazard
//! https://adventofcode.com/2015/day/6

use crate::utils::parse::{parse_line, parse_lines};
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 6, title = "Probably a Fire Hazard", tags = ["grid"])]
pub struct Day06;

const SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

/// An action over an inclusive rectangle of lights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    action: Action,
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
}

impl Instruction {
    fn from_line(line: &str) -> anyhow::Result<Self> {
        let (action, rect) = [
            ("turn on ", Action::TurnOn),
            ("turn off ", Action::TurnOff),
            ("toggle ", Action::Toggle),
        ]
        .into_iter()
        .find_map(|(prefix, action)| line.strip_prefix(prefix).map(|rest| (action, rest)))
        .ok_or_else(|| anyhow!("unknown instruction {:?}", line))?;

        let coords = parse_line(rect, "$,$ through $,$")?
            .into_iter()
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()?;
        let &[x1, y1, x2, y2] = coords.as_slice() else {
            return Err(anyhow!("expected four coordinates in {:?}", line));
        };
        ensure!(
            x1 <= x2 && y1 <= y2 && x2 < SIZE && y2 < SIZE,
            "rectangle out of bounds in {:?}",
            line
        );

        Ok(Self {
            action,
            x1,
            y1,
            x2,
            y2,
        })
    }

    fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        (self.y1..=self.y2).flat_map(move |y| (self.x1..=self.x2).map(move |x| y * SIZE + x))
    }
}

impl AocParser for Day06 {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, Instruction::from_line)
    }
}

impl PartSolver<1> for Day06 {
    fn solve(instructions: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = vec![false; SIZE * SIZE];
        for instr in instructions.iter() {
            for cell in instr.cells() {
                grid[cell] = match instr.action {
                    Action::TurnOn => true,
                    Action::TurnOff => false,
                    Action::Toggle => !grid[cell],
                };
            }
        }
        Ok(grid.iter().filter(|&&lit| lit).count().to_string())
    }
}

impl PartSolver<2> for Day06 {
    fn solve(instructions: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = vec![0u32; SIZE * SIZE];
        for instr in instructions.iter() {
            for cell in instr.cells() {
                grid[cell] = match instr.action {
                    Action::TurnOn => grid[cell] + 1,
                    Action::TurnOff => grid[cell].saturating_sub(1),
                    Action::Toggle => grid[cell] + 2,
                };
            }
        }
        Ok(grid.iter().map(|&b| u64::from(b)).sum::<u64>().to_string())
    }
}
