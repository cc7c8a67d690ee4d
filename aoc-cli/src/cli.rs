//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all days in order (default)
    #[default]
    Sequential,
    /// Parallelize across years; days and parts run sequentially within each year
    Year,
    /// Parallelize across year/day combinations; parts run sequentially
    Day,
}

/// Which days of a year to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DaySelector {
    #[default]
    All,
    Day(u8),
}

impl FromStr for DaySelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match s.parse::<u8>() {
            Ok(day @ 1..=25) => Ok(Self::Day(day)),
            _ => Err(format!("expected a day between 1 and 25 or `all`, got `{}`", s)),
        }
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Day(day) => write!(f, "{}", day),
        }
    }
}

/// Advent of Code archive: run solutions and keep the README index current
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solutions", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run solutions for a year and day selection
    Run(RunArgs),
    /// Regenerate the README index from the solution sources
    Readme(ReadmeArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Year to run (runs every registered year if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(2015..))]
    pub year: Option<u16>,

    /// Day to run, or `all`
    #[arg(short, long, default_value = "all")]
    pub day: DaySelector,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solutions (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Input file to use instead of the stored one (single day only)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding `<year>/<DD>-input.txt` files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, or day
    #[arg(long, value_enum, default_value = "sequential")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not print the puzzle title before each day
    #[arg(long = "no-show-description", action = ArgAction::SetFalse)]
    pub show_description: bool,
}

#[derive(clap::Args, Debug)]
pub struct ReadmeArgs {
    /// Repository root; other paths are relative to it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory containing the `year_YYYY` solution modules
    #[arg(long, default_value = "aoc-solutions/src")]
    pub solutions: PathBuf,

    /// Markdown template with an `{index}` line (built-in template if omitted)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// README file to write
    #[arg(short, long, default_value = "README.md")]
    pub output: PathBuf,

    /// Only check that the README is up to date; write nothing
    #[arg(long)]
    pub check: bool,
}
