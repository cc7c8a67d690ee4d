//! Configuration resolution from CLI args

use crate::cli::{DaySelector, ParallelizeBy, ReadmeArgs, RunArgs};
use crate::error::CliError;
use aoc_solver::PuzzleId;
use std::path::{Path, PathBuf};

/// Resolved configuration for `aoc run`
#[derive(Debug)]
pub struct RunConfig {
    /// Year filter (None = every registered year)
    pub year_filter: Option<u16>,
    pub day: DaySelector,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a day must carry to be run
    pub tags: Vec<String>,
    /// Root of the stored inputs, with `~` expanded
    pub input_dir: PathBuf,
    /// Input file replacing the stored one, single-day mode only
    pub input_override: Option<PathBuf>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
    pub show_description: bool,
}

impl RunConfig {
    /// Build config from CLI args, rejecting inconsistent combinations
    pub fn from_args(args: RunArgs) -> Result<Self, CliError> {
        if let (Some(year), DaySelector::Day(day)) = (args.year, args.day) {
            PuzzleId::new(year, day).map_err(|e| CliError::Config(e.to_string()))?;
        }

        let single = args.year.is_some() && matches!(args.day, DaySelector::Day(_));
        if args.input.is_some() && !single {
            return Err(CliError::Config(
                "--input needs a single day: pass both --year and --day".to_string(),
            ));
        }

        if args.threads == Some(0) {
            return Err(CliError::Config("--threads must be at least 1".to_string()));
        }

        Ok(RunConfig {
            year_filter: args.year,
            day: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_override: args.input.as_deref().map(expand_tilde),
            thread_count: args.threads.unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            show_description: args.show_description,
        })
    }

    /// The one puzzle selected, when both a year and a day were given
    pub fn single_day(&self) -> Option<PuzzleId> {
        match (self.year_filter, self.day) {
            (Some(year), DaySelector::Day(day)) => PuzzleId::new(year, day).ok(),
            _ => None,
        }
    }
}

/// Resolved configuration for `aoc readme`
#[derive(Debug)]
pub struct ReadmeConfig {
    pub root: PathBuf,
    /// Solutions directory, resolved against `root`
    pub solutions_dir: PathBuf,
    pub template: Option<PathBuf>,
    /// README path, resolved against `root`
    pub output: PathBuf,
    pub check: bool,
}

impl ReadmeConfig {
    pub fn from_args(args: ReadmeArgs) -> Self {
        let root = expand_tilde(&args.root);
        ReadmeConfig {
            solutions_dir: root.join(&args.solutions),
            output: root.join(&args.output),
            template: args.template.as_deref().map(expand_tilde),
            root,
            check: args.check,
        }
    }
}

/// Expand ~ to home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
