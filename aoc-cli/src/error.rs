//! Error types for the CLI

use aoc_solver::PuzzleId;
use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Solver error; a single-day run of an unimplemented day ends here
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// README generation error
    #[error("README error: {0}")]
    Readme(#[from] ReadmeError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),

    /// Some selected parts did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),

    /// Parsing or solving failed
    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one
    ///
    /// Nested `Multiple` lists are flattened, keeping `first` before `second`.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Input loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for the puzzle
    #[error("input for {puzzle} not found at {}", .path.display())]
    NotFound { puzzle: PuzzleId, path: PathBuf },

    /// The file exists but could not be read as text
    #[error("failed to read input {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// README generation errors
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// IO error on a specific path
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A day file without a usable header; skipped with a warning
    #[error("{}: {reason}", .path.display())]
    Description { path: PathBuf, reason: String },

    /// A header naming a different puzzle than the file's location
    #[error("{} is filed as {expected} but its header says {found}", .path.display())]
    Mismatch {
        path: PathBuf,
        expected: PuzzleId,
        found: PuzzleId,
    },

    /// Two day files for the same puzzle
    #[error("{} is a second file for {puzzle}", .path.display())]
    Duplicate { path: PathBuf, puzzle: PuzzleId },

    /// The template has no line to put the index on
    #[error("template has no `{{index}}` line")]
    MissingPlaceholder,

    /// `--check` found a stale README
    #[error("{} is out of date; run `aoc readme` to regenerate it", .0.display())]
    OutOfDate(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(n: u8) -> ArcExecutorError {
        ExecutorError::ThreadPool(n.to_string()).into()
    }

    fn messages(err: &ArcExecutorError) -> Vec<String> {
        match err.inner() {
            ExecutorError::Multiple(v) => v.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }

    #[test]
    fn test_combine_flattens_in_order() {
        let ab = ArcExecutorError::combine(single(1), single(2));
        let cd = ArcExecutorError::combine(single(3), single(4));
        let all = ArcExecutorError::combine(ab.clone(), cd);
        assert_eq!(messages(&all).len(), 4);
        assert!(messages(&all)[0].ends_with('1'));
        assert!(messages(&all)[3].ends_with('4'));

        let prepended = ArcExecutorError::combine(single(0), ab.clone());
        assert!(messages(&prepended)[0].ends_with('0'));
        let appended = ArcExecutorError::combine(ab, single(9));
        assert!(messages(&appended)[2].ends_with('9'));
    }

    #[test]
    fn test_combine_opt() {
        let only = ArcExecutorError::combine_opt(None, single(1));
        assert!(matches!(only.inner(), ExecutorError::ThreadPool(_)));
        let both = ArcExecutorError::combine_opt(Some(only), single(2));
        assert_eq!(both.to_string(), "Multiple errors occurred (2 total)");
    }

    #[test]
    fn test_not_found_names_path() {
        let err = InputError::NotFound {
            puzzle: PuzzleId::new(2015, 4).unwrap(),
            path: PathBuf::from("inputs/2015/04-input.txt"),
        };
        assert_eq!(
            err.to_string(),
            "input for 2015/04 not found at inputs/2015/04-input.txt"
        );
    }
}
