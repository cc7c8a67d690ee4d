//! Input loader for the puzzle inputs stored alongside the archive

use crate::error::InputError;
use aoc_solver::PuzzleId;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based store of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}/{day:02}-input.txt`
#[derive(Debug, Clone)]
pub struct InputLoader {
    input_dir: PathBuf,
    /// Replaces the stored file for every puzzle; only set for single-day runs
    override_path: Option<PathBuf>,
}

impl InputLoader {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            override_path: None,
        }
    }

    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        self.override_path = path;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Get the input path for a puzzle
    pub fn input_path(&self, puzzle: PuzzleId) -> PathBuf {
        match &self.override_path {
            Some(path) => path.clone(),
            None => self
                .input_dir
                .join(puzzle.year().to_string())
                .join(format!("{:02}-input.txt", puzzle.day())),
        }
    }

    /// Check if an input is present
    #[cfg(test)]
    pub fn contains(&self, puzzle: PuzzleId) -> bool {
        self.input_path(puzzle).is_file()
    }

    /// Read the raw input text exactly as stored
    ///
    /// # Returns
    /// * `Err(InputError::NotFound)` - there is no file at the expected path
    /// * `Err(InputError::Read)` - any other I/O failure, including invalid UTF-8
    pub fn load(&self, puzzle: PuzzleId) -> Result<String, InputError> {
        let path = self.input_path(puzzle);
        tracing::debug!(%puzzle, path = %path.display(), "loading input");
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::NotFound { puzzle, path },
            _ => InputError::Read { path, source },
        })
    }
}
